pub mod delete_user;
pub mod engagement;
pub mod faculty;
pub mod membership;
pub mod profile;
pub mod question;
pub mod user;
