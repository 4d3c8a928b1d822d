//! sea-orm entities for the campus platform database.

pub mod admin_profiles;
pub mod comments;
pub mod course_department_faculties;
pub mod course_department_faculty_users;
pub mod course_posts;
pub mod courses;
pub mod department_faculties;
pub mod department_faculty_users;
pub mod departments;
pub mod events;
pub mod faculties;
pub mod interests;
pub mod messages;
pub mod moderator_profiles;
pub mod posts;
pub mod question_tags;
pub mod questions;
pub mod rates;
pub mod student_profiles;
pub mod tags;
pub mod tools;
pub mod universities;
pub mod users;
