use sea_orm::entity::prelude::*;

/// User account. `profileable_type`/`profileable_id` point at one profile row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub email_verified_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Argon2 PHC string, never plaintext.
    pub password: String,
    pub gender: i16,
    pub blocked: bool,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
    pub profileable_type: Option<String>,
    pub profileable_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::tools::Entity")]
    Tools,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::course_posts::Entity")]
    CoursePosts,
    #[sea_orm(has_many = "super::interests::Entity")]
    Interests,
    #[sea_orm(has_many = "super::rates::Entity")]
    Rates,
    #[sea_orm(has_many = "super::department_faculty_users::Entity")]
    DepartmentFacultyUsers,
    #[sea_orm(has_many = "super::course_department_faculty_users::Entity")]
    CourseDepartmentFacultyUsers,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::tools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tools.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::course_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePosts.def()
    }
}

impl Related<super::interests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interests.def()
    }
}

impl Related<super::rates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rates.def()
    }
}

impl Related<super::department_faculty_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFacultyUsers.def()
    }
}

impl Related<super::course_department_faculty_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDepartmentFacultyUsers.def()
    }
}

/// Memberships through `department_faculty_users`.
impl Related<super::department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        super::department_faculty_users::Relation::DepartmentFaculty.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::department_faculty_users::Relation::User.def().rev())
    }
}

/// Memberships through `course_department_faculty_users`.
impl Related<super::course_department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_department_faculty_users::Relation::CourseDepartmentFaculty.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_department_faculty_users::Relation::User.def().rev())
    }
}

/// Events the user marked as interesting (`interests` join), as opposed to
/// the events the user owns.
pub struct InterestedEventsLink;

impl Linked for InterestedEventsLink {
    type FromEntity = Entity;
    type ToEntity = super::events::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            Relation::Interests.def(),
            super::interests::Relation::Event.def(),
        ]
    }
}

/// Comments the user rated (`rates` join), as opposed to the comments the
/// user wrote.
pub struct RatedCommentsLink;

impl Linked for RatedCommentsLink {
    type FromEntity = Entity;
    type ToEntity = super::comments::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Rates.def(), super::rates::Relation::Comment.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
