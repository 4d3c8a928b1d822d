use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Enrollment of a user in a course offering.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_department_faculty_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_department_faculty_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::course_department_faculties::Entity",
        from = "Column::CourseDepartmentFacultyId",
        to = "super::course_department_faculties::Column::Id"
    )]
    CourseDepartmentFaculty,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course_department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDepartmentFaculty.def()
    }
}

impl ActiveModel {
    /// New join row with both timestamps set to now.
    pub fn attach(user_id: Uuid, course_department_faculty_id: Uuid) -> Self {
        let now = chrono::Utc::now();
        Self {
            user_id: Set(user_id),
            course_department_faculty_id: Set(course_department_faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
