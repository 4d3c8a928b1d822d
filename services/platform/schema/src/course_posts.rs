use sea_orm::entity::prelude::*;

/// A post inside a course offering's board.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_department_faculty_id: Uuid,
    pub body: String,
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

impl ActiveModelBehavior for ActiveModel {}
