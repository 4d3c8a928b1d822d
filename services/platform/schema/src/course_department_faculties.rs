use sea_orm::entity::prelude::*;

/// A course as offered by one department of one faculty.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_department_faculties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub department_faculty_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::department_faculties::Entity",
        from = "Column::DepartmentFacultyId",
        to = "super::department_faculties::Column::Id"
    )]
    DepartmentFaculty,
    #[sea_orm(has_many = "super::course_department_faculty_users::Entity")]
    CourseDepartmentFacultyUsers,
    #[sea_orm(has_many = "super::course_posts::Entity")]
    CoursePosts,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFaculty.def()
    }
}

impl Related<super::course_department_faculty_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDepartmentFacultyUsers.def()
    }
}

impl Related<super::course_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursePosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
