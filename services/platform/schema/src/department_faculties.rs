use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Join row placing a department inside a faculty.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department_faculties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub department_id: Uuid,
    pub faculty_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculty,
    #[sea_orm(has_many = "super::course_department_faculties::Entity")]
    CourseDepartmentFaculties,
    #[sea_orm(has_many = "super::department_faculty_users::Entity")]
    DepartmentFacultyUsers,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::course_department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDepartmentFaculties.def()
    }
}

impl Related<super::department_faculty_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFacultyUsers.def()
    }
}

impl ActiveModel {
    /// New join row with both timestamps set to now.
    pub fn attach(id: Uuid, department_id: Uuid, faculty_id: Uuid) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Set(id),
            department_id: Set(department_id),
            faculty_id: Set(faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
