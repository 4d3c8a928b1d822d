use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Membership of a user in a department of a faculty.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department_faculty_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub department_faculty_id: Uuid,
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
        belongs_to = "super::department_faculties::Entity",
        from = "Column::DepartmentFacultyId",
        to = "super::department_faculties::Column::Id"
    )]
    DepartmentFaculty,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFaculty.def()
    }
}

impl ActiveModel {
    /// New join row with both timestamps set to now.
    pub fn attach(user_id: Uuid, department_faculty_id: Uuid) -> Self {
        let now = chrono::Utc::now();
        Self {
            user_id: Set(user_id),
            department_faculty_id: Set(department_faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
