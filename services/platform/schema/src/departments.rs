use sea_orm::entity::prelude::*;

/// An academic department, shared between faculties.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::department_faculties::Entity")]
    DepartmentFaculties,
}

impl Related<super::department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFaculties.def()
    }
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        super::department_faculties::Relation::Faculty.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::department_faculties::Relation::Department.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
