use sea_orm::entity::prelude::*;

/// A course that departments may offer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_department_faculties::Entity")]
    CourseDepartmentFaculties,
}

impl Related<super::course_department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDepartmentFaculties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
