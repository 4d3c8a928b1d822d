use sea_orm::entity::prelude::*;

/// A faculty of a university.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faculties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub university_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::universities::Entity",
        from = "Column::UniversityId",
        to = "super::universities::Column::Id"
    )]
    University,
    #[sea_orm(has_many = "super::moderator_profiles::Entity")]
    ModeratorProfiles,
    #[sea_orm(has_many = "super::student_profiles::Entity")]
    StudentProfiles,
    #[sea_orm(has_many = "super::department_faculties::Entity")]
    DepartmentFaculties,
}

impl Related<super::universities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl Related<super::moderator_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModeratorProfiles.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl Related<super::department_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentFaculties.def()
    }
}

/// Many-to-many through `department_faculties`.
impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        super::department_faculties::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::department_faculties::Relation::Faculty.def().rev())
    }
}

/// Courses offered by this faculty's departments. Only resolves through an
/// existing `department_faculties` row keyed on this faculty.
pub struct CourseDepartmentFacultiesLink;

impl Linked for CourseDepartmentFacultiesLink {
    type FromEntity = Entity;
    type ToEntity = super::course_department_faculties::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            Relation::DepartmentFaculties.def(),
            super::department_faculties::Relation::CourseDepartmentFaculties.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
