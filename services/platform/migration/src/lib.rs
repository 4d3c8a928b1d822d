use sea_orm_migration::prelude::*;

mod m20250901_000001_create_academic_structure;
mod m20250901_000002_create_users_and_profiles;
mod m20250901_000003_create_memberships;
mod m20250901_000004_create_content;
mod m20250901_000005_create_engagement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_academic_structure::Migration),
            Box::new(m20250901_000002_create_users_and_profiles::Migration),
            Box::new(m20250901_000003_create_memberships::Migration),
            Box::new(m20250901_000004_create_content::Migration),
            Box::new(m20250901_000005_create_engagement::Migration),
        ]
    }
}
