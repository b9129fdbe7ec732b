//! Migrator registering the university schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_student;
mod m20240301_000002_create_career;
mod m20240301_000003_create_subject;
mod m20240301_000004_create_career_subject;
mod m20240301_000005_create_student_career;
mod m20240301_000006_create_student_career_subject;
mod m20240301_000007_create_professorship;
mod m20240301_000008_create_schedule;
mod m20240301_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_student::Migration),
            Box::new(m20240301_000002_create_career::Migration),
            Box::new(m20240301_000003_create_subject::Migration),
            Box::new(m20240301_000004_create_career_subject::Migration),
            Box::new(m20240301_000005_create_student_career::Migration),
            Box::new(m20240301_000006_create_student_career_subject::Migration),
            Box::new(m20240301_000007_create_professorship::Migration),
            Box::new(m20240301_000008_create_schedule::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000009_add_indexes::Migration),
        ]
    }
}
