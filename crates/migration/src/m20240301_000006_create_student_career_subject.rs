//! Create `student_career_subject`: the per-student status of a career subject.
//!
//! Rows are only written through the update-subject-status upsert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCareerSubject::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentCareerSubject::Id))
                    .col(integer(StudentCareerSubject::StudentId).not_null())
                    .col(integer(StudentCareerSubject::CareerSubjectId).not_null())
                    .col(string_len(StudentCareerSubject::Status, 32).not_null())
                    .col(
                        ColumnDef::new(StudentCareerSubject::Description)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        timestamp_with_time_zone(StudentCareerSubject::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scs_student")
                            .from(StudentCareerSubject::Table, StudentCareerSubject::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scs_career_subject")
                            .from(StudentCareerSubject::Table, StudentCareerSubject::CareerSubjectId)
                            .to(CareerSubject::Table, CareerSubject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StudentCareerSubject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StudentCareerSubject { Table, Id, StudentId, CareerSubjectId, Status, Description, UpdatedAt }

#[derive(DeriveIden)]
enum Student { Table, Id }

#[derive(DeriveIden)]
enum CareerSubject { Table, Id }
