//! Create `career_subject`: a subject as offered by a career, with the
//! career-specific type, workload and optional correlative subject.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CareerSubject::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerSubject::Id))
                    .col(integer(CareerSubject::CareerId).not_null())
                    .col(integer(CareerSubject::SubjectId).not_null())
                    .col(string_len(CareerSubject::SubjectType, 32).not_null())
                    .col(integer(CareerSubject::Hours).not_null())
                    .col(integer(CareerSubject::Points).not_null())
                    .col(ColumnDef::new(CareerSubject::CorrelativeId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_career_subject_career")
                            .from(CareerSubject::Table, CareerSubject::CareerId)
                            .to(Career::Table, Career::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_career_subject_subject")
                            .from(CareerSubject::Table, CareerSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CareerSubject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CareerSubject { Table, Id, CareerId, SubjectId, SubjectType, Hours, Points, CorrelativeId }

#[derive(DeriveIden)]
enum Career { Table, Id }

#[derive(DeriveIden)]
enum Subject { Table, Id }
