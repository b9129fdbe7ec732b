//! Create `schedule`: weekly meetings of a professorship.
//!
//! `day` is 1 (Monday) through 7 (Sunday); times are stored as `TIME`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::ProfessorshipId).not_null())
                    .col(integer(Schedule::Day).not_null())
                    .col(time(Schedule::StartTime).not_null())
                    .col(time(Schedule::EndTime).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_professorship")
                            .from(Schedule::Table, Schedule::ProfessorshipId)
                            .to(Professorship::Table, Professorship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Schedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Schedule { Table, Id, ProfessorshipId, Day, StartTime, EndTime }

#[derive(DeriveIden)]
enum Professorship { Table, Id }
