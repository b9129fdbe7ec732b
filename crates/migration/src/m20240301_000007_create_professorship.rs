use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professorship::Table)
                    .if_not_exists()
                    .col(pk_auto(Professorship::Id))
                    .col(integer(Professorship::CareerSubjectId).not_null())
                    .col(string_len(Professorship::Name, 128).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professorship_career_subject")
                            .from(Professorship::Table, Professorship::CareerSubjectId)
                            .to(CareerSubject::Table, CareerSubject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Professorship::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Professorship { Table, Id, CareerSubjectId, Name }

#[derive(DeriveIden)]
enum CareerSubject { Table, Id }
