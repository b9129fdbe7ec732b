//! Create `subject` table. `uri` and `meet` point at course material and the
//! virtual classroom; both are optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string_len(Subject::Name, 128).not_null())
                    .col(ColumnDef::new(Subject::Uri).string_len(512).null())
                    .col(ColumnDef::new(Subject::Meet).string_len(512).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Subject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Subject { Table, Id, Name, Uri, Meet }
