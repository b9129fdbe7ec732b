use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCareer::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentCareer::Id))
                    .col(integer(StudentCareer::StudentId).not_null())
                    .col(integer(StudentCareer::CareerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_career_student")
                            .from(StudentCareer::Table, StudentCareer::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_career_career")
                            .from(StudentCareer::Table, StudentCareer::CareerId)
                            .to(Career::Table, Career::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StudentCareer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StudentCareer { Table, Id, StudentId, CareerId }

#[derive(DeriveIden)]
enum Student { Table, Id }

#[derive(DeriveIden)]
enum Career { Table, Id }
