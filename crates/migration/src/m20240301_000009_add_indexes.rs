use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CareerSubject: a subject is offered once per career
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_career_subject_career_subject")
                    .table(CareerSubject::Table)
                    .col(CareerSubject::CareerId)
                    .col(CareerSubject::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // StudentCareer: composite unique (student_id, career_id)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_student_career_student_career")
                    .table(StudentCareer::Table)
                    .col(StudentCareer::StudentId)
                    .col(StudentCareer::CareerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // StudentCareerSubject: conflict target of the status upsert
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_scs_student_career_subject")
                    .table(StudentCareerSubject::Table)
                    .col(StudentCareerSubject::StudentId)
                    .col(StudentCareerSubject::CareerSubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Schedule: lookups by professorship
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedule_professorship")
                    .table(Schedule::Table)
                    .col(Schedule::ProfessorshipId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_career_subject_career_subject").table(CareerSubject::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_student_career_student_career").table(StudentCareer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_scs_student_career_subject").table(StudentCareerSubject::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_schedule_professorship").table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CareerSubject { Table, CareerId, SubjectId }

#[derive(DeriveIden)]
enum StudentCareer { Table, StudentId, CareerId }

#[derive(DeriveIden)]
enum StudentCareerSubject { Table, StudentId, CareerSubjectId }

#[derive(DeriveIden)]
enum Schedule { Table, ProfessorshipId }
