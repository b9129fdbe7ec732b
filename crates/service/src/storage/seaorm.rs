use async_trait::async_trait;
use chrono::Utc;
use configs::SubjectListing;
use models::errors::is_unique_violation;
use models::{career, career_subject, student, student_career, student_career_subject};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait, Set, Statement, TransactionTrait,
};
use tracing::debug;

use super::{
    ProfessorshipSchedule, Storage, StorageError, StudentSubject, StudentSubjectUpdate, SubjectDetails,
};

const STUDENT_SUBJECTS_ALL: &str = r#"SELECT cs.subject_id,
       s.name,
       cs.correlative_id,
       cs.subject_type,
       COALESCE(scs.status, $3) AS status,
       scs.description
FROM student AS st
         INNER JOIN career_subject cs ON cs.career_id = $2
         INNER JOIN subject s ON s.id = cs.subject_id
         LEFT JOIN student_career_subject scs ON scs.student_id = st.id AND scs.career_subject_id = cs.id
WHERE st.email = $1
ORDER BY cs.subject_id"#;

const STUDENT_SUBJECTS_GRADED: &str = r#"SELECT cs.subject_id,
       s.name,
       cs.correlative_id,
       cs.subject_type,
       scs.status,
       scs.description
FROM student AS st
         INNER JOIN student_career_subject scs ON scs.student_id = st.id
         INNER JOIN career_subject cs ON cs.id = scs.career_subject_id
         INNER JOIN subject s ON s.id = cs.subject_id
WHERE st.email = $1
  AND cs.career_id = $2
ORDER BY cs.subject_id"#;

const SUBJECT_DETAILS: &str = r#"SELECT s.id, s.name, s.uri, s.meet, cs.subject_type, cs.hours, cs.points
FROM career_subject cs
         INNER JOIN subject s ON cs.subject_id = s.id
WHERE s.id = $1
  AND cs.career_id = $2
LIMIT 1"#;

const PROFESSORSHIP_SCHEDULES: &str = r#"SELECT p.name,
       sc.day,
       CAST(sc.start_time AS TEXT) AS start_time,
       CAST(sc.end_time AS TEXT) AS end_time
FROM professorship p
         INNER JOIN schedule sc ON p.id = sc.professorship_id
         INNER JOIN career_subject cs ON p.career_subject_id = cs.id
WHERE cs.subject_id = $1
  AND cs.career_id = $2
ORDER BY sc.day, sc.start_time"#;

#[derive(Debug, FromQueryResult)]
struct StudentSubjectRow {
    subject_id: i32,
    name: String,
    correlative_id: Option<i32>,
    subject_type: String,
    status: String,
    description: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct SubjectDetailsRow {
    id: i32,
    name: String,
    uri: Option<String>,
    meet: Option<String>,
    subject_type: String,
    hours: i32,
    points: i32,
}

#[derive(Debug, FromQueryResult)]
struct ScheduleRow {
    name: String,
    day: i32,
    start_time: String,
    end_time: String,
}

/// PostgreSQL storage. Multi-step writes run inside a `DatabaseTransaction`,
/// which rolls back when dropped without `commit`.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    listing: SubjectListing,
}

impl SeaOrmStorage {
    pub fn new(db: DatabaseConnection, listing: SubjectListing) -> Self {
        Self { db, listing }
    }
}

fn student_not_found(email: &str) -> StorageError {
    StorageError::NotFound(format!("could not find student [email: {email}]"))
}

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn get_student_career_ids(&self, email: &str) -> Result<Vec<i32>, StorageError> {
        let ids: Vec<i32> = student_career::Entity::find()
            .select_only()
            .column(student_career::Column::CareerId)
            .join(JoinType::InnerJoin, student_career::Relation::Student.def())
            .filter(student::Column::Email.eq(email))
            .into_tuple()
            .all(&self.db)
            .await?;
        if ids.is_empty() {
            return Err(StorageError::NotFound(format!("no careers for [email: {email}]")));
        }
        Ok(ids)
    }

    async fn assign_student_to_career(&self, email: &str, career_id: i32) -> Result<(), StorageError> {
        let txn = self.db.begin().await?;

        let student = student::find_by_email(&txn, email)
            .await?
            .ok_or_else(|| student_not_found(email))?;

        let careers = career::Entity::find_by_id(career_id).count(&txn).await?;
        if careers == 0 {
            return Err(StorageError::NotFound(format!("could not find career [id: {career_id}]")));
        }

        let link = student_career::ActiveModel {
            student_id: Set(student.id),
            career_id: Set(career_id),
            ..Default::default()
        };
        link.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::AlreadyExists(format!("student {email} in career {career_id}"))
            } else {
                StorageError::Db(e)
            }
        })?;

        txn.commit().await?;
        debug!(student_id = student.id, career_id, "student_career inserted");
        Ok(())
    }

    async fn get_student_subjects(&self, email: &str, career_id: i32) -> Result<Vec<StudentSubject>, StorageError> {
        let stmt = match self.listing {
            SubjectListing::AllCareerSubjects => Statement::from_sql_and_values(
                DbBackend::Postgres,
                STUDENT_SUBJECTS_ALL,
                [email.into(), career_id.into(), student_career_subject::STATUS_PENDING.into()],
            ),
            SubjectListing::GradedOnly => Statement::from_sql_and_values(
                DbBackend::Postgres,
                STUDENT_SUBJECTS_GRADED,
                [email.into(), career_id.into()],
            ),
        };
        let rows = StudentSubjectRow::find_by_statement(stmt).all(&self.db).await?;
        if rows.is_empty() {
            return Err(StorageError::NotFound(format!(
                "no subjects for [email: {email}, career_id: {career_id}]"
            )));
        }

        Ok(rows
            .into_iter()
            .map(|row| StudentSubject {
                subject_id: row.subject_id,
                name: row.name,
                subject_type: row.subject_type,
                status: row.status,
                description: row.description.filter(|d| !d.is_empty()),
                correlative_id: row.correlative_id,
            })
            .collect())
    }

    async fn get_subject_details(&self, subject_id: i32, career_id: i32) -> Result<SubjectDetails, StorageError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            SUBJECT_DETAILS,
            [subject_id.into(), career_id.into()],
        );
        let row = SubjectDetailsRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                StorageError::NotFound(format!("subject {subject_id} is not part of career {career_id}"))
            })?;

        Ok(SubjectDetails {
            id: row.id,
            name: row.name,
            subject_type: row.subject_type,
            hours: row.hours,
            points: row.points,
            uri: row.uri,
            meet: row.meet,
        })
    }

    async fn get_professorship_schedules(
        &self,
        subject_id: i32,
        career_id: i32,
    ) -> Result<Vec<ProfessorshipSchedule>, StorageError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            PROFESSORSHIP_SCHEDULES,
            [subject_id.into(), career_id.into()],
        );
        let rows = ScheduleRow::find_by_statement(stmt).all(&self.db).await?;
        if rows.is_empty() {
            return Err(StorageError::NotFound(format!(
                "no professorships for [subject_id: {subject_id}, career_id: {career_id}]"
            )));
        }

        Ok(rows
            .into_iter()
            .map(|row| ProfessorshipSchedule {
                name: row.name,
                day: row.day,
                start: row.start_time,
                end: row.end_time,
            })
            .collect())
    }

    async fn update_student_subject(&self, update: &StudentSubjectUpdate) -> Result<(), StorageError> {
        let txn = self.db.begin().await?;

        let student = student::find_by_email(&txn, &update.student_email)
            .await?
            .ok_or_else(|| student_not_found(&update.student_email))?;

        if !student_career::exists(&txn, student.id, update.career_id).await? {
            return Err(StorageError::NotFound(format!(
                "student {} is not assigned to career {}",
                update.student_email, update.career_id
            )));
        }

        let career_subject = career_subject::find(&txn, update.career_id, update.subject_id)
            .await?
            .ok_or_else(|| {
                StorageError::NotFound(format!(
                    "subject {} is not part of career {}",
                    update.subject_id, update.career_id
                ))
            })?;

        let row = student_career_subject::ActiveModel {
            student_id: Set(student.id),
            career_subject_id: Set(career_subject.id),
            status: Set(update.status.clone()),
            description: Set(update.description.clone()),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        student_career_subject::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    student_career_subject::Column::StudentId,
                    student_career_subject::Column::CareerSubjectId,
                ])
                .update_columns([
                    student_career_subject::Column::Status,
                    student_career_subject::Column::Description,
                    student_career_subject::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn create_student(&self, name: &str, email: &str) -> Result<(), StorageError> {
        student::new_active(name, email).insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::AlreadyExists(format!("student [email: {email}]"))
            } else {
                StorageError::Db(e)
            }
        })?;
        Ok(())
    }
}
