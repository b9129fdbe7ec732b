use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{
    ProfessorshipsResponse, ScheduleEntry, StudentSubjectsResponse, SubjectDetailsResponse, SubjectStatus,
    UpdateStudentSubjectRequest,
};
use super::schedule::{trim_seconds, Weekday};
use crate::errors::ServiceError;
use crate::storage::{Storage, StorageError, StudentSubjectUpdate};

/// A student may be enrolled in at most this many careers.
pub const MAX_CAREERS: usize = 2;

/// Student business service independent of web framework
pub struct StudentService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> StudentService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Register a student.
    ///
    /// # Examples
    /// ```
    /// use service::storage::mock::MockStorage;
    /// use service::student::StudentService;
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(MockStorage::default()));
    /// tokio_test::block_on(svc.create_student("Ada", "ada@example.com")).unwrap();
    /// let again = tokio_test::block_on(svc.create_student("Ada", "ada@example.com"));
    /// assert!(matches!(again, Err(ServiceError::StudentAlreadyExists)));
    /// ```
    #[instrument(skip(self))]
    pub async fn create_student(&self, name: &str, email: &str) -> Result<(), ServiceError> {
        match self.storage.create_student(name, email).await {
            Ok(()) => {
                info!(email, "student_created");
                Ok(())
            }
            Err(StorageError::AlreadyExists(_)) => Err(ServiceError::StudentAlreadyExists),
            Err(e) => Err(ServiceError::from_storage(format!("could not create student [email: {email}]"), e)),
        }
    }

    /// Enroll a student in a career, at most [`MAX_CAREERS`] at a time.
    ///
    /// # Examples
    /// ```
    /// use service::storage::mock::MockStorage;
    /// use service::student::StudentService;
    /// use std::sync::Arc;
    /// let storage = Arc::new(MockStorage::default().with_student("Ada", "ada@example.com").with_career(1));
    /// let svc = StudentService::new(storage);
    /// tokio_test::block_on(svc.assign_student_to_career("ada@example.com", "1")).unwrap();
    /// ```
    #[instrument(skip(self))]
    pub async fn assign_student_to_career(&self, email: &str, career_id: &str) -> Result<(), ServiceError> {
        let career = parse_id("career id", career_id)?;

        let current = match self.storage.get_student_career_ids(email).await {
            Ok(ids) => ids,
            Err(StorageError::NotFound(_)) => Vec::new(),
            Err(e) => {
                return Err(ServiceError::from_storage(
                    format!("could not get careers from [email: {email}]"),
                    e,
                ))
            }
        };

        if current.contains(&career) {
            return Err(ServiceError::CareerAlreadyAssigned);
        }
        if current.len() >= MAX_CAREERS {
            debug!(careers = current.len(), "career limit reached");
            return Err(ServiceError::MaxCareersReached);
        }

        match self.storage.assign_student_to_career(email, career).await {
            Ok(()) => {
                info!(email, career_id = career, "student_assigned_to_career");
                Ok(())
            }
            Err(StorageError::AlreadyExists(_)) => Err(ServiceError::CareerAlreadyAssigned),
            Err(e) => Err(ServiceError::from_storage(
                format!("could not assign student to career [email: {email}, career_id: {career}]"),
                e,
            )),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_student_subjects(
        &self,
        email: &str,
        career_id: &str,
    ) -> Result<StudentSubjectsResponse, ServiceError> {
        let career = parse_id("career id", career_id)?;
        let rows = self
            .storage
            .get_student_subjects(email, career)
            .await
            .map_err(|e| ServiceError::from_storage(format!("could not get student subjects from [email: {email}]"), e))?;

        let mut response = StudentSubjectsResponse::default();
        for row in rows {
            let key = row.subject_id.to_string();
            let correlatives = response.correlatives.entry(key.clone()).or_default();
            if let Some(id) = row.correlative_id.filter(|id| *id != 0) {
                correlatives.push(id);
            }
            response.subjects.insert(
                key,
                SubjectStatus {
                    id: row.subject_id,
                    name: row.name,
                    subject_type: row.subject_type,
                    status: row.status,
                    description: row.description,
                },
            );
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get_subject_details(
        &self,
        subject_id: &str,
        career_id: &str,
    ) -> Result<SubjectDetailsResponse, ServiceError> {
        let subject = parse_id("subject id", subject_id)?;
        let career = parse_id("career id", career_id)?;
        let details = self
            .storage
            .get_subject_details(subject, career)
            .await
            .map_err(|e| ServiceError::from_storage(format!("could not get subject details from [id: {subject_id}]"), e))?;

        Ok(SubjectDetailsResponse {
            id: details.id,
            hours: details.hours,
            points: details.points,
            name: details.name,
            subject_type: details.subject_type,
            uri: details.uri,
            meet: details.meet,
        })
    }

    /// Weekly schedules grouped by professorship, Monday first.
    ///
    /// Fails when a stored day is outside 1..=7 or a time is not `HH:MM:SS`.
    #[instrument(skip(self))]
    pub async fn get_professorships(
        &self,
        subject_id: &str,
        career_id: &str,
    ) -> Result<ProfessorshipsResponse, ServiceError> {
        let subject = parse_id("subject id", subject_id)?;
        let career = parse_id("career id", career_id)?;
        let rows = self.storage.get_professorship_schedules(subject, career).await.map_err(|e| {
            ServiceError::from_storage(
                format!("could not get professorship schedules from [subject_id: {subject_id}]"),
                e,
            )
        })?;

        let mut grouped: BTreeMap<String, Vec<(Weekday, ScheduleEntry)>> = BTreeMap::new();
        for row in rows {
            let day = Weekday::from_number(row.day)?;
            let entry = ScheduleEntry {
                day: day.name().to_string(),
                start: trim_seconds(&row.start)?.to_string(),
                end: trim_seconds(&row.end)?.to_string(),
            };
            grouped.entry(row.name).or_default().push((day, entry));
        }

        Ok(grouped
            .into_iter()
            .map(|(name, mut entries)| {
                entries.sort_by_key(|(day, _)| *day);
                (name, entries.into_iter().map(|(_, entry)| entry).collect())
            })
            .collect())
    }

    /// Upsert the status of a subject. An empty description is stored as absent.
    #[instrument(skip(self, req), fields(email = %req.student_email, career_id = %req.career_id, subject_id = %req.subject_id))]
    pub async fn update_student_subject(&self, req: UpdateStudentSubjectRequest) -> Result<(), ServiceError> {
        let update = StudentSubjectUpdate {
            career_id: parse_id("career id", &req.career_id)?,
            subject_id: parse_id("subject id", &req.subject_id)?,
            student_email: req.student_email,
            status: req.status,
            description: req.description.filter(|d| !d.is_empty()),
        };

        self.storage.update_student_subject(&update).await.map_err(|e| {
            ServiceError::from_storage(
                format!(
                    "could not update subject [email: {}, subject_id: {}]",
                    update.student_email, update.subject_id
                ),
                e,
            )
        })?;
        info!(status = %update.status, "student_subject_updated");
        Ok(())
    }
}

fn parse_id(field: &str, raw: &str) -> Result<i32, ServiceError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::InvalidArgument(format!("{field} must be numeric, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::storage::mock::{MockStorage, MockSubject};
    use crate::storage::ProfessorshipSchedule;

    const EMAIL: &str = "ada@example.com";

    fn setup(storage: MockStorage) -> (Arc<MockStorage>, StudentService<MockStorage>) {
        let storage = Arc::new(storage);
        (storage.clone(), StudentService::new(storage))
    }

    fn student() -> MockStorage {
        MockStorage::default().with_student("Ada", EMAIL).with_career(1).with_career(2).with_career(3)
    }

    fn slot(name: &str, day: i32, start: &str, end: &str) -> ProfessorshipSchedule {
        ProfessorshipSchedule { name: name.into(), day, start: start.into(), end: end.into() }
    }

    #[tokio::test]
    async fn assign_succeeds_and_is_listed() {
        let (storage, svc) = setup(student());
        svc.assign_student_to_career(EMAIL, "1").await.unwrap();
        let ids = storage.get_student_career_ids(EMAIL).await.unwrap();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn reassigning_same_career_is_already_assigned() {
        let (_, svc) = setup(student().with_assignment(EMAIL, 1).with_assignment(EMAIL, 2));
        let err = svc.assign_student_to_career(EMAIL, "2").await.unwrap_err();
        assert!(matches!(err, ServiceError::CareerAlreadyAssigned));
    }

    #[tokio::test]
    async fn third_career_is_rejected() {
        let (_, svc) = setup(student().with_assignment(EMAIL, 1).with_assignment(EMAIL, 2));
        let err = svc.assign_student_to_career(EMAIL, "3").await.unwrap_err();
        assert!(matches!(err, ServiceError::MaxCareersReached));
        let err = svc.assign_student_to_career(EMAIL, "99").await.unwrap_err();
        assert!(matches!(err, ServiceError::MaxCareersReached));
    }

    #[tokio::test]
    async fn assign_unknown_student_is_not_found() {
        let (_, svc) = setup(student());
        let err = svc.assign_student_to_career("ghost@example.com", "1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = svc.assign_student_to_career(EMAIL, "42").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn non_numeric_ids_are_invalid() {
        let (_, svc) = setup(student());
        let err = svc.assign_student_to_career(EMAIL, "abc").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = svc.get_subject_details("x", "1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn storage_failures_are_unknown() {
        let (storage, svc) = setup(student());
        storage.fail_all();
        let err = svc.assign_student_to_career(EMAIL, "1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        let err = svc.create_student("Bob", "bob@example.com").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn every_subject_has_a_correlatives_entry() {
        let storage = student()
            .with_assignment(EMAIL, 1)
            .with_subject(1, MockSubject::new(10, "Algebra"))
            .with_subject(1, MockSubject::new(11, "Analisis I").with_correlative(10))
            .with_subject(1, MockSubject::new(12, "Fisica").with_correlative(0));
        let (_, svc) = setup(storage);

        let res = svc.get_student_subjects(EMAIL, "1").await.unwrap();
        assert_eq!(res.subjects.len(), 3);
        for key in res.subjects.keys() {
            assert!(res.correlatives.contains_key(key));
        }
        assert_eq!(res.correlatives["10"], Vec::<i32>::new());
        assert_eq!(res.correlatives["11"], vec![10]);
        assert_eq!(res.correlatives["12"], Vec::<i32>::new());
        assert_eq!(res.subjects["11"].status, "PENDIENTE");
        assert_eq!(res.subjects["11"].name, "Analisis I");
    }

    #[tokio::test]
    async fn student_subjects_serialize_with_type_key() {
        let storage = student().with_subject(1, MockSubject::new(10, "Algebra"));
        let (_, svc) = setup(storage);
        let res = svc.get_student_subjects(EMAIL, "1").await.unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["subjects"]["10"]["type"], "OBLIGATORIA");
        assert_eq!(json["subjects"]["10"]["description"], serde_json::Value::Null);
        assert!(json["correlatives"]["10"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subject_details_not_found() {
        let (_, svc) = setup(student().with_subject(1, MockSubject::new(10, "Algebra")));
        let ok = svc.get_subject_details("10", "1").await.unwrap();
        assert_eq!(ok.name, "Algebra");
        let err = svc.get_subject_details("10", "2").await.unwrap_err();
        assert_eq!(err.to_string(), "could not get subject details from [id: 10]: service: resource not found");
    }

    #[tokio::test]
    async fn professorships_grouped_and_sorted_by_day() {
        let storage = student()
            .with_schedule(1, 10, slot("C1", 1, "17:00:00", "21:00:00"))
            .with_schedule(1, 10, slot("C1", 2, "9:00:00", "12:00:00"));
        let (_, svc) = setup(storage);

        let res = svc.get_professorships("10", "1").await.unwrap();
        assert_eq!(
            res["C1"],
            vec![
                ScheduleEntry { day: "Lunes".into(), start: "17:00".into(), end: "21:00".into() },
                ScheduleEntry { day: "Martes".into(), start: "9:00".into(), end: "12:00".into() },
            ]
        );
    }

    #[tokio::test]
    async fn professorships_resorted_when_storage_is_unordered() {
        let storage = student()
            .with_schedule(1, 10, slot("K2", 5, "08:00:00", "10:00:00"))
            .with_schedule(1, 10, slot("K1", 3, "08:00:00", "10:00:00"))
            .with_schedule(1, 10, slot("K2", 1, "18:00:00", "22:00:00"));
        let (_, svc) = setup(storage);

        let res = svc.get_professorships("10", "1").await.unwrap();
        let days: Vec<&str> = res["K2"].iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days, vec!["Lunes", "Viernes"]);
        assert_eq!(res["K1"][0].day, "Miércoles");
    }

    #[tokio::test]
    async fn invalid_day_or_time_fails_the_whole_lookup() {
        let (_, svc) = setup(student().with_schedule(1, 10, slot("C1", 8, "17:00:00", "21:00:00")));
        let err = svc.get_professorships("10", "1").await.unwrap_err();
        assert!(matches!(err, ServiceError::Schedule(_)));

        let (_, svc) = setup(student().with_schedule(1, 10, slot("C1", 1, "17", "21:00:00")));
        let err = svc.get_professorships("10", "1").await.unwrap_err();
        assert!(matches!(err, ServiceError::Schedule(_)));
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[tokio::test]
    async fn professorships_missing_is_not_found() {
        let (_, svc) = setup(student());
        let err = svc.get_professorships("10", "1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn empty_description_is_stored_as_absent() {
        let storage = student().with_assignment(EMAIL, 1).with_subject(1, MockSubject::new(10, "Algebra"));
        let (storage, svc) = setup(storage);

        let req = UpdateStudentSubjectRequest {
            student_email: EMAIL.into(),
            career_id: "1".into(),
            subject_id: "10".into(),
            status: "APROBADA".into(),
            description: Some(String::new()),
        };
        svc.update_student_subject(req).await.unwrap();
        assert_eq!(storage.subject_status(EMAIL, 1, 10), Some(("APROBADA".to_string(), None)));
    }

    #[tokio::test]
    async fn update_requires_assignment() {
        let (_, svc) = setup(student().with_subject(1, MockSubject::new(10, "Algebra")));
        let req = UpdateStudentSubjectRequest {
            student_email: EMAIL.into(),
            career_id: "1".into(),
            subject_id: "10".into(),
            status: "APROBADA".into(),
            description: Some("final".into()),
        };
        let err = svc.update_student_subject(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn duplicate_student_is_distinguished() {
        let (_, svc) = setup(student());
        let err = svc.create_student("Ada again", EMAIL).await.unwrap_err();
        assert!(matches!(err, ServiceError::StudentAlreadyExists));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }
}
