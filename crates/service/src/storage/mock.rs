//! In-memory [`Storage`] for tests and doc examples.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use models::student_career_subject::STATUS_PENDING;
use sea_orm::DbErr;

use super::{
    ProfessorshipSchedule, Storage, StorageError, StudentSubject, StudentSubjectUpdate, SubjectDetails,
};

/// A subject as offered by a career, seeded through [`MockStorage::with_subject`].
#[derive(Debug, Clone)]
pub struct MockSubject {
    pub subject_id: i32,
    pub name: String,
    pub subject_type: String,
    pub hours: i32,
    pub points: i32,
    pub correlative_id: Option<i32>,
    pub uri: Option<String>,
    pub meet: Option<String>,
}

impl MockSubject {
    pub fn new(subject_id: i32, name: &str) -> Self {
        Self {
            subject_id,
            name: name.to_string(),
            subject_type: models::career_subject::TYPE_REQUIRED.to_string(),
            hours: 0,
            points: 0,
            correlative_id: None,
            uri: None,
            meet: None,
        }
    }

    pub fn with_correlative(mut self, correlative_id: i32) -> Self {
        self.correlative_id = Some(correlative_id);
        self
    }
}

type StatusKey = (String, i32, i32);

#[derive(Default)]
struct State {
    students: BTreeMap<String, String>,
    careers: BTreeSet<i32>,
    assignments: Vec<(String, i32)>,
    subjects: BTreeMap<i32, Vec<MockSubject>>,
    schedules: HashMap<(i32, i32), Vec<ProfessorshipSchedule>>,
    statuses: HashMap<StatusKey, (String, Option<String>)>,
}

/// Mirrors the SeaORM storage with every career subject listed (status
/// defaults to `PENDIENTE`). Schedules come back in insertion order.
#[derive(Default)]
pub struct MockStorage {
    state: Mutex<State>,
    failing: AtomicBool,
}

impl MockStorage {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Db(DbErr::Custom("mock storage failure".into())));
        }
        Ok(())
    }

    pub fn with_student(self, name: &str, email: &str) -> Self {
        self.state().students.insert(email.to_string(), name.to_string());
        self
    }

    pub fn with_career(self, career_id: i32) -> Self {
        self.state().careers.insert(career_id);
        self
    }

    pub fn with_assignment(self, email: &str, career_id: i32) -> Self {
        self.state().assignments.push((email.to_string(), career_id));
        self
    }

    pub fn with_subject(self, career_id: i32, subject: MockSubject) -> Self {
        {
            let mut state = self.state();
            state.careers.insert(career_id);
            state.subjects.entry(career_id).or_default().push(subject);
        }
        self
    }

    pub fn with_schedule(self, career_id: i32, subject_id: i32, schedule: ProfessorshipSchedule) -> Self {
        self.state().schedules.entry((career_id, subject_id)).or_default().push(schedule);
        self
    }

    /// Makes every subsequent call fail with an opaque database error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Stored status and description of a subject for a student.
    pub fn subject_status(&self, email: &str, career_id: i32, subject_id: i32) -> Option<(String, Option<String>)> {
        self.state().statuses.get(&(email.to_string(), career_id, subject_id)).cloned()
    }
}

fn not_found(what: String) -> StorageError {
    StorageError::NotFound(what)
}

#[async_trait]
impl Storage for MockStorage {
    async fn get_student_career_ids(&self, email: &str) -> Result<Vec<i32>, StorageError> {
        self.check()?;
        let ids: Vec<i32> = self
            .state()
            .assignments
            .iter()
            .filter(|(e, _)| e == email)
            .map(|(_, id)| *id)
            .collect();
        if ids.is_empty() {
            return Err(not_found(format!("no careers for [email: {email}]")));
        }
        Ok(ids)
    }

    async fn assign_student_to_career(&self, email: &str, career_id: i32) -> Result<(), StorageError> {
        self.check()?;
        let mut state = self.state();
        if !state.students.contains_key(email) {
            return Err(not_found(format!("could not find student [email: {email}]")));
        }
        if !state.careers.contains(&career_id) {
            return Err(not_found(format!("could not find career [id: {career_id}]")));
        }
        if state.assignments.iter().any(|(e, id)| e == email && *id == career_id) {
            return Err(StorageError::AlreadyExists(format!("student {email} in career {career_id}")));
        }
        state.assignments.push((email.to_string(), career_id));
        Ok(())
    }

    async fn get_student_subjects(&self, email: &str, career_id: i32) -> Result<Vec<StudentSubject>, StorageError> {
        self.check()?;
        let state = self.state();
        if !state.students.contains_key(email) {
            return Err(not_found(format!("could not find student [email: {email}]")));
        }
        let rows: Vec<StudentSubject> = state
            .subjects
            .get(&career_id)
            .into_iter()
            .flatten()
            .map(|s| {
                let (status, description) = state
                    .statuses
                    .get(&(email.to_string(), career_id, s.subject_id))
                    .cloned()
                    .unwrap_or_else(|| (STATUS_PENDING.to_string(), None));
                StudentSubject {
                    subject_id: s.subject_id,
                    name: s.name.clone(),
                    subject_type: s.subject_type.clone(),
                    status,
                    description,
                    correlative_id: s.correlative_id,
                }
            })
            .collect();
        if rows.is_empty() {
            return Err(not_found(format!("no subjects for [email: {email}, career_id: {career_id}]")));
        }
        Ok(rows)
    }

    async fn get_subject_details(&self, subject_id: i32, career_id: i32) -> Result<SubjectDetails, StorageError> {
        self.check()?;
        self.state()
            .subjects
            .get(&career_id)
            .and_then(|subjects| subjects.iter().find(|s| s.subject_id == subject_id))
            .map(|s| SubjectDetails {
                id: s.subject_id,
                name: s.name.clone(),
                subject_type: s.subject_type.clone(),
                hours: s.hours,
                points: s.points,
                uri: s.uri.clone(),
                meet: s.meet.clone(),
            })
            .ok_or_else(|| not_found(format!("subject {subject_id} is not part of career {career_id}")))
    }

    async fn get_professorship_schedules(
        &self,
        subject_id: i32,
        career_id: i32,
    ) -> Result<Vec<ProfessorshipSchedule>, StorageError> {
        self.check()?;
        match self.state().schedules.get(&(career_id, subject_id)) {
            Some(rows) if !rows.is_empty() => Ok(rows.clone()),
            _ => Err(not_found(format!(
                "no professorships for [subject_id: {subject_id}, career_id: {career_id}]"
            ))),
        }
    }

    async fn update_student_subject(&self, update: &StudentSubjectUpdate) -> Result<(), StorageError> {
        self.check()?;
        let mut state = self.state();
        let email = &update.student_email;
        if !state.students.contains_key(email) {
            return Err(not_found(format!("could not find student [email: {email}]")));
        }
        if !state.assignments.iter().any(|(e, id)| e == email && *id == update.career_id) {
            return Err(not_found(format!("student {email} is not assigned to career {}", update.career_id)));
        }
        let offered = state
            .subjects
            .get(&update.career_id)
            .is_some_and(|subjects| subjects.iter().any(|s| s.subject_id == update.subject_id));
        if !offered {
            return Err(not_found(format!(
                "subject {} is not part of career {}",
                update.subject_id, update.career_id
            )));
        }
        state.statuses.insert(
            (email.clone(), update.career_id, update.subject_id),
            (update.status.clone(), update.description.clone()),
        );
        Ok(())
    }

    async fn create_student(&self, name: &str, email: &str) -> Result<(), StorageError> {
        self.check()?;
        let mut state = self.state();
        if state.students.contains_key(email) {
            return Err(StorageError::AlreadyExists(format!("student [email: {email}]")));
        }
        state.students.insert(email.to_string(), name.to_string());
        Ok(())
    }
}
