use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Subject entry of [`StudentSubjectsResponse`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStatus {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub status: String,
    pub description: Option<String>,
}

/// Subjects of a career for one student, keyed by subject id.
///
/// `correlatives` has an entry for every key of `subjects`, empty when the
/// subject has no prerequisite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentSubjectsResponse {
    pub correlatives: BTreeMap<String, Vec<i32>>,
    pub subjects: BTreeMap<String, SubjectStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectDetailsResponse {
    pub id: i32,
    pub hours: i32,
    pub points: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub uri: Option<String>,
    pub meet: Option<String>,
}

/// One weekly meeting, e.g. `{"day": "Lunes", "start": "17:00", "end": "21:00"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: String,
    pub start: String,
    pub end: String,
}

/// Professorship name to its schedule, sorted Monday first.
pub type ProfessorshipsResponse = BTreeMap<String, Vec<ScheduleEntry>>;

/// Status change for one subject. Identifiers arrive as raw path segments.
#[derive(Debug, Clone)]
pub struct UpdateStudentSubjectRequest {
    pub student_email: String,
    pub career_id: String,
    pub subject_id: String,
    pub status: String,
    pub description: Option<String>,
}
