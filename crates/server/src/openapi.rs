use std::collections::HashMap;

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub status: u16, pub code: String, pub message: String }

#[derive(Serialize, ToSchema)]
pub struct SubjectStatusDoc {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub status: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct StudentSubjectsDoc {
    pub correlatives: HashMap<String, Vec<i32>>,
    pub subjects: HashMap<String, SubjectStatusDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct SubjectDetailsDoc {
    pub id: i32,
    pub hours: i32,
    pub points: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub uri: Option<String>,
    pub meet: Option<String>,
}

#[derive(ToSchema)]
pub struct ScheduleEntryDoc { pub day: String, pub start: String, pub end: String }

#[derive(ToSchema)]
pub struct ProfessorshipsDoc(pub HashMap<String, Vec<ScheduleEntryDoc>>);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create_student,
        crate::routes::students::assign_student_to_career,
        crate::routes::students::get_student_subjects,
        crate::routes::students::update_student_subject,
        crate::routes::careers::get_subject_details,
        crate::routes::careers::get_professorships,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            SubjectStatusDoc,
            StudentSubjectsDoc,
            SubjectDetailsDoc,
            ScheduleEntryDoc,
            ProfessorshipsDoc,
            crate::routes::students::CreateStudentBody,
            crate::routes::students::UpdateSubjectBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "students"),
        (name = "careers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/health",
            "/students",
            "/students/{studentEmail}/careers/{careerID}",
            "/students/{studentEmail}/careers/{careerID}/subjects",
            "/students/{studentEmail}/careers/{careerID}/subjects/{subjectID}",
            "/careers/{careerID}/subjects/{subjectID}",
            "/careers/{careerID}/subjects/{subjectID}/professorships",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
