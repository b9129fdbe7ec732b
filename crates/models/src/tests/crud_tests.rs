use anyhow::Result;
use chrono::NaiveTime;
use sea_orm::{EntityTrait, ModelTrait};
use uuid::Uuid;

use super::setup_test_db;
use crate::career_subject::{self, NewCareerSubject};
use crate::{career, professorship, schedule, student, subject};

#[tokio::test]
async fn test_student_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let email = format!("crud_{}@example.com", Uuid::new_v4());
    let created = student::create(&db, "Ada Lovelace", &email).await?;
    assert_eq!(created.email, email);

    let found = student::find_by_email(&db, &email).await?;
    assert_eq!(found.map(|s| s.id), Some(created.id));

    student::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(student::find_by_email(&db, &email).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_student_validation_happens_before_insert() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let res = student::create(&db, "", "nobody@example.com").await;
    assert!(matches!(res, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_career_subject_graph() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let c = career::create(&db, &format!("Career {}", Uuid::new_v4())).await?;
    let s = subject::create(&db, "Algebra", Some("https://campus.example/algebra"), None).await?;
    let cs = career_subject::create(
        &db,
        NewCareerSubject {
            career_id: c.id,
            subject_id: s.id,
            subject_type: career_subject::TYPE_REQUIRED,
            hours: 96,
            points: 8,
            correlative_id: None,
        },
    )
    .await?;

    let p = professorship::create(&db, cs.id, "Catedra A").await?;
    let start = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    schedule::create(&db, p.id, 1, start, end).await?;

    let found = career_subject::find(&db, c.id, s.id).await?.expect("career subject");
    assert_eq!(found.hours, 96);

    let schedules = p.find_related(schedule::Entity).all(&db).await?;
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].start_time, start);

    // cascades down to professorships and schedules
    career::Entity::delete_by_id(c.id).exec(&db).await?;
    subject::Entity::delete_by_id(s.id).exec(&db).await?;
    assert!(professorship::Entity::find_by_id(p.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_schedule_rejects_inverted_times() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let start = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    let res = schedule::create(&db, 0, 1, start, end).await;
    assert!(res.is_err());
    Ok(())
}
