pub mod errors;
pub mod db;
pub mod student;
pub mod career;
pub mod subject;
pub mod career_subject;
pub mod student_career;
pub mod student_career_subject;
pub mod professorship;
pub mod schedule;

#[cfg(test)]
mod tests;
