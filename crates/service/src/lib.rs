//! Service layer for the student API.
//! - `storage`: the persistence seam (SeaORM on PostgreSQL, in-memory mock).
//! - `student`: business rules and response shaping on top of storage.

pub mod errors;
pub mod storage;
pub mod student;
#[cfg(test)]
pub mod test_support;
