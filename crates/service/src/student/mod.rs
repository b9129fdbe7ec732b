//! Student module: enrollment, subject status and schedule lookups
//! (domain, schedule normalisation, service).

pub mod domain;
pub mod schedule;
pub mod service;

pub use service::StudentService;
