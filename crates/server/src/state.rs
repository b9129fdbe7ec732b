use std::sync::Arc;

use service::storage::Storage;
use service::student::StudentService;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub students: Arc<StudentService<dyn Storage>>,
}

impl ServerState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { students: Arc::new(StudentService::new(storage)) }
    }
}
