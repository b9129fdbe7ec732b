//! Pieces shared by every binary in the workspace: tracing setup and the
//! small wire types that are not owned by any single domain crate.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let body = serde_json::to_value(&h).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
