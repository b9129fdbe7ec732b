use thiserror::Error;

use crate::storage::StorageError;

/// Coarse error classes the HTTP layer maps onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Conflict,
    Unknown,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{context}: service: resource not found")]
    NotFound { context: String },
    #[error("service: student already exists")]
    StudentAlreadyExists,
    #[error("service: career already assigned")]
    CareerAlreadyAssigned,
    #[error("service: max careers reached")]
    MaxCareersReached,
    #[error("{0}")]
    Schedule(String),
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: StorageError,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ServiceError::NotFound { .. } => ErrorKind::NotFound,
            ServiceError::StudentAlreadyExists
            | ServiceError::CareerAlreadyAssigned
            | ServiceError::MaxCareersReached => ErrorKind::Conflict,
            ServiceError::Schedule(_) | ServiceError::Storage { .. } => ErrorKind::Unknown,
        }
    }

    /// Wraps a storage failure, keeping not-found distinguishable.
    pub fn from_storage(context: impl Into<String>, err: StorageError) -> Self {
        let context = context.into();
        match err {
            StorageError::NotFound(_) => ServiceError::NotFound { context },
            source => ServiceError::Storage { context, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn storage_not_found_keeps_its_kind() {
        let err = ServiceError::from_storage(
            "could not get subject details from [id: 7]",
            StorageError::NotFound("subject".into()),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "could not get subject details from [id: 7]: service: resource not found");
    }

    #[test]
    fn opaque_failures_are_unknown() {
        let err = ServiceError::from_storage("ctx", StorageError::Db(DbErr::Custom("boom".into())));
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.to_string().starts_with("ctx: "));
    }

    #[test]
    fn conflicts() {
        for err in [
            ServiceError::StudentAlreadyExists,
            ServiceError::CareerAlreadyAssigned,
            ServiceError::MaxCareersReached,
        ] {
            assert_eq!(err.kind(), ErrorKind::Conflict);
        }
    }
}
