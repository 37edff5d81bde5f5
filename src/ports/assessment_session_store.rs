//! Assessment Session Store Port - Keyed storage of in-progress assessments.
//!
//! Session state is immutable; every recomputation produces a new
//! `AssessmentState` which replaces the stored value for its id.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::AssessmentState;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Errors that can occur in the session store.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Session storage failure: {0}")]
    Backend(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        match &err {
            SessionStoreError::NotFound(id) => {
                DomainError::new(ErrorCode::AssessmentNotFound, err.to_string())
                    .with_detail("assessment_id", id.to_string())
            }
            SessionStoreError::Backend(_) => DomainError::new(ErrorCode::StorageError, err.to_string()),
        }
    }
}

/// Port for storing assessment sessions.
#[async_trait]
pub trait AssessmentSessionStore: Send + Sync {
    /// Store `state`, replacing any previous value with the same id.
    async fn put(&self, state: &AssessmentState) -> Result<(), SessionStoreError>;

    /// Load the state for `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::NotFound` if no session exists.
    async fn get(&self, id: &AssessmentId) -> Result<AssessmentState, SessionStoreError>;
}
