//! In-Memory Session Store
//!
//! Keeps assessment sessions in a map for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentState;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentSessionStore, SessionStoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<AssessmentId, AssessmentState>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl AssessmentSessionStore for InMemorySessionStore {
    async fn put(&self, state: &AssessmentState) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(state.id, state.clone());
        Ok(())
    }

    async fn get(&self, id: &AssessmentId) -> Result<AssessmentState, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(*id))
    }
}
