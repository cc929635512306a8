//! Process-lifetime store of generated plan sessions.
//!
//! Sessions live until they are deleted or the process exits: there is no
//! persistence, expiry or capacity bound. The store is cheap to clone; clones
//! share the same map. Each operation locks the map for a single key
//! insert, lookup or removal only.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    error::{PlanError, Result},
    models::{DayPlan, PlanSession},
};

/// Shared map from session identifier to plan session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, PlanSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new session under a freshly generated identifier.
    pub fn create(&self, narrative: String, tasks: Vec<DayPlan>) -> Uuid {
        let id = Uuid::new_v4();
        let session = PlanSession {
            id,
            narrative,
            tasks,
            created_at: Timestamp::now(),
        };

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session);
        id
    }

    /// Returns a copy of the session stored under `id`.
    ///
    /// Only the identifier exactly as issued names a session; anything else,
    /// including another textual form of the same UUID, yields `None`.
    pub fn get(&self, id: &str) -> Option<PlanSession> {
        let key = issued_key(id)?;
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Returns the task list of the session stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::SessionNotFound` if no such session exists.
    pub fn tasks(&self, id: &str) -> Result<Vec<DayPlan>> {
        self.get(id)
            .map(|session| session.tasks)
            .ok_or_else(|| PlanError::session_not_found(id))
    }

    /// Removes the session stored under `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::SessionNotFound` if no such session exists,
    /// including when it was already deleted.
    pub fn delete(&self, id: &str) -> Result<PlanSession> {
        let key = issued_key(id).ok_or_else(|| PlanError::session_not_found(id))?;
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .ok_or_else(|| PlanError::session_not_found(id))
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Key for an identifier in the hyphenated lowercase form `create` issues.
fn issued_key(id: &str) -> Option<Uuid> {
    Uuid::try_parse(id)
        .ok()
        .filter(|key| key.hyphenated().to_string() == id)
}
