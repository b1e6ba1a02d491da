//! In-memory Login Attempt Store
//!
//! Process-local attempt state. Lost on restart, and not shared between
//! processes: each API instance counts failures on its own.

use dashmap::DashMap;

use crate::domain::entity::login_attempt::LoginAttemptRecord;
use crate::domain::repository::LoginAttemptStore;
use crate::domain::value_object::identity::Identity;
use crate::error::AuthResult;

#[derive(Debug, Default)]
pub struct InMemoryLoginAttemptStore {
    records: DashMap<String, LoginAttemptRecord>,
}

impl InMemoryLoginAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identities with a live record
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LoginAttemptStore for InMemoryLoginAttemptStore {
    async fn get(&self, identity: &Identity) -> AuthResult<Option<LoginAttemptRecord>> {
        Ok(self
            .records
            .get(identity.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn set(&self, identity: &Identity, record: LoginAttemptRecord) -> AuthResult<()> {
        self.records.insert(identity.as_str().to_owned(), record);
        Ok(())
    }

    async fn delete(&self, identity: &Identity) -> AuthResult<()> {
        self.records.remove(identity.as_str());
        Ok(())
    }
}
