use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{Preference, PreferenceUpdate, User, UserUpdate};

use super::{RecordStore, USER_ID_COUNTER};

/// In-memory record store.
///
/// Backs the test suite and database-free local runs. Uniqueness and
/// counter semantics match `PgStore`; preference records keep insertion
/// order so "first match" reads behave the same.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    counters: HashMap<String, i64>,
    users: Vec<User>,
    preferences: Vec<Preference>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn next_user_id(&self) -> AppResult<i64> {
        let mut inner = self.inner.write().await;
        let value = inner
            .counters
            .entry(USER_ID_COUNTER.to_string())
            .or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn find_user_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_email_or_phone(
        &self,
        email: &str,
        mobileno: &str,
    ) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .iter()
            .find(|u| u.email == email || u.mobileno == mobileno)
            .cloned())
    }

    async fn create_user(&self, user: &User) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email".to_string()));
        }
        if inner.users.iter().any(|u| u.mobileno == user.mobileno) {
            return Err(AppError::Conflict("Mobile number".to_string()));
        }
        inner.users.push(user.clone());
        Ok(())
    }

    async fn update_user(&self, user_id: i64, update: UserUpdate) -> AppResult<Option<User>> {
        let mut inner = self.inner.write().await;
        match inner.users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.apply(update);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn create_preference(&self, preference: &Preference) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.preferences.push(preference.clone());
        Ok(())
    }

    async fn find_preference(&self, user_id: i64) -> AppResult<Option<Preference>> {
        let inner = self.inner.read().await;
        Ok(inner
            .preferences
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn update_preference(
        &self,
        user_id: i64,
        update: PreferenceUpdate,
    ) -> AppResult<Option<Preference>> {
        let mut inner = self.inner.write().await;
        match inner.preferences.iter_mut().find(|p| p.user_id == user_id) {
            Some(preference) => {
                preference.apply(update);
                Ok(Some(preference.clone()))
            }
            None => Ok(None),
        }
    }
}
