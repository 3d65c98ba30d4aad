pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{create_pool, PgStore};

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Preference, PreferenceUpdate, User, UserUpdate};

/// Counter name backing user id assignment.
pub const USER_ID_COUNTER: &str = "userId";

/// Durable storage for users, preferences and the id counter.
///
/// Handlers only see this trait. `PgStore` backs production; `MemoryStore`
/// backs the test suite and database-free local runs.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Atomically increments and returns the user id counter.
    ///
    /// Increment-and-fetch is a single operation; concurrent callers never
    /// observe the same value.
    async fn next_user_id(&self) -> AppResult<i64>;

    async fn find_user_by_id(&self, user_id: i64) -> AppResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Registration pre-check: the first user matching either field.
    async fn find_user_by_email_or_phone(
        &self,
        email: &str,
        mobileno: &str,
    ) -> AppResult<Option<User>>;

    /// Inserts a new user. A duplicate email or mobile number surfaces as
    /// `AppError::Conflict` naming the offending field.
    async fn create_user(&self, user: &User) -> AppResult<()>;

    /// Partial update; absent fields keep their stored values. Returns the
    /// merged record, or `None` when the id is unknown.
    async fn update_user(&self, user_id: i64, update: UserUpdate) -> AppResult<Option<User>>;

    /// Inserts a preference record. No uniqueness and no referential check
    /// against users.
    async fn create_preference(&self, preference: &Preference) -> AppResult<()>;

    /// First stored preference for the user, in insertion order.
    async fn find_preference(&self, user_id: i64) -> AppResult<Option<Preference>>;

    /// Partial update of the user's first preference record. Returns the
    /// merged record, or `None` when the user has none.
    async fn update_preference(
        &self,
        user_id: i64,
        update: PreferenceUpdate,
    ) -> AppResult<Option<Preference>>;
}
