use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{Preference, PreferenceUpdate, User, UserUpdate};

use super::{RecordStore, USER_ID_COUNTER};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Postgres-backed record store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the embedded schema migrations.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

const USER_COLUMNS: &str = "user_id, firstname, lastname, email, password, mobileno, location";
const PREFERENCE_COLUMNS: &str = "user_id, industry, genres, last_movie";

/// Maps a unique-index violation on the users table to the field-specific
/// conflict error; everything else passes through as a database error.
fn map_user_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            let field = match db_err.constraint() {
                Some("users_mobileno_key") => "Mobile number",
                _ => "Email",
            };
            return AppError::Conflict(field.to_string());
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl RecordStore for PgStore {
    async fn next_user_id(&self) -> AppResult<i64> {
        // Single-statement upsert keeps the increment atomic across
        // concurrent registrations and multiple server instances.
        let value: i64 = sqlx::query_scalar(
            "INSERT INTO counters (name, value) VALUES ($1, 1) \
             ON CONFLICT (name) DO UPDATE SET value = counters.value + 1 \
             RETURNING value",
        )
        .bind(USER_ID_COUNTER)
        .fetch_one(&self.pool)
        .await?;

        Ok(value)
    }

    async fn find_user_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email_or_phone(
        &self,
        email: &str,
        mobileno: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 OR mobileno = $2 LIMIT 1"
        ))
        .bind(email)
        .bind(mobileno)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO users (user_id, firstname, lastname, email, password, mobileno, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.user_id)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.mobileno)
        .bind(&user.location)
        .execute(&self.pool)
        .await
        .map_err(map_user_insert_error)?;

        Ok(())
    }

    async fn update_user(&self, user_id: i64, update: UserUpdate) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                 firstname = COALESCE($2, firstname), \
                 lastname  = COALESCE($3, lastname), \
                 email     = COALESCE($4, email), \
                 password  = COALESCE($5, password), \
                 mobileno  = COALESCE($6, mobileno), \
                 location  = COALESCE($7, location) \
             WHERE user_id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(update.firstname)
        .bind(update.lastname)
        .bind(update.email)
        .bind(update.password)
        .bind(update.mobileno)
        .bind(update.location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_preference(&self, preference: &Preference) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO preferences (user_id, industry, genres, last_movie) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(preference.user_id)
        .bind(&preference.industry)
        .bind(&preference.genres)
        .bind(&preference.last_movie)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_preference(&self, user_id: i64) -> AppResult<Option<Preference>> {
        let preference = sqlx::query_as::<_, Preference>(&format!(
            "SELECT {PREFERENCE_COLUMNS} FROM preferences \
             WHERE user_id = $1 ORDER BY id LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }

    async fn update_preference(
        &self,
        user_id: i64,
        update: PreferenceUpdate,
    ) -> AppResult<Option<Preference>> {
        // Preferences are not unique per user; the update targets the first
        // stored record, matching read order.
        let preference = sqlx::query_as::<_, Preference>(&format!(
            "UPDATE preferences SET \
                 industry   = COALESCE($2, industry), \
                 genres     = COALESCE($3, genres), \
                 last_movie = COALESCE($4, last_movie) \
             WHERE id = (SELECT id FROM preferences WHERE user_id = $1 ORDER BY id LIMIT 1) \
             RETURNING {PREFERENCE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(update.industry)
        .bind(update.genres)
        .bind(update.last_movie)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }
}
