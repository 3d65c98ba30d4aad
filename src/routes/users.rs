use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{User, UserProfile, UserUpdate};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub mobileno: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub redirect: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: User,
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

// Handlers

/// Registers a new account.
///
/// The pre-check against email and mobile number gives the field-specific
/// message; the store's unique indexes catch the race where two requests
/// pass the pre-check together.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    require("firstname", &request.firstname)?;
    require("lastname", &request.lastname)?;
    require("email", &request.email)?;
    require("password", &request.password)?;
    require("mobileno", &request.mobileno)?;
    require("location", &request.location)?;

    if let Some(existing) = state
        .store
        .find_user_by_email_or_phone(&request.email, &request.mobileno)
        .await?
    {
        let field = if existing.email == request.email {
            "Email"
        } else {
            "Mobile number"
        };
        return Err(AppError::Conflict(field.to_string()));
    }

    let user_id = state.store.next_user_id().await?;
    let user = User {
        user_id,
        firstname: request.firstname,
        lastname: request.lastname,
        email: request.email,
        password: request.password,
        mobileno: request.mobileno,
        location: request.location,
    };
    state.store.create_user(&user).await?;

    tracing::info!(user_id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            user_id,
        }),
    ))
}

/// Checks credentials against the stored record, compared verbatim.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state.store.find_user_by_email(&request.email).await?;

    match user {
        Some(user) if user.password == request.password => Ok(Json(LoginResponse {
            message: "Login successful".to_string(),
            redirect: "/".to_string(),
            user_id: user.user_id,
        })),
        _ => Err(AppError::Unauthorized),
    }
}

/// Returns the profile projection for `GET /user-preference/:userId`.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserProfile>> {
    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserProfile::from(user)))
}

/// Applies a partial update and returns the merged record.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(update): Json<UserUpdate>,
) -> AppResult<Json<UpdateUserResponse>> {
    let user = state
        .store
        .update_user(user_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user,
    }))
}
