use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Preference, PreferenceUpdate};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SavePreferenceRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub industry: String,
    pub genres: Vec<String>,
    #[serde(rename = "lastMovie")]
    pub last_movie: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UpdatePreferenceResponse {
    pub message: String,
    pub preference: Preference,
}

// Handlers

/// Stores a preference record.
///
/// No referential check against users and no uniqueness per user; a second
/// record for the same id simply sits behind the first.
pub async fn save_preference(
    State(state): State<AppState>,
    Json(request): Json<SavePreferenceRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let preference = Preference {
        user_id: request.user_id,
        industry: request.industry,
        genres: request.genres,
        last_movie: request.last_movie,
    };
    state.store.create_preference(&preference).await?;

    tracing::info!(user_id = preference.user_id, "Preference saved");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Preferences saved".to_string(),
        }),
    ))
}

/// Returns the user's first stored preference record.
pub async fn get_preference(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Preference>> {
    let preference = state
        .store
        .find_preference(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Preference not found".to_string()))?;

    Ok(Json(preference))
}

/// Resolves which catalog the user's preference points at.
///
/// This route speaks plain text on every outcome, including not-found.
pub async fn get_source(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<String, (StatusCode, String)> {
    match state.store.find_preference(user_id).await {
        Ok(Some(preference)) => Ok(preference.industry().to_string()),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            "User preference not found".to_string(),
        )),
        Err(err) => {
            tracing::error!(error = %err, user_id, "Source lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ))
        }
    }
}

/// Applies a partial update to the first stored preference and returns the
/// merged record.
pub async fn update_preference(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(update): Json<PreferenceUpdate>,
) -> AppResult<Json<UpdatePreferenceResponse>> {
    let preference = state
        .store
        .update_preference(user_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Preference not found".to_string()))?;

    Ok(Json(UpdatePreferenceResponse {
        message: "Preference updated successfully".to_string(),
        preference,
    }))
}
