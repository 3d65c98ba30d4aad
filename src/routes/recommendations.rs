use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::ScoredItem;
use crate::services::{recommend_for_user, Recommendations};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommended: Vec<ScoredItem>,
    pub reason: String,
}

/// Handler for the recommendation endpoint.
///
/// An empty eligible set is a 200 with an empty list and its own reason;
/// an unusable catalog surfaces as a 500 through `AppError::EmptyCatalog`.
pub async fn recommend(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<RecommendResponse>> {
    let outcome = recommend_for_user(state.store.as_ref(), &state.catalogs, user_id).await?;

    let response = match outcome {
        Recommendations::Matches(items) => {
            tracing::info!(user_id, count = items.len(), "Recommendations served");
            RecommendResponse {
                recommended: items,
                reason: "Content-based filtering with shuffle".to_string(),
            }
        }
        Recommendations::NoMatches => RecommendResponse {
            recommended: Vec::new(),
            reason: "No matching genres found with sufficient similarity".to_string(),
        },
    };

    Ok(Json(response))
}
