use rand::thread_rng;

use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::models::ScoredItem;

use super::catalog::{load_catalog, CatalogSources};
use super::scorer::{sample_recommendations, score_catalog, MAX_RECOMMENDATIONS};

/// Outcome of a recommendation request.
///
/// An empty eligible set is a successful outcome with its own reason
/// string, not an error; only an unusable catalog fails the request.
#[derive(Debug)]
pub enum Recommendations {
    Matches(Vec<ScoredItem>),
    NoMatches,
}

/// Runs the full pipeline for one user: preference lookup, catalog scan,
/// scoring, then a uniform sample of the eligible set.
pub async fn recommend_for_user(
    store: &dyn RecordStore,
    sources: &CatalogSources,
    user_id: i64,
) -> AppResult<Recommendations> {
    let preference = store
        .find_preference(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Preferences not found".to_string()))?;

    let industry = preference.industry();
    let path = sources.path_for(industry).to_path_buf();

    // The scan is blocking file I/O; keep it off the async workers. Each
    // request re-reads the file, concurrent requests scan independently.
    let items = tokio::task::spawn_blocking(move || load_catalog(&path, industry))
        .await
        .map_err(|e| AppError::Internal(format!("Catalog scan task failed: {e}")))??;

    let eligible = score_catalog(items, &preference.genres);

    tracing::debug!(
        user_id,
        industry = %industry,
        eligible = eligible.len(),
        "Scored catalog for user"
    );

    if eligible.is_empty() {
        return Ok(Recommendations::NoMatches);
    }

    let picks = sample_recommendations(eligible, MAX_RECOMMENDATIONS, &mut thread_rng());
    Ok(Recommendations::Matches(picks))
}
