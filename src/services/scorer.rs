use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CatalogItem, ScoredItem};

/// Similarity an item must exceed to be eligible for recommendation.
pub const SCORE_THRESHOLD: f64 = 0.1;

/// Most items one recommendation response will carry.
pub const MAX_RECOMMENDATIONS: usize = 30;

/// Distinct lower-cased genre tokens across the catalog, first-seen order.
///
/// The order does not affect the scores, but it must stay fixed within one
/// computation so user and item vectors share a basis.
pub fn build_vocabulary(items: &[CatalogItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    for item in items {
        for genre in &item.genres {
            let token = genre.to_lowercase();
            if seen.insert(token.clone()) {
                vocabulary.push(token);
            }
        }
    }

    vocabulary
}

/// 0/1 membership vector of `genres` over the vocabulary, case-insensitive.
fn vectorize(vocabulary: &[String], genres: &[String]) -> Vec<f64> {
    let lowered: HashSet<String> = genres.iter().map(|g| g.to_lowercase()).collect();

    vocabulary
        .iter()
        .map(|term| if lowered.contains(term) { 1.0 } else { 0.0 })
        .collect()
}

/// Cosine similarity of two equal-length vectors.
///
/// A zero-norm vector on either side yields 0.0 rather than dividing by
/// zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Scores every catalog item against the user's genres and keeps those
/// above [`SCORE_THRESHOLD`].
///
/// This half of the pipeline is deterministic: the same catalog and
/// preferences always produce the same eligible set. Sampling happens
/// separately in [`sample_recommendations`].
pub fn score_catalog(items: Vec<CatalogItem>, user_genres: &[String]) -> Vec<ScoredItem> {
    let vocabulary = build_vocabulary(&items);
    let user_vector = vectorize(&vocabulary, user_genres);

    items
        .into_iter()
        .filter_map(|item| {
            let item_vector = vectorize(&vocabulary, &item.genres);
            let score = cosine_similarity(&user_vector, &item_vector);
            (score > SCORE_THRESHOLD).then_some(ScoredItem { item, score })
        })
        .collect()
}

/// Uniform random sample of `min(limit, |eligible|)` items.
///
/// Kept apart from scoring so the randomized half of the pipeline tests
/// independently; callers inject the RNG.
pub fn sample_recommendations<R: Rng + ?Sized>(
    eligible: Vec<ScoredItem>,
    limit: usize,
    rng: &mut R,
) -> Vec<ScoredItem> {
    eligible.choose_multiple(rng, limit).cloned().collect()
}
