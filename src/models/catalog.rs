use serde::Serialize;

/// One row of the movie catalog.
///
/// Catalog items are rebuilt from the CSV source on every recommendation
/// request and never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogItem {
    pub title: String,
    pub genres: Vec<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// A catalog item that cleared the similarity threshold, with its score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_item_flattens_on_the_wire() {
        let scored = ScoredItem {
            item: CatalogItem {
                title: "Heat".to_string(),
                genres: vec!["Action".to_string(), "Crime".to_string()],
                imdb_id: "tt0113277".to_string(),
            },
            score: 0.8165,
        };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["title"], "Heat");
        assert_eq!(json["imdbID"], "tt0113277");
        assert_eq!(json["score"], 0.8165);
    }
}
