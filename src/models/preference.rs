use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A user's stated taste: industry, preferred genres and the last movie
/// they watched.
///
/// Preferences are not unique per user; reads return the first stored
/// record for the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Preference {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub industry: String,
    pub genres: Vec<String>,
    #[serde(rename = "lastMovie")]
    pub last_movie: String,
}

/// Partial update applied to a stored preference. Absent fields keep their
/// current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferenceUpdate {
    pub industry: Option<String>,
    pub genres: Option<Vec<String>>,
    #[serde(rename = "lastMovie")]
    pub last_movie: Option<String>,
}

impl Preference {
    /// Applies a partial update in place, leaving absent fields untouched.
    pub fn apply(&mut self, update: PreferenceUpdate) {
        if let Some(industry) = update.industry {
            self.industry = industry;
        }
        if let Some(genres) = update.genres {
            self.genres = genres;
        }
        if let Some(last_movie) = update.last_movie {
            self.last_movie = last_movie;
        }
    }

    /// Resolves the catalog this preference points at.
    pub fn industry(&self) -> Industry {
        Industry::from_label(&self.industry)
    }
}

/// Which movie catalog a preference selects.
///
/// The stored industry label is free text; anything that is not
/// (case-insensitively) "bollywood" reads the Hollywood catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Bollywood,
    Hollywood,
}

impl Industry {
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("bollywood") {
            Industry::Bollywood
        } else {
            Industry::Hollywood
        }
    }

    /// Canonical lower-case name, as served by `GET /source/:userId`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Bollywood => "bollywood",
            Industry::Hollywood => "hollywood",
        }
    }

    /// Separator between genre tokens inside one CSV field.
    pub fn genre_delimiter(&self) -> char {
        match self {
            Industry::Bollywood => ',',
            Industry::Hollywood => '|',
        }
    }
}

impl Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_label_case_insensitive() {
        assert_eq!(Industry::from_label("Bollywood"), Industry::Bollywood);
        assert_eq!(Industry::from_label("BOLLYWOOD"), Industry::Bollywood);
        assert_eq!(Industry::from_label("  bollywood "), Industry::Bollywood);
    }

    #[test]
    fn test_unknown_label_defaults_to_hollywood() {
        assert_eq!(Industry::from_label("hollywood"), Industry::Hollywood);
        assert_eq!(Industry::from_label("tollywood"), Industry::Hollywood);
        assert_eq!(Industry::from_label(""), Industry::Hollywood);
    }

    #[test]
    fn test_genre_delimiters() {
        assert_eq!(Industry::Bollywood.genre_delimiter(), ',');
        assert_eq!(Industry::Hollywood.genre_delimiter(), '|');
    }

    #[test]
    fn test_preference_wire_field_names() {
        let preference = Preference {
            user_id: 7,
            industry: "Bollywood".to_string(),
            genres: vec!["Action".to_string()],
            last_movie: "Sholay".to_string(),
        };

        let json = serde_json::to_value(&preference).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["lastMovie"], "Sholay");
    }

    #[test]
    fn test_apply_partial_update() {
        let mut preference = Preference {
            user_id: 7,
            industry: "Bollywood".to_string(),
            genres: vec!["Action".to_string()],
            last_movie: "Sholay".to_string(),
        };

        preference.apply(PreferenceUpdate {
            genres: Some(vec!["Drama".to_string(), "Comedy".to_string()]),
            ..Default::default()
        });

        assert_eq!(preference.genres, vec!["Drama", "Comedy"]);
        assert_eq!(preference.industry, "Bollywood");
        assert_eq!(preference.last_movie, "Sholay");
    }
}
