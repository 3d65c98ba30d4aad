use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::{CatalogItem, Industry};

/// Upper bound on accepted rows per catalog scan. The vocabulary is rebuilt
/// from the whole scan on every request, so this cap is what keeps the
/// per-request cost bounded.
pub const MAX_CATALOG_ROWS: usize = 30_000;

/// Locations of the two catalog files.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub bollywood: PathBuf,
    pub hollywood: PathBuf,
}

impl CatalogSources {
    pub fn path_for(&self, industry: Industry) -> &Path {
        match industry {
            Industry::Bollywood => &self.bollywood,
            Industry::Hollywood => &self.hollywood,
        }
    }
}

/// Column positions resolved from the header row.
///
/// The two catalog sources name their columns differently; both variants
/// are accepted: `movie_name`/`title`, `genre`/`genres`, `movie_id`/`imdbId`.
struct Columns {
    title: usize,
    genre: usize,
    id: usize,
}

fn resolve_columns(headers: &csv::StringRecord) -> Option<Columns> {
    let position = |names: [&str; 2]| {
        headers
            .iter()
            .position(|header| names.contains(&header.trim()))
    };

    Some(Columns {
        title: position(["movie_name", "title"])?,
        genre: position(["genre", "genres"])?,
        id: position(["movie_id", "imdbId"])?,
    })
}

/// Reads the catalog for one industry fresh from disk.
///
/// There is no caching across requests; every call re-reads the file. Rows
/// are accepted until [`MAX_CATALOG_ROWS`], and only when title, genre
/// string and external id are all non-empty after trimming — anything else
/// is dropped without error. The genre field splits on the industry's
/// delimiter with each token trimmed.
///
/// Returns [`AppError::EmptyCatalog`] when the scan accepts zero rows,
/// which callers must keep distinct from "nothing matched the user".
pub fn load_catalog(path: &Path, industry: Industry) -> AppResult<Vec<CatalogItem>> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns = match resolve_columns(reader.headers()?) {
        Some(columns) => columns,
        // Unrecognized headers accept nothing, same as a file of unusable rows.
        None => return Err(AppError::EmptyCatalog),
    };

    let delimiter = industry.genre_delimiter();
    let mut items = Vec::new();

    for result in reader.records() {
        if items.len() >= MAX_CATALOG_ROWS {
            break;
        }

        let record = result?;
        let title = record.get(columns.title).unwrap_or("").trim();
        let genre = record.get(columns.genre).unwrap_or("").trim();
        let imdb_id = record.get(columns.id).unwrap_or("").trim();

        if title.is_empty() || genre.is_empty() || imdb_id.is_empty() {
            continue;
        }

        items.push(CatalogItem {
            title: title.to_string(),
            genres: genre.split(delimiter).map(|g| g.trim().to_string()).collect(),
            imdb_id: imdb_id.to_string(),
        });
    }

    if items.is_empty() {
        return Err(AppError::EmptyCatalog);
    }

    tracing::debug!(
        path = %path.display(),
        industry = %industry,
        accepted = items.len(),
        "Catalog scan complete"
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_loads_hollywood_columns_and_pipe_delimiter() {
        let file = write_csv(&[
            "title,genres,imdbId",
            "The Matrix,Action|Sci-Fi,tt0133093",
            "Heat,Action|Crime|Drama,tt0113277",
        ]);

        let items = load_catalog(file.path(), Industry::Hollywood).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "The Matrix");
        assert_eq!(items[0].genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(items[1].imdb_id, "tt0113277");
    }

    #[test]
    fn test_loads_bollywood_columns_and_comma_delimiter() {
        let file = write_csv(&[
            "movie_name,genre,movie_id",
            "Sholay,\"Action, Adventure\",b001",
        ]);

        let items = load_catalog(file.path(), Industry::Bollywood).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].genres, vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_drops_rows_with_missing_fields() {
        let file = write_csv(&[
            "title,genres,imdbId",
            "No Genre,,tt0000001",
            ",Action,tt0000002",
            "No Id,Action,",
            "   ,Action,tt0000003",
            "Kept,Action,tt0000004",
        ]);

        let items = load_catalog(file.path(), Industry::Hollywood).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kept");
    }

    #[test]
    fn test_empty_catalog_is_a_hard_failure() {
        let file = write_csv(&["title,genres,imdbId", "No Genre,,tt0000001"]);

        let err = load_catalog(file.path(), Industry::Hollywood).unwrap_err();
        assert!(matches!(err, AppError::EmptyCatalog));
    }

    #[test]
    fn test_unrecognized_headers_are_a_hard_failure() {
        let file = write_csv(&["name,tags,id", "The Matrix,Action,tt0133093"]);

        let err = load_catalog(file.path(), Industry::Hollywood).unwrap_err();
        assert!(matches!(err, AppError::EmptyCatalog));
    }

    #[test]
    fn test_row_cap_stops_the_scan() {
        let mut lines = vec!["title,genres,imdbId".to_string()];
        for i in 0..(MAX_CATALOG_ROWS + 5) {
            lines.push(format!("Movie {i},Action,tt{i:07}"));
        }
        let mut file = NamedTempFile::new().unwrap();
        for line in &lines {
            writeln!(file, "{}", line).unwrap();
        }

        let items = load_catalog(file.path(), Industry::Hollywood).unwrap();
        assert_eq!(items.len(), MAX_CATALOG_ROWS);
    }

    #[test]
    fn test_genre_tokens_are_trimmed() {
        let file = write_csv(&[
            "title,genres,imdbId",
            "Spaced,Action | Sci-Fi  |Comedy,tt0187664",
        ]);

        let items = load_catalog(file.path(), Industry::Hollywood).unwrap();
        assert_eq!(items[0].genres, vec!["Action", "Sci-Fi", "Comedy"]);
    }
}
