pub mod catalog;
pub mod recommender;
pub mod scorer;

pub use catalog::CatalogSources;
pub use recommender::{recommend_for_user, Recommendations};
