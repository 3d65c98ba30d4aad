pub mod catalog;
pub mod preference;
pub mod user;

pub use catalog::{CatalogItem, ScoredItem};
pub use preference::{Industry, Preference, PreferenceUpdate};
pub use user::{User, UserProfile, UserUpdate};
