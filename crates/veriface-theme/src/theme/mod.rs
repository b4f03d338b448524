//! Theme descriptor types, normalization, and JSON interchange.
//!
//! A descriptor arrives from the bridge with colors in any accepted
//! notation; [`normalize_theme`] canonicalizes every color-bearing field
//! to uppercase hex before the descriptor is handed to the native
//! rendering side.

mod loader;
mod normalize;
mod types;

pub use loader::{theme_from_json, theme_from_path, theme_to_json};
pub use normalize::normalize_theme;
pub use types::{
    DefaultMessage, DefaultScanMessage, FeedbackBackgroundColor, ScanMatchMessage, Theme,
};
