//! Veriface theme normalization.
//!
//! Canonicalizes the colors of an SDK theme descriptor: every color
//! field, in any of the accepted CSS notations (hex, `rgb()`, `rgba()`,
//! `hsl()`, `hsla()`), is rewritten as an uppercase `#RRGGBB` /
//! `#RRGGBBAA` string before the descriptor reaches native rendering.
//! Unparseable color fields are dropped rather than forwarded.
//!
//! # Quick Start
//!
//! ```rust
//! use veriface_theme::{convert_to_hex_color, normalize_theme_json};
//!
//! assert_eq!(
//!     convert_to_hex_color("rgb(0,255,200)").as_deref(),
//!     Some("#00FFC8"),
//! );
//!
//! let json = normalize_theme_json(r#"{ "feedbackTextColor": "hsl(167, 100%, 50%)" }"#)?;
//! assert!(json.contains("#00FFC8"));
//! # Ok::<(), veriface_common::ThemeError>(())
//! ```

pub mod colors;
pub mod theme;
pub mod validation;

// Re-export core entry points for convenience
pub use colors::{convert_to_hex_color, parse_color, validate_color};
pub use theme::{normalize_theme, theme_from_json, theme_from_path, theme_to_json, Theme};
pub use validation::validate;

use veriface_common::Result;

/// Convenience function for the bridge boundary: parse a descriptor from
/// JSON, normalize every color field, and serialize it back.
pub fn normalize_theme_json(json: &str) -> Result<String> {
    let theme = theme_from_json(json)?;
    let normalized = normalize_theme(Some(theme)).unwrap_or_default();
    Ok(theme_to_json(&normalized))
}
