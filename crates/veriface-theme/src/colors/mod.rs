//! Color notation parsing and canonicalization.
//!
//! Accepts five textual notations — hex (`#RGB`, `#RGBA`, `#RRGGBB`,
//! `#RRGGBBAA`), `rgb()`, `rgba()`, `hsl()`, and `hsla()` — and
//! canonicalizes them into an uppercase hex string. Function keywords
//! match case-insensitively; whitespace inside the parentheses is
//! tolerated; the `%` after saturation and lightness is optional.

mod parse;


use veriface_common::{Color, ColorParseError};

use parse::{parse_hex, parse_hsl, parse_hsla, parse_rgb, parse_rgba, HEX_RE};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB` / `#RGBA` / `#RRGGBB` / `#RRGGBBAA`
/// - `rgb(r,g,b)` with integer channels 0-255
/// - `rgba(r,g,b,a)` where `a` is 0.0-1.0
/// - `hsl(h,s%,l%)` with h 0-360 and s/l 0-100 (`%` optional)
/// - `hsla(h,s%,l%,a)` where `a` is 0.0-1.0
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if s.starts_with('#') {
        return parse_hex(s);
    }

    // Classify on the keyword through its opening paren, so an unknown
    // keyword such as "rgbx(" is never committed to a notation. The
    // alpha-bearing prefixes go first: "rgba(" also starts with "rgb".
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgba(") {
        return parse_rgba(s);
    }
    if lower.starts_with("rgb(") {
        return parse_rgb(s);
    }
    if lower.starts_with("hsla(") {
        return parse_hsla(s);
    }
    if lower.starts_with("hsl(") {
        return parse_hsl(s);
    }

    Err(ColorParseError::UnrecognizedNotation(s.to_string()))
}

/// Canonicalize a color string into uppercase `#RRGGBB` / `#RRGGBBAA`
/// form, or `None` if the input matches no recognized notation or has a
/// component out of range.
///
/// The rendered output is checked against the hex grammar before being
/// returned, so this never yields a malformed string.
pub fn convert_to_hex_color(s: &str) -> Option<String> {
    let hex = parse_color(s).ok()?.to_hex();
    HEX_RE.is_match(&hex).then_some(hex)
}

/// Validate that a string is a recognized, in-range color.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
