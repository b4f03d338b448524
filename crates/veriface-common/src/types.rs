use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed sRGB color.
///
/// The alpha channel records presence, not just value: a color parsed from
/// an alpha-bearing notation (`#RGBA`, `#RRGGBBAA`, `rgba()`, `hsla()`)
/// keeps its alpha byte even when fully opaque, so `rgba(0,0,0,1.0)`
/// renders as `#000000FF`, not `#000000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<u8>,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    /// Render the canonical uppercase hex form: `#RRGGBB`, or `#RRGGBBAA`
    /// when an alpha channel is present.
    pub fn to_hex(&self) -> String {
        match self.alpha {
            Some(a) => format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a),
            None => format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Cancel button placement on the capture screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonLocation {
    Disabled,
    TopLeft,
    TopRight,
}

/// Status bar style during the capture flow (iOS only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusBarColor {
    DarkContent,
    Default,
    LightContent,
}

/// A point in the layer's coordinate space, used for gradient geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}
