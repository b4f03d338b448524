//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex, rgb/rgba, and hsl/hsla string
//! notations into [`Color`] values. Not part of the public API.
//!
//! Every functional notation is matched against an anchored grammar whose
//! component captures are digit classes, so signed, empty, or non-numeric
//! tokens fail classification outright instead of being coerced to a
//! number that might slip past a range check.

use regex::Regex;
use std::sync::LazyLock;
use veriface_common::{Color, ColorParseError};

/// Hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// rgb() with exactly three integer channels.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// rgba() with three integer channels and a float alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

/// hsl() with an integer hue and percent-optional saturation/lightness.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*%?\s*,\s*(\d{1,3})\s*%?\s*\)$").unwrap()
});

/// hsla() with an integer hue, percent-optional saturation/lightness,
/// and a float alpha.
pub(crate) static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*%?\s*,\s*(\d{1,3})\s*%?\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

/// Parse a hex color string (#RGB, #RGBA, #RRGGBB, or #RRGGBBAA).
///
/// The 3- and 4-digit shorthands expand by doubling each digit, so a
/// nibble `d` becomes the byte `d * 17`.
pub(super) fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    if !HEX_RE.is_match(s) {
        return Err(ColorParseError::InvalidHex(s.to_string()));
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

    let color = match hex.len() {
        3 => Color::from_rgb(
            nibble(0).map_err(invalid(s))? * 17,
            nibble(1).map_err(invalid(s))? * 17,
            nibble(2).map_err(invalid(s))? * 17,
        ),
        4 => Color::from_rgba(
            nibble(0).map_err(invalid(s))? * 17,
            nibble(1).map_err(invalid(s))? * 17,
            nibble(2).map_err(invalid(s))? * 17,
            nibble(3).map_err(invalid(s))? * 17,
        ),
        6 => Color::from_rgb(
            byte(0).map_err(invalid(s))?,
            byte(2).map_err(invalid(s))?,
            byte(4).map_err(invalid(s))?,
        ),
        8 => Color::from_rgba(
            byte(0).map_err(invalid(s))?,
            byte(2).map_err(invalid(s))?,
            byte(4).map_err(invalid(s))?,
            byte(6).map_err(invalid(s))?,
        ),
        _ => return Err(ColorParseError::InvalidHex(s.to_string())),
    };

    Ok(color)
}

fn invalid(s: &str) -> impl Fn(std::num::ParseIntError) -> ColorParseError + '_ {
    move |_| ColorParseError::InvalidHex(s.to_string())
}

/// Parse an `rgb(r,g,b)` color string.
pub(super) fn parse_rgb(s: &str) -> Result<Color, ColorParseError> {
    let caps = RGB_RE
        .captures(s)
        .ok_or_else(|| malformed("rgb", s))?;

    let r = rgb_channel("rgb", "red", &caps[1])?;
    let g = rgb_channel("rgb", "green", &caps[2])?;
    let b = rgb_channel("rgb", "blue", &caps[3])?;

    Ok(Color::from_rgb(r, g, b))
}

/// Parse an `rgba(r,g,b,a)` color string. Alpha is a 0.0-1.0 float and
/// rounds to a 0-255 byte.
pub(super) fn parse_rgba(s: &str) -> Result<Color, ColorParseError> {
    let caps = RGBA_RE
        .captures(s)
        .ok_or_else(|| malformed("rgba", s))?;

    let r = rgb_channel("rgba", "red", &caps[1])?;
    let g = rgb_channel("rgba", "green", &caps[2])?;
    let b = rgb_channel("rgba", "blue", &caps[3])?;
    let a = alpha_byte("rgba", &caps[4])?;

    Ok(Color::from_rgba(r, g, b, a))
}

/// Parse an `hsl(h,s%,l%)` color string. The percent signs are optional.
pub(super) fn parse_hsl(s: &str) -> Result<Color, ColorParseError> {
    let caps = HSL_RE
        .captures(s)
        .ok_or_else(|| malformed("hsl", s))?;

    let (h, sat, light) = hsl_components("hsl", &caps[1], &caps[2], &caps[3])?;
    Ok(Color::from_rgb(
        hsl_channel(0.0, h, sat, light),
        hsl_channel(8.0, h, sat, light),
        hsl_channel(4.0, h, sat, light),
    ))
}

/// Parse an `hsla(h,s%,l%,a)` color string.
pub(super) fn parse_hsla(s: &str) -> Result<Color, ColorParseError> {
    let caps = HSLA_RE
        .captures(s)
        .ok_or_else(|| malformed("hsla", s))?;

    let (h, sat, light) = hsl_components("hsla", &caps[1], &caps[2], &caps[3])?;
    let a = alpha_byte("hsla", &caps[4])?;
    Ok(Color::from_rgba(
        hsl_channel(0.0, h, sat, light),
        hsl_channel(8.0, h, sat, light),
        hsl_channel(4.0, h, sat, light),
        a,
    ))
}

fn malformed(notation: &'static str, value: &str) -> ColorParseError {
    ColorParseError::MalformedFunction {
        notation,
        value: value.to_string(),
    }
}

/// Parse and bound-check one integer rgb channel (0-255).
fn rgb_channel(
    notation: &'static str,
    component: &'static str,
    token: &str,
) -> Result<u8, ColorParseError> {
    let value: u16 = token
        .parse()
        .map_err(|_| malformed(notation, token))?;
    if value > 255 {
        return Err(ColorParseError::OutOfRange {
            notation,
            component,
            value: f64::from(value),
        });
    }
    Ok(value as u8)
}

/// Parse and bound-check hue (0-360), saturation and lightness (0-100).
fn hsl_components(
    notation: &'static str,
    h: &str,
    s: &str,
    l: &str,
) -> Result<(f64, f64, f64), ColorParseError> {
    let bounded = |component: &'static str, token: &str, max: u16| {
        let value: u16 = token
            .parse()
            .map_err(|_| malformed(notation, token))?;
        if value > max {
            return Err(ColorParseError::OutOfRange {
                notation,
                component,
                value: f64::from(value),
            });
        }
        Ok(f64::from(value))
    };

    Ok((
        bounded("hue", h, 360)?,
        bounded("saturation", s, 100)?,
        bounded("lightness", l, 100)?,
    ))
}

/// Parse and bound-check a 0.0-1.0 float alpha, rounding to a byte.
fn alpha_byte(notation: &'static str, token: &str) -> Result<u8, ColorParseError> {
    let value: f64 = token
        .parse()
        .map_err(|_| malformed(notation, token))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange {
            notation,
            component: "alpha",
            value,
        });
    }
    Ok((value * 255.0).round() as u8)
}

/// One channel of the standard HSL to RGB conversion.
///
/// `n` selects the channel: 0 for red, 8 for green, 4 for blue.
fn hsl_channel(n: f64, hue: f64, saturation: f64, lightness: f64) -> u8 {
    let l = lightness / 100.0;
    let chroma = (saturation / 100.0) * l.min(1.0 - l);
    let k = (n + hue / 30.0) % 12.0;
    let channel = l - chroma * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
    (255.0 * channel).round() as u8
}
