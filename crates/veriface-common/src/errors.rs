use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("malformed {notation}() color: {value}")]
    MalformedFunction {
        notation: &'static str,
        value: String,
    },

    #[error("{notation}() {component} component out of range: {value}")]
    OutOfRange {
        notation: &'static str,
        component: &'static str,
        value: f64,
    },

    #[error("unrecognized color notation: {0}")]
    UnrecognizedNotation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme parse error: {0}")]
    ParseError(String),

    #[error("theme validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parse_error_display() {
        let err = ColorParseError::Empty;
        assert_eq!(err.to_string(), "empty color string");

        let err = ColorParseError::InvalidHex("#12345".into());
        assert_eq!(err.to_string(), "invalid hex color: #12345");

        let err = ColorParseError::MalformedFunction {
            notation: "rgb",
            value: "rgb(0,0)".into(),
        };
        assert_eq!(err.to_string(), "malformed rgb() color: rgb(0,0)");

        let err = ColorParseError::OutOfRange {
            notation: "hsl",
            component: "saturation",
            value: 101.0,
        };
        assert_eq!(
            err.to_string(),
            "hsl() saturation component out of range: 101"
        );
    }

    #[test]
    fn theme_error_display() {
        let err = ThemeError::FileNotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(err.to_string(), "theme file not found: /tmp/missing.json");

        let err = ThemeError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "theme parse error: unexpected token");

        let err = ThemeError::ValidationError("bad frameBorderColor".into());
        assert_eq!(
            err.to_string(),
            "theme validation error: bad frameBorderColor"
        );
    }

    #[test]
    fn theme_error_from_color_parse_error() {
        let color_err = ColorParseError::UnrecognizedNotation("teal".into());
        let theme_err: ThemeError = color_err.into();
        assert!(matches!(theme_err, ThemeError::Color(_)));
        assert!(theme_err.to_string().contains("teal"));
    }
}
