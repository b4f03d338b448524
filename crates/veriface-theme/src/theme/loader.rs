//! Theme descriptor JSON interchange.
//!
//! The bridge layer hands descriptors across as JSON objects with
//! camelCase keys. Unknown keys are ignored; missing fields stay unset.

use std::path::Path;
use tracing::info;
use veriface_common::{Result, ThemeError};

use super::types::Theme;

/// Parse a theme descriptor from a JSON string.
pub fn theme_from_json(json: &str) -> Result<Theme> {
    serde_json::from_str(json)
        .map_err(|e| ThemeError::ParseError(format!("failed to parse theme JSON: {e}")))
}

/// Load a theme descriptor from a JSON file.
pub fn theme_from_path(path: &Path) -> Result<Theme> {
    if !path.exists() {
        return Err(ThemeError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ThemeError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme = theme_from_json(&content)?;
    info!("loaded theme from {}", path.display());
    Ok(theme)
}

/// Serialize a theme descriptor to a pretty-printed JSON string.
pub fn theme_to_json(theme: &Theme) -> String {
    serde_json::to_string_pretty(theme)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize theme: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_keys() {
        let theme = theme_from_json(
            r##"{
                "feedbackTextColor": "rgb(0,255,200)",
                "guidanceBackgroundColorsIos": ["#0FC", "#0FCB"],
                "cancelButtonLocation": "TOP_RIGHT",
                "frameCornerRadius": 12
            }"##,
        )
        .unwrap();

        assert_eq!(theme.feedback_text_color.as_deref(), Some("rgb(0,255,200)"));
        assert_eq!(
            theme.guidance_background_colors_ios,
            Some(vec!["#0FC".to_string(), "#0FCB".to_string()])
        );
        assert_eq!(theme.frame_corner_radius, Some(12));
    }

    #[test]
    fn parses_nested_gradient() {
        let theme = theme_from_json(
            r##"{
                "feedbackBackgroundColorsIos": {
                    "colors": ["#00FFC8", "#00FFCC"],
                    "locations": [0.0, 1.0],
                    "startPoint": { "x": 0.0, "y": 0.0 },
                    "endPoint": { "x": 1.0, "y": 1.0 }
                }
            }"##,
        )
        .unwrap();

        let feedback = theme.feedback_background_colors_ios.unwrap();
        assert_eq!(
            feedback.colors,
            Some(vec!["#00FFC8".to_string(), "#00FFCC".to_string()])
        );
        assert_eq!(feedback.start_point.unwrap().x, Some(0.0));
    }

    #[test]
    fn scan_message_keys_round_trip_with_acronym_casing() {
        let input = r##"{
            "photoIdScanMessage": {
                "frontSideUploadStarted": "Uploading Encrypted ID Scan",
                "skippedNFCUploadStarted": "Uploading ID Details",
                "successFrontSideNFCNext": "Front of ID Scanned",
                "retryOCRResultsNotGoodEnough": "ID Text Not Legible",
                "successNFC": "ID Details Uploaded"
            },
            "photoIdMatchMessage": {
                "successMessage": "Photo ID Matched",
                "retryIDNotFullyVisible": "ID Document Not Fully Visible"
            }
        }"##;

        let theme = theme_from_json(input).unwrap();

        let scan = theme.photo_id_scan_message.as_ref().unwrap();
        assert_eq!(
            scan.front_side_upload_started.as_deref(),
            Some("Uploading Encrypted ID Scan")
        );
        assert_eq!(
            scan.skipped_nfc_upload_started.as_deref(),
            Some("Uploading ID Details")
        );
        assert_eq!(scan.success_nfc.as_deref(), Some("ID Details Uploaded"));

        let matched = theme.photo_id_match_message.as_ref().unwrap();
        assert_eq!(
            matched.message.success_message.as_deref(),
            Some("Photo ID Matched")
        );
        assert_eq!(
            matched.scan.retry_id_not_fully_visible.as_deref(),
            Some("ID Document Not Fully Visible")
        );

        // The serialized names must come back in the bridge's spelling,
        // acronym capitalization included.
        let json = theme_to_json(&theme);
        assert!(json.contains("\"skippedNFCUploadStarted\""));
        assert!(json.contains("\"successFrontSideNFCNext\""));
        assert!(json.contains("\"retryOCRResultsNotGoodEnough\""));
        assert!(json.contains("\"retryIDNotFullyVisible\""));
        assert!(json.contains("\"successNFC\""));
        assert!(!json.contains("\"skippedNfcUploadStarted\""));

        assert_eq!(theme_from_json(&json).unwrap(), theme);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let theme = theme_from_json(
            r##"{ "someFutureSetting": true, "feedbackTextColor": "#00FFC8" }"##,
        )
        .unwrap();
        assert_eq!(theme.feedback_text_color.as_deref(), Some("#00FFC8"));
    }

    #[test]
    fn empty_object_is_default_theme() {
        let theme = theme_from_json("{}").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = theme_from_json("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::ParseError(_)));
    }

    #[test]
    fn json_round_trip_preserves_unset_fields() {
        let theme = Theme {
            feedback_text_color: Some("#00FFC8".into()),
            ..Default::default()
        };

        let json = theme_to_json(&theme);
        assert!(json.contains("\"feedbackTextColor\""));
        // Unset fields are omitted entirely, not serialized as null.
        assert!(!json.contains("frameBorderColor"));
        assert!(!json.contains("null"));

        let parsed = theme_from_json(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn missing_file_returns_file_not_found() {
        let err = theme_from_path(Path::new("/tmp/nonexistent_veriface_theme.json")).unwrap_err();
        assert!(matches!(err, ThemeError::FileNotFound(_)));
    }

    #[test]
    fn loads_theme_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(
            &path,
            r##"{ "frameBackgroundColor": "#FFFFFF", "logoImage": "app_logo" }"##,
        )
        .unwrap();

        let theme = theme_from_path(&path).unwrap();
        assert_eq!(theme.frame_background_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(theme.logo_image.as_deref(), Some("app_logo"));
    }

    #[test]
    fn malformed_file_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "this is not valid json {{{").unwrap();

        let err = theme_from_path(&path).unwrap_err();
        assert!(matches!(err, ThemeError::ParseError(_)));
    }
}
