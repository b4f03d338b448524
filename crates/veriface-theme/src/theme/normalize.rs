//! Theme normalization.
//!
//! Walks every color-bearing field of a [`Theme`] and replaces it with
//! its canonical uppercase hex form. A scalar field that fails to parse
//! becomes unset; a color array is all-or-nothing (one bad stop clears
//! the whole array). Image references, enums, numeric settings, and
//! message objects pass through untouched. Parser failures never
//! propagate as errors; each field degrades independently.

use tracing::warn;

use super::types::Theme;
use crate::colors::convert_to_hex_color;

/// Normalize every color-bearing field of a theme descriptor.
///
/// `None` in, `None` out. The descriptor is owned and returned; callers
/// thread it themselves, there is no shared theme state.
pub fn normalize_theme(theme: Option<Theme>) -> Option<Theme> {
    let mut theme = theme?;

    // The gradient-with-metadata field first: only its `colors` array is
    // color-valued, the stop locations and points survive as-is.
    if let Some(feedback) = theme.feedback_background_colors_ios.as_mut() {
        normalize_color_list(&mut feedback.colors, "feedbackBackgroundColorsIos.colors");
    }

    normalize_color_field(&mut theme.frame_background_color, "frameBackgroundColor");
    normalize_color_field(&mut theme.frame_border_color, "frameBorderColor");
    normalize_color_field(&mut theme.overlay_background_color, "overlayBackgroundColor");

    normalize_color_field(
        &mut theme.guidance_background_colors_android,
        "guidanceBackgroundColorsAndroid",
    );
    normalize_color_list(
        &mut theme.guidance_background_colors_ios,
        "guidanceBackgroundColorsIos",
    );
    normalize_color_field(&mut theme.guidance_foreground_color, "guidanceForegroundColor");
    normalize_color_field(
        &mut theme.guidance_button_background_normal_color,
        "guidanceButtonBackgroundNormalColor",
    );
    normalize_color_field(
        &mut theme.guidance_button_background_disabled_color,
        "guidanceButtonBackgroundDisabledColor",
    );
    normalize_color_field(
        &mut theme.guidance_button_background_highlight_color,
        "guidanceButtonBackgroundHighlightColor",
    );
    normalize_color_field(
        &mut theme.guidance_button_text_normal_color,
        "guidanceButtonTextNormalColor",
    );
    normalize_color_field(
        &mut theme.guidance_button_text_disabled_color,
        "guidanceButtonTextDisabledColor",
    );
    normalize_color_field(
        &mut theme.guidance_button_text_highlight_color,
        "guidanceButtonTextHighlightColor",
    );
    normalize_color_field(
        &mut theme.guidance_retry_screen_image_border_color,
        "guidanceRetryScreenImageBorderColor",
    );
    normalize_color_field(
        &mut theme.guidance_retry_screen_oval_stroke_color,
        "guidanceRetryScreenOvalStrokeColor",
    );

    normalize_color_field(&mut theme.oval_stroke_color, "ovalStrokeColor");
    normalize_color_field(&mut theme.oval_first_progress_color, "ovalFirstProgressColor");
    normalize_color_field(&mut theme.oval_second_progress_color, "ovalSecondProgressColor");

    normalize_color_field(
        &mut theme.feedback_background_colors_android,
        "feedbackBackgroundColorsAndroid",
    );
    normalize_color_field(&mut theme.feedback_text_color, "feedbackTextColor");

    normalize_color_field(
        &mut theme.result_screen_background_colors_android,
        "resultScreenBackgroundColorsAndroid",
    );
    normalize_color_list(
        &mut theme.result_screen_background_colors_ios,
        "resultScreenBackgroundColorsIos",
    );
    normalize_color_field(
        &mut theme.result_screen_foreground_color,
        "resultScreenForegroundColor",
    );
    normalize_color_field(
        &mut theme.result_screen_activity_indicator_color,
        "resultScreenActivityIndicatorColor",
    );
    normalize_color_field(
        &mut theme.result_screen_result_animation_background_color,
        "resultScreenResultAnimationBackgroundColor",
    );
    normalize_color_field(
        &mut theme.result_screen_result_animation_foreground_color,
        "resultScreenResultAnimationForegroundColor",
    );
    normalize_color_field(
        &mut theme.result_screen_upload_progress_fill_color,
        "resultScreenUploadProgressFillColor",
    );

    normalize_color_field(
        &mut theme.id_scan_selection_screen_background_colors_android,
        "idScanSelectionScreenBackgroundColorsAndroid",
    );
    normalize_color_list(
        &mut theme.id_scan_selection_screen_background_colors_ios,
        "idScanSelectionScreenBackgroundColorsIos",
    );
    normalize_color_field(
        &mut theme.id_scan_selection_screen_foreground_color,
        "idScanSelectionScreenForegroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_review_screen_foreground_color,
        "idScanReviewScreenForegroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_review_screen_text_background_color,
        "idScanReviewScreenTextBackgroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_capture_screen_foreground_color,
        "idScanCaptureScreenForegroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_capture_screen_text_background_color,
        "idScanCaptureScreenTextBackgroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_capture_screen_background_color,
        "idScanCaptureScreenBackgroundColor",
    );
    normalize_color_field(
        &mut theme.id_scan_capture_frame_stroke_color,
        "idScanCaptureFrameStrokeColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_background_normal_color,
        "idScanButtonBackgroundNormalColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_background_disabled_color,
        "idScanButtonBackgroundDisabledColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_background_highlight_color,
        "idScanButtonBackgroundHighlightColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_text_normal_color,
        "idScanButtonTextNormalColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_text_disabled_color,
        "idScanButtonTextDisabledColor",
    );
    normalize_color_field(
        &mut theme.id_scan_button_text_highlight_color,
        "idScanButtonTextHighlightColor",
    );

    // logo_image, cancel_image, the enums, frame_corner_radius, and the
    // message objects are not color-valued and stay as provided.

    Some(theme)
}

/// Replace a scalar color field with its canonical hex form, or clear it.
fn normalize_color_field(field: &mut Option<String>, name: &str) {
    if let Some(raw) = field.take() {
        match convert_to_hex_color(&raw) {
            Some(hex) => *field = Some(hex),
            None => warn!("dropping theme field {name}: unparseable color {raw:?}"),
        }
    }
}

/// Replace a color array with its converted form. All-or-nothing: one
/// unparseable stop clears the whole array.
fn normalize_color_list(field: &mut Option<Vec<String>>, name: &str) {
    if let Some(raw) = field.take() {
        let converted: Option<Vec<String>> =
            raw.iter().map(|color| convert_to_hex_color(color)).collect();
        match converted {
            Some(list) => *field = Some(list),
            None => warn!("dropping theme field {name}: gradient stop failed to parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::{DefaultMessage, DefaultScanMessage, FeedbackBackgroundColor};
    use veriface_common::{ButtonLocation, Point, StatusBarColor};

    fn gradient(colors: &[&str]) -> FeedbackBackgroundColor {
        FeedbackBackgroundColor {
            colors: Some(colors.iter().map(|c| c.to_string()).collect()),
            locations: Some(vec![0.0, 1.0]),
            start_point: Some(Point {
                x: Some(0.0),
                y: Some(0.0),
            }),
            end_point: Some(Point {
                x: Some(1.0),
                y: Some(1.0),
            }),
        }
    }

    #[test]
    fn none_in_none_out() {
        assert_eq!(normalize_theme(None), None);
    }

    #[test]
    fn empty_theme_is_unchanged() {
        let theme = normalize_theme(Some(Theme::default())).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn scalar_fields_convert_to_canonical_hex() {
        let theme = Theme {
            feedback_text_color: Some("rgb(0,255,200)".into()),
            frame_border_color: Some("#0fc".into()),
            oval_stroke_color: Some("hsla(167, 100%, 50%, 0.7)".into()),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(theme.feedback_text_color.as_deref(), Some("#00FFC8"));
        assert_eq!(theme.frame_border_color.as_deref(), Some("#00FFCC"));
        assert_eq!(theme.oval_stroke_color.as_deref(), Some("#00FFC8B3"));
    }

    #[test]
    fn invalid_scalar_field_becomes_unset() {
        let theme = Theme {
            frame_background_color: Some("not-a-color".into()),
            feedback_text_color: Some("#00FFC8".into()),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(theme.frame_background_color, None);
        assert_eq!(theme.feedback_text_color.as_deref(), Some("#00FFC8"));
    }

    #[test]
    fn color_array_converts_every_stop() {
        let theme = Theme {
            guidance_background_colors_ios: Some(vec![
                "rgb(0,255,200)".into(),
                "#0FC".into(),
                "hsl(167, 100%, 50%)".into(),
            ]),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(
            theme.guidance_background_colors_ios,
            Some(vec![
                "#00FFC8".to_string(),
                "#00FFCC".to_string(),
                "#00FFC8".to_string(),
            ])
        );
    }

    #[test]
    fn color_array_is_all_or_nothing() {
        let theme = Theme {
            result_screen_background_colors_ios: Some(vec![
                "rgb(0,255,200)".into(),
                "invalid".into(),
            ]),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(theme.result_screen_background_colors_ios, None);
    }

    #[test]
    fn gradient_colors_convert_and_metadata_survives() {
        let theme = Theme {
            feedback_background_colors_ios: Some(gradient(&[
                "rgba(0,255,200,0.7)",
                "#0FCB",
            ])),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        let feedback = theme.feedback_background_colors_ios.unwrap();
        assert_eq!(
            feedback.colors,
            Some(vec!["#00FFC8B3".to_string(), "#00FFCCBB".to_string()])
        );
        assert_eq!(feedback.locations, Some(vec![0.0, 1.0]));
        assert!(feedback.start_point.is_some());
        assert!(feedback.end_point.is_some());
    }

    #[test]
    fn gradient_with_bad_stop_clears_only_its_colors() {
        let theme = Theme {
            feedback_background_colors_ios: Some(gradient(&["rgb(0,255,200)", "invalid"])),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        let feedback = theme.feedback_background_colors_ios.unwrap();
        assert_eq!(feedback.colors, None);
        assert_eq!(feedback.locations, Some(vec![0.0, 1.0]));
    }

    #[test]
    fn image_references_are_never_color_interpreted() {
        // A hex-shaped image name must survive untouched.
        let theme = Theme {
            logo_image: Some("#00FFC8".into()),
            cancel_image: Some("cancel_icon".into()),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(theme.logo_image.as_deref(), Some("#00FFC8"));
        assert_eq!(theme.cancel_image.as_deref(), Some("cancel_icon"));
    }

    #[test]
    fn non_color_fields_pass_through() {
        let theme = Theme {
            cancel_button_location: Some(ButtonLocation::TopLeft),
            default_status_bar_color_ios: Some(StatusBarColor::LightContent),
            frame_corner_radius: Some(20),
            authenticate_message: Some(DefaultMessage {
                success_message: Some("Authenticated".into()),
                upload_message_ios: None,
            }),
            photo_id_scan_message: Some(DefaultScanMessage {
                front_side_upload_started: Some("Uploading ID".into()),
                success_nfc: Some("ID Verified".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let normalized = normalize_theme(Some(theme.clone())).unwrap();
        assert_eq!(normalized, theme);
    }

    #[test]
    fn fields_degrade_independently() {
        let theme = Theme {
            frame_background_color: Some("rgb(0,255,200)".into()),
            frame_border_color: Some("bogus".into()),
            cancel_button_location: Some(ButtonLocation::TopRight),
            ..Default::default()
        };

        let theme = normalize_theme(Some(theme)).unwrap();
        assert_eq!(theme.frame_background_color.as_deref(), Some("#00FFC8"));
        assert_eq!(theme.frame_border_color, None);
        assert_eq!(theme.cancel_button_location, Some(ButtonLocation::TopRight));
    }

    #[test]
    fn normalization_is_idempotent() {
        let theme = Theme {
            feedback_text_color: Some("hsl(167, 100%, 50%)".into()),
            guidance_background_colors_ios: Some(vec!["#0FC".into(), "#0FCB".into()]),
            ..Default::default()
        };

        let once = normalize_theme(Some(theme)).unwrap();
        let twice = normalize_theme(Some(once.clone())).unwrap();
        assert_eq!(once, twice);
    }
}
