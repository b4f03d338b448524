//! Full theme descriptor validation.
//!
//! Checks every color-bearing field against the color grammar and the
//! corner radius against its range, collecting all errors into one
//! report. Validation never mutates the descriptor; use
//! [`normalize_theme`](crate::theme::normalize_theme) to canonicalize
//! with per-field degradation instead.

use crate::colors::parse_color;
use crate::theme::Theme;
use veriface_common::{Result, ThemeError};

/// Run all validations on a theme descriptor, collecting all errors.
pub fn validate(theme: &Theme) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    validate_color_field(&mut errors, "frameBackgroundColor", &theme.frame_background_color);
    validate_color_field(&mut errors, "frameBorderColor", &theme.frame_border_color);
    validate_color_field(
        &mut errors,
        "overlayBackgroundColor",
        &theme.overlay_background_color,
    );

    validate_color_field(
        &mut errors,
        "guidanceBackgroundColorsAndroid",
        &theme.guidance_background_colors_android,
    );
    validate_color_list(
        &mut errors,
        "guidanceBackgroundColorsIos",
        &theme.guidance_background_colors_ios,
    );
    validate_color_field(
        &mut errors,
        "guidanceForegroundColor",
        &theme.guidance_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonBackgroundNormalColor",
        &theme.guidance_button_background_normal_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonBackgroundDisabledColor",
        &theme.guidance_button_background_disabled_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonBackgroundHighlightColor",
        &theme.guidance_button_background_highlight_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonTextNormalColor",
        &theme.guidance_button_text_normal_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonTextDisabledColor",
        &theme.guidance_button_text_disabled_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceButtonTextHighlightColor",
        &theme.guidance_button_text_highlight_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceRetryScreenImageBorderColor",
        &theme.guidance_retry_screen_image_border_color,
    );
    validate_color_field(
        &mut errors,
        "guidanceRetryScreenOvalStrokeColor",
        &theme.guidance_retry_screen_oval_stroke_color,
    );

    validate_color_field(&mut errors, "ovalStrokeColor", &theme.oval_stroke_color);
    validate_color_field(
        &mut errors,
        "ovalFirstProgressColor",
        &theme.oval_first_progress_color,
    );
    validate_color_field(
        &mut errors,
        "ovalSecondProgressColor",
        &theme.oval_second_progress_color,
    );

    validate_color_field(
        &mut errors,
        "feedbackBackgroundColorsAndroid",
        &theme.feedback_background_colors_android,
    );
    if let Some(feedback) = &theme.feedback_background_colors_ios {
        validate_color_list(
            &mut errors,
            "feedbackBackgroundColorsIos.colors",
            &feedback.colors,
        );
    }
    validate_color_field(&mut errors, "feedbackTextColor", &theme.feedback_text_color);

    validate_color_field(
        &mut errors,
        "resultScreenBackgroundColorsAndroid",
        &theme.result_screen_background_colors_android,
    );
    validate_color_list(
        &mut errors,
        "resultScreenBackgroundColorsIos",
        &theme.result_screen_background_colors_ios,
    );
    validate_color_field(
        &mut errors,
        "resultScreenForegroundColor",
        &theme.result_screen_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "resultScreenActivityIndicatorColor",
        &theme.result_screen_activity_indicator_color,
    );
    validate_color_field(
        &mut errors,
        "resultScreenResultAnimationBackgroundColor",
        &theme.result_screen_result_animation_background_color,
    );
    validate_color_field(
        &mut errors,
        "resultScreenResultAnimationForegroundColor",
        &theme.result_screen_result_animation_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "resultScreenUploadProgressFillColor",
        &theme.result_screen_upload_progress_fill_color,
    );

    validate_color_field(
        &mut errors,
        "idScanSelectionScreenBackgroundColorsAndroid",
        &theme.id_scan_selection_screen_background_colors_android,
    );
    validate_color_list(
        &mut errors,
        "idScanSelectionScreenBackgroundColorsIos",
        &theme.id_scan_selection_screen_background_colors_ios,
    );
    validate_color_field(
        &mut errors,
        "idScanSelectionScreenForegroundColor",
        &theme.id_scan_selection_screen_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "idScanReviewScreenForegroundColor",
        &theme.id_scan_review_screen_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "idScanReviewScreenTextBackgroundColor",
        &theme.id_scan_review_screen_text_background_color,
    );
    validate_color_field(
        &mut errors,
        "idScanCaptureScreenForegroundColor",
        &theme.id_scan_capture_screen_foreground_color,
    );
    validate_color_field(
        &mut errors,
        "idScanCaptureScreenTextBackgroundColor",
        &theme.id_scan_capture_screen_text_background_color,
    );
    validate_color_field(
        &mut errors,
        "idScanCaptureScreenBackgroundColor",
        &theme.id_scan_capture_screen_background_color,
    );
    validate_color_field(
        &mut errors,
        "idScanCaptureFrameStrokeColor",
        &theme.id_scan_capture_frame_stroke_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonBackgroundNormalColor",
        &theme.id_scan_button_background_normal_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonBackgroundDisabledColor",
        &theme.id_scan_button_background_disabled_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonBackgroundHighlightColor",
        &theme.id_scan_button_background_highlight_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonTextNormalColor",
        &theme.id_scan_button_text_normal_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonTextDisabledColor",
        &theme.id_scan_button_text_disabled_color,
    );
    validate_color_field(
        &mut errors,
        "idScanButtonTextHighlightColor",
        &theme.id_scan_button_text_highlight_color,
    );

    if let Some(radius) = theme.frame_corner_radius {
        if radius > 100 {
            errors.push(format!("frameCornerRadius = {radius} is out of range [0, 100]"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::ValidationError(errors.join("; ")))
    }
}

fn validate_color_field(errors: &mut Vec<String>, name: &str, value: &Option<String>) {
    if let Some(color) = value {
        if let Err(e) = parse_color(color) {
            errors.push(format!("{name}: {e}"));
        }
    }
}

fn validate_color_list(errors: &mut Vec<String>, name: &str, values: &Option<Vec<String>>) {
    if let Some(colors) = values {
        for (index, color) in colors.iter().enumerate() {
            if let Err(e) = parse_color(color) {
                errors.push(format!("{name}[{index}]: {e}"));
            }
        }
    }
}
