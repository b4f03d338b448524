//! Theme descriptor type definitions.
//!
//! The descriptor is an explicit schema: every style property the native
//! SDK screens accept is enumerated as an optional, typed field. The
//! normalizer decides what to do with a field from its declared kind
//! (scalar color, color array, gradient-with-metadata, image reference,
//! enum, numeric, message object), never from the runtime shape of a
//! value. All fields are optional; serialization uses the bridge's
//! camelCase names and omits unset fields.

use serde::{Deserialize, Serialize};
use veriface_common::{ButtonLocation, Point, StatusBarColor};

/// Gradient definition for the feedback box background (iOS).
///
/// Only `colors` holds color values; the stop locations and the start/end
/// points are geometry and pass through normalization untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackBackgroundColor {
    /// One color per gradient stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Location of each gradient stop, 0.0-1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Point>,
}

/// Success and upload messages shown during a verification flow.
///
/// Plain display text; never interpreted as color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_message_ios: Option<String>,
}

/// Per-step messages shown during the photo ID scan flow.
///
/// Plain display text; never interpreted as color. Serialized names
/// follow the bridge's spelling, which capitalizes NFC/OCR/ID acronyms
/// inconsistently with plain camelCase, hence the explicit renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultScanMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side_upload_started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side_still_uploading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side_upload_complete_awaiting_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side_upload_complete_awaiting_processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_side_upload_started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_side_still_uploading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_side_upload_complete_awaiting_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_side_upload_complete_awaiting_processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmed_info_upload_started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmed_info_still_uploading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmed_info_upload_complete_awaiting_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_confirmed_info_upload_complete_awaiting_processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_upload_started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_still_uploading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_upload_complete_awaiting_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_upload_complete_awaiting_processing: Option<String>,
    #[serde(rename = "skippedNFCUploadStarted", skip_serializing_if = "Option::is_none")]
    pub skipped_nfc_upload_started: Option<String>,
    #[serde(rename = "skippedNFCStillUploading", skip_serializing_if = "Option::is_none")]
    pub skipped_nfc_still_uploading: Option<String>,
    #[serde(
        rename = "skippedNFCUploadCompleteAwaitingResponse",
        skip_serializing_if = "Option::is_none"
    )]
    pub skipped_nfc_upload_complete_awaiting_response: Option<String>,
    #[serde(
        rename = "skippedNFCUploadCompleteAwaitingProcessing",
        skip_serializing_if = "Option::is_none"
    )]
    pub skipped_nfc_upload_complete_awaiting_processing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_front_side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_front_side_back_next: Option<String>,
    #[serde(rename = "successFrontSideNFCNext", skip_serializing_if = "Option::is_none")]
    pub success_front_side_nfc_next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_back_side: Option<String>,
    #[serde(rename = "successBackSideNFCNext", skip_serializing_if = "Option::is_none")]
    pub success_back_side_nfc_next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_passport: Option<String>,
    #[serde(rename = "successPassportNFCNext", skip_serializing_if = "Option::is_none")]
    pub success_passport_nfc_next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_user_confirmation: Option<String>,
    #[serde(rename = "successNFC", skip_serializing_if = "Option::is_none")]
    pub success_nfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_face_did_not_match: Option<String>,
    #[serde(rename = "retryIDNotFullyVisible", skip_serializing_if = "Option::is_none")]
    pub retry_id_not_fully_visible: Option<String>,
    #[serde(
        rename = "retryOCRResultsNotGoodEnough",
        skip_serializing_if = "Option::is_none"
    )]
    pub retry_ocr_results_not_good_enough: Option<String>,
    #[serde(rename = "retryIDTypeNotSupported", skip_serializing_if = "Option::is_none")]
    pub retry_id_type_not_supported: Option<String>,
    #[serde(rename = "skipOrErrorNFC", skip_serializing_if = "Option::is_none")]
    pub skip_or_error_nfc: Option<String>,
}

/// Messages for the photo ID match flow, which runs both the scan steps
/// and the face match steps. Serializes as the flat union of both
/// message sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanMatchMessage {
    #[serde(flatten)]
    pub scan: DefaultScanMessage,
    #[serde(flatten)]
    pub message: DefaultMessage,
}

/// The full theme descriptor handed across the bridge.
///
/// `logo_image` and `cancel_image` hold resource names, not colors, and
/// are excluded from color normalization even though they are plain
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    // Image references, never color-interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_image: Option<String>,

    // Non-color settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_location: Option<ButtonLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_status_bar_color_ios: Option<StatusBarColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_corner_radius: Option<u32>,

    // Frame and overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_background_color: Option<String>,

    // Guidance screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_background_colors_android: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_background_colors_ios: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_background_normal_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_background_disabled_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_background_highlight_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_text_normal_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_text_disabled_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_button_text_highlight_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_retry_screen_image_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_retry_screen_oval_stroke_color: Option<String>,

    // Oval capture indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oval_stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oval_first_progress_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oval_second_progress_color: Option<String>,

    // Feedback box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_background_colors_android: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_background_colors_ios: Option<FeedbackBackgroundColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_text_color: Option<String>,

    // Result screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_background_colors_android: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_background_colors_ios: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_activity_indicator_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_result_animation_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_result_animation_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_screen_upload_progress_fill_color: Option<String>,

    // ID scan screens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_selection_screen_background_colors_android: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_selection_screen_background_colors_ios: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_selection_screen_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_review_screen_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_review_screen_text_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_capture_screen_foreground_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_capture_screen_text_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_capture_screen_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_capture_frame_stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_background_normal_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_background_disabled_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_background_highlight_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_text_normal_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_text_disabled_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_button_text_highlight_color: Option<String>,

    // Flow messages, never color-interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticate_message: Option<DefaultMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_message: Option<DefaultMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_message: Option<DefaultMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_id_scan_message: Option<DefaultScanMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_id_match_message: Option<ScanMatchMessage>,
}
