//! # Audit Report Models
//!
//! Serializable result shapes emitted by the three audit tools. Field
//! names follow the JSON wire format callers already parse (camelCase,
//! header names as map keys), so every struct carries explicit serde
//! renames rather than Rust-side naming.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::web::target::UrlTarget;
use crate::web::viewport::Viewport;

/// Upper bound on listed elements per finding; counts stay untruncated.
pub const MAX_LISTED_ELEMENTS: usize = 5;

/// Number of security header checks contributing to the score.
pub const SECURITY_CHECKS: usize = 6;

/// Current instant as an ISO-8601 timestamp with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Raw axe-core result (violations / passes / incomplete / inapplicable),
/// passed through unmodified.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessibilityReport(pub serde_json::Value);

/// Identity and geometry snapshot of a DOM element at scan time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementRef {
    pub tag_name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Per-viewport outcome of the responsive audit.
///
/// A viewport either carries the full audit fields or an `error` message,
/// never both. Failed viewports keep their identity so the summaries array
/// stays in argument order with one entry per requested viewport.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSummary {
    pub viewport: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_elements: Option<Vec<ElementRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_tap_targets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_tap_targets: Option<Vec<ElementRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ViewportSummary {
    /// Summary for a viewport whose scan completed.
    pub fn audited(
        viewport: Viewport,
        screenshot_path: String,
        overflow: Vec<ElementRef>,
        tap_targets: Vec<ElementRef>,
    ) -> Self {
        Self {
            viewport: viewport.to_string(),
            width: viewport.width,
            height: viewport.height,
            screenshot_path: Some(screenshot_path),
            overflow_count: Some(overflow.len()),
            overflow_elements: Some(truncated(overflow)),
            bad_tap_targets: Some(tap_targets.len()),
            small_tap_targets: Some(truncated(tap_targets)),
            error: None,
        }
    }

    /// Summary for a viewport whose navigation or extraction failed.
    pub fn failed(viewport: Viewport, error: String) -> Self {
        Self {
            viewport: viewport.to_string(),
            width: viewport.width,
            height: viewport.height,
            screenshot_path: None,
            overflow_count: None,
            overflow_elements: None,
            bad_tap_targets: None,
            small_tap_targets: None,
            error: Some(error),
        }
    }
}

fn truncated(mut elements: Vec<ElementRef>) -> Vec<ElementRef> {
    elements.truncate(MAX_LISTED_ELEMENTS);
    elements
}

/// Result of the responsive audit: one summary per requested viewport, in
/// argument order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponsiveReport {
    pub url: String,
    pub timestamp: String,
    pub summaries: Vec<ViewportSummary>,
}

/// Presence flags for the six audited security headers, keyed by the
/// header names callers already check.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityFlags {
    #[serde(rename = "content-security-policy")]
    pub content_security_policy: bool,
    #[serde(rename = "strict-transport-security")]
    pub strict_transport_security: bool,
    #[serde(rename = "x-frame-options")]
    pub x_frame_options: bool,
    #[serde(rename = "x-content-type-options")]
    pub x_content_type_options: bool,
    #[serde(rename = "referrer-policy")]
    pub referrer_policy: bool,
    #[serde(rename = "permissions-policy")]
    pub permissions_policy: bool,
}

impl SecurityFlags {
    /// Derives the flags from a header map whose keys are lowercase.
    ///
    /// `permissions-policy` also accepts the legacy `feature-policy` name.
    pub fn from_headers(headers: &BTreeMap<String, String>) -> Self {
        let has = |name: &str| headers.contains_key(name);
        Self {
            content_security_policy: has("content-security-policy"),
            strict_transport_security: has("strict-transport-security"),
            x_frame_options: has("x-frame-options"),
            x_content_type_options: has("x-content-type-options"),
            referrer_policy: has("referrer-policy"),
            permissions_policy: has("permissions-policy") || has("feature-policy"),
        }
    }

    pub fn passed(&self) -> usize {
        [
            self.content_security_policy,
            self.strict_transport_security,
            self.x_frame_options,
            self.x_content_type_options,
            self.referrer_policy,
            self.permissions_policy,
        ]
        .into_iter()
        .filter(|&flag| flag)
        .count()
    }

    /// Percentage of passed checks, always within `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.passed() as f64 / SECURITY_CHECKS as f64 * 100.0
    }
}

/// Result of the security header audit.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAnalysis {
    pub url: String,
    pub timestamp: String,
    pub headers: BTreeMap<String, String>,
    pub security: SecurityFlags,
    pub security_score: f64,
}

impl SecurityAnalysis {
    pub fn new(url: &UrlTarget, headers: BTreeMap<String, String>) -> Self {
        let security = SecurityFlags::from_headers(&headers);
        Self {
            url: url.to_string(),
            timestamp: timestamp_now(),
            headers,
            security,
            security_score: security.score(),
        }
    }
}
