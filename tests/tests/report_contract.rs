//! Wire-format contracts of the report models, checked from outside the
//! defining crate the way a downstream JSON consumer would see them.

use std::str::FromStr;

use webaudit_common::report::{ResponsiveReport, SecurityAnalysis, ViewportSummary, timestamp_now};
use webaudit_common::web::target::UrlTarget;
use webaudit_common::web::viewport::Viewport;

#[test]
fn summaries_keep_argument_order_and_parsed_dimensions() {
    let viewports = ["360x640", "768x1024"]
        .into_iter()
        .map(|s| Viewport::from_str(s).unwrap())
        .collect::<Vec<_>>();

    let report = ResponsiveReport {
        url: "https://example.com".to_owned(),
        timestamp: timestamp_now(),
        summaries: viewports
            .iter()
            .map(|&v| ViewportSummary::failed(v, "offline".to_owned()))
            .collect(),
    };

    let json = serde_json::to_value(&report).unwrap();
    let summaries = json["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["width"], 360);
    assert_eq!(summaries[0]["viewport"], "360x640");
    assert_eq!(summaries[1]["height"], 1024);
}

#[test]
fn security_score_is_the_flag_percentage() {
    let url = UrlTarget::from_str("https://example.com").unwrap();
    let headers = [
        ("content-security-policy", "default-src 'self'"),
        ("strict-transport-security", "max-age=63072000"),
        ("x-frame-options", "DENY"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();

    let analysis = SecurityAnalysis::new(&url, headers);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["securityScore"], 50.0);
    assert_eq!(json["security"]["x-frame-options"], true);
    assert_eq!(json["security"]["permissions-policy"], false);
    assert_eq!(json["headers"]["x-frame-options"], "DENY");
}
