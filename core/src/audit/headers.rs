//! # Security Header Audit
//!
//! Captures the HTTP response headers for the requested URL and scores the
//! presence of six defensive headers. The subscription to the CDP response
//! stream is installed before navigating; only a response whose URL equals
//! the requested string verbatim is considered, so redirect chains are not
//! followed.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{EnableParams, EventResponseReceived, Headers};
use futures::StreamExt;
use tokio::sync::oneshot;
use tracing::{debug, info};

use webaudit_common::report::SecurityAnalysis;
use webaudit_common::web::target::UrlTarget;

use super::Audit;
use crate::session::{self, BrowserSession, WaitUntil};

/// How long after navigation resolves a matching response event is still
/// awaited. The event travels a separate channel from the navigation
/// command's response, so it may arrive slightly later.
const HEADER_DELIVERY: Duration = Duration::from_secs(2);

pub struct HeaderAudit {
    pub target: UrlTarget,
    pub timeout: Duration,
}

#[async_trait]
impl Audit for HeaderAudit {
    type Report = SecurityAnalysis;

    async fn run(&self, session: &BrowserSession) -> anyhow::Result<Self::Report> {
        let page = session.page().await?;
        page.execute(EnableParams::default())
            .await
            .context("failed to enable network events")?;

        let mut responses = page
            .event_listener::<EventResponseReceived>()
            .await
            .context("failed to subscribe to response events")?;

        let wanted = self.target.to_string();
        let (tx, rx) = oneshot::channel();
        let listener = tokio::spawn(async move {
            while let Some(event) = responses.next().await {
                if event.response.url != wanted {
                    continue;
                }
                let _ = tx.send(header_map(&event.response.headers));
                break;
            }
        });

        // Headers are delivered with the response event, so the document
        // navigation resolving is enough; no need to wait for load.
        let outcome = session::navigate(
            &page,
            &self.target,
            WaitUntil::DomContentLoaded,
            self.timeout,
        )
        .await;

        let headers = if outcome.is_ok() {
            delivered_headers(rx).await
        } else {
            BTreeMap::new()
        };
        listener.abort();
        outcome?;

        if headers.is_empty() {
            debug!("No response matched {} verbatim", self.target);
        }

        info!("Scoring security headers for {}", self.target);
        let _ = page.close().await;
        Ok(SecurityAnalysis::new(&self.target, headers))
    }
}

/// Waits up to [`HEADER_DELIVERY`] for the captured header map, so an
/// event still in flight when navigation resolves is not dropped.
async fn delivered_headers(
    rx: oneshot::Receiver<BTreeMap<String, String>>,
) -> BTreeMap<String, String> {
    match tokio::time::timeout(HEADER_DELIVERY, rx).await {
        Ok(Ok(headers)) => headers,
        _ => BTreeMap::new(),
    }
}

/// Flattens CDP response headers into a map with lowercase names.
fn header_map(headers: &Headers) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    if let Ok(serde_json::Value::Object(object)) = serde_json::to_value(headers) {
        for (name, value) in object {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            map.insert(name.to_ascii_lowercase(), value);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_lowercased() {
        let headers = Headers::new(serde_json::json!({
            "Content-Security-Policy": "default-src 'self'",
            "X-Frame-Options": "DENY",
        }));
        let map = header_map(&headers);
        assert_eq!(
            map.get("content-security-policy").map(String::as_str),
            Some("default-src 'self'")
        );
        assert_eq!(map.get("x-frame-options").map(String::as_str), Some("DENY"));
        assert!(!map.contains_key("Content-Security-Policy"));
    }

    #[test]
    fn non_string_values_are_stringified() {
        let headers = Headers::new(serde_json::json!({ "Content-Length": 42 }));
        let map = header_map(&headers);
        assert_eq!(map.get("content-length").map(String::as_str), Some("42"));
    }

    #[test]
    fn empty_headers_yield_an_empty_map() {
        let headers = Headers::new(serde_json::json!({}));
        assert!(header_map(&headers).is_empty());
    }

    #[tokio::test]
    async fn headers_arriving_after_navigation_are_still_captured() {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let mut map = BTreeMap::new();
            map.insert("x-frame-options".to_owned(), "DENY".to_owned());
            let _ = tx.send(map);
        });

        let headers = delivered_headers(rx).await;
        assert_eq!(headers.get("x-frame-options").map(String::as_str), Some("DENY"));
    }

    #[tokio::test]
    async fn a_dropped_capture_yields_an_empty_map() {
        let (tx, rx) = oneshot::channel::<BTreeMap<String, String>>();
        drop(tx);
        assert!(delivered_headers(rx).await.is_empty());
    }
}
