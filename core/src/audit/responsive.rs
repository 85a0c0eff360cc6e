//! # Responsive Layout Audit
//!
//! Renders the target page at each requested viewport, captures a
//! full-page screenshot, and inspects the DOM for horizontal overflow and
//! undersized tap targets. Viewports run strictly sequentially; a failure
//! in one is recorded in its summary and does not abort the rest.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use tracing::{info, warn};

use webaudit_common::report::{ElementRef, ResponsiveReport, ViewportSummary, timestamp_now};
use webaudit_common::web::target::UrlTarget;
use webaudit_common::web::viewport::Viewport;

use super::Audit;
use crate::session::{self, BrowserSession, WaitUntil};

/// An element overflows when its rendered width exceeds the viewport's
/// inner width.
const OVERFLOW_SCAN: &str = r#"() => {
    const overflowing = [];
    for (const element of document.querySelectorAll('*')) {
        const rect = element.getBoundingClientRect();
        if (rect.width > window.innerWidth) {
            overflowing.push({
                tagName: element.tagName,
                className: typeof element.className === 'string' ? element.className : '',
                id: element.id,
            });
        }
    }
    return overflowing;
}"#;

/// Interactive elements below the 44px minimum touch-target guideline.
const TAP_TARGET_SCAN: &str = r#"() => {
    const minTapSize = 44;
    const selectors =
        'a, button, input[type="button"], input[type="submit"], [onclick], [role="button"]';
    const small = [];
    for (const element of document.querySelectorAll(selectors)) {
        const rect = element.getBoundingClientRect();
        if (rect.width < minTapSize || rect.height < minTapSize) {
            small.push({
                tagName: element.tagName,
                className: typeof element.className === 'string' ? element.className : '',
                id: element.id,
                width: rect.width,
                height: rect.height,
            });
        }
    }
    return small;
}"#;

pub struct ResponsiveAudit {
    pub target: UrlTarget,
    pub viewports: Vec<Viewport>,
    pub timeout: Duration,
    pub artifacts_dir: PathBuf,
}

#[async_trait]
impl Audit for ResponsiveAudit {
    type Report = ResponsiveReport;

    async fn run(&self, session: &BrowserSession) -> anyhow::Result<Self::Report> {
        std::fs::create_dir_all(&self.artifacts_dir).with_context(|| {
            format!(
                "failed to create artifacts directory {}",
                self.artifacts_dir.display()
            )
        })?;

        let mut summaries = Vec::with_capacity(self.viewports.len());
        for &viewport in &self.viewports {
            info!("Auditing {} at {viewport}", self.target);
            let summary = match self.audit_viewport(session, viewport).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("Viewport {viewport} failed: {e:#}");
                    ViewportSummary::failed(viewport, format!("{e:#}"))
                }
            };
            summaries.push(summary);
        }

        Ok(ResponsiveReport {
            url: self.target.to_string(),
            timestamp: timestamp_now(),
            summaries,
        })
    }
}

impl ResponsiveAudit {
    /// Runs one viewport in a fresh page, closed whatever the outcome.
    async fn audit_viewport(
        &self,
        session: &BrowserSession,
        viewport: Viewport,
    ) -> anyhow::Result<ViewportSummary> {
        let page = session.sized_page(viewport, false).await?;
        let outcome = self.scan_page(&page, viewport).await;
        let _ = page.close().await;
        outcome
    }

    async fn scan_page(&self, page: &Page, viewport: Viewport) -> anyhow::Result<ViewportSummary> {
        session::navigate(page, &self.target, WaitUntil::NetworkIdle, self.timeout).await?;

        let screenshot_path = self
            .artifacts_dir
            .join(screenshot_name(viewport, &timestamp_now()));
        page.save_screenshot(
            ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .full_page(true)
                .build(),
            &screenshot_path,
        )
        .await
        .with_context(|| format!("failed to capture screenshot for {viewport}"))?;

        let overflow: Vec<ElementRef> = page
            .evaluate_function(OVERFLOW_SCAN)
            .await
            .context("overflow scan failed")?
            .into_value()
            .context("overflow scan returned an unexpected shape")?;

        let tap_targets: Vec<ElementRef> = page
            .evaluate_function(TAP_TARGET_SCAN)
            .await
            .context("tap target scan failed")?
            .into_value()
            .context("tap target scan returned an unexpected shape")?;

        Ok(ViewportSummary::audited(
            viewport,
            screenshot_path.display().to_string(),
            overflow,
            tap_targets,
        ))
    }
}

/// `screenshot-<width>x<height>-<timestamp>.png`, with the `:` and `.`
/// of the ISO timestamp replaced so the name is filesystem-safe.
fn screenshot_name(viewport: Viewport, timestamp: &str) -> String {
    format!(
        "screenshot-{viewport}-{}.png",
        timestamp.replace([':', '.'], "-")
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn screenshot_name_sanitizes_the_timestamp() {
        let viewport = Viewport::from_str("360x640").unwrap();
        let name = screenshot_name(viewport, "2026-08-29T10:15:30.123Z");
        assert_eq!(name, "screenshot-360x640-2026-08-29T10-15-30-123Z.png");
    }

    #[test]
    fn screenshot_name_embeds_the_viewport() {
        let viewport = Viewport::from_str("1280x800").unwrap();
        let name = screenshot_name(viewport, "2026-01-01T00:00:00.000Z");
        assert!(name.starts_with("screenshot-1280x800-"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains(':'));
    }
}
