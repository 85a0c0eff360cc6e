//! # Accessibility Audit
//!
//! Delegates the entire scan to the axe-core engine: a pinned build is
//! injected into the loaded page, `axe.run()` is awaited in page context,
//! and its result is returned unmodified.
//!
//! The engine source is evaluated over the protocol rather than loaded
//! through a script tag, so a page CSP that restricts `script-src` cannot
//! block the scan.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info};

use webaudit_common::report::AccessibilityReport;
use webaudit_common::web::device::DeviceProfile;
use webaudit_common::web::target::UrlTarget;

use super::Audit;
use crate::session::{self, BrowserSession, WaitUntil};

/// Pinned axe-core build evaluated in the audited page.
const AXE_SCRIPT_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/axe-core/4.10.2/axe.min.js";

/// Path to a local copy of the engine, for hosts without egress to the
/// pinned URL.
const AXE_PATH_ENV: &str = "WEBAUDIT_AXE_PATH";

const RUN_AXE: &str = "async () => await axe.run()";

pub struct AccessibilityAudit {
    pub target: UrlTarget,
    pub device: DeviceProfile,
    pub timeout: Duration,
}

#[async_trait]
impl Audit for AccessibilityAudit {
    type Report = AccessibilityReport;

    async fn run(&self, session: &BrowserSession) -> anyhow::Result<Self::Report> {
        let source = axe_source().await?;

        let page = session.device_page(self.device).await?;
        session::navigate(&page, &self.target, WaitUntil::NetworkIdle, self.timeout).await?;

        page.evaluate_expression(source)
            .await
            .context("failed to inject axe-core into the page")?;

        info!("Running axe-core scan on {}", self.target);
        let report: serde_json::Value = page
            .evaluate_function(RUN_AXE)
            .await
            .context("axe.run() failed")?
            .into_value()
            .context("axe returned a non-JSON result")?;

        let _ = page.close().await;
        Ok(AccessibilityReport(report))
    }
}

/// Resolves the engine source: a local file named by `WEBAUDIT_AXE_PATH`
/// when set, the pinned build otherwise.
async fn axe_source() -> anyhow::Result<String> {
    if let Ok(path) = std::env::var(AXE_PATH_ENV) {
        debug!("Loading axe-core from {path}");
        return local_axe_source(&path);
    }
    debug!("Fetching axe-core from {AXE_SCRIPT_URL}");
    let response = reqwest::get(AXE_SCRIPT_URL)
        .await
        .context("failed to download the axe-core engine")?
        .error_for_status()
        .context("axe-core download was rejected")?;
    response
        .text()
        .await
        .context("failed to read the axe-core download")
}

fn local_axe_source(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read axe-core from {path}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn local_engine_source_is_read_verbatim() {
        let path = std::env::temp_dir().join("webaudit-axe-fixture.js");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "window.axe = {{}};").unwrap();

        let source = local_axe_source(path.to_str().unwrap()).unwrap();
        assert_eq!(source, "window.axe = {};");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_local_engine_names_the_path() {
        let err = local_axe_source("/nonexistent/axe.min.js").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/axe.min.js"));
    }
}
