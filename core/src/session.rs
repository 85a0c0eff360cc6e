//! # Browser Session Control
//!
//! Owns the headless Chromium instance for one tool invocation. A session
//! is launched once per process, hands out pages configured for a device
//! profile or an explicit viewport, and must be closed by the caller on
//! every exit path before the process terminates.

use std::time::Duration;

use anyhow::{Context, anyhow};
use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use webaudit_common::web::device::DeviceProfile;
use webaudit_common::web::target::UrlTarget;
use webaudit_common::web::viewport::Viewport;

/// Delay after the load event for late network activity to settle.
const NETWORK_SETTLE: Duration = Duration::from_millis(500);

/// How long the closed browser child may take to exit before it is killed.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// How far a navigation is awaited before extraction may begin.
#[derive(Clone, Copy, Debug)]
pub enum WaitUntil {
    /// Wait for the load lifecycle plus a short network-settle delay.
    NetworkIdle,
    /// Return as soon as the document navigation resolves. Response
    /// headers are already captured by this point.
    DomContentLoaded,
}

/// A running headless browser plus the task draining its CDP events.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launches one headless Chromium instance for this invocation.
    pub async fn launch() -> anyhow::Result<Self> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|e| anyhow!(e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch headless browser")?;

        // The CDP websocket is serviced here for the session's lifetime.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    debug!("CDP handler stream ended");
                    break;
                }
            }
        });

        info!("Headless browser launched");
        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Opens a blank page emulating the given device profile.
    pub async fn device_page(&self, device: DeviceProfile) -> anyhow::Result<Page> {
        let page = self.sized_page(device.viewport(), device.is_mobile()).await?;
        page.set_user_agent(device.user_agent())
            .await
            .context("failed to override user agent")?;
        Ok(page)
    }

    /// Opens a blank page sized to an explicit viewport.
    pub async fn sized_page(&self, viewport: Viewport, mobile: bool) -> anyhow::Result<Page> {
        let page = self.page().await?;
        let metrics = SetDeviceMetricsOverrideParams::builder()
            .width(viewport.width as i64)
            .height(viewport.height as i64)
            .device_scale_factor(1.0)
            .mobile(mobile)
            .build()
            .map_err(|e| anyhow!(e))?;
        if let Err(e) = page.execute(metrics).await {
            // The page is already open; release the tab before bailing.
            let _ = page.close().await;
            return Err(e).with_context(|| format!("failed to size page to {viewport}"));
        }
        Ok(page)
    }

    /// Opens a blank page with default browser metrics.
    pub async fn page(&self) -> anyhow::Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .context("failed to open a new page")
    }

    /// Closes the browser exactly once and reaps the child process. The
    /// wait is bounded; a child that outlives [`SHUTDOWN_GRACE`] is killed
    /// so teardown cannot hang on a dead CDP connection.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Error while closing browser: {e}");
        }
        match tokio::time::timeout(SHUTDOWN_GRACE, self.browser.wait()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => debug!("Browser process wait failed: {e}"),
            Err(_) => {
                warn!("Browser did not exit within {}s, killing it", SHUTDOWN_GRACE.as_secs());
                if let Some(Err(e)) = self.browser.kill().await {
                    debug!("Browser kill failed: {e}");
                }
            }
        }
        self.handler_task.abort();
        debug!("Browser session closed");
    }
}

/// Navigates `page` to the target, bounded by `timeout`.
pub async fn navigate(
    page: &Page,
    target: &UrlTarget,
    wait: WaitUntil,
    timeout: Duration,
) -> anyhow::Result<()> {
    debug!("Navigating to {target}");

    let navigation = async {
        page.goto(target.as_str()).await?;
        if let WaitUntil::NetworkIdle = wait {
            page.wait_for_navigation().await?;
        }
        Ok::<_, chromiumoxide::error::CdpError>(())
    };

    tokio::time::timeout(timeout, navigation)
        .await
        .map_err(|_| {
            anyhow!(
                "navigation to {target} timed out after {}s",
                timeout.as_secs()
            )
        })?
        .with_context(|| format!("navigation to {target} failed"))?;

    if let WaitUntil::NetworkIdle = wait {
        tokio::time::sleep(NETWORK_SETTLE).await;
    }
    Ok(())
}
