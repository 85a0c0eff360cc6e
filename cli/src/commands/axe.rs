use anyhow::Result;
use tracing::info;

use webaudit_common::config::Config;
use webaudit_common::web::device::DeviceProfile;
use webaudit_common::web::target::UrlTarget;
use webaudit_core::audit::Audit;
use webaudit_core::audit::accessibility::AccessibilityAudit;
use webaudit_core::session::BrowserSession;

use crate::terminal::print;

pub async fn run(url: UrlTarget, device: DeviceProfile, cfg: &Config) -> Result<()> {
    info!("Starting accessibility scan for {url} ({device})");

    let audit = AccessibilityAudit {
        target: url,
        device,
        timeout: cfg.timeout,
    };

    let session = BrowserSession::launch().await?;
    let outcome = audit.run(&session).await;
    session.close().await;

    print::report(&outcome?)
}
