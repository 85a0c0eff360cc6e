use anyhow::Result;
use tracing::info;

use webaudit_common::config::Config;
use webaudit_common::web::target::UrlTarget;
use webaudit_core::audit::Audit;
use webaudit_core::audit::headers::HeaderAudit;
use webaudit_core::session::BrowserSession;

use crate::terminal::print;

pub async fn run(url: UrlTarget, cfg: &Config) -> Result<()> {
    info!("Starting security header analysis for {url}");

    let audit = HeaderAudit {
        target: url,
        timeout: cfg.timeout,
    };

    let session = BrowserSession::launch().await?;
    let outcome = audit.run(&session).await;
    session.close().await;

    print::report(&outcome?)
}
