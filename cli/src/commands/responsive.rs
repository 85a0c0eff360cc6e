use anyhow::Result;
use tracing::info;

use webaudit_common::config::Config;
use webaudit_common::web::target::UrlTarget;
use webaudit_common::web::viewport::Viewport;
use webaudit_core::audit::Audit;
use webaudit_core::audit::responsive::ResponsiveAudit;
use webaudit_core::session::BrowserSession;

use crate::terminal::print;

pub async fn run(url: UrlTarget, viewports: Vec<Viewport>, cfg: &Config) -> Result<()> {
    info!(
        "Starting responsive audit for {url} across {} viewport(s)",
        viewports.len()
    );

    let audit = ResponsiveAudit {
        target: url,
        viewports,
        timeout: cfg.timeout,
        artifacts_dir: cfg.artifacts_dir.clone(),
    };

    let session = BrowserSession::launch().await?;
    let outcome = audit.run(&session).await;
    session.close().await;

    print::report(&outcome?)
}
