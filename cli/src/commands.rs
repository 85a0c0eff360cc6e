pub mod axe;
pub mod headers;
pub mod responsive;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use webaudit_common::config::DEFAULT_TIMEOUT_SECS;
use webaudit_common::web::device::DeviceProfile;
use webaudit_common::web::target::UrlTarget;
use webaudit_common::web::viewport::Viewport;

#[derive(Parser)]
#[command(name = "webaudit")]
#[command(about = "Headless-browser audits for web quality diagnostics.")]
pub struct CommandLine {
    /// Navigation timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Directory screenshots are written to
    #[arg(long, global = true, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an axe-core accessibility scan against a page
    #[command(alias = "a")]
    Axe {
        url: UrlTarget,
        /// Device profile to emulate (mobile or desktop)
        #[arg(default_value = "mobile")]
        device: DeviceProfile,
    },
    /// Check overflow and tap-target sizing across viewports
    #[command(alias = "r")]
    Responsive {
        url: UrlTarget,
        /// Viewports to render as <width>x<height>, e.g. 360x640
        #[arg(required = true)]
        viewports: Vec<Viewport>,
    },
    /// Score HTTP security header presence for a page
    #[command(alias = "h")]
    Headers { url: UrlTarget },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
