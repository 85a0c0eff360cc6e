mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, axe, headers, responsive};
use terminal::{logging, print};
use webaudit_common::config::Config;

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        timeout: Duration::from_secs(commands.timeout),
        artifacts_dir: commands.artifacts_dir.clone(),
    };

    let result = match commands.command {
        Commands::Axe { url, device } => axe::run(url, device, &cfg).await,
        Commands::Responsive { url, viewports } => responsive::run(url, viewports, &cfg).await,
        Commands::Headers { url } => headers::run(url, &cfg).await,
    };

    if let Err(error) = result {
        print::failure(&error);
        std::process::exit(1);
    }
}
