mod platform;

use clap::Parser;

use platform::config::{AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    platform::run_app(config)
}
