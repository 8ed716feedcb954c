//! Command-line configuration for the intake terminal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use intake_engine::{parse_endpoint, LookupSettings, DEFAULT_ENDPOINT};
use intake_logging::{LevelFilter, LogDestination, LogSettings, DEFAULT_LOG_FILE};

#[derive(Debug, Parser)]
#[command(name = "intake")]
#[command(about = "Scan or type a product barcode to pre-fill a product entry form", long_about = None)]
pub struct Cli {
    /// Product lookup endpoint (POST, JSON body `{"upc": ...}`)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds; requests never time out when omitted
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file path, used with `--log file` and `--log both`
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub lookup: LookupSettings,
    pub log: LogSettings,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let endpoint = parse_endpoint(&cli.endpoint).context("invalid --endpoint")?;

        let lookup = LookupSettings {
            endpoint: endpoint.to_string(),
            request_timeout: cli.timeout_secs.map(Duration::from_secs),
            ..LookupSettings::default()
        };
        let log = LogSettings {
            destination: cli.log.into(),
            level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            file_path: cli.log_file,
        };

        Ok(Self { lookup, log })
    }
}
