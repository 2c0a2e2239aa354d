//! QRIS payload tool
//!
//! ```text
//! qris parse "000201010211..."
//! qris validate - < payload.txt
//! qris dynamic "000201010211..." --amount 15000 --fee-category fixed --fee 500
//! qris config > qris.toml
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{sanitize_payload, DynamicRequest, Qris};
use qris_config::{LoggingConfig, QrisConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use types::FeeCategory;

#[derive(Parser, Debug)]
#[command(name = "qris")]
#[command(author, version, about = "Inspect, validate and convert QRIS payloads", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a payload and print the record with its violations as JSON
    Parse {
        /// Payload text, or `-` to read standard input
        payload: String,
    },
    /// Print violations; exits non-zero when the payload is invalid
    Validate {
        /// Payload text, or `-` to read standard input
        payload: String,
    },
    /// Convert a static payload into a dynamic one
    Dynamic(DynamicArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(clap::Args, Debug)]
struct DynamicArgs {
    /// Static payload text, or `-` to read standard input
    payload: String,

    /// Transaction amount
    #[arg(short, long)]
    amount: u32,

    /// Fee category
    #[arg(long, value_enum)]
    fee_category: Option<FeeArg>,

    /// Fee value; zero means no fee
    #[arg(long, default_value_t = 0)]
    fee: u32,

    /// Replacement merchant city
    #[arg(long, default_value = "")]
    merchant_city: String,

    /// Replacement merchant postal code
    #[arg(long, default_value = "")]
    merchant_postal_code: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FeeArg {
    Fixed,
    Percent,
}

impl From<FeeArg> for FeeCategory {
    fn from(arg: FeeArg) -> Self {
        match arg {
            FeeArg::Fixed => FeeCategory::Fixed,
            FeeArg::Percent => FeeCategory::Percent,
        }
    }
}

impl DynamicArgs {
    fn request(&self) -> DynamicRequest {
        let mut request = DynamicRequest::new(self.amount)
            .with_merchant_city(self.merchant_city.as_str())
            .with_merchant_postal_code(self.merchant_postal_code.as_str());
        if let Some(category) = self.fee_category {
            request = request.with_fee(category.into(), self.fee);
        }
        request
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = QrisConfig::load(cli.config.as_deref())?;
    init_logging(&cli, &config.logging)?;

    let qris = Qris::new(config.shared_registry());
    if run(&cli.command, &qris, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(cli: &Cli, logging: &LoggingConfig) -> Result<()> {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level)),
    }
    .context("Invalid log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if cli.json_logs || logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Execute one command; `false` when the payload was found invalid
fn run(command: &Commands, qris: &Qris, config: &QrisConfig) -> Result<bool> {
    match command {
        Commands::Parse { payload } => {
            let raw = read_payload(payload)?;
            let parsed = qris.parse(&raw).context("Failed to decode payload")?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }

        Commands::Validate { payload } => {
            let raw = read_payload(payload)?;
            let parsed = qris.parse(&raw).context("Failed to decode payload")?;
            if parsed.is_valid() {
                println!("valid");
            } else {
                for violation in &parsed.violations {
                    println!("{}", violation);
                }
                return Ok(false);
            }
        }

        Commands::Dynamic(args) => {
            let raw = read_payload(&args.payload)?;
            let request = args.request();
            debug!("Dynamic request: {:?}", request);
            let dynamic = qris
                .convert(&raw, &request)
                .context("Failed to convert payload")?;
            info!("Converted payload ({} bytes)", dynamic.len());
            println!("{}", dynamic);
        }

        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(true)
}

/// Payload argument, or standard input for `-`, with line breaks removed
fn read_payload(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read payload from stdin")?;
        Ok(sanitize_payload(&input))
    } else {
        Ok(sanitize_payload(arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    const STATIC: &str = "00020101021126690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta61055500062070703A016304DCA8";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dynamic_arguments() {
        let cli = Cli::try_parse_from([
            "qris",
            "dynamic",
            STATIC,
            "--amount",
            "1337",
            "--fee-category",
            "fixed",
            "--fee",
            "666",
        ])
        .unwrap();

        let Commands::Dynamic(args) = cli.command else {
            panic!("expected dynamic command");
        };
        let request = args.request();
        assert_eq!(request.amount, 1337);
        assert_eq!(request.fee_category, Some(FeeCategory::Fixed));
        assert_eq!(request.fee, 666);
        assert!(request.merchant_city.is_empty());
    }

    #[test]
    fn test_fee_without_category_is_ignored() {
        let cli = Cli::try_parse_from(["qris", "dynamic", STATIC, "-a", "10", "--fee", "5"]).unwrap();
        let Commands::Dynamic(args) = cli.command else {
            panic!("expected dynamic command");
        };
        assert_eq!(args.request().fee_category, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["qris", "validate", "-", "--log-level", "debug", "--json-logs"])
            .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.json_logs);
    }

    #[test]
    fn test_payload_argument_is_sanitized() {
        let raw = read_payload("  000201\r\n010211 \n").unwrap();
        assert_eq!(raw, "000201010211");
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qris.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = QrisConfig::load(Some(&path)).unwrap();
        assert_eq!(config.logging.level, "debug");

        let qris = Qris::new(config.shared_registry());
        let command = Commands::Validate {
            payload: STATIC.to_string(),
        };
        assert!(run(&command, &qris, &config).unwrap());

        let invalid = Commands::Validate {
            payload: "000201".to_string(),
        };
        assert!(!run(&invalid, &qris, &config).unwrap());
    }
}
