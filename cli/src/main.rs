//! zum: command-line access to the ZUM Services API.
//!
//! Every subcommand maps to one endpoint and writes the raw response body to
//! stdout. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use zum_client::{ClientConfig, FailureMode, ServiceClient, Transport};

#[derive(Parser)]
#[command(name = "zum", about = "ZUM Services wallet-hosting API client")]
struct Cli {
    /// JWT access token issued by ZUM Services.
    #[arg(long, env = "ZUM_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in milliseconds (0 means the 2000 ms default).
    #[arg(long, env = "ZUM_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// API root, e.g. for a staging deployment.
    #[arg(long, env = "ZUM_BASE_URL")]
    base_url: Option<String>,

    /// Print nothing instead of failing when the request cannot be completed.
    #[arg(long)]
    legacy: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "ZUM_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug, PartialEq)]
enum Command {
    /// Create a new address.
    CreateAddress,
    /// Delete an address.
    DeleteAddress { address: String },
    /// Show address details.
    GetAddress { address: String },
    /// List every address owned by the token.
    Addresses,
    /// Scan an address for transactions in the 100 blocks from BLOCK_INDEX.
    ScanAddress { address: String, block_index: u64 },
    /// Show the spend keys of an address.
    AddressKeys { address: String },
    /// Create an integrated address with a payment ID.
    IntegrateAddress { address: String, payment_id: String },
    /// List integrated addresses derived from an address.
    IntegratedAddresses { address: String },
    /// Calculate the service fee for an amount.
    Fee {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Send a transaction.
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, allow_negative_numbers = true)]
        fee: f64,
        #[arg(long, default_value = "")]
        payment_id: String,
        #[arg(long, default_value = "")]
        extra: String,
    },
    /// Show a transaction by hash.
    GetTransfer { hash: String },
    /// Wallet container info and health check.
    Wallet,
    /// Status of the ZUM Services infrastructure.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    zum_utils::init_tracing_with_level(&cli.log_level);

    let config = resolve_config(&cli)?;
    tracing::debug!("using {config:?}");

    let client = ServiceClient::new(config).context("failed to set up HTTP transport")?;
    let body = run(&client, &cli.command)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body).context("failed to write response")?;
    stdout.flush()?;
    Ok(())
}

/// File settings (if any) first, then flags and env vars on top.
///
/// A `--config` file that cannot be loaded is an error.
fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let cfg = ClientConfig::from_toml_file(path)
                .with_context(|| format!("failed to load --config {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            cfg
        }
        None => ClientConfig::default(),
    };
    if let Some(token) = &cli.token {
        config.access_token = token.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if cli.legacy {
        config.failure_mode = FailureMode::Collapse;
    }
    Ok(config)
}

fn run<T: Transport>(client: &ServiceClient<T>, command: &Command) -> anyhow::Result<Vec<u8>> {
    let body = match command {
        Command::CreateAddress => client.create_address(),
        Command::DeleteAddress { address } => client.delete_address(address),
        Command::GetAddress { address } => client.get_address(address),
        Command::Addresses => client.get_addresses(),
        Command::ScanAddress {
            address,
            block_index,
        } => client.scan_address(address, *block_index),
        Command::AddressKeys { address } => client.get_address_keys(address),
        Command::IntegrateAddress {
            address,
            payment_id,
        } => client.integrate_address(address, payment_id),
        Command::IntegratedAddresses { address } => client.get_integrated_addresses(address),
        Command::Fee { amount } => client.get_fee(*amount),
        Command::Transfer {
            from,
            to,
            amount,
            fee,
            payment_id,
            extra,
        } => client.create_transfer(from, to, *amount, *fee, payment_id, extra),
        Command::GetTransfer { hash } => client.get_transfer(hash),
        Command::Wallet => client.get_wallet(),
        Command::Status => client.get_status(),
    }?;
    Ok(body)
}
