use std::{process, time::Duration};

use clap::{Parser, Subcommand};
use tillpoint_sdk::{API_KEY_ENV, Client, ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};
use tracing_subscriber::EnvFilter;

mod card;
mod query;

use card::CardCommand;
use query::{ChargesCommand, CouponsCommand, CustomersCommand, InvoicesCommand, PlansCommand};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Tillpoint - Stripe API client CLI", long_about = None)]
struct Opts {
    /// Secret API key
    #[arg(long = "api-key", short = 'k', env = API_KEY_ENV, hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API base URL, including the version prefix
    #[arg(long = "endpoint", env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", global = true)]
    timeout_secs: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
enum Command {
    /// Offline card number checks
    Card {
        #[clap(subcommand)]
        command: CardCommand,
    },
    /// Customer queries
    Customers {
        #[clap(subcommand)]
        command: CustomersCommand,
    },
    /// Charge queries
    Charges {
        #[clap(subcommand)]
        command: ChargesCommand,
    },
    /// Plan queries
    Plans {
        #[clap(subcommand)]
        command: PlansCommand,
    },
    /// Coupon queries
    Coupons {
        #[clap(subcommand)]
        command: CouponsCommand,
    },
    /// Invoice queries
    Invoices {
        #[clap(subcommand)]
        command: InvoicesCommand,
    },
}

#[tokio::main]
async fn main() {
    // The .env file has to be loaded before parsing so clap sees its values
    load_env_file();

    let opts: Opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            process::exit(e.exit_code());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = handle_command(opts).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Load environment variables from a .env file in the working directory
fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => {
            eprintln!("✓ Loaded environment from {}", path.display());
        }
        Err(e) if e.not_found() => {
            // .env file not found is fine, just continue silently
        }
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }
}

impl Opts {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("An API key is required: pass --api-key or set {}", API_KEY_ENV)
            })?;

        let mut config = ClientConfig::new(api_key).with_endpoint(self.endpoint.clone());
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    fn client(&self) -> anyhow::Result<Client> {
        Ok(Client::new(self.client_config()?)?)
    }
}

async fn handle_command(opts: Opts) -> anyhow::Result<()> {
    match &opts.command {
        Command::Card {
            command: CardCommand::Check(cmd),
        } => cmd.execute(),
        Command::Customers { command } => command.execute(&opts.client()?).await,
        Command::Charges { command } => command.execute(&opts.client()?).await,
        Command::Plans { command } => command.execute(&opts.client()?).await,
        Command::Coupons { command } => command.execute(&opts.client()?).await,
        Command::Invoices { command } => command.execute(&opts.client()?).await,
    }
}
