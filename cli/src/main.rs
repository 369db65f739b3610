/*!

This is a command line host for the `k8s` provider. It lists the provider's data sources, prints
their schemas and reads them from a cluster.

!*/

mod list;
mod read;
mod schema;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use model::{Provider, ProviderConfig};
use std::path::PathBuf;

/// The command line interface for reading Kubernetes custom resources as data sources.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. Also can be passed with the KUBECONFIG environment variable.
    #[clap(long = "kubeconfig")]
    kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use instead of the current context.
    #[clap(long = "context")]
    context: Option<String>,
    /// Configure the provider in offline mode. Data sources cannot be read in this mode.
    #[clap(long = "offline")]
    offline: bool,
    #[clap(subcommand)]
    command: Command,
}

impl Args {
    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            offline: self.offline.then_some(true),
        }
    }
}

#[derive(Debug, Parser)]
enum Command {
    /// List the data source types of the provider.
    List(list::List),
    /// Print the provider and data source schemas.
    Schema(schema::Schema),
    /// Read a data source from the cluster.
    Read(read::Read),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let provider = Provider::new();
    let provider_config = args.provider_config();
    match args.command {
        Command::List(list) => list.run(provider),
        Command::Schema(schema) => schema.run(provider),
        Command::Read(read) => read.run(provider, provider_config).await,
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate and the provider.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("model"), level)
                .init();
        }
    }
}
