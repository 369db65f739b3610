use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use model::constants::AEROSPIKE_CLUSTER_V1BETA1;
use model::{Diagnostics, Provider, ProviderConfig};
use serde_json::json;

/// Read a data source and print its state as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    /// The data source type to read.
    #[clap(long = "type", default_value = AEROSPIKE_CLUSTER_V1BETA1)]
    type_name: String,

    /// The namespace of the object.
    #[clap(long = "namespace", short = 'n')]
    namespace: String,

    /// The name of the object.
    #[clap(long = "name")]
    name: String,
}

impl Read {
    pub(crate) async fn run(self, mut provider: Provider, config: ProviderConfig) -> Result<()> {
        let config =
            serde_json::to_value(&config).context("Could not serialize provider configuration")?;
        check(provider.configure(config).await)?;

        info!(
            "Reading '{}' '{}' in namespace '{}'",
            self.type_name, self.name, self.namespace
        );
        let response = provider
            .read_data_source(
                &self.type_name,
                json!({"metadata": {"name": self.name, "namespace": self.namespace}}),
            )
            .await;
        check(response.diagnostics)?;
        let state = response
            .state
            .context("The data source returned no state")?;
        println!(
            "{}",
            serde_json::to_string_pretty(&state).context("Could not serialize state")?
        );
        Ok(())
    }
}

/// Print every diagnostic to stderr and fail if any of them is an error.
fn check(diagnostics: Diagnostics) -> Result<()> {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}\n", diagnostic);
    }
    let errors = diagnostics.errors().count();
    if errors > 0 {
        bail!("Read failed with {} error(s)", errors);
    }
    Ok(())
}
