use anyhow::{Context, Result};
use clap::Parser;
use model::Provider;

/// Print schemas as JSON. Without `--type` the provider schema and every data source schema are
/// printed.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// Only print the schema of this data source type.
    #[clap(long = "type")]
    type_name: Option<String>,
}

impl Schema {
    pub(crate) fn run(self, provider: Provider) -> Result<()> {
        let output = match &self.type_name {
            Some(type_name) => {
                let schema = provider.data_source_schema(type_name).context(format!(
                    "Unknown data source type '{}'. Supported types are: {}",
                    type_name,
                    provider.data_source_type_names().join(", ")
                ))?;
                serde_json::to_string_pretty(&schema)
            }
            None => serde_json::to_string_pretty(&provider.schemas()),
        }
        .context("Could not serialize schema")?;
        println!("{}", output);
        Ok(())
    }
}
