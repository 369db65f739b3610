use anyhow::Result;
use clap::Parser;
use model::Provider;

/// Print the type name of every data source, one per line.
#[derive(Debug, Parser)]
pub(crate) struct List {}

impl List {
    pub(crate) fn run(self, provider: Provider) -> Result<()> {
        for type_name in provider.data_source_type_names() {
            println!("{}", type_name);
        }
        Ok(())
    }
}
