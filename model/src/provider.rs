/*!

The `k8s` provider: its configuration block, the Kubernetes client it builds from that block and
the registry of data sources it serves.

!*/

use crate::asdb_aerospike_com_v1beta1::AerospikeClusterV1Beta1DataSource;
use crate::clients::KubeDynamicClient;
use crate::constants::PROVIDER_TYPE_NAME;
use crate::data_source::{ConfigureRequest, DataSource, ProviderData, ReadRequest, ReadResponse};
use crate::{Attribute, Diagnostics, DynamicClient, Schema};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::{ResultExt, Snafu};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Unable to read provider configuration: {}", source))]
    ConfigDeserialize { source: serde_json::Error },

    #[snafu(display("{}", source))]
    Client { source: crate::clients::Error },
}

/// The provider configuration block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Path to a kubeconfig file. The default kubeconfig is used when unset.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use. The current context is used when unset.
    #[serde(default)]
    pub context: Option<String>,
    /// Never contact a cluster. Data sources refuse to read in this mode.
    #[serde(default)]
    pub offline: Option<bool>,
}

impl ProviderConfig {
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or_default()
    }

    /// Build the provider data described by this configuration.
    pub async fn provider_data(&self) -> Result<ProviderData> {
        if self.is_offline() {
            info!("provider configured in offline mode");
            return Ok(ProviderData::offline());
        }
        let client = match (&self.kubeconfig, &self.context) {
            (None, None) => KubeDynamicClient::new().await,
            (path, context) => {
                KubeDynamicClient::new_from_kubeconfig(path.as_deref(), context.as_deref()).await
            }
        }
        .context(ClientSnafu)?;
        Ok(ProviderData::online(Arc::new(client)))
    }
}

/// Everything a host needs to know about the provider's attributes, keyed by type name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSchemas {
    pub provider: Schema,
    pub data_source_schemas: BTreeMap<String, Schema>,
}

/// The provider. It is configured once and then serves any number of data source reads.
#[derive(Debug, Clone, Default)]
pub struct Provider {
    data: Option<ProviderData>,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    pub fn schema(&self) -> Schema {
        Schema::new("Provider for Kubernetes resources. Exposes custom resources as data sources.")
            .with_attribute(
                Attribute::string(
                    "kubeconfig",
                    "Path to the kubeconfig file. Defaults to the KUBECONFIG environment variable \
                    or ~/.kube/config.",
                )
                .optional(),
            )
            .with_attribute(
                Attribute::string(
                    "context",
                    "The kubeconfig context to use. Defaults to the current context.",
                )
                .optional(),
            )
            .with_attribute(
                Attribute::bool(
                    "offline",
                    "Enable offline mode. Data sources cannot read from the cluster in this mode.",
                )
                .optional(),
            )
    }

    /// Whether `configure` or `configure_with_client` has succeeded.
    pub fn is_configured(&self) -> bool {
        self.data.is_some()
    }

    /// Configure the provider from its JSON configuration block. A `null` block is the same as an
    /// empty one.
    pub async fn configure(&mut self, config: Value) -> Diagnostics {
        let config = match config {
            Value::Null => Value::Object(Default::default()),
            config => config,
        };
        let mut diagnostics = self.schema().validate_config(&config);
        if diagnostics.has_error() {
            return diagnostics;
        }
        let result = match serde_json::from_value::<ProviderConfig>(config)
            .context(ConfigDeserializeSnafu)
        {
            Ok(config) => {
                if config.is_offline() && (config.kubeconfig.is_some() || config.context.is_some())
                {
                    diagnostics.add_warning(
                        "Kubernetes Client Settings Ignored",
                        "The provider is in offline mode, so 'kubeconfig' and 'context' are not \
                        used.",
                    );
                }
                config.provider_data().await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(data) => {
                debug!("provider configured: {:?}", data);
                self.data = Some(data);
            }
            Err(e @ Error::ConfigDeserialize { .. }) => {
                diagnostics.add_error("Unable to read provider configuration", e.to_string())
            }
            Err(e) => diagnostics.add_error("Unable to create Kubernetes client", e.to_string()),
        }
        diagnostics
    }

    /// Configure the provider with an existing client.
    pub fn configure_with_client(&mut self, client: Arc<dyn DynamicClient>) {
        self.data = Some(ProviderData::online(client));
    }

    /// Fresh, unconfigured instances of every data source this provider serves.
    fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        vec![Box::new(AerospikeClusterV1Beta1DataSource::new())]
    }

    fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .find(|data_source| data_source.type_name(self.type_name()) == type_name)
    }

    pub fn data_source_type_names(&self) -> Vec<String> {
        self.data_sources()
            .iter()
            .map(|data_source| data_source.type_name(self.type_name()))
            .collect()
    }

    pub fn data_source_schema(&self, type_name: &str) -> Option<Schema> {
        self.data_source(type_name)
            .map(|data_source| data_source.schema())
    }

    pub fn data_source_schemas(&self) -> BTreeMap<String, Schema> {
        self.data_sources()
            .iter()
            .map(|data_source| (data_source.type_name(self.type_name()), data_source.schema()))
            .collect()
    }

    pub fn schemas(&self) -> ProviderSchemas {
        ProviderSchemas {
            provider: self.schema(),
            data_source_schemas: self.data_source_schemas(),
        }
    }

    /// Read the data source `type_name` with the given configuration. The data source is
    /// configured with this provider's data and its configuration is validated before the read.
    pub async fn read_data_source(&self, type_name: &str, config: Value) -> ReadResponse {
        let mut data_source = match self.data_source(type_name) {
            Some(data_source) => data_source,
            None => {
                let mut response = ReadResponse::default();
                response.diagnostics.add_error(
                    "Data Source Type Not Found",
                    format!(
                        "The provider does not support the data source type '{}'. Supported \
                        types are: {}",
                        type_name,
                        self.data_source_type_names().join(", ")
                    ),
                );
                return response;
            }
        };

        let configured = data_source.configure(ConfigureRequest {
            provider_data: self.data.clone(),
        });
        if configured.diagnostics.has_error() {
            return ReadResponse {
                state: None,
                diagnostics: configured.diagnostics,
            };
        }

        let mut diagnostics = configured.diagnostics;
        diagnostics.append(data_source.schema().validate_config(&config));
        if diagnostics.has_error() {
            return ReadResponse {
                state: None,
                diagnostics,
            };
        }

        debug!("reading data source '{}'", type_name);
        let mut response = data_source.read(ReadRequest { config }).await;
        diagnostics.append(response.diagnostics);
        response.diagnostics = diagnostics;
        if response.diagnostics.has_error() {
            response.state = None;
        }
        response
    }
}
