use crate::{DynamicClient, Diagnostics, Schema};
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// What a configured provider hands to each data source: either a shared client, or the marker
/// that the provider runs offline and must not reach a cluster.
#[derive(Clone)]
pub struct ProviderData {
    offline: bool,
    client: Option<Arc<dyn DynamicClient>>,
}

impl ProviderData {
    pub fn online(client: Arc<dyn DynamicClient>) -> Self {
        Self {
            offline: false,
            client: Some(client),
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            client: None,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn client(&self) -> Option<Arc<dyn DynamicClient>> {
        self.client.clone()
    }
}

impl Debug for ProviderData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderData")
            .field("offline", &self.offline)
            .field("client", &self.client.as_ref().map(|_| "DynamicClient"))
            .finish()
    }
}

/// The input of [`DataSource::configure`]. `provider_data` is `None` when the provider itself has
/// not been configured yet.
#[derive(Debug, Clone, Default)]
pub struct ConfigureRequest {
    pub provider_data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

/// The input of [`DataSource::read`]: the data source configuration, keyed by attribute names.
#[derive(Debug, Clone, Default)]
pub struct ReadRequest {
    pub config: Value,
}

/// The output of [`DataSource::read`]. `state` is `None` whenever `diagnostics` has an error.
#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

/// A read-only view of a Kubernetes object.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// The full type name of this data source, given the provider's type name.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    /// Receive the provider data. Called before every `read`.
    fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse;

    async fn read(&self, request: ReadRequest) -> ReadResponse;
}
