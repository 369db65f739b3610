use super::aerospike_cluster::{AerospikeCluster, AerospikeClusterSpec};
use super::aerospike_cluster_schema::schema;
use crate::clients::HttpStatusCode;
use crate::constants::{
    ID_SEPARATOR, OFFLINE_MODE_DETAIL, OFFLINE_MODE_SUMMARY, UNCONFIGURED_CLIENT_SUMMARY,
};
use crate::data_source::{ConfigureRequest, ConfigureResponse, DataSource, ReadRequest, ReadResponse};
use crate::{Diagnostic, DynamicClient, Schema};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::ApiResource;
use kube::Resource;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Reads a single `AerospikeCluster` object from the cluster.
#[derive(Clone, Default)]
pub struct AerospikeClusterV1Beta1DataSource {
    client: Option<Arc<dyn DynamicClient>>,
}

/// The fields of an `AerospikeCluster` response that end up in state. Unlike the CustomResource
/// root type, `spec` may be absent.
#[derive(Debug, Deserialize)]
struct AerospikeClusterResponse {
    #[serde(default)]
    metadata: ObjectMeta,
    spec: Option<AerospikeClusterSpec>,
}

/// The part of the configuration that identifies the object to read.
#[derive(Debug, Deserialize)]
struct ReadConfig {
    metadata: ReadConfigMetadata,
}

#[derive(Debug, Deserialize)]
struct ReadConfigMetadata {
    name: String,
    namespace: String,
}

impl AerospikeClusterV1Beta1DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    async fn read_state(&self, config: Value) -> Result<Value, Diagnostic> {
        let client = self.client.as_ref().ok_or_else(|| {
            Diagnostic::error(
                UNCONFIGURED_CLIENT_SUMMARY,
                "Expected configured kubernetes client, but got nil. Please report this issue to \
                the provider developers.",
            )
        })?;

        let ReadConfig { metadata } = serde_json::from_value(config).map_err(|e| {
            Diagnostic::error(
                "Unable to read data source configuration",
                format!("Unable to read data source configuration: {}", e),
            )
        })?;
        debug!(
            "reading AerospikeCluster '{}' in namespace '{}'",
            metadata.name, metadata.namespace
        );

        let resource = ApiResource::erase::<AerospikeCluster>(&());
        let object = client
            .get(&resource, &metadata.namespace, &metadata.name)
            .await
            .map_err(|e| {
                let mut detail = e.to_string();
                if e.is_not_found() {
                    detail.push_str(&format!(
                        "\n\nNo AerospikeCluster named '{}' exists in namespace '{}'. Make sure \
                        the resource has been created and that the namespace is correct.",
                        metadata.name, metadata.namespace
                    ));
                }
                Diagnostic::error("Unable to GET resource", detail)
            })?;

        let bytes = serde_json::to_vec(&object).map_err(|e| {
            Diagnostic::error("Unable to marshal response", format!("Marshal Error: {}", e))
        })?;
        let cluster: AerospikeClusterResponse = serde_json::from_slice(&bytes).map_err(|e| {
            Diagnostic::error("Unable to unmarshal response", format!("JSON Error: {}", e))
        })?;

        let spec = serde_json::to_value(&cluster.spec).map_err(|e| {
            Diagnostic::error("Unable to convert state", format!("Marshal Error: {}", e))
        })?;
        let data = json!({
            "id": format!("{}{}{}", metadata.name, ID_SEPARATOR, metadata.namespace),
            "apiVersion": AerospikeCluster::api_version(&()),
            "kind": AerospikeCluster::kind(&()),
            "metadata": {
                "name": cluster.metadata.name,
                "namespace": cluster.metadata.namespace,
                "labels": cluster.metadata.labels,
                "annotations": cluster.metadata.annotations,
            },
            "spec": spec,
        });

        self.schema()
            .state_from_json(&data)
            .map_err(|e| Diagnostic::error("Unable to convert state", e.to_string()))
    }
}

#[async_trait::async_trait]
impl DataSource for AerospikeClusterV1Beta1DataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!(
            "{}_asdb_aerospike_com_aerospike_cluster_v1beta1",
            provider_type_name
        )
    }

    fn schema(&self) -> Schema {
        schema()
    }

    fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
        let mut response = ConfigureResponse::default();
        let provider_data = match request.provider_data {
            Some(provider_data) => provider_data,
            None => return response,
        };
        if provider_data.is_offline() {
            response
                .diagnostics
                .add_error(OFFLINE_MODE_SUMMARY, OFFLINE_MODE_DETAIL);
            return response;
        }
        self.client = provider_data.client();
        response
    }

    async fn read(&self, request: ReadRequest) -> ReadResponse {
        match self.read_state(request.config).await {
            Ok(state) => ReadResponse {
                state: Some(state),
                ..ReadResponse::default()
            },
            Err(diagnostic) => ReadResponse {
                state: None,
                diagnostics: diagnostic.into(),
            },
        }
    }
}
