use super::error::{self, Result};
use kube::api::{ApiResource, DynamicObject};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use log::trace;
use snafu::ResultExt;
use std::path::Path;

/// Used in error messages when no kubeconfig context was named.
const CURRENT_CONTEXT: &str = "current-context";

/// Reads arbitrary Kubernetes objects. Data sources use this trait instead of a typed `Api` so that
/// a single client serves every custom resource the provider knows about, and so that tests can
/// substitute canned responses.
#[async_trait::async_trait]
pub trait DynamicClient: Send + Sync {
    /// GET the object named `name` of type `resource` in `namespace`.
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> kube::Result<DynamicObject>;
}

/// A [`DynamicClient`] backed by a `kube::Client`.
///
/// # Example
///
/// ```
///# use model::clients::{DynamicClient, KubeDynamicClient};
///# use model::asdb_aerospike_com_v1beta1::AerospikeCluster;
///# use kube::api::ApiResource;
///# async fn no_run() {
/// let client = KubeDynamicClient::new().await.unwrap();
/// let resource = ApiResource::erase::<AerospikeCluster>(&());
/// let object = client.get(&resource, "aerospike", "aerocluster").await.unwrap();
///# }
/// ```
#[derive(Clone)]
pub struct KubeDynamicClient {
    k8s_client: Client,
}

impl KubeDynamicClient {
    /// Create a client using the default `kube::Client` inference (`KUBECONFIG`, the default
    /// kubeconfig file or the in-cluster service account).
    pub async fn new() -> Result<Self> {
        let k8s_client = Client::try_default()
            .await
            .context(error::InitializationSnafu)?;
        Ok(Self::new_from_k8s_client(k8s_client))
    }

    pub fn new_from_k8s_client(k8s_client: Client) -> Self {
        Self { k8s_client }
    }

    /// Create a client from a kubeconfig file. When `kubeconfig_path` is `None` the default
    /// kubeconfig is used. When `context` is `None` the kubeconfig's current context is used.
    pub async fn new_from_kubeconfig(
        kubeconfig_path: Option<&Path>,
        context: Option<&str>,
    ) -> Result<Self> {
        let options = KubeConfigOptions {
            context: context.map(str::to_string),
            ..KubeConfigOptions::default()
        };
        let context = context.unwrap_or(CURRENT_CONTEXT);
        let config = match kubeconfig_path {
            Some(path) => {
                let kubeconfig =
                    Kubeconfig::read_from(path).context(error::ConfigReadSnafu { path })?;
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(error::ConfigContextSnafu { context })?
            }
            None => Config::from_kubeconfig(&options)
                .await
                .context(error::ConfigContextSnafu { context })?,
        };
        let k8s_client = Client::try_from(config).context(error::InitializationSnafu)?;
        Ok(Self::new_from_k8s_client(k8s_client))
    }
}

#[async_trait::async_trait]
impl DynamicClient for KubeDynamicClient {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> kube::Result<DynamicObject> {
        trace!(
            "getting {} '{}' in namespace '{}'",
            resource.kind,
            name,
            namespace
        );
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.k8s_client.clone(), namespace, resource);
        api.get(name).await
    }
}
