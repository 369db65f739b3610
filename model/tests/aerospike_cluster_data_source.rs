mod mock;

use maplit::btreemap;
use mock::{aerospike_cluster, MockDynamicClient, Request};
use model::asdb_aerospike_com_v1beta1::*;
use model::constants::AEROSPIKE_CLUSTER_V1BETA1;
use model::{ConfigureRequest, DataSource, Provider, ProviderData, ReadRequest, Schema};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

fn config(name: &str, namespace: &str) -> Value {
    json!({"metadata": {"name": name, "namespace": namespace}})
}

fn configured(client: Arc<MockDynamicClient>) -> AerospikeClusterV1Beta1DataSource {
    let mut data_source = AerospikeClusterV1Beta1DataSource::new();
    let response = data_source.configure(ConfigureRequest {
        provider_data: Some(ProviderData::online(client)),
    });
    assert!(response.diagnostics.is_empty());
    data_source
}

fn provider(client: Arc<MockDynamicClient>) -> Provider {
    let mut provider = Provider::new();
    provider.configure_with_client(client);
    provider
}

#[tokio::test]
async fn read_sets_identity_and_metadata() {
    let client = Arc::new(MockDynamicClient::object(aerospike_cluster(
        "aerocluster",
        "aerospike",
    )));
    let data_source = configured(client.clone());
    let response = data_source
        .read(ReadRequest {
            config: config("aerocluster", "aerospike"),
        })
        .await;
    assert!(response.diagnostics.is_empty(), "{}", response.diagnostics);
    let state = response.state.unwrap();

    assert_eq!(state["id"], "aerocluster/aerospike");
    assert_eq!(state["api_version"], "asdb.aerospike.com/v1beta1");
    assert_eq!(state["kind"], "AerospikeCluster");
    assert_eq!(state["metadata"]["name"], "aerocluster");
    assert_eq!(state["metadata"]["namespace"], "aerospike");
    let labels: BTreeMap<String, String> =
        serde_json::from_value(state["metadata"]["labels"].clone()).unwrap();
    assert_eq!(labels, btreemap! {"app".to_string() => "aerospike".to_string()});
    assert!(state["metadata"].get("uid").is_none());
    assert!(state.get("status").is_none());

    assert_eq!(
        client.requests(),
        vec![Request {
            path: "/apis/asdb.aerospike.com/v1beta1/namespaces/aerospike/aerospikeclusters/aerocluster"
                .to_string(),
            namespace: "aerospike".to_string(),
            name: "aerocluster".to_string(),
        }]
    );
}

#[tokio::test]
async fn read_projects_nested_spec() {
    let client = Arc::new(MockDynamicClient::object(aerospike_cluster(
        "aerocluster",
        "aerospike",
    )));
    let response = configured(client)
        .read(ReadRequest {
            config: config("aerocluster", "aerospike"),
        })
        .await;
    let state = response.state.unwrap();
    let spec = &state["spec"];

    assert_eq!(spec["size"], 3);
    assert_eq!(spec["max_unavailable"], "1");
    assert_eq!(
        spec["aerospike_network_policy"]["custom_tls_access_network_names"],
        json!(["aerospike/tls-net"])
    );
    assert_eq!(
        spec["aerospike_config"]["namespaces"][0]["replication-factor"],
        2
    );
    assert_eq!(spec["pod_spec"]["multi_pod_per_host"], true);
    assert_eq!(spec["pod_spec"]["sidecars"][0]["ports"][0]["host_ip"], "0.0.0.0");

    let racks = spec["rack_config"]["racks"].as_array().unwrap();
    assert_eq!(racks.len(), 2);
    assert_eq!(
        racks[0]["storage"]["volumes"][0]["aerospike"]["path"],
        "/opt/aerospike"
    );
    assert_eq!(
        racks[0]["storage"]["volumes"][0]["source"]["persistent_volume"]["size"],
        "1Gi"
    );
    assert!(racks[1]["storage"].is_null());
    assert_eq!(
        spec["storage"]["volumes"][0]["source"]["secret"]["secret_name"],
        "aerospike-secret"
    );
    assert!(spec["validation_policy"].is_null());
}

#[tokio::test]
async fn api_version_and_kind_are_fixed() {
    let mut object = aerospike_cluster("aerocluster", "aerospike");
    object["apiVersion"] = json!("asdb.aerospike.com/v1");
    object["kind"] = json!("SomethingElse");
    let provider = provider(Arc::new(MockDynamicClient::object(object)));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("aerocluster", "aerospike"))
        .await;
    let state = response.state.unwrap();
    assert_eq!(state["api_version"], "asdb.aerospike.com/v1beta1");
    assert_eq!(state["kind"], "AerospikeCluster");
}

#[tokio::test]
async fn id_comes_from_configuration() {
    for (name, namespace) in [("a", "b"), ("aerocluster", "default"), ("db.prod", "team-1")] {
        let client = Arc::new(MockDynamicClient::object(aerospike_cluster(name, namespace)));
        let response = provider(client)
            .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config(name, namespace))
            .await;
        assert_eq!(
            response.state.unwrap()["id"],
            format!("{}/{}", name, namespace)
        );
    }
}

#[tokio::test]
async fn not_found_is_a_diagnostic() {
    let provider = provider(Arc::new(MockDynamicClient::status(404, "NotFound")));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("missing", "aerospike"))
        .await;
    assert!(response.state.is_none());
    let errors: Vec<_> = response.diagnostics.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].summary, "Unable to GET resource");
    assert!(errors[0].detail.contains("NotFound"));
    assert!(errors[0].detail.contains("No AerospikeCluster named 'missing'"));
}

#[tokio::test]
async fn forbidden_has_no_not_found_hint() {
    let provider = provider(Arc::new(MockDynamicClient::status(403, "Forbidden")));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("aerocluster", "aerospike"))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().unwrap();
    assert_eq!(error.summary, "Unable to GET resource");
    assert!(!error.detail.contains("No AerospikeCluster named"));
}

#[tokio::test]
async fn malformed_response_is_a_json_error() {
    let mut object = aerospike_cluster("aerocluster", "aerospike");
    object["spec"]["size"] = json!("three");
    let provider = provider(Arc::new(MockDynamicClient::object(object)));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("aerocluster", "aerospike"))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().unwrap();
    assert_eq!(error.summary, "Unable to unmarshal response");
    assert!(error.detail.starts_with("JSON Error"));
}

#[tokio::test]
async fn response_without_spec_has_null_spec() {
    let mut object = aerospike_cluster("aerocluster", "aerospike");
    object.as_object_mut().unwrap().remove("spec");
    let provider = provider(Arc::new(MockDynamicClient::object(object)));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("aerocluster", "aerospike"))
        .await;
    assert!(response.diagnostics.is_empty(), "{}", response.diagnostics);
    let state = response.state.unwrap();
    assert!(state["spec"].is_null());
    assert_eq!(state["id"], "aerocluster/aerospike");
    assert_eq!(state["metadata"]["name"], "aerocluster");
}

#[tokio::test]
async fn spec_without_required_fields_is_a_json_error() {
    let mut object = aerospike_cluster("aerocluster", "aerospike");
    object["spec"] = json!({"size": 3});
    let provider = provider(Arc::new(MockDynamicClient::object(object)));
    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("aerocluster", "aerospike"))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().unwrap();
    assert_eq!(error.summary, "Unable to unmarshal response");
    assert!(error.detail.contains("image"), "{}", error.detail);
}

#[tokio::test]
async fn invalid_configuration_never_reaches_the_cluster() {
    let client = Arc::new(MockDynamicClient::object(aerospike_cluster(
        "aerocluster",
        "aerospike",
    )));
    let provider = provider(client.clone());

    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, json!({"metadata": {"name": "x"}}))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().unwrap();
    assert_eq!(error.summary, "Missing Configuration for Required Attribute");
    assert_eq!(error.attribute.as_deref(), Some("metadata.namespace"));

    let response = provider
        .read_data_source(
            AEROSPIKE_CLUSTER_V1BETA1,
            json!({"metadata": {"name": "x", "namespace": "y"}, "spec": {"size": 1}}),
        )
        .await;
    assert_eq!(
        response.diagnostics.errors().next().unwrap().summary,
        "Invalid Configuration for Read-Only Attribute"
    );

    let response = provider
        .read_data_source(AEROSPIKE_CLUSTER_V1BETA1, config("UPPER", "aerospike"))
        .await;
    assert!(response.diagnostics.has_error());

    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn offline_provider_stores_no_client() {
    let mut data_source = AerospikeClusterV1Beta1DataSource::new();
    let response = data_source.configure(ConfigureRequest {
        provider_data: Some(ProviderData::offline()),
    });
    let error = response.diagnostics.errors().next().unwrap();
    assert_eq!(error.summary, "Provider in Offline Mode");
    assert!(!data_source.is_configured());

    let response = data_source
        .read(ReadRequest {
            config: config("aerocluster", "aerospike"),
        })
        .await;
    assert!(response.state.is_none());
    assert_eq!(
        response.diagnostics.errors().next().unwrap().summary,
        "Unconfigured Kubernetes Client"
    );
}

/// The JSON field names of a model struct. Every field serializes, so `T::default()` has them all.
fn model_fields<T: Default + Serialize>() -> BTreeSet<String> {
    match serde_json::to_value(T::default()).unwrap() {
        Value::Object(fields) => fields.keys().cloned().collect(),
        other => panic!("expected an object, got {}", other),
    }
}

fn schema_fields(schema: &Schema, path: &str) -> BTreeSet<String> {
    schema
        .attribute_at_path(path)
        .and_then(|attribute| attribute.nested_attributes())
        .unwrap_or_else(|| panic!("no nested attribute at '{}'", path))
        .iter()
        .map(|attribute| attribute.json_name.clone())
        .collect()
}

macro_rules! assert_same_fields {
    ($schema:expr, $($path:literal => $model:ty),+ $(,)?) => {
        $({
            let model_keys = model_fields::<$model>();
            let schema_keys = schema_fields(&$schema, $path);
            assert_eq!(
                model_keys.difference(&schema_keys).collect::<Vec<_>>(),
                Vec::<&String>::new(),
                "fields of {} missing from the schema at '{}'",
                stringify!($model),
                $path
            );
            assert_eq!(
                schema_keys.difference(&model_keys).collect::<Vec<_>>(),
                Vec::<&String>::new(),
                "attributes at '{}' missing from {}",
                $path,
                stringify!($model)
            );
        })+
    };
}

#[test]
fn schema_matches_the_typed_model() {
    let schema = AerospikeClusterV1Beta1DataSource::new().schema();
    assert_same_fields!(
        schema,
        "spec" => AerospikeClusterSpec,
        "spec.aerospike_access_control" => AerospikeAccessControlSpec,
        "spec.aerospike_access_control.admin_policy" => AerospikeClientAdminPolicy,
        "spec.aerospike_access_control.roles" => AerospikeRoleSpec,
        "spec.aerospike_access_control.users" => AerospikeUserSpec,
        "spec.aerospike_network_policy" => AerospikeNetworkPolicy,
        "spec.headless_service" => ServiceSpec,
        "spec.headless_service.metadata" => AerospikeObjectMeta,
        "spec.pod_service" => ServiceSpec,
        "spec.operator_client_cert" => AerospikeOperatorClientCertSpec,
        "spec.operator_client_cert.cert_path_in_operator" => AerospikeCertPathInOperatorSource,
        "spec.operator_client_cert.secret_cert_source" => AerospikeSecretCertSource,
        "spec.operator_client_cert.secret_cert_source.ca_certs_source" => CaCertsSource,
        "spec.operations" => OperationSpec,
        "spec.pod_spec" => AerospikePodSpec,
        "spec.pod_spec.aerospike_container" => AerospikeContainerSpec,
        "spec.pod_spec.aerospike_init_container" => AerospikeInitContainerSpec,
        "spec.rack_config" => RackConfig,
        "spec.rack_config.racks" => Rack,
        "spec.rack_config.racks.pod_spec" => RackPodSpec,
        "spec.rack_config.racks.storage" => AerospikeStorageSpec,
        "spec.rack_config.racks.storage.volumes" => VolumeSpec,
        "spec.seeds_finder_services" => SeedsFinderServices,
        "spec.seeds_finder_services.load_balancer" => LoadBalancerSpec,
        "spec.storage" => AerospikeStorageSpec,
        "spec.storage.block_volume_policy" => AerospikePersistentVolumePolicySpec,
        "spec.storage.filesystem_volume_policy" => AerospikePersistentVolumePolicySpec,
        "spec.storage.volumes" => VolumeSpec,
        "spec.storage.volumes.aerospike" => AerospikeServerVolumeAttachment,
        "spec.storage.volumes.aerospike.mount_options" => MountOptions,
        "spec.storage.volumes.init_containers" => VolumeAttachment,
        "spec.storage.volumes.sidecars" => VolumeAttachment,
        "spec.storage.volumes.sidecars.mount_options" => MountOptions,
        "spec.storage.volumes.source" => VolumeSource,
        "spec.storage.volumes.source.persistent_volume" => PersistentVolumeSpec,
        "spec.storage.volumes.source.persistent_volume.metadata" => AerospikeObjectMeta,
        "spec.validation_policy" => ValidationPolicySpec,
    );
}

#[test]
fn list_paths_resolve_with_brackets() {
    let schema = AerospikeClusterV1Beta1DataSource::new().schema();
    for path in [
        "spec.rack_config.racks[].storage.volumes[].aerospike.path",
        "spec.rack_config.racks[].pod_spec.tolerations[].effect",
        "spec.pod_spec.security_context.run_as_user",
    ] {
        assert!(schema.attribute_at_path(path).is_some(), "{}", path);
    }
}
