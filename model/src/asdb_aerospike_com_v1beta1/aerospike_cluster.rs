use k8s_openapi::api::core::v1::{
    Affinity, ConfigMapVolumeSource, Container, EmptyDirVolumeSource, LocalObjectReference,
    PodDNSConfig, PodSecurityContext, ResourceRequirements, SecretVolumeSource, SecurityContext,
    Toleration, TopologySpreadConstraint,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The desired state of an Aerospike cluster managed by the Aerospike Kubernetes Operator. The
/// `CustomResource` derive also produces a struct named `AerospikeCluster` which represents the
/// whole object in the k8s API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, PartialEq, Serialize)]
#[kube(
    group = "asdb.aerospike.com",
    version = "v1beta1",
    kind = "AerospikeCluster",
    plural = "aerospikeclusters",
    singular = "aerospikecluster",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeClusterSpec {
    /// Roles and users, required when Aerospike security is enabled.
    pub aerospike_access_control: Option<AerospikeAccessControlSpec>,
    /// Contents of aerospike.conf. Free-form.
    pub aerospike_config: Option<Map<String, Value>>,
    pub aerospike_network_policy: Option<AerospikeNetworkPolicy>,
    pub enable_dynamic_config_update: Option<bool>,
    pub headless_service: Option<ServiceSpec>,
    pub image: String,
    pub k8s_node_block_list: Option<Vec<String>>,
    pub max_unavailable: Option<IntOrString>,
    pub operator_client_cert: Option<AerospikeOperatorClientCertSpec>,
    pub operations: Option<Vec<OperationSpec>>,
    pub paused: Option<bool>,
    pub pod_service: Option<ServiceSpec>,
    pub pod_spec: Option<AerospikePodSpec>,
    pub rack_config: Option<RackConfig>,
    pub roster_node_block_list: Option<Vec<String>>,
    pub seeds_finder_services: Option<SeedsFinderServices>,
    pub size: i32,
    pub storage: Option<AerospikeStorageSpec>,
    pub validation_policy: Option<ValidationPolicySpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeAccessControlSpec {
    pub admin_policy: Option<AerospikeClientAdminPolicy>,
    pub roles: Option<Vec<AerospikeRoleSpec>>,
    pub users: Vec<AerospikeUserSpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeClientAdminPolicy {
    /// Milliseconds.
    pub timeout: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeRoleSpec {
    pub name: String,
    pub privileges: Vec<String>,
    pub read_quota: Option<u32>,
    pub whitelist: Option<Vec<String>>,
    pub write_quota: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeUserSpec {
    pub name: String,
    pub roles: Vec<String>,
    /// The secret holding the user's password. Absent for PKI-only users.
    pub secret_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeNetworkPolicy {
    pub access: Option<String>,
    pub alternate_access: Option<String>,
    pub custom_access_network_names: Option<Vec<String>>,
    pub custom_alternate_access_network_names: Option<Vec<String>>,
    pub custom_fabric_network_names: Option<Vec<String>>,
    #[serde(rename = "customTLSAccessNetworkNames")]
    pub custom_tls_access_network_names: Option<Vec<String>>,
    #[serde(rename = "customTLSAlternateAccessNetworkNames")]
    pub custom_tls_alternate_access_network_names: Option<Vec<String>>,
    #[serde(rename = "customTLSFabricNetworkNames")]
    pub custom_tls_fabric_network_names: Option<Vec<String>>,
    pub fabric: Option<String>,
    pub tls_access: Option<String>,
    pub tls_alternate_access: Option<String>,
    pub tls_fabric: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeOperatorClientCertSpec {
    pub cert_path_in_operator: Option<AerospikeCertPathInOperatorSource>,
    pub secret_cert_source: Option<AerospikeSecretCertSource>,
    pub tls_client_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeCertPathInOperatorSource {
    pub ca_certs_path: Option<String>,
    pub client_cert_path: Option<String>,
    pub client_key_path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeSecretCertSource {
    pub ca_certs_filename: Option<String>,
    pub ca_certs_source: Option<CaCertsSource>,
    pub client_cert_filename: Option<String>,
    pub client_key_filename: Option<String>,
    pub secret_name: Option<String>,
    pub secret_namespace: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaCertsSource {
    pub secret_name: String,
    pub secret_namespace: Option<String>,
}

/// A one-off operation, such as a warm or cold restart, on some or all pods.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
    pub id: String,
    pub kind: String,
    pub pod_list: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    pub metadata: Option<AerospikeObjectMeta>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeObjectMeta {
    pub annotations: Option<BTreeMap<String, String>>,
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikePodSpec {
    pub aerospike_container: Option<AerospikeContainerSpec>,
    pub aerospike_init_container: Option<AerospikeInitContainerSpec>,
    pub affinity: Option<Affinity>,
    pub dns_config: Option<PodDNSConfig>,
    pub dns_policy: Option<String>,
    pub host_network: Option<bool>,
    pub image_pull_secrets: Option<Vec<LocalObjectReference>>,
    pub init_containers: Option<Vec<Container>>,
    pub metadata: Option<AerospikeObjectMeta>,
    pub multi_pod_per_host: Option<bool>,
    pub node_selector: Option<BTreeMap<String, String>>,
    pub readiness_gate_enabled: Option<bool>,
    pub security_context: Option<PodSecurityContext>,
    pub service_account_name: Option<String>,
    pub sidecars: Option<Vec<Container>>,
    pub tolerations: Option<Vec<Toleration>>,
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeContainerSpec {
    pub resources: Option<ResourceRequirements>,
    pub security_context: Option<SecurityContext>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeInitContainerSpec {
    pub image_name_and_tag: Option<String>,
    pub image_registry: Option<String>,
    pub image_registry_namespace: Option<String>,
    pub resources: Option<ResourceRequirements>,
    pub security_context: Option<SecurityContext>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackConfig {
    pub max_ignorable_pods: Option<IntOrString>,
    /// Aerospike namespaces that are rack aware.
    pub namespaces: Option<Vec<String>>,
    pub racks: Option<Vec<Rack>>,
    pub rolling_update_batch_size: Option<IntOrString>,
    pub scale_down_batch_size: Option<IntOrString>,
}

/// A rack overrides the cluster-wide config, storage and scheduling for the pods placed in it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    pub aerospike_config: Option<Map<String, Value>>,
    pub id: i64,
    pub node_name: Option<String>,
    pub pod_spec: Option<RackPodSpec>,
    pub rack_label: Option<String>,
    pub region: Option<String>,
    pub storage: Option<AerospikeStorageSpec>,
    pub zone: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackPodSpec {
    pub affinity: Option<Affinity>,
    pub node_selector: Option<BTreeMap<String, String>>,
    pub tolerations: Option<Vec<Toleration>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedsFinderServices {
    pub load_balancer: Option<LoadBalancerSpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerSpec {
    pub annotations: Option<BTreeMap<String, String>>,
    pub external_traffic_policy: Option<String>,
    pub labels: Option<BTreeMap<String, String>>,
    pub load_balancer_source_ranges: Option<Vec<String>>,
    pub port: Option<i32>,
    pub port_name: Option<String>,
    pub target_port: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeStorageSpec {
    pub block_volume_policy: Option<AerospikePersistentVolumePolicySpec>,
    pub cleanup_threads: Option<i64>,
    pub delete_local_storage_on_restart: Option<bool>,
    pub filesystem_volume_policy: Option<AerospikePersistentVolumePolicySpec>,
    pub local_storage_classes: Option<Vec<String>>,
    pub volumes: Option<Vec<VolumeSpec>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikePersistentVolumePolicySpec {
    pub cascade_delete: Option<bool>,
    pub effective_cascade_delete: Option<bool>,
    pub effective_init_method: Option<String>,
    pub effective_wipe_method: Option<String>,
    pub init_method: Option<String>,
    pub wipe_method: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSpec {
    pub aerospike: Option<AerospikeServerVolumeAttachment>,
    pub cascade_delete: Option<bool>,
    pub effective_cascade_delete: Option<bool>,
    pub effective_init_method: Option<String>,
    pub effective_wipe_method: Option<String>,
    pub init_containers: Option<Vec<VolumeAttachment>>,
    pub init_method: Option<String>,
    pub name: String,
    pub sidecars: Option<Vec<VolumeAttachment>>,
    pub source: VolumeSource,
    pub wipe_method: Option<String>,
}

/// Where a volume is mounted in the Aerospike server container.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AerospikeServerVolumeAttachment {
    pub path: String,
    pub mount_options: Option<MountOptions>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAttachment {
    pub container_name: String,
    pub path: String,
    pub mount_options: Option<MountOptions>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOptions {
    pub mount_propagation: Option<String>,
    pub read_only: Option<bool>,
    pub sub_path: Option<String>,
    pub sub_path_expr: Option<String>,
}

/// Exactly one source is expected to be set.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSource {
    pub config_map: Option<ConfigMapVolumeSource>,
    pub empty_dir: Option<EmptyDirVolumeSource>,
    pub persistent_volume: Option<PersistentVolumeSpec>,
    pub secret: Option<SecretVolumeSource>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeSpec {
    pub access_modes: Option<Vec<String>>,
    pub metadata: Option<AerospikeObjectMeta>,
    pub selector: Option<LabelSelector>,
    pub size: Quantity,
    pub storage_class: Option<String>,
    /// `Filesystem` or `Block`.
    pub volume_mode: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicySpec {
    pub skip_work_dir_validate: bool,
    pub skip_xdr_dlog_file_validate: bool,
}

#[cfg(test)]
mod test {
    use super::*;
    use kube::Resource;
    use serde_json::json;

    #[test]
    fn resource_identifiers() {
        assert_eq!(
            AerospikeCluster::api_version(&()),
            "asdb.aerospike.com/v1beta1"
        );
        assert_eq!(AerospikeCluster::kind(&()), "AerospikeCluster");
        assert_eq!(AerospikeCluster::plural(&()), "aerospikeclusters");
        assert_eq!(AerospikeCluster::group(&()), "asdb.aerospike.com");
    }

    #[test]
    fn deserialize_acronym_fields() {
        let policy: AerospikeNetworkPolicy = serde_json::from_value(json!({
            "access": "customInterface",
            "customAccessNetworkNames": ["net-a"],
            "customTLSAccessNetworkNames": ["net-tls"],
            "customTLSFabricNetworkNames": ["fabric-tls"]
        }))
        .unwrap();
        assert_eq!(policy.access.as_deref(), Some("customInterface"));
        assert_eq!(
            policy.custom_tls_access_network_names,
            Some(vec!["net-tls".to_string()])
        );
        assert_eq!(
            policy.custom_tls_fabric_network_names,
            Some(vec!["fabric-tls".to_string()])
        );
        assert!(policy.custom_tls_alternate_access_network_names.is_none());
    }

    #[test]
    fn deserialize_storage() {
        let storage: AerospikeStorageSpec = serde_json::from_value(json!({
            "filesystemVolumePolicy": {"initMethod": "deleteFiles", "cascadeDelete": true},
            "volumes": [{
                "name": "workdir",
                "aerospike": {"path": "/opt/aerospike", "mountOptions": {"readOnly": false}},
                "source": {
                    "persistentVolume": {
                        "storageClass": "ssd",
                        "volumeMode": "Filesystem",
                        "size": "1Gi"
                    }
                },
                "sidecars": [{"containerName": "exporter", "path": "/data"}]
            }]
        }))
        .unwrap();
        let volume = &storage.volumes.as_ref().unwrap()[0];
        assert_eq!(volume.aerospike.as_ref().unwrap().path, "/opt/aerospike");
        let pv = volume.source.persistent_volume.as_ref().unwrap();
        assert_eq!(pv.size, Quantity("1Gi".to_string()));
        assert_eq!(pv.volume_mode, "Filesystem");
        assert_eq!(
            volume.sidecars.as_ref().unwrap()[0].container_name,
            "exporter"
        );
    }

    #[test]
    fn missing_required_spec_field_is_an_error() {
        let result = serde_json::from_value::<AerospikeClusterSpec>(json!({"size": 2}));
        assert!(result.is_err());
    }
}
