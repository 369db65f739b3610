/// Helper macro to avoid retyping the provider type name when creating further string constants
/// from it. When given no parameters, this returns the provider type name. When given a string
/// literal parameter it adds `_parameter` to the end.
macro_rules! k8s {
    () => {
        "k8s"
    };
    ($s:literal) => {
        concat!(k8s!(), "_", $s)
    };
}

// Provider identifiers
pub const PROVIDER_TYPE_NAME: &str = k8s!();
pub const AEROSPIKE_CLUSTER_V1BETA1: &str = k8s!("asdb_aerospike_com_aerospike_cluster_v1beta1");

// Diagnostic summaries shared by every data source
pub const OFFLINE_MODE_SUMMARY: &str = "Provider in Offline Mode";
pub const OFFLINE_MODE_DETAIL: &str = "This provider was configured with 'offline = true' and \
    cannot read data from a Kubernetes cluster. Remove the 'offline' setting from the provider \
    configuration to read remote resources.";
pub const UNCONFIGURED_CLIENT_SUMMARY: &str = "Unconfigured Kubernetes Client";

/// Separates the name and the namespace in data source IDs.
pub const ID_SEPARATOR: &str = "/";

#[test]
fn k8s_constants_macro_test() {
    assert_eq!("k8s", k8s!());
    assert_eq!("k8s_foo", k8s!("foo"));
    assert_eq!(
        "k8s_asdb_aerospike_com_aerospike_cluster_v1beta1",
        AEROSPIKE_CLUSTER_V1BETA1
    );
}
