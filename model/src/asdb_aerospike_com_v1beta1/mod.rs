/*!

Data sources for the `asdb.aerospike.com/v1beta1` API group of the Aerospike Kubernetes Operator.

!*/

mod aerospike_cluster;
mod aerospike_cluster_data_source;
mod aerospike_cluster_schema;

pub use aerospike_cluster::{
    AerospikeAccessControlSpec, AerospikeCertPathInOperatorSource, AerospikeClientAdminPolicy,
    AerospikeCluster, AerospikeClusterSpec, AerospikeContainerSpec, AerospikeInitContainerSpec,
    AerospikeNetworkPolicy, AerospikeObjectMeta, AerospikeOperatorClientCertSpec,
    AerospikePersistentVolumePolicySpec, AerospikePodSpec, AerospikeRoleSpec,
    AerospikeSecretCertSource, AerospikeServerVolumeAttachment, AerospikeStorageSpec,
    AerospikeUserSpec, CaCertsSource, LoadBalancerSpec, MountOptions, OperationSpec,
    PersistentVolumeSpec, Rack, RackConfig, RackPodSpec, SeedsFinderServices, ServiceSpec,
    ValidationPolicySpec, VolumeAttachment, VolumeSource, VolumeSpec,
};
pub use aerospike_cluster_data_source::AerospikeClusterV1Beta1DataSource;
