use crate::k8s_schema::{
    affinity, config_map_volume_source, containers, empty_dir_volume_source, label_selector,
    local_object_references, object_meta, pod_dns_config, pod_security_context,
    resource_requirements, secret_volume_source, security_context, tolerations,
    topology_spread_constraints,
};
use crate::schema::{Attribute, ElementType, Schema};
use crate::StringValidator;

pub(crate) fn schema() -> Schema {
    Schema::new("AerospikeCluster is the schema for the AerospikeCluster API")
        .with_attribute(Attribute::string(
            "id",
            "Contains the value `metadata.name/metadata.namespace`.",
        ))
        .with_attribute(Attribute::string(
            "api_version",
            "The API group of the requested resource.",
        ))
        .with_attribute(Attribute::string("kind", "The type of the requested resource."))
        .with_attribute(metadata())
        .with_attribute(spec())
}

fn metadata() -> Attribute {
    Attribute::single_nested(
        "metadata",
        "Data that helps uniquely identify this object.",
        vec![
            Attribute::string(
                "name",
                "Unique identifier for this object. See \
                https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names for \
                more details.",
            )
            .required()
            .validator(StringValidator::LengthAtLeast(1))
            .validator(StringValidator::Name),
            Attribute::string(
                "namespace",
                "Namespace that contains this object. See \
                https://kubernetes.io/docs/concepts/overview/working-with-objects/namespaces/ for \
                more details.",
            )
            .required()
            .validator(StringValidator::LengthAtLeast(1))
            .validator(StringValidator::Namespace),
            Attribute::map(
                "labels",
                ElementType::String,
                "Keys and values that can be used to organize and categorize objects. See \
                https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/ for more \
                details.",
            ),
            Attribute::map(
                "annotations",
                ElementType::String,
                "Unstructured key value map stored with a resource that may be set by external \
                tools to store and retrieve arbitrary metadata. See \
                https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations/ for \
                more details.",
            ),
        ],
    )
    .required()
}

fn spec() -> Attribute {
    Attribute::single_nested(
        "spec",
        "AerospikeClusterSpec defines the desired state of AerospikeCluster",
        vec![
            access_control(),
            Attribute::dynamic(
                "aerospike_config",
                "AerospikeConfig sets config in aerospike.conf file. Other configs are taken as \
                default",
            ),
            network_policy(),
            Attribute::bool(
                "enable_dynamic_config_update",
                "EnableDynamicConfigUpdate enables dynamic config update flow of the operator. If \
                enabled, operator will try to update the Aerospike config dynamically. In case of \
                inconsistent failures during dynamic config update, operator will fallback to \
                rolling restart.",
            ),
            service(
                "headless_service",
                "HeadlessService defines additional configuration parameters for the headless \
                service created to discover Aerospike Cluster nodes",
            ),
            Attribute::string("image", "Aerospike server image"),
            Attribute::list(
                "k8s_node_block_list",
                ElementType::String,
                "K8sNodeBlockList is a list of Kubernetes nodes which are not used for Aerospike \
                pods. Pods are not scheduled on these nodes. Pods are migrated from these nodes if \
                already present. This is useful for the maintenance of Kubernetes nodes.",
            ),
            Attribute::string(
                "max_unavailable",
                "MaxUnavailable is the percentage/number of pods that can be allowed to go down or \
                unavailable before application disruption. This value is used to create \
                PodDisruptionBudget. Defaults to 1.",
            ),
            operator_client_cert(),
            Attribute::list_nested(
                "operations",
                "Operations is a list of on-demand operations to be performed on the Aerospike \
                cluster.",
                vec![
                    Attribute::string(
                        "id",
                        "Id is the unique identifier for the operation. It is used by the \
                        operator to track the operation.",
                    ),
                    Attribute::string(
                        "kind",
                        "Kind is the type of operation to be performed on the Aerospike cluster.",
                    ),
                    Attribute::list(
                        "pod_list",
                        ElementType::String,
                        "PodList is the list of pods on which the operation is to be performed.",
                    ),
                ],
            ),
            Attribute::bool(
                "paused",
                "Paused flag is used to pause the reconciliation for the AerospikeCluster.",
            ),
            service(
                "pod_service",
                "PodService defines additional configuration parameters for the pod service \
                created to expose the Aerospike Cluster nodes",
            ),
            pod_spec(),
            rack_config(),
            Attribute::list(
                "roster_node_block_list",
                ElementType::String,
                "RosterNodeBlockList is a list of blocked nodeIDs from roster in a strong-\
                consistency setup",
            ),
            seeds_finder_services(),
            Attribute::int64("size", "Aerospike cluster size"),
            storage(
                "storage",
                "Storage specify persistent storage to use for the Aerospike pods",
            ),
            Attribute::single_nested(
                "validation_policy",
                "ValidationPolicy controls validation of the Aerospike cluster resource.",
                vec![
                    Attribute::bool(
                        "skip_work_dir_validate",
                        "skipWorkDirValidate validates that Aerospike work directory is mounted \
                        on a persistent file storage. Defaults to false.",
                    ),
                    Attribute::bool(
                        "skip_xdr_dlog_file_validate",
                        "ValidateXdrDigestLogFile validates that xdr digest log file is mounted on \
                        a persistent file storage. Defaults to false.",
                    ),
                ],
            ),
        ],
    )
}

fn access_control() -> Attribute {
    Attribute::single_nested(
        "aerospike_access_control",
        "Has the Aerospike roles and users definitions. Required if aerospike cluster security is \
        enabled.",
        vec![
            Attribute::single_nested(
                "admin_policy",
                "AerospikeAdminPolicy specifies the aerospike client admin policy for access \
                control operations.",
                vec![Attribute::int64(
                    "timeout",
                    "Timeout for admin client policy in milliseconds.",
                )],
            ),
            Attribute::list_nested(
                "roles",
                "Roles is the set of roles to allow on the Aerospike cluster.",
                vec![
                    Attribute::string("name", "Name of this role."),
                    Attribute::list(
                        "privileges",
                        ElementType::String,
                        "Privileges granted to this role.",
                    ),
                    Attribute::int64(
                        "read_quota",
                        "ReadQuota specifies permitted rate of read records for current role (the \
                        value is in RPS)",
                    ),
                    Attribute::list(
                        "whitelist",
                        ElementType::String,
                        "Whitelist of host address allowed for this role.",
                    ),
                    Attribute::int64(
                        "write_quota",
                        "WriteQuota specifies permitted rate of write records for current role \
                        (the value is in RPS)",
                    ),
                ],
            ),
            Attribute::list_nested(
                "users",
                "Users is the set of users to allow on the Aerospike cluster.",
                vec![
                    Attribute::string("name", "Name is the user's username."),
                    Attribute::list(
                        "roles",
                        ElementType::String,
                        "Roles is the list of roles granted to the user.",
                    ),
                    Attribute::string(
                        "secret_name",
                        "SecretName has secret info created by user. User needs to create this \
                        secret from password literal. eg: kubectl create secret generic \
                        auth-secret --from-literal=password='admin123'",
                    ),
                ],
            ),
        ],
    )
}

fn network_policy() -> Attribute {
    let access = |name: &str, description: &str| Attribute::string(name, description);
    let names = |name: &str, json_name: Option<&str>, description: &str| {
        let attribute = Attribute::list(name, ElementType::String, description);
        match json_name {
            Some(json_name) => attribute.json_name(json_name),
            None => attribute,
        }
    };
    Attribute::single_nested(
        "aerospike_network_policy",
        "AerospikeNetworkPolicy specifies how clients and tools access the Aerospike cluster.",
        vec![
            access(
                "access",
                "AccessType is the type of network address to use for Aerospike access address. \
                Defaults to hostInternal.",
            ),
            access(
                "alternate_access",
                "AlternateAccessType is the type of network address to use for Aerospike alternate \
                access address. Defaults to hostExternal.",
            ),
            names(
                "custom_access_network_names",
                None,
                "CustomAccessNetworkNames is the list of the pod's network interfaces used for \
                Aerospike access address. Each element in the list is specified with a namespace \
                and the name of a NetworkAttachmentDefinition, separated by slash (/). These \
                elements must be defined in the pod annotation k8s.v1.cni.cncf.io/networks in \
                order to assign network interfaces to the pod. Required with 'customInterface' \
                access type.",
            ),
            names(
                "custom_alternate_access_network_names",
                None,
                "CustomAlternateAccessNetworkNames is the list of the pod's network interfaces \
                used for Aerospike alternate access address. Required with 'customInterface' \
                alternateAccess type",
            ),
            names(
                "custom_fabric_network_names",
                None,
                "CustomFabricNetworkNames is the list of the pod's network interfaces used for \
                Aerospike fabric address. Required with 'customInterface' fabric type",
            ),
            names(
                "custom_tls_access_network_names",
                Some("customTLSAccessNetworkNames"),
                "CustomTLSAccessNetworkNames is the list of the pod's network interfaces used for \
                Aerospike TLS access address. Required with 'customInterface' tlsAccess type",
            ),
            names(
                "custom_tls_alternate_access_network_names",
                Some("customTLSAlternateAccessNetworkNames"),
                "CustomTLSAlternateAccessNetworkNames is the list of the pod's network interfaces \
                used for Aerospike TLS alternate access address. Required with 'customInterface' \
                tlsAlternateAccess type",
            ),
            names(
                "custom_tls_fabric_network_names",
                Some("customTLSFabricNetworkNames"),
                "CustomTLSFabricNetworkNames is the list of the pod's network interfaces used for \
                Aerospike TLS fabric address. Required with 'customInterface' tlsFabric type",
            ),
            access(
                "fabric",
                "FabricType is the type of network address to use for Aerospike fabric address. \
                Defaults is empty meaning all interfaces 'any'.",
            ),
            access(
                "tls_access",
                "TLSAccessType is the type of network address to use for Aerospike TLS access \
                address. Defaults to hostInternal.",
            ),
            access(
                "tls_alternate_access",
                "TLSAlternateAccessType is the type of network address to use for Aerospike TLS \
                alternate access address. Defaults to hostExternal.",
            ),
            access(
                "tls_fabric",
                "TLSFabricType is the type of network address to use for Aerospike TLS fabric \
                address. Defaults is empty meaning all interfaces 'any'.",
            ),
        ],
    )
}

fn service(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![object_meta("metadata", "")],
    )
}

fn operator_client_cert() -> Attribute {
    Attribute::single_nested(
        "operator_client_cert",
        "Certificates to connect to Aerospike.",
        vec![
            Attribute::single_nested(
                "cert_path_in_operator",
                "AerospikeCertPathInOperatorSource contain configuration for certificates used by \
                operator to connect to aerospike cluster. All paths are on operator's filesystem.",
                vec![
                    Attribute::string("ca_certs_path", ""),
                    Attribute::string("client_cert_path", ""),
                    Attribute::string("client_key_path", ""),
                ],
            ),
            Attribute::single_nested(
                "secret_cert_source",
                "",
                vec![
                    Attribute::string("ca_certs_filename", ""),
                    Attribute::single_nested(
                        "ca_certs_source",
                        "CaCertsSource Specifies Secret containing CA certificates. If specified, \
                        it takes precedence over the caCertsFilename in the main secret.",
                        vec![
                            Attribute::string("secret_name", ""),
                            Attribute::string("secret_namespace", ""),
                        ],
                    ),
                    Attribute::string("client_cert_filename", ""),
                    Attribute::string("client_key_filename", ""),
                    Attribute::string("secret_name", ""),
                    Attribute::string("secret_namespace", ""),
                ],
            ),
            Attribute::string(
                "tls_client_name",
                "If specified, this name will be added to tls-authenticate-client list by the \
                operator",
            ),
        ],
    )
}

fn container_spec_attributes() -> Vec<Attribute> {
    vec![
        resource_requirements(
            "resources",
            "Define resources requests and limits for Aerospike Server Container. Please contact \
            aerospike for proper sizing exercise. Only Memory and Cpu resources can be given.",
        ),
        security_context(
            "security_context",
            "SecurityContext that will be added to aerospike-server container created by \
            operator.",
        ),
    ]
}

fn pod_spec() -> Attribute {
    let mut init_container = vec![
        Attribute::string(
            "image_name_and_tag",
            "ImageNameAndTag is the name:tag of aerospike-init image",
        ),
        Attribute::string(
            "image_registry",
            "ImageRegistry is the name of image registry for aerospike-init container image. \
            Defaults to docker.io",
        ),
        Attribute::string(
            "image_registry_namespace",
            "ImageRegistryNamespace is the name of namespace in registry for aerospike-init \
            container image",
        ),
    ];
    init_container.extend(container_spec_attributes());

    Attribute::single_nested(
        "pod_spec",
        "Specify additional configuration for the Aerospike pods",
        vec![
            Attribute::single_nested(
                "aerospike_container",
                "AerospikeContainerSpec configures the aerospike-server container created by the \
                operator.",
                container_spec_attributes(),
            ),
            Attribute::single_nested(
                "aerospike_init_container",
                "AerospikeInitContainerSpec configures the aerospike-init container created by \
                the operator.",
                init_container,
            ),
            affinity("affinity", "Affinity for the Aerospike pods"),
            pod_dns_config(
                "dns_config",
                "Specifies the DNS parameters of a pod. Parameters specified here will be merged \
                to the generated DNS configuration based on DNSPolicy.",
            ),
            Attribute::string(
                "dns_policy",
                "Set DNS policy for the pod. Defaults to 'ClusterFirst'. Valid values are \
                'ClusterFirstWithHostNet', 'ClusterFirst', 'Default' or 'None'.",
            ),
            Attribute::bool(
                "host_network",
                "HostNetwork enables host networking for the pod. To enable hostNetwork \
                multiPodPerHost must be false.",
            ),
            local_object_references(
                "image_pull_secrets",
                "ImagePullSecrets is an optional list of references to secrets in the same \
                namespace to use for pulling any of the images used by this PodSpec.",
            ),
            containers(
                "init_containers",
                "InitContainers to add to the pods.",
            ),
            object_meta(
                "metadata",
                "MetaData to add to the pod.",
            ),
            Attribute::bool(
                "multi_pod_per_host",
                "If set true then multiple pods can be created per Kubernetes Node. This will \
                create a NodePort service for each Pod. NodePort, as the name implies, opens a \
                specific port on all the Kubernetes Nodes, and any traffic that is sent to this \
                port is forwarded to the service.",
            ),
            Attribute::map(
                "node_selector",
                ElementType::String,
                "NodeSelector constraints for this pod.",
            ),
            Attribute::bool(
                "readiness_gate_enabled",
                "ReadinessGateEnabled enables the use of a readiness gate on the Aerospike pods, \
                so a pod only receives traffic once it has joined the cluster.",
            ),
            pod_security_context(
                "security_context",
                "SecurityContext holds pod-level security attributes and common container \
                settings. Optional: Defaults to empty. See type description for default values of \
                each field.",
            ),
            Attribute::string(
                "service_account_name",
                "ServiceAccountName is the name of the ServiceAccount to use to run this pod.",
            ),
            containers(
                "sidecars",
                "Sidecars to add to the pod.",
            ),
            tolerations("tolerations", "Tolerations for this pod."),
            topology_spread_constraints(
                "topology_spread_constraints",
                "TopologySpreadConstraints describes how a group of pods ought to spread across \
                topology domains.",
            ),
        ],
    )
}

fn rack_config() -> Attribute {
    Attribute::single_nested(
        "rack_config",
        "RackConfig Configures the operator to deploy rack aware Aerospike cluster. Pods will be \
        deployed in given racks based on given configuration",
        vec![
            Attribute::string(
                "max_ignorable_pods",
                "MaxIgnorablePods is the maximum number/percentage of pending/failed pods in a \
                rack that are ignored while assessing cluster stability.",
            ),
            Attribute::list(
                "namespaces",
                ElementType::String,
                "List of Aerospike namespaces for which rack feature will be enabled",
            ),
            Attribute::list_nested(
                "racks",
                "Racks is the list of all racks",
                vec![
                    Attribute::dynamic(
                        "aerospike_config",
                        "AerospikeConfig overrides the common AerospikeConfig for this Rack. This \
                        is merged with global Aerospike config.",
                    ),
                    Attribute::int64(
                        "id",
                        "Identifier for the rack",
                    ),
                    Attribute::string(
                        "node_name",
                        "K8s Node name for setting rack affinity. Rack pods will be deployed in \
                        given k8s Node",
                    ),
                    Attribute::single_nested(
                        "pod_spec",
                        "PodSpec to use for the pods in this rack. This value overrides the \
                        global spec.",
                        vec![
                            affinity("affinity", "Affinity rules for pod placement."),
                            Attribute::map(
                                "node_selector",
                                ElementType::String,
                                "NodeSelector constraints for this pod.",
                            ),
                            tolerations("tolerations", "Tolerations for this pod."),
                        ],
                    ),
                    Attribute::string(
                        "rack_label",
                        "RackLabel for setting rack affinity. Rack pods will be deployed in k8s \
                        nodes having rackLabel {aerospike.com/rack-label: <rack-label>}",
                    ),
                    Attribute::string(
                        "region",
                        "Region name for setting rack affinity. Rack pods will be deployed to \
                        given Region",
                    ),
                    storage(
                        "storage",
                        "Storage specify persistent storage to use for the pods in this rack. \
                        This value overwrites the global storage config",
                    ),
                    Attribute::string(
                        "zone",
                        "Zone name for setting rack affinity. Rack pods will be deployed to given \
                        Zone",
                    ),
                ],
            ),
            Attribute::string(
                "rolling_update_batch_size",
                "RollingUpdateBatchSize is the percentage/number of rack pods that can be \
                restarted simultaneously",
            ),
            Attribute::string(
                "scale_down_batch_size",
                "ScaleDownBatchSize is the percentage/number of rack pods that can be scaled down \
                simultaneously",
            ),
        ],
    )
}

fn seeds_finder_services() -> Attribute {
    Attribute::single_nested(
        "seeds_finder_services",
        "SeedsFinderServices creates additional Kubernetes service that allow clients to discover \
        Aerospike cluster nodes.",
        vec![Attribute::single_nested(
            "load_balancer",
            "LoadBalancer created to discover Aerospike Cluster nodes from outside of Kubernetes \
            cluster.",
            vec![
                Attribute::map("annotations", ElementType::String, ""),
                Attribute::string(
                    "external_traffic_policy",
                    "Service External Traffic Policy Type string",
                ),
                Attribute::map("labels", ElementType::String, ""),
                Attribute::list(
                    "load_balancer_source_ranges",
                    ElementType::String,
                    "",
                ),
                Attribute::int64("port", "Port Exposed port on load balancer. If not specified \
                    TargetPort is used."),
                Attribute::string("port_name", "PortName Name of exposed port on load balancer."),
                Attribute::int64(
                    "target_port",
                    "TargetPort Target port. If not specified the tls-port of network.service \
                    stanza is used from Aerospike config. If there is no tls port configured then \
                    regular port from network.service is used.",
                ),
            ],
        )],
    )
}

fn volume_policy(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::bool(
                "cascade_delete",
                "CascadeDelete determines if the persistent volumes are deleted after the pod \
                this volume binds to is terminated and removed from the cluster.",
            ),
            Attribute::bool("effective_cascade_delete", "Effective/operative value to use \
                for cascade delete after applying defaults."),
            Attribute::string("effective_init_method", "Effective/operative value to use as \
                the volume init method after applying defaults."),
            Attribute::string("effective_wipe_method", "Effective/operative value to use as \
                the volume wipe method after applying defaults."),
            Attribute::string(
                "init_method",
                "InitMethod determines how volumes attached to Aerospike server pods are \
                initialized when the pods come up the first time. Defaults to 'none'.",
            ),
            Attribute::string(
                "wipe_method",
                "WipeMethod determines how volumes attached to Aerospike server pods are wiped for \
                dealing with storage format changes.",
            ),
        ],
    )
}

fn mount_options() -> Attribute {
    Attribute::single_nested(
        "mount_options",
        "",
        vec![
            Attribute::string(
                "mount_propagation",
                "mountPropagation determines how mounts are propagated from the host to container \
                and the other way around. When not set, MountPropagationNone is used.",
            ),
            Attribute::bool(
                "read_only",
                "Mounted read-only if true, read-write otherwise (false or unspecified). Defaults \
                to false.",
            ),
            Attribute::string(
                "sub_path",
                "Path within the volume from which the container's volume should be mounted. \
                Defaults to '' (volume's root).",
            ),
            Attribute::string(
                "sub_path_expr",
                "Expanded path within the volume from which the container's volume should be \
                mounted. Behaves similarly to SubPath but environment variable references \
                $(VAR_NAME) are expanded using the container's environment.",
            ),
        ],
    )
}

fn volume_attachments(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![
            Attribute::string(
                "container_name",
                "ContainerName is the name of the container to attach this volume to.",
            ),
            mount_options(),
            Attribute::string(
                "path",
                "Path to attach the volume on the container.",
            ),
        ],
    )
}

fn volume_source() -> Attribute {
    Attribute::single_nested(
        "source",
        "Source of this volume.",
        vec![
            config_map_volume_source(
                "config_map",
                "ConfigMap represents a configMap that should populate this volume",
            ),
            empty_dir_volume_source(
                "empty_dir",
                "EmptyDir represents a temporary directory that shares a pod's lifetime.",
            ),
            Attribute::single_nested(
                "persistent_volume",
                "PersistentVolumeSpec describes a persistent volume to claim and attach to \
                Aerospike pods.",
                vec![
                    Attribute::list(
                        "access_modes",
                        ElementType::String,
                        "Name for creating PVC for this volume, Name or path should be given Name \
                        string `json:'name'`",
                    ),
                    object_meta(
                        "metadata",
                        "Additional labels and annotations for the persistent volume claim.",
                    ),
                    label_selector(
                        "selector",
                        "A label query over volumes to consider for binding.",
                    ),
                    Attribute::string(
                        "size",
                        "Size of volume.",
                    ),
                    Attribute::string(
                        "storage_class",
                        "StorageClass should be pre-created by user.",
                    ),
                    Attribute::string(
                        "volume_mode",
                        "VolumeMode specifies if the volume is block/raw or a filesystem.",
                    ),
                ],
            ),
            secret_volume_source(
                "secret",
                "Adapts a Secret into a volume.",
            ),
        ],
    )
}

/// Shared by the cluster-wide storage and the per-rack `storage` override.
fn storage(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            volume_policy(
                "block_volume_policy",
                "BlockVolumePolicy contains default policies for block volumes.",
            ),
            Attribute::int64(
                "cleanup_threads",
                "CleanupThreads contains the maximum number of cleanup threads(dd or blkdiscard) \
                per init container.",
            ),
            Attribute::bool(
                "delete_local_storage_on_restart",
                "DeleteLocalStorageOnRestart enables the deletion of local storage PVCs when a \
                pod is restarted or rescheduled by the operator.",
            ),
            volume_policy(
                "filesystem_volume_policy",
                "FileSystemVolumePolicy contains default policies for filesystem volumes.",
            ),
            Attribute::list(
                "local_storage_classes",
                ElementType::String,
                "LocalStorageClasses contains a list of storage classes which provisions local \
                volumes.",
            ),
            Attribute::list_nested(
                "volumes",
                "Volumes list to attach to created pods.",
                vec![
                    Attribute::single_nested(
                        "aerospike",
                        "Aerospike attachment of this volume on Aerospike server container.",
                        vec![
                            mount_options(),
                            Attribute::string(
                                "path",
                                "Path to attach the volume on the Aerospike server container.",
                            ),
                        ],
                    ),
                    Attribute::bool(
                        "cascade_delete",
                        "CascadeDelete determines if the persistent volumes are deleted after \
                        the pod this volume binds to is terminated and removed from the cluster.",
                    ),
                    Attribute::bool("effective_cascade_delete", "Effective/operative value to \
                        use for cascade delete after applying defaults."),
                    Attribute::string("effective_init_method", "Effective/operative value to \
                        use as the volume init method after applying defaults."),
                    Attribute::string("effective_wipe_method", "Effective/operative value to \
                        use as the volume wipe method after applying defaults."),
                    volume_attachments(
                        "init_containers",
                        "InitContainers are additional init containers where this volume will be \
                        mounted",
                    ),
                    Attribute::string(
                        "init_method",
                        "InitMethod determines how volumes attached to Aerospike server pods are \
                        initialized when the pods come up the first time. Defaults to 'none'.",
                    ),
                    Attribute::string(
                        "name",
                        "Name for this volume, Name or path should be given.",
                    ),
                    volume_attachments(
                        "sidecars",
                        "Sidecars are side containers where this volume will be mounted",
                    ),
                    volume_source(),
                    Attribute::string(
                        "wipe_method",
                        "WipeMethod determines how volumes attached to Aerospike server pods are \
                        wiped for dealing with storage format changes.",
                    ),
                ],
            ),
        ],
    )
}
