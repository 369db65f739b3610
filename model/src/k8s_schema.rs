//! Schema declarations for Kubernetes-standard objects that custom resources embed, such as
//! containers, affinity rules and volume sources. Each function returns a computed attribute with
//! the given name so that CRD schemas can place the object under whatever field name they use.

use crate::schema::{Attribute, ElementType};

pub(crate) fn object_meta(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::map(
                "annotations",
                ElementType::String,
                "Key - Value pair that may be set by external tools to store and retrieve \
                arbitrary metadata.",
            ),
            Attribute::map(
                "labels",
                ElementType::String,
                "Key - Value pairs that can be used to organize and categorize scope and select \
                objects.",
            ),
        ],
    )
}

fn label_selector_requirements(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![
            Attribute::string("key", "key is the label key that the selector applies to."),
            Attribute::string(
                "operator",
                "operator represents a key's relationship to a set of values. Valid operators \
                are In, NotIn, Exists and DoesNotExist.",
            ),
            Attribute::list(
                "values",
                ElementType::String,
                "values is an array of string values. If the operator is In or NotIn, the values \
                array must be non-empty. If the operator is Exists or DoesNotExist, the values \
                array must be empty.",
            ),
        ],
    )
}

pub(crate) fn label_selector(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            label_selector_requirements(
                "match_expressions",
                "matchExpressions is a list of label selector requirements. The requirements are \
                ANDed.",
            ),
            Attribute::map(
                "match_labels",
                ElementType::String,
                "matchLabels is a map of {key,value} pairs. A single {key,value} in the \
                matchLabels map is equivalent to an element of matchExpressions, whose key field \
                is 'key', the operator is 'In', and the values array contains only 'value'.",
            ),
        ],
    )
}

fn node_selector_term_attributes() -> Vec<Attribute> {
    vec![
        label_selector_requirements(
            "match_expressions",
            "A list of node selector requirements by node's labels.",
        ),
        label_selector_requirements(
            "match_fields",
            "A list of node selector requirements by node's fields.",
        ),
    ]
}

fn node_affinity() -> Attribute {
    Attribute::single_nested(
        "node_affinity",
        "Describes node affinity scheduling rules for the pod.",
        vec![
            Attribute::list_nested(
                "preferred_during_scheduling_ignored_during_execution",
                "The scheduler will prefer to schedule pods to nodes that satisfy the affinity \
                expressions specified by this field, but it may choose a node that violates one \
                or more of the expressions.",
                vec![
                    Attribute::single_nested(
                        "preference",
                        "A node selector term, associated with the corresponding weight.",
                        node_selector_term_attributes(),
                    ),
                    Attribute::int64(
                        "weight",
                        "Weight associated with matching the corresponding nodeSelectorTerm, in \
                        the range 1-100.",
                    ),
                ],
            ),
            Attribute::single_nested(
                "required_during_scheduling_ignored_during_execution",
                "If the affinity requirements specified by this field are not met at scheduling \
                time, the pod will not be scheduled onto the node.",
                vec![Attribute::list_nested(
                    "node_selector_terms",
                    "Required. A list of node selector terms. The terms are ORed.",
                    node_selector_term_attributes(),
                )],
            ),
        ],
    )
}

fn pod_affinity_term_attributes() -> Vec<Attribute> {
    vec![
        label_selector("label_selector", "A label query over a set of resources, in this case pods."),
        label_selector(
            "namespace_selector",
            "A label query over the set of namespaces that the term applies to.",
        ),
        Attribute::list(
            "namespaces",
            ElementType::String,
            "namespaces specifies a static list of namespace names that the term applies to.",
        ),
        Attribute::string(
            "topology_key",
            "This pod should be co-located (affinity) or not co-located (anti-affinity) with the \
            pods matching the labelSelector in the specified namespaces, where co-located is \
            defined as running on a node whose value of the label with key topologyKey matches \
            that of any node on which any of the selected pods is running.",
        ),
    ]
}

fn pod_affinity(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::list_nested(
                "preferred_during_scheduling_ignored_during_execution",
                "The scheduler will prefer to schedule pods to nodes that satisfy the expressions \
                specified by this field, but it may choose a node that violates one or more of \
                the expressions.",
                vec![
                    Attribute::single_nested(
                        "pod_affinity_term",
                        "Required. A pod affinity term, associated with the corresponding weight.",
                        pod_affinity_term_attributes(),
                    ),
                    Attribute::int64(
                        "weight",
                        "weight associated with matching the corresponding podAffinityTerm, in \
                        the range 1-100.",
                    ),
                ],
            ),
            Attribute::list_nested(
                "required_during_scheduling_ignored_during_execution",
                "If the requirements specified by this field are not met at scheduling time, the \
                pod will not be scheduled onto the node.",
                pod_affinity_term_attributes(),
            ),
        ],
    )
}

pub(crate) fn affinity(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            node_affinity(),
            pod_affinity(
                "pod_affinity",
                "Describes pod affinity scheduling rules (e.g. co-locate this pod in the same \
                node, zone, etc. as some other pod(s)).",
            ),
            pod_affinity(
                "pod_anti_affinity",
                "Describes pod anti-affinity scheduling rules (e.g. avoid putting this pod in the \
                same node, zone, etc. as some other pod(s)).",
            ),
        ],
    )
}

pub(crate) fn tolerations(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![
            Attribute::string(
                "effect",
                "Effect indicates the taint effect to match. Empty means match all taint effects. \
                When specified, allowed values are NoSchedule, PreferNoSchedule and NoExecute.",
            ),
            Attribute::string(
                "key",
                "Key is the taint key that the toleration applies to. Empty means match all taint \
                keys.",
            ),
            Attribute::string(
                "operator",
                "Operator represents a key's relationship to the value. Valid operators are Exists \
                and Equal. Defaults to Equal.",
            ),
            Attribute::int64(
                "toleration_seconds",
                "TolerationSeconds represents the period of time the toleration (which must be of \
                effect NoExecute) tolerates the taint.",
            ),
            Attribute::string(
                "value",
                "Value is the taint value the toleration matches to. If the operator is Exists, \
                the value should be empty.",
            ),
        ],
    )
}

pub(crate) fn topology_spread_constraints(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![
            label_selector(
                "label_selector",
                "LabelSelector is used to find matching pods. Pods that match this label selector \
                are counted to determine the number of pods in their corresponding topology \
                domain.",
            ),
            Attribute::list(
                "match_label_keys",
                ElementType::String,
                "MatchLabelKeys is a set of pod label keys to select the pods over which \
                spreading will be calculated.",
            ),
            Attribute::int64(
                "max_skew",
                "MaxSkew describes the degree to which pods may be unevenly distributed.",
            ),
            Attribute::int64(
                "min_domains",
                "MinDomains indicates a minimum number of eligible domains.",
            ),
            Attribute::string(
                "node_affinity_policy",
                "NodeAffinityPolicy indicates how we will treat Pod's nodeAffinity/nodeSelector \
                when calculating pod topology spread skew.",
            ),
            Attribute::string(
                "node_taints_policy",
                "NodeTaintsPolicy indicates how we will treat node taints when calculating pod \
                topology spread skew.",
            ),
            Attribute::string(
                "topology_key",
                "TopologyKey is the key of node labels. Nodes that have a label with this key and \
                identical values are considered to be in the same topology.",
            ),
            Attribute::string(
                "when_unsatisfiable",
                "WhenUnsatisfiable indicates how to deal with a pod if it doesn't satisfy the \
                spread constraint. DoNotSchedule (default) or ScheduleAnyway.",
            ),
        ],
    )
}

pub(crate) fn pod_dns_config(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::list(
                "nameservers",
                ElementType::String,
                "A list of DNS name server IP addresses.",
            ),
            Attribute::list_nested(
                "options",
                "A list of DNS resolver options. This will be merged with the base options \
                generated from DNSPolicy.",
                vec![
                    Attribute::string("name", "Required."),
                    Attribute::string("value", ""),
                ],
            ),
            Attribute::list(
                "searches",
                ElementType::String,
                "A list of DNS search domains for host-name lookup.",
            ),
        ],
    )
}

fn se_linux_options() -> Attribute {
    Attribute::single_nested(
        "se_linux_options",
        "The SELinux context to be applied to the container.",
        vec![
            Attribute::string("level", "Level is SELinux level label that applies to the container."),
            Attribute::string("role", "Role is a SELinux role label that applies to the container."),
            Attribute::string("type", "Type is a SELinux type label that applies to the container."),
            Attribute::string("user", "User is a SELinux user label that applies to the container."),
        ],
    )
}

fn seccomp_profile() -> Attribute {
    Attribute::single_nested(
        "seccomp_profile",
        "The seccomp options to use by the containers in this pod.",
        vec![
            Attribute::string(
                "localhost_profile",
                "localhostProfile indicates a profile defined in a file on the node should be used.",
            ),
            Attribute::string(
                "type",
                "type indicates which kind of seccomp profile will be applied. Valid options are \
                Localhost, RuntimeDefault and Unconfined.",
            ),
        ],
    )
}

fn windows_options() -> Attribute {
    Attribute::single_nested(
        "windows_options",
        "The Windows specific settings applied to all containers.",
        vec![
            Attribute::string(
                "gmsa_credential_spec",
                "GMSACredentialSpec is where the GMSA admission webhook inlines the contents of \
                the GMSA credential spec named by the GMSACredentialSpecName field.",
            ),
            Attribute::string(
                "gmsa_credential_spec_name",
                "GMSACredentialSpecName is the name of the GMSA credential spec to use.",
            ),
            Attribute::bool(
                "host_process",
                "HostProcess determines if a container should be run as a 'Host Process' container.",
            ),
            Attribute::string(
                "run_as_user_name",
                "The UserName in Windows to run the entrypoint of the container process.",
            ),
        ],
    )
}

pub(crate) fn pod_security_context(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::int64(
                "fs_group",
                "A special supplemental group that applies to all containers in a pod.",
            ),
            Attribute::string(
                "fs_group_change_policy",
                "fsGroupChangePolicy defines behavior of changing ownership and permission of the \
                volume before being exposed inside Pod.",
            ),
            Attribute::int64(
                "run_as_group",
                "The GID to run the entrypoint of the container process.",
            ),
            Attribute::bool(
                "run_as_non_root",
                "Indicates that the container must run as a non-root user.",
            ),
            Attribute::int64(
                "run_as_user",
                "The UID to run the entrypoint of the container process.",
            ),
            se_linux_options(),
            seccomp_profile(),
            Attribute::list(
                "supplemental_groups",
                ElementType::Int64,
                "A list of groups applied to the first process run in each container, in addition \
                to the container's primary GID.",
            ),
            Attribute::list_nested(
                "sysctls",
                "Sysctls hold a list of namespaced sysctls used for the pod.",
                vec![
                    Attribute::string("name", "Name of a property to set"),
                    Attribute::string("value", "Value of a property to set"),
                ],
            ),
            windows_options(),
        ],
    )
}

pub(crate) fn security_context(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::bool(
                "allow_privilege_escalation",
                "AllowPrivilegeEscalation controls whether a process can gain more privileges \
                than its parent process.",
            ),
            Attribute::single_nested(
                "capabilities",
                "The capabilities to add/drop when running containers.",
                vec![
                    Attribute::list("add", ElementType::String, "Added capabilities"),
                    Attribute::list("drop", ElementType::String, "Removed capabilities"),
                ],
            ),
            Attribute::bool(
                "privileged",
                "Run container in privileged mode. Processes in privileged containers are \
                essentially equivalent to root on the host.",
            ),
            Attribute::string(
                "proc_mount",
                "procMount denotes the type of proc mount to use for the containers.",
            ),
            Attribute::bool(
                "read_only_root_filesystem",
                "Whether this container has a read-only root filesystem.",
            ),
            Attribute::int64(
                "run_as_group",
                "The GID to run the entrypoint of the container process.",
            ),
            Attribute::bool(
                "run_as_non_root",
                "Indicates that the container must run as a non-root user.",
            ),
            Attribute::int64(
                "run_as_user",
                "The UID to run the entrypoint of the container process.",
            ),
            se_linux_options(),
            seccomp_profile(),
            windows_options(),
        ],
    )
}

pub(crate) fn resource_requirements(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::map(
                "limits",
                ElementType::String,
                "Limits describes the maximum amount of compute resources allowed.",
            ),
            Attribute::map(
                "requests",
                ElementType::String,
                "Requests describes the minimum amount of compute resources required.",
            ),
        ],
    )
}

pub(crate) fn local_object_references(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![Attribute::string("name", "Name of the referent.")],
    )
}

fn key_selector(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::string("key", "The key to select."),
            Attribute::string("name", "Name of the referent."),
            Attribute::bool("optional", "Specify whether the referent or its key must be defined"),
        ],
    )
}

fn env() -> Attribute {
    Attribute::list_nested(
        "env",
        "List of environment variables to set in the container.",
        vec![
            Attribute::string(
                "name",
                "Name of the environment variable. Must be a C_IDENTIFIER.",
            ),
            Attribute::string(
                "value",
                "Variable references $(VAR_NAME) are expanded using the previously defined \
                environment variables in the container and any service environment variables.",
            ),
            Attribute::single_nested(
                "value_from",
                "Source for the environment variable's value. Cannot be used if value is not \
                empty.",
                vec![
                    key_selector("config_map_key_ref", "Selects a key of a ConfigMap."),
                    Attribute::single_nested(
                        "field_ref",
                        "Selects a field of the pod.",
                        vec![
                            Attribute::string(
                                "api_version",
                                "Version of the schema the FieldPath is written in terms of, \
                                defaults to 'v1'.",
                            ),
                            Attribute::string(
                                "field_path",
                                "Path of the field to select in the specified API version.",
                            ),
                        ],
                    ),
                    Attribute::single_nested(
                        "resource_field_ref",
                        "Selects a resource of the container: only resources limits and requests \
                        are currently supported.",
                        vec![
                            Attribute::string(
                                "container_name",
                                "Container name: required for volumes, optional for env vars",
                            ),
                            Attribute::string(
                                "divisor",
                                "Specifies the output format of the exposed resources, defaults \
                                to '1'",
                            ),
                            Attribute::string("resource", "Required: resource to select"),
                        ],
                    ),
                    key_selector("secret_key_ref", "Selects a key of a secret in the pod's namespace"),
                ],
            ),
        ],
    )
}

fn env_source_reference(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::string("name", "Name of the referent."),
            Attribute::bool("optional", "Specify whether the referent must be defined"),
        ],
    )
}

fn env_from() -> Attribute {
    Attribute::list_nested(
        "env_from",
        "List of sources to populate environment variables in the container.",
        vec![
            env_source_reference("config_map_ref", "The ConfigMap to select from"),
            Attribute::string(
                "prefix",
                "An optional identifier to prepend to each key in the ConfigMap. Must be a \
                C_IDENTIFIER.",
            ),
            env_source_reference("secret_ref", "The Secret to select from"),
        ],
    )
}

fn exec_action() -> Attribute {
    Attribute::single_nested(
        "exec",
        "Exec specifies the action to take.",
        vec![Attribute::list(
            "command",
            ElementType::String,
            "Command is the command line to execute inside the container, the working directory \
            for the command is root ('/') in the container's filesystem.",
        )],
    )
}

fn http_get_action() -> Attribute {
    Attribute::single_nested(
        "http_get",
        "HTTPGet specifies the http request to perform.",
        vec![
            Attribute::string(
                "host",
                "Host name to connect to, defaults to the pod IP. You probably want to set 'Host' \
                in httpHeaders instead.",
            ),
            Attribute::list_nested(
                "http_headers",
                "Custom headers to set in the request. HTTP allows repeated headers.",
                vec![
                    Attribute::string("name", "The header field name"),
                    Attribute::string("value", "The header field value"),
                ],
            ),
            Attribute::string("path", "Path to access on the HTTP server."),
            Attribute::string(
                "port",
                "Name or number of the port to access on the container. Number must be in the \
                range 1 to 65535.",
            ),
            Attribute::string(
                "scheme",
                "Scheme to use for connecting to the host. Defaults to HTTP.",
            ),
        ],
    )
}

fn tcp_socket_action() -> Attribute {
    Attribute::single_nested(
        "tcp_socket",
        "TCPSocket specifies an action involving a TCP port.",
        vec![
            Attribute::string("host", "Optional: Host name to connect to, defaults to the pod IP."),
            Attribute::string(
                "port",
                "Number or name of the port to access on the container. Number must be in the \
                range 1 to 65535.",
            ),
        ],
    )
}

fn lifecycle_handler(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![exec_action(), http_get_action(), tcp_socket_action()],
    )
}

fn probe(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            exec_action(),
            Attribute::int64(
                "failure_threshold",
                "Minimum consecutive failures for the probe to be considered failed after having \
                succeeded. Defaults to 3.",
            ),
            Attribute::single_nested(
                "grpc",
                "GRPC specifies an action involving a GRPC port.",
                vec![
                    Attribute::int64(
                        "port",
                        "Port number of the gRPC service. Number must be in the range 1 to 65535.",
                    ),
                    Attribute::string(
                        "service",
                        "Service is the name of the service to place in the gRPC HealthCheckRequest.",
                    ),
                ],
            ),
            http_get_action(),
            Attribute::int64(
                "initial_delay_seconds",
                "Number of seconds after the container has started before liveness probes are \
                initiated.",
            ),
            Attribute::int64(
                "period_seconds",
                "How often (in seconds) to perform the probe. Default to 10 seconds.",
            ),
            Attribute::int64(
                "success_threshold",
                "Minimum consecutive successes for the probe to be considered successful after \
                having failed. Defaults to 1.",
            ),
            tcp_socket_action(),
            Attribute::int64(
                "termination_grace_period_seconds",
                "Optional duration in seconds the pod needs to terminate gracefully upon probe \
                failure.",
            ),
            Attribute::int64(
                "timeout_seconds",
                "Number of seconds after which the probe times out. Defaults to 1 second.",
            ),
        ],
    )
}

/// A list of `v1.Container`, as used for sidecars and init containers.
pub(crate) fn containers(name: &str, description: &str) -> Attribute {
    Attribute::list_nested(
        name,
        description,
        vec![
            Attribute::list(
                "args",
                ElementType::String,
                "Arguments to the entrypoint. The container image's CMD is used if this is not \
                provided.",
            ),
            Attribute::list(
                "command",
                ElementType::String,
                "Entrypoint array. Not executed within a shell. The container image's ENTRYPOINT \
                is used if this is not provided.",
            ),
            env(),
            env_from(),
            Attribute::string("image", "Container image name."),
            Attribute::string(
                "image_pull_policy",
                "Image pull policy. One of Always, Never, IfNotPresent.",
            ),
            Attribute::single_nested(
                "lifecycle",
                "Actions that the management system should take in response to container \
                lifecycle events.",
                vec![
                    lifecycle_handler(
                        "post_start",
                        "PostStart is called immediately after a container is created.",
                    ),
                    lifecycle_handler(
                        "pre_stop",
                        "PreStop is called immediately before a container is terminated due to an \
                        API request or management event.",
                    ),
                ],
            ),
            probe(
                "liveness_probe",
                "Periodic probe of container liveness. Container will be restarted if the probe \
                fails.",
            ),
            Attribute::string(
                "name",
                "Name of the container specified as a DNS_LABEL. Each container in a pod must have \
                a unique name.",
            ),
            Attribute::list_nested(
                "ports",
                "List of ports to expose from the container.",
                vec![
                    Attribute::int64(
                        "container_port",
                        "Number of port to expose on the pod's IP address.",
                    ),
                    Attribute::string("host_ip", "What host IP to bind the external port to.")
                        .json_name("hostIP"),
                    Attribute::int64("host_port", "Number of port to expose on the host."),
                    Attribute::string(
                        "name",
                        "If specified, this must be an IANA_SVC_NAME and unique within the pod.",
                    ),
                    Attribute::string(
                        "protocol",
                        "Protocol for port. Must be UDP, TCP, or SCTP. Defaults to 'TCP'.",
                    ),
                ],
            ),
            probe(
                "readiness_probe",
                "Periodic probe of container service readiness. Container will be removed from \
                service endpoints if the probe fails.",
            ),
            resource_requirements(
                "resources",
                "Compute Resources required by this container.",
            ),
            security_context(
                "security_context",
                "SecurityContext defines the security options the container should be run with.",
            ),
            probe(
                "startup_probe",
                "StartupProbe indicates that the Pod has successfully initialized.",
            ),
            Attribute::bool(
                "stdin",
                "Whether this container should allocate a buffer for stdin in the container runtime.",
            ),
            Attribute::bool(
                "stdin_once",
                "Whether the container runtime should close the stdin channel after it has been \
                opened by a single attach.",
            ),
            Attribute::string(
                "termination_message_path",
                "Path at which the file to which the container's termination message will be \
                written is mounted into the container's filesystem.",
            ),
            Attribute::string(
                "termination_message_policy",
                "Indicate how the termination message should be populated. File or \
                FallbackToLogsOnError.",
            ),
            Attribute::bool(
                "tty",
                "Whether this container should allocate a TTY for itself.",
            ),
            Attribute::list_nested(
                "volume_devices",
                "volumeDevices is the list of block devices to be used by the container.",
                vec![
                    Attribute::string(
                        "device_path",
                        "devicePath is the path inside of the container that the device will be \
                        mapped to.",
                    ),
                    Attribute::string(
                        "name",
                        "name must match the name of a persistentVolumeClaim in the pod",
                    ),
                ],
            ),
            Attribute::list_nested(
                "volume_mounts",
                "Pod volumes to mount into the container's filesystem.",
                vec![
                    Attribute::string(
                        "mount_path",
                        "Path within the container at which the volume should be mounted. Must \
                        not contain ':'.",
                    ),
                    Attribute::string(
                        "mount_propagation",
                        "mountPropagation determines how mounts are propagated from the host to \
                        container and the other way around.",
                    ),
                    Attribute::string("name", "This must match the Name of a Volume."),
                    Attribute::bool(
                        "read_only",
                        "Mounted read-only if true, read-write otherwise (false or unspecified).",
                    ),
                    Attribute::string(
                        "sub_path",
                        "Path within the volume from which the container's volume should be \
                        mounted. Defaults to '' (volume's root).",
                    ),
                    Attribute::string(
                        "sub_path_expr",
                        "Expanded path within the volume from which the container's volume \
                        should be mounted.",
                    ),
                ],
            ),
            Attribute::string(
                "working_dir",
                "Container's working directory. If not specified, the container runtime's default \
                will be used.",
            ),
        ],
    )
}

fn key_to_paths() -> Attribute {
    Attribute::list_nested(
        "items",
        "If unspecified, each key-value pair in the Data field of the referenced object will be \
        projected into the volume as a file whose name is the key and content is the value.",
        vec![
            Attribute::string("key", "key is the key to project."),
            Attribute::int64(
                "mode",
                "mode is Optional: mode bits used to set permissions on this file.",
            ),
            Attribute::string(
                "path",
                "path is the relative path of the file to map the key to. May not be an absolute \
                path.",
            ),
        ],
    )
}

pub(crate) fn config_map_volume_source(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::int64(
                "default_mode",
                "defaultMode is optional: mode bits used to set permissions on created files by \
                default. Defaults to 0644.",
            ),
            key_to_paths(),
            Attribute::string("name", "Name of the referent."),
            Attribute::bool(
                "optional",
                "optional specify whether the ConfigMap or its keys must be defined",
            ),
        ],
    )
}

pub(crate) fn secret_volume_source(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::int64(
                "default_mode",
                "defaultMode is Optional: mode bits used to set permissions on created files by \
                default. Defaults to 0644.",
            ),
            key_to_paths(),
            Attribute::bool(
                "optional",
                "optional field specify whether the Secret or its keys must be defined",
            ),
            Attribute::string(
                "secret_name",
                "secretName is the name of the secret in the pod's namespace to use.",
            ),
        ],
    )
}

pub(crate) fn empty_dir_volume_source(name: &str, description: &str) -> Attribute {
    Attribute::single_nested(
        name,
        description,
        vec![
            Attribute::string(
                "medium",
                "medium represents what type of storage medium should back this directory. The \
                default is '' which means to use the node's default medium.",
            ),
            Attribute::string(
                "size_limit",
                "sizeLimit is the total amount of local storage required for this EmptyDir volume.",
            ),
        ],
    )
}
