/*!

A mock [`DynamicClient`] that answers every GET with a canned response, so data sources can be
tested without Kubernetes.

!*/

use kube::api::{ApiResource, DynamicObject};
use kube::error::ErrorResponse;
use model::DynamicClient;
use serde_json::{json, Value};
use std::sync::Mutex;

/// A GET as received by the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub namespace: String,
    pub name: String,
}

pub enum Response {
    Object(Value),
    Status(u16, &'static str),
}

pub struct MockDynamicClient {
    response: Response,
    requests: Mutex<Vec<Request>>,
}

impl MockDynamicClient {
    pub fn object(object: Value) -> Self {
        Self::new(Response::Object(object))
    }

    pub fn status(code: u16, reason: &'static str) -> Self {
        Self::new(Response::Status(code, reason))
    }

    fn new(response: Response) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DynamicClient for MockDynamicClient {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> kube::Result<DynamicObject> {
        self.requests.lock().unwrap().push(Request {
            path: format!(
                "/apis/{}/namespaces/{}/{}/{}",
                resource.api_version, namespace, resource.plural, name
            ),
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        match &self.response {
            Response::Object(object) => {
                serde_json::from_value(object.clone()).map_err(kube::Error::SerdeError)
            }
            Response::Status(code, reason) => Err(kube::Error::Api(ErrorResponse {
                status: "Failure".to_string(),
                message: format!("aerospikeclusters.asdb.aerospike.com \"test\" {}", reason),
                reason: reason.to_string(),
                code: *code,
            })),
        }
    }
}

/// An `AerospikeCluster` as the API server would return it, with two racks.
pub fn aerospike_cluster(name: &str, namespace: &str) -> Value {
    json!({
        "apiVersion": "asdb.aerospike.com/v1beta1",
        "kind": "AerospikeCluster",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": {"app": "aerospike"},
            "annotations": {"owner": "platform"},
            "resourceVersion": "4711",
            "uid": "3c6a5c8a-1d2f-4f0b-9a7e-0a4c2a1b7d11"
        },
        "spec": {
            "size": 3,
            "image": "aerospike/aerospike-server-enterprise:7.0.0.0",
            "maxUnavailable": 1,
            "aerospikeConfig": {
                "service": {"feature-key-file": "/etc/aerospike/secret/features.conf"},
                "namespaces": [{"name": "test", "replication-factor": 2}]
            },
            "aerospikeNetworkPolicy": {
                "access": "hostInternal",
                "customTLSAccessNetworkNames": ["aerospike/tls-net"]
            },
            "podSpec": {
                "multiPodPerHost": true,
                "sidecars": [{
                    "name": "exporter",
                    "image": "aerospike/aerospike-prometheus-exporter:1.9.0",
                    "ports": [{"containerPort": 9145, "hostIP": "0.0.0.0"}]
                }]
            },
            "rackConfig": {
                "namespaces": ["test"],
                "racks": [
                    {
                        "id": 1,
                        "zone": "us-west-2a",
                        "storage": {
                            "volumes": [{
                                "name": "workdir",
                                "aerospike": {"path": "/opt/aerospike"},
                                "source": {
                                    "persistentVolume": {
                                        "size": "1Gi",
                                        "storageClass": "ssd",
                                        "volumeMode": "Filesystem"
                                    }
                                }
                            }]
                        }
                    },
                    {"id": 2, "zone": "us-west-2b"}
                ]
            },
            "storage": {
                "cleanupThreads": 1,
                "volumes": [{
                    "name": "aerospike-config-secret",
                    "aerospike": {"path": "/etc/aerospike/secret"},
                    "source": {"secret": {"secretName": "aerospike-secret"}}
                }]
            }
        },
        "status": {"size": 3}
    })
}
