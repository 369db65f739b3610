/*!

This library exposes Kubernetes custom resources as Terraform-style data sources. It provides the
attribute schema types, diagnostics, the provider and its data sources, and the dynamic client used
to read custom resources from a cluster.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use clients::{DynamicClient, HttpStatusCode, KubeDynamicClient};
pub use data_source::{
    ConfigureRequest, ConfigureResponse, DataSource, ProviderData, ReadRequest, ReadResponse,
};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use provider::{Provider, ProviderConfig, ProviderSchemas};
pub use schema::{Attribute, AttributeKind, ElementType, Mode, Schema};
pub use validators::StringValidator;

pub mod asdb_aerospike_com_v1beta1;
pub mod clients;
pub mod constants;
mod data_source;
mod diag;
mod k8s_schema;
pub mod provider;
pub mod schema;
mod validators;
