mod dynamic_client;
mod error;
mod http_status_code;

pub use dynamic_client::{DynamicClient, KubeDynamicClient};
pub use error::{Error, Result};
pub use http_status_code::{HttpStatusCode, StatusCode};
