pub use http::StatusCode;

/// The HTTP status the API server answered a failed request with.
pub trait HttpStatusCode {
    /// `None` when the request failed before the API server answered.
    fn status_code(&self) -> Option<StatusCode>;

    fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}

impl HttpStatusCode for kube::Error {
    fn status_code(&self) -> Option<StatusCode> {
        match self {
            kube::Error::Api(response) => StatusCode::from_u16(response.code).ok(),
            _ => None,
        }
    }
}
