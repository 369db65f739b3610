use snafu::Snafu;
use std::path::PathBuf;

/// The `Result` type returned by `clients`.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by `clients`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by `clients`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub(crate) enum InnerError {
    #[snafu(display("Error initializing the Kubernetes client: {}", source))]
    Initialization { source: kube::Error },

    #[snafu(display("Unable to read kubeconfig '{}': {}", path.display(), source))]
    ConfigRead {
        path: PathBuf,
        source: kube::config::KubeconfigError,
    },

    #[snafu(display("Unable to load kubeconfig context '{}': {}", context, source))]
    ConfigContext {
        context: String,
        source: kube::config::KubeconfigError,
    },
}
