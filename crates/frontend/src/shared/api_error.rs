use contracts::shared::OperationResult;
use thiserror::Error;

/// Failures of a single REST call.
///
/// Never leaves the REST layer: [`RestClient`](super::api_client::RestClient)
/// converts every variant into a failed [`OperationResult`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl<T> From<ApiError> for OperationResult<T> {
    fn from(err: ApiError) -> Self {
        OperationResult::fail(err.to_string())
    }
}
