use thiserror::Error;

/// Caller-correctable configuration failures, checked before any request
/// goes out. Never logged by this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key field is undefined")]
    MissingApiKey,
    #[error("Address field is undefined")]
    MissingAddress,
}

/// Failures while issuing or reading the search exchange.
#[derive(Debug, Error)]
pub enum GetError {
    #[error("the search URL could not be built: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("the endpoint URL cannot be a base")]
    EndpointNotABase,
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the request failed with status code: {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
}
