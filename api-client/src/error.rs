use models::api::ApiErrorBody;

/// Everything that can go wrong talking to the players API.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Non-success status whose body was not an API envelope.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The API answered with `success: false` or an `error` object.
    #[error("request to {url} was rejected: {error}")]
    Rejected { url: String, error: ApiErrorBody },

    #[error("response from {url} carried no data")]
    MissingData { url: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
