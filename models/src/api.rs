use serde::{Deserialize, Serialize};
use std::fmt;

pub mod players;

/// Envelope wrapped around every response of the players API.
///
/// `success` is missing on some deployments, so it defaults to `true` and a
/// present `error` object counts as a failure on its own.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, ApiErrorBody> {
        match (self.success, self.error) {
            (_, Some(error)) => Err(error),
            (false, None) => Err(ApiErrorBody {
                name: None,
                message: String::from("request was not successful"),
            }),
            (true, None) => Ok(self.data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
