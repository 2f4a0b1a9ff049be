use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_api_client::Error as ApiError;

/// Classification every failure is reduced to before it reaches list state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NetworkConnection,
    Timeout,
    Server,
    Parsing,
    Unknown,
}

impl ErrorKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NetworkConnection => {
                "Network connection failed, please check your network settings"
            }
            Self::Timeout => "Request timed out, please try again later",
            Self::Server => "Server error, please try again later",
            Self::Parsing => "Failed to parse data",
            Self::Unknown => "Unknown error occurred",
        }
    }
}

#[derive(Error, Debug)]
pub enum OrdersApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("({status}) {detail}")]
    Status { status: u16, detail: String },

    /// The request never produced an HTTP answer
    #[error("Request failed: {0}")]
    Transport(String),

    /// Raised by simulated sources in place of a real transport failure
    #[error("{}", .0.default_message())]
    Simulated(ErrorKind),
}

impl OrdersApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout => ErrorKind::Timeout,
            Self::Status { status, .. } if *status >= 500 => ErrorKind::Server,
            Self::Status { .. } => ErrorKind::Unknown,
            Self::Transport(_) => ErrorKind::NetworkConnection,
            Self::Simulated(kind) => *kind,
        }
    }

    /// HTTP status code, when the server answered at all
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for OrdersApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                OrdersApiError::Status {
                    status: status.as_u16(),
                    detail: error_detail(detail),
                }
            }
            e => OrdersApiError::Transport(e.to_string()),
        }
    }
}

/// Body of an error answer from the orders service
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    error: String,
}

// Falls back to the raw body when the service did not send its error shape
fn error_detail(body: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(response) => response.error,
        Err(_) => body,
    }
}
