//! Error types for the homework review API client

use compact_str::CompactString;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK. The body is not
    /// decoded in this case.
    #[error("unexpected HTTP status {status} from homework API")]
    UnexpectedStatus { status: u16 },

    /// A 200 response carried a body that is not valid JSON.
    #[error("{path}: {message}")]
    JsonParse {
        path: CompactString,
        message: CompactString,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {field}: {message}")]
    ConfigValidation {
        field: CompactString,
        message: CompactString,
    },
}

impl ClientError {
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    pub fn json_parse(
        path: impl Into<CompactString>,
        message: impl Into<CompactString>,
        source: serde_json::Error,
    ) -> Self {
        Self::JsonParse {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    pub fn config_validation(
        field: impl Into<CompactString>,
        message: impl Into<CompactString>,
    ) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}
