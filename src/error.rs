//! Error types returned by the Crelate client.

/// Errors that can occur while talking to the Crelate API.
#[derive(Debug)]
pub enum CrelateError {
    /// No API key is configured on the connection.
    ConnectionNotEstablished,
    /// The request never produced an HTTP response.
    Transport(String),
    /// The response body was not the JSON we expected.
    Parse {
        context: &'static str,
        source: serde_json::Error,
    },
    /// A request payload could not be encoded as JSON.
    Serialize(serde_json::Error),
    /// A contact's tag bucket was neither a list nor null.
    MalformedTags { category: String },
    /// The API answered with a non-success status.
    Api { status: u16, body: String },
    /// A successful response had no `Data` field.
    MissingData,
}

impl CrelateError {
    /// Status code of an API-reported error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CrelateError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for CrelateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrelateError::ConnectionNotEstablished => {
                write!(f, "Crelate connection not established: no API key configured")
            }
            CrelateError::Transport(message) => write!(f, "request failed: {}", message),
            CrelateError::Parse { context, source } => write!(f, "failed to parse {}: {}", context, source),
            CrelateError::Serialize(source) => write!(f, "failed to serialize request body: {}", source),
            CrelateError::MalformedTags { category } => {
                write!(f, "tag category {} is not a list of tags", category)
            }
            CrelateError::Api { status, body } => write!(f, "API returned status {}: {}", status, body),
            CrelateError::MissingData => write!(f, "response did not contain a Data field"),
        }
    }
}

impl std::error::Error for CrelateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrelateError::Parse { source, .. } | CrelateError::Serialize(source) => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CrelateError {
    fn from(e: reqwest::Error) -> Self {
        CrelateError::Transport(e.to_string())
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, CrelateError>;
