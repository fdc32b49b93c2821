use reqwest::StatusCode;

/// Coarse failure category handed to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    NotFound,
    Transport,
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "Input Error",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Transport => "Transport Error",
            ErrorKind::MalformedResponse => "Malformed Response",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong while looking up weather for a place.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter a place name.")]
    EmptyPlaceName,

    #[error("No location found for \"{0}\". Make sure the place name is valid.")]
    NotFound(String),

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{service} request failed: {source}")]
    Network {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed {service} response: {reason}")]
    MalformedResponse {
        service: &'static str,
        reason: String,
    },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::EmptyPlaceName => ErrorKind::Input,
            LookupError::NotFound(_) => ErrorKind::NotFound,
            LookupError::Status { .. } | LookupError::Network { .. } => ErrorKind::Transport,
            LookupError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    pub(crate) fn malformed(service: &'static str, reason: impl Into<String>) -> Self {
        LookupError::MalformedResponse { service, reason: reason.into() }
    }
}
