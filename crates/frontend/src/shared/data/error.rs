/// Failure of a store operation. Pages convert these to user-facing
/// strings at the boundary; nothing here panics.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No live session while the operation requires one.
    Unauthenticated,
    /// Transport failure or non-2xx response; carries the backend message.
    Http(String),
    /// Response body did not match the expected shape.
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unauthenticated => write!(f, "You must be logged in"),
            StoreError::Http(msg) => write!(f, "{}", msg),
            StoreError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for StoreError {
    fn from(err: gloo_net::Error) -> Self {
        StoreError::Http(err.to_string())
    }
}
