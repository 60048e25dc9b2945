use serde::Serialize;
use serde_json::Value;

/// A fault reported by the backend after it understood the request.
///
/// The payload is whatever the backend serialized for its error (usually a
/// plain string such as `"Invalid Roblosecurity"`) and is never inspected here.
#[derive(Clone, Debug, PartialEq)]
pub struct Fault(pub Value);

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(message) => f.write_str(message),
            other => write!(f, "{other}"),
        }
    }
}

/// All errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Fault(Fault),

    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl BridgeError {
    pub fn fault(payload: impl Into<Value>) -> Self {
        Self::Fault(Fault(payload.into()))
    }

    /// The backend fault payload, if this error came from the backend.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

// Errors travel back to the UI layer as strings, same as backend faults do.
impl Serialize for BridgeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
