//! The invoke primitive the facades are built on.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, Responder};

/// Sends one named command with its parameter bag across the process boundary.
///
/// `command` is fully qualified (`plugin:<group>|<name>`). Implementations must
/// report failures through the returned `Result` and never panic on bad input.
/// Backend-reported errors come back as [`crate::error::BridgeError::Fault`].
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value>;
}
