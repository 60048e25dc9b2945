//! Typed facades over the invoke bridge, one per backend plugin.

use crate::commands::{qualified_name, to_args, Command};
use crate::error::Result;
use crate::transport::Invoke;

mod roblox;
mod tray;

pub use roblox::RobloxApi;
pub use tray::TrayApi;

/// Sends `command` and decodes the response into its declared output.
///
/// Errors from the transport are returned untouched.
pub(crate) async fn call<C: Command>(transport: &dyn Invoke, command: C) -> Result<C::Output> {
    let name = qualified_name::<C>();
    let args = to_args(&command)?;
    tracing::debug!("Invoking {name}");

    let payload = transport.invoke(&name, args).await.map_err(|e| {
        tracing::warn!("{name} failed: {e}");
        e
    })?;
    Ok(serde_json::from_value(payload)?)
}
