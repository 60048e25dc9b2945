//! Typed client for the rsblox companion backend.
//!
//! The backend is a separate process reached through an invoke bridge. Every
//! backend command has a typed method on [`RobloxApi`] or [`TrayApi`]; build a
//! [`Client`] once and hand it to whatever needs to talk to the backend.

pub mod api;
pub mod batch;
mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod util;

pub use api::{RobloxApi, TrayApi};
pub use client::Client;
pub use config::{load_config, BridgeConfig};
pub use error::{BridgeError, Fault, Result};
pub use transport::{HttpTransport, Invoke, MockTransport};
