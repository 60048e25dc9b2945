//! Data shapes exchanged with the backend.
//!
//! Field names follow the backend's own snake_case serialization. Nothing in
//! here is cached or mutated by the client; values are decoded from a response
//! and handed to the caller as-is.

mod discovery;
mod games;
mod presence;
mod search;
mod thumbnails;
mod tray;
mod users;

pub use discovery::*;
pub use games::*;
pub use presence::*;
pub use search::*;
pub use thumbnails::*;
pub use tray::*;
pub use users::*;
