//! Closed registry of backend commands.
//!
//! Every remote capability is a struct implementing [`Command`]: its fields are
//! the exact named parameters the backend expects, and its associated `Output`
//! is the decoded response. Wiring up a new backend command means adding a
//! struct here and a facade method in [`crate::api`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

mod friends;
mod games;
mod session;
mod thumbnails;
mod tray;
mod users;

pub use friends::*;
pub use games::*;
pub use session::*;
pub use thumbnails::*;
pub use tray::*;
pub use users::*;

/// Backend capability groups reachable through the invoke bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plugin {
    RobloxApi,
    TrayApi,
}

impl Plugin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RobloxApi => "roblox-api",
            Self::TrayApi => "tray-api",
        }
    }
}

pub trait Command: Serialize {
    const PLUGIN: Plugin;
    const NAME: &'static str;
    type Output: DeserializeOwned;
}

/// Full invoke name, e.g. `plugin:roblox-api|get_me`.
pub fn qualified_name<C: Command>() -> String {
    format!("plugin:{}|{}", C::PLUGIN.as_str(), C::NAME)
}

/// Parameter bag for a command. Unit commands become `{}`.
pub fn to_args<C: Command>(command: &C) -> Result<Value> {
    match serde_json::to_value(command)? {
        Value::Null => Ok(Value::Object(Map::new())),
        args => Ok(args),
    }
}
