use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::Invoke;
use crate::error::{BridgeError, Result};

/// Produces the response for one recorded call.
pub type Responder = Arc<dyn Fn(String, Value) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// In-process stand-in for the invoke bridge.
///
/// Every call is recorded in dispatch order before the responder runs, so
/// tests can inspect what was sent independently of when responses arrive.
#[derive(Clone)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    responder: Responder,
}

impl MockTransport {
    pub fn new<F, Fut>(responder: F) -> Self
    where
        F: Fn(String, Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(move |command, args| responder(command, args).boxed()),
        }
    }

    /// Answers every call with the same value.
    pub fn returning(value: Value) -> Self {
        Self::new(move |_, _| {
            let value = value.clone();
            async move { Ok::<Value, BridgeError>(value) }
        })
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Invoke for MockTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((command.to_string(), args.clone()));
        (self.responder)(command.to_string(), args).await
    }
}
