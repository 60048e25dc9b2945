use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use super::Invoke;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};

const INVOKE_KEY_HEADER: &str = "Tauri-Invoke-Key";

/// Invoke bridge reached over the webview IPC protocol: every command is a
/// `POST <endpoint>/<command>` with the parameter bag as a JSON body.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    invoke_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: Url::parse(&config.endpoint)
                .map_err(|e| BridgeError::Custom(format!("Invalid endpoint: {e}")))?,
            invoke_key: config.invoke_key.clone(),
        })
    }

    /// URL for a command. The name always lands in a single path segment.
    pub fn command_url(&self, command: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| BridgeError::Custom(format!("{} cannot be a base URL", self.endpoint)))?
            .pop_if_empty()
            .push(command);
        Ok(url)
    }
}

#[async_trait]
impl Invoke for HttpTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        let mut request = self.client.post(self.command_url(command)?).json(&args);
        if let Some(ref key) = self.invoke_key {
            request = request.header(INVOKE_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BridgeError::Transport(format!("{command}: {e}")))?;

        let status = response.status();
        let body = response.bytes().await?;
        let payload = decode_body(&body);

        if status.is_success() {
            return Ok(payload);
        }

        // A 404 means the bridge has no such command; anything else is the
        // backend refusing the call.
        if status == StatusCode::NOT_FOUND {
            return Err(BridgeError::Transport(format!("Unknown command {command}")));
        }
        Err(BridgeError::fault(payload))
    }
}

/// Empty bodies are `null`; bodies that are not JSON are kept as text.
fn decode_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
