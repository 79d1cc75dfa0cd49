//! Talks to a rippled node over JSON-RPC. The only method we need is ledger_data, which returns
//! the state of one ledger a page at a time.
use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::trace;

use crate::{
    config::NodeConfig,
    error::{Error, Result},
    performance::TimedExt,
};

use super::LedgerSelector;

/// One ledger entry, e.g. an AccountRoot. Kept as the node sent it.
pub type StateObject = serde_json::Map<String, Value>;

/// Ledger metadata, index, close time, hashes.
pub type LedgerHeader = serde_json::Map<String, Value>;

/// Opaque continuation token. We hand it back exactly as received.
pub type Marker = Value;

/// One ledger_data response.
#[derive(Debug, Deserialize, PartialEq)]
pub struct LedgerDataPage {
    pub state: Vec<StateObject>,
    pub marker: Option<Marker>,
    /// Only present when the request asks for it, which rippled does on the first page.
    pub ledger: Option<LedgerHeader>,
    pub validated: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct LedgerDataEnvelope {
    result: Value,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    error: String,
    error_message: Option<String>,
}

pub fn make_ledger_data_request(selector: &LedgerSelector, marker: Option<&Marker>) -> Value {
    let mut params = selector.to_params();
    if let Some(marker) = marker {
        params.insert("marker".to_string(), marker.clone());
    }

    json!({
        "method": "ledger_data",
        "params": [params]
    })
}

/// rippled answers failed requests with status 200 and an error inside `result`.
pub fn decode_ledger_data(body: &[u8]) -> Result<LedgerDataPage> {
    let envelope = serde_json::from_slice::<LedgerDataEnvelope>(body)?;

    if envelope.result.get("status").and_then(Value::as_str) == Some("error") {
        let rpc_error = serde_json::from_value::<RpcError>(envelope.result)?;
        return Err(Error::Rpc {
            message: rpc_error
                .error_message
                .unwrap_or_else(|| rpc_error.error.clone()),
            code: rpc_error.error,
        });
    }

    let page = serde_json::from_value::<LedgerDataPage>(envelope.result)?;
    Ok(page)
}

#[automock]
#[async_trait]
pub trait RippledNode {
    async fn ledger_data(
        &self,
        selector: &LedgerSelector,
        marker: Option<Marker>,
    ) -> Result<LedgerDataPage>;
}

#[derive(Clone, Debug)]
pub struct RippledNodeHttp {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl RippledNodeHttp {
    /// The client is built once and kept for the whole run, so every page goes over the same
    /// pooled connection.
    pub fn new(config: &NodeConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl RippledNode for RippledNodeHttp {
    async fn ledger_data(
        &self,
        selector: &LedgerSelector,
        marker: Option<Marker>,
    ) -> Result<LedgerDataPage> {
        let request = make_ledger_data_request(selector, marker.as_ref());
        trace!(%request, "sending ledger_data request");

        let body = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .timed("ledger_data")
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        decode_ledger_data(&body)
    }
}
