use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

/// Where to find the rippled node and how long to wait on it.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub url: Url,
    /// Deadline for a single ledger_data call. None leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl NodeConfig {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = parse_node_url(url)?;
        Ok(Self { url, timeout })
    }
}

pub fn parse_node_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|error| Error::InvalidUrl {
        url: url.to_string(),
        reason: error.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::UnsupportedScheme(scheme.to_string())),
    }
}
