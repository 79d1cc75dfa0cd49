use std::fmt::Display;

use serde_json::{json, Value};

use crate::error::{Error, Result};

/// Identifies the one immutable ledger every page of a run is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerSelector {
    Index(u32),
    Hash(String),
}

impl LedgerSelector {
    /// Exactly one of index or hash must be given.
    pub fn from_args(index: Option<u32>, hash: Option<String>) -> Result<Self> {
        match (index, hash) {
            (Some(index), None) => Ok(LedgerSelector::Index(index)),
            (None, Some(hash)) => Ok(LedgerSelector::Hash(hash)),
            _ => Err(Error::AmbiguousSelector),
        }
    }

    /// The ledger_data parameters that pick this ledger.
    pub fn to_params(&self) -> serde_json::Map<String, Value> {
        let mut params = serde_json::Map::new();
        match self {
            LedgerSelector::Index(index) => params.insert("ledger_index".to_string(), json!(index)),
            LedgerSelector::Hash(hash) => params.insert("ledger_hash".to_string(), json!(hash)),
        };
        params
    }
}

impl Display for LedgerSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerSelector::Index(index) => write!(f, "{index}"),
            LedgerSelector::Hash(hash) => write!(f, "{hash}"),
        }
    }
}
