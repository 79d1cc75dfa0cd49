use serde_json::{json, Value};

use super::*;

pub fn state_object(value: Value) -> StateObject {
    match value {
        Value::Object(object) => object,
        other => panic!("expected a JSON object for a state object, got {other}"),
    }
}

pub fn account_root(balance: &str) -> StateObject {
    state_object(json!({
        "LedgerEntryType": "AccountRoot",
        "Balance": balance
    }))
}

#[derive(Default)]
pub struct LedgerDataPageBuilder {
    state: Vec<StateObject>,
    marker: Option<Marker>,
    ledger: Option<LedgerHeader>,
    validated: Option<bool>,
}

impl LedgerDataPageBuilder {
    pub fn state(mut self, state: Vec<StateObject>) -> Self {
        self.state = state;
        self
    }

    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = Some(json!(marker));
        self
    }

    pub fn ledger(mut self, ledger: Value) -> Self {
        self.ledger = Some(state_object(ledger));
        self
    }

    pub fn validated(mut self, validated: bool) -> Self {
        self.validated = Some(validated);
        self
    }

    pub fn build(self) -> LedgerDataPage {
        LedgerDataPage {
            state: self.state,
            marker: self.marker,
            ledger: self.ledger,
            validated: self.validated,
        }
    }
}
