mod node;
mod pages;
mod selector;
#[cfg(test)]
pub mod test_utils;

pub use node::decode_ledger_data;
pub use node::make_ledger_data_request;
pub use node::LedgerDataPage;
pub use node::LedgerHeader;
pub use node::Marker;
pub use node::MockRippledNode;
pub use node::RippledNode;
pub use node::RippledNodeHttp;
pub use node::StateObject;

pub use pages::pages;

pub use selector::LedgerSelector;
