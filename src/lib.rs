pub mod config;
mod env;
pub mod error;
mod json_codecs;
pub mod log;
mod performance;
pub mod rippled;
pub mod snapshot;
pub mod supply;
pub mod units;

pub use error::{Error, ErrorKind, Result};
pub use snapshot::fetch_snapshot;
pub use supply::fetch_circulating_supply;
