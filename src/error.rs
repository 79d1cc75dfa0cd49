use thiserror::Error;

use crate::units::DropsNewtype;

/// The class an error belongs to, which decides how a tool reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input, found before any network activity.
    Configuration,
    /// The node could not be reached, or answered with a non-success HTTP status.
    Transport,
    /// The node answered, but not with what ledger_data promises.
    Protocol,
    /// The node does not attest the ledger as validated.
    Consistency,
    /// The result is too small to be believable.
    ImplausibleResult,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid rippled URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("rippled URL must be of type http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("either of ledger sequence or hash must be specified, but not both")]
    AmbiguousSelector,
    #[error("failed to talk to rippled node: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed ledger_data response: {0}")]
    MalformedResponse(String),
    #[error("rippled returned error {code}: {message}")]
    Rpc { code: String, message: String },
    #[error("first ledger_data page carries no ledger header")]
    MissingLedgerHeader,
    #[error("ledger_data returned no pages")]
    EmptyLedger,
    #[error("invalid AccountRoot balance {0}")]
    InvalidBalance(String),
    #[error("ledger is not validated")]
    NotValidated,
    #[error("total XRP is less than 1, got {0} drops")]
    ImplausibleTotal(DropsNewtype),
    #[error("sum of balances overflowed")]
    BalanceOverflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl { .. } | Error::UnsupportedScheme(_) | Error::AmbiguousSelector => {
                ErrorKind::Configuration
            }
            Error::Transport(_) => ErrorKind::Transport,
            Error::MalformedResponse(_)
            | Error::Rpc { .. }
            | Error::MissingLedgerHeader
            | Error::EmptyLedger
            | Error::InvalidBalance(_)
            | Error::BalanceOverflow => ErrorKind::Protocol,
            Error::NotValidated => ErrorKind::Consistency,
            Error::ImplausibleTotal(_) => ErrorKind::ImplausibleResult,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedResponse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
