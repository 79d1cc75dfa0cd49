//! Sums the balances of every account in a ledger to get the amount of XRP in circulation.
use futures::{future, Stream, TryStreamExt};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Error, Result},
    rippled::{self, LedgerDataPage, LedgerSelector, RippledNode, StateObject},
    units::{DropsNewtype, DROPS_PER_XRP},
};

const ACCOUNT_ROOT: &str = "AccountRoot";

const LINE_WIDTH: usize = 70;

fn is_account_root(object: &&StateObject) -> bool {
    object.get("LedgerEntryType").and_then(Value::as_str) == Some(ACCOUNT_ROOT)
}

fn account_root_balance(object: &StateObject) -> Result<DropsNewtype> {
    match object.get("Balance") {
        Some(Value::String(balance)) => balance
            .parse::<DropsNewtype>()
            .map_err(|_| Error::InvalidBalance(balance.clone())),
        Some(other) => Err(Error::InvalidBalance(other.to_string())),
        None => Err(Error::InvalidBalance("missing".to_string())),
    }
}

#[derive(Debug, Default)]
pub struct SupplyAccumulator {
    total: DropsNewtype,
}

impl SupplyAccumulator {
    /// Every page must be attested as validated, a single page that is not fails the whole sum.
    pub fn push_page(self, page: &LedgerDataPage) -> Result<Self> {
        if page.validated != Some(true) {
            return Err(Error::NotValidated);
        }

        let total = page
            .state
            .iter()
            .filter(is_account_root)
            .try_fold(self.total, |total, object| {
                let balance = account_root_balance(object)?;
                total.checked_add(balance).ok_or(Error::BalanceOverflow)
            })?;

        debug!(%total, "summed page balances");

        Ok(Self { total })
    }

    pub fn finish(self, ledger: &LedgerSelector) -> Result<CirculatingSupply> {
        // Less than one XRP in a whole ledger means we read something wrong.
        if self.total < DropsNewtype(DROPS_PER_XRP) {
            return Err(Error::ImplausibleTotal(self.total));
        }

        Ok(CirculatingSupply {
            ledger: ledger.clone(),
            total: self.total,
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct CirculatingSupply {
    pub ledger: LedgerSelector,
    pub total: DropsNewtype,
}

impl CirculatingSupply {
    pub fn sentence(&self) -> String {
        format!(
            "Total circulating XRP in all accounts as of ledger {} is {}.",
            self.ledger,
            self.total.xrp_string()
        )
    }

    pub fn lines(&self) -> Vec<String> {
        wrap(&self.sentence(), LINE_WIDTH)
    }
}

/// Greedy word wrap. Words longer than a line get a line, or several, of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let line_len = line.chars().count();

        if !line.is_empty() && line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        let chars = word.chars().collect::<Vec<_>>();
        let mut chunks = chars.chunks(width.max(1)).peekable();
        while let Some(chunk) = chunks.next() {
            let chunk = chunk.iter().collect::<String>();
            if chunks.peek().is_some() {
                lines.push(chunk);
            } else {
                line = chunk;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

pub async fn reduce_supply<S>(pages: S, ledger: &LedgerSelector) -> Result<CirculatingSupply>
where
    S: Stream<Item = Result<LedgerDataPage>>,
{
    pages
        .try_fold(SupplyAccumulator::default(), |accumulator, page| {
            future::ready(accumulator.push_page(&page))
        })
        .await?
        .finish(ledger)
}

pub async fn fetch_circulating_supply<N: RippledNode>(
    node: &N,
    selector: &LedgerSelector,
) -> Result<CirculatingSupply> {
    reduce_supply(rippled::pages(node, selector), selector).await
}
