use futures::{stream, Stream};
use tracing::debug;

use crate::error::Result;

use super::{LedgerDataPage, LedgerSelector, Marker, RippledNode};

enum Cursor {
    Start,
    Next(Marker),
    Done,
}

async fn next_page<N: RippledNode>(
    node: &N,
    selector: &LedgerSelector,
    cursor: Cursor,
) -> Result<Option<(LedgerDataPage, Cursor)>> {
    let marker = match cursor {
        Cursor::Done => return Ok(None),
        Cursor::Start => None,
        Cursor::Next(marker) => Some(marker),
    };

    let page = node.ledger_data(selector, marker).await?;

    debug!(
        ledger = %selector,
        state_objects = page.state.len(),
        has_marker = page.marker.is_some(),
        "got ledger_data page"
    );

    // The last page has no marker, but its state objects count all the same.
    let next = match page.marker {
        Some(ref marker) => Cursor::Next(marker.clone()),
        None => Cursor::Done,
    };

    Ok(Some((page, next)))
}

/// Streams every ledger_data page of the selected ledger, one request at a time. A request is only
/// sent when the consumer asks for the next page, so a consumer that stops early sends no more
/// requests. Calling this again starts over from the first page.
pub fn pages<'a, N: RippledNode>(
    node: &'a N,
    selector: &'a LedgerSelector,
) -> impl Stream<Item = Result<LedgerDataPage>> + 'a {
    stream::try_unfold(Cursor::Start, move |cursor| {
        next_page(node, selector, cursor)
    })
}
