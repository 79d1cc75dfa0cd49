//! Rebuilds a complete, self-contained ledger document out of ledger_data pages: the header of the
//! first page with every state object of every page attached.
use std::io::Write;

use futures::{future, Stream, TryStreamExt};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::{Error, Result},
    json_codecs::u32_from_number_or_string,
    rippled::{self, LedgerDataPage, LedgerHeader, LedgerSelector, RippledNode, StateObject},
};

#[derive(Debug, Serialize, PartialEq)]
pub struct SnapshotDocument {
    pub ledger: LedgerHeader,
    pub ledger_current_index: u32,
    pub status: &'static str,
    pub validated: bool,
}

#[derive(Debug, Default)]
pub struct SnapshotAccumulator {
    header: Option<(LedgerHeader, u32)>,
    state: Vec<StateObject>,
}

fn take_header(page_ledger: Option<LedgerHeader>) -> Result<(LedgerHeader, u32)> {
    let mut header = page_ledger.ok_or(Error::MissingLedgerHeader)?;

    // Older rippled versions include it, newer ones don't.
    header.remove("closed");

    let ledger_index = header
        .get("ledger_index")
        .cloned()
        .ok_or_else(|| Error::MalformedResponse("ledger header without ledger_index".into()))?;
    let ledger_index = u32_from_number_or_string(ledger_index)?;

    header.insert("ledger_index".to_string(), json!(ledger_index));
    header.insert("transactions".to_string(), json!([]));

    Ok((header, ledger_index))
}

impl SnapshotAccumulator {
    pub fn push_page(mut self, page: LedgerDataPage) -> Result<Self> {
        if self.header.is_none() {
            self.header = Some(take_header(page.ledger)?);
        }

        self.state.extend(page.state);

        Ok(self)
    }

    pub fn finish(self) -> Result<SnapshotDocument> {
        let (mut ledger, ledger_current_index) = self.header.ok_or(Error::EmptyLedger)?;

        let state = self.state.into_iter().map(Value::Object).collect();
        ledger.insert("accountState".to_string(), Value::Array(state));

        Ok(SnapshotDocument {
            ledger,
            ledger_current_index,
            status: "success",
            validated: true,
        })
    }
}

pub async fn reduce_snapshot<S>(pages: S) -> Result<SnapshotDocument>
where
    S: Stream<Item = Result<LedgerDataPage>>,
{
    pages
        .try_fold(SnapshotAccumulator::default(), |accumulator, page| {
            future::ready(accumulator.push_page(page))
        })
        .await?
        .finish()
}

pub async fn fetch_snapshot<N: RippledNode>(
    node: &N,
    selector: &LedgerSelector,
) -> Result<SnapshotDocument> {
    reduce_snapshot(rippled::pages(node, selector)).await
}

/// Keys come out sorted either way, serde_json maps are ordered.
pub fn write_document<W: Write>(
    document: &SnapshotDocument,
    pretty: bool,
    mut writer: W,
) -> std::io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use futures::stream;

    use crate::rippled::test_utils::{state_object, LedgerDataPageBuilder};

    use super::*;

    fn first_page() -> LedgerDataPageBuilder {
        LedgerDataPageBuilder::default().ledger(json!({
            "ledger_index": "5",
            "closed": true,
            "ledger_hash": "ABC"
        }))
    }

    fn objects(names: &[&str]) -> Vec<StateObject> {
        names
            .iter()
            .map(|name| state_object(json!({ "index": name })))
            .collect()
    }

    fn indices(document: &SnapshotDocument) -> Vec<Value> {
        document.ledger["accountState"]
            .as_array()
            .unwrap()
            .iter()
            .map(|object| object["index"].clone())
            .collect()
    }

    #[test]
    fn concatenates_pages_in_order_test() {
        let document = SnapshotAccumulator::default()
            .push_page(first_page().state(objects(&["A", "B"])).marker("m1").build())
            .unwrap()
            .push_page(LedgerDataPageBuilder::default().build())
            .unwrap()
            .push_page(LedgerDataPageBuilder::default().state(objects(&["C", "A"])).build())
            .unwrap()
            .finish()
            .unwrap();

        assert_eq!(indices(&document), vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn strips_closed_and_normalizes_index_test() {
        let document = SnapshotAccumulator::default()
            .push_page(first_page().build())
            .unwrap()
            .finish()
            .unwrap();

        assert!(document.ledger.get("closed").is_none());
        assert_eq!(document.ledger["ledger_index"], json!(5));
        assert_eq!(document.ledger["transactions"], json!([]));
        assert_eq!(document.ledger["accountState"], json!([]));
        assert_eq!(document.ledger_current_index, 5);
        assert_eq!(document.status, "success");
        assert!(document.validated);
    }

    #[test]
    fn header_without_closed_test() {
        let document = SnapshotAccumulator::default()
            .push_page(
                LedgerDataPageBuilder::default()
                    .ledger(json!({ "ledger_index": 7 }))
                    .build(),
            )
            .unwrap()
            .finish()
            .unwrap();

        assert!(document.ledger.get("closed").is_none());
        assert_eq!(document.ledger_current_index, 7);
    }

    #[test]
    fn later_headers_are_ignored_test() {
        let document = SnapshotAccumulator::default()
            .push_page(first_page().marker("m1").build())
            .unwrap()
            .push_page(
                LedgerDataPageBuilder::default()
                    .ledger(json!({ "ledger_index": "6" }))
                    .build(),
            )
            .unwrap()
            .finish()
            .unwrap();

        assert_eq!(document.ledger_current_index, 5);
        assert_eq!(document.ledger["ledger_hash"], json!("ABC"));
    }

    #[test]
    fn first_page_without_header_test() {
        let error = SnapshotAccumulator::default()
            .push_page(LedgerDataPageBuilder::default().build())
            .unwrap_err();

        assert!(matches!(error, Error::MissingLedgerHeader));
    }

    #[test]
    fn header_with_bad_index_test() {
        let error = SnapshotAccumulator::default()
            .push_page(
                LedgerDataPageBuilder::default()
                    .ledger(json!({ "ledger_index": "current" }))
                    .build(),
            )
            .unwrap_err();

        assert!(matches!(error, Error::MalformedResponse(_)));
    }

    #[test]
    fn no_pages_test() {
        let error = SnapshotAccumulator::default().finish().unwrap_err();
        assert!(matches!(error, Error::EmptyLedger));
    }

    #[tokio::test]
    async fn reduce_stream_test() {
        let pages = stream::iter(vec![
            Ok(first_page().state(objects(&["A", "B"])).marker("m1").build()),
            Ok(LedgerDataPageBuilder::default().state(objects(&["C"])).build()),
        ]);

        let document = reduce_snapshot(pages).await.unwrap();

        assert_eq!(indices(&document), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn reduce_stream_error_test() {
        let pages = stream::iter(vec![
            Ok(first_page().marker("m1").build()),
            Err(Error::MalformedResponse("missing state".to_string())),
        ]);

        let error = reduce_snapshot(pages).await.unwrap_err();

        assert!(matches!(error, Error::MalformedResponse(_)));
    }

    #[test]
    fn write_compact_document_test() {
        let document = SnapshotAccumulator::default()
            .push_page(first_page().state(objects(&["A"])).build())
            .unwrap()
            .finish()
            .unwrap();

        let mut out = Vec::new();
        write_document(&document, false, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            concat!(
                r#"{"ledger":{"accountState":[{"index":"A"}],"ledger_hash":"ABC","#,
                r#""ledger_index":5,"transactions":[]},"ledger_current_index":5,"#,
                r#""status":"success","validated":true}"#,
                "\n"
            )
        );
    }

    #[test]
    fn write_pretty_document_test() {
        let document = SnapshotAccumulator::default()
            .push_page(first_page().build())
            .unwrap()
            .finish()
            .unwrap();

        let mut out = Vec::new();
        write_document(&document, true, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("{\n  \"ledger\": {\n    \"accountState\": []"));
        assert!(out.ends_with("\"validated\": true\n}\n"));
    }
}
