use news_logging::{news_debug, news_warn};
use serde_json::Value;

use crate::{NewsApi, SearchError};

/// Fetches raw news for `query`, pipes it through the process endpoint and
/// returns the processed records.
///
/// If the process call fails the fetched body is dropped; there is no retry.
pub async fn run_search(
    api: &dyn NewsApi,
    query: &str,
    session_id: &str,
) -> Result<Vec<Value>, SearchError> {
    let fetched = api.fetch_news(query, session_id).await.inspect_err(|err| {
        news_warn!("fetch failed for query={:?}: {:?}", query, err);
    })?;
    let processed = api
        .process_news(fetched, session_id)
        .await
        .inspect_err(|err| {
            news_warn!("process failed for query={:?}: {:?}", query, err);
        })?;
    let records = extract_data(processed)?;
    news_debug!("query={:?} produced {} records", query, records.len());
    Ok(records)
}

fn extract_data(mut processed: Value) -> Result<Vec<Value>, SearchError> {
    match processed.get_mut("data").map(Value::take) {
        Some(Value::Array(records)) => Ok(records),
        Some(other) => Err(SearchError::Decode(format!(
            "process response `data` is {}, expected an array",
            json_kind(&other)
        ))),
        None => Err(SearchError::Decode(
            "process response has no `data` field".to_string(),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
