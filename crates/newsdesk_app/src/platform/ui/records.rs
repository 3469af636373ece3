//! Best-effort field lookups on processed records.
//!
//! Records are whatever the process endpoint returned; nothing here may fail.

use newsdesk_core::{AppViewModel, NewsRecord};
use serde_json::Value;

const TITLE_FIELDS: &[&str] = &["title", "headline", "name"];
const SUMMARY_FIELDS: &[&str] = &["summary", "description", "content"];
const DATE_FIELDS: &[&str] = &["published_at", "publishedAt", "date"];
const KEYWORD_FIELDS: &[&str] = &["keywords", "tags"];
const MAX_SUGGESTIONS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub selected: bool,
}

pub fn title(record: &NewsRecord) -> String {
    first_str(record, TITLE_FIELDS)
        .map(str::to_owned)
        .unwrap_or_else(|| record.to_string())
}

pub fn summary(record: &NewsRecord) -> Option<&str> {
    first_str(record, SUMMARY_FIELDS)
}

/// `source · date`, from whichever of the two is present.
pub fn byline(record: &NewsRecord) -> Option<String> {
    let source = match record.get("source") {
        Some(Value::String(name)) => Some(name.as_str()),
        Some(Value::Object(map)) => map.get("name").and_then(Value::as_str),
        _ => None,
    };
    let date = first_str(record, DATE_FIELDS);
    match (source, date) {
        (Some(s), Some(d)) => Some(format!("{s} · {d}")),
        (Some(s), None) => Some(s.to_owned()),
        (None, Some(d)) => Some(d.to_owned()),
        (None, None) => None,
    }
}

pub fn keywords(record: &NewsRecord) -> Vec<&str> {
    KEYWORD_FIELDS
        .iter()
        .filter_map(|field| record.get(*field).and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Sidebar rows: active keywords first, then suggestions pulled from results.
pub fn keyword_entries(view: &AppViewModel) -> Vec<KeywordEntry> {
    let mut entries: Vec<KeywordEntry> = view
        .keywords
        .iter()
        .map(|keyword| KeywordEntry {
            keyword: keyword.clone(),
            selected: true,
        })
        .collect();

    let mut suggested = 0;
    for keyword in view.results.iter().flat_map(keywords) {
        if suggested == MAX_SUGGESTIONS {
            break;
        }
        if entries.iter().any(|entry| entry.keyword == keyword) {
            continue;
        }
        entries.push(KeywordEntry {
            keyword: keyword.to_owned(),
            selected: false,
        });
        suggested += 1;
    }
    entries
}

fn first_str<'a>(record: &'a NewsRecord, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| record.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
}
