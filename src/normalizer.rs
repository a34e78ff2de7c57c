use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

use crate::data_models::{
    DEFAULT_CHANNEL, DEFAULT_TITLE, NOT_AVAILABLE, RawVideoRecord, VideoResult,
};

/// What happened to a single raw record during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Normalized(VideoResult),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    SubObjectNotAnObject(&'static str),
    FieldNotAString(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "record is not an object"),
            SkipReason::SubObjectNotAnObject(key) => write!(f, "`{key}` is not an object"),
            SkipReason::FieldNotAString(path) => write!(f, "`{path}` is not a string"),
        }
    }
}

/// Normalize every record, dropping the ones that can't be read. Order is kept.
pub fn normalize(raw: &[RawVideoRecord]) -> Vec<VideoResult> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, record)| match normalize_record(record) {
            RecordOutcome::Normalized(video) => Some(video),
            RecordOutcome::Skipped(reason) => {
                warn!(index, %reason, "skipping malformed video record");
                None
            }
        })
        .collect()
}

pub fn normalize_record(raw: &RawVideoRecord) -> RecordOutcome {
    match try_normalize(raw) {
        Ok(video) => RecordOutcome::Normalized(video),
        Err(reason) => RecordOutcome::Skipped(reason),
    }
}

fn try_normalize(raw: &RawVideoRecord) -> Result<VideoResult, SkipReason> {
    let record = raw.as_object().ok_or(SkipReason::NotAnObject)?;
    let channel = sub_object(record, "channel")?;
    let thumbnail = sub_object(record, "thumbnail")?;

    Ok(VideoResult {
        title: string_field(Some(record), "title", "title", DEFAULT_TITLE)?,
        link: string_field(Some(record), "link", "link", "")?,
        channel: string_field(channel, "name", "channel.name", DEFAULT_CHANNEL)?,
        channel_link: string_field(channel, "link", "channel.link", "")?,
        thumbnail: string_field(thumbnail, "static", "thumbnail.static", "")?,
        views: views_field(record),
        published_date: string_field(
            Some(record),
            "published_date",
            "published_date",
            NOT_AVAILABLE,
        )?,
        length: string_field(Some(record), "length", "length", NOT_AVAILABLE)?,
    })
}

/// A missing sub-object reads as absent. Anything present that isn't an
/// object, `null` included, makes the record unreadable.
fn sub_object<'a>(
    record: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a Map<String, Value>>, SkipReason> {
    match record.get(key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(SkipReason::SubObjectNotAnObject(key)),
    }
}

fn string_field(
    map: Option<&Map<String, Value>>,
    key: &str,
    path: &'static str,
    default: &str,
) -> Result<String, SkipReason> {
    match map.and_then(|m| m.get(key)) {
        None => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SkipReason::FieldNotAString(path)),
    }
}

fn views_field(record: &Map<String, Value>) -> String {
    match record.get("views") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
