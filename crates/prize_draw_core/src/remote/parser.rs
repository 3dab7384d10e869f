use crate::contract::{CreatedEntry, EntryId, EntryOutcome, PrizeRow, Rank, ServiceError};

use super::response::ApiErrorBody;

fn decode<T: serde::de::DeserializeOwned>(body: &str, what: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body)
        .map_err(|error| ServiceError::Decode(format!("invalid {what} response: {error}")))
}

pub(super) fn parse_inventory(body: &str) -> Result<Vec<PrizeRow>, ServiceError> {
    decode(body, "inventory")
}

/// Inserts return the representation as a one-element array.
pub(super) fn parse_created_entry(body: &str) -> Result<CreatedEntry, ServiceError> {
    let mut rows: Vec<CreatedEntry> = decode(body, "create entry")?;
    if rows.len() > 1 {
        return Err(ServiceError::Decode(format!(
            "create entry returned {} rows, expected 1",
            rows.len()
        )));
    }
    rows.pop()
        .ok_or_else(|| ServiceError::Decode("create entry returned no rows".to_string()))
}

pub(super) fn parse_outcome(body: &str, entry_id: &EntryId) -> Result<EntryOutcome, ServiceError> {
    let rows: Vec<EntryOutcome> = decode(body, "entry outcome")?;
    match rows.as_slice() {
        [outcome] => Ok(*outcome),
        [] => Err(ServiceError::NotFound(format!("entry {entry_id}"))),
        _ => Err(ServiceError::Decode(format!(
            "entry outcome returned {} rows for {entry_id}",
            rows.len()
        ))),
    }
}

/// `draw_prize` returns a bare integer rank, or `null`.
pub(super) fn parse_draw_result(body: &str) -> Result<Option<Rank>, ServiceError> {
    decode(body, "draw_prize")
}

pub(super) fn parse_error(status: u16, body: &str) -> ServiceError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let mut message = parsed
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            }
        });
    if let Some(code) = parsed.code.filter(|code| !code.is_empty()) {
        message = format!("[{code}] {message}");
    }
    for extra in [parsed.details, parsed.hint].into_iter().flatten() {
        if !extra.trim().is_empty() {
            message.push_str("; ");
            message.push_str(extra.trim());
        }
    }
    ServiceError::Api { status, message }
}
