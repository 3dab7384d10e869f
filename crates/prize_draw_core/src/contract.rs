use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Opaque, service-assigned entry identifier.
///
/// The hosted service may hand out numeric or textual keys; both are carried
/// as text so the client never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Returns `None` for blank input: an entry id must bind to a real record.
    /// Other input is kept verbatim.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        let raw = match RawId::deserialize(de)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        };
        EntryId::new(raw).ok_or_else(|| serde::de::Error::custom("entry id cannot be empty"))
    }
}

/// Prize tier assigned by the draw procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(pub i32);

impl Rank {
    /// "No prize" sentinel returned once the limited tiers are exhausted.
    pub const NONE: Rank = Rank(0);
    /// Fixed tier; never allocated through this flow.
    pub const FIRST: Rank = Rank(1);
    pub const SECOND: Rank = Rank(2);
    pub const THIRD: Rank = Rank(3);

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_winning(self) -> bool {
        self == Rank::SECOND || self == Rank::THIRD
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeRow {
    pub rank: Rank,
    pub remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub contact: String,
    pub agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntry {
    pub id: EntryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryOutcome {
    /// `None` until the draw procedure has run for the entry.
    pub prize_rank: Option<Rank>,
}

/// Failure reported by a [`PrizeService`] call. The detail is for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("service responded with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("failed to decode service response: {0}")]
    Decode(String),
    #[error("record not found: {0}")]
    NotFound(String),
}

/// The four remote operations the flow depends on.
///
/// Implementations must be `Send + Sync` so a shared handle can be moved into
/// background workers.
pub trait PrizeService: Send + Sync {
    /// Remaining counts per rank. Only ranks 2 and 3 are expected.
    fn list_inventory(&self) -> Result<Vec<PrizeRow>, ServiceError>;

    fn create_entry(&self, entry: &NewEntry) -> Result<CreatedEntry, ServiceError>;

    fn fetch_outcome(&self, entry_id: &EntryId) -> Result<EntryOutcome, ServiceError>;

    /// Runs the remote draw for `entry_id`. Atomicity and at-most-once
    /// allocation are the service's responsibility. `None` means the
    /// procedure succeeded without reporting a rank.
    fn draw_prize(&self, entry_id: &EntryId) -> Result<Option<Rank>, ServiceError>;
}
