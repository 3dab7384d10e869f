use serde::{Deserialize, Serialize};

use crate::contract::{EntryId, NewEntry};

/// Error body returned by the REST layer on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiErrorBody {
    pub(super) message: Option<String>,
    pub(super) code: Option<String>,
    pub(super) details: Option<String>,
    pub(super) hint: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateEntryBody<'a> {
    pub(super) contact: &'a str,
    pub(super) agreed: bool,
}

impl<'a> From<&'a NewEntry> for CreateEntryBody<'a> {
    fn from(entry: &'a NewEntry) -> Self {
        Self {
            contact: &entry.contact,
            agreed: entry.agreed,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DrawPrizeArgs<'a> {
    pub(super) entry_id: &'a EntryId,
}
