use thiserror::Error;
use tracing::{error, info};

use crate::contract::{CreatedEntry, NewEntry, PrizeService, ServiceError};
use crate::routes::Route;

/// User-facing form errors. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter an email or phone number")]
    EmptyContact,
    #[error("Something went wrong while saving. Please try again.")]
    Remote,
}

pub fn validate_contact(contact: &str) -> Result<String, FormError> {
    let trimmed = contact.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyContact);
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub contact: String,
    pub agreed: bool,
    submitting: bool,
    error: Option<FormError>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            contact: String::new(),
            agreed: true,
            submitting: false,
            error: None,
        }
    }
}

impl EntryForm {
    pub fn new(contact: impl Into<String>, agreed: bool) -> Self {
        Self {
            contact: contact.into(),
            agreed,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates and marks the form as submitting. Returns the record to
    /// create, or `None` when validation failed or a submit is in flight.
    pub fn begin_submit(&mut self) -> Option<NewEntry> {
        if self.submitting {
            return None;
        }
        let contact = match validate_contact(&self.contact) {
            Ok(contact) => contact,
            Err(error) => {
                self.error = Some(error);
                return None;
            }
        };
        self.error = None;
        self.submitting = true;
        Some(NewEntry {
            contact,
            agreed: self.agreed,
        })
    }

    /// Applies the create-entry result. On success returns the draw route for
    /// the new entry; on failure the form keeps its input for a retry.
    pub fn finish_submit(&mut self, result: Result<CreatedEntry, ServiceError>) -> Option<Route> {
        self.submitting = false;
        match result {
            Ok(created) => {
                info!(entry_id = %created.id, "entry created");
                Some(Route::Draw {
                    entry_id: created.id,
                })
            }
            Err(remote_error) => {
                error!(error = %remote_error, "failed to create entry");
                self.error = Some(FormError::Remote);
                None
            }
        }
    }

    pub fn submit(&mut self, service: &dyn PrizeService) -> Option<Route> {
        let entry = self.begin_submit()?;
        let result = service.create_entry(&entry);
        self.finish_submit(result)
    }
}
