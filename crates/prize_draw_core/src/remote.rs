//! Blocking client for the hosted REST service backing the flow.
//!
//! The service exposes the `prizes` and `entries` tables and the `draw_prize`
//! stored procedure through a PostgREST-style endpoint. Response bodies are
//! read as text and decoded by the parser so non-2xx error bodies can be
//! reported without leaking them to the user.

mod client;
mod config;
mod parser;
mod response;


pub use client::RestPrizeService;
pub use config::{ConfigError, RemoteConfig};

use crate::contract::ServiceError;

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}
