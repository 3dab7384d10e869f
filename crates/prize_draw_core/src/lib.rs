//! Prize draw domain primitives.
//!
//! This crate owns the draw state machine, inventory reconciliation, the entry
//! form contract and the two-route navigation surface. Persistent state lives
//! in a hosted service reached through the [`contract::PrizeService`] trait; the
//! blocking HTTP implementation is behind the `remote` feature so the core can
//! be tested against in-memory fakes.

pub mod contract;
pub mod draw;
pub mod entry_form;
pub mod inventory;
pub mod presentation;
#[cfg(feature = "remote")]
pub mod remote;
pub mod routes;

pub use contract::{
    CreatedEntry, EntryId, EntryOutcome, NewEntry, PrizeRow, PrizeService, Rank, ServiceError,
};
pub use draw::{DrawController, DrawEvent, DrawPhase, Pause, ThreadPause, DEFAULT_SHAKE_DELAY};
pub use entry_form::{EntryForm, FormError};
pub use inventory::PrizeInventory;
pub use routes::Route;
