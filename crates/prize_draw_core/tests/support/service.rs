use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use prize_draw_core::contract::{
    CreatedEntry, EntryId, EntryOutcome, NewEntry, PrizeRow, PrizeService, Rank, ServiceError,
};
use prize_draw_core::draw::Pause;

/// Remote call as observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListInventory,
    CreateEntry(NewEntry),
    FetchOutcome(EntryId),
    DrawPrize(EntryId),
}

#[derive(Debug, Default)]
struct FakeState {
    inventory: Option<Vec<PrizeRow>>,
    inventory_after_draw: Option<Vec<PrizeRow>>,
    outcomes: HashMap<EntryId, Option<Rank>>,
    draw_script: VecDeque<Result<Option<Rank>, ServiceError>>,
    create_script: VecDeque<Result<String, ServiceError>>,
    calls: Vec<Call>,
    drawn: bool,
}

/// In-memory stand-in for the hosted service.
///
/// Inventory is `None` until configured, which makes `list_inventory` fail.
#[derive(Debug, Default)]
pub struct FakePrizeService {
    state: Mutex<FakeState>,
}

pub fn service_error(message: &str) -> ServiceError {
    ServiceError::Api {
        status: 500,
        message: message.to_string(),
    }
}

pub fn rows(second: Option<i64>, third: Option<i64>) -> Vec<PrizeRow> {
    let mut rows = Vec::new();
    if let Some(remaining) = second {
        rows.push(PrizeRow {
            rank: Rank::SECOND,
            remaining,
        });
    }
    if let Some(remaining) = third {
        rows.push(PrizeRow {
            rank: Rank::THIRD,
            remaining,
        });
    }
    rows
}

impl FakePrizeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(self, rows: Vec<PrizeRow>) -> Self {
        self.state.lock().expect("poisoned mutex").inventory = Some(rows);
        self
    }

    /// Inventory served once a draw has succeeded.
    pub fn with_inventory_after_draw(self, rows: Vec<PrizeRow>) -> Self {
        self.state.lock().expect("poisoned mutex").inventory_after_draw = Some(rows);
        self
    }

    pub fn with_entry(self, id: &str, outcome: Option<Rank>) -> Self {
        self.state
            .lock()
            .expect("poisoned mutex")
            .outcomes
            .insert(EntryId::new(id).expect("valid id"), outcome);
        self
    }

    pub fn with_draw_results(self, results: Vec<Result<Rank, ServiceError>>) -> Self {
        self.with_draw_replies(
            results
                .into_iter()
                .map(|result| result.map(Some))
                .collect(),
        )
    }

    /// Raw procedure replies, including `Ok(None)` for a `null` body.
    pub fn with_draw_replies(self, replies: Vec<Result<Option<Rank>, ServiceError>>) -> Self {
        self.state.lock().expect("poisoned mutex").draw_script = replies.into();
        self
    }

    pub fn with_created_ids(self, results: Vec<Result<&str, ServiceError>>) -> Self {
        self.state.lock().expect("poisoned mutex").create_script = results
            .into_iter()
            .map(|result| result.map(str::to_string))
            .collect();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().expect("poisoned mutex").calls.clone()
    }

    pub fn draw_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::DrawPrize(_)))
            .count()
    }

    pub fn recorded_outcome(&self, id: &str) -> Option<Rank> {
        let id = EntryId::new(id).expect("valid id");
        self.state
            .lock()
            .expect("poisoned mutex")
            .outcomes
            .get(&id)
            .copied()
            .flatten()
    }
}

impl PrizeService for FakePrizeService {
    fn list_inventory(&self) -> Result<Vec<PrizeRow>, ServiceError> {
        let mut state = self.state.lock().expect("poisoned mutex");
        state.calls.push(Call::ListInventory);
        let rows = if state.drawn {
            state
                .inventory_after_draw
                .clone()
                .or_else(|| state.inventory.clone())
        } else {
            state.inventory.clone()
        };
        rows.ok_or_else(|| service_error("inventory unavailable"))
    }

    fn create_entry(&self, entry: &NewEntry) -> Result<CreatedEntry, ServiceError> {
        let mut state = self.state.lock().expect("poisoned mutex");
        state.calls.push(Call::CreateEntry(entry.clone()));
        let next = state
            .create_script
            .pop_front()
            .unwrap_or_else(|| Err(service_error("no scripted entry id")))?;
        let id = EntryId::new(next).expect("scripted ids are non-empty");
        state.outcomes.insert(id.clone(), None);
        Ok(CreatedEntry { id })
    }

    fn fetch_outcome(&self, entry_id: &EntryId) -> Result<EntryOutcome, ServiceError> {
        let mut state = self.state.lock().expect("poisoned mutex");
        state.calls.push(Call::FetchOutcome(entry_id.clone()));
        state
            .outcomes
            .get(entry_id)
            .map(|prize_rank| EntryOutcome {
                prize_rank: *prize_rank,
            })
            .ok_or_else(|| ServiceError::NotFound(format!("entry {entry_id}")))
    }

    fn draw_prize(&self, entry_id: &EntryId) -> Result<Option<Rank>, ServiceError> {
        let mut state = self.state.lock().expect("poisoned mutex");
        state.calls.push(Call::DrawPrize(entry_id.clone()));
        let result = state
            .draw_script
            .pop_front()
            .unwrap_or_else(|| Err(service_error("no scripted draw result")));
        if let Ok(rank) = result {
            if rank.is_some() {
                state.outcomes.insert(entry_id.clone(), rank);
            }
            state.drawn = true;
        }
        result
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPause {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().expect("poisoned mutex").clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().expect("poisoned mutex").push(duration);
    }
}
