//! Draw state machine for a single entry.
//!
//! [`DrawController`] is the only writer of draw state. Remote calls and the
//! shake delay are run by [`run_init_task`] and [`run_draw_task`], which only
//! *report* [`DrawEvent`]s; the owner of the controller applies them. The UI
//! runs the tasks on a worker thread and applies events on its own thread, the
//! CLI applies them inline via [`DrawController::initialize`] and
//! [`DrawController::draw`].

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::contract::{EntryId, EntryOutcome, PrizeRow, PrizeService, Rank, ServiceError};
use crate::inventory::PrizeInventory;
use crate::presentation::{result_descriptor, ResultDescriptor};
use crate::routes::Route;

/// How long the machine shakes before the remote draw is invoked.
pub const DEFAULT_SHAKE_DELAY: Duration = Duration::from_millis(1600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    #[default]
    Idle,
    Shaking,
    Drawing,
    Done,
}

/// Outcome of one step of initialization or of the draw sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    InventoryLoaded(Result<Vec<PrizeRow>, ServiceError>),
    OutcomeLoaded(Result<EntryOutcome, ServiceError>),
    ShakeElapsed,
    /// `Ok(None)`: the procedure succeeded without a rank.
    Drawn(Result<Option<Rank>, ServiceError>),
    InventoryRefreshed(Result<Vec<PrizeRow>, ServiceError>),
}

/// Suspension point between `shaking` and `drawing`.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Sleeps the calling thread. Only use it off the UI thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawController {
    entry_id: EntryId,
    phase: DrawPhase,
    result: Option<Rank>,
    inventory: PrizeInventory,
    outcome_checked: bool,
    shake_delay: Duration,
}

impl DrawController {
    pub fn new(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            phase: DrawPhase::Idle,
            result: None,
            inventory: PrizeInventory::default(),
            outcome_checked: false,
            shake_delay: DEFAULT_SHAKE_DELAY,
        }
    }

    /// Mounts the controller for a route. Anything but a draw route is
    /// returned as the redirect target.
    pub fn mount(route: &Route) -> Result<Self, Route> {
        match route {
            Route::Draw { entry_id } => Ok(Self::new(entry_id.clone())),
            Route::Entry => Err(Route::Entry),
        }
    }

    pub fn with_shake_delay(mut self, shake_delay: Duration) -> Self {
        self.shake_delay = shake_delay;
        self
    }

    pub fn entry_id(&self) -> &EntryId {
        &self.entry_id
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn result(&self) -> Option<Rank> {
        self.result
    }

    pub fn inventory(&self) -> PrizeInventory {
        self.inventory
    }

    pub fn shake_delay(&self) -> Duration {
        self.shake_delay
    }

    /// True once the "already drawn" check has finished, whatever its result.
    pub fn is_ready(&self) -> bool {
        self.outcome_checked
    }

    pub fn can_draw(&self) -> bool {
        self.outcome_checked && self.phase == DrawPhase::Idle
    }

    /// Descriptor for the result panel. `None` while not done, or when the
    /// service returned a rank without a descriptor.
    pub fn descriptor(&self) -> Option<ResultDescriptor> {
        if self.phase != DrawPhase::Done {
            return None;
        }
        self.result.and_then(result_descriptor)
    }

    /// `idle → shaking`. Returns `false` (and changes nothing) in any other
    /// state, which makes repeated triggers no-ops.
    pub fn begin_draw(&mut self) -> bool {
        if !self.can_draw() {
            debug!(
                entry_id = %self.entry_id,
                phase = ?self.phase,
                ready = self.outcome_checked,
                "ignoring draw trigger"
            );
            return false;
        }
        self.phase = DrawPhase::Shaking;
        info!(entry_id = %self.entry_id, "draw started");
        true
    }

    pub fn apply(&mut self, event: DrawEvent) {
        match event {
            DrawEvent::InventoryLoaded(Ok(rows)) => {
                self.inventory = PrizeInventory::from_rows(&rows);
            }
            DrawEvent::InventoryLoaded(Err(error)) => {
                warn!(%error, "failed to load prize inventory; keeping displayed counts");
            }
            DrawEvent::OutcomeLoaded(result) => self.apply_outcome(result),
            DrawEvent::ShakeElapsed => {
                if self.phase == DrawPhase::Shaking {
                    self.phase = DrawPhase::Drawing;
                } else {
                    debug!(phase = ?self.phase, "shake elapsed outside of shaking phase");
                }
            }
            DrawEvent::Drawn(result) => self.apply_drawn(result),
            DrawEvent::InventoryRefreshed(Ok(rows)) => {
                self.inventory = self.inventory.reconciled(&rows);
            }
            DrawEvent::InventoryRefreshed(Err(error)) => {
                warn!(%error, "failed to refresh prize inventory after draw");
            }
        }
    }

    fn apply_outcome(&mut self, result: Result<EntryOutcome, ServiceError>) {
        self.outcome_checked = true;
        match result {
            Ok(EntryOutcome {
                prize_rank: Some(rank),
            }) => {
                if self.phase == DrawPhase::Idle {
                    info!(entry_id = %self.entry_id, %rank, "entry already drawn");
                    self.result = Some(rank);
                    self.phase = DrawPhase::Done;
                }
            }
            Ok(EntryOutcome { prize_rank: None }) => {}
            Err(error) => {
                warn!(entry_id = %self.entry_id, %error, "failed to check existing outcome");
            }
        }
    }

    fn apply_drawn(&mut self, result: Result<Option<Rank>, ServiceError>) {
        if self.phase != DrawPhase::Drawing {
            debug!(phase = ?self.phase, "draw result outside of drawing phase");
            return;
        }
        match result {
            Ok(Some(rank)) => {
                info!(entry_id = %self.entry_id, %rank, "draw completed");
                self.result = Some(rank);
                self.phase = DrawPhase::Done;
            }
            Ok(None) => {
                warn!(entry_id = %self.entry_id, "draw completed without a rank");
                self.result = None;
                self.phase = DrawPhase::Done;
            }
            Err(error) => {
                error!(entry_id = %self.entry_id, %error, "draw_prize failed");
                self.phase = DrawPhase::Idle;
            }
        }
    }

    /// Runs initialization inline.
    pub fn initialize(&mut self, service: &dyn PrizeService) {
        let entry_id = self.entry_id.clone();
        run_init_task(service, &entry_id, &mut |event| self.apply(event));
    }

    /// Runs the full draw action inline. Returns `false` when the trigger was
    /// ignored.
    pub fn draw(&mut self, service: &dyn PrizeService, pause: &dyn Pause) -> bool {
        if !self.begin_draw() {
            return false;
        }
        let entry_id = self.entry_id.clone();
        let shake_delay = self.shake_delay;
        run_draw_task(service, &entry_id, shake_delay, pause, &mut |event| {
            self.apply(event)
        });
        true
    }
}

/// Loads inventory, then the entry's existing outcome.
pub fn run_init_task(
    service: &dyn PrizeService,
    entry_id: &EntryId,
    on_event: &mut dyn FnMut(DrawEvent),
) {
    on_event(DrawEvent::InventoryLoaded(service.list_inventory()));
    on_event(DrawEvent::OutcomeLoaded(service.fetch_outcome(entry_id)));
}

/// Shakes, draws, and refreshes inventory after a successful draw.
///
/// Must only be started after [`DrawController::begin_draw`] returned `true`.
pub fn run_draw_task(
    service: &dyn PrizeService,
    entry_id: &EntryId,
    shake_delay: Duration,
    pause: &dyn Pause,
    on_event: &mut dyn FnMut(DrawEvent),
) {
    pause.pause(shake_delay);
    on_event(DrawEvent::ShakeElapsed);

    let drawn = service.draw_prize(entry_id);
    let succeeded = drawn.is_ok();
    on_event(DrawEvent::Drawn(drawn));

    if succeeded {
        on_event(DrawEvent::InventoryRefreshed(service.list_inventory()));
    }
}
