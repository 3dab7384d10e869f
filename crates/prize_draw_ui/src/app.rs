//! Application state shared by both screens.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use prize_draw_core::{DrawController, DrawPhase, EntryForm, PrizeService, Route};
use tracing::{debug, info, warn};

pub mod session;
pub mod worker;

use session::{load_session, save_session};
use worker::{Worker, WorkerMessage};

/// Draw screen state; dropped when navigating away.
pub struct DrawScreen {
    pub controller: DrawController,
    /// Set when the result first becomes visible, for the reveal animation.
    pub revealed_at: Option<Instant>,
}

impl DrawScreen {
    fn new(controller: DrawController) -> Self {
        Self {
            controller,
            revealed_at: None,
        }
    }
}

/// Main application state for the prize draw UI.
pub struct PrizeDrawApp {
    pub route: Route,
    pub entry_form: EntryForm,
    pub draw: Option<DrawScreen>,
    pub shake_delay: Duration,
    session_path: Option<PathBuf>,
    worker: Worker,
    /// Bumped on every navigation; results from older mounts are dropped.
    mount: u64,
}

impl PrizeDrawApp {
    /// `start` overrides the saved session when given. Without a session path
    /// nothing is persisted.
    pub fn new(
        service: Arc<dyn PrizeService>,
        shake_delay: Duration,
        session_path: Option<PathBuf>,
        start: Option<Route>,
    ) -> Self {
        let start = start.unwrap_or_else(|| match session_path.as_deref() {
            Some(path) => load_session(path).unwrap_or_else(|error| {
                warn!(%error, "ignoring unreadable session file");
                Route::Entry
            }),
            None => Route::Entry,
        });

        let mut app = Self {
            route: Route::Entry,
            entry_form: EntryForm::default(),
            draw: None,
            shake_delay,
            session_path,
            worker: Worker::new(service),
            mount: 0,
        };
        app.navigate(start);
        app
    }

    /// Leaves the current screen and mounts the target. Opening the draw
    /// screen without an entry id lands on the entry form.
    pub fn navigate(&mut self, route: Route) {
        self.mount += 1;
        match DrawController::mount(&route) {
            Ok(controller) => {
                let controller = controller.with_shake_delay(self.shake_delay);
                info!(path = %route.to_path(), mount = self.mount, "opening draw screen");
                self.worker.initialize(self.mount, controller.entry_id().clone());
                self.draw = Some(DrawScreen::new(controller));
                self.route = route;
            }
            Err(redirect) => {
                self.draw = None;
                self.entry_form = EntryForm::default();
                self.route = redirect;
            }
        }
        self.persist_route();
    }

    pub fn submit_entry(&mut self) {
        if let Some(entry) = self.entry_form.begin_submit() {
            self.worker.create_entry(self.mount, entry);
        }
    }

    pub fn trigger_draw(&mut self) {
        let Some(screen) = self.draw.as_mut() else {
            return;
        };
        if screen.controller.begin_draw() {
            self.worker.draw(
                self.mount,
                screen.controller.entry_id().clone(),
                screen.controller.shake_delay(),
            );
        }
    }

    /// Applies every finished background result. Call once per frame.
    pub fn pump(&mut self) {
        while let Some(message) = self.worker.try_next() {
            if message.mount() != self.mount {
                debug!(
                    mount = message.mount(),
                    current = self.mount,
                    "dropping result for a closed screen"
                );
                continue;
            }
            match message {
                WorkerMessage::EntryCreated { result, .. } => {
                    if let Some(route) = self.entry_form.finish_submit(result) {
                        self.navigate(route);
                    }
                }
                WorkerMessage::Draw { event, .. } => {
                    let Some(screen) = self.draw.as_mut() else {
                        continue;
                    };
                    screen.controller.apply(event);
                    if screen.controller.phase() == DrawPhase::Done && screen.revealed_at.is_none()
                    {
                        screen.revealed_at = Some(Instant::now());
                    }
                }
            }
        }
    }

    /// True while a background result is still expected.
    pub fn is_waiting(&self) -> bool {
        if self.entry_form.is_submitting() {
            return true;
        }
        self.draw.as_ref().is_some_and(|screen| {
            !screen.controller.is_ready()
                || matches!(
                    screen.controller.phase(),
                    DrawPhase::Shaking | DrawPhase::Drawing
                )
        })
    }

    fn persist_route(&self) {
        let Some(path) = self.session_path.as_deref() else {
            return;
        };
        if let Err(error) = save_session(path, &self.route) {
            warn!(%error, "failed to save session");
        }
    }
}
