use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use prize_draw_core::draw::{run_draw_task, run_init_task};
use prize_draw_core::{
    CreatedEntry, DrawEvent, EntryId, NewEntry, PrizeService, ServiceError, ThreadPause,
};

/// Result reported by a background task. `mount` is the screen generation
/// that started the task.
#[derive(Debug)]
pub enum WorkerMessage {
    EntryCreated {
        mount: u64,
        result: Result<CreatedEntry, ServiceError>,
    },
    Draw {
        mount: u64,
        event: DrawEvent,
    },
}

impl WorkerMessage {
    pub fn mount(&self) -> u64 {
        match self {
            WorkerMessage::EntryCreated { mount, .. } | WorkerMessage::Draw { mount, .. } => {
                *mount
            }
        }
    }
}

/// Runs remote calls off the UI thread and hands results back over a channel.
pub struct Worker {
    service: Arc<dyn PrizeService>,
    sender: Sender<WorkerMessage>,
    receiver: Receiver<WorkerMessage>,
}

impl Worker {
    pub fn new(service: Arc<dyn PrizeService>) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        Self {
            service,
            sender,
            receiver,
        }
    }

    pub fn create_entry(&self, mount: u64, entry: NewEntry) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = service.create_entry(&entry);
            let _ = sender.send(WorkerMessage::EntryCreated { mount, result });
        });
    }

    pub fn initialize(&self, mount: u64, entry_id: EntryId) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            run_init_task(service.as_ref(), &entry_id, &mut |event| {
                let _ = sender.send(WorkerMessage::Draw { mount, event });
            });
        });
    }

    pub fn draw(&self, mount: u64, entry_id: EntryId, shake_delay: Duration) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            run_draw_task(
                service.as_ref(),
                &entry_id,
                shake_delay,
                &ThreadPause,
                &mut |event| {
                    let _ = sender.send(WorkerMessage::Draw { mount, event });
                },
            );
        });
    }

    pub fn try_next(&self) -> Option<WorkerMessage> {
        self.receiver.try_recv().ok()
    }
}
