use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use catalog_logging::catalog_debug;
use tokio_util::sync::CancellationToken;

use crate::{CatalogLoader, EngineEvent};

enum EngineCommand {
    Load,
    Cancel,
}

/// The load currently running, tagged so a finished task only clears its own entry.
struct InFlight {
    id: u64,
    token: CancellationToken,
}

type InFlightSlot = Arc<Mutex<Option<InFlight>>>;

/// Runs catalog loads on a background tokio runtime and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    in_flight: InFlightSlot,
}

impl EngineHandle {
    pub fn new(loader: CatalogLoader) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let in_flight: InFlightSlot = Arc::new(Mutex::new(None));
        let slot = in_flight.clone();

        thread::spawn(move || {
            let mut next_id = 0u64;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Load => {
                        next_id += 1;
                        let id = next_id;
                        let token = CancellationToken::new();
                        let previous = replace_slot(
                            &slot,
                            Some(InFlight {
                                id,
                                token: token.clone(),
                            }),
                        );
                        if let Some(previous) = previous {
                            catalog_debug!("Load {} superseded by load {}", previous.id, id);
                            previous.token.cancel();
                        }

                        let loader = loader.clone();
                        let event_tx = event_tx.clone();
                        let slot = slot.clone();
                        runtime.spawn(async move {
                            let _ = event_tx.send(EngineEvent::LoadStarted);
                            let result = loader.load(&token).await;
                            // Clear before reporting so observers never see a finished load as running.
                            clear_if_current(&slot, id);
                            let _ = event_tx.send(EngineEvent::LoadCompleted { result });
                        });
                    }
                    EngineCommand::Cancel => match replace_slot(&slot, None) {
                        Some(current) => {
                            catalog_debug!("Cancelling load {}", current.id);
                            current.token.cancel();
                        }
                        None => catalog_debug!("Cancel requested with no load in flight"),
                    },
                }
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            in_flight,
        })
    }

    pub fn load(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Load);
    }

    pub fn cancel(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel);
    }

    /// True between a load being accepted and its completion being reported.
    pub fn is_load_in_flight(&self) -> bool {
        self.in_flight
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn replace_slot(slot: &InFlightSlot, value: Option<InFlight>) -> Option<InFlight> {
    match slot.lock() {
        Ok(mut guard) => std::mem::replace(&mut *guard, value),
        Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), value),
    }
}

fn clear_if_current(slot: &InFlightSlot, id: u64) {
    let mut guard = match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if guard.as_ref().is_some_and(|current| current.id == id) {
        *guard = None;
    }
}
