//! Combat-end hook - explicit event subscription for the host's combat engine
//!
//! The host holds a [`CombatEndHook`] and sends one event per finished
//! encounter; the worker drains the channel strictly sequentially, so a
//! second combat end is never processed (and no second confirmation dialog
//! queued) while an earlier workflow is still suspended on the game master.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::CombatRewardService;
use crate::domain::entities::CombatSession;

/// Events delivered by the host's combat engine.
#[derive(Debug, Clone)]
pub enum CombatEvent {
    /// A combat concluded. `None` when the host fired the hook without an
    /// active session.
    Ended(Option<CombatSession>),
}

/// Sending half handed to the host; cheap to clone.
#[derive(Clone)]
pub struct CombatEndHook {
    tx: mpsc::Sender<CombatEvent>,
}

impl CombatEndHook {
    /// Deliver a combat-end event.
    ///
    /// Returns `false` if the worker has already shut down.
    pub async fn combat_ended(&self, session: Option<CombatSession>) -> bool {
        self.tx.send(CombatEvent::Ended(session)).await.is_ok()
    }
}

/// Receiving half; owns the reward service and processes events one at a time.
pub struct CombatEndWorker {
    rx: mpsc::Receiver<CombatEvent>,
    service: Arc<CombatRewardService>,
}

impl CombatEndWorker {
    /// Process combat-end events until every hook handle is dropped.
    ///
    /// One workflow, including its confirmation suspension, fully resolves
    /// before the next event is taken from the channel.
    pub async fn run_worker(mut self) {
        while let Some(event) = self.rx.recv().await {
            match event {
                CombatEvent::Ended(session) => {
                    match self.service.handle_combat_ended(session.as_ref()).await {
                        Ok(outcomes) => {
                            tracing::info!("Rewarded {} participants", outcomes.len());
                        }
                        Err(skip) => {
                            tracing::debug!("No reward applied: {}", skip);
                        }
                    }
                }
            }
        }
        tracing::info!("Combat-end hook closed, reward worker stopping");
    }
}

/// Create the hook/worker pair around `service`.
///
/// The host keeps the hook and spawns `worker.run_worker()` on its runtime.
pub fn combat_end_channel(service: Arc<CombatRewardService>) -> (CombatEndHook, CombatEndWorker) {
    let (tx, rx) = mpsc::channel(16);
    (CombatEndHook { tx }, CombatEndWorker { rx, service })
}
