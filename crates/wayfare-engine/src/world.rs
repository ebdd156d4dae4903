//! World/relocation service port

use async_trait::async_trait;
use wayfare_core::Plot;
use wayfare_core_types::{PlayerId, TeleportCause};

/// External world-interaction collaborator
///
/// The engine requests a relocation and maps the boolean result to a
/// terminal outcome; it never re-validates permissions after the gate.
#[async_trait]
pub trait WorldService: Send + Sync {
    /// Move the actor to the plot; false means the relocation failed
    /// (for example the destination became unreachable).
    async fn relocate(&self, actor: PlayerId, plot: &Plot, cause: TeleportCause) -> bool;
}

/// World service that records requests and always succeeds
///
/// Test double for the pipeline tests; also a reasonable dry-run embedder.
#[derive(Debug, Default)]
pub struct RecordingWorld {
    log: std::sync::Mutex<Vec<(PlayerId, Plot, TeleportCause)>>,
}

impl RecordingWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relocations requested so far
    pub fn requests(&self) -> Vec<(PlayerId, Plot, TeleportCause)> {
        self.log.lock().expect("world log poisoned").clone()
    }
}

#[async_trait]
impl WorldService for RecordingWorld {
    async fn relocate(&self, actor: PlayerId, plot: &Plot, cause: TeleportCause) -> bool {
        self.log
            .lock()
            .expect("world log poisoned")
            .push((actor, plot.clone(), cause));
        true
    }
}
