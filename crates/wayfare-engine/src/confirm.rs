//! Confirmation gate port
//!
//! The external mechanism requiring explicit actor approval before a
//! relocation executes ("type again to confirm", "click to confirm").
//! Approval and cancellation are a single awaited two-variant result,
//! consumed exactly once, rather than a pair of callbacks.
//!
//! Known, accepted race: if the external gate holds only one pending
//! confirmation per actor, a second concurrent resolution for the same
//! actor may overwrite the first's pending confirmation. The engine does
//! not serialize same-actor resolutions; see `concurrent_actor_tests.rs`.

use async_trait::async_trait;
use wayfare_core::Plot;
use wayfare_core_types::PlayerId;

/// The actor's answer to a confirmation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// External confirmation mechanism
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Ask the actor to approve visiting `plot`
    ///
    /// The engine calls this at most once per resolution and suspends
    /// until the actor answers.
    async fn request_confirmation(&self, actor: PlayerId, plot: &Plot) -> Confirmation;
}

/// Gate that approves every request without waiting
///
/// The default for embedders whose front end has no confirmation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationGate for AutoConfirm {
    async fn request_confirmation(&self, _actor: PlayerId, _plot: &Plot) -> Confirmation {
        Confirmation::Confirmed
    }
}
