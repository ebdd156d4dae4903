//! Wayfare Engine - async visitation orchestration
//!
//! Drives a raw target specification through the full pipeline:
//! parse → identity resolution (with timeout) → destination query →
//! pagination → access gate → confirmation → relocation → outcome.
//!
//! Collaborators (identity directory, confirmation gate, world service)
//! are ports; the engine never blocks a thread while waiting on them, and
//! every `visit()` call yields exactly one terminal [`VisitOutcome`].

pub mod commands;
pub mod confirm;
pub mod engine;
pub mod outcome;
pub mod parse;
pub mod resolver;
pub mod world;

// Re-export commonly used types
pub use commands::{CommandRegistry, CommandSpec};
pub use confirm::{AutoConfirm, Confirmation, ConfirmationGate};
pub use engine::VisitEngine;
pub use outcome::VisitOutcome;
pub use parse::{parse_visit_args, Target, TargetSpec};
pub use resolver::{CachedResolver, IdentityResolver, LookupError, PlayerDirectory};
pub use world::WorldService;
