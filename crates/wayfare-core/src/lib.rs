//! Wayfare Core - synchronous visitation domain logic
//!
//! This crate provides the foundational data structures and decisions for
//! Wayfare, including:
//! - The permission holder abstraction with hierarchical range evaluation
//! - Plot and area models with flags, membership and deny-lists
//! - The destination store contract and an in-memory implementation
//! - The destination query builder with deterministic sorting
//! - The ordered access-decision gate
//!
//! Everything here is pure and synchronous; async orchestration lives in
//! `wayfare-engine`.

pub mod errors;
pub mod gate;
pub mod logging;
pub mod model;
pub mod permission;
pub mod query;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use errors::{Result, VisitError};
pub use gate::{evaluate_access, AccessDecision};
pub use model::Plot;
pub use permission::{Actor, GrantSet, PermissionHolder, VisitActor};
pub use query::{PlotQuery, SortingStrategy};
pub use settings::Settings;
pub use store::{MemoryPlotStore, PlotStore};
