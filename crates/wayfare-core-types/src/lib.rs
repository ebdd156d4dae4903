//! Core types shared across Wayfare crates
//!
//! This crate provides foundational types used by both the domain core
//! and the visitation engine:
//!
//! - **Identifier types**: PlayerId, PlotId, AreaId
//! - **Teleport causes**: TeleportCause and its precomputed cause groups

pub mod cause;
pub mod ids;

pub use cause::TeleportCause;
pub use ids::{AreaId, PlayerId, PlotId, PlotIdParseError};
