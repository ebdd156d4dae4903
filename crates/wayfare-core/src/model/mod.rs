//! Domain models for the visitation engine

pub mod plot;

pub use plot::{Plot, UNTRUSTED_VISIT_FLAG};
