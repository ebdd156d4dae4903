use thiserror::Error;

use crate::gate::AccessDecision;

/// Result type alias using VisitError
pub type Result<T> = std::result::Result<T, VisitError>;

/// Terminal error taxonomy for a visitation resolution
///
/// Every variant is terminal: nothing here is retried by the engine, and
/// each resolution attempt surfaces at most one of these. Variants carry
/// the context a front end needs for user feedback (bounds, names, the
/// permission node that would have unlocked a denial).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisitError {
    /// Malformed argument count or shape
    #[error("usage: {usage}")]
    Usage { usage: String },

    /// A token that must be numeric (page) or a known area name was neither
    #[error("not a valid number: {value}")]
    InvalidNumber { value: String },

    /// The identity lookup exceeded its deadline
    #[error("player lookup timed out, try again later")]
    LookupTimeout,

    /// The token resolved to no known identity
    #[error("unknown player: {name}")]
    UnknownPlayer { name: String },

    /// The resolved identity owns no plots
    #[error("player has no plots")]
    NoPlots,

    /// Alias fallback found no matching plot
    #[error("no plot matched: {token}")]
    NoMatch { token: String },

    /// Requested page is outside the candidate list bounds
    #[error("page out of range: expected {min} to {max}")]
    OutOfRange { min: usize, max: usize },

    /// The access gate denied the visit
    #[error("permission denied: missing {}", .decision.required_node().unwrap_or("<none>"))]
    PermissionDenied { decision: AccessDecision },

    /// The confirmation gate declined the visit (not a fault)
    #[error("visit cancelled")]
    Cancelled,

    /// The world service reported a failed relocation
    #[error("teleport failed")]
    TeleportFailed,
}
