//! Terminal resolution outcome

use wayfare_core::{Plot, VisitError};

/// The single terminal result of one resolution attempt
///
/// Exactly one of these is produced per `visit()` call: the returned
/// future takes the place of a single-use outcome callback, so the
/// exactly-once guarantee is structural rather than a call-site
/// discipline.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitOutcome {
    /// The actor was relocated to the plot
    Success(Plot),
    /// The resolution ended without a relocation
    Failed(VisitError),
}

impl VisitOutcome {
    /// True for the `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, VisitOutcome::Success(_))
    }

    /// The error of a failed outcome, if any
    pub fn error(&self) -> Option<&VisitError> {
        match self {
            VisitOutcome::Success(_) => None,
            VisitOutcome::Failed(err) => Some(err),
        }
    }
}

impl From<VisitError> for VisitOutcome {
    fn from(err: VisitError) -> Self {
        VisitOutcome::Failed(err)
    }
}
