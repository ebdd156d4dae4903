//! Ordered access-decision gate
//!
//! Decides whether an actor may be sent to a plot, branching on the
//! actor's relationship to it. Checks run in a fixed order and
//! short-circuit on the first denial; once a check fails, deeper checks
//! are never evaluated.

use crate::model::Plot;
use crate::permission::{nodes, VisitActor};

/// Outcome of evaluating the access gate
///
/// Every denial variant knows the permission node that would have
/// unlocked it, for user-facing messaging by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The actor may visit
    Allowed,
    /// Plot is unowned and the actor lacks `visit.unowned`
    DeniedUnowned,
    /// Actor owns the plot but lacks both `visit.owned` and `home`
    DeniedOwned,
    /// Actor is trusted on the plot but lacks `visit.shared`
    DeniedShared,
    /// Actor has no relationship to the plot and lacks `visit.other`
    DeniedOther,
    /// Plot disallows untrusted visits and the actor lacks the admin override
    DeniedUntrusted,
    /// Actor is on the deny-list and lacks `visit.denied`
    DeniedExplicitBan,
}

impl AccessDecision {
    /// The node that would have unlocked this denial; None for `Allowed`
    pub fn required_node(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Allowed => None,
            AccessDecision::DeniedUnowned => Some(nodes::VISIT_UNOWNED),
            AccessDecision::DeniedOwned => Some(nodes::VISIT_OWNED),
            AccessDecision::DeniedShared => Some(nodes::VISIT_SHARED),
            AccessDecision::DeniedOther => Some(nodes::VISIT_OTHER),
            AccessDecision::DeniedUntrusted => Some(nodes::ADMIN_VISIT_UNTRUSTED),
            AccessDecision::DeniedExplicitBan => Some(nodes::VISIT_DENIED),
        }
    }

    /// True for the `Allowed` variant
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Evaluate whether `actor` may visit `plot`
///
/// Branch order:
/// 1. unowned plot: requires `visit.unowned`;
/// 2. actor owns the plot (directly or via merge): requires `visit.owned`
///    or `home`, either suffices;
/// 3. actor is a trusted member: requires `visit.shared`;
/// 4. anyone else: requires `visit.other`, then either the plot's
///    untrusted-visit flag or `admin.visit.untrusted`, and finally
///    `visit.denied` if the actor is on the plot's deny-list.
pub fn evaluate_access<A: VisitActor + ?Sized>(actor: &A, plot: &Plot) -> AccessDecision {
    if !plot.has_owner() {
        if !actor.has_permission_global(nodes::VISIT_UNOWNED) {
            return AccessDecision::DeniedUnowned;
        }
    } else if plot.is_owner(&actor.id()) {
        if !actor.has_permission_global(nodes::VISIT_OWNED)
            && !actor.has_permission_global(nodes::HOME)
        {
            return AccessDecision::DeniedOwned;
        }
    } else if plot.is_trusted(&actor.id()) {
        if !actor.has_permission_global(nodes::VISIT_SHARED) {
            return AccessDecision::DeniedShared;
        }
    } else {
        if !actor.has_permission_global(nodes::VISIT_OTHER) {
            return AccessDecision::DeniedOther;
        }
        if !plot.untrusted_visit_allowed()
            && !actor.has_permission_global(nodes::ADMIN_VISIT_UNTRUSTED)
        {
            return AccessDecision::DeniedUntrusted;
        }
        if plot.is_denied(&actor.id()) && !actor.has_permission_global(nodes::VISIT_DENIED) {
            return AccessDecision::DeniedExplicitBan;
        }
    }
    AccessDecision::Allowed
}
