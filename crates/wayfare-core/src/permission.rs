//! Permission holder abstraction and hierarchical range evaluation
//!
//! Any object which can hold permissions implements [`PermissionHolder`].
//! The primitive is a single scoped `has_permission` check supplied by the
//! external permission backend; everything else (keyed permissions, the
//! wildcard-aware range scan) is derived from it here.

use std::collections::{HashMap, HashSet};

use wayfare_core_types::{AreaId, PlayerId};

/// Permission node vocabulary consumed by the visitation gate
pub mod nodes {
    /// Global admin override: unlocks everything, including full range access
    pub const ADMIN: &str = "admin";
    /// Visit a plot nobody owns
    pub const VISIT_UNOWNED: &str = "visit.unowned";
    /// Visit a plot the actor owns
    pub const VISIT_OWNED: &str = "visit.owned";
    /// General home permission; also suffices for visiting an owned plot
    pub const HOME: &str = "home";
    /// Visit a plot the actor is trusted on
    pub const VISIT_SHARED: &str = "visit.shared";
    /// Visit a plot the actor has no relationship with
    pub const VISIT_OTHER: &str = "visit.other";
    /// Override a plot's disabled untrusted-visit flag
    pub const ADMIN_VISIT_UNTRUSTED: &str = "admin.visit.untrusted";
    /// Visit a plot the actor is denied on
    pub const VISIT_DENIED: &str = "visit.denied";
    /// Wildcard suffix granting every node under a prefix
    pub const STAR: &str = "*";
}

/// Any object which can hold permissions
pub trait PermissionHolder {
    /// Check if the holder has a given permission, optionally scoped
    fn has_permission(&self, scope: Option<&str>, node: &str) -> bool;

    /// Check if the holder has a given global permission
    fn has_permission_global(&self, node: &str) -> bool {
        self.has_permission(None, node)
    }

    /// Check if the holder has a given keyed permission
    ///
    /// Checks both `node.key` and `node.*`.
    fn has_keyed_permission(&self, scope: Option<&str>, node: &str, key: &str) -> bool {
        self.has_permission(scope, &format!("{node}.{key}"))
            || self.has_permission(scope, &format!("{node}.{}", nodes::STAR))
    }

    /// Check the highest rank the holder has under `stub` within `max_range`
    ///
    /// The scan honours, in order:
    /// 1. the global admin node (unbounded: returns `u32::MAX`);
    /// 2. a wildcard at any ancestor prefix of `stub` (unbounded), skipping
    ///    the degenerate case where the candidate wildcard string equals
    ///    `stub` itself;
    /// 3. `stub.*` (unbounded);
    /// 4. explicit `stub.<i>` grants scanned from `max_range` down to 1,
    ///    so the highest explicit grant wins.
    ///
    /// Returns 0 if nothing matched. Excessively high `max_range` values
    /// make the explicit scan proportionally expensive.
    fn permission_range(&self, stub: &str, max_range: u32) -> u32 {
        if self.has_permission_global(nodes::ADMIN) {
            return u32::MAX;
        }
        let segments: Vec<&str> = stub.split('.').collect();
        let mut prefix = String::new();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            prefix.push_str(segment);
            prefix.push('.');
            let wildcard = format!("{prefix}{}", nodes::STAR);
            if wildcard != stub && self.has_permission_global(&wildcard) {
                return u32::MAX;
            }
        }
        if self.has_permission_global(&format!("{stub}.{}", nodes::STAR)) {
            return u32::MAX;
        }
        for i in (1..=max_range).rev() {
            if self.has_permission_global(&format!("{stub}.{i}")) {
                return i;
            }
        }
        0
    }
}

/// The entity requesting a visit
///
/// Immutable for the duration of one resolution: identity, held grants and
/// the applicable area are read once and never mutated by the engine.
pub trait VisitActor: PermissionHolder {
    /// Stable identity of the actor
    fn id(&self) -> PlayerId;

    /// The area the actor is currently in, if any
    fn current_area(&self) -> Option<&AreaId>;
}

/// A concrete set-backed permission holder
///
/// Useful for embedders without an external permission backend, and as the
/// grant store of [`Actor`]. Scoped grants only apply within their scope;
/// global grants apply everywhere.
#[derive(Debug, Clone, Default)]
pub struct GrantSet {
    global: HashSet<String>,
    scoped: HashMap<String, HashSet<String>>,
}

impl GrantSet {
    /// Create an empty grant set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a global grant
    pub fn grant(&mut self, node: impl Into<String>) -> &mut Self {
        self.global.insert(node.into());
        self
    }

    /// Add a grant limited to one scope
    pub fn grant_scoped(&mut self, scope: impl Into<String>, node: impl Into<String>) -> &mut Self {
        self.scoped
            .entry(scope.into())
            .or_default()
            .insert(node.into());
        self
    }

    /// Build a grant set from an iterator of global nodes
    pub fn from_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for node in nodes {
            set.grant(node);
        }
        set
    }
}

impl PermissionHolder for GrantSet {
    fn has_permission(&self, scope: Option<&str>, node: &str) -> bool {
        if self.global.contains(node) {
            return true;
        }
        match scope {
            Some(scope) => self
                .scoped
                .get(scope)
                .is_some_and(|grants| grants.contains(node)),
            None => false,
        }
    }
}

/// A concrete actor: identity plus grant set plus current area
#[derive(Debug, Clone)]
pub struct Actor {
    id: PlayerId,
    grants: GrantSet,
    area: Option<AreaId>,
}

impl Actor {
    pub fn new(id: PlayerId, grants: GrantSet, area: Option<AreaId>) -> Self {
        Self { id, grants, area }
    }
}

impl PermissionHolder for Actor {
    fn has_permission(&self, scope: Option<&str>, node: &str) -> bool {
        self.grants.has_permission(scope, node)
    }
}

impl VisitActor for Actor {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn current_area(&self) -> Option<&AreaId> {
        self.area.as_ref()
    }
}
