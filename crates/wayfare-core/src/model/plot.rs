use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wayfare_core_types::{AreaId, PlayerId, PlotId};

/// Flag key controlling whether untrusted players may visit
pub const UNTRUSTED_VISIT_FLAG: &str = "untrusted-visit";

/// Plot - a claimable unit of space within exactly one area
///
/// A plot has at most one owner, a set of trusted members, a deny-list,
/// and a key/value flag map. Merged plot clusters are represented by their
/// base plot; merge co-owners are recorded on every member of the cluster.
///
/// The engine only reads plots: ownership, membership and flags are owned
/// by the external storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Coordinate identity within the enclosing area
    pub id: PlotId,

    /// The area this plot belongs to
    pub area: AreaId,

    /// Owner identity; unowned plots exist
    pub owner: Option<PlayerId>,

    /// Identities trusted on this plot
    pub trusted: HashSet<PlayerId>,

    /// Identities denied on this plot
    pub denied: HashSet<PlayerId>,

    /// Key/value flags
    pub flags: HashMap<String, String>,

    /// Optional human-chosen alternate name (not necessarily unique)
    pub alias: Option<String>,

    /// When this plot was claimed, for area-relative creation ordering
    pub created_at: DateTime<Utc>,

    /// Global insertion index across all areas, for the global sort order
    pub temp_index: u64,

    /// True if this plot is the canonical representative of its merge group
    pub base: bool,

    /// Identities that co-own this plot through a merge relationship
    pub merged_owners: HashSet<PlayerId>,
}

impl Plot {
    /// Create an unowned plot with defaults (base, no flags, no alias)
    pub fn new(id: PlotId, area: AreaId, temp_index: u64) -> Self {
        Self {
            id,
            area,
            owner: None,
            trusted: HashSet::new(),
            denied: HashSet::new(),
            flags: HashMap::new(),
            alias: None,
            created_at: Utc::now(),
            temp_index,
            base: true,
            merged_owners: HashSet::new(),
        }
    }

    /// Check if this plot has an owner
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    /// Check if the given identity owns this plot, directly or through a merge
    pub fn is_owner(&self, player: &PlayerId) -> bool {
        self.owner.as_ref() == Some(player) || self.merged_owners.contains(player)
    }

    /// Check if the given identity is a trusted member
    pub fn is_trusted(&self, player: &PlayerId) -> bool {
        self.trusted.contains(player)
    }

    /// Check if the given identity is on the deny-list
    pub fn is_denied(&self, player: &PlayerId) -> bool {
        self.denied.contains(player)
    }

    /// Whether untrusted players may visit this plot
    ///
    /// Reads the `untrusted-visit` flag; absent or unparseable values
    /// default to true (visits allowed).
    pub fn untrusted_visit_allowed(&self) -> bool {
        self.flags
            .get(UNTRUSTED_VISIT_FLAG)
            .map_or(true, |v| v != "false")
    }
}
