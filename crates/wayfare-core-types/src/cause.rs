//! The reason for an internal player teleport
//!
//! Cause groups are explicit set literals built once at first use.
//! Grouping by enum declaration order is deliberately avoided: it breaks
//! silently when variants are reordered.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The reason a relocation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeleportCause {
    Command,
    CommandAreaCreate,
    CommandAreaTeleport,
    CommandAuto,
    CommandClaim,
    CommandClear,
    CommandClusterTeleport,
    CommandDelete,
    CommandHome,
    CommandMiddle,
    CommandSetup,
    CommandVisit,
    Death,
    Denied,
    Kick,
    Login,
    Plugin,
    Unknown,
}

static COMMAND_CAUSES: LazyLock<HashSet<TeleportCause>> = LazyLock::new(|| {
    HashSet::from([
        TeleportCause::Command,
        TeleportCause::CommandAreaCreate,
        TeleportCause::CommandAreaTeleport,
        TeleportCause::CommandAuto,
        TeleportCause::CommandClaim,
        TeleportCause::CommandClear,
        TeleportCause::CommandClusterTeleport,
        TeleportCause::CommandDelete,
        TeleportCause::CommandHome,
        TeleportCause::CommandMiddle,
        TeleportCause::CommandSetup,
        TeleportCause::CommandVisit,
    ])
});

static PLUGIN_CAUSES: LazyLock<HashSet<TeleportCause>> = LazyLock::new(|| {
    HashSet::from([
        TeleportCause::Death,
        TeleportCause::Denied,
        TeleportCause::Kick,
        TeleportCause::Login,
        TeleportCause::Plugin,
    ])
});

impl TeleportCause {
    /// True if this cause originates from a player-issued command
    pub fn is_command(&self) -> bool {
        COMMAND_CAUSES.contains(self)
    }

    /// True if this cause originates from plugin/system behaviour
    pub fn is_plugin(&self) -> bool {
        PLUGIN_CAUSES.contains(self)
    }
}
