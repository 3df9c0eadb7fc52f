//! Error types

use std::path::PathBuf;

use crate::combatant::CombatantId;

/// Minimum number of resolved combatants for a battle
pub const MIN_COMBATANTS: usize = 2;

/// Errors raised by the battle resolver
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("2 or more valid ids required")]
    InsufficientCombatants { resolved: usize },
}

/// Errors raised by roster construction and lookup
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Could not find transformer with ID {0}")]
    NotFound(CombatantId),

    #[error("Duplicate transformer ID {0}")]
    DuplicateId(CombatantId),

    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `origin` is the file path, or "inline JSON" for in-memory content
    #[error("Failed to parse roster {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
