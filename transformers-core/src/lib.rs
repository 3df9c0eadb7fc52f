//! Transformers Core - Battle engine
//!
//! This crate provides the battle logic for the transformers roster:
//! - Combatants, factions and overall rating
//! - Roster lookup by id
//! - Special-rule and stat-based duel judging
//! - Battle resolution with winner and survivor reporting

pub mod battle;
pub mod combatant;
pub mod error;
pub mod report;
pub mod roster;
pub mod rules;

// Re-exports for convenient access
pub use battle::{resolve_battle, BattleResolver, Tally, Teams};
pub use combatant::{Combatant, CombatantId, Faction};
pub use error::{BattleError, RosterError, MIN_COMBATANTS};
pub use report::{BattleReport, BattleResponse, ErrorPayload, Outcome};
pub use roster::{battle_by_ids, CombatantLookup, Roster};
pub use rules::{compare_stats, DuelResult, LegendRule, NoSpecialRule, SpecialRule, Verdict};
