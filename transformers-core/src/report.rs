//! Battle report and response envelope

use serde::Serialize;

use crate::combatant::Faction;
use crate::error::BattleError;

pub const EVERYONE_DESTROYED: &str = "Everyone was destroyed";
pub const NO_BATTLES_FOUGHT: &str = "No battles fought";
pub const EQUAL_MATCHES: &str = "Equal matches won by both teams";
pub const NO_SURVIVORS: &str = "No survivors";

/// How a battle ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Legends met and nobody is left
    Destroyed,
    /// One faction had no members to pair
    NoBattles,
    /// Equal wins and no rating tiebreak
    Draw,
    /// A faction won, represented by its highest-rated member
    Victory { faction: Faction, champion: String },
}

impl Outcome {
    pub fn winning_faction(&self) -> Option<Faction> {
        match self {
            Outcome::Victory { faction, .. } => Some(*faction),
            _ => None,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Outcome::Destroyed => EVERYONE_DESTROYED.to_string(),
            Outcome::NoBattles => NO_BATTLES_FOUGHT.to_string(),
            Outcome::Draw => EQUAL_MATCHES.to_string(),
            Outcome::Victory { faction, champion } => {
                format!("Winning team ({}) : {}", faction.team_label(), champion)
            }
        }
    }
}

/// Result of a resolved battle.
///
/// Serializes to the three string fields consumers expect; the typed
/// outcome is kept for callers in-process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    #[serde(rename = "Winner")]
    pub winner: String,
    #[serde(rename = "NumberOfBattles")]
    pub number_of_battles: String,
    #[serde(rename = "Survivors")]
    pub survivors: String,
    #[serde(skip)]
    pub outcome: Outcome,
}

impl BattleReport {
    pub fn new(outcome: Outcome, battles: u32, survivors: String) -> Self {
        Self {
            winner: outcome.description(),
            number_of_battles: format_battle_count(battles),
            survivors,
            outcome,
        }
    }
}

/// Battle count text. Always the singular "battle".
pub fn format_battle_count(battles: u32) -> String {
    format!("{} battle", battles)
}

/// Survivor text for the tail of a losing team
pub fn format_survivors<'a, I>(faction: Faction, names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = format!("Survivors from losing team ({}): ", faction.team_label());
    for name in names {
        text.push_str(name);
        text.push(' ');
    }
    text.trim().to_string()
}

/// Single-field payload returned instead of a report
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "Error")]
    pub error: String,
}

/// What the battle entry point hands back: a report or an error payload
/// in the same envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BattleResponse {
    Report(BattleReport),
    Error(ErrorPayload),
}

impl BattleResponse {
    pub fn report(&self) -> Option<&BattleReport> {
        match self {
            BattleResponse::Report(report) => Some(report),
            BattleResponse::Error(_) => None,
        }
    }
}

impl From<Result<BattleReport, BattleError>> for BattleResponse {
    fn from(result: Result<BattleReport, BattleError>) -> Self {
        match result {
            Ok(report) => BattleResponse::Report(report),
            Err(err) => BattleResponse::Error(ErrorPayload {
                error: err.to_string(),
            }),
        }
    }
}
