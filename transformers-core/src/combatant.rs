//! Combatant and faction definitions

use serde::{Deserialize, Serialize};

/// Roster identifier
pub type CombatantId = i32;

/// Side a combatant fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Faction {
    Autobot,
    Decepticon,
}

impl Faction {
    pub fn opponent(self) -> Self {
        match self {
            Faction::Autobot => Faction::Decepticon,
            Faction::Decepticon => Faction::Autobot,
        }
    }

    /// Team label used in report text
    pub fn team_label(self) -> &'static str {
        match self {
            Faction::Autobot => "AUTOBOTS",
            Faction::Decepticon => "DECEPTICONS",
        }
    }
}

/// A transformer eligible to fight.
///
/// Stats are expected in `1..=10` but nothing here relies on it; derived
/// values are computed in `i64` so any `i32` input stays well-defined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub strength: i32,
    pub intelligence: i32,
    pub speed: i32,
    pub endurance: i32,
    pub rank: i32,
    pub courage: i32,
    pub firepower: i32,
    pub skill: i32,
    #[serde(rename = "type")]
    pub faction: Faction,
}

impl Combatant {
    /// Build a combatant from stats given in
    /// strength, intelligence, speed, endurance, rank, courage, firepower, skill order.
    pub fn new(id: CombatantId, name: &str, stats: [i32; 8], faction: Faction) -> Self {
        let [strength, intelligence, speed, endurance, rank, courage, firepower, skill] = stats;
        Self {
            id,
            name: name.to_string(),
            strength,
            intelligence,
            speed,
            endurance,
            rank,
            courage,
            firepower,
            skill,
            faction,
        }
    }

    /// Strength + intelligence + speed + endurance + firepower.
    /// Rank, courage and skill do not count.
    pub fn overall_rating(&self) -> i64 {
        i64::from(self.strength)
            + i64::from(self.intelligence)
            + i64::from(self.speed)
            + i64::from(self.endurance)
            + i64::from(self.firepower)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
