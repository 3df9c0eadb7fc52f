//! Roster - combatant lookup by id

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::battle::BattleResolver;
use crate::combatant::{Combatant, CombatantId, Faction};
use crate::error::RosterError;
use crate::report::BattleResponse;
use crate::rules::SpecialRule;

/// Resolves ids to combatants.
///
/// Unknown ids are dropped, never reported. Order of the result is not
/// part of the contract.
pub trait CombatantLookup {
    fn find_all_by_ids(&self, ids: &[CombatantId]) -> Vec<Combatant>;
}

/// In-memory set of combatants keyed by id
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: FxHashMap<CombatantId, Combatant>,
}

impl Roster {
    pub fn new(combatants: impl IntoIterator<Item = Combatant>) -> Result<Self, RosterError> {
        let mut map = FxHashMap::default();
        for c in combatants {
            let id = c.id;
            if map.insert(id, c).is_some() {
                return Err(RosterError::DuplicateId(id));
            }
        }
        Ok(Self { combatants: map })
    }

    /// The five transformers every deployment starts with
    pub fn reference() -> Self {
        let combatants = [
            Combatant::new(1, "Optimus Prime", [10, 9, 10, 9, 1, 9, 9, 10], Faction::Autobot),
            Combatant::new(2, "Predaking", [10, 9, 10, 9, 2, 9, 9, 10], Faction::Decepticon),
            Combatant::new(3, "Soundwave", [8, 9, 2, 6, 7, 5, 6, 10], Faction::Decepticon),
            Combatant::new(4, "Bluestreak", [6, 6, 7, 9, 5, 2, 9, 7], Faction::Autobot),
            Combatant::new(5, "Hubcap", [4, 4, 4, 4, 4, 4, 4, 4], Faction::Autobot),
        ];
        Self {
            combatants: combatants.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Load a JSON array of combatant records
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path.display().to_string())
    }

    /// Parse a JSON array of combatant records
    pub fn from_json(content: &str) -> Result<Self, RosterError> {
        Self::parse(content, "inline JSON".to_string())
    }

    fn parse(content: &str, origin: String) -> Result<Self, RosterError> {
        let combatants: Vec<Combatant> = serde_json::from_str(content)
            .map_err(|source| RosterError::Parse { origin, source })?;
        Self::new(combatants)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Every combatant, ordered by id
    pub fn all(&self) -> Vec<&Combatant> {
        let mut all: Vec<_> = self.combatants.values().collect();
        all.sort_by_key(|c| c.id);
        all
    }

    pub fn find_by_id(&self, id: CombatantId) -> Result<&Combatant, RosterError> {
        self.combatants.get(&id).ok_or(RosterError::NotFound(id))
    }
}

impl CombatantLookup for Roster {
    fn find_all_by_ids(&self, ids: &[CombatantId]) -> Vec<Combatant> {
        let mut found: Vec<Combatant> = self
            .combatants
            .values()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect();
        found.sort_by_key(|c| c.id);
        found
    }
}

/// Look up the requested ids and resolve a battle between whoever exists
pub fn battle_by_ids<L, R>(
    lookup: &L,
    resolver: &BattleResolver<R>,
    ids: &[CombatantId],
) -> BattleResponse
where
    L: CombatantLookup + ?Sized,
    R: SpecialRule,
{
    let combatants = lookup.find_all_by_ids(ids);
    tracing::debug!("Resolved {} of {} requested ids", combatants.len(), ids.len());
    resolver.resolve(&combatants).into()
}
