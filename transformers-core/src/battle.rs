//! Battle resolution
//!
//! Teams are sorted by ascending rank and paired index by index. Members
//! of the larger team beyond the smaller team's size never fight; if their
//! team loses they are reported as survivors.

use crate::combatant::{Combatant, Faction};
use crate::error::{BattleError, MIN_COMBATANTS};
use crate::report::{format_survivors, BattleReport, Outcome, NO_SURVIVORS};
use crate::rules::{compare_stats, DuelResult, LegendRule, SpecialRule, Verdict};

// ============================================================================
// TYPES
// ============================================================================

/// Both sides of a battle, each in ascending rank order
#[derive(Clone, Debug)]
pub struct Teams<'a> {
    pub autobots: Vec<&'a Combatant>,
    pub decepticons: Vec<&'a Combatant>,
}

impl<'a> Teams<'a> {
    /// Split combatants by faction and stable-sort each side by rank
    pub fn partition(combatants: &'a [Combatant]) -> Self {
        let (mut autobots, mut decepticons): (Vec<&Combatant>, Vec<&Combatant>) = combatants
            .iter()
            .partition(|c| c.faction == Faction::Autobot);

        autobots.sort_by_key(|c| c.rank);
        decepticons.sort_by_key(|c| c.rank);

        Self { autobots, decepticons }
    }

    pub fn side(&self, faction: Faction) -> &[&'a Combatant] {
        match faction {
            Faction::Autobot => &self.autobots,
            Faction::Decepticon => &self.decepticons,
        }
    }

    /// Number of duels that can be paired
    pub fn pair_count(&self) -> usize {
        self.autobots.len().min(self.decepticons.len())
    }
}

/// Running totals for one battle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub battles: u32,
    pub autobot_wins: u32,
    pub decepticon_wins: u32,
    pub destroyed: bool,
}

impl Tally {
    fn record(&mut self, result: DuelResult) {
        match result {
            DuelResult::Won(Faction::Autobot) => self.autobot_wins += 1,
            DuelResult::Won(Faction::Decepticon) => self.decepticon_wins += 1,
            DuelResult::Tie => {}
        }
        self.battles += 1;
    }

    fn annihilate(&mut self) {
        self.destroyed = true;
        self.battles += 1;
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves battles using a special rule layered over the stat comparison
#[derive(Clone, Debug, Default)]
pub struct BattleResolver<R = LegendRule> {
    rule: R,
}

impl BattleResolver<LegendRule> {
    /// Resolver with the standard legends
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: SpecialRule> BattleResolver<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Resolve a battle between the given combatants.
    ///
    /// Fails only when fewer than two combatants are supplied. A battle
    /// where one faction is empty still produces a report.
    pub fn resolve(&self, combatants: &[Combatant]) -> Result<BattleReport, BattleError> {
        if combatants.len() < MIN_COMBATANTS {
            return Err(BattleError::InsufficientCombatants {
                resolved: combatants.len(),
            });
        }

        let teams = Teams::partition(combatants);
        let tally = self.fight(&teams);
        let outcome = determine_outcome(&tally, &teams);
        let survivors = collect_survivors(&outcome, &teams);

        tracing::info!(
            battles = tally.battles,
            autobot_wins = tally.autobot_wins,
            decepticon_wins = tally.decepticon_wins,
            destroyed = tally.destroyed,
            "Battle resolved: {}",
            outcome.description()
        );

        Ok(BattleReport::new(outcome, tally.battles, survivors))
    }

    /// Run every paired duel, stopping early on annihilation
    pub fn fight(&self, teams: &Teams<'_>) -> Tally {
        let mut tally = Tally::default();

        for i in 0..teams.pair_count() {
            let (a, b) = (teams.autobots[i], teams.decepticons[i]);
            match self.rule.judge(a, b) {
                Some(Verdict::Annihilation) => {
                    tracing::debug!("{} vs {}: everyone destroyed", a.name, b.name);
                    tally.annihilate();
                    break;
                }
                Some(Verdict::Victory(faction)) => {
                    tracing::debug!("{} vs {}: {:?} by special rule", a.name, b.name, faction);
                    tally.record(DuelResult::Won(faction));
                }
                None => {
                    let result = compare_stats(a, b);
                    tracing::debug!("{} vs {}: {:?}", a.name, b.name, result);
                    tally.record(result);
                }
            }
        }

        tally
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Highest overall rating on a team. The earliest member wins ties.
pub fn best_member<'a>(team: &[&'a Combatant]) -> Option<&'a Combatant> {
    team.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.overall_rating() >= c.overall_rating() => Some(b),
        _ => Some(c),
    })
}

fn victory(faction: Faction, champion: &Combatant) -> Outcome {
    Outcome::Victory {
        faction,
        champion: champion.name.clone(),
    }
}

/// Decide the winner from the tally
pub fn determine_outcome(tally: &Tally, teams: &Teams<'_>) -> Outcome {
    if tally.destroyed {
        return Outcome::Destroyed;
    }
    if tally.battles == 0 {
        return Outcome::NoBattles;
    }

    let (best_a, best_b) = match (best_member(&teams.autobots), best_member(&teams.decepticons)) {
        (Some(a), Some(b)) => (a, b),
        // Unreachable once a duel was fought, both teams have members
        _ => return Outcome::Draw,
    };

    match tally.autobot_wins.cmp(&tally.decepticon_wins) {
        std::cmp::Ordering::Greater => victory(Faction::Autobot, best_a),
        std::cmp::Ordering::Less => victory(Faction::Decepticon, best_b),
        std::cmp::Ordering::Equal => match best_a.overall_rating().cmp(&best_b.overall_rating()) {
            std::cmp::Ordering::Greater => victory(Faction::Autobot, best_a),
            std::cmp::Ordering::Less => victory(Faction::Decepticon, best_b),
            std::cmp::Ordering::Equal => Outcome::Draw,
        },
    }
}

/// Members of the losing team who were never paired.
///
/// Only a losing team larger than the winning team has survivors.
pub fn collect_survivors(outcome: &Outcome, teams: &Teams<'_>) -> String {
    let Some(winner) = outcome.winning_faction() else {
        return NO_SURVIVORS.to_string();
    };

    let loser = winner.opponent();
    let winning_side = teams.side(winner);
    let losing_side = teams.side(loser);

    if losing_side.len() <= winning_side.len() {
        return NO_SURVIVORS.to_string();
    }

    format_survivors(
        loser,
        losing_side[winning_side.len()..].iter().map(|c| c.name.as_str()),
    )
}

/// Resolve with the standard legends
pub fn resolve_battle(combatants: &[Combatant]) -> Result<BattleReport, BattleError> {
    BattleResolver::new().resolve(combatants)
}

// ============================================================================
// TESTS
// ============================================================================
