//! Duel rules
//!
//! A duel is judged in two layers: a [`SpecialRule`] that may override the
//! result based on who is fighting, then [`compare_stats`] for everyone else.

use crate::combatant::{Combatant, Faction};

/// Courage lead that wins a duel outright
pub const COURAGE_MARGIN: i64 = 4;

/// Strength lead that wins a duel outright
pub const STRENGTH_MARGIN: i64 = 3;

/// Skill lead that wins a duel outright
pub const SKILL_MARGIN: i64 = 3;

/// Name of the Autobot legend
pub const OPTIMUS_PRIME: &str = "Optimus Prime";

/// Name of the Decepticon legend
pub const PREDAKING: &str = "Predaking";

/// Override produced by a special rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Both combatants and everyone else are destroyed; the battle ends
    Annihilation,
    /// The given faction takes the duel
    Victory(Faction),
}

/// Result of a single duel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelResult {
    Won(Faction),
    Tie,
}

/// Rule evaluated before the stat comparison.
///
/// Returning `None` hands the duel to [`compare_stats`].
pub trait SpecialRule {
    fn judge(&self, a: &Combatant, b: &Combatant) -> Option<Verdict>;
}

/// No overrides, every duel goes to the stat comparison
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpecialRule;

impl SpecialRule for NoSpecialRule {
    fn judge(&self, _a: &Combatant, _b: &Combatant) -> Option<Verdict> {
        None
    }
}

/// Named combatants who always win their duel.
///
/// Two different legends meeting destroys everything. Otherwise the first
/// legend in list order that appears on exactly one side wins for that side.
#[derive(Clone, Debug)]
pub struct LegendRule {
    legends: Vec<String>,
}

impl LegendRule {
    pub fn new<I, S>(legends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            legends: legends.into_iter().map(Into::into).collect(),
        }
    }

    pub fn legends(&self) -> &[String] {
        &self.legends
    }

    fn legend_of<'a>(&'a self, c: &Combatant) -> Option<&'a str> {
        self.legends
            .iter()
            .map(String::as_str)
            .find(|legend| c.is_named(legend))
    }
}

impl Default for LegendRule {
    fn default() -> Self {
        Self::new([OPTIMUS_PRIME, PREDAKING])
    }
}

impl SpecialRule for LegendRule {
    fn judge(&self, a: &Combatant, b: &Combatant) -> Option<Verdict> {
        if let (Some(la), Some(lb)) = (self.legend_of(a), self.legend_of(b)) {
            if la != lb {
                return Some(Verdict::Annihilation);
            }
        }

        for legend in &self.legends {
            match (a.is_named(legend), b.is_named(legend)) {
                (true, false) => return Some(Verdict::Victory(a.faction)),
                (false, true) => return Some(Verdict::Victory(b.faction)),
                _ => {}
            }
        }

        None
    }
}

/// Compare two combatants on stats alone.
///
/// Courage, strength and skill margins decide first, in favour of `a`
/// before `b`. Otherwise the higher overall rating wins; equal ratings tie.
pub fn compare_stats(a: &Combatant, b: &Combatant) -> DuelResult {
    let courage_diff = i64::from(a.courage) - i64::from(b.courage);
    let strength_diff = i64::from(a.strength) - i64::from(b.strength);
    let skill_diff = i64::from(a.skill) - i64::from(b.skill);

    if courage_diff >= COURAGE_MARGIN
        || strength_diff >= STRENGTH_MARGIN
        || skill_diff >= SKILL_MARGIN
    {
        return DuelResult::Won(a.faction);
    }

    if courage_diff <= -COURAGE_MARGIN
        || strength_diff <= -STRENGTH_MARGIN
        || skill_diff <= -SKILL_MARGIN
    {
        return DuelResult::Won(b.faction);
    }

    match a.overall_rating().cmp(&b.overall_rating()) {
        std::cmp::Ordering::Greater => DuelResult::Won(a.faction),
        std::cmp::Ordering::Less => DuelResult::Won(b.faction),
        std::cmp::Ordering::Equal => DuelResult::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autobot(name: &str, stats: [i32; 8]) -> Combatant {
        Combatant::new(1, name, stats, Faction::Autobot)
    }

    fn decepticon(name: &str, stats: [i32; 8]) -> Combatant {
        Combatant::new(2, name, stats, Faction::Decepticon)
    }

    #[test]
    fn test_legends_annihilate_either_side() {
        let rule = LegendRule::default();
        let optimus = autobot(OPTIMUS_PRIME, [10; 8]);
        let predaking = decepticon(PREDAKING, [10; 8]);
        assert_eq!(rule.judge(&optimus, &predaking), Some(Verdict::Annihilation));

        // Names count regardless of faction
        let evil_optimus = decepticon(OPTIMUS_PRIME, [1; 8]);
        let good_predaking = autobot(PREDAKING, [1; 8]);
        assert_eq!(
            rule.judge(&good_predaking, &evil_optimus),
            Some(Verdict::Annihilation)
        );
    }

    #[test]
    fn test_single_legend_wins() {
        let rule = LegendRule::default();
        let optimus = autobot(OPTIMUS_PRIME, [1; 8]);
        let brute = decepticon("Brute", [10; 8]);
        assert_eq!(
            rule.judge(&optimus, &brute),
            Some(Verdict::Victory(Faction::Autobot))
        );

        let predaking = decepticon(PREDAKING, [1; 8]);
        let hero = autobot("Hero", [10; 8]);
        assert_eq!(
            rule.judge(&hero, &predaking),
            Some(Verdict::Victory(Faction::Decepticon))
        );
    }

    #[test]
    fn test_same_legend_on_both_sides_is_no_override() {
        let rule = LegendRule::default();
        let a = autobot(OPTIMUS_PRIME, [5; 8]);
        let b = decepticon(OPTIMUS_PRIME, [5; 8]);
        assert_eq!(rule.judge(&a, &b), None);
    }

    #[test]
    fn test_names_match_exactly() {
        let rule = LegendRule::default();
        let a = autobot("optimus prime", [5; 8]);
        let b = decepticon("Predaking ", [5; 8]);
        assert_eq!(rule.judge(&a, &b), None);
    }

    #[test]
    fn test_no_special_rule() {
        let a = autobot(OPTIMUS_PRIME, [5; 8]);
        let b = decepticon(PREDAKING, [5; 8]);
        assert_eq!(NoSpecialRule.judge(&a, &b), None);
    }

    #[test]
    fn test_custom_legends() {
        let rule = LegendRule::new(["Unicron"]);
        let a = autobot("Hubcap", [5; 8]);
        let b = decepticon("Unicron", [1; 8]);
        assert_eq!(rule.judge(&a, &b), Some(Verdict::Victory(Faction::Decepticon)));
        assert_eq!(rule.legends(), ["Unicron".to_string()]);
    }

    #[test]
    fn test_margins_favour_a_first() {
        // a leads on courage by 4 but trails on strength by 3
        let a = autobot("A", [1, 5, 5, 5, 5, 9, 5, 5]);
        let b = decepticon("B", [4, 5, 5, 5, 5, 5, 5, 5]);
        assert_eq!(compare_stats(&a, &b), DuelResult::Won(Faction::Autobot));
    }

    #[test]
    fn test_margins_below_threshold_fall_through() {
        // courage +3, strength +2, skill +2: none reach their margin
        let a = autobot("A", [7, 5, 5, 5, 5, 8, 5, 7]);
        let b = decepticon("B", [5, 5, 5, 5, 5, 5, 9, 5]);
        // ratings: a = 7+5+5+5+5 = 27, b = 5+5+5+5+9 = 29
        assert_eq!(compare_stats(&a, &b), DuelResult::Won(Faction::Decepticon));
    }

    #[test]
    fn test_negative_margins() {
        let a = autobot("A", [5, 5, 5, 5, 5, 5, 5, 2]);
        let b = decepticon("B", [5, 5, 5, 5, 5, 5, 5, 5]);
        assert_eq!(compare_stats(&a, &b), DuelResult::Won(Faction::Decepticon));
    }

    #[test]
    fn test_equal_rating_ties() {
        let a = autobot("A", [4; 8]);
        let b = decepticon("B", [4; 8]);
        assert_eq!(compare_stats(&a, &b), DuelResult::Tie);
    }

    #[test]
    fn test_extreme_stats_do_not_overflow() {
        let a = autobot("A", [i32::MIN; 8]);
        let b = decepticon("B", [i32::MAX; 8]);
        assert_eq!(compare_stats(&a, &b), DuelResult::Won(Faction::Decepticon));
        assert_eq!(compare_stats(&b, &a), DuelResult::Won(Faction::Decepticon));
    }
}
