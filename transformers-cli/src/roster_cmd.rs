//! Roster commands - list and show transformers

use anyhow::Result;
use clap::Args;

use transformers_core::{Combatant, CombatantId};

use crate::config::CliConfig;

#[derive(Args)]
pub struct ListArgs {
    /// Output the roster as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Transformer id
    pub id: CombatantId,

    /// Output the transformer as JSON
    #[arg(long)]
    pub json: bool,
}

/// List every transformer in the roster, ordered by id
pub fn list(args: ListArgs, config: &CliConfig) -> Result<()> {
    let roster = config.load_roster()?;
    let all = roster.all();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    println!("{}", table_header());
    for c in all {
        println!("{}", table_row(c));
    }
    Ok(())
}

/// Show a single transformer
pub fn show(args: ShowArgs, config: &CliConfig) -> Result<()> {
    let roster = config.load_roster()?;
    let combatant = roster.find_by_id(args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(combatant)?);
    } else {
        println!("{}", format_details(combatant));
    }
    Ok(())
}

fn table_header() -> String {
    format!(
        "{:>4}  {:<20} {:<11} {:>4} {:>6}",
        "ID", "NAME", "FACTION", "RANK", "RATING"
    )
}

fn table_row(c: &Combatant) -> String {
    format!(
        "{:>4}  {:<20} {:<11} {:>4} {:>6}",
        c.id,
        c.name,
        format!("{:?}", c.faction),
        c.rank,
        c.overall_rating()
    )
}

fn format_details(c: &Combatant) -> String {
    format!(
        "{} (#{}, {:?})\n  strength {}  intelligence {}  speed {}  endurance {}\n  rank {}  courage {}  firepower {}  skill {}\n  overall rating {}",
        c.name,
        c.id,
        c.faction,
        c.strength,
        c.intelligence,
        c.speed,
        c.endurance,
        c.rank,
        c.courage,
        c.firepower,
        c.skill,
        c.overall_rating()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use transformers_core::Roster;

    #[test]
    fn test_table_row() {
        let roster = Roster::reference();
        let row = table_row(roster.find_by_id(4).unwrap());
        assert!(row.contains("Bluestreak"));
        assert!(row.contains("Autobot"));
        assert!(row.trim_end().ends_with("37"));
    }

    #[test]
    fn test_details() {
        let roster = Roster::reference();
        let text = format_details(roster.find_by_id(3).unwrap());
        assert!(text.starts_with("Soundwave (#3, Decepticon)"));
        assert!(text.contains("overall rating 31"));
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let args = ShowArgs { id: 10, json: false };
        let err = show(args, &CliConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Could not find transformer with ID 10");
    }
}
