//! Battle command - resolve a battle between transformers by id
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve(), report_response()
//! - Level 3: (delegated to transformers-core)
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;

use transformers_core::{
    battle_by_ids, BattleResolver, BattleResponse, CombatantId, NoSpecialRule, Roster,
};

use crate::config::CliConfig;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BattleArgs {
    /// Ids of the transformers to send into battle (unknown ids are ignored)
    #[arg(value_name = "ID")]
    pub ids: Vec<CombatantId>,

    /// Disable the Optimus Prime / Predaking rule
    #[arg(long)]
    pub no_legends: bool,

    /// Output the response as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run battle command
///
/// 1. Load the roster
/// 2. Resolve the battle
/// 3. Report the response
pub fn run(args: BattleArgs, config: &CliConfig) -> Result<()> {
    let roster = config.load_roster()?;

    tracing::info!("Battle requested for ids {:?}", args.ids);

    let response = resolve(&roster, &args);
    report_response(&response, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolve the battle with or without the legend rule
fn resolve(roster: &Roster, args: &BattleArgs) -> BattleResponse {
    if args.no_legends {
        battle_by_ids(roster, &BattleResolver::with_rule(NoSpecialRule), &args.ids)
    } else {
        battle_by_ids(roster, &BattleResolver::new(), &args.ids)
    }
}

/// Print the response
fn report_response(response: &BattleResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", format_text_response(response));
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_text_response(response: &BattleResponse) -> String {
    match response {
        BattleResponse::Report(report) => format!(
            "=== Battle Report ===\nWinner:            {}\nNumber of battles: {}\nSurvivors:         {}",
            report.winner, report.number_of_battles, report.survivors
        ),
        BattleResponse::Error(payload) => format!("Error: {}", payload.error),
    }
}

// ============================================================================
// TESTS
// ============================================================================
