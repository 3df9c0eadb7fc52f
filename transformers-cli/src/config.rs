//! Shared CLI configuration
//!
//! Level 4 - Utilities and configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use transformers_core::Roster;

/// Options shared by every command
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Roster JSON file, or the reference roster when absent
    pub roster: Option<PathBuf>,
    /// Raise the default log level to debug
    pub verbose: bool,
}

impl CliConfig {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Initialize logging to stderr so stdout stays clean for reports
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_log_filter()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Load the configured roster
    pub fn load_roster(&self) -> Result<Roster> {
        match &self.roster {
            Some(path) => {
                let roster = Roster::load(path)
                    .with_context(|| format!("Failed to load roster: {}", path.display()))?;
                tracing::info!("Loaded {} transformers from {}", roster.len(), path.display());
                Ok(roster)
            }
            None => {
                tracing::debug!("Using reference roster");
                Ok(Roster::reference())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_reference_roster() {
        let config = CliConfig::default();
        let roster = config.load_roster().unwrap();
        assert_eq!(roster.len(), 5);
        assert_eq!(config.default_log_filter(), "warn");
    }

    #[test]
    fn test_verbose_log_filter() {
        let config = CliConfig {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.default_log_filter(), "debug");
    }

    #[test]
    fn test_missing_roster_file_errors() {
        let config = CliConfig {
            roster: Some(PathBuf::from("/nonexistent/roster.json")),
            ..Default::default()
        };
        let err = config.load_roster().unwrap_err();
        assert!(err.to_string().contains("Failed to load roster"));
    }
}
