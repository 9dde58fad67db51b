use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "perf-recap")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "AI-powered performance review summarizer",
    long_about = "perf-recap fetches your completed Linear issues for a date range, \
                  merges them with markdown performance docs you supply, and asks \
                  Gemini for a professionally formatted review summary."
)]
pub struct Cli {
    /// Start date of the review period (YYYY-MM-DD format)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// End date of the review period (YYYY-MM-DD format)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Number of days to look back (alternative to --since/--until)
    #[arg(short, long, value_name = "DAYS")]
    pub days: Option<u32>,

    /// Markdown performance doc or directory of docs (repeatable)
    #[arg(long = "doc", value_name = "PATH")]
    pub docs: Vec<PathBuf>,

    /// Path to config file (default: ~/.config/perf-recap/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the recap to a file (markdown format; implies --non-interactive,
    /// so docs come from --doc flags only)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the recap as HTML instead of markdown
    #[arg(long)]
    pub html: bool,

    /// Copy the recap to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Run in non-interactive mode (no prompts; flags only)
    #[arg(long)]
    pub non_interactive: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration
    Config,
}

impl Cli {
    /// Check if the CLI is in non-interactive mode
    pub fn is_non_interactive(&self) -> bool {
        self.non_interactive || self.output.is_some() || self.command.is_some()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> Result<(), String> {
        // Can't specify both --days and --since/--until
        if self.days.is_some() && (self.since.is_some() || self.until.is_some()) {
            return Err(
                "Cannot specify both --days and --since/--until. Choose one.".to_string(),
            );
        }

        // A period needs both ends
        if self.since.is_some() != self.until.is_some() {
            return Err("Please select a period: --since and --until must be given together."
                .to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::parse_from(vec!["perf-recap"]);
        assert!(cli.since.is_none());
        assert!(cli.docs.is_empty());
        assert!(cli.command.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from(vec![
            "perf-recap",
            "--since",
            "2025-01-01",
            "--until",
            "2025-01-31",
            "--doc",
            "notes.md",
            "--doc",
            "reviews/",
            "--output",
            "recap.md",
        ]);
        assert_eq!(cli.since, Some("2025-01-01".to_string()));
        assert_eq!(cli.until, Some("2025-01-31".to_string()));
        assert_eq!(cli.docs.len(), 2);
        assert!(cli.is_non_interactive());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_output_implies_non_interactive() {
        let cli = Cli::parse_from(vec!["perf-recap", "--output", "recap.md"]);
        assert!(cli.is_non_interactive());

        let cli = Cli::parse_from(vec!["perf-recap"]);
        assert!(!cli.is_non_interactive());
    }

    #[test]
    fn test_cli_init_command() {
        let cli = Cli::parse_from(vec!["perf-recap", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init { force: false })));
    }

    #[test]
    fn test_cli_validation_days_and_since() {
        let cli = Cli::parse_from(vec!["perf-recap", "--days", "30", "--since", "2025-01-01"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_validation_since_without_until() {
        let cli = Cli::parse_from(vec!["perf-recap", "--since", "2025-01-01"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(vec!["perf-recap", "--until", "2025-01-31"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_days_alone_ok() {
        let cli = Cli::parse_from(vec!["perf-recap", "--days", "14"]);
        assert_eq!(cli.days, Some(14));
        assert!(cli.validate().is_ok());
    }
}
