use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cq` binary.
#[derive(Debug, Parser)]
#[command(name = "cq", version, about = "cq - reading comprehension survey toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path`)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Username to act as
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Tie resolution for balancing and lineage: earliest, latest
    #[arg(long, global = true)]
    pub tie_break: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
            user: self.user.clone(),
            tie_break: self.tie_break.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{MilestoneCommands, TakeCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "cq", "--format", "raw", "--limit", "10", "--user", "alice", "take", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert!(matches!(
            cli.command,
            Commands::Take {
                action: TakeCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cq", "take", "suggestions", "tak-1", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Take {
                action: TakeCommands::Suggestions { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cq", "--format", "xml", "research", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn renew_collects_sentences_in_order() {
        let cli = Cli::try_parse_from([
            "cq",
            "milestone",
            "renew",
            "tak-1",
            "--sentence",
            "snt-3",
            "--sentence",
            "snt-1",
            "--sentence",
            "snt-3",
            "--found",
        ])
        .expect("cli should parse");

        let Commands::Milestone {
            action:
                MilestoneCommands::Renew {
                    take_id,
                    sentences,
                    found,
                },
        } = cli.command
        else {
            panic!("expected milestone renew");
        };
        assert_eq!(take_id, "tak-1");
        assert_eq!(sentences, ["snt-3", "snt-1", "snt-3"]);
        assert!(found);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["cq", "--db", "/tmp/cq.db", "research", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/cq.db"));
    }
}
