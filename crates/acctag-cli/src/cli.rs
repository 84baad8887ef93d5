//! Command-line arguments for the `acctag` binary.

use acctag::PriorityClass;
use clap::{Args, Parser, Subcommand};

use crate::config::LogLevel;

/// Standardize, classify, expand and transfer accumulator tags.
#[derive(Parser, Debug)]
#[command(name = "acctag", author, version, about)]
pub struct Cli {
    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported tag operations.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reduce each tag to its canonical form.
    Standardize(TagsArgs),
    /// Show the priority class of each tag and the classes it contains.
    Classify(TagsArgs),
    /// Show the long form of each tag with a slot per priority class.
    Expand(ExpandArgs),
    /// Move the substitutable modifiers of SOURCE onto each TARGET.
    Transfer(TransferArgs),
    /// List the identity rules in the order they are tried.
    Rules,
}

/// Tag expressions given as positional arguments.
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Tag expressions such as `Central<Coord<Mean>>`.
    #[arg(required = true, value_name = "EXPR")]
    pub tags: Vec<String>,
}

/// Arguments of the `expand` command.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Tag expressions such as `Coord<Mean>`.
    #[arg(required = true, value_name = "EXPR")]
    pub tags: Vec<String>,
    /// Start the long form at this priority class instead of access-data.
    #[arg(long, value_name = "CLASS")]
    pub from: Option<PriorityClass>,
}

/// Arguments of the `transfer` command.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Tag whose modifiers are moved.
    #[arg(value_name = "SOURCE")]
    pub source: String,
    /// Tags receiving the modifiers.
    #[arg(required = true, value_name = "TARGET")]
    pub targets: Vec<String>,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests panic on unexpected parse failures")]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "acctag",
            "standardize",
            "Mean",
            "Variance",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        let Commands::Standardize(args) = cli.command else {
            panic!("expected the standardize command");
        };
        assert_eq!(args.tags, ["Mean", "Variance"]);
    }

    #[rstest]
    #[case("prepare-data", PriorityClass::PrepareData)]
    #[case("Normalize", PriorityClass::Normalize)]
    fn expand_accepts_a_start_class(#[case] text: &str, #[case] expected: PriorityClass) {
        let cli = Cli::try_parse_from(["acctag", "expand", "Mean", "--from", text]).unwrap();
        let Commands::Expand(args) = cli.command else {
            panic!("expected the expand command");
        };
        assert_eq!(args.from, Some(expected));
    }

    #[rstest]
    #[case(&["acctag", "standardize"])]
    #[case(&["acctag", "transfer", "Coord<Mean>"])]
    #[case(&["acctag", "expand", "Mean", "--from", "sideways"])]
    #[case(&["acctag", "rules", "--log-level", "loud"])]
    fn rejects_incomplete_or_invalid_arguments(#[case] argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
