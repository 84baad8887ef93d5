//! Error types for the command-line front end.
//!
//! Configuration problems abort the run before any command executes. Tag
//! failures are reported per input and never stop the remaining inputs.

use acctag::{GrammarError, PriorityClass, TagParseError};
use thiserror::Error;

/// Errors raised by the `acctag` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tag argument could not be parsed.
    #[error("cannot parse `{input}`: {source}")]
    Parse {
        /// The argument as given on the command line.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: TagParseError,
    },

    /// A tag argument parsed but has no canonical form.
    #[error("cannot standardize `{input}`: {source}")]
    Grammar {
        /// The argument as given on the command line.
        input: String,
        /// The underlying rewriting failure.
        #[source]
        source: GrammarError,
    },

    /// A long form was requested from a class above the tag's own class.
    #[error("cannot expand `{input}` from {start}: it carries {class} modifiers")]
    BelowStart {
        /// The argument as given on the command line.
        input: String,
        /// The requested first class of the long form.
        start: PriorityClass,
        /// The class of the tag's outermost modifier.
        class: PriorityClass,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctag::{Symbol, Tag};
    use std::error::Error as _;

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown log level".to_string());
        assert_eq!(error.to_string(), "invalid configuration: unknown log level");
    }

    #[test]
    fn parse_error_names_the_input() {
        let error = CliError::Parse {
            input: "Median".into(),
            source: TagParseError::new("unknown tag name", 0, Some("Median".into())),
        };
        assert_eq!(
            error.to_string(),
            "cannot parse `Median`: unknown tag name for `Median` at byte 0 (zero-based)"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn grammar_error_names_the_input() {
        let tag = Tag::central(Tag::principal(Symbol::SUM));
        let error = CliError::Grammar {
            input: "Central<Principal<PowerSum<1>>>".into(),
            source: GrammarError::IncompatibleModifierCombination(tag),
        };
        assert!(
            error
                .to_string()
                .starts_with("cannot standardize `Central<Principal<PowerSum<1>>>`")
        );
    }

    #[test]
    fn below_start_error_names_both_classes() {
        let error = CliError::BelowStart {
            input: "Coord<Sum>".into(),
            start: PriorityClass::Normalize,
            class: PriorityClass::AccessData,
        };
        assert_eq!(
            error.to_string(),
            "cannot expand `Coord<Sum>` from normalize: it carries access-data modifiers"
        );
    }
}
