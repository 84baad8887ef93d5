//! Execution of the `acctag` subcommands.
//!
//! Each command reports every tag argument separately. A tag that fails to
//! parse or standardize marks the run as failed without stopping the
//! remaining arguments.

use std::io::Write;

use acctag::{
    CanonicalTag, LongTag, PriorityClass, Standardizer, Tag, classify, contains_class,
    identity_rules, parse_tag, transfer,
};
use eyre::Result;
use tracing::{debug, info};

use crate::cli::{Commands, ExpandArgs, TagsArgs, TransferArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::output::{
    Classification, Expansion, Report, RuleReport, Standardized, TransferReport, write_failure,
    write_json, write_reports, write_rules,
};

/// Overall result of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every tag argument was processed.
    Success,
    /// At least one tag argument failed.
    TagFailure,
}

impl Status {
    fn from_reports<T>(reports: &[Report<T>]) -> Self {
        if reports.iter().all(Report::is_ok) {
            Self::Success
        } else {
            Self::TagFailure
        }
    }

    /// Process exit code for the status.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::TagFailure => 1,
        }
    }
}

/// Run `command` and write its results to `writer`.
///
/// # Errors
///
/// Returns an error only when writing the output fails; tag failures are
/// reported through [`Status::TagFailure`].
pub fn execute(command: &Commands, config: &CliConfig, writer: &mut dyn Write) -> Result<Status> {
    let mut standardizer = if config.cache {
        Standardizer::new()
    } else {
        Standardizer::uncached()
    };
    let status = match command {
        Commands::Standardize(args) => {
            handle_standardize(args, &mut standardizer, config.format, writer)?
        }
        Commands::Classify(args) => handle_classify(args, config.format, writer)?,
        Commands::Expand(args) => handle_expand(args, &mut standardizer, config.format, writer)?,
        Commands::Transfer(args) => handle_transfer(args, config.format, writer)?,
        Commands::Rules => handle_rules(config.format, writer)?,
    };
    debug!(
        cached = standardizer.len(),
        hits = standardizer.hits(),
        ?status,
        "command finished"
    );
    Ok(status)
}

fn parse_input(input: &str) -> Result<Tag, CliError> {
    parse_tag(input).map_err(|source| CliError::Parse {
        input: input.to_string(),
        source,
    })
}

fn standardize_input(
    standardizer: &mut Standardizer,
    input: &str,
) -> Result<CanonicalTag, CliError> {
    let tag = parse_input(input)?;
    standardizer.standardize(&tag).map_err(|source| CliError::Grammar {
        input: input.to_string(),
        source,
    })
}

fn emit<T>(reports: &[Report<T>], format: OutputFormat, writer: &mut dyn Write) -> Result<Status>
where
    T: std::fmt::Display + serde::Serialize,
{
    match format {
        OutputFormat::Text => write_reports(writer, reports)?,
        OutputFormat::Json => write_json(writer, reports)?,
    }
    Ok(Status::from_reports(reports))
}

fn handle_standardize(
    args: &TagsArgs,
    standardizer: &mut Standardizer,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<Status> {
    let reports: Vec<_> = args
        .tags
        .iter()
        .map(|input| {
            let outcome = standardize_input(standardizer, input).map(Standardized::from);
            Report::new(input, outcome)
        })
        .collect();
    info!(tags = reports.len(), "standardized tags");
    emit(&reports, format, writer)
}

fn classify_input(input: &str) -> Result<Classification, CliError> {
    let tag = parse_input(input)?;
    let contains = PriorityClass::ALL
        .into_iter()
        .filter(|class| contains_class(&tag, *class))
        .collect();
    Ok(Classification {
        class: classify(&tag),
        contains,
    })
}

fn handle_classify(args: &TagsArgs, format: OutputFormat, writer: &mut dyn Write) -> Result<Status> {
    let reports: Vec<_> = args
        .tags
        .iter()
        .map(|input| Report::new(input, classify_input(input)))
        .collect();
    emit(&reports, format, writer)
}

fn expand_input(
    standardizer: &mut Standardizer,
    input: &str,
    start: Option<PriorityClass>,
) -> Result<Expansion, CliError> {
    let canonical = standardize_input(standardizer, input)?;
    let Some(start) = start else {
        return Ok(LongTag::expand(&canonical).into());
    };
    LongTag::expand_from(&canonical, start)
        .map(Expansion::from)
        .ok_or_else(|| CliError::BelowStart {
            input: input.to_string(),
            start,
            class: classify(&canonical),
        })
}

fn handle_expand(
    args: &ExpandArgs,
    standardizer: &mut Standardizer,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<Status> {
    let reports: Vec<_> = args
        .tags
        .iter()
        .map(|input| Report::new(input, expand_input(standardizer, input, args.from)))
        .collect();
    emit(&reports, format, writer)
}

fn handle_transfer(
    args: &TransferArgs,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<Status> {
    let source = match parse_input(&args.source) {
        Ok(source) => source,
        Err(error) => {
            debug!(source = %args.source, %error, "transfer source rejected");
            match format {
                OutputFormat::Text => write_failure(writer, &error)?,
                OutputFormat::Json => {
                    let report = Report::<Standardized>::new(&args.source, Err(error));
                    write_json(writer, &report)?;
                }
            }
            return Ok(Status::TagFailure);
        }
    };
    let targets: Vec<_> = args
        .targets
        .iter()
        .map(|input| {
            let outcome = parse_input(input).and_then(|target| {
                transfer(&source, &target)
                    .map(Standardized::from)
                    .map_err(|error| CliError::Grammar {
                        input: format!("{} onto {input}", args.source),
                        source: error,
                    })
            });
            Report::new(input, outcome)
        })
        .collect();
    let status = Status::from_reports(&targets);
    match format {
        OutputFormat::Text => write_reports(writer, &targets)?,
        OutputFormat::Json => write_json(
            writer,
            &TransferReport {
                source: args.source.clone(),
                targets,
            },
        )?,
    }
    Ok(status)
}

fn handle_rules(format: OutputFormat, writer: &mut dyn Write) -> Result<Status> {
    let rules: Vec<_> = identity_rules().iter().map(RuleReport::from).collect();
    match format {
        OutputFormat::Text => write_rules(writer, &rules)?,
        OutputFormat::Json => write_json(writer, &rules)?,
    }
    Ok(Status::Success)
}
