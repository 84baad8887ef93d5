//! Report types and helpers for rendering command results.

use std::fmt;
use std::io::Write;

use acctag::{CanonicalTag, IdentityRule, LongTag, PriorityClass};
use eyre::{Context, Result};
use serde::Serialize;

use crate::error::CliError;

/// Outcome for one tag argument.
#[derive(Debug, Serialize)]
pub(crate) struct Report<T> {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Report<T> {
    pub fn new(input: &str, outcome: Result<T, CliError>) -> Self {
        let error = outcome.as_ref().err().map(ToString::to_string);
        Self {
            input: input.to_string(),
            result: outcome.ok(),
            error,
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Standardized {
    pub canonical: String,
    pub class: PriorityClass,
    pub tag: CanonicalTag,
}

impl From<CanonicalTag> for Standardized {
    fn from(tag: CanonicalTag) -> Self {
        Self {
            canonical: tag.to_string(),
            class: acctag::classify(&tag),
            tag,
        }
    }
}

impl fmt::Display for Standardized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Classification {
    pub class: PriorityClass,
    pub contains: Vec<PriorityClass>,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (contains", self.class)?;
        let mut separator = " ";
        for class in &self.contains {
            write!(f, "{separator}{class}")?;
            separator = ", ";
        }
        f.write_str(")")
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Expansion {
    pub long_form: String,
    pub placeholders: usize,
    pub long: LongTag,
}

impl From<LongTag> for Expansion {
    fn from(long: LongTag) -> Self {
        Self {
            long_form: long.to_string(),
            placeholders: long.placeholder_count(),
            long,
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_form)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TransferReport {
    pub source: String,
    pub targets: Vec<Report<Standardized>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RuleReport {
    pub name: &'static str,
    pub description: &'static str,
}

impl From<&IdentityRule> for RuleReport {
    fn from(rule: &IdentityRule) -> Self {
        Self {
            name: rule.name(),
            description: rule.description(),
        }
    }
}

pub(crate) fn write_reports<T: fmt::Display>(
    writer: &mut dyn Write,
    reports: &[Report<T>],
) -> Result<()> {
    for report in reports {
        write_report(writer, report)?;
    }
    Ok(())
}

fn write_report<T: fmt::Display>(writer: &mut dyn Write, report: &Report<T>) -> Result<()> {
    match (&report.result, &report.error) {
        (Some(result), _) => writeln!(writer, "{} => {result}", report.input),
        (None, Some(error)) => writeln!(writer, "error: {error}"),
        (None, None) => writeln!(writer, "{}", report.input),
    }
    .wrap_err_with(|| format!("failed to write result for {}", report.input))
}

pub(crate) fn write_failure(writer: &mut dyn Write, error: &CliError) -> Result<()> {
    writeln!(writer, "error: {error}").wrap_err("failed to write error")
}

pub(crate) fn write_rules(writer: &mut dyn Write, rules: &[RuleReport]) -> Result<()> {
    for (position, rule) in rules.iter().enumerate() {
        writeln!(
            writer,
            "{:>2}. {}: {}",
            position + 1,
            rule.name,
            rule.description
        )
        .wrap_err_with(|| format!("failed to write rule {}", rule.name))?;
    }
    Ok(())
}

pub(crate) fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).wrap_err("failed to serialize JSON output")?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests panic on unexpected failures")]
mod tests {
    use super::*;
    use acctag::{Alias, standardize};

    fn render(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn successful_reports_show_input_and_result() {
        let mean = standardize(&Alias::Mean.into()).unwrap();
        let reports = [Report::new("Mean", Ok(Standardized::from(mean)))];
        let text = render(|writer| write_reports(writer, &reports));
        assert_eq!(text, "Mean => DivideByCount<PowerSum<1>>\n");
    }

    #[test]
    fn failed_reports_show_the_error() {
        let reports: [Report<Standardized>; 1] = [Report::new(
            "Median",
            Err(CliError::InvalidConfig("nope".into())),
        )];
        assert!(!reports.iter().all(Report::is_ok));
        let text = render(|writer| write_reports(writer, &reports));
        assert_eq!(text, "error: invalid configuration: nope\n");
    }

    #[test]
    fn classification_lists_contained_classes() {
        let classification = Classification {
            class: PriorityClass::AccessData,
            contains: vec![PriorityClass::AccessData, PriorityClass::Accumulator],
        };
        assert_eq!(
            classification.to_string(),
            "access-data (contains access-data, accumulator)"
        );
    }

    #[test]
    fn rules_are_numbered_from_one() {
        let rules = [RuleReport {
            name: "alias-expansion",
            description: "expand aliases",
        }];
        let text = render(|writer| write_rules(writer, &rules));
        assert_eq!(text, " 1. alias-expansion: expand aliases\n");
    }

    #[test]
    fn json_output_skips_missing_fields() {
        let reports: [Report<Standardized>; 1] = [Report::new(
            "Median",
            Err(CliError::InvalidConfig("nope".into())),
        )];
        let text = render(|writer| write_json(writer, &reports));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let first = value.get(0).unwrap();
        assert!(first.get("result").is_none());
        assert_eq!(
            first.get("error").and_then(serde_json::Value::as_str),
            Some("invalid configuration: nope")
        );
    }
}
