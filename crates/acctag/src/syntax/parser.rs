//! Recursive-descent parser building tags from lexer tokens.

use crate::errors::TagParseError;
use crate::tag::{Alias, Modifier, Symbol, Tag};

use super::lexer::{Bracket, Token, lex_tag};

/// Deepest nesting of bracketed arguments the parser accepts.
pub const MAX_NESTING: usize = 256;

/// How a name consumes its arguments.
#[derive(Clone, Copy)]
enum Form {
    Leaf(fn() -> Tag),
    Numbered(fn(u32) -> Tag),
    Percent(fn(u32) -> Tag),
    Wrapper(Modifier),
    HistogramQuantile,
}

fn form_of(name: &str) -> Option<Form> {
    if let Some(modifier) = Modifier::from_name(name) {
        return Some(Form::Wrapper(modifier));
    }
    let form = match name {
        "CoordinateSystem" => Form::Leaf(|| Symbol::CoordinateSystem.into()),
        "PowerSum" => Form::Numbered(|n| Symbol::PowerSum(n).into()),
        "AbsPowerSum" => Form::Numbered(|n| Symbol::AbsPowerSum(n).into()),
        "Skewness" => Form::Leaf(|| Symbol::Skewness.into()),
        "Kurtosis" => Form::Leaf(|| Symbol::Kurtosis.into()),
        "FlatScatterMatrix" => Form::Leaf(|| Symbol::FlatScatterMatrix.into()),
        "CovarianceEigensystem" => Form::Leaf(|| Symbol::CovarianceEigensystem.into()),
        "Quantile" => Form::Percent(|p| Symbol::Quantile(p).into()),
        "Histogram" => Form::Numbered(|n| Symbol::Histogram(n).into()),
        "HistogramQuantile" => Form::HistogramQuantile,
        "MultiHistogram" => Form::Numbered(|n| Symbol::MultiHistogram(n).into()),
        "AccumulatorArray" => Form::Leaf(|| Symbol::AccumulatorArray.into()),
        "Centralize" => Form::Leaf(|| Symbol::Centralize.into()),
        "PrincipalProjection" => Form::Leaf(|| Symbol::PrincipalProjection.into()),
        "Whiten" => Form::Leaf(|| Symbol::Whiten.into()),
        "RangeMapping" => Form::Leaf(|| Symbol::RangeMapping.into()),
        "PlainData" => Form::Leaf(|| Symbol::PlainData.into()),
        "Count" => Form::Leaf(|| Alias::Count.into()),
        "Sum" => Form::Leaf(|| Alias::Sum.into()),
        "SumOfSquares" => Form::Leaf(|| Alias::SumOfSquares.into()),
        "Mean" => Form::Leaf(|| Alias::Mean.into()),
        "RootMeanSquares" => Form::Leaf(|| Alias::RootMeanSquares.into()),
        "Moment" => Form::Numbered(|n| Alias::Moment(n).into()),
        "CentralMoment" => Form::Numbered(|n| Alias::CentralMoment(n).into()),
        "SumOfSquaredDifferences" | "SSD" => {
            Form::Leaf(|| Alias::SumOfSquaredDifferences.into())
        }
        "Variance" => Form::Leaf(|| Alias::Variance.into()),
        "StdDev" => Form::Leaf(|| Alias::StdDev.into()),
        "UnbiasedVariance" => Form::Leaf(|| Alias::UnbiasedVariance.into()),
        "UnbiasedStdDev" => Form::Leaf(|| Alias::UnbiasedStdDev.into()),
        "Covariance" => Form::Leaf(|| Alias::Covariance.into()),
        "UnbiasedCovariance" => Form::Leaf(|| Alias::UnbiasedCovariance.into()),
        "AbsSum" => Form::Leaf(|| Alias::AbsSum.into()),
        "SumOfAbsDifferences" => Form::Leaf(|| Alias::SumOfAbsDifferences.into()),
        "MeanAbsoluteDeviation" => Form::Leaf(|| Alias::MeanAbsoluteDeviation.into()),
        "GeometricCenter" => Form::Leaf(|| Alias::GeometricCenter.into()),
        "PrincipalRadii" => Form::Leaf(|| Alias::PrincipalRadii.into()),
        "PrincipalCoordSystem" => Form::Leaf(|| Alias::PrincipalCoordSystem.into()),
        "CenterOfMass" => Form::Leaf(|| Alias::CenterOfMass.into()),
        "MomentsOfInertia" => Form::Leaf(|| Alias::MomentsOfInertia.into()),
        "CoordSystemOfInertia" => Form::Leaf(|| Alias::CoordSystemOfInertia.into()),
        "Minimum" => Form::Leaf(|| Alias::Minimum.into()),
        "Maximum" => Form::Leaf(|| Alias::Maximum.into()),
        _ => return None,
    };
    Some(form)
}

enum Argument {
    Number { start: usize, value: u32 },
    Tag { start: usize, tag: Tag },
}

impl Argument {
    const fn start(&self) -> usize {
        match self {
            Self::Number { start, .. } | Self::Tag { start, .. } => *start,
        }
    }
}

struct Parser {
    tokens: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
    end: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self {
            tokens: tokens.into_iter(),
            peeked: None,
            end,
        }
    }

    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref()
    }

    fn next_token(&mut self) -> Option<Token> {
        self.peeked.take().or_else(|| self.tokens.next())
    }

    fn tag(&mut self, depth: usize) -> Result<Tag, TagParseError> {
        let name_token = self.next_token();
        let (start, name) = match name_token {
            Some(Token::Name { start, text }) => (start, text),
            Some(other) => {
                return Err(TagParseError::new(
                    "expected a tag name",
                    other.start(),
                    Some(other.text()),
                ));
            }
            None => return Err(TagParseError::new("expected a tag name", self.end, None)),
        };
        let Some(form) = form_of(&name) else {
            return Err(TagParseError::new("unknown tag name", start, Some(name)));
        };
        let arguments = match self.peek() {
            Some(Token::Open { .. }) => self.arguments(depth + 1)?,
            _ => Vec::new(),
        };
        build(form, start, &name, arguments)
    }

    fn arguments(&mut self, depth: usize) -> Result<Vec<Argument>, TagParseError> {
        let Some(Token::Open { start, bracket }) = self.next_token() else {
            return Err(TagParseError::new("expected an opening bracket", self.end, None));
        };
        if depth > MAX_NESTING {
            return Err(TagParseError::new(
                "tag nesting too deep",
                start,
                Some(open_text(bracket).into()),
            ));
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.argument(depth)?);
            match self.next_token() {
                Some(Token::Comma { .. }) => {}
                Some(Token::Close { bracket: close, .. }) if close == bracket => {
                    return Ok(arguments);
                }
                Some(token @ Token::Close { .. }) => {
                    return Err(TagParseError::new(
                        "mismatched closing bracket",
                        token.start(),
                        Some(token.text()),
                    ));
                }
                Some(token) => {
                    return Err(TagParseError::new(
                        "expected ',' or a closing bracket",
                        token.start(),
                        Some(token.text()),
                    ));
                }
                None => {
                    return Err(TagParseError::new(
                        "unbalanced brackets in tag expression",
                        self.end,
                        None,
                    ));
                }
            }
        }
    }

    fn argument(&mut self, depth: usize) -> Result<Argument, TagParseError> {
        if let Some(&Token::Number { start, value }) = self.peek() {
            self.next_token();
            return Ok(Argument::Number { start, value });
        }
        let end = self.end;
        let start = self.peek().map_or(end, Token::start);
        let tag = self.tag(depth)?;
        Ok(Argument::Tag { start, tag })
    }

    fn finish(&mut self) -> Result<(), TagParseError> {
        match self.next_token() {
            None => Ok(()),
            Some(token) => Err(TagParseError::new(
                "unexpected trailing input",
                token.start(),
                Some(token.text()),
            )),
        }
    }
}

const fn open_text(bracket: Bracket) -> &'static str {
    match bracket {
        Bracket::Angle => "<",
        Bracket::Round => "(",
    }
}

fn arity_error(message: &'static str, start: usize, name: &str) -> TagParseError {
    TagParseError::new(message, start, Some(name.to_string()))
}

fn build(
    form: Form,
    start: usize,
    name: &str,
    arguments: Vec<Argument>,
) -> Result<Tag, TagParseError> {
    let mut arguments = arguments.into_iter();
    let tag = match (form, arguments.next(), arguments.next()) {
        (Form::Leaf(make), None, None) => make(),
        (Form::Leaf(_), ..) => {
            return Err(arity_error("expected no arguments", start, name));
        }
        (Form::Numbered(make), Some(Argument::Number { value, .. }), None) => make(value),
        (Form::Numbered(_), ..) => {
            return Err(arity_error("expected a single numeric argument", start, name));
        }
        (Form::Percent(make), Some(Argument::Number { start, value }), None) => {
            check_percent(start, value)?;
            make(value)
        }
        (Form::Percent(_), ..) => {
            return Err(arity_error("expected a percent argument", start, name));
        }
        (Form::Wrapper(modifier), Some(Argument::Tag { tag, .. }), None) => tag.wrap(modifier),
        (Form::Wrapper(_), ..) => {
            return Err(arity_error("expected a single tag argument", start, name));
        }
        (
            Form::HistogramQuantile,
            Some(Argument::Number { start: at, value: percent }),
            Some(histogram),
        ) => {
            check_percent(at, percent)?;
            let bins = match histogram {
                Argument::Tag {
                    tag: Tag::Symbol(Symbol::Histogram(bins)),
                    ..
                } => bins,
                other => {
                    return Err(TagParseError::new(
                        "expected a histogram argument",
                        other.start(),
                        None,
                    ));
                }
            };
            Symbol::HistogramQuantile { percent, bins }.into()
        }
        (Form::HistogramQuantile, ..) => {
            return Err(arity_error(
                "expected a percent and a histogram",
                start,
                name,
            ));
        }
    };
    if let Some(extra) = arguments.next() {
        return Err(TagParseError::new(
            "too many arguments",
            extra.start(),
            Some(name.to_string()),
        ));
    }
    Ok(tag)
}

fn check_percent(start: usize, percent: u32) -> Result<(), TagParseError> {
    if percent > 100 {
        return Err(TagParseError::new(
            "percent must not exceed 100",
            start,
            Some(percent.to_string()),
        ));
    }
    Ok(())
}

/// Parse tag text such as `Coord<Principal<CoordinateSystem>>`.
///
/// Angle brackets and parentheses are interchangeable but must match, and
/// whitespace between tokens is ignored.
///
/// # Errors
///
/// Returns [`TagParseError`] for unknown names, wrong arguments, unbalanced
/// brackets, trailing input and nesting deeper than [`MAX_NESTING`].
///
/// # Examples
///
/// ```
/// use acctag::{parse_tag, Alias, Tag};
///
/// let tag = parse_tag("Central(Coord(Mean))").unwrap();
/// assert_eq!(tag, Tag::central(Tag::coord(Alias::Mean)));
/// ```
pub fn parse_tag(text: &str) -> Result<Tag, TagParseError> {
    let tokens = lex_tag(text)?;
    let mut parser = Parser::new(tokens, text.len());
    let tag = parser.tag(0)?;
    parser.finish()?;
    Ok(tag)
}
