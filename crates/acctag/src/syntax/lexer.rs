//! Tag lexer converting tag text into tokens with byte offsets.

use crate::errors::TagParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bracket {
    Angle,
    Round,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Name { start: usize, text: String },
    Number { start: usize, value: u32 },
    Open { start: usize, bracket: Bracket },
    Close { start: usize, bracket: Bracket },
    Comma { start: usize },
}

impl Token {
    pub(crate) const fn start(&self) -> usize {
        match self {
            Self::Name { start, .. }
            | Self::Number { start, .. }
            | Self::Open { start, .. }
            | Self::Close { start, .. }
            | Self::Comma { start } => *start,
        }
    }

    /// Source text of the token for diagnostics.
    pub(crate) fn text(&self) -> String {
        match self {
            Self::Name { text, .. } => text.clone(),
            Self::Number { value, .. } => value.to_string(),
            Self::Open { bracket: Bracket::Angle, .. } => "<".into(),
            Self::Open { bracket: Bracket::Round, .. } => "(".into(),
            Self::Close { bracket: Bracket::Angle, .. } => ">".into(),
            Self::Close { bracket: Bracket::Round, .. } => ")".into(),
            Self::Comma { .. } => ",".into(),
        }
    }
}

fn scan_while(bytes: &[u8], mut pos: usize, accept: impl Fn(u8) -> bool) -> usize {
    while bytes.get(pos).is_some_and(|&b| accept(b)) {
        pos += 1;
    }
    pos
}

fn lex_number(text: &str, start: usize) -> Result<(usize, u32), TagParseError> {
    let bytes = text.as_bytes();
    let end = scan_while(bytes, start, |b| b.is_ascii_digit());
    let digits = text.get(start..end).unwrap_or_default();
    digits
        .parse::<u32>()
        .map(|value| (end, value))
        .map_err(|_| TagParseError::new("number out of range", start, Some(digits.to_string())))
}

pub(crate) fn lex_tag(text: &str) -> Result<Vec<Token>, TagParseError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        match b {
            b if b.is_ascii_whitespace() => pos += 1,
            b if b.is_ascii_alphabetic() || b == b'_' => {
                let end = scan_while(bytes, pos, |b| b.is_ascii_alphanumeric() || b == b'_');
                let name = text.get(pos..end).unwrap_or_default().to_string();
                tokens.push(Token::Name { start: pos, text: name });
                pos = end;
            }
            b if b.is_ascii_digit() => {
                let (end, value) = lex_number(text, pos)?;
                tokens.push(Token::Number { start: pos, value });
                pos = end;
            }
            b'<' | b'(' => {
                let bracket = if b == b'<' { Bracket::Angle } else { Bracket::Round };
                tokens.push(Token::Open { start: pos, bracket });
                pos += 1;
            }
            b'>' | b')' => {
                let bracket = if b == b'>' { Bracket::Angle } else { Bracket::Round };
                tokens.push(Token::Close { start: pos, bracket });
                pos += 1;
            }
            b',' => {
                tokens.push(Token::Comma { start: pos });
                pos += 1;
            }
            _ => {
                let unexpected = text
                    .get(pos..)
                    .and_then(|rest| rest.chars().next())
                    .map(String::from);
                return Err(TagParseError::new("unexpected character", pos, unexpected));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise lexing fallibility")]
mod tests {
    use super::*;

    #[test]
    fn tokenises_names_numbers_and_brackets() {
        let tokens = lex_tag("Coord<PowerSum(2)>").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Name { start: 0, text: "Coord".into() },
                Token::Open { start: 5, bracket: Bracket::Angle },
                Token::Name { start: 6, text: "PowerSum".into() },
                Token::Open { start: 14, bracket: Bracket::Round },
                Token::Number { start: 15, value: 2 },
                Token::Close { start: 16, bracket: Bracket::Round },
                Token::Close { start: 17, bracket: Bracket::Angle },
            ]
        );
    }

    #[test]
    fn skips_whitespace_and_records_commas() {
        let tokens = lex_tag(" HistogramQuantile < 50 ,Histogram<8> > ").unwrap();
        let starts: Vec<_> = tokens.iter().map(Token::start).collect();
        assert_eq!(starts, vec![1, 19, 21, 24, 25, 34, 35, 36, 38]);
        assert!(matches!(tokens.get(3), Some(Token::Comma { start: 24 })));
    }

    #[test]
    fn rejects_oversized_numbers() {
        let err = lex_tag("PowerSum<99999999999>").unwrap_err();
        assert_eq!(err.message, "number out of range");
        assert_eq!(err.position, 9);
        assert_eq!(err.token.as_deref(), Some("99999999999"));
    }

    #[test]
    fn rejects_unexpected_characters() {
        let err = lex_tag("Coord[Sum]").unwrap_err();
        assert_eq!(err.position, 5);
        assert_eq!(err.token.as_deref(), Some("["));

        let err = lex_tag("Sum→").unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(err.token.as_deref(), Some("→"));
    }

    #[test]
    fn renders_token_text() {
        let tokens = lex_tag("(,)").unwrap();
        let texts: Vec<_> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["(", ",", ")"]);
    }
}
