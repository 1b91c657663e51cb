use std::io;

use thiserror::Error;

/// Why a piece of text is not a decimal integer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("empty input")]
    Empty,
    #[error("sign without digits")]
    MissingDigits,
    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },
}

#[derive(Error, Debug)]
pub enum Int2048Error {
    #[error("cannot parse {input:?} as an integer: {kind}")]
    Parse { input: String, kind: ParseErrorKind },

    #[error("division by zero")]
    DivisionByZero,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Int2048Error {
    pub(crate) fn parse(input: &str, kind: ParseErrorKind) -> Self {
        Int2048Error::Parse { input: input.to_owned(), kind }
    }

    /// The parse failure reason, if this is a parse error.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Int2048Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[test]
fn test_messages() {
    let err = Int2048Error::parse("12a", ParseErrorKind::InvalidDigit { ch: 'a', index: 2 });
    assert_eq!(err.to_string(), "cannot parse \"12a\" as an integer: invalid digit 'a' at byte 2");
    assert_eq!(Int2048Error::DivisionByZero.to_string(), "division by zero");
    assert_eq!(Int2048Error::DivisionByZero.parse_kind(), None);
}
