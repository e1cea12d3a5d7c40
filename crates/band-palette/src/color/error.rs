//! Hex color parse failures.

use std::fmt;

/// What was wrong with a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorErrorKind {
    /// Neither 3 nor 6 digits after the optional `#`
    DigitCount(usize),
    /// A character outside `0-9a-fA-F`
    NotHex(char),
}

/// A string that is not a `#rgb` / `#rrggbb` color.
///
/// Keeps the rejected input so palette loaders can say which entry failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
    kind: ColorErrorKind,
}

impl ParseColorError {
    pub(crate) fn new(input: &str, kind: ColorErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The string that failed to parse, as given.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> ColorErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ColorErrorKind::DigitCount(found) => write!(
                f,
                "color {:?} has {found} hex digits, expected 3 or 6",
                self.input
            ),
            ColorErrorKind::NotHex(c) => {
                write!(f, "color {:?} contains non-hex character {c:?}", self.input)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
