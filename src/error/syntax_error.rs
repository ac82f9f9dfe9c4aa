#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing a line.
pub enum SyntaxError {
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput,
    /// Found a token other than the one the grammar required.
    UnexpectedToken {
        /// What the parser was expecting, e.g. `a closing paren`.
        expected: String,
        /// The display form of the token actually found.
        found:    String,
    },
    /// A numeric literal could not be parsed as a decimal number.
    ///
    /// The lexer intentionally lets a literal consume trailing non-digit
    /// characters, so input like `1+2` (no spaces) lands here.
    MalformedNumber {
        /// The literal text as written.
        literal: String,
        /// The underlying decimal parse failure.
        reason:  String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),

            Self::UnexpectedToken { expected, found } => {
                write!(f, "expecting {expected} but got {found} instead")
            },

            Self::MalformedNumber { literal, reason } => {
                write!(f, "unable to parse number `{literal}`: {reason}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
