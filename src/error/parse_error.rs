#[derive(Debug)]
/// Represents all errors that can occur while tokenizing an expression.
///
/// Positions are absolute byte offsets into the whitespace-stripped
/// expression that was handed to the lexer.
pub enum ParseError {
    /// Encountered a character that cannot start any token.
    InvalidSymbol {
        /// The offending text.
        symbol:   String,
        /// Byte offset of the text in the whitespace-stripped input.
        position: usize,
    },
    /// A number was required by the grammar, but the input holds none at
    /// this position.
    ExpectedNumber {
        /// The text found instead of a number.
        symbol:   String,
        /// Byte offset of the text in the whitespace-stripped input.
        position: usize,
    },
    /// An operator or closing parenthesis was required, but the input holds
    /// neither at this position.
    InvalidOperator {
        /// The text found instead of an operator.
        symbol:   String,
        /// Byte offset of the text in the whitespace-stripped input.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbol { symbol, position } => {
                write!(f, "Invalid symbol '{symbol}' at position {position}.")
            },

            Self::ExpectedNumber { symbol, position } => write!(f,
                                                                "Expected a number but found '{symbol}' at position {position}."),

            Self::InvalidOperator { symbol, position } => {
                write!(f, "Incorrect operator '{symbol}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
