/// Tokenization errors.
///
/// Defines all error types that can occur while turning the raw expression
/// text into tokens: characters that start no token, a missing number where
/// the grammar requires one, and characters that are not operators where an
/// operator is required.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while applying operators to
/// the operand stack. These cover every way a tokenizable expression can
/// still be malformed: dangling operators, unbalanced parentheses, and
/// inputs that produce no value or too many.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Any error produced while evaluating an expression.
///
/// The two variants keep tokenization failures and malformed-expression
/// failures programmatically distinguishable, so embedding callers can
/// branch on the category. The process entry point only prints the message.
pub enum Error {
    /// The expression could not be tokenized.
    Parse(ParseError),
    /// The expression tokenized cleanly but is not well formed.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Eval(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}
