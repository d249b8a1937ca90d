#[derive(Debug)]
/// Represents all errors that can occur while applying operators to the
/// operand stack.
///
/// Each of these means the expression tokenized cleanly but is not well
/// formed, for example because of unbalanced parentheses or a dangling
/// operator.
pub enum EvalError {
    /// An operator was applied with fewer than two operands available.
    MissingOperand {
        /// The operator that could not be applied.
        operator: char,
    },
    /// A parenthesis was still pending when an operator application reached
    /// it, meaning it was never matched by its counterpart.
    UnmatchedParenthesis {
        /// The parenthesis that was left unmatched.
        parenthesis: char,
    },
    /// The expression produced no value at all.
    EmptyExpression,
    /// More than one value remained after every operator was applied.
    LeftoverOperands,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator } => {
                write!(f, "Missing operand for operator '{operator}'.")
            },

            Self::UnmatchedParenthesis { parenthesis } => {
                write!(f, "Unmatched parenthesis '{parenthesis}'.")
            },

            Self::EmptyExpression => write!(f, "The expression produced no value."),

            Self::LeftoverOperands => write!(f,
                                             "Evaluation finished with more than one value left over."),
        }
    }
}

impl std::error::Error for EvalError {}
