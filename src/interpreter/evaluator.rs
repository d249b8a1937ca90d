use crate::{
    error::{Error, EvalError, ParseError},
    interpreter::lexer::Token,
    util::stack::Stack,
};

/// Result type used by the evaluator.
///
/// All stack resolution functions return either a value of type `T` or an
/// `EvalError` describing why the expression is malformed.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents an operator symbol handled by the evaluator.
///
/// The set is closed: the four binary arithmetic operators and the two
/// parentheses. Only the arithmetic operators and `(` are ever held on the
/// operator stack; a closing parenthesis is compared against the stack top
/// and consumed immediately, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Opening parenthesis (`(`)
    LParen,
    /// Closing parenthesis (`)`)
    RParen,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher binds tighter. The table is fixed: `(` is 0, `)` is 1, `+`
    /// and `-` are 2, `*` and `/` are 3. The parentheses participate so
    /// that `(` stops every unwind as a barrier, while `)` unwinds every
    /// pending operator down to the matching `(`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::LParen => 0,
            Self::RParen => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }
    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }
    /// Applies the operator to two operands.
    ///
    /// Division does not check for a zero divisor: `1 / 0` follows IEEE-754
    /// semantics and yields an infinity, `0 / 0` a NaN.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value `left OP right`.
    ///
    /// # Errors
    /// Returns `EvalError::UnmatchedParenthesis` if the operator is a
    /// parenthesis, which only happens when the expression's parentheses
    /// are unbalanced.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::evaluator::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(35.35, -10.0).unwrap(), 25.35);
    /// assert_eq!(Operator::Div.apply(1.0, 3.0).unwrap(), 0.3333333333333333);
    /// assert!(Operator::LParen.apply(1.0, 2.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => Ok(left / right),
            Self::LParen | Self::RParen => {
                Err(EvalError::UnmatchedParenthesis { parenthesis: self.symbol() })
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates a stream of tokens and returns the resulting value.
///
/// This is the core of the crate: a single pass over the tokens, driving an
/// operand stack and an operator stack. An alternating mode flag enforces
/// the grammar: after a number only an operator or `)` is legal, and after
/// an operator or `(` only a number or another `(` is.
///
/// A number is pushed onto the operand stack. An incoming operator that
/// binds tighter than the stack top is stacked for later; otherwise every
/// pending operator that binds at least as tightly is applied first, which
/// is what makes equal-precedence operators evaluate left-to-right. A `)`
/// unwinds down to the matching `(` and discards it. When the tokens are
/// exhausted, the remaining operators are drained and exactly one operand
/// must be left: the result.
///
/// # Parameters
/// - `lexer`: Token stream over the whitespace-stripped expression.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `Error::Parse` if the input cannot be tokenized or a token violates
///   the alternating grammar.
/// - `Error::Eval` if the expression is malformed: dangling operators,
///   unbalanced parentheses, or an input that produces no value.
pub fn evaluate_tokens(lexer: &mut logos::Lexer<'_, Token>) -> Result<f64, Error> {
    let mut operands: Stack<f64> = Stack::new();
    let mut operators: Stack<Operator> = Stack::new();

    let mut expect_number = true;
    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::InvalidSymbol { symbol:   lexer.slice().to_string(),
                                                   position: lexer.span().start, }.into());
        };

        if expect_number {
            match token {
                Token::LParen => operators.push(Operator::LParen),
                Token::Number(value) => {
                    operands.push(value);
                    expect_number = false;
                },
                _ => {
                    return Err(ParseError::ExpectedNumber { symbol:   lexer.slice().to_string(),
                                                            position: lexer.span().start, }.into());
                },
            }
            continue;
        }

        let operator = match token {
            Token::Plus => Operator::Add,
            Token::Minus => Operator::Sub,
            Token::Star => Operator::Mul,
            Token::Slash => Operator::Div,
            Token::RParen => Operator::RParen,
            Token::Number(_) | Token::LParen => {
                return Err(ParseError::InvalidOperator { symbol:   lexer.slice().to_string(),
                                                         position: lexer.span().start, }.into());
            },
        };

        if operator == Operator::RParen {
            resolve_pending(&mut operands, &mut operators, operator)?;
            match operators.pop() {
                // The group is now a single operand; an operator must
                // follow it, so the mode does not flip.
                Some(Operator::LParen) => {},
                _ => return Err(EvalError::UnmatchedParenthesis { parenthesis: ')' }.into()),
            }
            continue;
        }

        match operators.peek().copied() {
            Some(top) if operator.precedence() <= top.precedence() => {
                resolve_pending(&mut operands, &mut operators, operator)?;
                operators.push(operator);
            },
            _ => operators.push(operator),
        }
        expect_number = true;
    }

    while let Some(operator) = operators.pop() {
        apply_top(&mut operands, operator)?;
    }

    let result = operands.pop().ok_or(EvalError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(EvalError::LeftoverOperands.into());
    }

    Ok(result)
}

/// Applies every stacked operator that binds at least as tightly as the
/// incoming symbol.
///
/// Operators are popped and applied while the stack is non-empty and the
/// incoming symbol's precedence is less than or equal to the top's. An `(`
/// on the stack has the lowest precedence of all, so it stops the unwind
/// and shields everything stacked below it.
///
/// # Parameters
/// - `operands`: The operand stack to draw from and push results onto.
/// - `operators`: The operator stack to unwind.
/// - `incoming`: The symbol whose precedence bounds the unwind.
///
/// # Errors
/// Returns an `EvalError` if an application runs out of operands.
fn resolve_pending(operands: &mut Stack<f64>,
                   operators: &mut Stack<Operator>,
                   incoming: Operator)
                   -> EvalResult<()> {
    while let Some(&top) = operators.peek() {
        if incoming.precedence() > top.precedence() {
            break;
        }
        operators.pop();
        apply_top(operands, top)?;
    }

    Ok(())
}

/// Applies one operator to the two most recently pushed operands and pushes
/// the result back.
///
/// The right operand is popped first, then the left, restoring the order
/// the operands appeared in: for `1 - 2` the popped right operand is `2`
/// and the popped left operand is `1`.
///
/// # Parameters
/// - `operands`: The operand stack.
/// - `operator`: The operator to apply.
///
/// # Errors
/// - `EvalError::UnmatchedParenthesis` if the operator is a parenthesis
///   that was never matched.
/// - `EvalError::MissingOperand` if fewer than two operands are available.
fn apply_top(operands: &mut Stack<f64>, operator: Operator) -> EvalResult<()> {
    if matches!(operator, Operator::LParen | Operator::RParen) {
        return Err(EvalError::UnmatchedParenthesis { parenthesis: operator.symbol() });
    }

    let right = pop_operand(operands, operator)?;
    let left = pop_operand(operands, operator)?;
    operands.push(operator.apply(left, right)?);

    Ok(())
}

/// Pops one operand for the given operator.
///
/// # Errors
/// Returns `EvalError::MissingOperand` naming the operator if the operand
/// stack is empty.
fn pop_operand(operands: &mut Stack<f64>, operator: Operator) -> EvalResult<f64> {
    operands.pop()
            .ok_or(EvalError::MissingOperand { operator: operator.symbol() })
}
