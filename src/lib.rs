//! # infixcalc
//!
//! infixcalc is a single-shot evaluator for infix arithmetic expressions.
//! It computes the value of an expression such as `1 + 2 * (3 - 4)` in one
//! pass over the input, driving an operand stack and an operator stack
//! instead of building a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::interpreter::lexer::Token;

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. It keeps tokenization failures and malformed-expression
/// failures as distinct kinds so embedding callers can branch on the
/// category, and carries the offending character and position where one
/// exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, stacks).
/// - Attaches positions and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenization and stack-based evaluation.
///
/// This module ties together the lexer and the two-stack precedence engine
/// that computes the value of an expression. It is the core of the crate;
/// everything else is a thin wrapper around it.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Provides the precedence table and operator application rules.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities supporting the evaluator.
///
/// This module provides the generic stack container the evaluator uses for
/// its pending operands and pending operators.
///
/// # Responsibilities
/// - Provides LIFO storage with `Option`-returning access instead of
///   panicking preconditions.
pub mod util;

/// Evaluates an infix arithmetic expression and returns its value.
///
/// The expression may contain decimal numbers, the binary operators
/// `+ - * /`, and parentheses. Whitespace is insignificant and removed
/// before tokenization; no other normalization is performed. Evaluation is
/// a single pass: each call allocates its own stacks, shares no state with
/// other calls, and either produces a value or fails on the first
/// malformed token.
///
/// Division by zero is not an error and follows IEEE-754 semantics,
/// yielding an infinity or NaN.
///
/// # Parameters
/// - `expression`: The expression text, e.g. `"1 + 2 * 3"`.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Returns an [`error::Error`] if the expression cannot be tokenized or is
/// malformed. The value on the error path is never partially computed.
///
/// # Examples
/// ```
/// use infixcalc::evaluate;
///
/// let result = evaluate("1 + 2 * (3 + 4 / 2 - (1 + 2)) * 2 + 1").unwrap();
/// assert_eq!(result, 10.0);
///
/// // Equal precedence applies left-to-right.
/// assert_eq!(evaluate("1-2-3").unwrap(), -4.0);
///
/// // Malformed input is reported instead of computed.
/// assert!(evaluate("1 +").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, error::Error> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut lexer = Token::lexer(&stripped);

    interpreter::evaluator::evaluate_tokens(&mut lexer)
}
