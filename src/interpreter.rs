/// The evaluator module computes the value of a token stream.
///
/// The evaluator drives two stacks over the tokens produced by the lexer:
/// one holding the operands not yet combined, one holding the operators not
/// yet applied. Operator precedence decides at each step whether the
/// incoming symbol is stacked or whether pending operators are applied
/// first. No syntax tree is ever built.
///
/// # Responsibilities
/// - Enforces the grammar through an alternating expect-number and
///   expect-operator mode.
/// - Resolves operator precedence, left-to-right order among equals, and
///   parenthesized grouping.
/// - Reports malformed expressions such as dangling operators or
///   unbalanced parentheses.
pub mod evaluator;
/// The lexer module tokenizes the expression text.
///
/// The lexer (tokenizer) reads the whitespace-stripped input and produces a
/// stream of tokens: numeric literals, the four arithmetic operators, and
/// the two parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte spans.
/// - Enforces the numeric literal form: digits first, at most one decimal
///   point.
/// - Turns unrecognized characters into error tokens for the evaluator to
///   report.
pub mod lexer;
