use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
///
/// The lexer expects whitespace-stripped input; the evaluator removes every
/// whitespace character before tokenization, so a space never separates two
/// tokens and `1 2` is the single number `12`. Any byte that matches none of
/// the patterns below becomes an error token whose span points at it.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `0.5`.
    ///
    /// A literal is a maximal run of decimal digits, then at most one
    /// decimal point, then a possibly empty run of further digits. The
    /// point is only accepted after at least one digit, so `.5` is not a
    /// number, and the second point of `1.2.3` ends the literal.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the slice is not a valid literal, which turns the token
///   into an error token.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
