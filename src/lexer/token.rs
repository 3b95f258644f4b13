use std::fmt::Display;

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> =
        HashSet::from(["if", "else", "return", "int", "float", "string", "boolean"]);
    static ref OPERATORS: HashSet<&'static str> = HashSet::from(["==", "!=", ">", "<", "="]);
}

pub const ARITHMETIC_OPERATORS: [char; 4] = ['+', '-', '*', '/'];
pub const SEPARATORS: [char; 6] = ['(', ')', '{', '}', ',', ';'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    ArithmeticOperator,
    Separator,
    Number,
    String,
    Unknown,
}

impl TokenKind {
    /// Classifies a lexeme. The checks run in a fixed order and the first
    /// match wins, so e.g. `int` is a keyword and never an identifier.
    pub fn classify(text: &str) -> TokenKind {
        if KEYWORDS.contains(text) {
            TokenKind::Keyword
        } else if single_char_in(text, &ARITHMETIC_OPERATORS) {
            TokenKind::ArithmeticOperator
        } else if OPERATORS.contains(text) {
            TokenKind::Operator
        } else if single_char_in(text, &SEPARATORS) {
            TokenKind::Separator
        } else if is_number(text) {
            TokenKind::Number
        } else if is_string(text) {
            TokenKind::String
        } else if is_identifier(text) {
            TokenKind::Identifier
        } else {
            TokenKind::Unknown
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

/// A raw slice of a line, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(lexeme: &'a str, kind: TokenKind) -> Self {
        Self { lexeme, kind }
    }

    pub fn classify(lexeme: &'a str) -> Self {
        Self::new(lexeme, TokenKind::classify(lexeme))
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "('{}', '{}')", self.lexeme, self.kind)
    }
}

fn single_char_in(text: &str, set: &[char]) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if set.contains(&c))
}

/// `digits` or `digits.digits`
pub fn is_number(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(text),
    }
}

pub fn is_float(text: &str) -> bool {
    is_number(text) && text.contains('.')
}

/// Any text wrapped in double quotes, including `""`.
pub fn is_string(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// An ASCII letter followed by ASCII letters or digits.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

pub fn has_arithmetic_operator(text: &str) -> bool {
    text.contains(&ARITHMETIC_OPERATORS[..])
}

pub fn is_arithmetic_operator(text: &str) -> bool {
    single_char_in(text, &ARITHMETIC_OPERATORS)
}
