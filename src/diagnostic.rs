use thiserror::Error;

use crate::type_checker::r#type::Type;

/// Problems reported while checking a line. None of them stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("invalid variable name `{0}`")]
    InvalidIdentifier(String),

    #[error("variable `{0}` not declared before use")]
    UndeclaredVariable(String),

    #[error(
        "type mismatch: cannot assign value of type `{got}` to variable `{name}` declared as `{expected}`"
    )]
    TypeMismatchDeclaration {
        name: String,
        expected: Type,
        got: Type,
    },

    #[error(
        "type mismatch: cannot assign value of type `{got}` to variable `{name}` of type `{expected}`"
    )]
    TypeMismatchAssignment {
        name: String,
        expected: Type,
        got: Type,
    },

    #[error("type mismatch within expression: `{lhs}` and `{rhs}` are incompatible in `{expr}`")]
    TypeMismatchInExpression { expr: String, lhs: Type, rhs: Type },

    #[error("unrecognized token `{0}`")]
    UnrecognizedToken(String),

    #[error("variable `{name}` already declared (previous declaration on line {prev_line})")]
    Redeclaration { name: String, prev_line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} :: {}", self.line, self.kind)
    }
}
