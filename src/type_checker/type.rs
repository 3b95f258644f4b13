use std::fmt::Display;

use crate::lexer::token::{is_float, is_number, is_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    String,
    Boolean,
    Unknown,
}

impl Type {
    /// Maps the declarable type keywords; every other keyword yields `None`.
    pub fn from_keyword(keyword: &str) -> Option<Type> {
        match keyword {
            "int" => Some(Type::Int),
            "float" => Some(Type::Float),
            "string" => Some(Type::String),
            "boolean" => Some(Type::Boolean),
            _ => None,
        }
    }

    pub fn of_literal(text: &str) -> Type {
        if is_number(text) {
            if is_float(text) {
                Type::Float
            } else {
                Type::Int
            }
        } else if is_boolean_literal(text) {
            Type::Boolean
        } else if is_string(text) {
            Type::String
        } else {
            Type::Unknown
        }
    }
}

pub fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "True" | "False")
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "string"),
            Type::Boolean => write!(f, "boolean"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}
