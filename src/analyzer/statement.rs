use multipeek::multipeek;

use crate::{lexer::Lexer, type_checker::r#type::Type};

/// The shape of a single line, decided from its first three lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Declaration {
        ty: Type,
        keyword: &'a str,
        name: &'a str,
        value: &'a str,
    },
    Assignment {
        name: &'a str,
        value: &'a str,
    },
    Other,
}

impl<'a> Statement<'a> {
    pub fn classify(line: &'a str) -> Self {
        let mut lexemes = multipeek(Lexer::new(line));
        let first = lexemes.peek_nth(0).copied();
        let second = lexemes.peek_nth(1).copied();
        let third = lexemes.peek_nth(2).copied();

        let (Some(first), Some(second), Some(third)) = (first, second, third) else {
            return Statement::Other;
        };

        if let (Some(ty), "=") = (Type::from_keyword(first.text), third.text) {
            Statement::Declaration {
                ty,
                keyword: first.text,
                name: second.text,
                value: value_after(line, third.span.1),
            }
        } else if second.text == "=" {
            Statement::Assignment {
                name: first.text,
                value: value_after(line, second.span.1),
            }
        } else {
            Statement::Other
        }
    }
}

// Everything right of the `=`, without the terminating `;`.
fn value_after(line: &str, offset: usize) -> &str {
    line[offset..].trim().trim_end_matches(';').trim_end()
}
