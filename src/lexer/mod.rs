pub mod token;


use std::str::CharIndices;
use token::{Lexeme, Span, ARITHMETIC_OPERATORS, SEPARATORS};

// ASCII whitespace plus vertical tab.
fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn is_delimiter(c: char) -> bool {
    ARITHMETIC_OPERATORS.contains(&c) || SEPARATORS.contains(&c)
}

/// Splits a single line on whitespace, and around every arithmetic operator
/// and separator character, which always come out as tokens of their own.
pub struct Lexer<'a> {
    input_str: &'a str,
    input: CharIndices<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str) -> Self {
        Self {
            input_str,
            input: input_str.char_indices(),
        }
    }

    pub fn tokenize(line: &'a str) -> Vec<&'a str> {
        Lexer::new(line).map(|lexeme| lexeme.text).collect()
    }

    fn peek(&self) -> Option<char> {
        self.input.clone().next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        self.input.next()
    }

    fn offset(&self) -> usize {
        self.input
            .clone()
            .next()
            .map_or(self.input_str.len(), |(i, _)| i)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.advance();
        }
    }

    fn make_lexeme(&self, start: usize, end: usize) -> Lexeme<'a> {
        Lexeme {
            text: &self.input_str[start..end],
            span: Span(start, end),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let (start, c) = self.advance()?;
        if is_delimiter(c) {
            return Some(self.make_lexeme(start, start + c.len_utf8()));
        }

        while let Some(c) = self.peek() {
            if is_whitespace(c) || is_delimiter(c) {
                break;
            }
            self.advance();
        }
        Some(self.make_lexeme(start, self.offset()))
    }
}
