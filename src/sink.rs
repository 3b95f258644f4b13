use colored::Colorize;

use crate::{
    diagnostic::Diagnostic,
    lexer::token::{Token, TokenKind},
};

/// Receives the classified tokens and diagnostics of a run, in order.
pub trait Sink {
    fn token(&mut self, token: &Token);
    fn diagnostic(&mut self, diagnostic: &Diagnostic);
}

/// Tokens go to stdout, diagnostics to stderr.
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn token(&mut self, token: &Token) {
        println!("{token}");
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{}", format!("Error {diagnostic}").red());
    }
}

#[derive(Debug, Default)]
pub struct BufferSink {
    pub tokens: Vec<(String, TokenKind)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens rendered the way `ConsoleSink` prints them.
    pub fn rendered(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|(lexeme, kind)| Token::new(lexeme, *kind).to_string())
            .collect()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|(_, kind)| *kind).collect()
    }
}

impl Sink for BufferSink {
    fn token(&mut self, token: &Token) {
        self.tokens.push((token.lexeme.to_string(), token.kind));
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}
