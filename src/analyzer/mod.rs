use std::io::BufRead;

use anyhow::Context;

use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    lexer::{
        token::{Token, TokenKind},
        Lexer,
    },
    sink::Sink,
    type_checker::{r#type::Type, RedeclarationPolicy, TypeChecker, TypeCheckerResult},
};

pub mod statement;
use statement::Statement;


#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub redeclaration: RedeclarationPolicy,
    /// Print the shape of every statement to stderr.
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub tokens: usize,
    pub diagnostics: usize,
}

/// Single pass, line by line. Declarations made on one line are visible to
/// every line after it.
pub struct Analyzer {
    checker: TypeChecker,
    summary: Summary,
    debug: bool,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self {
            checker: TypeChecker::new(config.redeclaration),
            summary: Summary::default(),
            debug: config.debug,
        }
    }

    pub fn checker(&self) -> &TypeChecker {
        &self.checker
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Runs over every line of `reader`. Only a failed read stops the run.
    pub fn analyze<R: BufRead>(
        &mut self,
        reader: R,
        sink: &mut dyn Sink,
    ) -> anyhow::Result<Summary> {
        for (i, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read line {}", i + 1))?;
            self.analyze_line(i + 1, &line, sink);
        }

        if self.debug {
            eprintln!("Summary: {:?}", self.summary);
        }
        Ok(self.summary)
    }

    pub fn analyze_line(&mut self, line_no: usize, line: &str, sink: &mut dyn Sink) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.summary.lines += 1;

        let statement = Statement::classify(line);
        if self.debug {
            eprintln!("line {line_no} :: {statement:?}");
        }

        let result = match statement {
            Statement::Declaration {
                ty,
                keyword,
                name,
                value,
            } => self.declaration(line_no, ty, keyword, name, value, sink),
            Statement::Assignment { name, value } => self.assignment(line_no, name, value, sink),
            Statement::Other => {
                self.emit_classified(line_no, line, sink);
                return;
            }
        };

        match result {
            Ok(()) if line.ends_with(';') => {
                self.emit(sink, Token::new(";", TokenKind::Separator))
            }
            Ok(()) => {}
            Err(kind) => self.report(sink, Diagnostic::new(line_no, kind)),
        }
    }

    fn declaration(
        &mut self,
        line_no: usize,
        ty: Type,
        keyword: &str,
        name: &str,
        value: &str,
        sink: &mut dyn Sink,
    ) -> TypeCheckerResult<()> {
        self.checker.declare(name, ty, value, line_no)?;

        self.emit(sink, Token::new(keyword, TokenKind::Keyword));
        self.emit(sink, Token::new(name, TokenKind::Identifier));
        self.emit(sink, Token::new("=", TokenKind::Operator));
        self.emit_classified(line_no, value, sink);
        Ok(())
    }

    fn assignment(
        &mut self,
        line_no: usize,
        name: &str,
        value: &str,
        sink: &mut dyn Sink,
    ) -> TypeCheckerResult<()> {
        self.checker.assign(name, value)?;

        self.emit(sink, Token::new(name, TokenKind::Identifier));
        self.emit(sink, Token::new("=", TokenKind::Operator));
        self.emit_classified(line_no, value, sink);
        Ok(())
    }

    fn emit_classified(&mut self, line_no: usize, text: &str, sink: &mut dyn Sink) {
        for lexeme in Lexer::new(text) {
            let token = Token::classify(lexeme.text);
            if token.kind == TokenKind::Unknown {
                self.report(
                    sink,
                    Diagnostic::new(
                        line_no,
                        DiagnosticKind::UnrecognizedToken(lexeme.text.to_string()),
                    ),
                );
            } else {
                self.emit(sink, token);
            }
        }
    }

    fn emit(&mut self, sink: &mut dyn Sink, token: Token) {
        self.summary.tokens += 1;
        sink.token(&token);
    }

    fn report(&mut self, sink: &mut dyn Sink, diagnostic: Diagnostic) {
        self.summary.diagnostics += 1;
        sink.diagnostic(&diagnostic);
    }
}
