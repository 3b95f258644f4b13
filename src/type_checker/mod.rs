use crate::{
    diagnostic::DiagnosticKind,
    lexer::{
        token::{has_arithmetic_operator, is_arithmetic_operator, is_identifier, TokenKind},
        Lexer,
    },
};

pub mod r#type;
use r#type::{is_boolean_literal, Type};

pub mod symbol_table;
use symbol_table::{SymbolTable, SymbolTableEntry};


/// What happens when a variable is declared a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RedeclarationPolicy {
    /// The new declaration replaces the old entry.
    #[default]
    Overwrite,
    /// The new declaration is reported and the old entry is kept.
    Reject,
}

pub type TypeCheckerResult<T> = Result<T, DiagnosticKind>;

pub struct TypeChecker {
    symbol_table: SymbolTable,
    redeclaration: RedeclarationPolicy,
}

impl TypeChecker {
    pub fn new(redeclaration: RedeclarationPolicy) -> Self {
        Self {
            symbol_table: SymbolTable::new(),
            redeclaration,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn get_symbol(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.symbol_table.get(name)
    }

    pub fn get_symbol_type(&self, name: &str) -> Option<Type> {
        self.get_symbol(name).map(|entry| entry.ty)
    }

    /// Checks `<ty> <name> = <value>` and records `name` on success. A
    /// failed declaration leaves the table untouched.
    pub fn declare(
        &mut self,
        name: &str,
        ty: Type,
        value: &str,
        line: usize,
    ) -> TypeCheckerResult<()> {
        if !is_identifier(name) {
            return Err(DiagnosticKind::InvalidIdentifier(name.to_string()));
        }

        if let (RedeclarationPolicy::Reject, Some(prev)) =
            (self.redeclaration, self.get_symbol(name))
        {
            return Err(DiagnosticKind::Redeclaration {
                name: name.to_string(),
                prev_line: prev.line,
            });
        }

        let value_ty = self.infer(value)?;
        if value_ty != ty {
            return Err(DiagnosticKind::TypeMismatchDeclaration {
                name: name.to_string(),
                expected: ty,
                got: value_ty,
            });
        }

        self.symbol_table
            .insert(name.to_string(), SymbolTableEntry { ty, line });
        Ok(())
    }

    /// Checks `<name> = <value>`. The value must have exactly the stored
    /// type; unlike inside arithmetic, `int` is not promoted to `float` here.
    pub fn assign(&self, name: &str, value: &str) -> TypeCheckerResult<()> {
        let Some(expected) = self.get_symbol_type(name) else {
            return Err(DiagnosticKind::UndeclaredVariable(name.to_string()));
        };

        let got = self.infer(value)?;
        if got != expected {
            return Err(DiagnosticKind::TypeMismatchAssignment {
                name: name.to_string(),
                expected,
                got,
            });
        }
        Ok(())
    }

    pub fn infer(&self, expr: &str) -> TypeCheckerResult<Type> {
        let expr = expr.trim();
        if let Some(ty) = self.get_symbol_type(expr) {
            Ok(ty)
        } else if has_arithmetic_operator(expr) {
            self.infer_arithmetic(expr)
        } else {
            self.operand_type(expr)
        }
    }

    /// Folds operand types left to right. `float` absorbs anything it meets,
    /// any other pair of differing types is an error. Parentheses are operands
    /// of type `unknown`. A mismatch is reported once: the statement does not
    /// also get a declaration or assignment mismatch against `unknown`.
    fn infer_arithmetic(&self, expr: &str) -> TypeCheckerResult<Type> {
        let operands = Lexer::new(expr)
            .map(|lexeme| lexeme.text)
            .filter(|text| !is_arithmetic_operator(text));

        let mut result = None;
        for operand in operands {
            let ty = self.operand_type(operand)?;
            result = Some(match result {
                None => ty,
                Some(Type::Float) => Type::Float,
                Some(_) if ty == Type::Float => Type::Float,
                Some(acc) if acc == ty => acc,
                Some(acc) => {
                    return Err(DiagnosticKind::TypeMismatchInExpression {
                        expr: expr.to_string(),
                        lhs: acc,
                        rhs: ty,
                    })
                }
            });
        }
        Ok(result.unwrap_or(Type::Unknown))
    }

    fn operand_type(&self, operand: &str) -> TypeCheckerResult<Type> {
        if let Some(ty) = self.get_symbol_type(operand) {
            Ok(ty)
        } else if TokenKind::classify(operand) == TokenKind::Identifier
            && !is_boolean_literal(operand)
        {
            Err(DiagnosticKind::UndeclaredVariable(operand.to_string()))
        } else {
            Ok(Type::of_literal(operand))
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new(RedeclarationPolicy::default())
    }
}
