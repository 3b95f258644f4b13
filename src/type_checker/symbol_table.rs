use ordermap::OrderMap;

use super::r#type::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    pub ty: Type,
    pub line: usize,
}

/// Declared variables of a run, kept in declaration order.
pub type SymbolTable = OrderMap<String, SymbolTableEntry>;
