//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by a
//! tag and a name; the tag carries the terminal/nonterminal distinction, so that letter case
//! never encodes grammar semantics.

pub mod source;

use std::fmt;

pub use self::source::SymbolSource;

/// A grammar symbol.
///
/// Symbols are ordered by tag first, then by name, which gives every collection of symbols one
/// canonical order.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// An atomic symbol of the described language. Never rewritten.
    Terminal(String),
    /// A symbol rewritten by grammar rules.
    Nonterminal(String),
}

impl Symbol {
    /// Creates a terminal symbol.
    pub fn terminal(name: impl Into<String>) -> Self {
        Symbol::Terminal(name.into())
    }

    /// Creates a nonterminal symbol.
    pub fn nonterminal(name: impl Into<String>) -> Self {
        Symbol::Nonterminal(name.into())
    }

    /// Checks whether the symbol is a terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks whether the symbol is a nonterminal.
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    /// Returns the symbol's name.
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => name,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
