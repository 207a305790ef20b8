//! Library for normalizing context-free grammars to Chomsky normal form.
//!
//! Normalization runs as a pipeline of pure rewrites: elimination of empty right-hand sides,
//! elimination of unit rules, pruning of unreachable and unproductive nonterminals, and
//! binarization with terminal isolation. The language represented by the grammar is preserved,
//! except for the possible lack of the empty string.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]
#![cfg_attr(test, allow(missing_docs))]

pub mod analysis;
pub mod binarize;
pub mod grammar;
mod normalize;
pub mod nulling;
pub mod rule_builder;
pub mod symbol;
pub mod unit;
pub mod usefulness;

use std::fmt;

pub use crate::grammar::{Grammar, RuleRef};
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol::{Symbol, SymbolSource};

/// Represents a failure to normalize a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A rule references a symbol that is neither a declared terminal nor a declared
    /// nonterminal.
    MalformedGrammar {
        /// The left-hand side of the offending rule.
        lhs: String,
        /// The undeclared name.
        symbol: String,
    },
    /// The start symbol cannot derive any terminal string.
    UnproductiveStart {
        /// The start symbol's name.
        start: String,
    },
    /// The space of fresh nonterminal names is exhausted.
    AllocatorExhausted,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::MalformedGrammar { lhs, symbol } => {
                write!(f, "rule for {} references undeclared symbol {}", lhs, symbol)
            }
            GrammarError::UnproductiveStart { start } => {
                write!(f, "start symbol {} derives no terminal string", start)
            }
            GrammarError::AllocatorExhausted => write!(f, "no fresh nonterminal names left"),
        }
    }
}

impl std::error::Error for GrammarError {}
