//! Source of fresh nonterminal symbols.

use std::collections::BTreeSet;

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::GrammarError;

/// A source of fresh nonterminal symbols, scoped to one normalization run.
///
/// The source tracks every name in use: the names the seed grammar declares plus every name
/// minted so far. Candidate names are the single uppercase ASCII letters `A` through `Z` in
/// alphabetical order, then the two-letter combinations `AA` through `ZZ` in lexicographic
/// order. An allocation returns the first candidate not in use and permanently reserves it;
/// names are never returned to the pool within a run.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    in_use: BTreeSet<String>,
}

impl SymbolSource {
    /// Creates a source of fresh symbols, seeded with the grammar's nonterminal names.
    pub fn new(grammar: &Grammar) -> Self {
        SymbolSource {
            in_use: grammar.nonterminals().iter().cloned().collect(),
        }
    }

    /// Generates a new unique nonterminal.
    ///
    /// Fails with [`GrammarError::AllocatorExhausted`] once all 702 candidate names are taken.
    pub fn next_sym(&mut self) -> Result<Symbol, GrammarError> {
        for name in candidates() {
            if !self.in_use.contains(&name) {
                self.in_use.insert(name.clone());
                return Ok(Symbol::Nonterminal(name));
            }
        }
        Err(GrammarError::AllocatorExhausted)
    }

    /// Returns the number of names in use, minted or inherited from the seed grammar.
    pub fn num_in_use(&self) -> usize {
        self.in_use.len()
    }
}

fn candidates() -> impl Iterator<Item = String> {
    let singles = (b'A'..=b'Z').map(|letter| (letter as char).to_string());
    let pairs = (b'A'..=b'Z').flat_map(|first| {
        (b'A'..=b'Z').map(move |second| format!("{}{}", first as char, second as char))
    });
    singles.chain(pairs)
}
