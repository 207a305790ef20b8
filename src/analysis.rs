//! Analysis plumbing shared by the transformation passes: a dense index over nonterminal
//! names, derivation matrices over that index, and a pass-based closure of per-symbol
//! properties.

use std::collections::BTreeMap;

use bit_matrix::BitMatrix;
use bit_vec::BitVec;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// A dense index over a grammar's nonterminal names, in lexicographic order.
pub struct NonterminalIndex {
    names: Vec<String>,
    positions: BTreeMap<String, usize>,
}

impl NonterminalIndex {
    /// Indexes the grammar's declared nonterminals.
    pub fn new(grammar: &Grammar) -> Self {
        let names: Vec<String> = grammar.nonterminals().iter().cloned().collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        NonterminalIndex { names, positions }
    }

    /// Returns the number of indexed nonterminals.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the position of the given name, if it is indexed.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns the name at the given position.
    pub fn name(&self, position: usize) -> &str {
        &self.names[position]
    }
}

/// Returns the direct derivation matrix: the entry `(A, B)` is set when `B` occurs on some
/// right-hand side of `A`.
pub fn direct_derivation_matrix(grammar: &Grammar, index: &NonterminalIndex) -> BitMatrix {
    let mut derivation = BitMatrix::new(index.len(), index.len());
    for rule in grammar.rules() {
        if let Some(row) = index.position(rule.lhs) {
            for sym in rule.rhs {
                if let Symbol::Nonterminal(name) = sym {
                    if let Some(col) = index.position(name) {
                        derivation.set(row, col, true);
                    }
                }
            }
        }
    }
    derivation
}

/// Returns the unit derivation matrix, transitively closed.
pub fn unit_derivation_matrix(grammar: &Grammar, index: &NonterminalIndex) -> BitMatrix {
    let mut unit_derivation = BitMatrix::new(index.len(), index.len());
    for rule in grammar.rules() {
        // A rule of form `A -> A` is not a cycle. Unit rules form a directed graph, and the
        // rule `A -> A` is then a self-loop. Self-loops aren't cycles.
        if let [Symbol::Nonterminal(target)] = rule.rhs {
            if target.as_str() != rule.lhs {
                if let (Some(row), Some(col)) = (index.position(rule.lhs), index.position(target))
                {
                    unit_derivation.set(row, col, true);
                }
            }
        }
    }
    unit_derivation.transitive_closure();
    unit_derivation
}

/// Grows a property set over the nonterminal index until a full pass adds nothing: whenever
/// some right-hand side of `A` satisfies the predicate under the current set, `A` gains the
/// property. Termination is by comparing the set before and after each pass.
pub fn close_rhs_property<F>(
    grammar: &Grammar,
    index: &NonterminalIndex,
    property: &mut BitVec,
    rhs_qualifies: F,
) where
    F: Fn(&BitVec, &[Symbol]) -> bool,
{
    loop {
        let before = property.clone();
        for rule in grammar.rules() {
            if let Some(position) = index.position(rule.lhs) {
                if !property[position] && rhs_qualifies(property, rule.rhs) {
                    property.set(position, true);
                }
            }
        }
        if *property == before {
            return;
        }
    }
}
