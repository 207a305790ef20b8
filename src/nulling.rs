//! Elimination of rules with empty right-hand sides.

use std::collections::BTreeSet;

use bit_vec::BitVec;
use itertools::Itertools;
use log::debug;

use crate::analysis::{close_rhs_property, NonterminalIndex};
use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Returns the set of nullable nonterminals: those deriving the empty string, through a direct
/// empty rule or through a right-hand side made of nullable symbols only.
pub fn nullable_set(grammar: &Grammar) -> BTreeSet<String> {
    let index = NonterminalIndex::new(grammar);
    let mut nullable = BitVec::from_elem(index.len(), false);
    // An empty right-hand side qualifies vacuously, so direct empty rules seed the set in the
    // first pass.
    close_rhs_property(grammar, &index, &mut nullable, |nullable, rhs| {
        rhs.iter().all(|sym| match sym {
            Symbol::Terminal(_) => false,
            Symbol::Nonterminal(name) => index
                .position(name)
                .map_or(false, |position| nullable[position]),
        })
    });
    nullable
        .iter()
        .enumerate()
        .filter(|&(_, is_nullable)| is_nullable)
        .map(|(position, _)| index.name(position).to_string())
        .collect()
}

/// Removes every rule with an empty right-hand side.
///
/// Each rule that mentions nullable symbols expands into all variants obtainable by deleting a
/// subset of those occurrences, except variants that would come out empty. A rule without
/// nullable symbols passes through unchanged. The language represented by the grammar is
/// preserved, except for the possible lack of the empty string.
pub fn eliminate_nulling_rules(grammar: &Grammar) -> Grammar {
    let nullable = nullable_set(grammar);
    debug!("eliminating nulling rules: {} nullable symbol(s)", nullable.len());
    let mut result = Grammar::with_symbols_of(grammar);
    for rule in grammar.rules() {
        let nullable_positions: Vec<usize> = rule
            .rhs
            .iter()
            .enumerate()
            .filter(|(_, sym)| sym.is_nonterminal() && nullable.contains(sym.name()))
            .map(|(position, _)| position)
            .collect();
        for deleted in nullable_positions.iter().copied().powerset() {
            let variant: Vec<Symbol> = rule
                .rhs
                .iter()
                .enumerate()
                .filter(|(position, _)| !deleted.contains(position))
                .map(|(_, sym)| sym.clone())
                .collect();
            if !variant.is_empty() {
                result.add_rule(rule.lhs, variant);
            }
        }
    }
    result
}
