//! Elimination of unit rules.

use log::debug;

use crate::analysis::{unit_derivation_matrix, NonterminalIndex};
use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Removes every rule whose right-hand side is a single nonterminal.
///
/// Unit chains collapse through the transitive closure of the unit derivation relation: each
/// nonterminal keeps its own non-unit alternatives and gains the non-unit alternatives of
/// every nonterminal its unit chains lead to. Members of a unit cycle end up sharing their
/// non-unit alternatives; a nonterminal with unit rules only ends up with no rules at all and
/// is left for the pruning passes.
pub fn eliminate_unit_rules(grammar: &Grammar) -> Grammar {
    let index = NonterminalIndex::new(grammar);
    let unit_derivation = unit_derivation_matrix(grammar, &index);
    let mut result = Grammar::with_symbols_of(grammar);
    let mut unit_count = 0usize;
    for lhs in grammar.nonterminals() {
        for rhs in grammar.alternatives(lhs) {
            if is_unit(rhs) {
                unit_count += 1;
            } else {
                result.add_rule(lhs.clone(), rhs.to_vec());
            }
        }
        if let Some(row) = index.position(lhs) {
            for (col, derives) in unit_derivation.iter_row(row).enumerate() {
                if derives {
                    for rhs in grammar.alternatives(index.name(col)) {
                        if !is_unit(rhs) {
                            result.add_rule(lhs.clone(), rhs.to_vec());
                        }
                    }
                }
            }
        }
    }
    debug!("eliminated {} unit rule(s)", unit_count);
    result
}

fn is_unit(rhs: &[Symbol]) -> bool {
    matches!(rhs, [Symbol::Nonterminal(_)])
}
