//! Analysis of symbol usefulness. Useful symbols are both reachable and productive.

use bit_vec::BitVec;
use log::trace;

use crate::analysis::{close_rhs_property, direct_derivation_matrix, NonterminalIndex};
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::GrammarError;

/// Contains the information about usefulness of the grammar's nonterminals.
pub struct Usefulness {
    index: NonterminalIndex,
    reachable: BitVec,
    productive: BitVec,
}

impl Usefulness {
    /// Analyzes the grammar's nonterminals. In particular, it checks for reachable and
    /// productive symbols.
    pub fn new(grammar: &Grammar) -> Self {
        let index = NonterminalIndex::new(grammar);
        let reachable = reachable_syms(grammar, &index);
        let productive = productive_syms(grammar, &index);
        Usefulness {
            index,
            reachable,
            productive,
        }
    }

    /// Checks whether a nonterminal is reachable from the start symbol.
    pub fn reachable(&self, name: &str) -> bool {
        self.index
            .position(name)
            .map_or(false, |position| self.reachable[position])
    }

    /// Checks whether a nonterminal can derive some terminal string.
    pub fn productive(&self, name: &str) -> bool {
        self.index
            .position(name)
            .map_or(false, |position| self.productive[position])
    }

    /// Checks whether all nonterminals are both reachable and productive.
    pub fn all_useful(&self) -> bool {
        self.reachable.all() && self.productive.all()
    }
}

/// Returns the set of nonterminals reachable from the start symbol.
fn reachable_syms(grammar: &Grammar, index: &NonterminalIndex) -> BitVec {
    let mut matrix = direct_derivation_matrix(grammar, index);
    matrix.transitive_closure();
    matrix.reflexive_closure();
    let mut reachable = BitVec::from_elem(index.len(), false);
    if let Some(start) = index.position(grammar.start()) {
        for (position, is_reachable) in matrix.iter_row(start).enumerate() {
            if is_reachable {
                reachable.set(position, true);
            }
        }
    }
    reachable
}

/// Returns the set of productive nonterminals. An empty right-hand side counts as productive:
/// it derives the empty terminal string.
fn productive_syms(grammar: &Grammar, index: &NonterminalIndex) -> BitVec {
    let mut productive = BitVec::from_elem(index.len(), false);
    close_rhs_property(grammar, index, &mut productive, |productive, rhs| {
        rhs.iter().all(|sym| match sym {
            Symbol::Terminal(_) => true,
            Symbol::Nonterminal(name) => index
                .position(name)
                .map_or(false, |position| productive[position]),
        })
    });
    productive
}

/// Removes nonterminals unreachable from the start symbol, with all their rules, and drops
/// every rule whose right-hand side mentions a removed nonterminal. The start symbol is
/// reachable from itself and always remains.
pub fn remove_unreachable_symbols(grammar: &Grammar) -> Grammar {
    let usefulness = Usefulness::new(grammar);
    prune(grammar, |name| usefulness.reachable(name))
}

/// Removes unproductive nonterminals, with all their rules, and drops every rule whose
/// right-hand side mentions a removed nonterminal.
///
/// Fails with [`GrammarError::UnproductiveStart`] when the start symbol itself derives no
/// terminal string, instead of returning a grammar with no rules for the start symbol.
pub fn remove_unproductive_symbols(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    let usefulness = Usefulness::new(grammar);
    if !usefulness.productive(grammar.start()) {
        return Err(GrammarError::UnproductiveStart {
            start: grammar.start().to_string(),
        });
    }
    Ok(prune(grammar, |name| usefulness.productive(name)))
}

fn prune(grammar: &Grammar, keep: impl Fn(&str) -> bool) -> Grammar {
    let mut result = Grammar::with_symbols_of(grammar);
    for name in grammar.nonterminals() {
        if !keep(name) {
            trace!("removing useless nonterminal {}", name);
            result.remove_nonterminal(name);
        }
    }
    for rule in grammar.rules() {
        let in_kept_set = keep(rule.lhs)
            && rule.rhs.iter().all(|sym| match sym {
                Symbol::Terminal(_) => true,
                Symbol::Nonterminal(name) => keep(name),
            });
        if in_kept_set {
            result.add_rule(rule.lhs, rule.rhs.to_vec());
        }
    }
    result
}
