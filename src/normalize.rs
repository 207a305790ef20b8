//! The normalization pipeline.

use log::debug;

use crate::binarize::binarize_with;
use crate::grammar::Grammar;
use crate::nulling::eliminate_nulling_rules;
use crate::symbol::SymbolSource;
use crate::unit::eliminate_unit_rules;
use crate::usefulness::{remove_unproductive_symbols, remove_unreachable_symbols};
use crate::GrammarError;

impl Grammar {
    /// Transforms the grammar into an equivalent grammar in Chomsky normal form.
    ///
    /// The grammar is validated first, then rewritten in five steps: rules with empty
    /// right-hand sides are eliminated, unit rules collapse, nonterminals unreachable from the
    /// start symbol are pruned, unproductive nonterminals are pruned, and long and mixed
    /// right-hand sides are binarized. Fresh nonterminals minted during binarization avoid
    /// every name the input grammar declares, including names the pruning steps removed.
    ///
    /// The language represented by the grammar is preserved, except for the possible lack of
    /// the empty string.
    pub fn to_cnf(&self) -> Result<Grammar, GrammarError> {
        self.validate()?;
        let mut source = SymbolSource::new(self);
        debug!("eliminating nulling rules: {} rule(s)", self.rule_count());
        let grammar = eliminate_nulling_rules(self);
        debug!("eliminating unit rules: {} rule(s)", grammar.rule_count());
        let grammar = eliminate_unit_rules(&grammar);
        debug!("pruning unreachable symbols: {} rule(s)", grammar.rule_count());
        let grammar = remove_unreachable_symbols(&grammar);
        debug!("pruning unproductive symbols: {} rule(s)", grammar.rule_count());
        let grammar = remove_unproductive_symbols(&grammar)?;
        debug!("binarizing: {} rule(s)", grammar.rule_count());
        binarize_with(&grammar, &mut source)
    }
}
