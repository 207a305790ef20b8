//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: String,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    pub(crate) fn new(grammar: &'a mut Grammar, lhs: String) -> Self {
        grammar.add_nonterminal(lhs.clone());
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(self, lhs: impl Into<String>) -> Self {
        RuleBuilder::new(self.grammar, lhs.into())
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.grammar
            .add_rule(self.lhs.clone(), syms.as_ref().to_vec());
        self
    }
}
