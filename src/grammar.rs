//! The grammar representation. Symbol sets and rule alternatives live in ordered collections,
//! so every traversal of a grammar follows one canonical order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter;

use itertools::Itertools;

use crate::rule_builder::RuleBuilder;
use crate::symbol::Symbol;
use crate::GrammarError;

/// A context-free grammar over named symbols.
///
/// A grammar owns a set of declared nonterminal names, a set of declared terminal names, a map
/// from nonterminal to its rule alternatives with duplicates collapsed, and a designated start
/// symbol. The start symbol is a declared nonterminal at all times.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grammar {
    nonterminals: BTreeSet<String>,
    terminals: BTreeSet<String>,
    rules: BTreeMap<String, BTreeSet<Vec<Symbol>>>,
    start: String,
}

/// A borrowed view of one rule alternative.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RuleRef<'a> {
    /// The rule's left-hand side.
    pub lhs: &'a str,
    /// One right-hand side alternative. Empty for an empty-string rule.
    pub rhs: &'a [Symbol],
}

impl Grammar {
    /// Creates an empty grammar with the given start symbol. The start symbol counts as a
    /// declared nonterminal.
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        let mut nonterminals = BTreeSet::new();
        nonterminals.insert(start.clone());
        Grammar {
            nonterminals,
            terminals: BTreeSet::new(),
            rules: BTreeMap::new(),
            start,
        }
    }

    /// Creates an empty grammar that shares another grammar's declared symbols and start
    /// symbol.
    pub fn with_symbols_of(other: &Grammar) -> Self {
        Grammar {
            nonterminals: other.nonterminals.clone(),
            terminals: other.terminals.clone(),
            rules: BTreeMap::new(),
            start: other.start.clone(),
        }
    }

    /// Declares a nonterminal.
    pub fn add_nonterminal(&mut self, name: impl Into<String>) {
        self.nonterminals.insert(name.into());
    }

    /// Declares a terminal.
    pub fn add_terminal(&mut self, name: impl Into<String>) {
        self.terminals.insert(name.into());
    }

    /// Returns the start symbol's name.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the declared nonterminal names.
    pub fn nonterminals(&self) -> &BTreeSet<String> {
        &self.nonterminals
    }

    /// Returns the declared terminal names.
    pub fn terminals(&self) -> &BTreeSet<String> {
        &self.terminals
    }

    /// Starts building rules with the given LHS. The LHS counts as a declared nonterminal.
    pub fn rule(&mut self, lhs: impl Into<String>) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs.into())
    }

    /// Adds a rule alternative. The LHS counts as a declared nonterminal; duplicate
    /// alternatives collapse.
    pub fn add_rule(&mut self, lhs: impl Into<String>, rhs: Vec<Symbol>) {
        let lhs = lhs.into();
        self.nonterminals.insert(lhs.clone());
        self.rules.entry(lhs).or_default().insert(rhs);
    }

    pub(crate) fn remove_nonterminal(&mut self, name: &str) {
        self.nonterminals.remove(name);
        self.rules.remove(name);
    }

    /// Returns an iterator over all rule alternatives, ordered by LHS name and within one LHS
    /// by the canonical order of the alternatives.
    pub fn rules<'a>(&'a self) -> impl Iterator<Item = RuleRef<'a>> {
        self.rules.iter().flat_map(|(lhs, alternatives)| {
            alternatives.iter().map(move |rhs| RuleRef { lhs, rhs })
        })
    }

    /// Returns the alternatives of the given nonterminal in canonical order. Empty when the
    /// nonterminal has no rules.
    pub fn alternatives<'a>(&'a self, lhs: &str) -> impl Iterator<Item = &'a [Symbol]> {
        self.rules
            .get(lhs)
            .into_iter()
            .flatten()
            .map(|rhs| rhs.as_slice())
    }

    /// Returns the number of rule alternatives in the grammar.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(|alternatives| alternatives.len()).sum()
    }

    /// Checks that every rule is built from declared symbols. Reports the first rule that
    /// references an undeclared name.
    pub fn validate(&self) -> Result<(), GrammarError> {
        for rule in self.rules() {
            if !self.nonterminals.contains(rule.lhs) {
                return Err(GrammarError::MalformedGrammar {
                    lhs: rule.lhs.to_string(),
                    symbol: rule.lhs.to_string(),
                });
            }
            for sym in rule.rhs {
                let declared = match sym {
                    Symbol::Terminal(name) => self.terminals.contains(name),
                    Symbol::Nonterminal(name) => self.nonterminals.contains(name),
                };
                if !declared {
                    return Err(GrammarError::MalformedGrammar {
                        lhs: rule.lhs.to_string(),
                        symbol: sym.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grammar {
    /// Formats the grammar with one line per nonterminal that has rules: the start symbol
    /// first, the rest in lexicographic order. The output looks like this:
    ///
    /// ```ignore
    /// S -> a | I A
    /// I -> a
    /// ```
    ///
    /// Alternatives keep their canonical order, symbols within an alternative are separated by
    /// single spaces, and an empty right-hand side prints as `ε`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let remaining = self.rules.keys().filter(|lhs| **lhs != self.start);
        for lhs in iter::once(&self.start).chain(remaining) {
            if let Some(alternatives) = self.rules.get(lhs) {
                let rendered = alternatives
                    .iter()
                    .map(|rhs| {
                        if rhs.is_empty() {
                            "ε".to_string()
                        } else {
                            rhs.iter().join(" ")
                        }
                    })
                    .join(" | ");
                writeln!(f, "{} -> {}", lhs, rendered)?;
            }
        }
        Ok(())
    }
}
