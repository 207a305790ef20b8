//! Binarization into Chomsky normal form shape. Long right-hand sides become chains of fresh
//! binary rules; terminals inside two-symbol right-hand sides move behind dedicated
//! single-terminal nonterminals.

use std::collections::BTreeMap;

use log::debug;

use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolSource};
use crate::GrammarError;

/// Binarizes the grammar, minting fresh nonterminals from a source seeded with the grammar's
/// own nonterminal names.
///
/// The input must already be free of empty, unit, unreachable and unproductive rules; every
/// output rule is then either a single terminal or a pair of nonterminals.
pub fn binarize(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    let mut source = SymbolSource::new(grammar);
    binarize_with(grammar, &mut source)
}

/// Binarizes the grammar, minting fresh nonterminals from the given source.
///
/// Rules are visited in canonical order, in two passes. A right-hand side `s1 s2 .. sk` with
/// `k > 2` becomes a left-leaning chain allocated bottom-first: `X1 -> s1 s2`, `X2 -> X1 s3`,
/// up to `A -> X(k-2) sk`. The second pass replaces every terminal inside a two-symbol
/// right-hand side with a substitute nonterminal, one per distinct terminal, adding the rule
/// `Substitute -> terminal` once. Rerunning on equal input with an equally seeded source
/// yields identical output.
pub fn binarize_with(
    grammar: &Grammar,
    source: &mut SymbolSource,
) -> Result<Grammar, GrammarError> {
    let chained = limit_rhs_len(grammar, source)?;
    isolate_terminals(&chained, source)
}

fn limit_rhs_len(grammar: &Grammar, source: &mut SymbolSource) -> Result<Grammar, GrammarError> {
    let mut result = Grammar::with_symbols_of(grammar);
    for rule in grammar.rules() {
        if rule.rhs.len() <= 2 {
            result.add_rule(rule.lhs, rule.rhs.to_vec());
            continue;
        }
        // The first fresh symbol takes the two leftmost symbols, each following fresh symbol
        // appends one more, and the original LHS takes the last.
        let mut prev = source.next_sym()?;
        result.add_rule(prev.name(), vec![rule.rhs[0].clone(), rule.rhs[1].clone()]);
        for sym in &rule.rhs[2..rule.rhs.len() - 1] {
            let next = source.next_sym()?;
            result.add_rule(next.name(), vec![prev.clone(), sym.clone()]);
            prev = next;
        }
        result.add_rule(rule.lhs, vec![prev, rule.rhs[rule.rhs.len() - 1].clone()]);
    }
    Ok(result)
}

fn isolate_terminals(
    grammar: &Grammar,
    source: &mut SymbolSource,
) -> Result<Grammar, GrammarError> {
    let mut result = Grammar::with_symbols_of(grammar);
    let mut substitutes: BTreeMap<String, Symbol> = BTreeMap::new();
    for rule in grammar.rules() {
        if rule.rhs.len() < 2 {
            result.add_rule(rule.lhs, rule.rhs.to_vec());
            continue;
        }
        let mut rhs = Vec::with_capacity(rule.rhs.len());
        for sym in rule.rhs {
            match sym {
                Symbol::Terminal(name) => {
                    let substitute = match substitutes.get(name) {
                        Some(substitute) => substitute.clone(),
                        None => {
                            let fresh = source.next_sym()?;
                            substitutes.insert(name.clone(), fresh.clone());
                            result.add_rule(fresh.name(), vec![sym.clone()]);
                            fresh
                        }
                    };
                    rhs.push(substitute);
                }
                Symbol::Nonterminal(_) => rhs.push(sym.clone()),
            }
        }
        result.add_rule(rule.lhs, rhs);
    }
    debug!("isolated {} distinct terminal(s)", substitutes.len());
    Ok(result)
}
