#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use cnf::{Grammar, Symbol};

pub fn t(name: &str) -> Symbol {
    Symbol::terminal(name)
}

pub fn nt(name: &str) -> Symbol {
    Symbol::nonterminal(name)
}

pub fn eq_rules(left: &Grammar, right: &Grammar) -> bool {
    let mut rules_left = left
        .rules()
        .map(|rule| (rule.lhs.to_string(), rule.rhs.to_vec()))
        .collect::<Vec<_>>();
    let mut rules_right = right
        .rules()
        .map(|rule| (rule.lhs.to_string(), rule.rhs.to_vec()))
        .collect::<Vec<_>>();

    rules_left.sort();
    rules_right.sort();

    rules_left == rules_right
}

pub fn assert_eq(left: &Grammar, right: &Grammar) {
    if !eq_rules(left, right) {
        eprintln!("Left:\n{}", left);
        eprintln!("Right:\n{}", right);
        panic!("Rules expected to be equal");
    }
    assert_eq!(
        left.start(),
        right.start(),
        "Grammar starts expected to be equal"
    );
}

pub fn assert_normal_form(grammar: &Grammar) {
    for rule in grammar.rules() {
        assert!(
            matches!(
                rule.rhs,
                [Symbol::Terminal(_)] | [Symbol::Nonterminal(_), Symbol::Nonterminal(_)]
            ),
            "rule {} -> {:?} is not in Chomsky normal form",
            rule.lhs,
            rule.rhs
        );
    }
}

/// Decides whether the grammar derives the given terminal string.
///
/// The search expands the leftmost nonterminal of each sentential form, pruning forms whose
/// terminal prefix diverges from the target and forms whose minimal derivable length already
/// exceeds the target's length.
pub fn derives(grammar: &Grammar, target: &[&str]) -> bool {
    let min_lens = minimal_lengths(grammar);
    let start = vec![Symbol::nonterminal(grammar.start())];
    let mut visited = BTreeSet::new();
    visited.insert(start.clone());
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(form) = queue.pop_front() {
        let fits = form
            .iter()
            .try_fold(0usize, |len, sym| match sym {
                Symbol::Terminal(_) => Some(len + 1),
                Symbol::Nonterminal(name) => {
                    min_lens.get(name).copied().flatten().map(|min| len + min)
                }
            })
            .map_or(false, |len| len <= target.len());
        if !fits {
            continue;
        }

        let leftmost = form.iter().position(|sym| sym.is_nonterminal());
        let prefix_len = leftmost.unwrap_or(form.len());
        let prefix_matches = prefix_len <= target.len()
            && form[..prefix_len]
                .iter()
                .zip(target)
                .all(|(sym, expected)| sym.name() == *expected);
        if !prefix_matches {
            continue;
        }

        if let Some(at) = leftmost {
            let lhs = form[at].name().to_string();
            for alternative in grammar.alternatives(&lhs) {
                let mut expanded = Vec::with_capacity(form.len() + alternative.len());
                expanded.extend_from_slice(&form[..at]);
                expanded.extend_from_slice(alternative);
                expanded.extend_from_slice(&form[at + 1..]);
                if visited.insert(expanded.clone()) {
                    queue.push_back(expanded);
                }
            }
        } else if prefix_len == target.len() {
            return true;
        }
    }

    false
}

/// Enumerates every string over the alphabet with a length between 1 and `max_len`.
pub fn strings_over(alphabet: &[&'static str], max_len: usize) -> Vec<Vec<&'static str>> {
    let mut strings: Vec<Vec<&'static str>> = vec![];
    let mut layer: Vec<Vec<&'static str>> = vec![vec![]];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |letter| {
                    let mut string = prefix.clone();
                    string.push(*letter);
                    string
                })
            })
            .collect();
        strings.extend(layer.iter().cloned());
    }
    strings
}

/// Returns the minimal length of a terminal string each nonterminal derives, or `None` for
/// unproductive nonterminals.
fn minimal_lengths(grammar: &Grammar) -> BTreeMap<String, Option<usize>> {
    let mut min_lens: BTreeMap<String, Option<usize>> = grammar
        .nonterminals()
        .iter()
        .map(|name| (name.clone(), None))
        .collect();
    loop {
        let before = min_lens.clone();
        for rule in grammar.rules() {
            let derived = rule.rhs.iter().try_fold(0usize, |len, sym| match sym {
                Symbol::Terminal(_) => Some(len + 1),
                Symbol::Nonterminal(name) => {
                    min_lens.get(name).copied().flatten().map(|min| len + min)
                }
            });
            if let Some(len) = derived {
                let known = min_lens.entry(rule.lhs.to_string()).or_insert(None);
                if known.map_or(true, |current| len < current) {
                    *known = Some(len);
                }
            }
        }
        if min_lens == before {
            return min_lens;
        }
    }
}
