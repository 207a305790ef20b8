use cnf::{Grammar, Symbol};

fn t(name: &str) -> Symbol {
    Symbol::terminal(name)
}

fn nt(name: &str) -> Symbol {
    Symbol::nonterminal(name)
}

/// Grammar over `a` and `b` that exercises the whole pipeline: `C` is nullable, removing its
/// empty alternative introduces the unit rules `S -> A` and `A -> B`, `E` is unreachable from
/// the start symbol, and three right-hand sides are too long for Chomsky normal form.
pub fn grammar() -> Grammar {
    let mut grammar = Grammar::new("S");
    grammar.add_terminal("a");
    grammar.add_terminal("b");
    grammar
        .rule("S")
        .rhs([t("a"), nt("A")])
        .rhs([nt("A"), nt("C")])
        .rule("A")
        .rhs([t("a")])
        .rhs([nt("A"), nt("S"), nt("C")])
        .rhs([nt("B"), nt("C")])
        .rhs([t("a"), nt("D")])
        .rule("B")
        .rhs([t("b")])
        .rhs([t("b"), nt("A")])
        .rule("C")
        .rhs([])
        .rhs([nt("B"), nt("A")])
        .rule("D")
        .rhs([t("a"), t("b"), nt("C")])
        .rule("E")
        .rhs([t("a"), nt("B")]);
    grammar
}
