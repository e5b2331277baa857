use super::{GrammarAtom, OPERATORS};

/// Split grammar notation into atoms.
///
/// Whitespace separates tokens and each of `| ( ) + * ?` is an atom of its
/// own; everything else accumulates into identifiers. Empty tokens are
/// discarded.
pub(crate) fn tokenize_grammar<TSym>(src: &str) -> Vec<GrammarAtom<TSym>> {
    let mut atoms = Vec::new();
    let mut ident = String::new();
    for c in src.chars() {
        if c.is_whitespace() {
            if !ident.is_empty() {
                atoms.push(GrammarAtom::Ident(std::mem::take(&mut ident)));
            }
        } else if OPERATORS.contains(&c) {
            if !ident.is_empty() {
                atoms.push(GrammarAtom::Ident(std::mem::take(&mut ident)));
            }
            atoms.push(GrammarAtom::Operator(c));
        } else {
            ident.push(c);
        }
    }
    if !ident.is_empty() {
        atoms.push(GrammarAtom::Ident(ident));
    }
    atoms
}
