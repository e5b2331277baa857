use super::GrammarAtom;

/// Substitute identifier atoms with their entries from the name table.
///
/// Unrecognized identifiers are kept as they are; lowering rejects them if
/// they end up where a reference is required.
pub(crate) fn resolve<TSym: Clone>(
    atoms: Vec<GrammarAtom<TSym>>,
    symbols: &[(&str, TSym)],
) -> Vec<GrammarAtom<TSym>> {
    atoms
        .into_iter()
        .map(|atom| match atom {
            GrammarAtom::Ident(name) => match symbols.iter().find(|(key, _)| *key == name) {
                Some((_, sym)) => GrammarAtom::Symbol(sym.clone()),
                None => GrammarAtom::Ident(name),
            },
            other => other,
        })
        .collect()
}
