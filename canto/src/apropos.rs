//! Substring search over bound symbols
use crate::env::{Binding, EnvRef};
use crate::expr::SymbolId;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Search the environment chain for symbols whose names contain the query,
/// case insensitively. Each entry pairs a name with its documentation, the
/// innermost binding winning for shadowed names. Results are sorted by name
pub fn search(env: &EnvRef, query: &str) -> Vec<(SymbolId, Option<String>)> {
    let query = query.to_uppercase();
    let mut matches: BTreeMap<SymbolId, Option<String>> = BTreeMap::new();
    let mut cursor = Some(Rc::clone(env));
    while let Some(scope) = cursor {
        let scope = scope.borrow();
        for (name, binding) in scope.iter() {
            if !name.as_str().to_uppercase().contains(&query) {
                continue;
            }
            matches
                .entry(name.clone())
                .or_insert_with(|| documentation_of(binding));
        }
        cursor = scope.parent().map(Rc::clone);
    }
    matches.into_iter().collect()
}

/// Documentation attached to the named symbol, probing the name as given
/// and then its canonical form
pub fn documentation(env: &EnvRef, name: &SymbolId) -> Option<String> {
    doc_for(env, name).or_else(|| doc_for(env, &name.canonical()))
}

fn doc_for(env: &EnvRef, name: &SymbolId) -> Option<String> {
    match env.borrow().lookup(name) {
        Some(Binding::Function(func)) => func.doc,
        _ => None,
    }
}

fn documentation_of(binding: &Binding) -> Option<String> {
    match binding {
        Binding::Function(func) => func.doc.clone(),
        Binding::Value(_) => None,
    }
}
