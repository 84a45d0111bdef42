use crate::ast;
use std::collections::HashMap;
use std::collections::HashSet;

/// Calls `visit` for every fragment spread in `selection_set`, descending into
/// nested field selections and inline fragments. Spreads are not followed
/// into the fragments they name.
pub(crate) fn visit_fragment_spreads<'doc, F>(
    selection_set: &'doc ast::query::SelectionSet,
    visit: &mut F,
) where
    F: FnMut(&'doc ast::query::FragmentSpread),
{
    use ast::query::Selection;
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) =>
                visit_fragment_spreads(&field.selection_set, visit),
            Selection::FragmentSpread(spread) => visit(spread),
            Selection::InlineFragment(inline) =>
                visit_fragment_spreads(&inline.selection_set, visit),
        }
    }
}

/// The top-level selection set of any definition.
pub(crate) fn definition_selection_set(
    def: &ast::query::Definition,
) -> &ast::query::SelectionSet {
    use ast::query::Definition;
    match def {
        Definition::Operation(op) => ast::operation_selection_set(op),
        Definition::Fragment(frag_def) => &frag_def.selection_set,
    }
}

/// Names of every fragment spread found anywhere in `doc`, starting from
/// every operation *and* every fragment definition it contains.
pub fn collect_fragment_spread_names(doc: &ast::query::Document) -> HashSet<&str> {
    let mut names = HashSet::new();
    for def in &doc.definitions {
        visit_fragment_spreads(definition_selection_set(def), &mut |spread| {
            names.insert(spread.fragment_name.as_str());
        });
    }
    names
}

/// Names of the fragments transitively reachable from the operations of
/// `doc`, following spreads through fragment definitions. Names of spreads
/// that do not resolve to a definition are included as well.
pub fn fragments_reachable_from_operations(doc: &ast::query::Document) -> HashSet<&str> {
    let mut fragment_defs: HashMap<&str, &ast::query::FragmentDefinition> = HashMap::new();
    for def in &doc.definitions {
        if let ast::query::Definition::Fragment(frag_def) = def {
            fragment_defs.entry(frag_def.name.as_str()).or_insert(frag_def);
        }
    }

    let mut reachable = HashSet::new();
    let mut pending = vec![];
    for def in &doc.definitions {
        if let ast::query::Definition::Operation(op) = def {
            visit_fragment_spreads(ast::operation_selection_set(op), &mut |spread| {
                pending.push(spread.fragment_name.as_str());
            });
        }
    }

    while let Some(name) = pending.pop() {
        if !reachable.insert(name) {
            continue;
        }
        if let Some(&frag_def) = fragment_defs.get(name) {
            visit_fragment_spreads(&frag_def.selection_set, &mut |spread| {
                pending.push(spread.fragment_name.as_str());
            });
        }
    }

    reachable
}
