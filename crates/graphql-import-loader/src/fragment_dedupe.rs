use crate::ast;
use std::collections::HashSet;

/// Drops every fragment definition whose name was already defined earlier in
/// `doc`. The first definition under a name wins; every other definition is
/// kept in its original order.
///
/// This is what collapses diamond imports, where two imported files both
/// import the same third file.
pub fn dedupe_fragments(doc: &ast::query::Document) -> ast::query::Document {
    let mut seen_names = HashSet::new();
    let definitions: Vec<ast::query::Definition> =
        doc.definitions.iter()
            .filter(|def| match ast::fragment_name(*def) {
                Some(name) => seen_names.insert(name),
                None => true,
            })
            .cloned()
            .collect();

    let num_removed = doc.definitions.len() - definitions.len();
    if num_removed > 0 {
        log::debug!("Removed {num_removed} duplicate fragment definitions.");
    }

    ast::query::Document { definitions }
}
