use crate::ast;
use crate::selection_visitor;

/// Removes fragment definitions that no operation or other fragment spreads.
///
/// Each pass computes the set of spread names from the definitions that are
/// still present, so dropping a fragment can strand the fragments only it
/// referenced. Passes repeat until one removes nothing. The definition count
/// strictly decreases on every repeated pass, which bounds the loop.
///
/// A fragment that only spreads itself (or is part of a spread cycle with no
/// outside referrer) counts as referenced and is retained.
pub fn remove_unused_fragments(doc: &ast::query::Document) -> ast::query::Document {
    let mut current = doc.clone();
    let mut pass = 0;
    loop {
        pass += 1;
        let retained: Vec<ast::query::Definition> = {
            let referenced = selection_visitor::collect_fragment_spread_names(&current);
            current.definitions.iter()
                .filter(|def| match ast::fragment_name(*def) {
                    Some(name) => referenced.contains(name),
                    None => true,
                })
                .cloned()
                .collect()
        };

        let num_removed = current.definitions.len() - retained.len();
        log::trace!("Unused fragment pass {pass} removed {num_removed} definitions.");

        current = ast::query::Document { definitions: retained };
        if num_removed == 0 {
            return current;
        }
    }
}
