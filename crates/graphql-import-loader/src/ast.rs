use std::path::Path;
use std::path::PathBuf;

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

/// Parse executable GraphQL source text into a [`query::Document`].
///
/// `#import` lines are ordinary GraphQL comments as far as the parser is
/// concerned, so they are silently skipped here.
pub fn parse_document(
    file: Option<&Path>,
    content: &str,
) -> Result<query::Document, SyntaxError> {
    graphql_parser::query::parse_query::<String>(content)
        .map(|doc| doc.into_static())
        .map_err(|err| SyntaxError {
            file: file.map(|f| f.to_path_buf()),
            message: err.to_string(),
        })
}

/// Returns the name of a fragment definition, or `None` for anything that is
/// not a fragment definition.
pub fn fragment_name(def: &query::Definition) -> Option<&str> {
    match def {
        query::Definition::Fragment(frag_def) => Some(frag_def.name.as_str()),
        query::Definition::Operation(_) => None,
    }
}

/// Returns the top-level selection set of an operation regardless of which
/// operation form it was written in.
pub fn operation_selection_set(op: &query::OperationDefinition) -> &query::SelectionSet {
    use query::OperationDefinition;
    match op {
        OperationDefinition::SelectionSet(selection_set) => selection_set,
        OperationDefinition::Query(query) => &query.selection_set,
        OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        OperationDefinition::Subscription(subscription) => &subscription.selection_set,
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("GraphQL syntax error{}: {message}", in_file_suffix(.file))]
pub struct SyntaxError {
    pub file: Option<PathBuf>,
    pub message: String,
}

fn in_file_suffix(file: &Option<PathBuf>) -> String {
    match file {
        Some(file) => format!(" in {}", file.display()),
        None => String::new(),
    }
}
