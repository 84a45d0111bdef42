use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::test_utils::parse;
use crate::validation::validate;
use crate::validation::ValidationError;

fn setup_schema() -> Schema {
    SchemaBuilder::new("schema.graphql")
        .load_sdl(r#"
            type Query {
                user(id: ID!): User
                search: [SearchResult!]!
                version: String
            }

            type User implements Node {
                id: ID!
                name: String!
                role: Role
                friends: [User!]!
            }

            interface Node {
                id: ID!
            }

            type Post {
                title: String
            }

            union SearchResult = User | Post

            enum Role { ADMIN MEMBER }

            input UserFilter { name: String }
        "#)
        .unwrap()
        .build()
        .unwrap()
}

fn validate_str(content: &str) -> Vec<ValidationError> {
    validate(&setup_schema(), &parse(content))
}

#[test]
fn valid_document_has_no_errors() {
    let errors = validate_str(r#"
        query GetUser($id: ID!, $filter: UserFilter) {
            user(id: $id) {
                __typename
                ...UserFields
                friends { ... on Node { id } }
            }
            search {
                ... on User { name }
                ... on Post { title }
            }
        }

        fragment UserFields on User { id name role }
    "#);
    assert_eq!(errors, vec![]);
}

#[test]
fn undefined_field_in_imported_fragment() {
    let errors = validate_str("query { ...a } fragment a on User { f }");

    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ValidationError::UndefinedField { field_name, type_name, .. } => {
            assert_eq!(field_name, "f");
            assert_eq!(type_name, "User");
        },
        other => panic!("Unexpected error: {other:#?}"),
    }
    assert_eq!(
        errors[0].to_string(),
        "Cannot query field \"f\" on type \"User\".",
    );
}

#[test]
fn undefined_field_on_root_type() {
    let errors = validate_str("{ f }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UndefinedField { field_name, type_name, .. }]
            if field_name == "f" && type_name == "Query",
    ));
}

#[test]
fn unknown_field_does_not_cascade() {
    let errors = validate_str("{ missing { alsoMissing { deeper } } }");
    assert_eq!(errors.len(), 1);
}

#[test]
fn union_only_allows_typename_directly() {
    let errors = validate_str("{ search { __typename name } }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UndefinedField { field_name, type_name, .. }]
            if field_name == "name" && type_name == "SearchResult",
    ));
}

#[test]
fn introspection_fields_on_query_root() {
    let errors = validate_str("{ __schema { types { name } } __type(name: \"User\") { name } }");
    assert_eq!(errors, vec![]);
}

#[test]
fn unknown_fragment_spread() {
    let errors = validate_str("{ user(id: 1) { ...Missing } }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnknownFragment { fragment_name, .. }] if fragment_name == "Missing",
    ));
}

#[test]
fn unknown_type_condition() {
    let errors = validate_str("{ ...a } fragment a on Nope { id }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnknownType { type_name, .. }] if type_name == "Nope",
    ));
}

#[test]
fn inline_fragment_on_unknown_type() {
    let errors = validate_str("{ user(id: 1) { ... on Nope { id } } }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnknownType { type_name, .. }] if type_name == "Nope",
    ));
}

#[test]
fn fragment_on_scalar() {
    let errors = validate_str("{ ...a } fragment a on String { length }");
    assert!(matches!(
        &errors[..],
        [ValidationError::FragmentOnNonCompositeType { type_name, .. }] if type_name == "String",
    ));
}

#[test]
fn leaf_field_with_selections() {
    let errors = validate_str("{ version { length } }");
    assert!(matches!(
        &errors[..],
        [ValidationError::LeafFieldHasSelections { field_name, type_name, .. }]
            if field_name == "version" && type_name == "String",
    ));
}

#[test]
fn composite_field_without_selections() {
    let errors = validate_str("{ user(id: 1) }");
    assert!(matches!(
        &errors[..],
        [ValidationError::MissingSubselection { field_name, type_name, .. }]
            if field_name == "user" && type_name == "User",
    ));
}

#[test]
fn unused_fragment() {
    let errors = validate_str("{ version } fragment unused on User { id }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnusedFragment { fragment_name, .. }] if fragment_name == "unused",
    ));
}

#[test]
fn fragments_used_only_through_other_fragments_are_used() {
    let errors = validate_str(concat!(
        "{ user(id: 1) { ...outer } }\n",
        "fragment outer on User { ...inner }\n",
        "fragment inner on User { id }\n",
    ));
    assert_eq!(errors, vec![]);
}

#[test]
fn mutation_without_mutation_type() {
    let errors = validate_str("mutation M { doThing }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnsupportedOperation { operation_kind: "mutation", .. }],
    ));
    assert_eq!(errors[0].to_string(), "Schema is not configured for mutations.");
}

#[test]
fn anonymous_operation_must_be_alone() {
    let errors = validate_str("{ version } query Named { version }");
    assert!(matches!(
        &errors[..],
        [ValidationError::AnonymousOperationNotAlone { .. }],
    ));
}

#[test]
fn duplicate_operation_names() {
    let errors = validate_str("query A { version } query A { version }");
    assert!(matches!(
        &errors[..],
        [ValidationError::DuplicateOperationName { operation_name, .. }] if operation_name == "A",
    ));
}

#[test]
fn unknown_variable_type() {
    let errors = validate_str("query Q($x: [Nope!]) { version }");
    assert!(matches!(
        &errors[..],
        [ValidationError::UnknownType { type_name, .. }] if type_name == "Nope",
    ));
}

#[test]
fn error_locations_point_at_the_offending_node() {
    let errors = validate_str("query Q {\n  version\n  nope\n}");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location().line, 3);
    assert_eq!(errors[0].location().col, 3);
}

#[test]
fn error_locations_carry_no_file() {
    let errors = validate_str("query Q {\n  version\n  nope\n}");
    assert_eq!(errors[0].location().file, None);
    assert_eq!(errors[0].location().to_string(), "3:3");
}
