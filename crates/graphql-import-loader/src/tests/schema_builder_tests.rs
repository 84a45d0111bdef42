use crate::schema::SchemaBuilder;
use crate::schema::SchemaLoadError;
use crate::schema::TypeKind;
use crate::tests::test_utils::parse;
use crate::validation::validate;
use crate::validation::ValidationError;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaLoadError>;

const INTROSPECTION_SCHEMA: &str = r#"{
    "queryType": { "name": "Query" },
    "mutationType": null,
    "subscriptionType": null,
    "types": [
        {
            "kind": "OBJECT",
            "name": "Query",
            "fields": [
                {
                    "name": "user",
                    "args": [],
                    "type": { "kind": "OBJECT", "name": "User", "ofType": null }
                },
                {
                    "name": "users",
                    "args": [],
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": {
                            "kind": "LIST",
                            "name": null,
                            "ofType": { "kind": "OBJECT", "name": "User", "ofType": null }
                        }
                    }
                }
            ]
        },
        {
            "kind": "OBJECT",
            "name": "User",
            "fields": [
                {
                    "name": "id",
                    "args": [],
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
                    }
                }
            ]
        },
        { "kind": "SCALAR", "name": "ID", "fields": null },
        { "kind": "ENUM", "name": "Role", "fields": null, "enumValues": [] }
    ]
}"#;

mod sdl {
    use super::*;

    #[test]
    fn object_types_and_default_root_types() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl(concat!(
                "type Query { user(id: ID!): User }\n",
                "type Mutation { rename(name: String): User }\n",
                "type User { id: ID! friends: [User!]! }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert!(schema.subscription_type().is_none());

        let user_type = schema.get_type("User").unwrap();
        assert_eq!(user_type.kind(), TypeKind::Object);
        assert_eq!(user_type.field("friends").unwrap().type_name(), "User");
        assert_eq!(user_type.field("id").unwrap().type_name(), "ID");

        Ok(())
    }

    #[test]
    fn builtin_scalars_are_always_present() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl("type Query { a: Int }")?
            .build()?;

        for scalar_name in ["Boolean", "Float", "ID", "Int", "String"] {
            assert_eq!(schema.get_type(scalar_name).unwrap().kind(), TypeKind::Scalar);
        }

        Ok(())
    }

    #[test]
    fn schema_definition_overrides_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl(concat!(
                "schema { query: RootQuery }\n",
                "type RootQuery { a: Int }\n",
                "type Query { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
        Ok(())
    }

    #[test]
    fn schema_definition_disables_default_root_names() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl(concat!(
                "schema { query: Q }\n",
                "type Q { a: Int }\n",
                "type Mutation { m: Int }\n",
                "type Subscription { s: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "Q");
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        let errors = validate(&schema, &parse("mutation M { m }"));
        assert!(matches!(
            &errors[..],
            [ValidationError::UnsupportedOperation { operation_kind: "mutation", .. }],
        ));

        Ok(())
    }

    #[test]
    fn extensions_may_precede_their_definitions() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl(concat!(
                "extend type Query { b: String }\n",
                "type Query { a: Int }\n",
            ))?
            .build()?;

        let query_type = schema.query_type().unwrap();
        assert!(query_type.field("a").is_some());
        assert!(query_type.field("b").is_some());

        Ok(())
    }

    #[test]
    fn type_extensions_add_fields() -> Result<()> {
        let schema = SchemaBuilder::new("schema.graphql")
            .load_sdl(concat!(
                "type Query { a: Int }\n",
                "extend type Query { b: String }\n",
                "interface Node { id: ID! }\n",
                "extend interface Node { createdAt: String }\n",
            ))?
            .build()?;

        let query_type = schema.query_type().unwrap();
        assert!(query_type.field("a").is_some());
        assert!(query_type.field("b").is_some());
        assert!(schema.get_type("Node").unwrap().field("createdAt").is_some());

        Ok(())
    }

    #[test]
    fn extending_an_undefined_type_fails() {
        let result = SchemaBuilder::new("schema.graphql")
            .load_sdl("extend type Missing { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaLoadError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn duplicate_type_definition_fails() {
        let result = SchemaBuilder::new("schema.graphql")
            .load_sdl("type Query { a: Int }\ntype Query { b: Int }");

        assert!(matches!(
            result,
            Err(SchemaLoadError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn non_object_root_type_fails() {
        let result = SchemaBuilder::new("schema.graphql")
            .load_sdl("schema { query: Q }\nscalar Q")
            .and_then(|builder| builder.build());

        assert!(matches!(result, Err(SchemaLoadError::InvalidRootType { .. })));
    }

    #[test]
    fn sdl_parse_error_is_reported() {
        let result = SchemaBuilder::new("schema.graphql").load_sdl("type Query {");
        assert!(matches!(result, Err(SchemaLoadError::SdlParseError { .. })));
    }
}

mod introspection {
    use super::*;

    #[test]
    fn bare_data_object() -> Result<()> {
        let content = format!(r#"{{ "__schema": {INTROSPECTION_SCHEMA} }}"#);
        let schema = SchemaBuilder::from_file_content(Path::new("schema.json"), &content)?;

        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert_eq!(
            schema.query_type().unwrap().field("users").unwrap().type_name(),
            "User",
        );
        assert_eq!(schema.get_type("Role").unwrap().kind(), TypeKind::Enum);
        assert_eq!(schema.get_type("String").unwrap().kind(), TypeKind::Scalar);

        Ok(())
    }

    #[test]
    fn full_response_object() -> Result<()> {
        let content = format!(r#"{{ "data": {{ "__schema": {INTROSPECTION_SCHEMA} }} }}"#);
        let schema = SchemaBuilder::from_file_content(Path::new("schema.JSON"), &content)?;

        assert_eq!(schema.get_type("User").unwrap().field("id").unwrap().type_name(), "ID");
        Ok(())
    }

    #[test]
    fn invalid_json_fails() {
        let result = SchemaBuilder::from_file_content(Path::new("schema.json"), "{ nope");
        assert!(matches!(result, Err(SchemaLoadError::InvalidJson { .. })));
    }

    #[test]
    fn missing_schema_key_fails() {
        let result = SchemaBuilder::from_file_content(
            Path::new("schema.json"),
            r#"{ "data": { "types": [] } }"#,
        );
        assert!(matches!(result, Err(SchemaLoadError::InvalidIntrospection { .. })));
    }

    #[test]
    fn malformed_schema_object_fails() {
        let result = SchemaBuilder::from_file_content(
            Path::new("schema.json"),
            r#"{ "__schema": { "types": [{ "kind": "BOGUS", "name": "X" }] } }"#,
        );
        assert!(matches!(result, Err(SchemaLoadError::InvalidIntrospection { .. })));
    }
}

#[test]
fn non_json_extension_is_parsed_as_sdl() -> Result<()> {
    let schema = SchemaBuilder::from_file_content(
        Path::new("schema.graphqls"),
        "type Query { a: Int }",
    )?;
    assert!(schema.query_type().unwrap().field("a").is_some());
    Ok(())
}
