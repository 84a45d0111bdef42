//! Serde model of the parts of a GraphQL introspection result that
//! [`SchemaBuilder`](crate::schema::SchemaBuilder) reads. Anything not listed
//! here (descriptions, arguments, directives, ...) is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IntrospectionSchema {
    pub mutation_type: Option<NamedRef>,
    pub query_type: Option<NamedRef>,
    pub subscription_type: Option<NamedRef>,
    pub types: Vec<IntrospectionType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionType {
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    pub kind: IntrospectionTypeKind,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum IntrospectionTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntrospectionField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: TypeRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TypeRef {
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    /// Name of the innermost named type, unwrapping `LIST` and `NON_NULL`.
    pub fn innermost_name(&self) -> Option<&str> {
        let mut type_ref = self;
        while let Some(of_type) = &type_ref.of_type {
            type_ref = of_type;
        }
        type_ref.name.as_deref()
    }
}
