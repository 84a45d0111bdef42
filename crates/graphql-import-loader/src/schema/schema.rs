use indexmap::IndexMap;

/// The subset of a GraphQL schema needed to validate executable documents:
/// root operation types plus every named type and its output fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, SchemaType>,
}
impl Schema {
    pub fn mutation_type(&self) -> Option<&SchemaType> {
        self.mutation_type.as_deref().and_then(|name| self.types.get(name))
    }

    pub fn query_type(&self) -> Option<&SchemaType> {
        self.query_type.as_deref().and_then(|name| self.types.get(name))
    }

    pub fn subscription_type(&self) -> Option<&SchemaType> {
        self.subscription_type.as_deref().and_then(|name| self.types.get(name))
    }

    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, SchemaType> {
        &self.types
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// Object, interface and union types can be the target of a selection
    /// set (and of a fragment type condition).
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaType {
    pub(crate) fields: IndexMap<String, SchemaField>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
}
impl SchemaType {
    pub(crate) fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            fields: IndexMap::new(),
            kind,
            name: name.into(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaField {
    pub(crate) name: String,
    /// Innermost named type of the field, with list and non-null wrappers
    /// stripped.
    pub(crate) type_name: String,
}
impl SchemaField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
