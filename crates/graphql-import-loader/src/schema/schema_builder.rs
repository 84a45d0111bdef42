use crate::ast;
use crate::schema::introspection;
use crate::schema::introspection::IntrospectionTypeKind;
use crate::schema::Schema;
use crate::schema::SchemaField;
use crate::schema::SchemaLoadError;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaLoadError>;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Utility for building a [Schema] from either an introspection result or
/// SDL source text.
#[derive(Debug)]
pub struct SchemaBuilder {
    file: PathBuf,
    /// Set once root operation types were declared explicitly (a `schema`
    /// block or an introspection result). Default root names are then off.
    has_explicit_roots: bool,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, SchemaType>,
}
impl SchemaBuilder {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            has_explicit_roots: false,
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types: IndexMap::new(),
        }
    }

    /// Build a schema from the contents of `file`. A `.json` extension
    /// (any case) selects the introspection format; everything else is
    /// parsed as SDL.
    pub fn from_file_content(file: &Path, content: &str) -> Result<Schema> {
        let is_json = file.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let builder = Self::new(file);
        if is_json {
            builder.load_introspection_json(content)?.build()
        } else {
            builder.load_sdl(content)?.build()
        }
    }

    pub fn build(mut self) -> Result<Schema> {
        for scalar_name in BUILTIN_SCALARS {
            if !self.types.contains_key(scalar_name) {
                self.types.insert(
                    scalar_name.to_string(),
                    SchemaType::new(scalar_name, TypeKind::Scalar),
                );
            }
        }

        let (query_type, mutation_type, subscription_type) =
            if self.has_explicit_roots {
                (
                    self.query_type.take(),
                    self.mutation_type.take(),
                    self.subscription_type.take(),
                )
            } else {
                (
                    self.default_root_type("Query"),
                    self.default_root_type("Mutation"),
                    self.default_root_type("Subscription"),
                )
            };

        for root_type_name in [&query_type, &mutation_type, &subscription_type]
            .into_iter()
            .flatten() {
            match self.types.get(root_type_name) {
                Some(root_type) if root_type.kind == TypeKind::Object => (),
                _ => return Err(SchemaLoadError::InvalidRootType {
                    file: self.file.clone(),
                    type_name: root_type_name.clone(),
                }),
            }
        }

        log::debug!(
            "Built schema from {:#?} with {} types.",
            self.file,
            self.types.len(),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    fn default_root_type(&self, type_name: &str) -> Option<String> {
        match self.types.get(type_name) {
            Some(t) if t.kind == TypeKind::Object => Some(type_name.to_string()),
            _ => None,
        }
    }

    /// Load an introspection result, either the full response
    /// (`{"data": {"__schema": ...}}`) or just its `data` member.
    pub fn load_introspection_json(mut self, content: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(content)
            .map_err(|err| SchemaLoadError::InvalidJson {
                file: self.file.clone(),
                err,
            })?;

        let data = json.get("data").unwrap_or(&json);
        let Some(schema_json) = data.get("__schema") else {
            return Err(SchemaLoadError::InvalidIntrospection {
                file: self.file.clone(),
                message: "missing `__schema` object".to_string(),
            });
        };

        let schema = introspection::IntrospectionSchema::deserialize(schema_json)
            .map_err(|err| SchemaLoadError::InvalidIntrospection {
                file: self.file.clone(),
                message: err.to_string(),
            })?;

        self.has_explicit_roots = true;
        self.query_type = schema.query_type.map(|r| r.name);
        self.mutation_type = schema.mutation_type.map(|r| r.name);
        self.subscription_type = schema.subscription_type.map(|r| r.name);

        for introspected_type in schema.types {
            let kind = match introspected_type.kind {
                IntrospectionTypeKind::Enum => TypeKind::Enum,
                IntrospectionTypeKind::InputObject => TypeKind::InputObject,
                IntrospectionTypeKind::Interface => TypeKind::Interface,
                IntrospectionTypeKind::Object => TypeKind::Object,
                IntrospectionTypeKind::Scalar => TypeKind::Scalar,
                IntrospectionTypeKind::Union => TypeKind::Union,
            };
            let mut schema_type = SchemaType::new(introspected_type.name.as_str(), kind);

            for field in introspected_type.fields.unwrap_or_default() {
                let Some(type_name) = field.field_type.innermost_name() else {
                    return Err(SchemaLoadError::InvalidIntrospection {
                        file: self.file.clone(),
                        message: format!(
                            "field `{}.{}` has no named type",
                            introspected_type.name,
                            field.name,
                        ),
                    });
                };
                schema_type.fields.insert(field.name.clone(), SchemaField {
                    name: field.name,
                    type_name: type_name.to_string(),
                });
            }

            self.insert_type(schema_type)?;
        }

        Ok(self)
    }

    pub fn load_sdl(mut self, content: &str) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaLoadError::SdlParseError {
                    file: self.file.clone(),
                    message: err.to_string(),
                })?.into_static();

        // Extensions may precede the definitions they extend.
        let mut type_extensions = vec![];
        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::TypeExtension(type_ext) =>
                    type_extensions.push(type_ext),
                def => self.visit_ast_def(def)?,
            }
        }
        for type_ext in type_extensions {
            self.visit_ast_type_extension(type_ext)?;
        }

        Ok(self)
    }

    fn insert_type(&mut self, schema_type: SchemaType) -> Result<()> {
        if self.types.contains_key(schema_type.name()) {
            return Err(SchemaLoadError::DuplicateTypeDefinition {
                file: self.file.clone(),
                type_name: schema_type.name,
            });
        }
        self.types.insert(schema_type.name.clone(), schema_type);
        Ok(())
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) => {
                self.has_explicit_roots = true;
                self.query_type = schema_def.query;
                self.mutation_type = schema_def.mutation;
                self.subscription_type = schema_def.subscription;
                Ok(())
            },
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(type_ext),
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_type_def(&mut self, def: ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        let schema_type = match def {
            TypeDefinition::Enum(enum_def) =>
                SchemaType::new(enum_def.name, TypeKind::Enum),
            TypeDefinition::InputObject(inputobj_def) =>
                SchemaType::new(inputobj_def.name, TypeKind::InputObject),
            TypeDefinition::Interface(iface_def) => {
                let mut schema_type = SchemaType::new(iface_def.name, TypeKind::Interface);
                add_ast_fields(&mut schema_type, iface_def.fields);
                schema_type
            },
            TypeDefinition::Object(obj_def) => {
                let mut schema_type = SchemaType::new(obj_def.name, TypeKind::Object);
                add_ast_fields(&mut schema_type, obj_def.fields);
                schema_type
            },
            TypeDefinition::Scalar(scalar_def) =>
                SchemaType::new(scalar_def.name, TypeKind::Scalar),
            TypeDefinition::Union(union_def) =>
                SchemaType::new(union_def.name, TypeKind::Union),
        };
        self.insert_type(schema_type)
    }

    fn visit_ast_type_extension(&mut self, ext: ast::schema::TypeExtension) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, fields) = match ext {
            TypeExtension::Interface(iface_ext) => (iface_ext.name, iface_ext.fields),
            TypeExtension::Object(obj_ext) => (obj_ext.name, obj_ext.fields),
            TypeExtension::Enum(_)
            | TypeExtension::InputObject(_)
            | TypeExtension::Scalar(_)
            | TypeExtension::Union(_) => return Ok(()),
        };

        let Some(schema_type) = self.types.get_mut(&type_name) else {
            return Err(SchemaLoadError::ExtensionOfUndefinedType {
                file: self.file.clone(),
                type_name,
            });
        };
        add_ast_fields(schema_type, fields);
        Ok(())
    }
}

fn add_ast_fields(schema_type: &mut SchemaType, fields: Vec<ast::schema::Field>) {
    for field in fields {
        let type_name = innermost_type_name(&field.field_type).to_string();
        schema_type.fields.insert(field.name.clone(), SchemaField {
            name: field.name,
            type_name,
        });
    }
}

fn innermost_type_name(type_annot: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match type_annot {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => innermost_type_name(inner),
    }
}
