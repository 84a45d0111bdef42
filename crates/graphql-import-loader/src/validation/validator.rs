use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::selection_visitor;
use crate::validation::ValidationError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

/// Validate an executable document against `schema`.
///
/// All errors are collected rather than stopping at the first one. When a
/// selection's parent type cannot be determined, the selections beneath it
/// are skipped so one mistake is reported once.
pub fn validate(schema: &Schema, doc: &ast::query::Document) -> Vec<ValidationError> {
    let mut validator = DocumentValidator::new(schema, doc);
    validator.validate_operations();
    validator.validate_fragment_definitions();
    validator.validate_fragment_usage();
    validator.errors
}

fn position(pos: graphql_parser::Pos) -> loc::SourcePosition {
    loc::SourcePosition::from_pos(None::<&Path>, pos)
}

struct OperationParts<'doc> {
    kind: &'static str,
    name: Option<&'doc str>,
    position: graphql_parser::Pos,
    selection_set: &'doc ast::query::SelectionSet,
    variable_definitions: &'doc [ast::query::VariableDefinition],
}
impl<'doc> OperationParts<'doc> {
    fn from_ast(op: &'doc ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match op {
            OperationDefinition::SelectionSet(selection_set) => Self {
                kind: "query",
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },
            OperationDefinition::Query(query) => Self {
                kind: "query",
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },
            OperationDefinition::Mutation(mutation) => Self {
                kind: "mutation",
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },
            OperationDefinition::Subscription(subscription) => Self {
                kind: "subscription",
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }
}

struct DocumentValidator<'a> {
    doc: &'a ast::query::Document,
    errors: Vec<ValidationError>,
    fragment_defs: HashMap<&'a str, &'a ast::query::FragmentDefinition>,
    schema: &'a Schema,
}
impl<'a> DocumentValidator<'a> {
    fn new(schema: &'a Schema, doc: &'a ast::query::Document) -> Self {
        let mut fragment_defs = HashMap::new();
        for def in &doc.definitions {
            if let ast::query::Definition::Fragment(frag_def) = def {
                fragment_defs.entry(frag_def.name.as_str()).or_insert(frag_def);
            }
        }

        Self {
            doc,
            errors: vec![],
            fragment_defs,
            schema,
        }
    }

    fn operations(&self) -> Vec<OperationParts<'a>> {
        self.doc.definitions.iter()
            .filter_map(|def| match def {
                ast::query::Definition::Operation(op) => Some(OperationParts::from_ast(op)),
                ast::query::Definition::Fragment(_) => None,
            })
            .collect()
    }

    fn validate_operations(&mut self) {
        let schema = self.schema;
        let operations = self.operations();
        let num_operations = operations.len();
        let mut seen_names = HashSet::new();

        for op in operations {
            match op.name {
                None if num_operations > 1 => {
                    self.errors.push(ValidationError::AnonymousOperationNotAlone {
                        location: position(op.position),
                    });
                },
                Some(name) if !seen_names.insert(name) => {
                    self.errors.push(ValidationError::DuplicateOperationName {
                        operation_name: name.to_string(),
                        location: position(op.position),
                    });
                },
                _ => (),
            }

            for var_def in op.variable_definitions {
                let type_name = innermost_type_name(&var_def.var_type);
                if schema.get_type(type_name).is_none() {
                    self.errors.push(ValidationError::UnknownType {
                        type_name: type_name.to_string(),
                        location: position(var_def.position),
                    });
                }
            }

            let root_type = match op.kind {
                "mutation" => schema.mutation_type(),
                "subscription" => schema.subscription_type(),
                _ => schema.query_type(),
            };
            match root_type {
                Some(root_type) => self.validate_selection_set(root_type, op.selection_set),
                None => self.errors.push(ValidationError::UnsupportedOperation {
                    operation_kind: op.kind,
                    location: position(op.position),
                }),
            }
        }
    }

    fn validate_fragment_definitions(&mut self) {
        let doc = self.doc;
        for def in &doc.definitions {
            let ast::query::Definition::Fragment(frag_def) = def else {
                continue;
            };
            let ast::query::TypeCondition::On(type_name) = &frag_def.type_condition;
            if let Some(parent_type) = self.composite_type(type_name, frag_def.position) {
                self.validate_selection_set(parent_type, &frag_def.selection_set);
            }
        }
    }

    fn validate_fragment_usage(&mut self) {
        let reachable = selection_visitor::fragments_reachable_from_operations(self.doc);
        for def in &self.doc.definitions {
            if let ast::query::Definition::Fragment(frag_def) = def
                && !reachable.contains(frag_def.name.as_str()) {
                self.errors.push(ValidationError::UnusedFragment {
                    fragment_name: frag_def.name.clone(),
                    location: position(frag_def.position),
                });
            }
        }
    }

    /// Looks up a type-condition target, recording an error if it is unknown
    /// or cannot have selections.
    fn composite_type(
        &mut self,
        type_name: &str,
        pos: graphql_parser::Pos,
    ) -> Option<&'a SchemaType> {
        let schema = self.schema;
        match schema.get_type(type_name) {
            None => {
                self.errors.push(ValidationError::UnknownType {
                    type_name: type_name.to_string(),
                    location: position(pos),
                });
                None
            },
            Some(schema_type) if !schema_type.kind().is_composite() => {
                self.errors.push(ValidationError::FragmentOnNonCompositeType {
                    type_name: type_name.to_string(),
                    location: position(pos),
                });
                None
            },
            Some(schema_type) => Some(schema_type),
        }
    }

    fn validate_selection_set(
        &mut self,
        parent_type: &'a SchemaType,
        selection_set: &'a ast::query::SelectionSet,
    ) {
        use ast::query::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => self.validate_field(parent_type, field),

                Selection::FragmentSpread(spread) => {
                    if !self.fragment_defs.contains_key(spread.fragment_name.as_str()) {
                        self.errors.push(ValidationError::UnknownFragment {
                            fragment_name: spread.fragment_name.clone(),
                            location: position(spread.position),
                        });
                    }
                },

                Selection::InlineFragment(inline) => {
                    let inline_type = match &inline.type_condition {
                        Some(ast::query::TypeCondition::On(type_name)) =>
                            self.composite_type(type_name, inline.position),
                        None => Some(parent_type),
                    };
                    if let Some(inline_type) = inline_type {
                        self.validate_selection_set(inline_type, &inline.selection_set);
                    }
                },
            }
        }
    }

    fn validate_field(&mut self, parent_type: &'a SchemaType, field: &'a ast::query::Field) {
        let schema = self.schema;
        let has_selections = !field.selection_set.items.is_empty();

        if field.name == "__typename" {
            if has_selections {
                self.errors.push(ValidationError::LeafFieldHasSelections {
                    field_name: field.name.clone(),
                    type_name: "String".to_string(),
                    location: position(field.position),
                });
            }
            return;
        }

        let is_query_root = schema.query_type()
            .is_some_and(|query_type| query_type.name() == parent_type.name());
        if is_query_root && (field.name == "__schema" || field.name == "__type") {
            return;
        }

        let Some(schema_field) = parent_type.field(&field.name) else {
            self.errors.push(ValidationError::UndefinedField {
                field_name: field.name.clone(),
                type_name: parent_type.name().to_string(),
                location: position(field.position),
            });
            return;
        };

        let Some(field_type) = schema.get_type(schema_field.type_name()) else {
            return;
        };

        if field_type.kind().is_leaf() {
            if has_selections {
                self.errors.push(ValidationError::LeafFieldHasSelections {
                    field_name: field.name.clone(),
                    type_name: field_type.name().to_string(),
                    location: position(field.position),
                });
            }
        } else if field_type.kind().is_composite() {
            if has_selections {
                self.validate_selection_set(field_type, &field.selection_set);
            } else {
                self.errors.push(ValidationError::MissingSubselection {
                    field_name: field.name.clone(),
                    type_name: field_type.name().to_string(),
                    location: position(field.position),
                });
            }
        }
    }
}

fn innermost_type_name(type_annot: &ast::query::Type) -> &str {
    use ast::query::Type;
    match type_annot {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => innermost_type_name(inner),
    }
}
