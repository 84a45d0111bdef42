use crate::ast;
use serde_json::json;
use serde_json::Value as JsonValue;

/// Converts a document into the JSON AST shape GraphQL client libraries
/// consume (`{"kind": "Document", "definitions": [...]}`). Source locations
/// are not included.
pub fn document_to_json(doc: &ast::query::Document) -> JsonValue {
    json!({
        "kind": "Document",
        "definitions": doc.definitions.iter()
            .map(definition_to_json)
            .collect::<Vec<_>>(),
    })
}

fn name_to_json(name: &str) -> JsonValue {
    json!({ "kind": "Name", "value": name })
}

fn definition_to_json(def: &ast::query::Definition) -> JsonValue {
    use ast::query::Definition;
    use ast::query::OperationDefinition;
    match def {
        Definition::Fragment(frag_def) => {
            let ast::query::TypeCondition::On(type_name) = &frag_def.type_condition;
            json!({
                "kind": "FragmentDefinition",
                "name": name_to_json(&frag_def.name),
                "typeCondition": named_type_to_json(type_name),
                "directives": directives_to_json(&frag_def.directives),
                "selectionSet": selection_set_to_json(&frag_def.selection_set),
            })
        },

        Definition::Operation(OperationDefinition::SelectionSet(selection_set)) =>
            operation_to_json("query", None, &[], &[], selection_set),

        Definition::Operation(OperationDefinition::Query(query)) => operation_to_json(
            "query",
            query.name.as_deref(),
            &query.variable_definitions,
            &query.directives,
            &query.selection_set,
        ),

        Definition::Operation(OperationDefinition::Mutation(mutation)) => operation_to_json(
            "mutation",
            mutation.name.as_deref(),
            &mutation.variable_definitions,
            &mutation.directives,
            &mutation.selection_set,
        ),

        Definition::Operation(OperationDefinition::Subscription(subscription)) => operation_to_json(
            "subscription",
            subscription.name.as_deref(),
            &subscription.variable_definitions,
            &subscription.directives,
            &subscription.selection_set,
        ),
    }
}

fn operation_to_json(
    operation: &str,
    name: Option<&str>,
    variable_definitions: &[ast::query::VariableDefinition],
    directives: &[ast::query::Directive],
    selection_set: &ast::query::SelectionSet,
) -> JsonValue {
    json!({
        "kind": "OperationDefinition",
        "operation": operation,
        "name": name.map(name_to_json),
        "variableDefinitions": variable_definitions.iter()
            .map(|var_def| json!({
                "kind": "VariableDefinition",
                "variable": variable_to_json(&var_def.name),
                "type": type_to_json(&var_def.var_type),
                "defaultValue": var_def.default_value.as_ref().map(value_to_json),
                "directives": [],
            }))
            .collect::<Vec<_>>(),
        "directives": directives_to_json(directives),
        "selectionSet": selection_set_to_json(selection_set),
    })
}

fn selection_set_to_json(selection_set: &ast::query::SelectionSet) -> JsonValue {
    use ast::query::Selection;
    let selections: Vec<JsonValue> = selection_set.items.iter()
        .map(|selection| match selection {
            Selection::Field(field) => json!({
                "kind": "Field",
                "alias": field.alias.as_deref().map(name_to_json),
                "name": name_to_json(&field.name),
                "arguments": arguments_to_json(&field.arguments),
                "directives": directives_to_json(&field.directives),
                "selectionSet":
                    if field.selection_set.items.is_empty() {
                        JsonValue::Null
                    } else {
                        selection_set_to_json(&field.selection_set)
                    },
            }),

            Selection::FragmentSpread(spread) => json!({
                "kind": "FragmentSpread",
                "name": name_to_json(&spread.fragment_name),
                "directives": directives_to_json(&spread.directives),
            }),

            Selection::InlineFragment(inline) => json!({
                "kind": "InlineFragment",
                "typeCondition": inline.type_condition.as_ref().map(|cond| {
                    let ast::query::TypeCondition::On(type_name) = cond;
                    named_type_to_json(type_name)
                }),
                "directives": directives_to_json(&inline.directives),
                "selectionSet": selection_set_to_json(&inline.selection_set),
            }),
        })
        .collect();

    json!({ "kind": "SelectionSet", "selections": selections })
}

fn arguments_to_json(arguments: &[(String, ast::query::Value)]) -> Vec<JsonValue> {
    arguments.iter()
        .map(|(name, value)| json!({
            "kind": "Argument",
            "name": name_to_json(name),
            "value": value_to_json(value),
        }))
        .collect()
}

fn directives_to_json(directives: &[ast::query::Directive]) -> Vec<JsonValue> {
    directives.iter()
        .map(|directive| json!({
            "kind": "Directive",
            "name": name_to_json(&directive.name),
            "arguments": arguments_to_json(&directive.arguments),
        }))
        .collect()
}

fn named_type_to_json(type_name: &str) -> JsonValue {
    json!({ "kind": "NamedType", "name": name_to_json(type_name) })
}

fn type_to_json(type_annot: &ast::query::Type) -> JsonValue {
    use ast::query::Type;
    match type_annot {
        Type::NamedType(type_name) => named_type_to_json(type_name),
        Type::ListType(inner) => json!({ "kind": "ListType", "type": type_to_json(inner) }),
        Type::NonNullType(inner) => json!({ "kind": "NonNullType", "type": type_to_json(inner) }),
    }
}

fn variable_to_json(var_name: &str) -> JsonValue {
    json!({ "kind": "Variable", "name": name_to_json(var_name) })
}

fn value_to_json(value: &ast::query::Value) -> JsonValue {
    use ast::query::Value;
    match value {
        Value::Boolean(b) => json!({ "kind": "BooleanValue", "value": b }),
        Value::Enum(enum_value) => json!({ "kind": "EnumValue", "value": enum_value }),
        Value::Float(f) => json!({ "kind": "FloatValue", "value": format!("{f:?}") }),
        Value::Int(number) => json!({
            "kind": "IntValue",
            "value": number.as_i64().map(|i| i.to_string()),
        }),
        Value::List(items) => json!({
            "kind": "ListValue",
            "values": items.iter().map(value_to_json).collect::<Vec<_>>(),
        }),
        Value::Null => json!({ "kind": "NullValue" }),
        Value::Object(fields) => json!({
            "kind": "ObjectValue",
            "fields": fields.iter()
                .map(|(name, value)| json!({
                    "kind": "ObjectField",
                    "name": name_to_json(name),
                    "value": value_to_json(value),
                }))
                .collect::<Vec<_>>(),
        }),
        Value::String(s) => json!({ "kind": "StringValue", "value": s, "block": false }),
        Value::Variable(var_name) => variable_to_json(var_name),
    }
}
