/*
[INPUT]:  Operation descriptor and caller arguments
[OUTPUT]: ComposedQuery (document text + variables map)
[POS]:    GraphQL layer - query composer
[UPDATE]: When argument placement rules or operation metadata change
*/

use serde_json::{Map, Value};

use super::document::{
    Argument, Document, Field, OperationKind, Selection, VariableDefinition, find_field_mut,
};
use super::pagination::PAGINATION_ARGUMENTS;

/// Which field an argument is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The operation's root field
    Root,
    /// The operation's connection field, or the root field when it has none
    Connection,
}

/// Declared argument of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub graphql_type: &'static str,
    pub required: bool,
    pub placement: Placement,
}

impl ArgumentSpec {
    /// Always declared and passed, even when the caller supplies no value
    pub const fn required(name: &'static str, graphql_type: &'static str) -> Self {
        Self {
            name,
            graphql_type,
            required: true,
            placement: Placement::Root,
        }
    }

    /// Declared and passed only when the caller supplies a non-null value
    pub const fn optional(name: &'static str, graphql_type: &'static str) -> Self {
        Self {
            name,
            graphql_type,
            required: false,
            placement: Placement::Root,
        }
    }

    pub const fn connection(name: &'static str, graphql_type: &'static str) -> Self {
        Self {
            name,
            graphql_type,
            required: false,
            placement: Placement::Connection,
        }
    }
}

/// Argument values keyed by argument name; `null` means "omit"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn set_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Document text and the variables it references
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    pub document: String,
    pub variables: Map<String, Value>,
}

/// A named GraphQL query or mutation.
///
/// The operation name doubles as the root field name and as the key of
/// the result under `data` in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    kind: OperationKind,
    name: String,
    arguments: Vec<ArgumentSpec>,
    connection: Option<String>,
    selections: Vec<Selection>,
    lookup_type: Option<String>,
}

impl Operation {
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Query, name.into())
    }

    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation, name.into())
    }

    fn new(kind: OperationKind, name: String) -> Self {
        Self {
            kind,
            name,
            arguments: Vec::new(),
            connection: None,
            selections: Vec::new(),
            lookup_type: None,
        }
    }

    pub fn argument(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    /// Accept `first/last/after/before` on the root field
    pub fn paginated(mut self) -> Self {
        self.arguments.extend(PAGINATION_ARGUMENTS);
        self
    }

    /// Accept `first/last/after/before` on the nested connection field `connection`
    pub fn paginated_on(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self.paginated()
    }

    pub fn selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// Mark as a global-ID lookup over the given GraphQL type name(s)
    pub fn node_lookup(mut self, type_names: impl Into<String>) -> Self {
        self.lookup_type = Some(type_names.into());
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result_path(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn is_node_lookup(&self) -> bool {
        self.lookup_type.is_some()
    }

    pub fn lookup_type(&self) -> Option<&str> {
        self.lookup_type.as_deref()
    }

    /// Build the document and its variables from `args`.
    ///
    /// Arguments not declared by the operation are ignored. Output depends
    /// only on the inputs, so composing twice yields identical results.
    pub fn compose(&self, args: &Arguments) -> ComposedQuery {
        let mut variables = Map::new();
        let mut definitions = Vec::new();
        let mut root_arguments = Vec::new();
        let mut connection_arguments = Vec::new();

        for spec in &self.arguments {
            let supplied = args.get(spec.name).filter(|value| !value.is_null()).cloned();
            let value = match supplied {
                Some(value) => value,
                None if spec.required => Value::Null,
                None => continue,
            };

            definitions.push(VariableDefinition::new(spec.name, spec.graphql_type));
            let argument = Argument::variable(spec.name);
            match spec.placement {
                Placement::Root => root_arguments.push(argument),
                Placement::Connection => connection_arguments.push(argument),
            }
            variables.insert(spec.name.to_string(), value);
        }

        let mut selections = self.selections.clone();
        if !connection_arguments.is_empty() {
            let target = self
                .connection
                .as_deref()
                .and_then(|name| find_field_mut(&mut selections, name));
            match target {
                Some(field) => field.arguments = connection_arguments,
                None => root_arguments.extend(connection_arguments),
            }
        }

        let root = Field {
            name: self.name.clone(),
            arguments: root_arguments,
            selections,
        };
        let document = Document {
            kind: self.kind,
            name: self.name.clone(),
            variables: definitions,
            selections: vec![Selection::Field(root)],
        };

        ComposedQuery {
            document: document.render(),
            variables,
        }
    }
}
