/*
[INPUT]:  Operation kind, variable declarations, field selections
[OUTPUT]: GraphQL document text
[POS]:    GraphQL layer - document model and its single serializer
[UPDATE]: When new GraphQL syntax (aliases, directives) is needed
*/

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// `$name: Type` in the operation header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    pub name: String,
    pub type_name: String,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// `name: $variable` on a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub variable: String,
}

impl Argument {
    /// Argument bound to a variable of the same name
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            variable: name.clone(),
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selections: Vec<Selection>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            selections: Vec::new(),
        }
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Field(Field),
    InlineFragment {
        type_condition: String,
        selections: Vec<Selection>,
    },
}

impl Selection {
    /// Scalar field with no sub-selection
    pub fn leaf(name: impl Into<String>) -> Self {
        Selection::Field(Field::new(name))
    }

    /// Object field with a nested selection set
    pub fn object(name: impl Into<String>, selections: Vec<Selection>) -> Self {
        Selection::Field(Field::new(name).with_selections(selections))
    }

    /// `... on Type { ... }`
    pub fn on(type_condition: impl Into<String>, selections: Vec<Selection>) -> Self {
        Selection::InlineFragment {
            type_condition: type_condition.into(),
            selections,
        }
    }
}

/// Scalar leaves for each name, in order
pub fn leaves(names: &[&str]) -> Vec<Selection> {
    names.iter().map(|name| Selection::leaf(*name)).collect()
}

/// Depth-first search for the first field called `name`, including inside fragments
pub fn find_field_mut<'a>(selections: &'a mut [Selection], name: &str) -> Option<&'a mut Field> {
    for selection in selections.iter_mut() {
        let nested = match selection {
            Selection::Field(field) => {
                if field.name == name {
                    return Some(field);
                }
                &mut field.selections
            }
            Selection::InlineFragment { selections, .. } => selections,
        };
        if let Some(found) = find_field_mut(nested, name) {
            return Some(found);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: OperationKind,
    pub name: String,
    pub variables: Vec<VariableDefinition>,
    pub selections: Vec<Selection>,
}

impl Document {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.name)?;
        if !self.variables.is_empty() {
            f.write_str("(")?;
            for (index, variable) in self.variables.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "${}: {}", variable.name, variable.type_name)?;
            }
            f.write_str(")")?;
        }
        write_selections(f, &self.selections)
    }
}

fn write_selections(f: &mut fmt::Formatter<'_>, selections: &[Selection]) -> fmt::Result {
    if selections.is_empty() {
        return Ok(());
    }
    f.write_str(" {")?;
    for selection in selections {
        f.write_str(" ")?;
        match selection {
            Selection::Field(field) => write_field(f, field)?,
            Selection::InlineFragment {
                type_condition,
                selections,
            } => {
                write!(f, "... on {type_condition}")?;
                write_selections(f, selections)?;
            }
        }
    }
    f.write_str(" }")
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &Field) -> fmt::Result {
    f.write_str(&field.name)?;
    if !field.arguments.is_empty() {
        f.write_str("(")?;
        for (index, argument) in field.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ${}", argument.name, argument.variable)?;
        }
        f.write_str(")")?;
    }
    write_selections(f, &field.selections)
}
