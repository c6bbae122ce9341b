use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Arguments, Field, Indent, Model, OperationFormatter, Result, Variable};

/// A named query or mutation: variable declarations plus a field selection.
///
/// *OperationDefinition*:
///     OperationType Name VariableDefinitions? SelectionSet
///
/// The name is only a label for the operation; it need not be unique.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Operations).
///
/// ### Example
/// ```rust
/// use gql_builder::{Field, Operation, Variable};
/// use indoc::indoc;
///
/// let id = Variable::of::<i32>("id");
/// let op = Operation::query("Book")
///     .with_field(
///         Field::new("book")
///             .with_arg("bookId", &id)
///             .with_field(Field::new("title")),
///     )
///     .with_variable(id);
///
/// assert_eq!(
///     op.to_document().unwrap(),
///     indoc! { r#"
///         query Book($id: Int!) {
///           book(bookId: $id) {
///             title,
///           },
///         }"#}
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Operation {
    operation_type: OperationType,
    name: String,
    fields: Vec<Field>,
    variables: Vec<Variable>,
}

impl Operation {
    /// Create a new instance of Operation.
    pub fn new(operation_type: OperationType, name: impl Into<String>) -> Self {
        Self {
            operation_type,
            name: name.into(),
            fields: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Create an empty query.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(OperationType::Query, name)
    }

    /// Create an empty mutation.
    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(OperationType::Mutation, name)
    }

    /// Create an operation with a single top-level field `field_name` whose
    /// children are the fields of `M`. The operation is named after `M`.
    pub fn from_model<M: Model>(
        operation_type: OperationType,
        field_name: &str,
        args: Arguments,
    ) -> Self {
        Self::new(operation_type, M::type_name())
            .with_field(Field::from_model::<M>(Some(field_name), args))
    }

    /// Rename the operation.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a top-level field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several top-level fields, in order.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Declare a variable.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// Declare several variables, in order. Accepts a
    /// [`VariableSet`](crate::VariableSet).
    pub fn with_variables(mut self, variables: impl IntoIterator<Item = Variable>) -> Self {
        self.variables.extend(variables);
        self
    }

    /// The kind of operation.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// The operation's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The top-level fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The declared variables, in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Format the operation with the given indentation.
    pub fn format(&self, indent: Indent) -> Result<String> {
        OperationFormatter::new(indent)?.format(self)
    }

    /// Format the operation with the default two-space indentation.
    pub fn to_document(&self) -> Result<String> {
        OperationFormatter::default().format(self)
    }
}

/// The kind of operation.
///
/// *OperationType*:
///     query | mutation
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#OperationType).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Represents a query operation
    Query,
    /// Represents a mutation operation
    Mutation,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Query => write!(f, "query"),
            OperationType::Mutation => write!(f, "mutation"),
        }
    }
}
