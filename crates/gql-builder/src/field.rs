use crate::{Arguments, Model, Value};

/// A node of the selection tree.
///
/// *Field*:
///     Alias? Name Arguments? SelectionSet?
///
/// `name` is the key the field is known by locally. When `remote_name` is
/// set, the field is rendered as `name: remoteName`, i.e. `name` becomes the
/// GraphQL alias of the server-side field `remoteName`. A field without
/// children is a leaf.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Fields).
///
/// ### Example
/// ```rust
/// use gql_builder::Field;
///
/// let field = Field::new("books")
///     .with_arg("first", 10)
///     .with_field(Field::new("title"))
///     .with_field(Field::new("author").with_remote_name("writer"));
///
/// assert_eq!(field.name(), "books");
/// assert_eq!(field.fields().len(), 2);
/// assert_eq!(field.fields()[1].remote_name(), Some("writer"));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    name: String,
    remote_name: Option<String>,
    args: Arguments,
    fields: Vec<Field>,
}

impl Field {
    /// Create a new instance of Field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote_name: None,
            args: Arguments::new(),
            fields: Vec::new(),
        }
    }

    /// Create a field whose children are the fields of `M`.
    ///
    /// Use it for members holding one `M` as well as members holding a list
    /// of them: the selection is the same.
    pub fn of_model<M: Model>(name: impl Into<String>) -> Self {
        Self::new(name).with_fields(M::fields())
    }

    /// Create a top-level field from a model, named after the model unless
    /// `name` is given.
    pub fn from_model<M: Model>(name: Option<&str>, args: Arguments) -> Self {
        let name = name.map_or_else(M::type_name, str::to_string);
        Self::of_model::<M>(name).with_args(args)
    }

    /// Set the server-side name this field is read from.
    pub fn with_remote_name(mut self, remote_name: impl Into<String>) -> Self {
        self.remote_name = Some(remote_name.into());
        self
    }

    /// Add an argument. An argument with the same name is replaced in place.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Add several arguments, in order.
    pub fn with_args<K, V>(mut self, args: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.args
            .extend(args.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a child field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several child fields, in order.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// The local name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The server-side name of the field, if it differs from the local one.
    pub fn remote_name(&self) -> Option<&str> {
        self.remote_name.as_deref()
    }

    /// The arguments of the field.
    pub fn args(&self) -> &Arguments {
        &self.args
    }

    /// The child fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Whether the field has no children.
    pub fn is_leaf(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct MyModel;

    impl Model for MyModel {
        fn type_name() -> String {
            "MyModel".to_string()
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("field1"), Field::new("field2")]
        }
    }

    struct NestedModel;

    impl Model for NestedModel {
        fn type_name() -> String {
            "NestedModel".to_string()
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("nested_field")]
        }
    }

    struct ComplexModel;

    impl Model for ComplexModel {
        fn type_name() -> String {
            "ComplexModel".to_string()
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::of_model::<NestedModel>("nested"),
                Field::of_model::<NestedModel>("list_of_nested"),
            ]
        }
    }

    fn names(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(Field::name).collect()
    }

    #[test]
    fn it_builds_a_field_from_a_model() {
        let field = Field::from_model::<MyModel>(None, Arguments::new());

        assert_eq!(field.name(), "MyModel");
        assert_eq!(names(field.fields()), ["field1", "field2"]);
        assert!(field.fields().iter().all(Field::is_leaf));
    }

    #[test]
    fn it_builds_a_named_field_from_a_model() {
        let field = Field::from_model::<MyModel>(Some("CustomName"), Arguments::new());

        assert_eq!(field.name(), "CustomName");
        assert_eq!(names(field.fields()), ["field1", "field2"]);
    }

    #[test]
    fn it_keeps_model_field_arguments() {
        let args: Arguments = [("arg1".to_string(), Value::from("value1"))].into_iter().collect();
        let field = Field::from_model::<MyModel>(None, args.clone());

        assert_eq!(field.args(), &args);
    }

    #[test]
    fn it_recurses_into_nested_models() {
        let field = Field::from_model::<ComplexModel>(None, Arguments::new());

        assert_eq!(names(field.fields()), ["nested", "list_of_nested"]);
        assert_eq!(names(field.fields()[0].fields()), ["nested_field"]);
        assert_eq!(names(field.fields()[1].fields()), ["nested_field"]);
    }

    #[test]
    fn it_replaces_arguments_in_place() {
        let field = Field::new("books")
            .with_arg("first", 10)
            .with_arg("after", "abc")
            .with_arg("first", 20);

        let args: Vec<_> = field.args().iter().collect();
        assert_eq!(
            args,
            [
                (&"first".to_string(), &Value::Int(20)),
                (&"after".to_string(), &Value::from("abc")),
            ]
        );
    }
}
