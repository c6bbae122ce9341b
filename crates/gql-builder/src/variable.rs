use crate::{BuildError, GqlType, Result, TypeBuilder, TypeDescriptor};

/// A variable declared by an operation, referenced as `$name` from arguments.
///
/// *VariableDefinition*:
///     VariableName : Type
///
/// The GraphQL type written in the operation header is derived from the
/// declared type by [`TypeBuilder`]. A variable without a default value and
/// with a non-optional type is *required*.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Variables).
///
/// ### Example
/// ```rust
/// use gql_builder::Variable;
///
/// let var = Variable::of::<Option<i32>>("id");
///
/// assert!(!var.is_required());
/// assert_eq!(var.to_definition().unwrap(), "$id: Int");
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Variable {
    name: Option<String>,
    ty: Option<TypeDescriptor>,
    type_name: Option<String>,
    // `Some(Null)` is an explicit null default, `None` means no default.
    default_value: Option<serde_json::Value>,
}

impl Variable {
    /// Create a new instance of Variable.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Create a variable with a name but no declared type yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create a variable whose declared type is derived from `T`.
    pub fn of<T: GqlType + ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, T::descriptor())
    }

    /// Create a variable with neither a name nor a type. Both can be filled
    /// in later by [`Variable::set_default_name`] and
    /// [`Variable::set_default_type`].
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the default value of the variable.
    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Use `name` as the GraphQL type name instead of the one derived from
    /// the declared type. List and nullability wrappers are kept.
    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Set the declared type, unless one is already set.
    pub fn declared(mut self, ty: TypeDescriptor) -> Self {
        self.set_default_type(ty);
        self
    }

    /// Set the name of the variable if it is not set.
    pub fn set_default_name(&mut self, name: impl Into<String>) {
        if self.name.is_none() {
            self.name = Some(name.into());
        }
    }

    /// Set the type of the variable if it is not set.
    pub fn set_default_type(&mut self, ty: TypeDescriptor) {
        if self.ty.is_none() {
            self.ty = Some(ty);
        }
    }

    /// The name of the variable, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared type of the variable, if set.
    pub fn declared_type(&self) -> Option<&TypeDescriptor> {
        self.ty.as_ref()
    }

    /// The GraphQL type name override, if set.
    pub fn type_name_override(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The explicitly set default value.
    pub fn explicit_default(&self) -> Option<&serde_json::Value> {
        self.default_value.as_ref()
    }

    /// Whether a value must be supplied for this variable.
    ///
    /// A variable is required if no default value is set *and* its type is
    /// not optional.
    pub fn is_required(&self) -> bool {
        self.default_value.is_none() && !self.ty.as_ref().is_some_and(TypeDescriptor::is_nullable)
    }

    /// The value used when none is supplied: the explicit default, or `null`
    /// for optional variables.
    pub fn resolved_default(&self) -> Result<serde_json::Value> {
        match &self.default_value {
            Some(value) => Ok(value.clone()),
            None if self.is_required() => Err(BuildError::MissingRequiredVariable(
                self.name().unwrap_or_default().to_string(),
            )),
            None => Ok(serde_json::Value::Null),
        }
    }

    /// Render this variable as it appears in an operation header, e.g.
    /// `$id: Int!`.
    pub fn to_definition(&self) -> Result<String> {
        let name = self.name().ok_or(BuildError::UnnamedVariable)?;
        let ty = TypeBuilder::new().build(self)?;
        Ok(format!("${name}: {ty}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn it_keeps_construction_values() {
        let var = Variable::of::<i32>("v").default_value(42);

        assert_eq!(var.name(), Some("v"));
        assert_eq!(var.explicit_default(), Some(&json!(42)));
        assert_eq!(var.declared_type(), Some(&i32::descriptor()));
    }

    #[test]
    fn default_makes_variable_optional() {
        assert!(!Variable::of::<i32>("v").default_value(42).is_required());
        assert!(!Variable::of::<i32>("v").default_value(json!(null)).is_required());
    }

    #[test]
    fn no_default_makes_variable_required() {
        assert!(Variable::of::<i32>("v").is_required());
        assert!(Variable::of::<Vec<Option<i32>>>("v").is_required());
    }

    #[test]
    fn optional_type_makes_variable_optional() {
        assert!(!Variable::of::<Option<i32>>("v").is_required());
        let union = TypeDescriptor::Union(vec![i32::descriptor(), TypeDescriptor::Null]);
        assert!(!Variable::new("v", union).is_required());
    }

    #[test]
    fn optional_variables_default_to_null() {
        assert_eq!(
            Variable::of::<Option<i32>>("v").resolved_default().unwrap(),
            json!(null)
        );
    }

    #[test]
    fn required_variables_have_no_default() {
        let err = Variable::of::<i32>("v").resolved_default().unwrap_err();
        assert_eq!(err.to_string(), "missing value for required variable `v`");
    }

    #[test]
    fn it_sets_name_once() {
        let mut var = Variable::unnamed().declared(i32::descriptor());
        var.set_default_name("v");
        assert_eq!(var.name(), Some("v"));

        var.set_default_name("w");
        assert_eq!(var.name(), Some("v"));
    }

    #[test]
    fn it_sets_type_once() {
        let mut var = Variable::new("v", TypeDescriptor::Unresolved);
        var.set_default_type(i32::descriptor());
        assert_eq!(var.declared_type(), Some(&TypeDescriptor::Unresolved));

        let mut var = Variable::unnamed();
        var.set_default_type(i32::descriptor());
        assert_eq!(var.declared_type(), Some(&i32::descriptor()));
        assert!(var.is_required());
    }

    #[test]
    fn it_encodes_variable_definition() {
        assert_eq!(
            Variable::of::<i32>("id").to_definition().unwrap(),
            "$id: Int!"
        );
        assert_eq!(
            Variable::of::<Vec<String>>("tags")
                .default_value(json!([]))
                .to_definition()
                .unwrap(),
            "$tags: [String!]"
        );
        assert!(matches!(
            Variable::unnamed().declared(i32::descriptor()).to_definition(),
            Err(BuildError::UnnamedVariable)
        ));
    }
}
