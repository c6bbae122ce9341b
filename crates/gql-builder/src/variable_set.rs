use indexmap::IndexMap;
use serde::Serialize;

use crate::{BuildError, GqlType, Result, Variable};

/// An ordered set of variable declarations, keyed by variable name.
///
/// Each declaration fills in whatever its [`Variable`] leaves unset: the
/// declaration key becomes the name and the declared Rust type becomes the
/// type. Values set on the variable itself always win.
///
/// ### Example
/// ```rust
/// use gql_builder::{Variable, VariableSet};
/// use serde_json::json;
///
/// let vars = VariableSet::new()
///     .declare::<i32>("a", Variable::unnamed())?
///     .declare::<Option<String>>("b", Variable::unnamed())?
///     .declare::<bool>("c", Variable::unnamed().default_value(true))?
///     .declare::<String>("d", Variable::named("D"))?;
///
/// let names: Vec<_> = vars.iter().filter_map(Variable::name).collect();
/// assert_eq!(names, ["a", "b", "c", "D"]);
///
/// let values = vars.bind([("a", json!(1)), ("D", json!("1970-01-01T00:00:00"))])?;
/// assert_eq!(
///     values.to_json(),
///     json!({ "a": 1, "b": null, "c": true, "D": "1970-01-01T00:00:00" })
/// );
/// # Ok::<(), gql_builder::BuildError>(())
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct VariableSet {
    variables: IndexMap<String, Variable>,
}

impl VariableSet {
    /// Create an empty VariableSet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect fully specified variables. Every variable must be named and
    /// names must be unique.
    pub fn from_variables(variables: impl IntoIterator<Item = Variable>) -> Result<Self> {
        variables
            .into_iter()
            .try_fold(Self::new(), |set, variable| set.add(variable))
    }

    /// Declare `variable` under `key` with the Rust type `T`.
    pub fn declare<T: GqlType + ?Sized>(self, key: &str, mut variable: Variable) -> Result<Self> {
        variable.set_default_name(key);
        variable.set_default_type(T::descriptor());
        self.add(variable)
    }

    /// Add a named variable.
    pub fn add(mut self, variable: Variable) -> Result<Self> {
        let name = variable
            .name()
            .ok_or(BuildError::UnnamedVariable)?
            .to_string();
        if self.variables.contains_key(&name) {
            return Err(BuildError::DuplicateVariable(name));
        }
        self.variables.insert(name, variable);
        Ok(self)
    }

    /// Look a variable up by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// The variables, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.variables.values()
    }

    /// The number of declared variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is declared.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Bind values to the declared variables.
    ///
    /// Variables without a supplied value take their default. Fails if a
    /// required variable has no value, or if a value is given for a name
    /// that is not declared.
    pub fn bind<K, V>(&self, values: impl IntoIterator<Item = (K, V)>) -> Result<VariableValues>
    where
        K: Into<String>,
        V: Serialize,
    {
        let mut supplied = IndexMap::new();
        for (name, value) in values {
            let name = name.into();
            if !self.variables.contains_key(&name) {
                return Err(BuildError::UnknownVariable(name));
            }
            let value = to_json(&name, value)?;
            supplied.insert(name, value);
        }

        let values = self
            .variables
            .iter()
            .map(|(name, variable)| -> Result<(String, serde_json::Value)> {
                let value = match supplied.swap_remove(name) {
                    Some(value) => value,
                    None => variable.resolved_default()?,
                };
                Ok((name.clone(), value))
            })
            .collect::<Result<_>>()?;

        Ok(VariableValues { values })
    }
}

impl IntoIterator for VariableSet {
    type Item = Variable;
    type IntoIter = indexmap::map::IntoValues<String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_values()
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a Variable;
    type IntoIter = indexmap::map::Values<'a, String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.values()
    }
}

fn to_json(name: &str, value: impl Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|source| BuildError::Serialize {
        name: name.to_string(),
        source,
    })
}

/// Values bound to the variables of a [`VariableSet`], ready to be sent
/// alongside the document.
///
/// Serializes as a JSON object in declaration order.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(transparent)]
pub struct VariableValues {
    values: IndexMap<String, serde_json::Value>,
}

impl VariableValues {
    /// The value of the variable `name`.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    /// Replace the value of the declared variable `name`.
    pub fn set(&mut self, name: &str, value: impl Serialize) -> Result<()> {
        let value = to_json(name, value)?;
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BuildError::UnknownVariable(name.to_string())),
        }
    }

    /// The names and values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The values as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }
}
