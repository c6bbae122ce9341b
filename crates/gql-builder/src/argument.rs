use indexmap::IndexMap;

use crate::{Result, Value, ValueBuilder};

/// Field arguments: argument name to value, in insertion order.
pub type Arguments = IndexMap<String, Value>;

/// Renders an argument mapping as a parenthesized argument list.
///
/// *Arguments*:
///     ( Argument* )
///
/// *Argument*:
///     Name: Value
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Arguments).
///
/// ### Example
/// ```rust
/// use gql_builder::{ArgsBuilder, Arguments, Value};
///
/// let mut args = Arguments::new();
/// args.insert("a".to_string(), Value::from("1"));
/// args.insert("b".to_string(), Value::from("2"));
///
/// assert_eq!(ArgsBuilder::new().build(&args).unwrap(), r#"(a: "1", b: "2")"#);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgsBuilder {
    values: ValueBuilder,
}

impl ArgsBuilder {
    /// Create a new ArgsBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `args`. An empty mapping renders as `()`.
    pub fn build(&self, args: &Arguments) -> Result<String> {
        let mut text = String::new();
        self.write_args(args, &mut text)?;
        Ok(text)
    }

    pub(crate) fn write_args(&self, args: &Arguments, text: &mut String) -> Result<()> {
        text.push('(');
        for (i, (name, value)) in args.iter().enumerate() {
            if i != 0 {
                text.push_str(", ");
            }
            text.push_str(name);
            text.push_str(": ");
            self.values.write_value(value, text)?;
        }
        text.push(')');

        Ok(())
    }
}
