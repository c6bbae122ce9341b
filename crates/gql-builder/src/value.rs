use indexmap::IndexMap;

use crate::{BuildError, Result, Variable};

/// A value that can be passed as a field argument.
///
/// *Value*:
///     Variable | IntValue | FloatValue | StringValue | BooleanValue | NullValue | ListValue
///
/// `Raw` is an escape hatch for literals this enum does not model (enum
/// values, input objects, ...): its text is inserted as is.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#Value).
///
/// ### Example
/// ```rust
/// use gql_builder::{Value, ValueBuilder};
///
/// let value: Value = vec!["one", "two"].into();
/// assert_eq!(ValueBuilder::new().build(&value).unwrap(), r#"["one", "two"]"#);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Name of a variable example: `varName`
    Variable(String),
    /// Int value example: `7`
    Int(i64),
    /// Float value example: `25.4`
    Float(f64),
    /// String value example: `"My string"`
    String(String),
    /// Boolean value example: `false`
    Boolean(bool),
    /// Null value example: `null`
    Null,
    /// Pre-formatted literal example: `ASC`
    Raw(String),
    /// List value example: `[1, 2, 3]`
    List(Vec<Value>),
    /// Key-value mapping. It has no literal form here and is rejected by
    /// [`ValueBuilder`].
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Create a reference to the variable called `name`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Wrap a pre-formatted GraphQL literal. It is rendered verbatim.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// Short description used in error messages.
    fn describe(&self) -> String {
        match self {
            Self::Object(obj) => format!(
                "{{{}}}",
                obj.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            ),
            Self::Float(fl) => format!("{fl}"),
            other => format!("{other:?}"),
        }
    }
}

/// Renders a [`Value`] as GraphQL literal syntax.
///
/// ### Example
/// ```rust
/// use gql_builder::{Value, ValueBuilder};
///
/// let builder = ValueBuilder::new();
/// assert_eq!(builder.build(&Value::from("foo\nbar")).unwrap(), r#""foo\nbar""#);
/// assert_eq!(builder.build(&Value::variable("id")).unwrap(), "$id");
/// assert_eq!(builder.build(&Value::Null).unwrap(), "null");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueBuilder;

impl ValueBuilder {
    /// Create a new ValueBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Render `value`. Fails with [`BuildError::UnsupportedValueKind`] when
    /// the value, or any value nested in it, has no literal form.
    pub fn build(&self, value: &Value) -> Result<String> {
        let mut text = String::new();
        self.write_value(value, &mut text)?;
        Ok(text)
    }

    pub(crate) fn write_value(&self, value: &Value, text: &mut String) -> Result<()> {
        match value {
            Value::Null => text.push_str("null"),
            Value::Boolean(b) => text.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => text.push_str(&i.to_string()),
            Value::Float(fl) => write_float(*fl, text)?,
            Value::String(s) => write_string(s, text),
            Value::Variable(name) => {
                if name.is_empty() {
                    return Err(BuildError::UnnamedVariable);
                }
                text.push('$');
                text.push_str(name);
            }
            Value::Raw(expr) => text.push_str(expr),
            Value::List(list) => {
                text.push('[');
                for (i, elt) in list.iter().enumerate() {
                    if i != 0 {
                        text.push_str(", ");
                    }
                    self.write_value(elt, text)?;
                }
                text.push(']');
            }
            Value::Object(_) => return Err(BuildError::UnsupportedValueKind(value.describe())),
        }

        Ok(())
    }
}

fn write_float(fl: f64, text: &mut String) -> Result<()> {
    if !fl.is_finite() {
        return Err(BuildError::UnsupportedValueKind(format!("{fl}")));
    }
    let repr = fl.to_string();
    text.push_str(&repr);
    // `Display` drops the fraction of whole floats, which would re-parse as an Int.
    if !repr.contains('.') {
        text.push_str(".0");
    }
    Ok(())
}

/// Write a double-quoted string, escaping characters as necessary.
fn write_string(s: &str, text: &mut String) {
    text.push('"');
    for c in s.chars() {
        match c {
            '"' => text.push_str(r#"\""#),
            '\\' => text.push_str(r#"\\"#),
            '\u{0008}' => text.push_str(r#"\b"#),
            '\u{000c}' => text.push_str(r#"\f"#),
            '\n' => text.push_str(r#"\n"#),
            '\r' => text.push_str(r#"\r"#),
            '\t' => text.push_str(r#"\t"#),
            c if c.is_control() => text.push_str(&format!("\\u{:04x}", c as u32)),
            // Other unicode chars are written as is
            c => text.push(c),
        }
    }
    text.push('"');
}

macro_rules! to_number_value {
    ($ty: path, $inner_type: path, $value_variant: ident) => {
        impl From<$ty> for Value {
            fn from(val: $ty) -> Self {
                Self::$value_variant(val as $inner_type)
            }
        }
    };
    ($({$ty: path, $inner_type: path, $value_variant: ident}),+) => {
        $(
            to_number_value!($ty, $inner_type, $value_variant);
        )+
    };
}

// Numbers
to_number_value!(
    {i64, i64, Int},
    {i32, i64, Int},
    {i16, i64, Int},
    {i8, i64, Int},
    {isize, i64, Int},
    {u32, i64, Int},
    {u16, i64, Int},
    {u8, i64, Int},
    {f64, f64, Float}
);

macro_rules! to_wide_unsigned_value {
    ($($ty: ty),+) => {
        $(
            /// Values above `i64::MAX` keep their exact decimal text.
            impl From<$ty> for Value {
                fn from(val: $ty) -> Self {
                    i64::try_from(val).map_or_else(|_| Self::Raw(val.to_string()), Self::Int)
                }
            }
        )+
    };
}

to_wide_unsigned_value!(u64, usize);

/// Takes the shortest decimal text of the `f32`, not of its widened `f64`.
impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Self::Float(val.to_string().parse().unwrap_or_else(|_| f64::from(val)))
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::String(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::String(val.to_string())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Boolean(val)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        val.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        val.into_iter().collect()
    }
}

/// Consumes the iterator once, in order, into a list value.
impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// References the variable by name. An unnamed variable fails to build.
impl From<&Variable> for Value {
    fn from(var: &Variable) -> Self {
        Self::Variable(var.name().unwrap_or_default().to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(u)) => u.into(),
                (None, None) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(list) => list.into_iter().collect(),
            serde_json::Value::Object(obj) => {
                Self::Object(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(value: impl Into<Value>) -> String {
        ValueBuilder::new().build(&value.into()).unwrap()
    }

    #[test]
    fn it_encodes_variable_references() {
        assert_eq!(build(Value::variable("foo")), "$foo");
        let var = Variable::of::<i32>("bookId");
        assert_eq!(build(&var), "$bookId");
    }

    #[test]
    fn it_rejects_unnamed_variable_references() {
        let err = ValueBuilder::new()
            .build(&Value::from(&Variable::unnamed()))
            .unwrap_err();
        assert!(matches!(err, BuildError::UnnamedVariable));
    }

    #[test]
    fn it_encodes_raw_expressions_verbatim() {
        assert_eq!(build(Value::raw("...")), "...");
        assert_eq!(build(Value::raw(r#""Harry Potter""#)), r#""Harry Potter""#);
    }

    #[test]
    fn it_escapes_strings() {
        assert_eq!(build("foo"), r#""foo""#);
        assert_eq!(build(r#""foo""#), r#""\"foo\"""#);
        assert_eq!(build("foo\nbar"), r#""foo\nbar""#);
        assert_eq!(build(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(build("tab\there\u{1}"), r#""tab\there\u0001""#);
    }

    #[test]
    fn it_encodes_booleans_as_keywords() {
        assert_eq!(build(true), "true");
        assert_eq!(build(false), "false");
    }

    #[test]
    fn it_encodes_numbers() {
        assert_eq!(build(42), "42");
        assert_eq!(build(-7i8), "-7");
        assert_eq!(build(42.42), "42.42");
        assert_eq!(build(42.0), "42.0");
        assert_eq!(build(0.1f64), "0.1");
    }

    #[test]
    fn it_keeps_wide_unsigned_integers_exact() {
        assert_eq!(build(u64::MAX), "18446744073709551615");
        assert_eq!(build(i64::MAX as u64 + 1), "9223372036854775808");
        assert_eq!(build(i64::MAX as u64), "9223372036854775807");
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(build(serde_json::json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn it_encodes_single_precision_floats_as_written() {
        assert_eq!(build(0.1f32), "0.1");
        assert_eq!(build(1.1f32), "1.1");
        assert_eq!(build(1.0f32), "1.0");
    }

    #[test]
    fn it_rejects_non_finite_floats() {
        let err = ValueBuilder::new().build(&Value::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedValueKind(_)));
    }

    #[test]
    fn it_encodes_null() {
        assert_eq!(build(Value::Null), "null");
        assert_eq!(build(None::<i32>), "null");
    }

    #[test]
    fn it_encodes_lists() {
        assert_eq!(build(vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(build(vec!["foo", "bar"]), r#"["foo", "bar"]"#);
        assert_eq!(build((0..3).collect::<Value>()), "[0, 1, 2]");
        assert_eq!(build(Vec::<i32>::new()), "[]");
        assert_eq!(
            build(vec![Value::from(vec![1]), Value::Null, Value::variable("v")]),
            "[[1], null, $v]"
        );
    }

    #[test]
    fn it_rejects_objects() {
        let value = Value::from(serde_json::json!({ "first": 1, "second": 2 }));
        let err = ValueBuilder::new().build(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "value {first, second} has no GraphQL literal form"
        );

        let nested = Value::List(vec![Value::Int(1), value]);
        assert!(ValueBuilder::new().build(&nested).is_err());
    }

    #[test]
    fn it_converts_json_values() {
        let value = Value::from(serde_json::json!([1, 2.5, "a", null, true]));
        assert_eq!(build(value), r#"[1, 2.5, "a", null, true]"#);
    }
}
