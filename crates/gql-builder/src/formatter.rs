use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{ArgsBuilder, BuildError, Field, Operation, Result, TypeBuilder};

/// Indentation used by [`OperationFormatter`].
///
/// Besides the variants, an indent can be parsed from the textual options
/// `indent` (or the empty string), `noindent`, a width such as `4`, or a
/// whitespace string such as `"\t"`.
///
/// ### Example
/// ```rust
/// use gql_builder::Indent;
///
/// assert_eq!("noindent".parse::<Indent>().unwrap(), Indent::Disabled);
/// assert_eq!("4".parse::<Indent>().unwrap(), Indent::Spaces(4));
/// assert_eq!("\t".parse::<Indent>().unwrap(), Indent::Custom("\t".to_string()));
/// assert!("foo".parse::<Indent>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Indent {
    /// No line breaks: the document is a single line.
    Disabled,
    /// Two spaces per level.
    #[default]
    Default,
    /// This many spaces per level.
    Spaces(usize),
    /// This whitespace string, once per level.
    Custom(String),
}

impl Indent {
    const DEFAULT_INDENTATION: &'static str = "  ";

    /// Create a custom indent. Fails unless `unit` is non-empty whitespace.
    pub fn custom(unit: impl Into<String>) -> Result<Self> {
        let unit = unit.into();
        if is_whitespace(&unit) {
            Ok(Indent::Custom(unit))
        } else {
            Err(BuildError::InvalidIndentConfig(unit))
        }
    }

    /// The string repeated once per nesting level, or `None` when lines are
    /// not broken at all.
    fn unit(&self) -> Result<Option<String>> {
        match self {
            Indent::Disabled => Ok(None),
            Indent::Default => Ok(Some(Self::DEFAULT_INDENTATION.to_string())),
            Indent::Spaces(width) => Ok(Some(" ".repeat(*width))),
            Indent::Custom(unit) if is_whitespace(unit) => Ok(Some(unit.clone())),
            Indent::Custom(unit) => Err(BuildError::InvalidIndentConfig(unit.clone())),
        }
    }
}

fn is_whitespace(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_whitespace)
}

impl From<bool> for Indent {
    fn from(indent: bool) -> Self {
        if indent {
            Indent::Default
        } else {
            Indent::Disabled
        }
    }
}

impl From<usize> for Indent {
    fn from(width: usize) -> Self {
        Indent::Spaces(width)
    }
}

impl FromStr for Indent {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "indent" => Ok(Indent::Default),
            "noindent" => Ok(Indent::Disabled),
            s if s.bytes().all(|b| b.is_ascii_digit()) => s
                .parse()
                .map(Indent::Spaces)
                .map_err(|_| BuildError::InvalidIndentConfig(s.to_string())),
            s => Indent::custom(s),
        }
    }
}

impl TryFrom<&str> for Indent {
    type Error = BuildError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Indent {
    type Error = BuildError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Disabled => f.write_str("noindent"),
            Indent::Default => f.write_str("indent"),
            Indent::Spaces(width) => write!(f, "{width}"),
            Indent::Custom(unit) => f.write_str(unit),
        }
    }
}

impl From<Indent> for String {
    fn from(indent: Indent) -> Self {
        indent.to_string()
    }
}

/// Turns an [`Operation`] into GraphQL document text.
///
/// Every field is terminated by a comma. With indentation enabled, each
/// field starts on its own line, indented once per nesting level; without
/// it, the whole document is one line.
///
/// ### Example
/// ```rust
/// use gql_builder::{Field, Indent, Operation, OperationFormatter};
///
/// let op = Operation::query("Book").with_field(
///     Field::new("books")
///         .with_field(Field::new("title"))
///         .with_field(Field::new("author")),
/// );
///
/// assert_eq!(
///     OperationFormatter::default().format(&op).unwrap(),
///     "query Book {\n  books {\n    title,\n    author,\n  },\n}"
/// );
/// assert_eq!(
///     OperationFormatter::new(Indent::Disabled).unwrap().format(&op).unwrap(),
///     "query Book {books {title,author,},}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OperationFormatter {
    indentation: Option<String>,
    types: TypeBuilder,
    args: ArgsBuilder,
}

impl Default for OperationFormatter {
    fn default() -> Self {
        Self {
            indentation: Some(Indent::DEFAULT_INDENTATION.to_string()),
            types: TypeBuilder::new(),
            args: ArgsBuilder::new(),
        }
    }
}

impl OperationFormatter {
    /// Create a formatter. Fails if a custom indent is not whitespace.
    pub fn new(indent: Indent) -> Result<Self> {
        Ok(Self {
            indentation: indent.unit()?,
            ..Self::default()
        })
    }

    /// Format `operation`. Nothing is returned if any part of it fails to
    /// render.
    pub fn format(&self, operation: &Operation) -> Result<String> {
        trace!(
            "formatting {} {} ({} fields, {} variables)",
            operation.operation_type(),
            operation.name(),
            operation.fields().len(),
            operation.variables().len(),
        );

        self.write_operation(operation).inspect_err(|err| {
            debug!(
                "cannot format {} {}: {err}",
                operation.operation_type(),
                operation.name()
            );
        })
    }

    fn write_operation(&self, operation: &Operation) -> Result<String> {
        let mut text = format!("{} {}", operation.operation_type(), operation.name());

        if !operation.variables().is_empty() {
            text.push('(');
            for (i, variable) in operation.variables().iter().enumerate() {
                if i != 0 {
                    text.push_str(", ");
                }
                let name = variable.name().ok_or(BuildError::UnnamedVariable)?;
                text.push('$');
                text.push_str(name);
                text.push_str(": ");
                text.push_str(&self.types.build(variable)?);
            }
            text.push(')');
        }

        text.push_str(" {");
        self.write_fields(operation.fields(), 1, &mut text)?;
        self.write_indent(0, &mut text);
        text.push('}');

        Ok(text)
    }

    fn write_fields(&self, fields: &[Field], level: usize, text: &mut String) -> Result<()> {
        for field in fields {
            self.write_field(field, level, text)?;
        }
        Ok(())
    }

    fn write_field(&self, field: &Field, level: usize, text: &mut String) -> Result<()> {
        self.write_indent(level, text);
        text.push_str(field.name());
        if let Some(remote_name) = field.remote_name() {
            text.push_str(": ");
            text.push_str(remote_name);
        }
        if !field.args().is_empty() {
            self.args.write_args(field.args(), text)?;
        }
        if !field.is_leaf() {
            text.push_str(" {");
            self.write_fields(field.fields(), level + 1, text)?;
            self.write_indent(level, text);
            text.push('}');
        }
        text.push(',');

        Ok(())
    }

    fn write_indent(&self, level: usize, text: &mut String) {
        if let Some(indentation) = &self.indentation {
            text.push('\n');
            for _ in 0..level {
                text.push_str(indentation);
            }
        }
    }
}
