use thiserror::Error;

/// Convenience alias for results returned by the builders in this crate.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// An error raised while turning operations, types or values into GraphQL text.
///
/// All of these point at a malformed call rather than a runtime condition:
/// nothing is rendered when one is returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The value has no GraphQL literal form, e.g. a key-value mapping or a
    /// non-finite float.
    #[error("value {0} has no GraphQL literal form")]
    UnsupportedValueKind(String),

    /// The type is a union of two or more non-null alternatives.
    #[error("union type {0} cannot be expressed as a GraphQL type")]
    InvalidUnionType(String),

    /// The declared type is missing or carries no usable element type.
    #[error("cannot resolve a GraphQL type for variable `{0}`")]
    UnresolvableType(String),

    /// The indentation option is neither a flag, a width nor whitespace.
    #[error("invalid indent `{0}`: expected `indent`, `noindent`, a width or whitespace")]
    InvalidIndentConfig(String),

    /// A required variable (no default, non-optional type) was given no value.
    #[error("missing value for required variable `{0}`")]
    MissingRequiredVariable(String),

    /// A variable was used before a name was assigned to it.
    #[error("variable has no name")]
    UnnamedVariable,

    /// A value was bound to a variable name that was never declared.
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    /// The same variable name was declared twice.
    #[error("variable `{0}` is declared more than once")]
    DuplicateVariable(String),

    /// A variable value could not be converted to JSON.
    #[error("cannot serialize value of variable `{name}`: {source}")]
    Serialize {
        /// Variable name.
        name: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}
