use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::{BuildError, Result, Variable};

/// The built-in GraphQL scalars a declared type can map to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    /// `String`
    String,
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
}

impl ScalarKind {
    /// The GraphQL name of the scalar.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "String",
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Float",
            ScalarKind::Boolean => "Boolean",
        }
    }
}

/// Semantic description of a variable's declared type.
///
/// This is what [`TypeBuilder`] walks to produce a GraphQL type string. It can
/// be written by hand or derived from a Rust type through [`GqlType`].
///
/// ### Example
/// ```rust
/// use gql_builder::{GqlType, ScalarKind, TypeDescriptor};
///
/// assert_eq!(
///     <Vec<Option<String>>>::descriptor(),
///     TypeDescriptor::list(TypeDescriptor::optional(TypeDescriptor::Scalar(ScalarKind::String))),
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDescriptor {
    /// A built-in scalar.
    Scalar(ScalarKind),
    /// Any other named type: custom scalars, enums, input objects.
    Named(String),
    /// An ordered container over a single element type.
    List(Box<TypeDescriptor>),
    /// The inner type, or null.
    Optional(Box<TypeDescriptor>),
    /// Any of the alternatives. `Null` among them makes the union nullable.
    Union(Vec<TypeDescriptor>),
    /// The null type itself.
    Null,
    /// A key-value container.
    Map {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
    /// A type that carries no usable information, e.g. an arbitrary JSON value.
    Unresolved,
}

impl TypeDescriptor {
    /// Create a new instance of TypeDescriptor::Named.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Create a new instance of TypeDescriptor::List.
    pub fn list(ty: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(ty))
    }

    /// Create a new instance of TypeDescriptor::Optional.
    pub fn optional(ty: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(ty))
    }

    /// Whether a null value is accepted at the outermost level.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeDescriptor::Optional(_) | TypeDescriptor::Null => true,
            TypeDescriptor::Union(alternatives) => alternatives
                .iter()
                .any(|alt| matches!(alt, TypeDescriptor::Null)),
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Scalar(kind) => f.write_str(kind.name()),
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::List(ty) => write!(f, "list of {ty}"),
            TypeDescriptor::Optional(ty) => write!(f, "{ty} | null"),
            TypeDescriptor::Union(alternatives) => {
                for (i, alt) in alternatives.iter().enumerate() {
                    if i != 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{alt}")?;
                }
                Ok(())
            }
            TypeDescriptor::Null => f.write_str("null"),
            TypeDescriptor::Map { key, value } => write!(f, "map of {key} to {value}"),
            TypeDescriptor::Unresolved => f.write_str("unknown"),
        }
    }
}

/// Rust types that know their [`TypeDescriptor`].
///
/// Implement it for your own types to have them rendered as a named GraphQL
/// type:
///
/// ```rust
/// use gql_builder::{GqlType, TypeDescriptor, Variable};
///
/// struct DateTime;
///
/// impl GqlType for DateTime {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::named("DateTime")
///     }
/// }
///
/// let var = Variable::of::<Option<DateTime>>("since");
/// assert_eq!(var.declared_type(), Some(&TypeDescriptor::optional(TypeDescriptor::named("DateTime"))));
/// ```
pub trait GqlType {
    /// The descriptor of this type.
    fn descriptor() -> TypeDescriptor;
}

macro_rules! scalar_type {
    ($kind: ident: $($ty: ty),+) => {
        $(
            impl GqlType for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::Scalar(ScalarKind::$kind)
                }
            }
        )+
    };
}

scalar_type!(String: String, str, char);
scalar_type!(Int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_type!(Float: f32, f64);
scalar_type!(Boolean: bool);

macro_rules! list_type {
    ($($ty: ident),+) => {
        $(
            impl<T: GqlType> GqlType for $ty<T> {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::list(T::descriptor())
                }
            }
        )+
    };
}

list_type!(Vec, VecDeque, BTreeSet, HashSet, IndexSet);

macro_rules! map_type {
    ($($ty: ident),+) => {
        $(
            impl<K: GqlType, V: GqlType> GqlType for $ty<K, V> {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::Map {
                        key: Box::new(K::descriptor()),
                        value: Box::new(V::descriptor()),
                    }
                }
            }
        )+
    };
}

map_type!(HashMap, BTreeMap, IndexMap);

impl<T: GqlType> GqlType for [T] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list(T::descriptor())
    }
}

impl<T: GqlType, const N: usize> GqlType for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list(T::descriptor())
    }
}

impl<T: GqlType + ?Sized> GqlType for &T {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: GqlType + ?Sized> GqlType for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: GqlType> GqlType for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::optional(T::descriptor())
    }
}

impl GqlType for serde_json::Value {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Unresolved
    }
}

/// A GraphQL type reference, as written in a variable definition.
///
/// This enum is responsible for encoding values such as `String!`,
/// `[[String]!]!`, etc.
///
/// ### Example
/// ```rust
/// use gql_builder::GraphQLType;
///
/// let ty = GraphQLType::non_null(GraphQLType::list(GraphQLType::named("String")));
/// assert_eq!(ty.to_string(), "[String]!");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GraphQLType {
    /// The non-null wrapper (`!`).
    NonNull(Box<GraphQLType>),
    /// The list wrapper (`[]`).
    List(Box<GraphQLType>),
    /// A named type.
    Named(String),
}

impl GraphQLType {
    /// Create a new instance of GraphQLType::NonNull.
    pub fn non_null(ty: GraphQLType) -> Self {
        GraphQLType::NonNull(Box::new(ty))
    }

    /// Create a new instance of GraphQLType::List.
    pub fn list(ty: GraphQLType) -> Self {
        GraphQLType::List(Box::new(ty))
    }

    /// Create a new instance of GraphQLType::Named.
    pub fn named(name: impl Into<String>) -> Self {
        GraphQLType::Named(name.into())
    }

    /// Remove the outermost non-null wrapper, if any.
    fn nullable(self) -> Self {
        match self {
            GraphQLType::NonNull(ty) => *ty,
            ty => ty,
        }
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLType::List(ty) => write!(f, "[{ty}]"),
            GraphQLType::NonNull(ty) => write!(f, "{ty}!"),
            GraphQLType::Named(name) => f.write_str(name),
        }
    }
}

/// Derives the GraphQL type of a [`Variable`] from its declared type.
///
/// Every level is non-null unless it is optional. The outermost level is
/// also nullable when the variable is not required, i.e. when it has a
/// default value.
///
/// ### Example
/// ```rust
/// use gql_builder::{TypeBuilder, Variable};
///
/// let builder = TypeBuilder::new();
/// assert_eq!(builder.build(&Variable::of::<Vec<Option<String>>>("tags")).unwrap(), "[String]!");
/// assert_eq!(builder.build(&Variable::of::<Option<Vec<String>>>("tags")).unwrap(), "[String!]");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeBuilder;

impl TypeBuilder {
    /// Create a new TypeBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Render the GraphQL type string of `variable`.
    pub fn build(&self, variable: &Variable) -> Result<String> {
        Ok(self.resolve(variable)?.to_string())
    }

    /// Resolve the GraphQL type of `variable` without rendering it.
    pub fn resolve(&self, variable: &Variable) -> Result<GraphQLType> {
        let var_name = || variable.name().unwrap_or("<unnamed>").to_string();
        let declared = variable
            .declared_type()
            .ok_or_else(|| BuildError::UnresolvableType(var_name()))?;

        let ty = TypeResolver {
            type_name: variable.type_name_override(),
            var_name: &var_name,
        }
        .resolve(declared)?;

        if variable.is_required() {
            Ok(ty)
        } else {
            Ok(ty.nullable())
        }
    }
}

struct TypeResolver<'a, F> {
    type_name: Option<&'a str>,
    var_name: &'a F,
}

impl<F: Fn() -> String> TypeResolver<'_, F> {
    fn resolve(&self, ty: &TypeDescriptor) -> Result<GraphQLType> {
        match ty {
            TypeDescriptor::Optional(inner) => Ok(self.resolve(inner)?.nullable()),
            TypeDescriptor::Union(alternatives) => self.resolve_union(ty, alternatives),
            TypeDescriptor::List(inner) => {
                Ok(GraphQLType::non_null(GraphQLType::list(self.resolve(inner)?)))
            }
            TypeDescriptor::Scalar(kind) => Ok(self.leaf(kind.name())),
            TypeDescriptor::Named(name) => Ok(self.leaf(name)),
            TypeDescriptor::Null | TypeDescriptor::Map { .. } | TypeDescriptor::Unresolved => {
                Err(BuildError::UnresolvableType((self.var_name)()))
            }
        }
    }

    fn resolve_union(
        &self,
        union: &TypeDescriptor,
        alternatives: &[TypeDescriptor],
    ) -> Result<GraphQLType> {
        let mut non_null: Vec<&TypeDescriptor> = Vec::new();
        for alt in alternatives {
            if !matches!(alt, TypeDescriptor::Null) && !non_null.contains(&alt) {
                non_null.push(alt);
            }
        }

        let ty = match (non_null.as_slice(), self.type_name) {
            ([], _) => return Err(BuildError::UnresolvableType((self.var_name)())),
            ([single], _) => self.resolve(single)?,
            (_, Some(type_name)) => self.leaf(type_name),
            (_, None) => return Err(BuildError::InvalidUnionType(union.to_string())),
        };

        if union.is_nullable() {
            Ok(ty.nullable())
        } else {
            Ok(ty)
        }
    }

    fn leaf(&self, name: &str) -> GraphQLType {
        GraphQLType::non_null(GraphQLType::named(self.type_name.unwrap_or(name)))
    }
}
