use std::marker::PhantomData;

use crate::Field;

/// Types that describe their own GraphQL selection.
///
/// Scalar members become leaf fields; members holding another model, or a
/// list of them, become [`Field::of_model`] fields so their selection is
/// nested.
///
/// ### Example
/// ```rust
/// use gql_builder::{Field, Model};
///
/// struct Author;
///
/// impl Model for Author {
///     fn type_name() -> String {
///         "Author".to_string()
///     }
///
///     fn fields() -> Vec<Field> {
///         vec![Field::new("name")]
///     }
/// }
///
/// struct Book;
///
/// impl Model for Book {
///     fn type_name() -> String {
///         "Book".to_string()
///     }
///
///     fn fields() -> Vec<Field> {
///         vec![
///             Field::new("title"),
///             Field::of_model::<Author>("authors"),
///         ]
///     }
/// }
///
/// assert_eq!(Book::fields()[1].fields()[0].name(), "name");
/// ```
pub trait Model {
    /// Name of the type, used for default field and operation names.
    fn type_name() -> String;

    /// The fields selected for this type, in declaration order.
    fn fields() -> Vec<Field>;
}

/// A Relay-style paginated connection over `M`.
///
/// Selects `edges { node { ... }, cursor }` and `pageInfo { ... }`.
#[derive(Debug)]
pub struct Connection<M>(PhantomData<M>);

/// One edge of a [`Connection`]: a node and its cursor.
#[derive(Debug)]
pub struct Edge<M>(PhantomData<M>);

/// Pagination state of a [`Connection`].
#[derive(Debug)]
pub struct PageInfo;

impl<M: Model> Model for Connection<M> {
    fn type_name() -> String {
        format!("{}Connection", M::type_name())
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::of_model::<Edge<M>>("edges"),
            Field::of_model::<PageInfo>("pageInfo"),
        ]
    }
}

impl<M: Model> Model for Edge<M> {
    fn type_name() -> String {
        format!("{}Edge", M::type_name())
    }

    fn fields() -> Vec<Field> {
        vec![Field::of_model::<M>("node"), Field::new("cursor")]
    }
}

impl Model for PageInfo {
    fn type_name() -> String {
        "PageInfo".to_string()
    }

    fn fields() -> Vec<Field> {
        ["hasNextPage", "hasPreviousPage", "startCursor", "endCursor"]
            .into_iter()
            .map(Field::new)
            .collect()
    }
}
