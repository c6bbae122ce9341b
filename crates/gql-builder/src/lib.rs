//! <div align="center">
//!   <h1><code>gql-builder</code></h1>
//!
//!   <p>
//!     <strong>A library to build GraphQL queries and mutations from typed field trees.</strong>
//!   </p>
//! </div>
//!
//! Operations are assembled from [`Field`] trees, usually derived from a
//! [`Model`], and [`Variable`] declarations, then rendered to GraphQL text by
//! an [`OperationFormatter`]. Variable types are derived from Rust types
//! through [`GqlType`], so `Option<Vec<String>>` becomes `[String!]`.
//!
//! For more information on GraphQL operations, please refer to [official
//! documentation](https://graphql.org/learn/queries/).
//!
//! ## Getting started
//! Add this to your `Cargo.toml` to start using `gql-builder`:
//! ```toml
//! # Just an example, change to the necessary package version.
//! [dependencies]
//! gql-builder = "0.1.0"
//! ```
//!
//! ## Example
//! ```rust
//! use gql_builder::{
//!     Arguments, Field, Indent, Model, Operation, OperationType, Value, Variable, VariableSet,
//! };
//! use indoc::indoc;
//! use serde_json::json;
//!
//! struct Book;
//!
//! impl Model for Book {
//!     fn type_name() -> String {
//!         "Book".to_string()
//!     }
//!
//!     fn fields() -> Vec<Field> {
//!         vec![Field::new("title"), Field::new("author")]
//!     }
//! }
//!
//! let vars = VariableSet::new().declare::<i32>("id", Variable::unnamed())?;
//! let args: Arguments = [("bookId".to_string(), Value::from(vars.get("id").unwrap()))]
//!     .into_iter()
//!     .collect();
//! let query = Operation::from_model::<Book>(OperationType::Query, "books", args)
//!     .with_variables(vars.clone());
//!
//! assert_eq!(
//!     query.to_document()?,
//!     indoc! { r#"
//!         query Book($id: Int!) {
//!           books(bookId: $id) {
//!             title,
//!             author,
//!           },
//!         }"#}
//! );
//! assert_eq!(
//!     query.format(Indent::Disabled)?,
//!     "query Book($id: Int!) {books(bookId: $id) {title,author,},}"
//! );
//!
//! let values = vars.bind([("id", 42)])?;
//! assert_eq!(values.to_json(), json!({ "id": 42 }));
//! # Ok::<(), gql_builder::BuildError>(())
//! ```
//!
//! ## License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod argument;
mod error;
mod field;
mod formatter;
mod model;
mod operation;
mod type_builder;
mod value;
mod variable;
mod variable_set;

pub use argument::{ArgsBuilder, Arguments};
pub use error::{BuildError, Result};
pub use field::Field;
pub use formatter::{Indent, OperationFormatter};
pub use model::{Connection, Edge, Model, PageInfo};
pub use operation::{Operation, OperationType};
pub use type_builder::{GqlType, GraphQLType, ScalarKind, TypeBuilder, TypeDescriptor};
pub use value::{Value, ValueBuilder};
pub use variable::Variable;
pub use variable_set::{VariableSet, VariableValues};
