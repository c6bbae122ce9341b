use apollo_parser::cst::{self, CstNode};
use gql_builder::{
    Arguments, Field, Indent, Model, Operation, OperationType, Value, Variable, VariableSet,
};
use pretty_assertions::assert_eq;

use crate::{parse_operation, top_level_fields};

struct Book;

impl Model for Book {
    fn type_name() -> String {
        "Book".to_string()
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::new("title").with_remote_name("bookTitle"),
            Field::new("author"),
        ]
    }
}

fn name_of(field: &cst::Field) -> String {
    field.name().unwrap().text().to_string()
}

fn alias_of(field: &cst::Field) -> Option<String> {
    field
        .alias()
        .map(|alias| alias.name().unwrap().text().to_string())
}

fn subfields(field: &cst::Field) -> Vec<cst::Field> {
    field
        .selection_set()
        .map(|set| {
            set.selections()
                .filter_map(|selection| match selection {
                    cst::Selection::Field(field) => Some(field),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn variable_types(op: &cst::OperationDefinition) -> Vec<(String, String)> {
    op.variable_definitions()
        .map(|defs| {
            defs.variable_definitions()
                .map(|def| {
                    let name = def.variable().unwrap().name().unwrap().text().to_string();
                    let ty = def.ty().unwrap().source_string();
                    (name, ty.trim().trim_end_matches(',').trim().to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}

fn search() -> Operation {
    let vars = VariableSet::new()
        .declare::<i32>("id", Variable::unnamed())
        .and_then(|vars| vars.declare::<Option<Vec<String>>>("tags", Variable::unnamed()))
        .and_then(|vars| {
            vars.declare::<Vec<Option<Vec<String>>>>("shelves", Variable::unnamed())
        })
        .and_then(|vars| {
            vars.declare::<String>("since", Variable::unnamed().type_name("Date").default_value("1970-01-01"))
        })
        .unwrap();

    let args: Arguments = vars
        .iter()
        .map(|var| (var.name().unwrap().to_string(), Value::from(var)))
        .collect();

    Operation::from_model::<Book>(OperationType::Query, "books", args).with_variables(vars)
}

#[test]
fn indented_documents_reparse() {
    for indent in [Indent::Default, Indent::Spaces(4), Indent::Spaces(0), "\t".parse().unwrap()] {
        let document = search().format(indent).unwrap();
        let op = parse_operation(&document);

        assert!(op.operation_type().unwrap().query_token().is_some());
        assert_eq!(op.name().unwrap().text().to_string(), "Book");
    }
}

#[test]
fn single_line_documents_reparse() {
    let document = search().format(Indent::Disabled).unwrap();
    assert!(!document.contains('\n'));
    parse_operation(&document);
}

#[test]
fn variable_types_survive_reparsing() {
    let document = search().to_document().unwrap();
    let op = parse_operation(&document);

    assert_eq!(
        variable_types(&op),
        [
            ("id".to_string(), "Int!".to_string()),
            ("tags".to_string(), "[String!]".to_string()),
            ("shelves".to_string(), "[[String!]]!".to_string()),
            ("since".to_string(), "Date".to_string()),
        ]
    );
}

#[test]
fn remote_names_are_read_as_aliases() {
    let document = search().to_document().unwrap();
    let op = parse_operation(&document);
    let books = top_level_fields(&op).remove(0);
    let fields = subfields(&books);

    assert_eq!(alias_of(&fields[0]).as_deref(), Some("title"));
    assert_eq!(name_of(&fields[0]), "bookTitle");
    assert_eq!(alias_of(&fields[1]), None);
    assert_eq!(name_of(&fields[1]), "author");
}

#[test]
fn mutations_reparse() {
    let mutation = Operation::mutation("AddBook").with_field(
        Field::new("addBook")
            .with_arg("title", "The Lord of the Rings")
            .with_arg("author", "J.R.R. Tolkien")
            .with_arg("series", Value::raw("FANTASY"))
            .with_fields(Book::fields()),
    );

    let document = mutation.to_document().unwrap();
    let op = parse_operation(&document);

    assert!(op.operation_type().unwrap().mutation_token().is_some());
    let add_book = top_level_fields(&op).remove(0);
    let args: Vec<_> = add_book
        .arguments()
        .unwrap()
        .arguments()
        .map(|arg| arg.name().unwrap().text().to_string())
        .collect();
    assert_eq!(args, ["title", "author", "series"]);
}
