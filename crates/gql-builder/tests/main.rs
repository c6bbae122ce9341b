mod reparse;

use apollo_parser::cst::{self, CstNode};
use apollo_parser::Parser;

/// Parse a produced document, failing the test on any syntax error.
pub(crate) fn parse_operation(document: &str) -> cst::OperationDefinition {
    let tree = Parser::new(document).parse();
    assert_eq!(tree.errors().len(), 0, "syntax errors in:\n{document}");

    let mut definitions = tree.document().definitions();
    match definitions.next() {
        Some(cst::Definition::OperationDefinition(op)) => op,
        _ => panic!("no operation in:\n{document}"),
    }
}

pub(crate) fn top_level_fields(op: &cst::OperationDefinition) -> Vec<cst::Field> {
    op.selection_set()
        .expect("selection set")
        .selections()
        .map(|selection| match selection {
            cst::Selection::Field(field) => field,
            other => panic!("unexpected selection {}", other.source_string()),
        })
        .collect()
}
