#![no_main]
use apollo_parser::{cst, Parser};
use gql_builder::{Value, ValueBuilder};
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};
use log::debug;

fuzz_target!(|data: &[u8]| {
    let _ = env_logger::try_init();

    let mut u = Unstructured::new(data);
    let Ok(string) = String::arbitrary(&mut u) else {
        return;
    };
    let literal = ValueBuilder::new()
        .build(&Value::String(string.clone()))
        .unwrap();
    let document = format!("{{ echo(v: {literal}) }}");

    debug!("INPUT STRING: {string:?}");
    debug!("==== WHOLE DOCUMENT ====");
    debug!("{document}");
    debug!("========================");

    let tree = Parser::new(&document).parse();
    assert_eq!(tree.errors().len(), 0);

    let reparsed = tree
        .document()
        .definitions()
        .find_map(|def| match def {
            cst::Definition::OperationDefinition(op) => op.selection_set(),
            _ => None,
        })
        .and_then(|set| set.selections().next())
        .and_then(|selection| match selection {
            cst::Selection::Field(field) => field.arguments(),
            _ => None,
        })
        .and_then(|args| args.arguments().next())
        .and_then(|arg| arg.value())
        .and_then(|value| match value {
            cst::Value::StringValue(s) => Some(String::from(s)),
            _ => None,
        })
        .unwrap();
    debug!("REPARSED STRING: {reparsed:?}");

    assert_eq!(reparsed, string);
});
