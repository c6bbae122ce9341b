#![no_main]
use apollo_parser::Parser;
use gql_builder::{Field, Indent, Operation};
use gql_builder_fuzz::{generate_value, log_document};
use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use log::debug;

fuzz_target!(|data: &[u8]| {
    let _ = env_logger::try_init();

    let mut u = Unstructured::new(data);
    let Ok(value) = generate_value(&mut u) else {
        return;
    };
    let indent = match u.choose_index(4) {
        Ok(0) => Indent::Disabled,
        Ok(1) => Indent::Spaces(0),
        Ok(2) => Indent::Custom("\t".to_string()),
        _ => Indent::Default,
    };

    let op = Operation::query("Fuzz").with_field(
        Field::new("echo")
            .with_remote_name("value")
            .with_arg("v", value)
            .with_field(Field::new("id")),
    );
    let document = op.format(indent).unwrap();
    debug!("{document}");

    let tree = Parser::new(&document).parse();
    if tree.errors().len() > 0 {
        let errors = tree
            .errors()
            .map(|err| err.message())
            .collect::<Vec<&str>>()
            .join("\n");
        log_document(&document, &errors);
        panic!("error parsing generated document");
    }
});
