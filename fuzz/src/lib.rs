use gql_builder::Value;
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};

const MAX_DEPTH: usize = 4;

/// Generate an arbitrary literal value. Floats are kept finite and variables
/// are left out, as neither has a literal form that re-parses on its own.
pub fn generate_value(u: &mut Unstructured<'_>) -> Result<Value> {
    generate_value_at(u, 0)
}

fn generate_value_at(u: &mut Unstructured<'_>, depth: usize) -> Result<Value> {
    let kinds = if depth < MAX_DEPTH { 6 } else { 5 };
    let value = match u.choose_index(kinds)? {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(u)?),
        2 => Value::Int(i64::arbitrary(u)?),
        3 => {
            let fl = f64::arbitrary(u)?;
            Value::Float(if fl.is_finite() { fl } else { 0.0 })
        }
        4 => Value::String(String::arbitrary(u)?),
        _ => {
            let len = u.int_in_range(0..=4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(generate_value_at(u, depth + 1)?);
            }
            Value::List(items)
        }
    };
    Ok(value)
}

/// Log the document that failed and save it for reproduction.
pub fn log_document(document: &str, errors: &str) {
    log::debug!("writing test case to test_case.graphql ...");
    if let Err(err) = std::fs::write("test_case.graphql", document)
        .and_then(|()| std::fs::write("test_case_error.log", errors))
    {
        log::debug!("could not write test case: {err}");
    }
}
