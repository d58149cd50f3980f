// src/evaluator/arguments.rs — Resolve tool-call arguments into a comparable form

use serde_json::{Map, Value};

use crate::core::types::{Arguments, RawArguments};

/// Resolve raw arguments once, so everything downstream sees `Arguments`.
///
/// A string holding a JSON object becomes that mapping. Any other string is
/// kept opaque, as is any non-mapping value.
pub fn canonicalize(raw: RawArguments) -> Arguments {
    match raw {
        RawArguments::Mapping(map) => Arguments::Mapping(map),
        RawArguments::Encoded(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Arguments::Mapping(map),
            _ => Arguments::Opaque(Value::String(text)),
        },
        RawArguments::Other(value) => Arguments::Opaque(value),
    }
}

/// Order-independent text form of the arguments, used as part of a strict
/// match key. Object keys are sorted at every depth; arrays keep their order.
///
/// A mapping always starts with `{` and an opaque string with `"`, so the two
/// can never collide.
pub fn fingerprint(arguments: &Arguments) -> String {
    let mut out = String::new();
    match arguments {
        Arguments::Mapping(map) => write_object(map, &mut out),
        Arguments::Opaque(value) => write_value(value, &mut out),
    }
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => write_object(map, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut String) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&Value::String(key.clone()).to_string());
        out.push(':');
        write_value(value, out);
    }
    out.push('}');
}
