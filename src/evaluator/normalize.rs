// src/evaluator/normalize.rs — Unwrap raw tool calls into canonical form
//
// Accepted shapes, all resolving to the same call:
//   {"name": .., "arguments": ..}
//   {"function": {"name": .., "arguments": ..}}
//   {"tool_call": {"function": {"name": .., "arguments": ..}}}

use serde_json::{Map, Value};

use super::arguments::canonicalize;
use crate::core::types::{CanonicalToolCall, RawArguments, RawToolCall};

/// Envelope keys, in the order they are probed.
const WRAPPER_KEYS: [&str; 2] = ["tool_call", "function"];

/// Normalize one raw call. Never fails: a call whose name cannot be resolved
/// comes back with `name: None`.
pub fn normalize(raw: &RawToolCall) -> CanonicalToolCall {
    let Some(payload) = unwrap_payload(raw) else {
        tracing::trace!("Tool call is not an object after unwrapping: {}", raw);
        return CanonicalToolCall::default();
    };

    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    if name.is_none() {
        tracing::trace!("Tool call has no resolvable name: {}", raw);
    }

    CanonicalToolCall {
        name,
        arguments: canonicalize(RawArguments::from_field(payload.get("arguments"))),
    }
}

pub fn normalize_all(raw: &[RawToolCall]) -> Vec<CanonicalToolCall> {
    raw.iter().map(normalize).collect()
}

/// Peel wrapper layers until a record without a known envelope key remains.
/// Returns `None` if any layer is not an object.
fn unwrap_payload(raw: &Value) -> Option<&Map<String, Value>> {
    let mut current = raw.as_object()?;
    'peel: loop {
        for key in WRAPPER_KEYS {
            if let Some(inner) = current.get(key) {
                current = inner.as_object()?;
                continue 'peel;
            }
        }
        return Some(current);
    }
}
