// src/evaluator/matcher.rs — Duplicate-aware matching of predicted vs reference calls
//
// True positives are the multiset intersection size: for every distinct key,
// min(predicted count, reference count), summed. This equals a greedy walk that
// lets each prediction consume one unused matching reference, but does not
// depend on order.

use std::collections::HashMap;

use super::arguments::fingerprint;
use crate::core::types::{CanonicalToolCall, MatchKey};

/// Key a call is counted under. `None` for calls without a name: they are
/// counted in totals by the caller but can never match.
pub fn match_key(call: &CanonicalToolCall, match_arguments: bool) -> Option<MatchKey> {
    let name = call.name.as_ref()?;
    Some(if match_arguments {
        MatchKey::NameAndArguments(name.clone(), fingerprint(&call.arguments))
    } else {
        MatchKey::Name(name.clone())
    })
}

/// Count calls per match key.
pub fn count_keys(calls: &[CanonicalToolCall], match_arguments: bool) -> HashMap<MatchKey, usize> {
    let mut counts = HashMap::new();
    for key in calls.iter().filter_map(|c| match_key(c, match_arguments)) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Number of predicted calls that have a matching, unconsumed reference call.
pub fn true_positives(
    predicted: &[CanonicalToolCall],
    reference: &[CanonicalToolCall],
    match_arguments: bool,
) -> usize {
    if predicted.is_empty() || reference.is_empty() {
        return 0;
    }

    let reference_counts = count_keys(reference, match_arguments);
    count_keys(predicted, match_arguments)
        .iter()
        .map(|(key, &n)| reference_counts.get(key).map_or(0, |&m| n.min(m)))
        .sum()
}
