// src/core/types.rs — Core domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::infra::errors::JudgeError;

/// One tool invocation as it arrives on the wire, in any accepted wrapper shape.
pub type RawToolCall = Value;

/// A dataset row handed to a grader: a JSON object of named fields.
pub type Sample = Map<String, Value>;

/// The `arguments` field of a raw call, before canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArguments {
    /// Already a native mapping.
    Mapping(Map<String, Value>),
    /// A string that may hold a JSON-encoded mapping.
    Encoded(String),
    /// Anything else (number, array, bool). Never parsed.
    Other(Value),
}

impl RawArguments {
    /// Classify an `arguments` field. Missing or `null` is the empty mapping.
    pub fn from_field(field: Option<&Value>) -> Self {
        match field {
            None | Some(Value::Null) => RawArguments::Mapping(Map::new()),
            Some(Value::Object(map)) => RawArguments::Mapping(map.clone()),
            Some(Value::String(text)) => RawArguments::Encoded(text.clone()),
            Some(other) => RawArguments::Other(other.clone()),
        }
    }
}

/// Arguments after canonicalization.
///
/// `Opaque` holds a value that could not be resolved to a mapping; it only
/// ever equals an identical opaque value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arguments {
    Mapping(Map<String, Value>),
    Opaque(Value),
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Mapping(Map::new())
    }
}

/// The unwrapped `{name, arguments}` form every accepted shape normalizes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalToolCall {
    /// `None` when no string name could be resolved. Such calls never match.
    pub name: Option<String>,
    pub arguments: Arguments,
}

/// Multiset counting key for a canonical call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchKey {
    /// Loose mode: the tool name alone.
    Name(String),
    /// Strict mode: the tool name plus an order-independent argument fingerprint.
    NameAndArguments(String, String),
}

/// Which ratio is reported as the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Precision,
    #[default]
    Recall,
}

impl MetricType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Precision => "precision",
            MetricType::Recall => "recall",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = JudgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precision" => Ok(MetricType::Precision),
            "recall" => Ok(MetricType::Recall),
            other => Err(JudgeError::InvalidMetric {
                value: other.to_string(),
            }),
        }
    }
}

/// Grader settings fixed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfiguration {
    pub metric_type: MetricType,
    pub match_arguments: bool,
}

/// How a grader consumes samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraderMode {
    /// Scores one sample at a time.
    #[default]
    Pointwise,
    /// Ranks several candidates against each other.
    Listwise,
}

/// Diagnostic counts reported alongside every score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub metric_type: MetricType,
    pub match_arguments: bool,
    pub precision: f64,
    pub recall: f64,
    pub true_positives: usize,
    pub total_predicted: usize,
    pub total_reference: usize,
}

/// Score envelope returned by a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub name: String,
    pub score: f64,
    pub reason: String,
    pub metadata: MatchMetadata,
}

/// A sample that a grader could not score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraderError {
    pub name: String,
    pub reason: String,
    pub error: String,
}

/// Per-sample outcome collected by the runner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraderOutcome {
    Score(EvaluationResult),
    Error(GraderError),
}

impl GraderOutcome {
    pub fn score(&self) -> Option<f64> {
        match self {
            GraderOutcome::Score(result) => Some(result.score),
            GraderOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraderOutcome::Error(_))
    }
}

/// One construction parameter in a grader's self-description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescription {
    #[serde(rename = "type")]
    pub kind: String,
    pub default: Value,
    pub description: String,
}

/// Static self-description consumed by external grader registries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraderDescription {
    pub description: String,
    pub parameters: std::collections::BTreeMap<String, ParameterDescription>,
    pub score_range: (f64, f64),
}
