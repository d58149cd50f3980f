// src/evaluator/mod.rs — Tool-call sequence grader

pub mod arguments;
pub mod matcher;
pub mod normalize;
pub mod scoring;

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::core::types::*;
use crate::infra::config::GraderConfig;
use crate::infra::errors::JudgeError;
use scoring::Scores;

/// Registry name of the tool-call sequence grader.
pub const GRADER_NAME: &str = "tool_call_sequence_simple";

/// A grader that scores one dataset sample.
///
/// Async so that deterministic graders and network-backed ones share a
/// calling convention.
#[async_trait]
pub trait Grader: Send + Sync {
    fn name(&self) -> &str;

    fn mode(&self) -> GraderMode {
        GraderMode::Pointwise
    }

    async fn grade(&self, sample: &Sample) -> Result<EvaluationResult, JudgeError>;
}

/// Scores predicted tool calls against reference calls by precision or recall.
///
/// Pure and stateless after construction; safe to share across tasks.
#[derive(Debug, Clone, Default)]
pub struct ToolCallSequenceGrader {
    config: MetricConfiguration,
}

impl ToolCallSequenceGrader {
    pub fn new(metric_type: MetricType, match_arguments: bool) -> Self {
        Self {
            config: MetricConfiguration {
                metric_type,
                match_arguments,
            },
        }
    }

    /// Build from a metric name. Fails on anything but `precision` or `recall`.
    pub fn parse(metric_type: &str, match_arguments: bool) -> Result<Self, JudgeError> {
        Ok(Self::new(metric_type.parse()?, match_arguments))
    }

    pub fn from_config(config: &GraderConfig) -> Result<Self, JudgeError> {
        Self::parse(&config.metric_type, config.match_arguments)
    }

    pub fn metric_type(&self) -> MetricType {
        self.config.metric_type
    }

    pub fn match_arguments(&self) -> bool {
        self.config.match_arguments
    }

    pub fn config(&self) -> &MetricConfiguration {
        &self.config
    }

    /// Evaluate predicted calls against reference calls.
    ///
    /// Malformed calls lower the score; they never produce an error.
    pub async fn evaluate(
        &self,
        tool_calls: &[RawToolCall],
        reference_tool_calls: &[RawToolCall],
    ) -> EvaluationResult {
        self.score(tool_calls, reference_tool_calls)
    }

    /// Synchronous core of [`evaluate`](Self::evaluate).
    pub fn score(
        &self,
        tool_calls: &[RawToolCall],
        reference_tool_calls: &[RawToolCall],
    ) -> EvaluationResult {
        let predicted = normalize::normalize_all(tool_calls);
        let reference = normalize::normalize_all(reference_tool_calls);

        let true_positives =
            matcher::true_positives(&predicted, &reference, self.config.match_arguments);
        let total_predicted = predicted.len();
        let total_reference = reference.len();

        let scores = Scores::compute(true_positives, total_predicted, total_reference);
        let score = self.config.metric_type.select(&scores);

        tracing::debug!(
            metric = %self.config.metric_type,
            match_arguments = self.config.match_arguments,
            true_positives,
            total_predicted,
            total_reference,
            "Scored tool calls: {score:.3}"
        );

        EvaluationResult {
            name: GRADER_NAME.into(),
            score,
            reason: scoring::explain(
                &self.config,
                &scores,
                true_positives,
                total_predicted,
                total_reference,
            ),
            metadata: MatchMetadata {
                metric_type: self.config.metric_type,
                match_arguments: self.config.match_arguments,
                precision: scores.precision,
                recall: scores.recall,
                true_positives,
                total_predicted,
                total_reference,
            },
        }
    }

    /// Static self-description for grader registries.
    pub fn description() -> GraderDescription {
        let mut parameters = BTreeMap::new();
        parameters.insert(
            "metric_type".to_string(),
            ParameterDescription {
                kind: "string".into(),
                default: json!(MetricType::default().as_str()),
                description: "Metric reported as the score: 'precision' (matched / predicted) \
                              or 'recall' (matched / reference)."
                    .into(),
            },
        );
        parameters.insert(
            "match_arguments".to_string(),
            ParameterDescription {
                kind: "boolean".into(),
                default: json!(false),
                description: "When true, a call matches only if both its name and its \
                              arguments are equal; otherwise names alone are compared."
                    .into(),
            },
        );

        GraderDescription {
            description: "Compares an agent's tool calls with a reference list as multisets \
                          and reports precision or recall. Duplicate calls are matched at \
                          most once each; call order is ignored."
                .into(),
            parameters,
            score_range: (0.0, 1.0),
        }
    }
}

#[async_trait]
impl Grader for ToolCallSequenceGrader {
    fn name(&self) -> &str {
        GRADER_NAME
    }

    async fn grade(&self, sample: &Sample) -> Result<EvaluationResult, JudgeError> {
        let tool_calls = sample_calls(sample, "tool_calls")?;
        let reference_tool_calls = sample_calls(sample, "reference_tool_calls")?;
        Ok(self.evaluate(tool_calls, reference_tool_calls).await)
    }
}

/// Read a list of calls out of a sample. Missing or `null` is an empty list.
fn sample_calls<'a>(sample: &'a Sample, field: &str) -> Result<&'a [Value], JudgeError> {
    match sample.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(JudgeError::InvalidSample {
            field: field.to_string(),
            message: format!("expected a list of tool calls, got {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
