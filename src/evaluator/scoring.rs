// src/evaluator/scoring.rs — Precision, recall, and the reported score

use crate::core::types::{MetricConfiguration, MetricType};

/// Precision and recall for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub precision: f64,
    pub recall: f64,
}

impl Scores {
    /// A ratio with a zero denominator is vacuously 1.0.
    pub fn compute(true_positives: usize, total_predicted: usize, total_reference: usize) -> Self {
        Self {
            precision: ratio(true_positives, total_predicted),
            recall: ratio(true_positives, total_reference),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl MetricType {
    /// Pick the configured metric out of both scores.
    pub fn select(self, scores: &Scores) -> f64 {
        match self {
            MetricType::Precision => scores.precision,
            MetricType::Recall => scores.recall,
        }
    }
}

/// One-line explanation of a score, e.g.
/// `recall 0.50: 1 of 2 reference tool calls matched (loose matching)`.
pub fn explain(
    config: &MetricConfiguration,
    scores: &Scores,
    true_positives: usize,
    total_predicted: usize,
    total_reference: usize,
) -> String {
    let (side, total) = match config.metric_type {
        MetricType::Precision => ("predicted", total_predicted),
        MetricType::Recall => ("reference", total_reference),
    };
    let mode = if config.match_arguments {
        "strict"
    } else {
        "loose"
    };
    let score = config.metric_type.select(scores);

    if total == 0 {
        format!("{} {score:.2}: no {side} tool calls to score", config.metric_type)
    } else {
        format!(
            "{} {score:.2}: {true_positives} of {total} {side} tool calls matched ({mode} matching)",
            config.metric_type
        )
    }
}
