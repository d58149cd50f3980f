// src/runner.rs — Concurrent batch grading over a dataset
//
// Every (grader, sample) pair runs as its own future; a semaphore bounds how
// many are in flight. A sample that fails to grade becomes an error outcome
// and never aborts the batch.

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

use crate::core::types::{GraderError, GraderOutcome, Sample};
use crate::evaluator::Grader;
use crate::infra::errors::JudgeError;

/// Outcomes per grader name, in dataset order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RunnerResult {
    results: BTreeMap<String, Vec<GraderOutcome>>,
}

impl RunnerResult {
    pub fn outcomes(&self, grader: &str) -> &[GraderOutcome] {
        self.results.get(grader).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn grader_names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Mean score over the samples the grader scored successfully.
    pub fn mean_score(&self, grader: &str) -> Option<f64> {
        let scores: Vec<f64> = self
            .outcomes(grader)
            .iter()
            .filter_map(GraderOutcome::score)
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    pub fn error_count(&self, grader: &str) -> usize {
        self.outcomes(grader).iter().filter(|o| o.is_error()).count()
    }
}

pub struct GradingRunner {
    graders: Vec<(String, Arc<dyn Grader>)>,
    max_concurrency: usize,
}

impl GradingRunner {
    /// `max_concurrency` is clamped to at least 1.
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            graders: Vec::new(),
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Register a grader under `name`. A later grader with the same name
    /// replaces the earlier one.
    pub fn with_grader(mut self, name: impl Into<String>, grader: Arc<dyn Grader>) -> Self {
        let name = name.into();
        self.graders.retain(|(existing, _)| *existing != name);
        self.graders.push((name, grader));
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Grade every sample with every registered grader.
    pub async fn run(&self, dataset: &[Sample]) -> RunnerResult {
        let started = Instant::now();
        tracing::info!(
            graders = self.graders.len(),
            samples = dataset.len(),
            max_concurrency = self.max_concurrency,
            "Starting grading run"
        );

        let semaphore = Semaphore::new(self.max_concurrency);
        let semaphore = &semaphore;

        let mut jobs = Vec::with_capacity(self.graders.len() * dataset.len());
        for (name, grader) in &self.graders {
            for (index, sample) in dataset.iter().enumerate() {
                jobs.push(async move {
                    // The semaphore is never closed, so acquire cannot fail.
                    let _permit = semaphore.acquire().await.ok();
                    let outcome = grade_one(name, grader.as_ref(), index, sample).await;
                    (name, outcome)
                });
            }
        }

        // join_all keeps submission order, so each grader's outcomes stay in
        // dataset order.
        let mut result = RunnerResult::default();
        for (name, _) in &self.graders {
            result.results.insert(name.clone(), Vec::with_capacity(dataset.len()));
        }
        for (name, outcome) in join_all(jobs).await {
            if let Some(outcomes) = result.results.get_mut(name) {
                outcomes.push(outcome);
            }
        }

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Grading run finished"
        );
        result
    }
}

async fn grade_one(name: &str, grader: &dyn Grader, index: usize, sample: &Sample) -> GraderOutcome {
    match grader.grade(sample).await {
        Ok(result) => GraderOutcome::Score(result),
        Err(e) => {
            tracing::warn!("Error in {} on sample {}: {}", name, index, e);
            GraderOutcome::Error(GraderError {
                name: name.to_string(),
                reason: format!("Error in {name} during evaluation"),
                error: e.to_string(),
            })
        }
    }
}

/// Parse a JSON-Lines dataset. Blank lines are skipped; every other line
/// must be a JSON object.
pub fn parse_jsonl(content: &str) -> Result<Vec<Sample>, JudgeError> {
    let mut samples = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|source| JudgeError::DatasetLine {
            line: i + 1,
            source,
        })?;
        match value {
            Value::Object(sample) => samples.push(sample),
            _ => {
                return Err(JudgeError::InvalidSample {
                    field: format!("line {}", i + 1),
                    message: "expected a JSON object".into(),
                })
            }
        }
    }
    Ok(samples)
}
