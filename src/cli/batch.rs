// src/cli/batch.rs — Grade a JSON-Lines dataset

use anyhow::Context;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

use crate::evaluator::{ToolCallSequenceGrader, GRADER_NAME};
use crate::runner::{parse_jsonl, GradingRunner};

/// Print one JSON line per sample, then a summary line with the mean score.
pub async fn run_batch(
    dataset: &Path,
    grader: ToolCallSequenceGrader,
    max_concurrency: usize,
) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(dataset)
        .await
        .with_context(|| format!("failed to read {}", dataset.display()))?;
    let samples = parse_jsonl(&content)?;

    let runner = GradingRunner::new(max_concurrency).with_grader(GRADER_NAME, Arc::new(grader));
    let result = runner.run(&samples).await;

    for outcome in result.outcomes(GRADER_NAME) {
        println!("{}", serde_json::to_string(outcome)?);
    }

    let summary = json!({
        "grader": GRADER_NAME,
        "samples": samples.len(),
        "errors": result.error_count(GRADER_NAME),
        "mean_score": result.mean_score(GRADER_NAME),
    });
    println!("{summary}");
    Ok(())
}
