// src/cli/eval.rs — Score a single predicted/reference pair from JSON files

use anyhow::Context;
use std::path::Path;

use crate::core::types::RawToolCall;
use crate::evaluator::ToolCallSequenceGrader;

/// Evaluate two JSON files and print the result as pretty JSON.
pub async fn run_eval(
    predicted: &Path,
    reference: &Path,
    grader: &ToolCallSequenceGrader,
) -> anyhow::Result<()> {
    let tool_calls = read_calls(predicted)?;
    let reference_tool_calls = read_calls(reference)?;

    let result = grader.evaluate(&tool_calls, &reference_tool_calls).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Read a JSON list of raw tool calls.
pub(crate) fn read_calls(path: &Path) -> anyhow::Result<Vec<RawToolCall>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON list of tool calls", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_calls_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "search"}}, {{"function": {{"name": "calculate"}}}}]"#
        )
        .unwrap();
        let calls = read_calls(file.path()).unwrap();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_read_calls_rejects_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "search"}}"#).unwrap();
        let err = read_calls(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a JSON list"));
    }

    #[test]
    fn test_read_calls_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_calls(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
