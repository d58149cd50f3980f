// src/cli/describe.rs — Print the grader's self-description

use crate::evaluator::ToolCallSequenceGrader;

pub fn show_description() -> anyhow::Result<()> {
    let description = ToolCallSequenceGrader::description();
    println!("{}", serde_json::to_string_pretty(&description)?);
    Ok(())
}
