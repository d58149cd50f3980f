// src/cli/mod.rs — CLI definition (clap derive)

pub mod batch;
pub mod describe;
pub mod eval;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::evaluator::ToolCallSequenceGrader;
use crate::infra::config::GraderConfig;
use crate::infra::errors::JudgeError;

#[derive(Parser)]
#[command(
    name = "tooljudge",
    about = "Score an agent's tool calls against a reference sequence",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one list of predicted tool calls against a reference list
    Eval {
        /// JSON file holding the predicted tool calls (a list)
        #[arg(long)]
        predicted: PathBuf,
        /// JSON file holding the reference tool calls (a list)
        #[arg(long)]
        reference: PathBuf,
        #[command(flatten)]
        grader: GraderArgs,
    },
    /// Score every sample in a JSON-Lines dataset
    Batch {
        /// Dataset file, one {"tool_calls": [..], "reference_tool_calls": [..]} object per line
        dataset: PathBuf,
        /// Max samples graded at once (defaults to runner.max_concurrency)
        #[arg(long)]
        max_concurrency: Option<usize>,
        #[command(flatten)]
        grader: GraderArgs,
    },
    /// Print the grader's description, parameters and score range
    Describe,
}

/// Grader flags shared by `eval` and `batch`. Flags override the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct GraderArgs {
    /// Metric reported as the score: precision or recall
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Require arguments to match as well as tool names
    #[arg(long)]
    pub match_arguments: bool,
}

impl GraderArgs {
    pub fn build(&self, config: &GraderConfig) -> Result<ToolCallSequenceGrader, JudgeError> {
        let mut merged = config.clone();
        if let Some(ref metric) = self.metric {
            merged.metric_type = metric.clone();
        }
        if self.match_arguments {
            merged.match_arguments = true;
        }
        ToolCallSequenceGrader::from_config(&merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MetricType;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::parse_from([
            "tooljudge",
            "eval",
            "--predicted",
            "p.json",
            "--reference",
            "r.json",
            "--metric",
            "precision",
            "--match-arguments",
        ]);
        match cli.command {
            Commands::Eval {
                predicted, grader, ..
            } => {
                assert_eq!(predicted, PathBuf::from("p.json"));
                assert_eq!(grader.metric.as_deref(), Some("precision"));
                assert!(grader.match_arguments);
            }
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn test_parse_batch_with_global_config() {
        let cli = Cli::parse_from([
            "tooljudge",
            "batch",
            "data.jsonl",
            "--max-concurrency",
            "4",
            "--config",
            "judge.toml",
        ]);
        assert_eq!(cli.config.as_deref(), Some("judge.toml"));
        match cli.command {
            Commands::Batch {
                dataset,
                max_concurrency,
                ..
            } => {
                assert_eq!(dataset, PathBuf::from("data.jsonl"));
                assert_eq!(max_concurrency, Some(4));
            }
            _ => panic!("expected batch"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = GraderConfig::default();
        let args = GraderArgs {
            metric: Some("precision".into()),
            match_arguments: true,
        };
        let grader = args.build(&config).unwrap();
        assert_eq!(grader.metric_type(), MetricType::Precision);
        assert!(grader.match_arguments());
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = GraderConfig {
            metric_type: "precision".into(),
            match_arguments: true,
        };
        let grader = GraderArgs::default().build(&config).unwrap();
        assert_eq!(grader.metric_type(), MetricType::Precision);
        assert!(grader.match_arguments());
    }

    #[test]
    fn test_bad_metric_flag_is_config_error() {
        let args = GraderArgs {
            metric: Some("f1".into()),
            match_arguments: false,
        };
        let err = args.build(&GraderConfig::default()).unwrap_err();
        assert!(err.is_config_error());
    }
}
