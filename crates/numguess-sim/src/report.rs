//! Score report, schema `score-report-v1`.
//!
//! v1 allows additive fields; renames or removals require v2.

use crate::evaluator::Evaluation;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "score-report-v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    Score,
    Compare,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub schema_version: String,
    pub mode: ReportMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub numguess_version: String,
    pub seed: u64,
    pub evaluations: Vec<Evaluation>,
    /// Strategy with the lowest mean (ties: lowest total). Compare mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<String>,
}

impl ScoreReport {
    pub fn new(mode: ReportMode, seed: u64) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            mode,
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            numguess_version: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            evaluations: Vec::new(),
            best: None,
        }
    }

    pub fn add_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
        if self.mode == ReportMode::Compare {
            self.best = self.pick_best();
        }
    }

    fn pick_best(&self) -> Option<String> {
        self.evaluations
            .iter()
            .min_by_key(|e| (e.mean_attempts, e.total_attempts))
            .map(|e| e.strategy.clone())
    }

    /// Human-readable rendering: the summary sentence for a single score, a
    /// small table for comparisons.
    pub fn to_text(&self) -> String {
        match self.mode {
            ReportMode::Score => self
                .evaluations
                .iter()
                .map(Evaluation::summary_line)
                .collect::<Vec<_>>()
                .join("\n"),
            ReportMode::Compare => {
                let mut out = format!("Strategy comparison (seed {})\n", self.seed);
                for e in &self.evaluations {
                    out.push_str(&format!(
                        "  {:<10} mean {:>3}  total {:>6}  min {:>3}  max {:>3}\n",
                        e.strategy, e.mean_attempts, e.total_attempts, e.min_attempts, e.max_attempts
                    ));
                }
                if let Some(best) = &self.best {
                    out.push_str(&format!("Best: {}", best));
                }
                out.trim_end().to_string()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
