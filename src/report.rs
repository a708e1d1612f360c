//! Serializable summary of a solver run, written by the CLI as JSON.
use crate::anneal::AnnealStats;
use crate::direction::DIRECTION_COUNT;
use crate::objective::ObjectiveTerms;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub grid_size: usize,
    pub radius: usize,
    pub stats: AnnealStats,
    pub final_terms: ObjectiveTerms,
    /// Lit fraction of the final shadow map, East, West, South, North.
    pub lit_fraction: [f64; DIRECTION_COUNT],
    pub min_height: i32,
    pub max_height: i32,
    pub vertex_count: usize,
    pub face_count: usize,
    pub timings: TimingBreakdown,
}
