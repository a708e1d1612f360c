use serde::Serialize;

/// What happened to one proposed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Failed the legality check and was reverted before scoring.
    Illegal,
    /// Accepted with a strictly lower objective.
    Improved,
    /// Accepted by the Metropolis criterion.
    Accepted,
    /// Scored, then reverted.
    Rejected,
}

impl StepOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, StepOutcome::Improved | StepOutcome::Accepted)
    }
}

/// Counters and objective values of a run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnealStats {
    pub iterations: usize,
    pub illegal: usize,
    pub improved: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub initial_objective: f64,
    pub final_objective: f64,
    pub final_temperature: f64,
}

impl AnnealStats {
    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        self.iterations += 1;
        match outcome {
            StepOutcome::Illegal => self.illegal += 1,
            StepOutcome::Improved => self.improved += 1,
            StepOutcome::Accepted => self.accepted += 1,
            StepOutcome::Rejected => self.rejected += 1,
        }
    }

    /// Moves kept (improving or Metropolis).
    pub fn kept(&self) -> usize {
        self.improved + self.accepted
    }
}
