//! Simulated-annealing search over single-cell height changes.
//!
//! One iteration: propose `(cell, delta)` → apply → legality check → (legal)
//! refresh the touched shadow lines and re-score → accept or reject → cool on
//! acceptance. Illegal and rejected moves are reverted in place; the shadow
//! lines are restored from a snapshot instead of being recomputed.
//!
//! The loop is sequential by construction: each proposal reads the field left
//! by the previous one. Parallelism lives inside the objective evaluation.

pub mod outcome;
pub mod schedule;

pub use outcome::{AnnealStats, StepOutcome};
pub use schedule::{acceptance_probability, Acceptance, CoolingSchedule};

use crate::config::{ConfigError, SolverParams};
use crate::heightfield::HeightField;
use crate::legality::LegalityChecker;
use crate::objective::{
    ObjectiveFunction, ObjectiveTerms, ObjectiveWeights, SamplingDistribution, TargetSet,
};
use crate::shadow::{ShadowEngine, ShadowMap};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// A proposed single-cell change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proposal {
    pub row: usize,
    pub col: usize,
    pub delta: i32,
}

/// Annealer state: the field, its shadow map, the current score and the
/// cooling schedule.
pub struct Annealer {
    params: SolverParams,
    engine: ShadowEngine,
    legality: LegalityChecker,
    objective: ObjectiveFunction,
    height: HeightField,
    shadow: ShadowMap,
    objective_value: f64,
    terms: ObjectiveTerms,
    sampling: SamplingDistribution,
    schedule: CoolingSchedule,
    rng: StdRng,
    stats: AnnealStats,
}

impl Annealer {
    /// Validate `params` against the targets and build the initial state from
    /// an all-zero field.
    pub fn new(targets: TargetSet, params: SolverParams) -> Result<Self, ConfigError> {
        let grid_size = targets.grid_size();
        params.validate(grid_size)?;

        let engine = ShadowEngine::new(grid_size, params.radius);
        let legality = LegalityChecker::new(grid_size, params.radius);
        let objective = ObjectiveFunction::new(
            targets,
            ObjectiveWeights {
                gradient: params.w_gradient,
                smoothness: params.w_smooth,
            },
        );
        let height = HeightField::new(grid_size);
        let shadow = engine.compute_full(&height);
        let eval = objective.evaluate(&shadow, &height);
        let schedule = CoolingSchedule::new(params.initial_temperature, params.iterations);
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stats = AnnealStats {
            initial_objective: eval.total,
            final_objective: eval.total,
            final_temperature: schedule.temperature(),
            ..Default::default()
        };

        Ok(Self {
            params,
            engine,
            legality,
            objective,
            height,
            shadow,
            objective_value: eval.total,
            terms: eval.terms,
            sampling: eval.sampling,
            schedule,
            rng,
            stats,
        })
    }

    /// Run the configured iteration budget.
    pub fn run(&mut self) -> &AnnealStats {
        self.run_for(self.params.iterations)
    }

    /// Run exactly `iterations` proposals.
    ///
    /// The cooling step is fixed by `params.iterations`. Running past that
    /// budget can exhaust the temperature; from then on it stays at zero and
    /// every move that does not strictly improve the objective is rejected.
    pub fn run_for(&mut self, iterations: usize) -> &AnnealStats {
        let start = Instant::now();
        info!(
            "annealing {}x{} field: {} iterations, radius {}, objective {:.6}",
            self.height.size(),
            self.height.size(),
            iterations,
            self.params.radius,
            self.objective_value
        );
        let interval = self.params.log_interval;
        for i in 0..iterations {
            self.step();
            if interval > 0 && (i + 1) % interval == 0 {
                debug!(
                    "iter {}/{}: objective={:.6} T={:.6} kept={} illegal={} rejected={}",
                    i + 1,
                    iterations,
                    self.objective_value,
                    self.schedule.temperature(),
                    self.stats.kept(),
                    self.stats.illegal,
                    self.stats.rejected
                );
            }
        }
        info!(
            "annealing done in {:.1} ms: objective {:.6} -> {:.6}, kept {} of {}",
            start.elapsed().as_secs_f64() * 1000.0,
            self.stats.initial_objective,
            self.objective_value,
            self.stats.kept(),
            self.stats.iterations
        );
        &self.stats
    }

    /// One full iteration with a random proposal.
    pub fn step(&mut self) -> StepOutcome {
        let proposal = self.propose();
        self.try_move(proposal)
    }

    /// Draw a cell from the sampling distribution and a nonzero delta.
    pub fn propose(&mut self) -> Proposal {
        let size = self.height.size();
        let idx = self.sampling.sample(&mut self.rng);
        let limit = self.params.delta_limit;
        let delta = loop {
            let d = self.rng.gen_range(-limit..=limit);
            if d != 0 {
                break d;
            }
        };
        Proposal {
            row: idx / size,
            col: idx % size,
            delta,
        }
    }

    /// Apply, check, score and accept or revert one proposal.
    pub fn try_move(&mut self, proposal: Proposal) -> StepOutcome {
        let outcome = self.evaluate_move(proposal);
        self.stats.record(outcome);
        outcome
    }

    fn evaluate_move(&mut self, proposal: Proposal) -> StepOutcome {
        let Proposal { row, col, delta } = proposal;
        self.height.add(row, col, delta);
        if !self.legality.is_legal(&self.height, row, col, delta) {
            self.height.add(row, col, -delta);
            return StepOutcome::Illegal;
        }

        let snapshot = self.shadow.snapshot_lines(row, col);
        self.engine.update_lines(&self.height, &mut self.shadow, row, col);
        let eval = self.objective.evaluate(&self.shadow, &self.height);
        let diff = self.objective_value - eval.total;
        let decision = self.schedule.decide(diff, &mut self.rng);
        self.sampling = eval.sampling;

        if decision.is_accepted() {
            self.objective_value = eval.total;
            self.terms = eval.terms;
            self.schedule.cool();
            self.stats.final_objective = eval.total;
            self.stats.final_temperature = self.schedule.temperature();
        } else {
            self.height.add(row, col, -delta);
            self.shadow.restore_lines(&snapshot);
        }

        match decision {
            Acceptance::Improve => StepOutcome::Improved,
            Acceptance::Metropolis => StepOutcome::Accepted,
            Acceptance::Reject => StepOutcome::Rejected,
        }
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height
    }

    pub fn shadow_map(&self) -> &ShadowMap {
        &self.shadow
    }

    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    pub fn terms(&self) -> ObjectiveTerms {
        self.terms
    }

    pub fn temperature(&self) -> f64 {
        self.schedule.temperature()
    }

    pub fn sampling(&self) -> &SamplingDistribution {
        &self.sampling
    }

    pub fn stats(&self) -> &AnnealStats {
        &self.stats
    }

}
