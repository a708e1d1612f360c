//! Three-term cost between the current shadow map and the targets.
//!
//! Per cell and direction:
//!
//! - photometric: `(blur(L_d) - T_d)^2`
//! - gradient: `W_G * (|∇blur(L_d)| - |∇blur(T_d)|)^2`
//! - smoothness (once, not per direction): `W_S * |∇H|^2`
//!
//! The per-cell sum over all terms and directions is the cost surface that
//! drives the [`SamplingDistribution`]; its grand total is the scalar objective.
//! Every evaluation recomputes blur and gradients over the whole map. The four
//! directions are filtered in parallel on the rayon pool.

pub mod sampling;
pub mod targets;

pub use sampling::SamplingDistribution;
pub use targets::TargetSet;

use crate::direction::Direction;
use crate::filters::{box_blur, gradient_magnitude};
use crate::heightfield::HeightField;
use crate::shadow::ShadowMap;
use rayon::prelude::*;
use serde::Serialize;

/// Weights of the gradient and smoothness terms.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveWeights {
    pub gradient: f32,
    pub smoothness: f32,
}

/// Scalar totals of the individual terms (weights applied).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveTerms {
    pub photometric: f64,
    pub gradient: f64,
    pub smoothness: f64,
}

impl ObjectiveTerms {
    pub fn total(&self) -> f64 {
        self.photometric + self.gradient + self.smoothness
    }
}

/// Result of one objective evaluation.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Grand total over every cell, term and direction.
    pub total: f64,
    pub terms: ObjectiveTerms,
    pub sampling: SamplingDistribution,
}

#[derive(Clone, Debug)]
pub struct ObjectiveFunction {
    targets: TargetSet,
    weights: ObjectiveWeights,
}

/// Per-cell photometric and gradient errors of one direction.
struct DirectionCost {
    photometric: Vec<f64>,
    gradient: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn new(targets: TargetSet, weights: ObjectiveWeights) -> Self {
        Self { targets, weights }
    }

    /// Score `shadow` (derived from `height`) against the targets.
    pub fn evaluate(&self, shadow: &ShadowMap, height: &HeightField) -> Evaluation {
        let cells = self.targets.grid_size() * self.targets.grid_size();
        debug_assert_eq!(shadow.grid_size(), self.targets.grid_size());
        debug_assert_eq!(height.len(), cells);

        let per_direction: Vec<DirectionCost> = Direction::ALL
            .par_iter()
            .map(|&d| self.direction_cost(shadow, d))
            .collect();

        let w_s = self.weights.smoothness as f64;
        let height_grad = gradient_magnitude(&height.to_image());

        let mut terms = ObjectiveTerms::default();
        let mut surface = vec![0.0f64; cells];
        for cost in &per_direction {
            for (i, cell) in surface.iter_mut().enumerate() {
                *cell += cost.photometric[i] + cost.gradient[i];
            }
            terms.photometric += cost.photometric.iter().sum::<f64>();
            terms.gradient += cost.gradient.iter().sum::<f64>();
        }
        for (cell, &g) in surface.iter_mut().zip(height_grad.data.iter()) {
            let smooth = w_s * (g as f64) * (g as f64);
            *cell += smooth;
            terms.smoothness += smooth;
        }

        Evaluation {
            total: terms.total(),
            terms,
            sampling: SamplingDistribution::from_costs(&surface),
        }
    }

    fn direction_cost(&self, shadow: &ShadowMap, direction: Direction) -> DirectionCost {
        let w_g = self.weights.gradient as f64;
        let blurred = box_blur(shadow.slice(direction));
        let grad = gradient_magnitude(&blurred);
        let target = self.targets.target(direction);
        let filtered = self.targets.filtered(direction);

        let photometric = blurred
            .data
            .iter()
            .zip(target.data.iter())
            .map(|(&b, &t)| squared_error(b, t))
            .collect();
        let gradient = grad
            .data
            .iter()
            .zip(filtered.data.iter())
            .map(|(&g, &f)| w_g * squared_error(g, f))
            .collect();
        DirectionCost {
            photometric,
            gradient,
        }
    }
}

#[inline]
fn squared_error(a: f32, b: f32) -> f64 {
    let d = a as f64 - b as f64;
    d * d
}
