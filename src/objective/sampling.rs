use log::warn;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Probability of proposing a move at each cell (row-major).
///
/// Built from the per-cell cost surface so that cells contributing the most
/// error are tried most often.
#[derive(Clone, Debug)]
pub struct SamplingDistribution {
    probabilities: Vec<f64>,
    index: Option<WeightedIndex<f64>>,
    uniform_fallback: bool,
}

impl SamplingDistribution {
    /// Equal probability for every cell.
    pub fn uniform(cells: usize) -> Self {
        let p = if cells == 0 { 0.0 } else { 1.0 / cells as f64 };
        Self {
            probabilities: vec![p; cells],
            index: None,
            uniform_fallback: true,
        }
    }

    /// Normalize a non-negative cost surface.
    ///
    /// Falls back to [`SamplingDistribution::uniform`] when the total is zero
    /// or not finite, or when any entry is negative or NaN.
    pub fn from_costs(costs: &[f64]) -> Self {
        let total: f64 = costs.iter().sum();
        let valid = costs.iter().all(|c| *c >= 0.0);
        if !valid || !total.is_finite() || total <= 0.0 {
            if !costs.is_empty() && total != 0.0 {
                warn!("cost surface not normalizable (sum={total}); sampling uniformly");
            }
            return Self::uniform(costs.len());
        }
        let probabilities: Vec<f64> = costs.iter().map(|c| c / total).collect();
        let index = WeightedIndex::new(&probabilities).ok();
        let uniform_fallback = index.is_none();
        if uniform_fallback {
            return Self::uniform(costs.len());
        }
        Self {
            probabilities,
            index,
            uniform_fallback,
        }
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// True when the distribution is the uniform fallback.
    pub fn is_uniform(&self) -> bool {
        self.uniform_fallback
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Draw a cell index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.index {
            Some(index) => index.sample(rng),
            None => rng.gen_range(0..self.probabilities.len().max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn normalizes_costs() {
        let dist = SamplingDistribution::from_costs(&[1.0, 3.0, 0.0, 4.0]);
        assert!(!dist.is_uniform());
        assert!((dist.total() - 1.0).abs() < 1e-12);
        assert_eq!(dist.probabilities()[2], 0.0);
        assert!((dist.probabilities()[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_surface_falls_back_to_uniform() {
        let dist = SamplingDistribution::from_costs(&[0.0; 16]);
        assert!(dist.is_uniform());
        assert!((dist.total() - 1.0).abs() < 1e-12);
        assert!(dist.probabilities().iter().all(|&p| (p - 1.0 / 16.0).abs() < 1e-15));
    }

    #[test]
    fn non_finite_surface_falls_back_to_uniform() {
        let dist = SamplingDistribution::from_costs(&[1.0, f64::INFINITY]);
        assert!(dist.is_uniform());
        let dist = SamplingDistribution::from_costs(&[1.0, f64::NAN]);
        assert!(dist.is_uniform());
    }

    #[test]
    fn never_samples_zero_weight_cells() {
        let dist = SamplingDistribution::from_costs(&[0.0, 2.0, 0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let idx = dist.sample(&mut rng);
            assert!(idx == 1 || idx == 3, "sampled {idx}");
        }
    }
}
