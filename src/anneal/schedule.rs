use rand::Rng;

/// Three-way decision for a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acceptance {
    /// The objective strictly decreased.
    Improve,
    /// No improvement, accepted by the Metropolis draw.
    Metropolis,
    Reject,
}

impl Acceptance {
    #[inline]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Acceptance::Reject)
    }
}

/// Metropolis probability for a move with `diff = old - new` objective.
///
/// 1 for improvements, `exp(diff / T)` otherwise, and 0 once the temperature
/// has reached zero.
pub fn acceptance_probability(diff: f64, temperature: f64) -> f64 {
    if diff > 0.0 {
        1.0
    } else if temperature > 0.0 {
        (diff / temperature).exp().min(1.0)
    } else {
        0.0
    }
}

/// Linear cooling applied on accepted moves only.
///
/// The step is `initial / iterations`, so the temperature reaches zero only if
/// every iteration of the budget is accepted. It never goes below zero: once
/// there, accepted moves leave it at zero and only strict improvements pass.
#[derive(Clone, Copy, Debug)]
pub struct CoolingSchedule {
    temperature: f64,
    step: f64,
}

impl CoolingSchedule {
    pub fn new(initial: f64, iterations: usize) -> Self {
        let step = if iterations == 0 {
            0.0
        } else {
            initial / iterations as f64
        };
        Self {
            temperature: initial,
            step,
        }
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Lower the temperature by one step, never below zero.
    pub fn cool(&mut self) {
        self.temperature = (self.temperature - self.step).max(0.0);
    }

    /// Decide on a move whose objective changed by `diff = old - new`.
    pub fn decide<R: Rng + ?Sized>(&self, diff: f64, rng: &mut R) -> Acceptance {
        if diff > 0.0 {
            return Acceptance::Improve;
        }
        let p = acceptance_probability(diff, self.temperature);
        if rng.gen::<f64>() < p {
            Acceptance::Metropolis
        } else {
            Acceptance::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn probability_is_bounded_and_vanishes_when_cold() {
        for diff in [0.0, -0.01, -1.0, -50.0] {
            for t in [10.0, 1.0, 0.1, 1e-3] {
                let p = acceptance_probability(diff, t);
                assert!(p > 0.0 || diff / t < -700.0, "diff={diff} t={t}");
                assert!(p <= 1.0);
                assert!((p - (diff / t).exp()).abs() < 1e-12);
            }
        }
        assert_eq!(acceptance_probability(-1.0, 1e-9), 0.0);
        assert_eq!(acceptance_probability(-1.0, 0.0), 0.0);
        assert_eq!(acceptance_probability(0.5, 0.0), 1.0);
        let warm = acceptance_probability(-1.0, 2.0);
        let cold = acceptance_probability(-1.0, 0.5);
        assert!(cold < warm);
    }

    #[test]
    fn cooling_step_divides_initial_temperature() {
        let mut schedule = CoolingSchedule::new(1.0, 4);
        assert!((schedule.step() - 0.25).abs() < 1e-12);
        for _ in 0..6 {
            schedule.cool();
        }
        assert_eq!(schedule.temperature(), 0.0);
        let idle = CoolingSchedule::new(1.0, 0);
        assert_eq!(idle.step(), 0.0);
    }

    #[test]
    fn decide_separates_the_three_outcomes() {
        let mut rng = StdRng::seed_from_u64(11);
        let schedule = CoolingSchedule::new(1.0, 100);
        assert_eq!(schedule.decide(0.1, &mut rng), Acceptance::Improve);
        // exp(0) = 1: equal objective is always accepted while warm.
        assert_eq!(schedule.decide(0.0, &mut rng), Acceptance::Metropolis);
        // exp(-1000) underflows to zero.
        assert_eq!(schedule.decide(-1000.0, &mut rng), Acceptance::Reject);
        assert!(!Acceptance::Reject.is_accepted());
        assert!(Acceptance::Metropolis.is_accepted());
    }
}
