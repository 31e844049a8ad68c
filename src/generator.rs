use crate::interval::{Interval, IntervalKind};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Smallest generated bound
pub const BOUND_MIN: i32 = -3;
/// Largest generated bound
pub const BOUND_MAX: i32 = 6;
/// Finite intervals span between one and five units
pub const SPAN_MIN: i32 = 1;
pub const SPAN_MAX: i32 = 5;

/// Produces random practice intervals
#[derive(Debug)]
pub struct IntervalGenerator {
    rng: StdRng,
}

impl IntervalGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of intervals
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of the six shapes uniformly and fill in its bounds
    pub fn generate(&mut self) -> Interval {
        let kind = IntervalKind::ALL[self.rng.gen_range(0..IntervalKind::ALL.len())];
        let interval = self.generate_kind(kind);
        debug!("generated {kind} interval {interval}");
        interval
    }

    pub fn generate_kind(&mut self, kind: IntervalKind) -> Interval {
        match kind {
            IntervalKind::Closed => {
                let (left, right) = self.finite_bounds();
                Interval::Closed { left, right }
            }
            IntervalKind::Open => {
                let (left, right) = self.finite_bounds();
                Interval::Open { left, right }
            }
            IntervalKind::SemiLeft => {
                let (left, right) = self.finite_bounds();
                Interval::SemiLeft { left, right }
            }
            IntervalKind::SemiRight => {
                let (left, right) = self.finite_bounds();
                Interval::SemiRight { left, right }
            }
            IntervalKind::InfRight => Interval::InfRight {
                left: self.bound(),
                left_closed: self.rng.gen_bool(0.5),
            },
            IntervalKind::InfLeft => Interval::InfLeft {
                right: self.bound(),
                right_closed: self.rng.gen_bool(0.5),
            },
        }
    }

    fn bound(&mut self) -> i32 {
        self.rng.gen_range(BOUND_MIN..=BOUND_MAX)
    }

    fn finite_bounds(&mut self) -> (i32, i32) {
        let left = self.bound();
        let span = self.rng.gen_range(SPAN_MIN..=SPAN_MAX);
        (left, left + span)
    }
}

impl Default for IntervalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
