//! Uniform integers within inclusive bounds.
//!
//! Bounds are truncated toward zero. Reversed bounds are swapped, so the
//! sampled range is always `[min, max]`.

use core_types::Value;
use rand::Rng;

/// Inclusive integer range, always normalized so `low <= high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomRange {
    low: i64,
    high: i64,
}

impl RandomRange {
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// `[0, n]`. `None` for NaN or infinite `n`.
    pub fn up_to(n: f64) -> Option<Self> {
        Some(Self::new(0, truncate(n)?))
    }

    /// `[a, b]`. `None` if either bound is NaN or infinite.
    pub fn between(a: f64, b: f64) -> Option<Self> {
        Some(Self::new(truncate(a)?, truncate(b)?))
    }

    /// Picks the call shape from the argument count: one argument is an upper
    /// bound, two are both bounds. Anything else is not applicable.
    pub fn from_args(args: &[Value]) -> Option<Self> {
        match args {
            [n] => Self::up_to(n.as_number()?),
            [a, b] => Self::between(a.as_number()?, b.as_number()?),
            _ => None,
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, v: i64) -> bool {
        self.low <= v && v <= self.high
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.low..=self.high)
    }
}

fn truncate(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    // Saturates at the i64 limits.
    Some(n.trunc() as i64)
}

/// Random integer for a dynamic argument list, using the thread-local generator.
///
/// `random(&[n])` yields `[0, n]`, `random(&[a, b])` yields `[a, b]`; any other
/// shape, or a non-numeric argument, yields `None`.
pub fn random(args: &[Value]) -> Option<i64> {
    random_with(&mut rand::thread_rng(), args)
}

pub fn random_with<R: Rng + ?Sized>(rng: &mut R, args: &[Value]) -> Option<i64> {
    let Some(range) = RandomRange::from_args(args) else {
        log::trace!(
            target: "tools.random",
            "not applicable: {} argument(s)",
            args.len()
        );
        return None;
    };
    Some(range.sample(rng))
}

pub fn random_up_to(n: f64) -> Option<i64> {
    RandomRange::up_to(n).map(|range| range.sample(&mut rand::thread_rng()))
}

pub fn random_between(a: f64, b: f64) -> Option<i64> {
    RandomRange::between(a, b).map(|range| range.sample(&mut rand::thread_rng()))
}
