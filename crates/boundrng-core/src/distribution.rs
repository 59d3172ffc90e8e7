//! Distributions backing each element kind.
//!
//! Integers draw from a discrete uniform over an inclusive range, floats
//! from a continuous uniform, and booleans from a fair coin flip.

use std::fmt;

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};

/// Discrete uniform distribution over `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntUniform<T> {
    low: T,
    high: T,
}

impl<T: PartialOrd> IntUniform<T> {
    /// Creates the distribution, swapping the endpoints if they are reversed.
    #[must_use]
    pub fn new(low: T, high: T) -> Self {
        if high < low {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }
}

impl<T: SampleUniform + PartialOrd + Copy> Distribution<T> for IntUniform<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        rng.random_range(self.low..=self.high)
    }
}

/// Discrete uniform distribution over `[low, high]` for `isize`.
///
/// `rand` has no uniform sampler for `isize`, so draws go through `i64` and
/// convert back. Every supported target has a pointer width of at most 64
/// bits, so both conversions are lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsizeUniform(IntUniform<i64>);

impl IsizeUniform {
    /// Creates the distribution, swapping the endpoints if they are reversed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub fn new(low: isize, high: isize) -> Self {
        Self(IntUniform::new(low as i64, high as i64))
    }
}

impl Distribution<isize> for IsizeUniform {
    #[allow(clippy::cast_possible_truncation)]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> isize {
        self.0.sample(rng) as isize
    }
}

/// Continuous uniform distribution over `[low, high]`.
///
/// Ranges whose width overflows to infinity (such as `[f64::MIN, f64::MAX]`)
/// cannot be sampled by scaling, so they interpolate between the endpoints
/// instead.
#[derive(Debug, Clone)]
pub enum FloatUniform<T>
where
    T: SampleUniform,
    T::Sampler: fmt::Debug + Clone,
{
    /// Finite-width range sampled by `rand`'s uniform sampler.
    Scaled(Uniform<T>),
    /// Infinite-width range sampled as `low * (1 - u) + high * u`.
    Spread {
        /// Lower endpoint.
        low: T,
        /// Upper endpoint.
        high: T,
    },
}

macro_rules! impl_float_uniform {
    ($($ty:ty),* $(,)?) => {$(
        impl FloatUniform<$ty> {
            /// Creates the distribution, swapping the endpoints if they are reversed.
            #[must_use]
            pub fn new(low: $ty, high: $ty) -> Self {
                let (low, high) = if high < low { (high, low) } else { (low, high) };
                if !(high - low).is_finite() {
                    return Self::Spread { low, high };
                }
                match Uniform::new_inclusive(low, high) {
                    Ok(uniform) => Self::Scaled(uniform),
                    Err(_) => Self::Spread { low, high },
                }
            }
        }

        impl Distribution<$ty> for FloatUniform<$ty> {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                match self {
                    Self::Scaled(uniform) => uniform.sample(rng),
                    Self::Spread { low, high } => {
                        let u: $ty = rng.random();
                        (low * (1.0 - u) + high * u).max(*low).min(*high)
                    }
                }
            }
        }
    )*};
}

impl_float_uniform!(f32, f64);

/// Fair coin flip: `true` and `false` with probability one half each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinFlip;

impl Distribution<bool> for CoinFlip {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random_bool(0.5)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use rand::SeedableRng;
    use rand::distr::Distribution;
    use rand::rngs::StdRng;

    use super::{CoinFlip, FloatUniform, IntUniform, IsizeUniform};

    fn engine() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_int_uniform_stays_inclusive() {
        let dist = IntUniform::new(-3_i32, 3);
        let mut rng = engine();
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2_000 {
            let v = dist.sample(&mut rng);
            assert!((-3..=3).contains(&v));
            seen_low |= v == -3;
            seen_high |= v == 3;
        }
        assert!(seen_low && seen_high, "both endpoints should be reachable");
    }

    #[test]
    fn test_int_uniform_swaps_reversed_endpoints() {
        assert_eq!(IntUniform::new(10_u8, 2), IntUniform::new(2_u8, 10));
    }

    #[test]
    fn test_int_uniform_full_range_of_u128() {
        let dist = IntUniform::new(u128::MIN, u128::MAX);
        let mut rng = engine();
        for _ in 0..100 {
            let _ = dist.sample(&mut rng);
        }
    }

    #[test]
    fn test_isize_uniform_stays_inclusive() {
        let dist = IsizeUniform::new(5, -5);
        assert_eq!(dist, IsizeUniform::new(-5, 5));

        let mut rng = engine();
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2_000 {
            let v: isize = dist.sample(&mut rng);
            assert!((-5..=5).contains(&v));
            seen_low |= v == -5;
            seen_high |= v == 5;
        }
        assert!(seen_low && seen_high, "both endpoints should be reachable");
    }

    #[test]
    fn test_isize_uniform_full_range() {
        let dist = IsizeUniform::new(isize::MIN, isize::MAX);
        let mut rng = engine();
        let draws: Vec<isize> = (0..100).map(|_| dist.sample(&mut rng)).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_float_uniform_uses_scaled_sampler_for_finite_width() {
        assert!(matches!(
            FloatUniform::<f64>::new(-1.0, 1.0),
            FloatUniform::Scaled(_)
        ));
    }

    #[test]
    fn test_float_uniform_full_range_is_spread_and_finite() {
        let dist = FloatUniform::<f64>::new(f64::MIN, f64::MAX);
        assert!(matches!(dist, FloatUniform::Spread { .. }));

        let mut rng = engine();
        for _ in 0..1_000 {
            let v = dist.sample(&mut rng);
            assert!(v.is_finite(), "sampled {v} from the full f64 range");
        }
    }

    #[test]
    fn test_float_uniform_degenerate_range_returns_point() {
        let dist = FloatUniform::<f32>::new(2.5, 2.5);
        let mut rng = engine();
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 2.5);
        }
    }

    #[test]
    fn test_coin_flip_produces_both_values() {
        let mut rng = engine();
        let trues = (0..1_000).filter(|_| CoinFlip.sample(&mut rng)).count();
        assert!(trues > 350 && trues < 650, "got {trues} trues out of 1000");
    }
}
