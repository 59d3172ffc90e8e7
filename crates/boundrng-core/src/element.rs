//! Element types a bounded generator can produce.

use std::fmt::{Debug, Display};

use rand::distr::Distribution;

use crate::distribution::{CoinFlip, FloatUniform, IntUniform, IsizeUniform};

mod sealed {
    pub trait Sealed {}
}

/// A value type that a bounded generator can produce.
///
/// Implemented for every primitive integer type, `f32`, `f64` and `bool`.
/// The trait is sealed, so a generator over any other type (`char`,
/// `String`, ...) fails to compile:
///
/// ```compile_fail
/// use boundrng_core::BoundedRng;
///
/// let rng = BoundedRng::<char>::new('a', 'z');
/// ```
pub trait Element:
    sealed::Sealed + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Smallest representable value. For floats, the most negative finite value.
    const MIN: Self;

    /// Largest representable value.
    const MAX: Self;

    /// Wider input type accepted by the saturating bound setters.
    type Wide: Copy + Debug;

    /// Distribution used for this kind of element.
    type Sampler: Distribution<Self> + Clone + Debug + Send + Sync;

    /// Narrows a wide value, saturating at `MIN` and `MAX`.
    fn saturate(wide: Self::Wide) -> Self;

    /// Clamps `self` into `[MIN, MAX]`. Unordered values (NaN) become `fallback`.
    #[must_use]
    fn sanitize(self, fallback: Self) -> Self;

    /// Builds the distribution over `[lower, upper]`.
    fn sampler(lower: Self, upper: Self) -> Self::Sampler;
}

macro_rules! impl_integer {
    ($($ty:ty => $wide:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            type Wide = $wide;
            type Sampler = IntUniform<$ty>;

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn saturate(wide: $wide) -> Self {
                wide.clamp(<$ty>::MIN as $wide, <$ty>::MAX as $wide) as $ty
            }

            fn sanitize(self, _fallback: Self) -> Self {
                self
            }

            fn sampler(lower: Self, upper: Self) -> IntUniform<$ty> {
                IntUniform::new(lower, upper)
            }
        }
    )*};
}

impl_integer!(
    i8 => i128,
    i16 => i128,
    i32 => i128,
    i64 => i128,
    i128 => i128,
    u8 => i128,
    u16 => i128,
    u32 => i128,
    u64 => i128,
    u128 => u128,
    usize => i128,
);

impl sealed::Sealed for isize {}

impl Element for isize {
    const MIN: Self = isize::MIN;
    const MAX: Self = isize::MAX;

    type Wide = i128;
    type Sampler = IsizeUniform;

    #[allow(clippy::cast_possible_truncation)]
    fn saturate(wide: i128) -> Self {
        wide.clamp(isize::MIN as i128, isize::MAX as i128) as isize
    }

    fn sanitize(self, _fallback: Self) -> Self {
        self
    }

    fn sampler(lower: Self, upper: Self) -> IsizeUniform {
        IsizeUniform::new(lower, upper)
    }
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;

            type Wide = f64;
            type Sampler = FloatUniform<$ty>;

            // NaN passes through and is replaced by `sanitize`.
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn saturate(wide: f64) -> Self {
                wide.clamp(f64::from(<$ty>::MIN), f64::from(<$ty>::MAX)) as $ty
            }

            fn sanitize(self, fallback: Self) -> Self {
                if self.is_nan() {
                    fallback
                } else {
                    self.clamp(<$ty>::MIN, <$ty>::MAX)
                }
            }

            fn sampler(lower: Self, upper: Self) -> FloatUniform<$ty> {
                FloatUniform::<$ty>::new(lower, upper)
            }
        }
    )*};
}

impl_float!(f32, f64);

impl sealed::Sealed for bool {}

impl Element for bool {
    const MIN: Self = false;
    const MAX: Self = true;

    type Wide = bool;
    type Sampler = CoinFlip;

    fn saturate(wide: bool) -> Self {
        wide
    }

    fn sanitize(self, _fallback: Self) -> Self {
        self
    }

    /// Bounds are ignored: booleans are always a fair coin flip.
    fn sampler(_lower: Self, _upper: Self) -> CoinFlip {
        CoinFlip
    }
}
