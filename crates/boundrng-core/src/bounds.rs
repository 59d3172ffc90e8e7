//! Normalized generation bounds.

use std::fmt;

use crate::element::Element;

/// An inclusive `[lower, upper]` pair with `lower <= upper`.
///
/// Construction never fails: reversed pairs are sorted and values outside the
/// element's representable range are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    lower: T,
    upper: T,
}

impl<T: Element> Bounds<T> {
    /// Sorts and clamps `from` and `to` into a valid pair.
    ///
    /// A NaN endpoint is replaced by the matching extreme of the element type
    /// (`MIN` for `from`, `MAX` for `to`) before sorting.
    #[must_use]
    pub fn new(from: T, to: T) -> Self {
        let from = from.sanitize(T::MIN);
        let to = to.sanitize(T::MAX);
        if to < from {
            Self {
                lower: to,
                upper: from,
            }
        } else {
            Self {
                lower: from,
                upper: to,
            }
        }
    }

    /// Like [`Bounds::new`], for inputs that may lie outside `T`'s range.
    #[must_use]
    pub fn saturating(from: T::Wide, to: T::Wide) -> Self {
        Self::new(T::saturate(from), T::saturate(to))
    }

    /// The whole representable range of `T`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            lower: T::MIN,
            upper: T::MAX,
        }
    }

    /// Lower (inclusive) bound.
    #[must_use]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper (inclusive) bound.
    #[must_use]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Whether `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Builds the distribution for these bounds.
    #[must_use]
    pub fn sampler(&self) -> T::Sampler {
        T::sampler(self.lower, self.upper)
    }
}

impl<T: Element> Default for Bounds<T> {
    fn default() -> Self {
        Self::full()
    }
}

impl<T: Element> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Bounds;

    #[test]
    fn test_new_sorts_reversed_pair() {
        let bounds = Bounds::new(150_i32, 50);
        assert_eq!(bounds.lower(), 50);
        assert_eq!(bounds.upper(), 150);
    }

    #[test]
    fn test_saturating_clamps_to_type_range() {
        let bounds = Bounds::<i16>::saturating(-1_000_000, 1_000_000);
        assert_eq!(bounds.lower(), i16::MIN);
        assert_eq!(bounds.upper(), i16::MAX);
    }

    #[test]
    fn test_saturating_sorts_after_clamping() {
        let bounds = Bounds::<u8>::saturating(1_000, -1_000);
        assert_eq!(bounds, Bounds::new(0, 255));
    }

    #[test]
    fn test_infinite_float_bounds_clamp_to_finite_extremes() {
        let bounds = Bounds::new(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(bounds.lower(), f64::MIN);
        assert_eq!(bounds.upper(), f64::MAX);
    }

    #[test]
    fn test_nan_endpoints_fall_back_to_extremes() {
        let bounds = Bounds::new(f32::NAN, 1.0);
        assert_eq!(bounds.lower(), f32::MIN);
        assert_eq!(bounds.upper(), 1.0);

        let bounds = Bounds::new(-1.0, f32::NAN);
        assert_eq!(bounds.lower(), -1.0);
        assert_eq!(bounds.upper(), f32::MAX);
    }

    #[test]
    fn test_full_and_default_cover_type_range() {
        let bounds = Bounds::<u16>::default();
        assert_eq!(bounds, Bounds::full());
        assert_eq!(bounds.lower(), 0);
        assert_eq!(bounds.upper(), u16::MAX);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::new(0_i64, 10);
        assert!(bounds.contains(0));
        assert!(bounds.contains(10));
        assert!(!bounds.contains(11));
        assert!(!bounds.contains(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::new(-400_i32, 400).to_string(), "[-400, 400]");
        assert_eq!(Bounds::<bool>::full().to_string(), "[false, true]");
    }
}
