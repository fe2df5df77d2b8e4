//! Number predicates
//!
//! One generic set of predicates serves every primitive width, so there is no
//! separate `min` for `i32`, `i64` or `f64`.

use super::combinators::Predicate;
use std::cmp::PartialOrd;
use std::fmt;

/// Primitive numeric types accepted by the numeric rules.
///
/// `Default` supplies the zero value used by the `required_*` rules.
pub trait Number:
    PartialOrd + Default + Copy + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Predicate for not equal.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }
}

/// Create a predicate that checks for inequality.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(ne(5).check(&4));
/// assert!(!ne(5).check(&5));
/// ```
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

/// Create a predicate that passes for anything but the type's default value.
///
/// For numbers that is zero and for `bool` it is `false`, which is why a
/// legitimate `0` or `false` cannot pass a `required_*` rule.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(non_zero::<i32>().check(&-1));
/// assert!(!non_zero::<f64>().check(&0.0));
/// assert!(non_zero::<bool>().check(&true));
/// ```
pub fn non_zero<T>() -> Ne<T>
where
    T: PartialEq + Default + Send + Sync,
{
    Ne(T::default())
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is strictly greater than threshold.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is less than or equal to threshold.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(le(5).check(&5));
/// assert!(!le(5).check(&6));
/// ```
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let p = between(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&101));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ne() {
        let p = ne(5);
        assert!(p.check(&4));
        assert!(p.check(&6));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_non_zero() {
        assert!(non_zero::<i64>().check(&1));
        assert!(non_zero::<i64>().check(&-1));
        assert!(!non_zero::<i64>().check(&0));
        assert!(!non_zero::<u8>().check(&0));
        assert!(!non_zero::<bool>().check(&false));
    }

    #[test]
    fn test_gt_is_strict() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(!gt(5).check(&4));
    }

    #[test]
    fn test_le_includes_bound() {
        assert!(le(5).check(&4));
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_between() {
        let p = between(0, 100);
        assert!(p.check(&0));
        assert!(p.check(&50));
        assert!(p.check(&100));
        assert!(!p.check(&-1));
        assert!(!p.check(&101));
    }

    #[test]
    fn test_with_floats() {
        let p = between(0.0_f32, 1.0_f32);
        assert!(p.check(&0.5));
        assert!(p.check(&1.0));
        assert!(!p.check(&1.1));
        assert!(!gt(0.0_f64).check(&f64::NAN));
    }
}
