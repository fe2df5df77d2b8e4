//! Core predicate trait and logical combinators

/// A pure check over values of type T.
///
/// Every built-in rule of [`Validator`](crate::Validator) is one of these,
/// and [`Validator::ensure`](crate::Validator::ensure) accepts any of them,
/// closures included.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let adult = gt(17).and(le(150));
/// assert!(adult.check(&18));
/// assert!(!adult.check(&17));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let outside = gt(0).and(le(100)).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{gt, le, non_zero};

    #[test]
    fn test_and() {
        let p = gt(0).and(le(10));
        assert!(p.check(&5));
        assert!(p.check(&10));
        assert!(!p.check(&0));
        assert!(!p.check(&11));
    }

    #[test]
    fn test_or() {
        let p = le(0).or(gt(100));
        assert!(p.check(&-5));
        assert!(p.check(&150));
        assert!(!p.check(&50));
    }

    #[test]
    fn test_not() {
        let p = non_zero::<i32>().not();
        assert!(p.check(&0));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));

        let even_and_positive = is_even.and(gt(0));
        assert!(even_and_positive.check(&4));
        assert!(!even_and_positive.check(&-4));
    }
}
