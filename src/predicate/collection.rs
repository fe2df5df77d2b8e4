//! Collection predicates

use super::combinators::Predicate;

/// Predicate that checks if a collection is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotEmpty;

impl<T> Predicate<Vec<T>> for IsNotEmpty {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        !value.is_empty()
    }
}

impl<T> Predicate<[T]> for IsNotEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a collection is not empty.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(is_not_empty().check(&vec![1, 2, 3]));
/// assert!(!is_not_empty().check(&vec![] as &Vec<i32>));
/// ```
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Predicate that checks collection length equals expected.
#[derive(Clone, Copy, Debug)]
pub struct HasLen {
    expected: usize,
}

impl<T> Predicate<Vec<T>> for HasLen {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.len() == self.expected
    }
}

impl<T> Predicate<[T]> for HasLen {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.len() == self.expected
    }
}

/// Create a predicate that checks if collection has exact length.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(has_len(3).check(&vec![1, 2, 3]));
/// assert!(!has_len(3).check(&vec![1, 2]));
/// ```
pub fn has_len(expected: usize) -> HasLen {
    HasLen { expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_empty() {
        assert!(is_not_empty().check(&vec![1]));
        assert!(!is_not_empty().check(&vec![] as &Vec<i32>));
    }

    #[test]
    fn test_is_not_empty_slice() {
        let empty: &[u8] = &[];
        let bytes: &[u8] = b"abc";
        assert!(!is_not_empty().check(empty));
        assert!(is_not_empty().check(bytes));
    }

    #[test]
    fn test_has_len_is_exact() {
        assert!(has_len(3).check(&vec![1, 2, 3]));
        assert!(!has_len(3).check(&vec![1, 2]));
        assert!(!has_len(3).check(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_has_len_zero() {
        let empty: &[&str] = &[];
        assert!(has_len(0).check(empty));
    }
}
