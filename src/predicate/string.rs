//! String predicates
//!
//! Lengths are counted in code points (`char`s), not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::Predicate;

// Loose on purpose: `<local>@<domain>.<tld>` shaped text, not RFC 5322.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".+@.+\..+").expect("email pattern is valid"));

static ISO8601_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(Z|(\+|-)\d{2}(:?\d{2})?)$")
        .expect("iso8601 pattern is valid")
});

const GENDERS: [&str; 2] = ["male", "female"];

macro_rules! impl_for_string {
    ($ty:ty) => {
        impl Predicate<String> for $ty {
            #[inline]
            fn check(&self, value: &String) -> bool {
                <Self as Predicate<str>>::check(self, value.as_str())
            }
        }
    };
    ($ty:ty, $($gen:tt)*) => {
        impl<$($gen)*> Predicate<String> for $ty
        where
            $ty: Predicate<str>,
        {
            #[inline]
            fn check(&self, value: &String) -> bool {
                <Self as Predicate<str>>::check(self, value.as_str())
            }
        }
    };
}

/// Predicate that checks a string has non-whitespace content.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

impl_for_string!(NotBlank);

/// Create a predicate that fails on empty or whitespace-only strings.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(not_blank().check("hello"));
/// assert!(!not_blank().check("   "));
/// assert!(!not_blank().check(""));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate on the number of code points in a string.
#[derive(Clone, Copy, Debug)]
pub enum CharCount {
    /// Count strictly greater than the bound.
    Above(usize),
    /// Count less than or equal to the bound.
    AtMost(usize),
}

impl Predicate<str> for CharCount {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let count = value.chars().count();
        match *self {
            CharCount::Above(n) => count > n,
            CharCount::AtMost(n) => count <= n,
        }
    }
}

impl_for_string!(CharCount);

/// Create a predicate that passes when a string has more than `n` code points.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(char_count_gt(2).check("héé"));
/// assert!(!char_count_gt(3).check("héé"));
/// ```
pub fn char_count_gt(n: usize) -> CharCount {
    CharCount::Above(n)
}

/// Create a predicate that passes when a string has at most `n` code points.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// // 3 code points, 5 bytes
/// assert!(char_count_le(3).check("héé"));
/// assert!(!char_count_le(2).check("héé"));
/// ```
pub fn char_count_le(n: usize) -> CharCount {
    CharCount::AtMost(n)
}

/// Predicate that checks a string against a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl_for_string!(Matches);

/// Create a predicate from a regular expression.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let slug = matches(r"^[a-z0-9-]+$").unwrap();
/// assert!(slug.check("hello-world"));
/// assert!(!slug.check("Hello World"));
/// ```
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Regex::new(pattern).map(Matches)
}

/// Predicate that checks a string equals one of a set of candidates.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a, S>(pub &'a [S]);

impl<S: AsRef<str> + Sync> Predicate<str> for OneOf<'_, S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().any(|candidate| candidate.as_ref() == value)
    }
}

impl_for_string!(OneOf<'a, S>, 'a, S);

/// Create a predicate that passes when the value equals any candidate.
///
/// Matching is exact and case-sensitive. An empty candidate set never passes.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// let colors = ["red", "blue"];
/// assert!(one_of(&colors).check("red"));
/// assert!(!one_of(&colors).check("Red"));
/// ```
pub fn one_of<S: AsRef<str> + Sync>(candidates: &[S]) -> OneOf<'_, S> {
    OneOf(candidates)
}

/// Create a predicate accepting exactly `"male"` or `"female"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(gender().check("female"));
/// assert!(!gender().check("Male"));
/// ```
pub fn gender() -> OneOf<'static, &'static str> {
    OneOf(&GENDERS)
}

/// Predicate that checks a string equals another one exactly.
#[derive(Clone, Copy, Debug)]
pub struct Equals<'a>(pub &'a str);

impl Predicate<str> for Equals<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value == self.0
    }
}

impl_for_string!(Equals<'a>, 'a);

/// Create a predicate that passes when the value equals `other` exactly.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(equals("s3cret").check("s3cret"));
/// assert!(!equals("s3cret").check("s3cret "));
/// ```
pub fn equals(other: &str) -> Equals<'_> {
    Equals(other)
}

/// Predicate for optional email addresses.
#[derive(Clone, Copy, Default, Debug)]
pub struct Email;

impl Predicate<str> for Email {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty() || EMAIL_REGEX.is_match(value)
    }
}

impl_for_string!(Email);

/// Create a predicate for email-shaped text.
///
/// The empty string passes; combine with [`not_blank`] when the address is required.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(email().check("user@example.com"));
/// assert!(email().check(""));
/// assert!(!email().check("a@b"));
/// ```
pub fn email() -> Email {
    Email
}

/// Predicate for optional ISO 8601 datetimes.
#[derive(Clone, Copy, Default, Debug)]
pub struct Iso8601DateTime;

impl Predicate<str> for Iso8601DateTime {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.is_empty() || ISO8601_DATETIME_REGEX.is_match(value)
    }
}

impl_for_string!(Iso8601DateTime);

/// Create a predicate for `YYYY-MM-DDTHH:MM:SS` followed by `Z` or an offset.
///
/// Only the shape is checked; `2024-13-45T99:00:00Z` passes. The empty string passes.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
///
/// assert!(iso8601_datetime().check("2024-03-01T12:30:00Z"));
/// assert!(iso8601_datetime().check("2024-03-01T12:30:00+05:30"));
/// assert!(!iso8601_datetime().check("2024-03-01 12:30:00"));
/// ```
pub fn iso8601_datetime() -> Iso8601DateTime {
    Iso8601DateTime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_not_blank() {
        assert!(not_blank().check("hello"));
        assert!(not_blank().check("  x  "));
        assert!(!not_blank().check(""));
        assert!(!not_blank().check(" \t\n"));
    }

    #[test]
    fn test_not_blank_string() {
        assert!(not_blank().check(&String::from("hello")));
        assert!(!not_blank().check(&String::from("   ")));
    }

    #[test]
    fn test_char_count_counts_code_points() {
        // 4 code points, 8 bytes
        let word = "日本語!";
        assert!(char_count_le(4).check(word));
        assert!(!char_count_le(3).check(word));
        assert!(char_count_gt(3).check(word));
        assert!(!char_count_gt(4).check(word));
    }

    #[test]
    fn test_matches() {
        let digits = matches(r"^\d+$").unwrap();
        assert!(digits.check("12345"));
        assert!(!digits.check("12a45"));
    }

    #[test]
    fn test_matches_rejects_bad_pattern() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn test_one_of() {
        let colors = ["red", "blue"];
        assert!(one_of(&colors).check("red"));
        assert!(one_of(&colors).check("blue"));
        assert!(!one_of(&colors).check("green"));
        assert!(!one_of(&colors).check(""));
    }

    #[test]
    fn test_one_of_owned_candidates() {
        let sizes = vec![String::from("s"), String::from("m")];
        assert!(one_of(&sizes).check("m"));
        assert!(!one_of(&sizes).check(&String::from("xl")));
    }

    #[test]
    fn test_one_of_empty_set() {
        let none: [&str; 0] = [];
        assert!(!one_of(&none).check("anything"));
    }

    #[test]
    fn test_gender() {
        assert!(gender().check("male"));
        assert!(gender().check("female"));
        assert!(!gender().check("Male"));
        assert!(!gender().check("other"));
        assert!(!gender().check(""));
    }

    #[test]
    fn test_equals() {
        assert!(equals("abc").check("abc"));
        assert!(!equals("abc").check("ABC"));
        assert!(equals("").check(""));
    }

    #[test]
    fn test_email() {
        assert!(email().check("user@example.com"));
        assert!(email().check("first.last+tag@sub.example.co"));
        assert!(email().check(""));
        assert!(!email().check("a@b"));
        assert!(!email().check("plainaddress"));
        assert!(!email().check("@example.com"));
    }

    #[test]
    fn test_iso8601_datetime() {
        let p = iso8601_datetime();
        assert!(p.check(""));
        assert!(p.check("2024-03-01T12:30:00Z"));
        assert!(p.check("2024-03-01T12:30:00+05"));
        assert!(p.check("2024-03-01T12:30:00-0800"));
        assert!(p.check("2024-03-01T12:30:00+05:30"));
        assert!(!p.check("2024-03-01T12:30:00"));
        assert!(!p.check("2024-03-01T12:30:00.123Z"));
        assert!(!p.check("24-03-01T12:30:00Z"));
        assert!(!p.check("2024-03-01T12:30:00Z trailing"));
    }

    #[test]
    fn test_required_email_composition() {
        let required_email = PredicateExt::<str>::and(not_blank(), email());
        assert!(required_email.check("user@example.com"));
        assert!(!required_email.check(""));
    }
}
