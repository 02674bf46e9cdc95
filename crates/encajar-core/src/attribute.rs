//! Declarative attribute parsing helpers.
//!
//! All widget attributes absorb invalid input instead of failing: numeric
//! attributes fall back to zero, presence-attributes only test existence,
//! and enumerated attributes fall back to their default variant.

/// Parse the leading decimal digits of a value, if any.
///
/// `"2"` and `"2abc"` parse to `Some(2)`; `"abc"`, `"-1"` and `""` parse
/// to `None`.
#[must_use]
pub fn parse_leading_digits(value: &str) -> Option<usize> {
    let digits: &str = {
        let end = value
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(value.len(), |(i, _)| i);
        &value[..end]
    };
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Parse a non-negative index attribute; malformed or missing values are
/// treated as `0`.
#[must_use]
pub fn parse_index(value: Option<&str>) -> usize {
    value.and_then(parse_leading_digits).unwrap_or(0)
}

/// Parse a positive whole-second delay. Non-numeric and non-positive
/// values yield `None`.
#[must_use]
pub fn parse_positive_seconds(value: Option<&str>) -> Option<u32> {
    let seconds = value.and_then(parse_leading_digits)?;
    if seconds == 0 {
        return None;
    }
    u32::try_from(seconds).ok()
}

/// Old/new equality short-circuit for attribute change notifications.
#[must_use]
pub fn changed(old: Option<&str>, new: Option<&str>) -> bool {
    old != new
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_leading_digits() {
        assert_eq!(parse_leading_digits("2"), Some(2));
        assert_eq!(parse_leading_digits("2abc"), Some(2));
        assert_eq!(parse_leading_digits("0"), Some(0));
        assert_eq!(parse_leading_digits("abc"), None);
        assert_eq!(parse_leading_digits("-1"), None);
        assert_eq!(parse_leading_digits(""), None);
    }

    #[test]
    fn test_parse_index_defaults_to_zero() {
        assert_eq!(parse_index(None), 0);
        assert_eq!(parse_index(Some("")), 0);
        assert_eq!(parse_index(Some("abc")), 0);
        assert_eq!(parse_index(Some("-3")), 0);
        assert_eq!(parse_index(Some("7")), 7);
    }

    #[test]
    fn test_parse_positive_seconds() {
        assert_eq!(parse_positive_seconds(Some("5")), Some(5));
        assert_eq!(parse_positive_seconds(Some("0")), None);
        assert_eq!(parse_positive_seconds(Some("abc")), None);
        assert_eq!(parse_positive_seconds(None), None);
    }

    #[test]
    fn test_changed_short_circuit() {
        assert!(!changed(Some("2"), Some("2")));
        assert!(!changed(None, None));
        assert!(changed(Some("2"), Some("3")));
        assert!(changed(None, Some("2")));
        assert!(changed(Some("2"), None));
    }

    proptest! {
        #[test]
        fn prop_parse_index_never_panics(value in ".*") {
            let _ = parse_index(Some(&value));
        }

        #[test]
        fn prop_digits_round_trip(n in 0usize..100_000) {
            prop_assert_eq!(parse_leading_digits(&n.to_string()), Some(n));
        }
    }
}
