//! Minimal selector model for addressing subtree elements.
//!
//! Widgets address their own rendered output, so only the forms they emit
//! are supported: `#id`, `.class`, and bare tag names.

use serde::{Deserialize, Serialize};

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// Bare tag name
    Tag(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorParseError::Empty);
        }
        if let Some(id) = input.strip_prefix('#') {
            if id.is_empty() {
                return Err(SelectorParseError::Empty);
            }
            return Ok(Self::Id(id.to_string()));
        }
        if let Some(class) = input.strip_prefix('.') {
            if class.is_empty() {
                return Err(SelectorParseError::Empty);
            }
            return Ok(Self::Class(class.to_string()));
        }
        if input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Ok(Self::Tag(input.to_string()));
        }
        Err(SelectorParseError::Unsupported)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Error type for selector parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorParseError {
    /// Empty selector string
    Empty,
    /// Combinators and other unsupported syntax
    Unsupported,
}

impl std::fmt::Display for SelectorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::Unsupported => write!(f, "unsupported selector syntax"),
        }
    }
}

impl std::error::Error for SelectorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parse_id() {
        assert_eq!(
            Selector::parse("#tab-0-tab").unwrap(),
            Selector::Id("tab-0-tab".to_string())
        );
    }

    #[test]
    fn test_selector_parse_class() {
        assert_eq!(
            Selector::parse(".x-tabs__button").unwrap(),
            Selector::Class("x-tabs__button".to_string())
        );
    }

    #[test]
    fn test_selector_parse_tag() {
        assert_eq!(
            Selector::parse("button").unwrap(),
            Selector::Tag("button".to_string())
        );
    }

    #[test]
    fn test_selector_parse_empty() {
        assert_eq!(Selector::parse(""), Err(SelectorParseError::Empty));
        assert_eq!(Selector::parse("#"), Err(SelectorParseError::Empty));
        assert_eq!(Selector::parse("."), Err(SelectorParseError::Empty));
    }

    #[test]
    fn test_selector_parse_unsupported() {
        assert_eq!(
            Selector::parse("ul > li"),
            Err(SelectorParseError::Unsupported)
        );
        assert_eq!(
            Selector::parse("[slot^=\"tab-\"]"),
            Err(SelectorParseError::Unsupported)
        );
    }

    #[test]
    fn test_selector_display_round_trip() {
        for s in ["#id", ".class", "button"] {
            let sel = Selector::parse(s).unwrap();
            assert_eq!(sel.to_string(), s);
        }
    }
}
