//! # Validation Module
//!
//! Input checks and tokenization for raw order lines.
//!
//! ## Order Line Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order_line  := token ( "," token )*                                    │
//! │  token       := addition | exclusion                                    │
//! │  addition    := <menu item name>          e.g. "Coffee"                 │
//! │  exclusion   := "-" <ingredient name>     e.g. "-milk"                  │
//! │                                                                         │
//! │  Whitespace around every token and after "-" is ignored.                │
//! │  An addition that names no menu item is noise and is skipped later.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use beverage_core::validation::{tokenize, validate_order_line, OrderToken};
//!
//! let line = validate_order_line("Coffee, -milk").unwrap();
//! let tokens: Vec<_> = tokenize(line).collect();
//! assert_eq!(tokens, vec![OrderToken::Addition("Coffee"), OrderToken::Exclusion("milk")]);
//! ```

use crate::error::{OrderError, OrderResult};

/// Prefix marking an exclusion token.
pub const EXCLUSION_PREFIX: char = '-';

/// Separator between tokens.
pub const TOKEN_SEPARATOR: char = ',';

// =============================================================================
// Order Line
// =============================================================================

/// Rejects blank order lines.
///
/// ## Example
/// ```rust
/// use beverage_core::validation::validate_order_line;
///
/// assert!(validate_order_line("Tea").is_ok());
/// assert!(validate_order_line("").is_err());
/// assert!(validate_order_line(" \t ").is_err());
/// ```
pub fn validate_order_line(line: &str) -> OrderResult<&str> {
    if line.trim().is_empty() {
        return Err(OrderError::InvalidOrderRequest);
    }

    Ok(line)
}

// =============================================================================
// Tokens
// =============================================================================

/// One trimmed, comma-delimited segment of an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderToken<'a> {
    /// A bare name; may or may not be a menu item.
    Addition(&'a str),
    /// The ingredient name following `-`, trimmed.
    Exclusion(&'a str),
}

impl<'a> OrderToken<'a> {
    /// Classifies a single segment.
    pub fn parse(segment: &'a str) -> Self {
        let segment = segment.trim();
        match segment.strip_prefix(EXCLUSION_PREFIX) {
            Some(ingredient) => OrderToken::Exclusion(ingredient.trim()),
            None => OrderToken::Addition(segment),
        }
    }
}

/// Splits an order line into tokens lazily, so a caller that stops at the
/// first error never looks at the rest of the line.
///
/// Stray commas produce empty `Addition("")` tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = OrderToken<'_>> {
    line.split(TOKEN_SEPARATOR).map(OrderToken::parse)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order_line() {
        assert_eq!(validate_order_line("Coffee"), Ok("Coffee"));
        assert_eq!(validate_order_line(""), Err(OrderError::InvalidOrderRequest));
        assert_eq!(validate_order_line("   "), Err(OrderError::InvalidOrderRequest));
        assert_eq!(validate_order_line("\n\t"), Err(OrderError::InvalidOrderRequest));
    }

    #[test]
    fn test_parse_trims_tokens() {
        assert_eq!(OrderToken::parse("  Coffee "), OrderToken::Addition("Coffee"));
        assert_eq!(OrderToken::parse(" -milk"), OrderToken::Exclusion("milk"));
        assert_eq!(OrderToken::parse("- milk "), OrderToken::Exclusion("milk"));
    }

    #[test]
    fn test_parse_edge_tokens() {
        assert_eq!(OrderToken::parse(""), OrderToken::Addition(""));
        assert_eq!(OrderToken::parse("-"), OrderToken::Exclusion(""));
        // Only the first dash marks an exclusion
        assert_eq!(OrderToken::parse("--milk"), OrderToken::Exclusion("-milk"));
    }

    #[test]
    fn test_tokenize_mixed_line() {
        let tokens: Vec<_> = tokenize("Coffee, -milk, Tea,,-Sugar").collect();
        assert_eq!(
            tokens,
            vec![
                OrderToken::Addition("Coffee"),
                OrderToken::Exclusion("milk"),
                OrderToken::Addition("Tea"),
                OrderToken::Addition(""),
                OrderToken::Exclusion("Sugar"),
            ]
        );
    }
}
