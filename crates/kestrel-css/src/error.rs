//! Errors raised while turning selector text into a tree.
//!
//! Specificity itself cannot fail; every error originates in the parser and
//! is propagated unchanged to the caller.

use thiserror::Error;

/// A selector could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The input contained no selector.
    #[error("selector is empty")]
    Empty,

    /// A token that cannot appear at this point.
    #[error("unexpected '{found}' at byte {offset}")]
    UnexpectedToken {
        /// The token as written.
        found: String,
        /// Byte offset of the token.
        offset: usize,
    },

    /// Input ended in the middle of a simple selector.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A `[` or `(` was never closed.
    #[error("unclosed '{open}' at byte {offset}")]
    UnclosedBlock {
        /// The opening character.
        open: char,
        /// Byte offset of the opening character.
        offset: usize,
    },

    /// A combinator with nothing on one side, as in `> a` or `a >`.
    #[error("combinator at byte {offset} is missing a selector")]
    DanglingCombinator {
        /// Byte offset of the combinator.
        offset: usize,
    },

    /// The argument of `:nth-child()` and friends is not valid An+B.
    #[error("invalid An+B expression '{text}'")]
    InvalidNth {
        /// The argument text.
        text: String,
    },

    /// A comma-separated list where a single selector was expected.
    #[error("expected a single selector, found a list (comma at byte {offset})")]
    ListInSelectorContext {
        /// Byte offset of the comma.
        offset: usize,
    },

    /// Functional pseudo-classes nested deeper than the parser allows.
    #[error("selector nesting exceeds the maximum depth of {depth}")]
    TooDeep {
        /// The depth limit.
        depth: usize,
    },
}

/// Result alias for selector operations.
pub type Result<T> = core::result::Result<T, SelectorError>;

/// Text that is not a specificity triple written as `A,B,C`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid specificity '{text}', expected three comma-separated integers such as 0,1,2")]
pub struct ParseSpecificityError {
    /// The rejected text.
    pub text: String,
}
