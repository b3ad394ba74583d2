//! CSS selector tokenizer, parser, and specificity calculation for Kestrel.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The token types selectors are written with: ident, function, hash, string, delim, number
//!   - Comment handling
//!   - Escape sequences
//!   - Byte spans for every token
//!
//! - **Selector Parser** ([Selectors Level 4 § 18 Grammar](https://www.w3.org/TR/selectors-4/#grammar))
//!   - Type, universal, namespace-prefixed, class, ID, and attribute selectors
//!   - Pseudo-classes and pseudo-elements, with structured selector-list and An+B arguments
//!   - Combinators (descendant, child, next-sibling, subsequent-sibling, column)
//!   - Relative selectors inside `:has()` and the nesting selector `&`
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - Per-component breakdown with source text
//!   - `:is()`, `:not()`, `:has()`, `:where()` and `:nth-child(An+B of S)` rules
//!   - Legacy single-colon pseudo-elements
//!   - Comparison and ranking
//!
//! # Not Yet Implemented
//!
//! - Selector matching against a document
//! - Validation of pseudo-class and pseudo-element names

/// Parse errors.
pub mod error;
/// Selector parser per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod parser;
/// Byte spans and source slicing.
pub mod source;
/// Specificity per [Selectors Level 4 § 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

pub use error::{ParseSpecificityError, SelectorError};
pub use parser::{Node, ParseContext, ParseOptions, parse};
pub use source::Span;
pub use specificity::{
    Part, Rule, Specificity, SpecificityInput, SpecificityResult, calculate, compare, rank,
    sort_by_specificity,
};
