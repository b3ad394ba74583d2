//! Selector parser module.

/// Selector syntax tree.
pub mod ast;
/// An+B microsyntax.
mod nth;
/// Selector parser per [Selectors Level 4 § 18 Grammar](https://www.w3.org/TR/selectors-4/#grammar).
pub mod parser;

pub use ast::{
    AnPlusB, AttributeMatcher, AttributeSelector, Combinator, Component, ComponentKind, Node, Nth,
    PseudoArgument, Raw, Selector, SelectorList,
};
pub use parser::{
    MAX_NESTING_DEPTH, ParseContext, ParseOptions, parse, parse_selector, parse_selector_list,
};
