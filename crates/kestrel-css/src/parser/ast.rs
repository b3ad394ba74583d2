//! Selector syntax tree.
//!
//! The tree keeps selectors as flat component sequences in source order,
//! combinators included, because specificity is a property of the whole
//! sequence and parts are reported left to right.

use crate::source::Span;

/// The result of [`parse`](super::parse): a single selector or a list,
/// depending on the requested [`ParseContext`](super::ParseContext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Parsed in selector context.
    Selector(Selector),
    /// Parsed in selector-list context.
    SelectorList(SelectorList),
}

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A comma-separated list of selectors represents the union of all elements
/// selected by each of the individual selectors in the selector list."
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorList {
    /// The alternatives, in source order.
    pub selectors: Vec<Selector>,
    /// Source range, when positions were requested.
    pub loc: Option<Span>,
}

impl SelectorList {
    /// Returns true if the list has no alternatives, as in `:is()`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A complex selector as an ordered run of components. Combinators appear
/// between the compound selectors they join.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Components in source order.
    pub components: Vec<Component>,
    /// Source range, when positions were requested.
    pub loc: Option<Span>,
}

/// One simple selector or combinator with its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// What kind of component this is.
    pub kind: ComponentKind,
    /// Source range, when positions were requested.
    pub loc: Option<Span>,
}

/// The node kinds a selector is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// and [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// `name` is the qualified name as written, namespace prefix included:
    /// `div`, `svg|rect`, `*`, `*|*`, `|p`.
    Type {
        /// The qualified name.
        name: String,
    },

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    Class(String),

    /// [§ 6.1 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    Attribute(AttributeSelector),

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Includes the legacy single-colon pseudo-elements (`:before`), which
    /// are syntactically pseudo-classes.
    PseudoClass {
        /// The name as written, without the colon.
        name: String,
        /// The argument of a functional pseudo-class.
        argument: Option<PseudoArgument>,
    },

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    PseudoElement {
        /// The name as written, without the colons.
        name: String,
        /// Unparsed argument of a functional pseudo-element such as `::part()`.
        argument: Option<Raw>,
    },

    /// [CSS Nesting § 2](https://www.w3.org/TR/css-nesting-1/#nest-selector)
    /// The nesting selector `&`.
    Nesting,

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    Combinator(Combinator),
}

impl ComponentKind {
    /// Returns true for the universal selector in any namespace form.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Type { name } if name.ends_with('*'))
    }

    /// Returns true if this is a combinator.
    #[must_use]
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Self::Combinator(_))
    }
}

/// The argument of a functional pseudo-class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoArgument {
    /// `:is()`, `:not()`, `:where()`, `:has()`, `:matches()`
    SelectorList(SelectorList),
    /// `:nth-child()` and friends
    Nth(Nth),
    /// Anything the parser does not structure, kept as source text.
    Raw(Raw),
}

/// Source text the parser left opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    /// The text between the parentheses, exactly as written.
    pub value: String,
    /// Source range, when positions were requested.
    pub loc: Option<Span>,
}

/// [§ 14.4 Child-indexed pseudo-classes](https://www.w3.org/TR/selectors-4/#child-index)
///
/// "The :nth-child(An+B [of S]?) pseudo-class notation represents elements
/// that are among An+Bth elements from the list composed of their inclusive
/// siblings that match the selector list S."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nth {
    /// The An+B formula.
    pub formula: AnPlusB,
    /// The `of S` selector list, if present.
    pub selector: Option<SelectorList>,
    /// Source range, when positions were requested.
    pub loc: Option<Span>,
}

/// [CSS Syntax § 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
///
/// `odd` is `2n+1`, `even` is `2n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnPlusB {
    /// A, the step.
    pub step: i32,
    /// B, the offset.
    pub offset: i32,
}

/// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    /// The attribute name, namespace prefix included.
    pub name: String,
    /// How the value is matched.
    pub matcher: AttributeMatcher,
    /// The value to match; `None` for presence selectors.
    pub value: Option<String>,
    /// The `i` or `s` case-sensitivity flag.
    pub flag: Option<String>,
}

/// Attribute matching operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMatcher {
    /// `[attr]`
    Exists,
    /// `[attr=value]`
    Equals,
    /// `[attr~=value]`
    Includes,
    /// `[attr|=value]`
    DashMatch,
    /// `[attr^=value]`
    PrefixMatch,
    /// `[attr$=value]`
    SuffixMatch,
    /// `[attr*=value]`
    SubstringMatch,
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: `A B`
    Descendant,
    /// `A > B`
    Child,
    /// `A + B`
    NextSibling,
    /// `A ~ B`
    SubsequentSibling,
    /// [§ 17.1 Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator) `A || B`
    Column,
}
