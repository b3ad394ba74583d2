//! Selector parser per [Selectors Level 4 § 18 Grammar](https://www.w3.org/TR/selectors-4/#grammar).
//!
//! "The grammar of Selectors is defined in terms of CSS syntax." The parser
//! consumes the token stream from [`crate::tokenizer`] and builds the tree in
//! [`super::ast`]. It understands exactly as much of the grammar as
//! specificity needs: the argument of a functional pseudo-class is structured
//! only for the selector-list pseudo-classes and the child-indexed ones; any
//! other argument is kept as [`Raw`] text.

use super::ast::{
    AnPlusB, AttributeMatcher, AttributeSelector, Combinator, Component, ComponentKind, Node, Nth,
    PseudoArgument, Raw, Selector, SelectorList,
};
use crate::error::{Result, SelectorError};
use crate::source::Span;
use crate::tokenizer::{CSSToken, HashType, SpannedToken, tokenize};

/// Functional pseudo-classes nested deeper than this are rejected.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Whether to parse one selector or a comma-separated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseContext {
    /// A single complex selector. A top-level comma is an error.
    #[default]
    Selector,
    /// A comma-separated selector list.
    SelectorList,
}

/// Options for [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// What to parse the text as.
    pub context: ParseContext,
    /// Record source spans on every node.
    pub positions: bool,
}

impl ParseOptions {
    /// Options for a single selector.
    #[must_use]
    pub const fn selector() -> Self {
        Self {
            context: ParseContext::Selector,
            positions: false,
        }
    }

    /// Options for a selector list.
    #[must_use]
    pub const fn selector_list() -> Self {
        Self {
            context: ParseContext::SelectorList,
            positions: false,
        }
    }

    /// Enable or disable source positions.
    #[must_use]
    pub const fn with_positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }
}

/// Parse `text` as a selector or selector list.
///
/// # Errors
///
/// Returns a [`SelectorError`] if `text` is empty or is not a selector the
/// parser understands.
pub fn parse(text: &str, options: ParseOptions) -> Result<Node> {
    match options.context {
        ParseContext::Selector => parse_selector(text, options.positions).map(Node::Selector),
        ParseContext::SelectorList => {
            parse_selector_list(text, options.positions).map(Node::SelectorList)
        }
    }
}

/// Parse `text` as exactly one complex selector.
///
/// # Errors
///
/// Returns [`SelectorError::ListInSelectorContext`] for a comma-separated
/// list, or any other [`SelectorError`] for malformed input.
pub fn parse_selector(text: &str, positions: bool) -> Result<Selector> {
    let options = ParseOptions::selector().with_positions(positions);
    SelectorParser::new(text, options).parse_top_selector()
}

/// Parse `text` as a comma-separated selector list.
///
/// # Errors
///
/// Returns a [`SelectorError`] for empty or malformed input.
pub fn parse_selector_list(text: &str, positions: bool) -> Result<SelectorList> {
    let options = ParseOptions::selector_list().with_positions(positions);
    SelectorParser::new(text, options).parse_top_list()
}

/// Pseudo-classes whose argument is a `<selector-list>`.
fn takes_selector_list(name: &str) -> bool {
    ["not", "is", "where", "has", "matches"]
        .iter()
        .any(|n| name.eq_ignore_ascii_case(n))
}

/// Child-indexed pseudo-classes taking `An+B [of S]?`.
fn takes_nth_of(name: &str) -> bool {
    ["nth-child", "nth-last-child"]
        .iter()
        .any(|n| name.eq_ignore_ascii_case(n))
}

/// Typed child-indexed pseudo-classes taking a bare `An+B`.
fn takes_nth(name: &str) -> bool {
    ["nth-of-type", "nth-last-of-type", "nth-col", "nth-last-col"]
        .iter()
        .any(|n| name.eq_ignore_ascii_case(n))
}

/// Where a selector list ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEnd {
    /// At EOF, top level.
    Eof,
    /// At the `)` closing a functional pseudo-class.
    Paren,
}

/// Recursive-descent parser over a token stream.
struct SelectorParser<'a> {
    text: &'a str,
    tokens: Vec<SpannedToken>,
    position: usize,
    options: ParseOptions,
    depth: usize,
}

impl<'a> SelectorParser<'a> {
    fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            text,
            tokens: tokenize(text),
            position: 0,
            options,
            depth: 0,
        }
    }

    fn parse_top_selector(&mut self) -> Result<Selector> {
        self.skip_whitespace();
        if self.peek().is_eof() {
            return Err(SelectorError::Empty);
        }
        let selector = self.parse_selector(false)?;
        match self.peek() {
            CSSToken::EOF => Ok(selector),
            CSSToken::Comma => Err(SelectorError::ListInSelectorContext {
                offset: self.span().start,
            }),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_top_list(&mut self) -> Result<SelectorList> {
        self.skip_whitespace();
        if self.peek().is_eof() {
            return Err(SelectorError::Empty);
        }
        self.parse_selector_list(ListEnd::Eof, false)
    }

    /// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
    ///
    /// Leaves the closing `)` unconsumed when `end` is [`ListEnd::Paren`].
    fn parse_selector_list(&mut self, end: ListEnd, relative: bool) -> Result<SelectorList> {
        let start = self.span().start;
        let mut selectors = Vec::new();

        self.skip_whitespace();
        // `:is()` with nothing inside is an empty list
        if end == ListEnd::Paren && matches!(self.peek(), CSSToken::RightParen) {
            return Ok(SelectorList {
                selectors,
                loc: self.loc(Span::new(start, start)),
            });
        }

        loop {
            selectors.push(self.parse_selector(relative)?);
            match (self.peek(), end) {
                (CSSToken::Comma, _) => {
                    self.advance();
                    self.skip_whitespace();
                }
                (CSSToken::EOF, ListEnd::Eof) | (CSSToken::RightParen, ListEnd::Paren) => break,
                _ => return Err(self.unexpected()),
            }
        }

        let end_offset = selectors
            .last()
            .and_then(|s| s.loc)
            .map_or(start, |loc| loc.end);
        Ok(SelectorList {
            selectors,
            loc: self.loc(Span::new(start, end_offset)),
        })
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Stops before `,`, `)` or EOF. `relative` permits a leading combinator,
    /// as in `:has(> img)`.
    fn parse_selector(&mut self, relative: bool) -> Result<Selector> {
        let mut components: Vec<Component> = Vec::new();

        loop {
            let span = self.span();
            match self.peek().clone() {
                CSSToken::EOF | CSSToken::Comma | CSSToken::RightParen => break,

                // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
                // Whitespace is only a combinator between two compounds.
                CSSToken::Whitespace => {
                    self.skip_whitespace();
                    let ends_selector = matches!(
                        self.peek(),
                        CSSToken::EOF | CSSToken::Comma | CSSToken::RightParen
                    );
                    let explicit_follows = self.peek_combinator().is_some();
                    if !ends_selector && !explicit_follows && follows_compound(&components) {
                        let kind = ComponentKind::Combinator(Combinator::Descendant);
                        components.push(self.component(kind, span));
                    }
                }

                _ => {
                    if let Some((combinator, len)) = self.peek_combinator() {
                        let leading_ok = components.is_empty() && relative;
                        if !leading_ok && !follows_compound(&components) {
                            return Err(SelectorError::DanglingCombinator { offset: span.start });
                        }
                        let end = self.tokens[self.position + len - 1].span;
                        self.position += len;
                        let kind = ComponentKind::Combinator(combinator);
                        components.push(self.component(kind, span.to(end)));
                        self.skip_whitespace();
                    } else {
                        let component = self.parse_simple_selector()?;
                        // a type selector can only open a compound
                        if matches!(component.kind, ComponentKind::Type { .. })
                            && follows_compound(&components)
                        {
                            let end = self.previous_span();
                            return Err(SelectorError::UnexpectedToken {
                                found: self.text[span.start..end.end].to_string(),
                                offset: span.start,
                            });
                        }
                        components.push(component);
                    }
                }
            }
        }

        match components.last() {
            None => {
                return Err(if self.peek().is_eof() {
                    SelectorError::UnexpectedEof { expected: "a selector" }
                } else {
                    self.unexpected()
                });
            }
            Some(last) if last.kind.is_combinator() => {
                return Err(SelectorError::DanglingCombinator {
                    offset: last.loc.map_or(self.span().start, |loc| loc.start),
                });
            }
            Some(_) => {}
        }

        let first = components.first().and_then(|c| c.loc);
        let last = components.last().and_then(|c| c.loc);
        let loc = first.zip(last).map(|(first, last)| first.to(last));
        Ok(Selector { components, loc })
    }

    /// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
    /// through [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements).
    fn parse_simple_selector(&mut self) -> Result<Component> {
        let start = self.span();
        match self.peek().clone() {
            // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
            CSSToken::Ident(_) | CSSToken::Delim('*' | '|') => self.parse_type_selector(),

            // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
            // "An ID selector is a hash (#, U+0023) immediately followed by the ID value,
            // which must be a CSS identifier."
            CSSToken::Hash {
                value,
                hash_type: HashType::Id,
            } => {
                self.advance();
                Ok(self.component(ComponentKind::Id(value), start))
            }

            // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
            CSSToken::Delim('.') => {
                self.advance();
                let end = self.span();
                match self.peek().clone() {
                    CSSToken::Ident(name) => {
                        self.advance();
                        Ok(self.component(ComponentKind::Class(name), start.to(end)))
                    }
                    CSSToken::EOF => Err(SelectorError::UnexpectedEof { expected: "a class name" }),
                    _ => Err(self.unexpected()),
                }
            }

            CSSToken::LeftBracket => self.parse_attribute_selector(),

            CSSToken::Colon => self.parse_pseudo(),

            CSSToken::Delim('&') => {
                self.advance();
                Ok(self.component(ComponentKind::Nesting, start))
            }

            _ => Err(self.unexpected()),
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors) with an
    /// optional [§ 5.3 namespace prefix](https://www.w3.org/TR/selectors-4/#type-nmsp).
    fn parse_type_selector(&mut self) -> Result<Component> {
        let start = self.span();
        let mut name = String::new();

        // `|name`: no namespace
        if !self.peek().is_delim('|') {
            name.push_str(&self.take_name_part()?);
            // `ns|name`, but not the column combinator `ns || name`
            let is_prefix = self.peek().is_delim('|')
                && matches!(self.peek_at(1), CSSToken::Ident(_) | CSSToken::Delim('*'));
            if !is_prefix {
                return Ok(self.component(ComponentKind::Type { name }, start));
            }
        }

        // the '|'
        self.advance();
        name.push('|');
        let end = self.span();
        match self.peek() {
            CSSToken::Ident(_) | CSSToken::Delim('*') => name.push_str(&self.take_name_part()?),
            CSSToken::EOF => {
                return Err(SelectorError::UnexpectedEof {
                    expected: "an element name",
                });
            }
            _ => return Err(self.unexpected()),
        }
        Ok(self.component(ComponentKind::Type { name }, start.to(end)))
    }

    fn take_name_part(&mut self) -> Result<String> {
        let part = match self.peek() {
            CSSToken::Ident(name) => name.clone(),
            CSSToken::Delim('*') => "*".to_string(),
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(part)
    }

    /// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
    fn parse_attribute_selector(&mut self) -> Result<Component> {
        let open = self.span();
        self.advance();
        self.skip_whitespace();

        let mut name = match self.peek().clone() {
            CSSToken::Ident(name) => {
                self.advance();
                name
            }
            // [§ 6.3 Attribute selectors and namespaces](https://www.w3.org/TR/selectors-4/#attrnmsp)
            CSSToken::Delim('*') if self.peek_at(1).is_delim('|') => {
                self.advance();
                "*".to_string()
            }
            CSSToken::Delim('|') => String::new(),
            CSSToken::EOF => return Err(unclosed('[', open)),
            _ => return Err(self.unexpected()),
        };

        if self.peek().is_delim('|') && !self.peek_at(1).is_delim('=') {
            self.advance();
            name.push('|');
            match self.peek().clone() {
                CSSToken::Ident(local) => {
                    self.advance();
                    name.push_str(&local);
                }
                CSSToken::EOF => return Err(unclosed('[', open)),
                _ => return Err(self.unexpected()),
            }
        }
        self.skip_whitespace();

        let matcher = match self.peek() {
            CSSToken::RightBracket => {
                self.advance();
                let attribute = AttributeSelector {
                    name,
                    matcher: AttributeMatcher::Exists,
                    value: None,
                    flag: None,
                };
                let span = open.to(self.previous_span());
                return Ok(self.component(ComponentKind::Attribute(attribute), span));
            }
            CSSToken::Delim('=') => AttributeMatcher::Equals,
            CSSToken::Delim(op @ ('~' | '|' | '^' | '$' | '*'))
                if self.peek_at(1).is_delim('=') =>
            {
                let matcher = match op {
                    '~' => AttributeMatcher::Includes,
                    '|' => AttributeMatcher::DashMatch,
                    '^' => AttributeMatcher::PrefixMatch,
                    '$' => AttributeMatcher::SuffixMatch,
                    _ => AttributeMatcher::SubstringMatch,
                };
                self.advance();
                matcher
            }
            CSSToken::EOF => return Err(unclosed('[', open)),
            _ => return Err(self.unexpected()),
        };
        // the '='
        self.advance();
        self.skip_whitespace();

        let value = match self.peek().clone() {
            CSSToken::Ident(v) | CSSToken::String(v) => v,
            CSSToken::EOF => return Err(unclosed('[', open)),
            _ => return Err(self.unexpected()),
        };
        self.advance();
        self.skip_whitespace();

        // [§ 6.3 Case-sensitivity](https://www.w3.org/TR/selectors-4/#attribute-case)
        let flag = match self.peek().clone() {
            CSSToken::Ident(f) if f.eq_ignore_ascii_case("i") || f.eq_ignore_ascii_case("s") => {
                self.advance();
                self.skip_whitespace();
                Some(f)
            }
            _ => None,
        };

        match self.peek() {
            CSSToken::RightBracket => self.advance(),
            CSSToken::EOF => return Err(unclosed('[', open)),
            _ => return Err(self.unexpected()),
        }

        let attribute = AttributeSelector {
            name,
            matcher,
            value: Some(value),
            flag,
        };
        Ok(self.component(ComponentKind::Attribute(attribute), open.to(self.previous_span())))
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes) and
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    fn parse_pseudo(&mut self) -> Result<Component> {
        let start = self.span();
        self.advance();

        // "::" introduces a pseudo-element
        let is_element = matches!(self.peek(), CSSToken::Colon);
        if is_element {
            self.advance();
        }

        match self.peek().clone() {
            CSSToken::Ident(name) => {
                self.advance();
                let kind = if is_element {
                    ComponentKind::PseudoElement { name, argument: None }
                } else {
                    ComponentKind::PseudoClass { name, argument: None }
                };
                Ok(self.component(kind, start.to(self.previous_span())))
            }
            CSSToken::Function(name) => {
                let function = self.span();
                self.advance();
                let kind = if is_element {
                    let raw = self.parse_raw_argument(function)?;
                    ComponentKind::PseudoElement {
                        name,
                        argument: Some(raw),
                    }
                } else {
                    let argument = self.parse_pseudo_argument(&name, function)?;
                    ComponentKind::PseudoClass {
                        name,
                        argument: Some(argument),
                    }
                };
                // the ')'
                self.advance();
                Ok(self.component(kind, start.to(self.previous_span())))
            }
            CSSToken::EOF => Err(SelectorError::UnexpectedEof {
                expected: if is_element {
                    "a pseudo-element name"
                } else {
                    "a pseudo-class name"
                },
            }),
            _ => Err(self.unexpected()),
        }
    }

    /// Parse the argument of a functional pseudo-class, leaving the `)`.
    fn parse_pseudo_argument(&mut self, name: &str, function: Span) -> Result<PseudoArgument> {
        if takes_selector_list(name) {
            let relative = name.eq_ignore_ascii_case("has");
            let list = self.nested(function, |p| p.parse_selector_list(ListEnd::Paren, relative))?;
            Ok(PseudoArgument::SelectorList(list))
        } else if takes_nth_of(name) {
            Ok(PseudoArgument::Nth(self.parse_nth(function, true)?))
        } else if takes_nth(name) {
            Ok(PseudoArgument::Nth(self.parse_nth(function, false)?))
        } else {
            Ok(PseudoArgument::Raw(self.parse_raw_argument(function)?))
        }
    }

    /// [§ 14.4 Child-indexed pseudo-classes](https://www.w3.org/TR/selectors-4/#child-index)
    ///
    /// `An+B`, followed by `of <complex-real-selector-list>` when `allow_of`.
    ///
    /// An+B never contains an `of` ident, so the first one starts the list.
    /// The formula is rebuilt from token text, which leaves comments out.
    fn parse_nth(&mut self, function: Span, allow_of: bool) -> Result<Nth> {
        let start = function.end;
        let mut formula_text = String::new();
        let mut spaced = false;
        let mut has_of = false;

        loop {
            match self.peek() {
                CSSToken::RightParen => break,
                CSSToken::EOF => return Err(unclosed('(', function)),
                CSSToken::Ident(word) if allow_of && word.eq_ignore_ascii_case("of") => {
                    has_of = true;
                    self.advance();
                    break;
                }
                CSSToken::Whitespace => {
                    spaced = true;
                    self.advance();
                }
                _ => {
                    let span = self.span();
                    if spaced && !formula_text.is_empty() {
                        formula_text.push(' ');
                    }
                    spaced = false;
                    formula_text.push_str(&self.text[span.start..span.end]);
                    self.advance();
                }
            }
        }

        let formula = AnPlusB::parse(&formula_text)
            .ok_or(SelectorError::InvalidNth { text: formula_text })?;

        let selector = if has_of {
            let list = self.nested(function, |p| p.parse_selector_list(ListEnd::Paren, false))?;
            if list.is_empty() {
                return Err(self.unexpected());
            }
            Some(list)
        } else {
            None
        };

        if !matches!(self.peek(), CSSToken::RightParen) {
            return Err(unclosed('(', function));
        }
        let end = self.span().start;
        Ok(Nth {
            formula,
            selector,
            loc: self.loc(Span::new(start, end)),
        })
    }

    /// Collect everything up to the matching `)` as text, leaving the `)`.
    fn parse_raw_argument(&mut self, function: Span) -> Result<Raw> {
        let start = function.end;
        let mut depth = 0usize;

        loop {
            match self.peek() {
                CSSToken::EOF => return Err(unclosed('(', function)),
                CSSToken::RightParen if depth == 0 => break,
                CSSToken::RightParen => depth -= 1,
                CSSToken::LeftParen | CSSToken::Function(_) => depth += 1,
                _ => {}
            }
            self.advance();
        }

        let end = self.span().start;
        Ok(Raw {
            value: self.text[start..end].to_string(),
            loc: self.loc(Span::new(start, end)),
        })
    }

    /// Run `f` one nesting level deeper and require the closing `)`.
    fn nested<T>(&mut self, function: Span, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SelectorError::TooDeep {
                depth: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        let value = match result {
            Err(SelectorError::UnexpectedEof { .. }) => return Err(unclosed('(', function)),
            result => result?,
        };
        if matches!(self.peek(), CSSToken::RightParen) {
            Ok(value)
        } else {
            Err(unclosed('(', function))
        }
    }

    /// An explicit combinator at the current position and its token count.
    fn peek_combinator(&self) -> Option<(Combinator, usize)> {
        match self.peek() {
            CSSToken::Delim('>') => Some((Combinator::Child, 1)),
            CSSToken::Delim('+') => Some((Combinator::NextSibling, 1)),
            CSSToken::Delim('~') => Some((Combinator::SubsequentSibling, 1)),
            CSSToken::Delim('|') if self.peek_at(1).is_delim('|') => Some((Combinator::Column, 2)),
            _ => None,
        }
    }

    fn component(&self, kind: ComponentKind, span: Span) -> Component {
        Component {
            kind,
            loc: self.loc(span),
        }
    }

    fn loc(&self, span: Span) -> Option<Span> {
        self.options.positions.then_some(span)
    }

    fn unexpected(&self) -> SelectorError {
        match self.peek() {
            CSSToken::EOF => SelectorError::UnexpectedEof {
                expected: "a selector",
            },
            token => SelectorError::UnexpectedToken {
                found: token.to_string(),
                offset: self.span().start,
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn peek(&self) -> &CSSToken {
        self.peek_at(0)
    }

    /// The token `offset` places ahead, or the trailing EOF.
    fn peek_at(&self, offset: usize) -> &CSSToken {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + offset).min(last)].token
    }

    fn span(&self) -> Span {
        self.tokens[self.position].span
    }

    fn previous_span(&self) -> Span {
        self.tokens[self.position.saturating_sub(1)].span
    }
}

/// True when the last component is a simple selector, not a combinator.
fn follows_compound(components: &[Component]) -> bool {
    components.last().is_some_and(|c| !c.kind.is_combinator())
}

fn unclosed(open: char, at: Span) -> SelectorError {
    SelectorError::UnclosedBlock {
        open,
        offset: at.start,
    }
}
