//! The specificity walk over one selector.
//!
//! Every component is first mapped to a [`Rule`] by [`classify`], then the
//! rule decides the weight. Adding a pseudo-class special case means adding
//! one arm to [`classify_pseudo_class`] and, for a new kind of weight, one
//! arm to [`weigh`].

use serde::Serialize;

use super::reducer::max_specificity_at;
use super::{Part, Specificity};
use crate::error::{Result, SelectorError};
use crate::parser::{ComponentKind, MAX_NESTING_DEPTH, Nth, PseudoArgument, Selector};
use crate::source::slice;

/// The row of the specificity table a component falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// `#id` counts toward A.
    Id,
    /// `.class` counts toward B.
    Class,
    /// `[attr]` counts toward B.
    Attribute,
    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    /// "The specificity of an :is(), :not(), or :has() pseudo-class is
    /// replaced by the specificity of the most specific complex selector in
    /// its selector list argument."
    ///
    /// Also `:matches()`, its former name, and the prefixed `:-webkit-any()`
    /// and `:-moz-any()`.
    MostSpecificArgument,
    /// `:nth-child(An+B)` without `of S` counts as one pseudo-class.
    NthChild,
    /// "the specificity of an :nth-child() or :nth-last-child() selector is
    /// the specificity of the pseudo class itself (counting as one
    /// pseudo-class selector) plus the specificity of the most specific
    /// complex selector in its selector list argument"
    NthChildOf,
    /// "The specificity of a :where() pseudo-class is replaced by zero."
    Where,
    /// [§ 3.6.1](https://www.w3.org/TR/selectors-4/#single-colon-pseudos)
    /// `:before`, `:after`, `:first-line` and `:first-letter` written with
    /// one colon count as pseudo-elements.
    LegacyPseudoElement,
    /// Any other pseudo-class counts toward B.
    PseudoClass,
    /// `::name` counts toward C.
    PseudoElement,
    /// An element name counts toward C.
    Type,
    /// "ignore the universal selector"
    Universal,
}

impl Rule {
    /// The rule's name as it appears in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::MostSpecificArgument => "most-specific-argument",
            Self::NthChild => "nth-child",
            Self::NthChildOf => "nth-child-of",
            Self::Where => "where",
            Self::LegacyPseudoElement => "legacy-pseudo-element",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
            Self::Type => "type",
            Self::Universal => "universal",
        }
    }
}

/// Specificity of one selector plus what each component contributed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Walk {
    /// The total.
    pub specificity: Specificity,
    /// One part per weighted component, in source order.
    pub parts: Vec<Part>,
}

/// Map a component to its rule. `None` for components that carry no
/// weight and are not reported: combinators and the nesting selector.
#[must_use]
pub fn classify(kind: &ComponentKind) -> Option<Rule> {
    match kind {
        ComponentKind::Id(_) => Some(Rule::Id),
        ComponentKind::Class(_) => Some(Rule::Class),
        ComponentKind::Attribute(_) => Some(Rule::Attribute),
        ComponentKind::PseudoClass { name, argument } => {
            Some(classify_pseudo_class(name, argument.as_ref()))
        }
        ComponentKind::PseudoElement { .. } => Some(Rule::PseudoElement),
        ComponentKind::Type { .. } if kind.is_universal() => Some(Rule::Universal),
        ComponentKind::Type { .. } => Some(Rule::Type),
        ComponentKind::Nesting | ComponentKind::Combinator(_) => None,
    }
}

/// Pseudo-class names are ASCII case-insensitive.
fn classify_pseudo_class(name: &str, argument: Option<&PseudoArgument>) -> Rule {
    match name.to_ascii_lowercase().as_str() {
        "not" | "has" | "is" | "matches" | "-webkit-any" | "-moz-any" => Rule::MostSpecificArgument,
        "nth-child" | "nth-last-child" => match argument {
            Some(PseudoArgument::Nth(Nth {
                selector: Some(_), ..
            })) => Rule::NthChildOf,
            _ => Rule::NthChild,
        },
        "where" => Rule::Where,
        "before" | "after" | "first-line" | "first-letter" => Rule::LegacyPseudoElement,
        _ => Rule::PseudoClass,
    }
}

/// The weight a component adds under `rule`.
fn weigh(rule: Rule, kind: &ComponentKind, depth: usize) -> Result<Specificity> {
    Ok(match rule {
        Rule::Id => Specificity::ID,
        Rule::Class | Rule::Attribute | Rule::NthChild | Rule::PseudoClass => Specificity::CLASS,
        Rule::MostSpecificArgument => argument_specificity(kind, depth)?,
        // The +1 always lands in B, whatever S contributes.
        Rule::NthChildOf => Specificity::CLASS + argument_specificity(kind, depth)?,
        Rule::Where | Rule::Universal => Specificity::ZERO,
        Rule::LegacyPseudoElement | Rule::PseudoElement | Rule::Type => Specificity::TYPE,
    })
}

/// Most specific alternative of a pseudo-class argument. A missing argument,
/// as in a bare `:not`, weighs nothing.
fn argument_specificity(kind: &ComponentKind, depth: usize) -> Result<Specificity> {
    match kind {
        ComponentKind::PseudoClass {
            argument: Some(argument),
            ..
        } => max_specificity_at(argument, depth + 1),
        _ => Ok(Specificity::ZERO),
    }
}

/// Calculate the specificity of `selector`.
///
/// When `source` is the text the selector was parsed from (with positions),
/// each [`Part`] is labeled with its component's text.
///
/// # Errors
///
/// Fails only while resolving a pseudo-class argument that was left as raw
/// text and does not parse, or when arguments nest past
/// [`MAX_NESTING_DEPTH`].
pub fn walk(selector: &Selector, source: Option<&str>) -> Result<Walk> {
    walk_at(selector, source, 0)
}

pub(super) fn walk_at(selector: &Selector, source: Option<&str>, depth: usize) -> Result<Walk> {
    if depth > MAX_NESTING_DEPTH {
        return Err(SelectorError::TooDeep {
            depth: MAX_NESTING_DEPTH,
        });
    }

    let mut walked = Walk::default();
    for component in &selector.components {
        let Some(rule) = classify(&component.kind) else {
            continue;
        };
        let specificity = weigh(rule, &component.kind, depth)?;
        walked.specificity += specificity;
        walked.parts.push(Part {
            specificity,
            selector: source
                .zip(component.loc)
                .and_then(|(text, loc)| slice(text, loc))
                .map(str::to_string),
            rule,
        });
    }
    Ok(walked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Raw, SelectorList};

    fn pseudo(name: &str, argument: Option<PseudoArgument>) -> ComponentKind {
        ComponentKind::PseudoClass {
            name: name.to_string(),
            argument,
        }
    }

    #[test]
    fn test_classify_ignores_combinators_and_nesting() {
        use crate::parser::Combinator;
        assert_eq!(classify(&ComponentKind::Combinator(Combinator::Child)), None);
        assert_eq!(classify(&ComponentKind::Nesting), None);
    }

    #[test]
    fn test_classify_universal_forms() {
        for name in ["*", "*|*", "svg|*", "|*"] {
            let kind = ComponentKind::Type {
                name: name.to_string(),
            };
            assert_eq!(classify(&kind), Some(Rule::Universal), "{name}");
        }
        let kind = ComponentKind::Type {
            name: "svg|rect".to_string(),
        };
        assert_eq!(classify(&kind), Some(Rule::Type));
    }

    #[test]
    fn test_classify_pseudo_class_case_insensitive() {
        assert_eq!(classify(&pseudo("WHERE", None)), Some(Rule::Where));
        assert_eq!(classify(&pseudo("First-Letter", None)), Some(Rule::LegacyPseudoElement));
        assert_eq!(classify(&pseudo("-WebKit-Any", None)), Some(Rule::MostSpecificArgument));
        assert_eq!(classify(&pseudo("hover", None)), Some(Rule::PseudoClass));
    }

    #[test]
    fn test_nth_child_without_selector_is_plain() {
        let raw = PseudoArgument::Raw(Raw {
            value: "2n".to_string(),
            loc: None,
        });
        assert_eq!(classify(&pseudo("nth-child", Some(raw))), Some(Rule::NthChild));
        assert_eq!(classify(&pseudo("nth-last-child", None)), Some(Rule::NthChild));
    }

    #[test]
    fn test_bare_not_weighs_nothing() {
        let kind = pseudo("not", None);
        assert_eq!(weigh(Rule::MostSpecificArgument, &kind, 0), Ok(Specificity::ZERO));
    }

    #[test]
    fn test_empty_argument_list_weighs_nothing() {
        let kind = pseudo("is", Some(PseudoArgument::SelectorList(SelectorList::default())));
        assert_eq!(weigh(Rule::MostSpecificArgument, &kind, 0), Ok(Specificity::ZERO));
    }

    #[test]
    fn test_walk_rejects_excessive_depth() {
        let selector = Selector::default();
        assert_eq!(
            walk_at(&selector, None, MAX_NESTING_DEPTH + 1),
            Err(SelectorError::TooDeep {
                depth: MAX_NESTING_DEPTH
            })
        );
    }
}
