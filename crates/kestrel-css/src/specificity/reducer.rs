use std::borrow::Cow;

use super::Specificity;
use super::walker::walk_at;
use crate::error::Result;
use crate::parser::{PseudoArgument, SelectorList, parse_selector_list};

/// Turn a pseudo-class argument into a selector list that can be walked.
///
/// A structured list is borrowed as is. Raw text, which the parser keeps for
/// pseudo-classes it does not know take selectors (`:-webkit-any()`), is
/// parsed as a selector list; blank raw text is the empty list. An `Nth`
/// argument yields its `of S` list, or the empty list.
///
/// # Errors
///
/// Returns the parser's error if raw text is not a valid selector list.
pub fn normalize(argument: &PseudoArgument) -> Result<Cow<'_, SelectorList>> {
    match argument {
        PseudoArgument::SelectorList(list) => Ok(Cow::Borrowed(list)),
        PseudoArgument::Raw(raw) if raw.value.trim().is_empty() => {
            Ok(Cow::Owned(SelectorList::default()))
        }
        PseudoArgument::Raw(raw) => parse_selector_list(&raw.value, false).map(Cow::Owned),
        PseudoArgument::Nth(nth) => Ok(nth
            .selector
            .as_ref()
            .map_or_else(|| Cow::Owned(SelectorList::default()), Cow::Borrowed)),
    }
}

/// The specificity of the most specific alternative in `argument`.
///
/// Alternatives are compared lexicographically, not summed or maxed per
/// component: for `:is(.a.b, .c d e f)` the result is (0,2,0), not (0,2,3).
/// An empty list is (0,0,0).
///
/// # Errors
///
/// See [`normalize`].
pub fn max_specificity(argument: &PseudoArgument) -> Result<Specificity> {
    max_specificity_at(argument, 0)
}

pub(super) fn max_specificity_at(argument: &PseudoArgument, depth: usize) -> Result<Specificity> {
    let list = normalize(argument)?;
    let mut max = Specificity::ZERO;
    for selector in &list.selectors {
        let candidate = walk_at(selector, None, depth)?.specificity;
        if candidate > max {
            max = candidate;
        }
    }
    Ok(max)
}
