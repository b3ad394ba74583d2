//! [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//!
//! "A selector's specificity is calculated for a given element as follows:
//!  - count the number of ID selectors in the selector (= A)
//!  - count the number of class selectors, attributes selectors, and
//!    pseudo-classes in the selector (= B)
//!  - count the number of type selectors and pseudo-elements in the
//!    selector (= C)
//!  - ignore the universal selector"
//!
//! The walk over a selector lives in [`walker`], the reduction of a nested
//! selector list to its most specific alternative in [`reducer`], and the
//! ordering of results in [`compare`].

use core::fmt;
use core::ops::{Add, AddAssign};

use serde::Serialize;

use crate::error::Result;
use crate::parser::parse_selector;

/// Ordering of two specificities, given as triples or selector text.
pub mod compare;
/// Normalization and reduction of nested selector lists.
pub mod reducer;
/// The classification walk over one selector.
pub mod walker;

pub use compare::{SpecificityInput, compare};
pub use reducer::{max_specificity, normalize};
pub use walker::{Rule, Walk, classify, walk};

/// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "Specificities are compared by comparing the three components in order:
/// the specificity with a larger A value is more specific; if the two A
/// values are tied, then the specificity with a larger B value is more
/// specific; if the two B values are also tied, then the specificity with a
/// larger C value is more specific; if all the values are tied, the two
/// specificities are equal."
///
/// The derived `Ord` is exactly that lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// (0,0,0), the specificity of `*` and `:where()`.
    pub const ZERO: Self = Self(0, 0, 0);
    /// (1,0,0), one ID selector.
    pub const ID: Self = Self(1, 0, 0);
    /// (0,1,0), one class, attribute, or pseudo-class.
    pub const CLASS: Self = Self(0, 1, 0);
    /// (0,0,1), one type selector or pseudo-element.
    pub const TYPE: Self = Self(0, 0, 1);

    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The components as `[A, B, C]`.
    #[must_use]
    pub const fn to_array(self) -> [u32; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u32; 3]> for Specificity {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self(a, b, c)
    }
}

impl From<Specificity> for [u32; 3] {
    fn from(specificity: Specificity) -> Self {
        specificity.to_array()
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Comma-joined, as in `1,0,2`.
impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// The weight one component added, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// The increment this component contributed.
    pub specificity: Specificity,
    /// The component's source text, when the selector was parsed with positions.
    pub selector: Option<String>,
    /// Which classification rule produced the increment.
    pub rule: Rule,
}

/// The outcome of [`calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificityResult {
    /// The specificity as `[A, B, C]`.
    pub specificity_array: [u32; 3],
    /// The specificity as `"A,B,C"`.
    pub specificity: String,
    /// Per-component contributions in source order.
    pub parts: Vec<Part>,
    /// The selector text that was measured.
    pub selector: String,
}

impl SpecificityResult {
    /// The specificity as a comparable value.
    #[must_use]
    pub fn value(&self) -> Specificity {
        Specificity::from(self.specificity_array)
    }
}

/// Calculate the specificity of a single selector.
///
/// The selector is parsed with positions so that every [`Part`] carries the
/// text of the component it came from.
///
/// # Errors
///
/// Returns the parser's error if `selector` is not a single valid selector.
/// A comma-separated list is rejected.
///
/// # Example
/// ```
/// use kestrel_css::calculate;
///
/// let result = calculate("ul#nav li.active > a").unwrap();
/// assert_eq!(result.specificity, "1,1,3");
/// ```
pub fn calculate(selector: &str) -> Result<SpecificityResult> {
    let parsed = parse_selector(selector, true)?;
    let walked = walk(&parsed, Some(selector))?;

    Ok(SpecificityResult {
        specificity_array: walked.specificity.to_array(),
        specificity: walked.specificity.to_string(),
        parts: walked.parts,
        selector: selector.to_string(),
    })
}

/// Calculate every selector and order the results from most to least
/// specific. Equal specificities keep their input order.
///
/// # Errors
///
/// Returns the first parse error encountered.
pub fn rank<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Result<Vec<SpecificityResult>> {
    let mut results = selectors
        .into_iter()
        .map(calculate)
        .collect::<Result<Vec<_>>>()?;
    sort_by_specificity(&mut results);
    Ok(results)
}

/// Order results from most to least specific, keeping the input order of
/// equal specificities.
pub fn sort_by_specificity(results: &mut [SpecificityResult]) {
    results.sort_by(|a, b| b.value().cmp(&a.value()));
}
