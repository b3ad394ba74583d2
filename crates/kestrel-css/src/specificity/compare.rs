use core::cmp::Ordering;
use core::str::FromStr;

use super::{Specificity, calculate};
use crate::error::{ParseSpecificityError, Result};

/// One side of a comparison: selector text, or a specificity that was
/// already calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecificityInput<'a> {
    /// Selector text, calculated before comparing.
    Selector(&'a str),
    /// A known specificity.
    Specificity(Specificity),
}

impl SpecificityInput<'_> {
    /// The specificity this input stands for.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for invalid selector text.
    pub fn resolve(self) -> Result<Specificity> {
        match self {
            Self::Selector(text) => Ok(calculate(text)?.value()),
            Self::Specificity(specificity) => Ok(specificity),
        }
    }
}

impl<'a> From<&'a str> for SpecificityInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Selector(text)
    }
}

impl<'a> From<&'a String> for SpecificityInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Selector(text)
    }
}

impl From<Specificity> for SpecificityInput<'_> {
    fn from(specificity: Specificity) -> Self {
        Self::Specificity(specificity)
    }
}

impl From<[u32; 3]> for SpecificityInput<'_> {
    fn from(triple: [u32; 3]) -> Self {
        Self::Specificity(triple.into())
    }
}

/// Compare two specificities: `-1` if `a` is less specific than `b`, `1` if
/// it is more specific, `0` if they are equal.
///
/// Either side may be selector text or a triple:
///
/// ```
/// use kestrel_css::{Specificity, compare};
///
/// assert_eq!(compare(Specificity(0, 0, 1), Specificity(1, 0, 0)).unwrap(), -1);
/// assert_eq!(compare("#id", ".cls").unwrap(), 1);
/// assert_eq!(compare(Specificity::CLASS, ".cls").unwrap(), 0);
/// ```
///
/// # Errors
///
/// Returns the parser's error if either side is invalid selector text.
pub fn compare<'a, 'b>(
    a: impl Into<SpecificityInput<'a>>,
    b: impl Into<SpecificityInput<'b>>,
) -> Result<i8> {
    let a = a.into().resolve()?;
    let b = b.into().resolve()?;
    Ok(match a.cmp(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Parses `A,B,C`, with optional whitespace around each number.
impl FromStr for Specificity {
    type Err = ParseSpecificityError;

    fn from_str(text: &str) -> core::result::Result<Self, Self::Err> {
        let invalid = || ParseSpecificityError {
            text: text.to_string(),
        };
        let mut numbers = text.split(',').map(|n| n.trim().parse::<u32>());
        match (numbers.next(), numbers.next(), numbers.next(), numbers.next()) {
            (Some(Ok(a)), Some(Ok(b)), Some(Ok(c)), None) => Ok(Self(a, b, c)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("1,0,2".parse(), Ok(Specificity(1, 0, 2)));
        assert_eq!(" 0 , 3 ,0 ".parse(), Ok(Specificity(0, 3, 0)));
    }

    #[test]
    fn test_from_str_rejects_other_shapes() {
        for text in ["", "1,2", "1,2,3,4", "a,b,c", "-1,0,0", "1;2;3"] {
            assert!(text.parse::<Specificity>().is_err(), "{text}");
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let specificity = Specificity(4, 5, 6);
        assert_eq!(specificity.to_string().parse(), Ok(specificity));
    }
}
