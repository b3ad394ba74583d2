//! [CSS Syntax § 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)

use super::ast::AnPlusB;

impl AnPlusB {
    /// Parse an An+B expression such as `2n+1`, `-n + 3`, `odd` or `5`.
    ///
    /// Whitespace is permitted only around the binary sign, as in `2n + 1`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();

        // "odd" is 2n+1, "even" is 2n
        match lower.as_str() {
            "odd" => return Some(Self { step: 2, offset: 1 }),
            "even" => return Some(Self { step: 2, offset: 0 }),
            _ => {}
        }

        let Some(n_at) = lower.find('n') else {
            // Just B
            return parse_signed(&lower).map(|offset| Self { step: 0, offset });
        };

        let (a_part, rest) = lower.split_at(n_at);
        let step = match a_part {
            "" | "+" => 1,
            "-" => -1,
            digits => parse_signed(digits)?,
        };

        // Skip the 'n'
        let rest = &rest[1..];
        if rest.trim().is_empty() {
            return Some(Self { step, offset: 0 });
        }

        // The sign may be separated from the n by whitespace, but the
        // A part itself may not contain whitespace.
        if a_part.chars().any(char::is_whitespace) {
            return None;
        }
        let rest = rest.trim_start();
        let (negative, digits) = if let Some(d) = rest.strip_prefix('+') {
            (false, d.trim_start())
        } else if let Some(d) = rest.strip_prefix('-') {
            (true, d.trim_start())
        } else {
            return None;
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude = saturating_digits(digits)?;
        Some(Self {
            step,
            offset: if negative { -magnitude } else { magnitude },
        })
    }
}

/// An optionally signed integer with no inner whitespace, clamped to `i32`.
fn parse_signed(text: &str) -> Option<i32> {
    match text.strip_prefix('-') {
        Some(digits) => saturating_digits(digits).map(|value| -value),
        None => saturating_digits(text.strip_prefix('+').unwrap_or(text)),
    }
}

/// ASCII digits as a non-negative `i32`, stopping at `i32::MAX`.
fn saturating_digits(digits: &str) -> Option<i32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.bytes().fold(0_i32, |value, digit| {
        value
            .saturating_mul(10)
            .saturating_add(i32::from(digit - b'0'))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anb(step: i32, offset: i32) -> Option<AnPlusB> {
        Some(AnPlusB { step, offset })
    }

    #[test]
    fn test_keywords() {
        assert_eq!(AnPlusB::parse("odd"), anb(2, 1));
        assert_eq!(AnPlusB::parse("EVEN"), anb(2, 0));
    }

    #[test]
    fn test_integer_only() {
        assert_eq!(AnPlusB::parse("5"), anb(0, 5));
        assert_eq!(AnPlusB::parse(" -3 "), anb(0, -3));
        assert_eq!(AnPlusB::parse("+7"), anb(0, 7));
    }

    #[test]
    fn test_step_forms() {
        assert_eq!(AnPlusB::parse("n"), anb(1, 0));
        assert_eq!(AnPlusB::parse("-n+3"), anb(-1, 3));
        assert_eq!(AnPlusB::parse("+n"), anb(1, 0));
        assert_eq!(AnPlusB::parse("2n"), anb(2, 0));
        assert_eq!(AnPlusB::parse("2n+1"), anb(2, 1));
        assert_eq!(AnPlusB::parse("2N-1"), anb(2, -1));
        assert_eq!(AnPlusB::parse("3n + 2"), anb(3, 2));
        assert_eq!(AnPlusB::parse("-2n- 4"), anb(-2, -4));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(AnPlusB::parse(""), None);
        assert_eq!(AnPlusB::parse("foo"), None);
        assert_eq!(AnPlusB::parse("2 n"), None);
        assert_eq!(AnPlusB::parse("2n+"), None);
        assert_eq!(AnPlusB::parse("2n 1"), None);
        assert_eq!(AnPlusB::parse("1.5n"), None);
        assert_eq!(AnPlusB::parse("--3"), None);
    }

    #[test]
    fn test_large_values_saturate() {
        assert_eq!(AnPlusB::parse("99999999999"), anb(0, i32::MAX));
        assert_eq!(AnPlusB::parse("-99999999999"), anb(0, -i32::MAX));
        assert_eq!(AnPlusB::parse("2147483648n"), anb(i32::MAX, 0));
        assert_eq!(
            AnPlusB::parse("-2147483648n+2147483648"),
            anb(-i32::MAX, i32::MAX)
        );
    }
}
