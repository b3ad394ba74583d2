//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the token kinds that can appear in a selector are given dedicated
//! handling by the selector parser, but the full token set is produced so
//! that unexpected input is reported precisely instead of being skipped.

use core::fmt;

use crate::source::Span;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// "id" - the hash token's value is a valid identifier
    Id,
    /// "unrestricted" - the hash token's value is not a valid identifier
    Unrestricted,
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<number-token>` has a type flag set to either 'integer' or 'number'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// "integer" - the number is an integer
    Integer,
    /// "number" - the number has a decimal point or exponent
    Number,
}

/// CSS tokens as defined by the CSS Syntax Module Level 3 specification.
///
/// `url(` is always produced as a [`CSSToken::Function`]; selectors have no
/// use for `<url-token>`.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`" - the name without the trailing `(`
    Function(String),

    /// "`<at-keyword-token>`" - the name without the leading `@`
    AtKeyword(String),

    /// "`<hash-token>`"
    Hash {
        /// The value without the leading `#`.
        value: String,
        /// "a type flag set to either 'id' or 'unrestricted'"
        hash_type: HashType,
    },

    /// "`<string-token>`"
    String(String),

    /// "`<bad-string-token>`" - an unescaped newline inside a string
    BadString,

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number {
        /// The numeric value.
        value: f64,
        /// The integer value if this is an integer type.
        int_value: Option<i64>,
        /// Whether the source was written as an integer.
        numeric_type: NumericType,
    },

    /// "`<percentage-token>`"
    Percentage {
        /// The numeric value.
        value: f64,
    },

    /// "`<dimension-token>`"
    Dimension {
        /// The numeric value.
        value: f64,
        /// The integer value if this is an integer type.
        int_value: Option<i64>,
        /// Whether the source was written as an integer.
        numeric_type: NumericType,
        /// The unit, e.g. `n` in `2n` or `n-1` in `2n-1`.
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<CDO-token>`" (`<!--`)
    CDO,

    /// "`<CDC-token>`" (`-->`)
    CDC,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of file - signals end of input
    EOF,
}

impl CSSToken {
    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true if this is the delim token `c`.
    #[must_use]
    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, Self::Delim(d) if *d == c)
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "{v}"),
            Self::Function(v) => write!(f, "{v}("),
            Self::AtKeyword(v) => write!(f, "@{v}"),
            Self::Hash { value, .. } => write!(f, "#{value}"),
            Self::String(v) => write!(f, "\"{v}\""),
            Self::BadString => write!(f, "<bad-string>"),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Percentage { value } => write!(f, "{value}%"),
            Self::Dimension { value, unit, .. } => write!(f, "{value}{unit}"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::CDO => write!(f, "<!--"),
            Self::CDC => write!(f, "-->"),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::EOF => write!(f, "<EOF>"),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: CSSToken,
    /// Byte offsets of the token in the tokenized text.
    pub span: Span,
}
