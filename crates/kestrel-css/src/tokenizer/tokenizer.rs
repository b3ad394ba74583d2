use super::token::{CSSToken, HashType, NumericType, SpannedToken};
use crate::source::Span;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// CSS tokenizer following the CSS Syntax Module Level 3 specification.
/// Every token records the byte range it was consumed from so that selector
/// nodes can point back into the original text.
pub struct CSSTokenizer {
    /// The input as (byte offset, code point) pairs
    input: Vec<(usize, char)>,
    /// Byte length of the input, the offset of EOF
    len: usize,
    /// Current position in `input`
    position: usize,
    /// Collected tokens
    tokens: Vec<SpannedToken>,
}

/// Tokenize `input` to completion. The last token is always [`CSSToken::EOF`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<SpannedToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

impl CSSTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.char_indices().collect(),
            len: input.len(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Consume tokens until EOF, which is included as the final token.
    pub fn run(&mut self) {
        loop {
            // "Consume comments."
            self.consume_comments();
            let start = self.offset();
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(SpannedToken {
                token,
                span: Span::new(start, self.offset()),
            });
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SpannedToken> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        let Some(c) = self.consume() else {
            return CSSToken::EOF;
        };

        match c {
            c if is_whitespace(c) => {
                self.consume_whitespace();
                CSSToken::Whitespace
            }

            '"' | '\'' => self.consume_string_token(c),

            // "U+0023 NUMBER SIGN (#)"
            '#' => {
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    // "If the next 3 input code points would start an ident sequence,
                    // set the <hash-token>'s type flag to 'id'."
                    let hash_type = if self.would_start_ident_sequence(0) {
                        HashType::Id
                    } else {
                        HashType::Unrestricted
                    };
                    let value = self.consume_ident_sequence();
                    CSSToken::Hash { value, hash_type }
                } else {
                    CSSToken::Delim('#')
                }
            }

            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            ',' => CSSToken::Comma,
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,
            '[' => CSSToken::LeftBracket,
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,

            // "U+002B PLUS SIGN (+)" / "U+002E FULL STOP (.)"
            '+' | '.' => {
                self.reconsume();
                if self.would_start_number() {
                    self.consume_numeric_token()
                } else {
                    let _ = self.consume();
                    CSSToken::Delim(c)
                }
            }

            // "U+002D HYPHEN-MINUS (-)"
            '-' => {
                self.reconsume();
                if self.would_start_number() {
                    self.consume_numeric_token()
                } else if self.peek_at(1) == Some('-') && self.peek_at(2) == Some('>') {
                    self.position += 3;
                    CSSToken::CDC
                } else if self.would_start_ident_sequence(0) {
                    self.consume_ident_like_token()
                } else {
                    let _ = self.consume();
                    CSSToken::Delim('-')
                }
            }

            // "U+003C LESS-THAN SIGN (<)"
            '<' => {
                if self.peek() == Some('!')
                    && self.peek_at(1) == Some('-')
                    && self.peek_at(2) == Some('-')
                {
                    self.position += 3;
                    CSSToken::CDO
                } else {
                    CSSToken::Delim('<')
                }
            }

            // "U+0040 COMMERCIAL AT (@)"
            '@' => {
                if self.would_start_ident_sequence(0) {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }

            // "U+005C REVERSE SOLIDUS (\)"
            '\\' => {
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    // "This is a parse error."
                    CSSToken::Delim('\\')
                }
            }

            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending_code_point: char) -> CSSToken {
        let mut value = String::new();

        loop {
            match self.consume() {
                Some(c) if c == ending_code_point => return CSSToken::String(value),
                // "EOF: This is a parse error. Return the <string-token>."
                None => return CSSToken::String(value),
                // "newline: This is a parse error. Reconsume the current input code point,
                // create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return CSSToken::BadString;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CSSToken {
        let (value, int_value, numeric_type) = self.consume_number();

        if self.would_start_ident_sequence(0) {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension {
                value,
                int_value,
                numeric_type,
                unit,
            }
        } else if self.peek() == Some('%') {
            self.position += 1;
            CSSToken::Percentage { value }
        } else {
            CSSToken::Number {
                value,
                int_value,
                numeric_type,
            }
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> CSSToken {
        let string = self.consume_ident_sequence();

        if self.peek() == Some('(') {
            self.position += 1;
            CSSToken::Function(string)
        } else {
            CSSToken::Ident(string)
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();

        loop {
            match self.peek() {
                Some(c) if is_ident_code_point(c) => {
                    self.position += 1;
                    result.push(c);
                }
                Some('\\') if is_valid_escape(Some('\\'), self.peek_at(1)) => {
                    self.position += 1;
                    result.push(self.consume_escaped_code_point());
                }
                _ => return result,
            }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> (f64, Option<i64>, NumericType) {
        let mut numeric_type = NumericType::Integer;
        let mut repr = String::new();

        if matches!(self.peek(), Some('+' | '-')) {
            self.push_next(&mut repr);
        }
        self.push_digits(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit..."
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.push_next(&mut repr);
            numeric_type = NumericType::Number;
            self.push_digits(&mut repr);
        }

        // "If the next 2 or 3 input code points are (E) or (e), optionally followed by
        // U+002D HYPHEN-MINUS (-) or U+002B PLUS SIGN (+), followed by a digit..."
        if matches!(self.peek(), Some('e' | 'E')) {
            let has_sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if has_sign { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.push_next(&mut repr);
                if has_sign {
                    self.push_next(&mut repr);
                }
                numeric_type = NumericType::Number;
                self.push_digits(&mut repr);
            }
        }

        let value: f64 = repr.parse().unwrap_or(0.0);
        let int_value = match numeric_type {
            NumericType::Integer => repr.parse().ok(),
            NumericType::Number => None,
        };

        (value, int_value, numeric_type)
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Assumes the `\` has already been consumed.
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = c.to_string();
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.push_next(&mut hex);
                }
                if self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                let code_point = u32::from_str_radix(&hex, 16).unwrap_or(0);
                // "If this number is zero, or is for a surrogate, or is greater than the
                // maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
                match code_point {
                    0 => '\u{FFFD}',
                    cp => char::from_u32(cp).unwrap_or('\u{FFFD}'),
                }
            }
            // "EOF: This is a parse error. Return U+FFFD REPLACEMENT CHARACTER."
            None => '\u{FFFD}',
            Some(c) => c,
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn would_start_ident_sequence(&self, at: usize) -> bool {
        match self.peek_at(at) {
            Some('-') => {
                let second = self.peek_at(at + 1);
                second.is_some_and(is_ident_start_code_point)
                    || second == Some('-')
                    || is_valid_escape(second, self.peek_at(at + 2))
            }
            Some('\\') => is_valid_escape(Some('\\'), self.peek_at(at + 1)),
            Some(c) => is_ident_start_code_point(c),
            None => false,
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn would_start_number(&self) -> bool {
        let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        match self.peek() {
            Some('+' | '-') => {
                is_digit(self.peek_at(1))
                    || (self.peek_at(1) == Some('.') && is_digit(self.peek_at(2)))
            }
            Some('.') => is_digit(self.peek_at(1)),
            c => is_digit(c),
        }
    }

    fn push_next(&mut self, out: &mut String) {
        if let Some(c) = self.consume() {
            out.push(c);
        }
    }

    fn push_digits(&mut self, out: &mut String) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.push_next(out);
        }
    }

    /// Byte offset of the next unconsumed code point.
    fn offset(&self) -> usize {
        self.input.get(self.position).map_or(self.len, |&(offset, _)| offset)
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).map(|&(_, c)| c)
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
