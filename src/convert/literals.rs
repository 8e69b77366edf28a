use crate::ast::{Expression, SourcePosition};
use crate::errors::{ConvertError, Result};
use crate::syntax::{Flag, SyntaxNode};

use super::TreeConverter;

// ============================================================================
// UNESCAPING
// ============================================================================

/// Value of a string literal token, quotes included in the input.
pub fn unescape_string(token: &str) -> std::result::Result<String, &'static str> {
    unescape(strip_quotes(token, '"')?)
}

/// Value of a character literal token, quotes included in the input.
pub fn unescape_char(token: &str) -> std::result::Result<char, &'static str> {
    let value = unescape(strip_quotes(token, '\'')?)?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("empty character literal"),
        (Some(_), Some(_)) => Err("more than one character"),
    }
}

fn strip_quotes(token: &str, quote: char) -> std::result::Result<&str, &'static str> {
    token
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or("missing quotes")
}

fn unescape(body: &str) -> std::result::Result<String, &'static str> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    // High half of a surrogate pair written as two unicode escapes.
    let mut pending_high: Option<u32> = None;

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            if pending_high.is_some() {
                return Err("unpaired surrogate");
            }
            result.push(ch);
            continue;
        }
        let escaped = match chars.next() {
            Some('b') => '\u{8}',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('f') => '\u{c}',
            Some('r') => '\r',
            Some('s') => ' ',
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some(first @ '0'..='7') => {
                // Three digits only when the first is 0-3, so the value fits a byte.
                let max_digits = if first <= '3' { 3 } else { 2 };
                let mut value = first.to_digit(8).unwrap_or(0);
                for _ in 1..max_digits {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                char::from_u32(value).ok_or("invalid octal escape")?
            }
            Some('u') => {
                while chars.peek() == Some(&'u') {
                    chars.next();
                }
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|c| c.to_digit(16))
                        .ok_or("invalid unicode escape")?;
                    code = code * 16 + digit;
                }
                match (pending_high.take(), code) {
                    (None, 0xD800..=0xDBFF) => {
                        pending_high = Some(code);
                        continue;
                    }
                    (Some(high), 0xDC00..=0xDFFF) => {
                        let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                        char::from_u32(combined).ok_or("invalid unicode escape")?
                    }
                    (Some(_), _) | (None, 0xDC00..=0xDFFF) => return Err("unpaired surrogate"),
                    (None, _) => char::from_u32(code).ok_or("invalid unicode escape")?,
                }
            }
            Some(_) => return Err("unknown escape sequence"),
            None => return Err("dangling backslash"),
        };
        if pending_high.is_some() {
            return Err("unpaired surrogate");
        }
        result.push(escaped);
    }

    if pending_high.is_some() {
        return Err("unpaired surrogate");
    }
    Ok(result)
}

// ============================================================================
// LITERAL BUILDERS
// ============================================================================

impl TreeConverter<'_> {
    pub(super) fn boolean_literal(&self, node: SyntaxNode<'_>) -> Expression {
        Expression::BooleanLiteral {
            value: node.has_flag(Flag::True),
            ty: self.type_of(node),
            constant: self.constant_of(node),
        }
    }

    pub(super) fn character_literal(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let token = node.token().unwrap_or_default();
        let value = unescape_char(token)
            .map_err(|reason| ConvertError::malformed_literal(token, reason, position))?;
        Ok(Expression::CharacterLiteral {
            value,
            ty: self.type_of(node),
            constant: self.constant_of(node),
        })
    }

    pub(super) fn string_literal(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let token = node.token().unwrap_or_default();
        let value = unescape_string(token)
            .map_err(|reason| ConvertError::malformed_literal(token, reason, position))?;
        Ok(Expression::StringLiteral {
            value,
            ty: self.type_of(node),
        })
    }

    /// The source token is kept as written; the value is whatever numeric
    /// constant the resolver computed for it.
    pub(super) fn number_literal(
        &self,
        node: SyntaxNode<'_>,
        position: SourcePosition,
    ) -> Result<Expression> {
        let value = self.constant_of(node);
        if let Some(constant) = &value {
            if !constant.is_numeric() {
                return Err(ConvertError::invalid(
                    "NumberLiteral",
                    format!("non-numeric constant {constant:?}"),
                    position,
                ));
            }
        }
        Ok(Expression::NumberLiteral {
            token: node.token().unwrap_or_default().to_string(),
            value,
            ty: self.type_of(node),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_lose_their_quotes() {
        assert_eq!(unescape_string("\"hello\"").unwrap(), "hello");
        assert_eq!(unescape_string("\"\"").unwrap(), "");
    }

    #[test]
    fn standard_escapes() {
        assert_eq!(
            unescape_string(r#""a\tb\nc\\d\"e\'f""#).unwrap(),
            "a\tb\nc\\d\"e'f"
        );
        assert_eq!(unescape_string(r#""\b\f\r""#).unwrap(), "\u{8}\u{c}\r");
    }

    #[test]
    fn octal_escapes_stop_at_byte_range() {
        assert_eq!(unescape_string(r#""\0""#).unwrap(), "\0");
        assert_eq!(unescape_string(r#""\101""#).unwrap(), "A");
        // \477 is \47 followed by a literal 7.
        assert_eq!(unescape_string(r#""\477""#).unwrap(), "'7");
    }

    #[test]
    fn unicode_escapes_and_surrogate_pairs() {
        assert_eq!(unescape_string(r#""A\uu0042""#).unwrap(), "AB");
        assert_eq!(unescape_string(r#""\uD83D\uDE00""#).unwrap(), "\u{1F600}");
        assert_eq!(unescape_string(r#""\uD83Dx""#), Err("unpaired surrogate"));
        assert_eq!(unescape_string(r#""\u00G1""#), Err("invalid unicode escape"));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(unescape_string("hello"), Err("missing quotes"));
        assert_eq!(unescape_string(r#""\q""#), Err("unknown escape sequence"));
        assert_eq!(unescape_string("\"\\\""), Err("dangling backslash"));
    }

    #[test]
    fn character_literals_hold_one_char() {
        assert_eq!(unescape_char("'x'"), Ok('x'));
        assert_eq!(unescape_char(r"'\n'"), Ok('\n'));
        assert_eq!(unescape_char(r"'\u0041'"), Ok('A'));
        assert_eq!(unescape_char("''"), Err("empty character literal"));
        assert_eq!(unescape_char("'ab'"), Err("more than one character"));
    }
}
