//! Tokenizer for composite default literals.
//!
//! Sequence literals take the form `[a,b,c]` and map literals `{k:v,k:v}`.
//! Elements may themselves be composite literals, so splitting happens only
//! on commas at nesting depth zero. Delimiters cannot be escaped.

use thiserror::Error;

/// Errors raised while tokenizing a composite literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiteralError {
    /// A sequence literal was expected but the text is not wrapped in `[...]`.
    #[error("expected a sequence literal wrapped in '[' and ']', found '{0}'")]
    NotASequence(String),

    /// A map literal was expected but the text is not wrapped in `{...}`.
    #[error("expected a map literal wrapped in '{{' and '}}', found '{0}'")]
    NotAMap(String),

    /// Opening and closing delimiters do not pair up.
    #[error("unbalanced brackets in '{0}'")]
    Unbalanced(String),
}

/// Splits the interior of a composite literal into its top-level tokens.
///
/// Interior empty tokens are kept while a trailing empty token is dropped.
/// Each token is trimmed of surrounding whitespace.
///
/// # Errors
///
/// Returns [`LiteralError::Unbalanced`] when the nesting depth goes negative
/// or does not return to zero.
///
/// # Examples
///
/// ```rust
/// use backfill::literal::split_top_level;
///
/// let tokens = split_top_level("1, [2,3], {a:[4]}").expect("balanced");
/// assert_eq!(tokens, ["1", "[2,3]", "{a:[4]}"]);
/// ```
pub fn split_top_level(expr: &str) -> Result<Vec<&str>, LiteralError> {
    let mut tokens = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    for (index, ch) in expr.char_indices() {
        match ch {
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| LiteralError::Unbalanced(expr.to_owned()))?;
            }
            ',' if depth == 0 => {
                tokens.push(expr.get(start..index).unwrap_or_default().trim());
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(LiteralError::Unbalanced(expr.to_owned()));
    }
    let rest = expr.get(start..).unwrap_or_default();
    if !rest.is_empty() {
        tokens.push(rest.trim());
    }
    Ok(tokens)
}

/// Strips the brackets from a sequence literal, returning its trimmed body.
///
/// # Errors
///
/// Returns [`LiteralError::NotASequence`] when `tag` is not wrapped in
/// `[` and `]`.
pub fn sequence_body(tag: &str) -> Result<&str, LiteralError> {
    tag.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
        .ok_or_else(|| LiteralError::NotASequence(tag.to_owned()))
}

/// Strips the braces from a map literal, returning its trimmed body.
///
/// # Errors
///
/// Returns [`LiteralError::NotAMap`] when `tag` is not wrapped in `{` and
/// `}`.
pub fn map_body(tag: &str) -> Result<&str, LiteralError> {
    tag.strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::trim)
        .ok_or_else(|| LiteralError::NotAMap(tag.to_owned()))
}

/// Splits a map entry on its first colon into trimmed key and value texts.
///
/// Returns `None` for entries without a colon.
#[must_use]
pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
    entry
        .split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}
