use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Token;

/// Splits text into word tokens: maximal runs of ASCII letters, in input
/// order. Whitespace, punctuation and digits are separators and are dropped,
/// so "Hollywood," tokenizes to "Hollywood".
pub fn tokenize(text: &str) -> Vec<Token> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());
    RE.find_iter(text).map(|m| Token::new(m.as_str())).collect()
}
