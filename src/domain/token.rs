use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns true when a word is "capitalized": an ASCII uppercase letter
/// followed only by ASCII lowercase letters. Words with internal uppercase
/// ("McDonald") do not qualify.
pub fn is_capitalized(word: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]*$").unwrap());
    RE.is_match(word)
}

/// One word from the input text, produced by tokenization and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new<S: Into<String>>(word: S) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_capitalized(&self) -> bool {
        is_capitalized(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
