use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::token::Token;

/// A named entity: two or more consecutive capitalized words joined by a
/// single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(String);

impl Entity {
    pub(crate) fn from_run(tokens: &[Token]) -> Self {
        let words: Vec<&str> = tokens.iter().map(Token::as_str).collect();
        Self(words.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// De-duplicated output shape. Mirrors the set semantics of the reference;
/// iteration order is lexicographic, not input order.
pub type EntitySet = BTreeSet<Entity>;

/// Ordered output shape: entities in first-occurrence order, duplicates
/// collapsed to the first.
pub type EntityList = Vec<Entity>;
