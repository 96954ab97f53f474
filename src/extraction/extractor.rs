use std::collections::BTreeSet;

use super::tokenizer::tokenize;
use crate::domain::{Entity, EntityList, EntitySet, Token};

/// A run needs this many consecutive capitalized tokens to become an entity.
const MIN_RUN_LEN: usize = 2;

/// In-progress sequence of consecutive capitalized tokens. Local to one
/// extraction call; cleared on every non-capitalized token and after every
/// emission.
#[derive(Debug, Default)]
struct Run {
    tokens: Vec<Token>,
}

impl Run {
    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn clear(&mut self) {
        self.tokens.clear();
    }

    fn is_complete(&self) -> bool {
        self.tokens.len() >= MIN_RUN_LEN
    }

    fn emit(&mut self) -> Entity {
        let entity = Entity::from_run(&self.tokens);
        self.tokens.clear();
        entity
    }
}

/// Walks the token sequence and yields entities in occurrence order,
/// duplicates included.
///
/// The reference emits the instant a run reaches two tokens and then starts
/// over, so a longer capitalized run fragments: "New York City" yields only
/// "New York", with "City" left as a one-token run that is discarded. That
/// behavior is part of the public contract and is kept as is.
fn collect_runs(tokens: &[Token]) -> Vec<Entity> {
    let mut run = Run::default();
    let mut entities = Vec::new();
    for token in tokens {
        if token.is_capitalized() {
            run.push(token.clone());
            if run.is_complete() {
                entities.push(run.emit());
            }
        } else {
            run.clear();
        }
    }
    entities
}

/// Extracts entities from a token sequence as a de-duplicated set.
pub fn extract_entities(tokens: &[Token]) -> EntitySet {
    collect_runs(tokens).into_iter().collect()
}

/// Extracts entities in first-occurrence order, duplicates collapsed.
pub fn extract_entities_ordered(tokens: &[Token]) -> EntityList {
    let mut seen = BTreeSet::new();
    collect_runs(tokens)
        .into_iter()
        .filter(|entity| seen.insert(entity.clone()))
        .collect()
}

/// Full pipeline: tokenize the text and extract its entities as a set.
pub fn extract_named_entities(text: &str) -> EntitySet {
    extract_entities(&tokenize(text))
}

/// Full pipeline, ordered variant.
pub fn extract_named_entities_ordered(text: &str) -> EntityList {
    extract_entities_ordered(&tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_capitalized;

    fn entity_set(texts: &[&str]) -> EntitySet {
        texts.iter().map(|t| Entity::from_run(&tokenize(t))).collect()
    }

    #[test]
    fn finds_two_word_entities_in_a_sentence() {
        let text = "When we went to Los Angeles last year we visited the Hollywood Sign";
        assert_eq!(
            extract_named_entities(text),
            entity_set(&["Los Angeles", "Hollywood Sign"])
        );
    }

    #[test]
    fn no_capitalized_run_means_no_entities() {
        assert!(extract_named_entities("our hotel is nice").is_empty());
        assert!(extract_named_entities("").is_empty());
    }

    #[test]
    fn single_capitalized_word_is_discarded() {
        assert!(extract_named_entities("we flew to Paris yesterday").is_empty());
    }

    #[test]
    fn three_word_run_fragments_after_the_first_pair() {
        assert_eq!(
            extract_named_entities("New York City"),
            entity_set(&["New York"])
        );
    }

    #[test]
    fn four_word_run_yields_two_pairs() {
        assert_eq!(
            extract_named_entities("John Ronald Reuel Tolkien"),
            entity_set(&["John Ronald", "Reuel Tolkien"])
        );
    }

    #[test]
    fn internal_uppercase_breaks_the_run() {
        assert!(extract_named_entities("McDonald Corp announced profits").is_empty());
    }

    #[test]
    fn punctuation_between_words_does_not_break_a_run() {
        // Tokenization drops punctuation, so the comma leaves the run intact.
        assert_eq!(
            extract_named_entities("we saw Los Angeles, California"),
            entity_set(&["Los Angeles"])
        );
    }

    #[test]
    fn duplicates_collapse_in_the_set() {
        let text = "Los Angeles here, Los Angeles there";
        assert_eq!(extract_named_entities(text), entity_set(&["Los Angeles"]));
    }

    #[test]
    fn ordered_variant_keeps_first_occurrence_order() {
        let text = "the Hollywood Sign overlooks Los Angeles near the Hollywood Sign";
        let entities = extract_named_entities_ordered(text);
        let labels: Vec<&str> = entities.iter().map(Entity::as_str).collect();
        assert_eq!(labels, vec!["Hollywood Sign", "Los Angeles"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "When we went to Los Angeles last year we visited the Hollywood Sign";
        assert_eq!(extract_named_entities(text), extract_named_entities(text));
    }

    #[test]
    fn every_entity_has_two_capitalized_parts() {
        let text = "Mary Poppins met Sherlock Holmes in New York City on a rainy Tuesday";
        for entity in extract_named_entities(text) {
            let parts: Vec<&str> = entity.parts().collect();
            assert!(parts.len() >= 2, "entity {entity} has fewer than two parts");
            for part in parts {
                assert!(is_capitalized(part), "part {part} is not capitalized");
            }
        }
    }

    #[test]
    fn entities_are_contiguous_subsequences_of_the_tokens() {
        let text = "we left Los Angeles and then saw the Hollywood Sign";
        let token_words: Vec<&str> = vec![
            "we", "left", "Los", "Angeles", "and", "then", "saw", "the", "Hollywood", "Sign",
        ];
        for entity in extract_named_entities(text) {
            let parts: Vec<&str> = entity.parts().collect();
            let found = token_words
                .windows(parts.len())
                .any(|window| window == parts.as_slice());
            assert!(found, "entity {entity} is not contiguous in the input");
        }
    }
}
