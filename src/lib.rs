pub mod domain;
pub mod extraction;

pub use domain::{is_capitalized, Entity, EntityList, EntitySet, Token};
pub use extraction::{
    extract_entities, extract_entities_ordered, extract_named_entities,
    extract_named_entities_ordered, tokenize,
};
