mod extractor;
mod tokenizer;

pub use extractor::{
    extract_entities, extract_entities_ordered, extract_named_entities,
    extract_named_entities_ordered,
};
pub use tokenizer::tokenize;
