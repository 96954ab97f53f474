mod entity;
mod token;

pub use entity::{Entity, EntityList, EntitySet};
pub use token::{is_capitalized, Token};
