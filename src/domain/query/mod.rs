pub mod entity;
pub mod invariants;

pub use entity::RagaQuery;
pub use invariants::{contains_blocked_word, validate_query};
