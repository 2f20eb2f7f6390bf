pub mod entity;

pub use entity::{CarnaticRaga, HindustaniRaga, RagaRecord};
