// src/domain/resolution/mod.rs
//
// Resolution Domain
//
// Value objects describing the outcome of resolving a raga query against
// the two tradition catalogs.
//
// CRITICAL RULES:
// - All types are pure value objects (immutable)
// - No side effects
// - No I/O
// - No event emission (that's the service's job)

pub mod value_objects;

pub use value_objects::{LookupFailure, ResolutionOutcome, ResolutionState, ResolvedRaga};
