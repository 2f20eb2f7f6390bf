pub mod entity;
pub mod invariants;

pub use entity::{FeedbackForm, LoginCredentials, SignupForm};
pub use invariants::{validate_feedback, validate_signup};
