pub mod client;

pub use client::{failure_message, RagaApiClient};
