// src/integrations/mod.rs
//
// External Integrations Module

pub mod raga_api;

pub use raga_api::client::RagaApiClient;
