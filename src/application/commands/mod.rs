// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the shell and the services
// - Commands accept DTOs, return DTOs
// - Commands convert errors into serialized ErrorResponse text
// - Commands NEVER contain business logic

pub mod account_commands;
pub mod archive_commands;
pub mod browse_commands;
pub mod chat_commands;
pub mod search_commands;

pub use account_commands::*;
pub use archive_commands::*;
pub use browse_commands::*;
pub use chat_commands::*;
pub use search_commands::*;
