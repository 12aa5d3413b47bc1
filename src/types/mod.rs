// Neon Library shared type definitions
// Each submodule defines types used across the application.

pub mod category;
pub mod entry;
pub mod errors;
pub mod location;
pub mod settings;
