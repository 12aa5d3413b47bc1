// Neon Library services
// Stateless or self-contained helpers: filtering, sharing, navigation, settings, strings.

pub mod filter_engine;
pub mod localization_engine;
pub mod navigator;
pub mod settings_engine;
pub mod share_service;
