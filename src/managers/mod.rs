// Neon Library state managers
// Managers own stateful pieces: the resolved identity, the collection, the modals.

pub mod collection_store;
pub mod identity_resolver;
pub mod modal_manager;
