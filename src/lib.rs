//! Neon Library: a bookmark organizer with shareable collections.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod cli;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
