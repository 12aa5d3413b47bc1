// Neon Library platform paths for macOS
// Config: ~/Library/Application Support/NeonLibrary
// Data:   ~/Library/Application Support/NeonLibrary

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `~/Library/Application Support/NeonLibrary`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("NeonLibrary")
}

/// Same as the config directory on macOS.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}
