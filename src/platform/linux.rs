// Neon Library platform paths for Linux
// Config: ~/.config/neonlibrary
// Data:   ~/.local/share/neonlibrary

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/neonlibrary` if set, otherwise `~/.config/neonlibrary`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("neonlibrary"),
        _ => home_dir().join(".config").join("neonlibrary"),
    }
}

/// Uses `$XDG_DATA_HOME/neonlibrary` if set, otherwise `~/.local/share/neonlibrary`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("neonlibrary"),
        _ => home_dir().join(".local").join("share").join("neonlibrary"),
    }
}

pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}
