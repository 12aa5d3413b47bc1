// Neon Library platform abstraction
// Platform-specific config/data locations and the command that opens a url
// in the user's default browser.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/neonlibrary` (or `$XDG_CONFIG_HOME/neonlibrary`)
/// - **macOS**: `~/Library/Application Support/NeonLibrary`
/// - **Windows**: `%APPDATA%/NeonLibrary`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory (where the store lives).
///
/// - **Linux**: `~/.local/share/neonlibrary` (or `$XDG_DATA_HOME/neonlibrary`)
/// - **macOS**: `~/Library/Application Support/NeonLibrary`
/// - **Windows**: `%APPDATA%/NeonLibrary`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Program and arguments that open `url` with the desktop's default handler.
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    #[cfg(target_os = "linux")]
    {
        linux::opener_command(url)
    }
    #[cfg(target_os = "macos")]
    {
        macos::opener_command(url)
    }
    #[cfg(target_os = "windows")]
    {
        windows::opener_command(url)
    }
}
