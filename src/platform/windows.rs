// Neon Library platform paths for Windows
// Config: %APPDATA%/NeonLibrary
// Data:   %APPDATA%/NeonLibrary

use std::env;
use std::path::PathBuf;

/// `%APPDATA%/NeonLibrary`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("NeonLibrary")
}

/// Same as the config directory on Windows.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// `start` treats its first quoted argument as a window title, hence the empty one.
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    (
        "cmd",
        vec![
            "/C".to_string(),
            "start".to_string(),
            String::new(),
            url.to_string(),
        ],
    )
}
