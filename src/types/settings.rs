use serde::{Deserialize, Serialize};

use super::entry::DEFAULT_COLOR;

/// Top-level library settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibrarySettings {
    pub general: GeneralSettings,
    pub storage: StorageSettings,
    pub appearance: AppearanceSettings,
    pub sharing: SharingSettings,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub language: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "pt".to_string(),
        }
    }
}

/// Where collections and the local identifier live in the key/value store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Prefix prepended to the identifier to form a collection key.
    pub namespace: String,
    /// Key holding the locally generated identifier.
    pub identifier_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            namespace: "library-".to_string(),
            identifier_key: "libraryId".to_string(),
        }
    }
}

impl StorageSettings {
    /// Storage key for the collection belonging to `library_id`.
    pub fn collection_key(&self, library_id: &str) -> String {
        format!("{}{}", self.namespace, library_id)
    }
}

/// Visual defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub default_color: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Share link construction and the copy notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharingSettings {
    /// Page address (origin + path) the share link points at.
    pub base_url: String,
    /// How long the "link copied" notice stays up.
    pub notice_duration_ms: u64,
}

impl Default for SharingSettings {
    fn default() -> Self {
        Self {
            base_url: "neon://localhost/library".to_string(),
            notice_duration_ms: 2000,
        }
    }
}
