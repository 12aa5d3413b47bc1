use std::fmt;

use super::entry::EntryId;

// === StorageError ===

/// Errors raised by a key/value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// The backend could not be opened.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === AddRejection ===

/// Why a draft was not accepted into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejection {
    /// The draft has an empty title.
    MissingTitle,
    /// The draft has an empty url.
    MissingUrl,
}

impl fmt::Display for AddRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddRejection::MissingTitle => write!(f, "Title is required"),
            AddRejection::MissingUrl => write!(f, "URL is required"),
        }
    }
}

impl std::error::Error for AddRejection {}

// === LibraryError ===

/// Errors related to collection operations.
#[derive(Debug)]
pub enum LibraryError {
    /// The draft was rejected before touching the collection.
    Rejected(AddRejection),
    /// No entry with the given ID exists.
    NotFound(EntryId),
    /// Failed to serialize the collection.
    SerializationError(String),
    /// The storage backend failed.
    Storage(StorageError),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Rejected(reason) => write!(f, "Entry rejected: {}", reason),
            LibraryError::NotFound(id) => write!(f, "Entry not found: {}", id),
            LibraryError::SerializationError(msg) => {
                write!(f, "Library serialization error: {}", msg)
            }
            LibraryError::Storage(e) => write!(f, "Library storage error: {}", e),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Rejected(reason) => Some(reason),
            LibraryError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AddRejection> for LibraryError {
    fn from(reason: AddRejection) -> Self {
        LibraryError::Rejected(reason)
    }
}

impl From<StorageError> for LibraryError {
    fn from(e: StorageError) -> Self {
        LibraryError::Storage(e)
    }
}

// === ClipboardError ===

/// Errors related to writing the share link to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// The platform clipboard is not reachable.
    Unavailable(String),
    /// The write was attempted and failed.
    WriteFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// === NavigationError ===

/// Errors related to opening an entry's url.
#[derive(Debug)]
pub enum NavigationError {
    /// The system opener could not be launched.
    LaunchFailed(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::LaunchFailed(msg) => write!(f, "Failed to open url: {}", msg),
        }
    }
}

impl std::error::Error for NavigationError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === LocaleError ===

/// Errors related to localization.
#[derive(Debug)]
pub enum LocaleError {
    /// The requested locale is not bundled.
    UnsupportedLocale(String),
    /// A bundled locale table failed to parse.
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(lang) => write!(f, "Unsupported locale: {}", lang),
            LocaleError::ParseError(msg) => write!(f, "Locale parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}
