//! Identity resolution for a library session.
//!
//! The identifier scoping the collection is picked once, in priority order:
//! the page's non-empty `id` query parameter, then the identifier stored by an earlier
//! visit, then a freshly generated token (which is stored for next time).
//! Resolution never fails; storage problems are logged and skipped.

use ring::rand::{SecureRandom, SystemRandom};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KeyValueStore;
use crate::types::location::PageLocation;
use crate::types::settings::StorageSettings;

/// Length of a generated identifier.
pub const TOKEN_LENGTH: usize = 13;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Where a resolved identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    QueryParameter,
    Stored,
    Generated,
}

/// A resolved library identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub id: String,
    pub source: IdentitySource,
}

/// Resolves the identifier for this session.
pub fn resolve(
    location: Option<&PageLocation>,
    store: &mut dyn KeyValueStore,
    settings: &StorageSettings,
) -> ResolvedIdentity {
    if let Some(id) = location
        .and_then(|l| l.id_param())
        .filter(|id| !id.is_empty())
    {
        tracing::debug!(id = %id, "library id taken from page url");
        return ResolvedIdentity {
            id,
            source: IdentitySource::QueryParameter,
        };
    }

    match store.get(&settings.identifier_key) {
        Ok(Some(id)) if !id.is_empty() => {
            tracing::debug!(id = %id, "library id reused from storage");
            return ResolvedIdentity {
                id,
                source: IdentitySource::Stored,
            };
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored library id");
        }
    }

    let id = generate_token();
    if let Err(e) = store.set(&settings.identifier_key, &id) {
        tracing::warn!(error = %e, "failed to store generated library id");
    }
    tracing::info!(id = %id, "generated new library id");
    ResolvedIdentity {
        id,
        source: IdentitySource::Generated,
    }
}

/// Generates a short lowercase alphanumeric token.
///
/// Not meant to be unguessable: it only has to keep two local libraries apart.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LENGTH];
    if SystemRandom::new().fill(&mut bytes).is_err() {
        // Fall back to the clock if the OS random source is unavailable.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (nanos >> ((i % 16) * 8)) as u8 ^ (i as u8).wrapping_mul(31);
        }
    }
    bytes
        .iter()
        .map(|b| TOKEN_ALPHABET[*b as usize % TOKEN_ALPHABET.len()] as char)
        .collect()
}
