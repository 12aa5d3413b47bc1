//! App Core for Neon Library.
//!
//! Central struct owning the store, the resolved identity, the collection and
//! the transient UI state. Front ends (webview, RPC) call one method per
//! user action and re-render from [`App::page_view`] afterwards.

use std::time::{Duration, Instant};

use crate::managers::collection_store::{CollectionStore, CollectionStoreTrait};
use crate::managers::identity_resolver::{self, IdentitySource};
use crate::managers::modal_manager::{ModalManager, ModalManagerTrait};
use crate::services::filter_engine::{self, CategoryGroup};
use crate::services::localization_engine::LocalizationEngine;
use crate::services::navigator::Navigator;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::share_service::{Clipboard, ShareService};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::types::entry::{Draft, DraftField, Entry, EntryId};
use crate::types::errors::{
    AddRejection, ClipboardError, LibraryError, LocaleError, NavigationError, SettingsError,
};
use crate::types::location::PageLocation;
use crate::types::settings::LibrarySettings;
use crate::ui::render::PageView;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub localization_engine: LocalizationEngine,
    store: Box<dyn KeyValueStore>,
    library_id: String,
    identity_source: IdentitySource,
    collection: CollectionStore,
    modals: ModalManager,
    share_service: ShareService,
    search_term: String,
    last_rejection: Option<AddRejection>,
}

impl App {
    /// Resolves the library identity against `store` and loads its collection.
    ///
    /// `settings_engine` is expected to be loaded already; its current
    /// settings decide storage keys, defaults and the share link base.
    pub fn new(
        mut store: Box<dyn KeyValueStore>,
        settings_engine: SettingsEngine,
        location: Option<&PageLocation>,
    ) -> Result<Self, LocaleError> {
        let settings = settings_engine.get_settings().clone();
        let localization_engine = LocalizationEngine::for_language(&settings.general.language)?;

        let identity = identity_resolver::resolve(location, store.as_mut(), &settings.storage);
        let mut collection = CollectionStore::new(settings.storage.collection_key(&identity.id));
        collection.load(store.as_ref());

        let share_service = ShareService::new(
            settings.sharing.base_url.clone(),
            Duration::from_millis(settings.sharing.notice_duration_ms),
        );

        tracing::info!(
            id = %identity.id,
            source = ?identity.source,
            entries = collection.len(),
            "library opened"
        );

        Ok(Self {
            settings_engine,
            localization_engine,
            store,
            library_id: identity.id,
            identity_source: identity.source,
            collection,
            modals: ModalManager::new(&settings.appearance.default_color),
            share_service,
            search_term: String::new(),
            last_rejection: None,
        })
    }

    /// App over a fresh in-memory store with default settings.
    pub fn in_memory(location: Option<&PageLocation>) -> Result<Self, LocaleError> {
        Self::new(
            Box::new(MemoryStore::new()),
            SettingsEngine::new(None),
            location,
        )
    }

    pub fn settings(&self) -> &LibrarySettings {
        self.settings_engine.get_settings()
    }

    /// Updates one setting and persists it. Language changes apply at once;
    /// everything else takes effect on the next start.
    ///
    /// An unbundled language is rejected before anything is stored.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        use crate::services::localization_engine::LocalizationEngineTrait;

        if key == "general.language" {
            let lang = value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            if !self
                .localization_engine
                .get_available_locales()
                .contains(&lang)
            {
                let err = LocaleError::UnsupportedLocale(lang);
                return Err(SettingsError::InvalidValue(err.to_string()));
            }
        }

        self.settings_engine.set_value(key, value)?;
        if key == "general.language" {
            let lang = self.settings().general.language.clone();
            self.localization_engine
                .set_locale(&lang)
                .map_err(|e| SettingsError::InvalidValue(e.to_string()))?;
        }
        Ok(())
    }

    // ─── Identity ───

    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    pub fn identity_source(&self) -> IdentitySource {
        self.identity_source
    }

    // ─── Collection ───

    pub fn entries(&self) -> &[Entry] {
        self.collection.entries()
    }

    pub fn get_entry(&self, id: EntryId) -> Option<&Entry> {
        self.collection.get_entry(id)
    }

    /// Adds an entry straight from a draft, bypassing the add modal.
    pub fn add_entry(&mut self, draft: &Draft) -> Result<Entry, LibraryError> {
        self.collection.add_entry(draft, self.store.as_mut())
    }

    /// Removes an entry, closing the detail modal if it was showing it.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<Option<Entry>, LibraryError> {
        let removed = self.collection.remove_entry(id, self.store.as_mut());
        // The entry is gone from memory even when the write failed.
        if self.collection.get_entry(id).is_none() {
            self.modals.on_entry_removed(id);
        }
        removed
    }

    /// Re-reads the collection from storage.
    pub fn reload(&mut self) {
        self.collection.load(self.store.as_ref());
        if let Some(id) = self.modals.selection().map(|e| e.id) {
            if self.collection.get_entry(id).is_none() {
                self.modals.on_entry_removed(id);
            }
        }
    }

    // ─── Search ───

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Current search results grouped into all eight categories.
    pub fn visible_groups(&self) -> Vec<CategoryGroup<'_>> {
        filter_engine::filter_and_group(self.collection.entries(), &self.search_term)
    }

    /// Current search results, ungrouped.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        filter_engine::filter(self.collection.entries(), &self.search_term)
    }

    // ─── Add modal ───

    pub fn open_add(&mut self) {
        self.modals.open_add();
    }

    pub fn close_add(&mut self) {
        self.last_rejection = None;
        self.modals.close_add();
    }

    pub fn is_add_open(&self) -> bool {
        self.modals.is_add_open()
    }

    pub fn draft(&self) -> &Draft {
        self.modals.draft()
    }

    pub fn update_draft(&mut self, field: DraftField) {
        self.last_rejection = None;
        self.modals.update_draft(field);
    }

    /// Saves the draft. On success the modal closes and the draft resets;
    /// on rejection both stay as they were and the reason is remembered for
    /// display.
    pub fn save_draft(&mut self) -> Result<Entry, LibraryError> {
        let draft = self.modals.draft().clone();
        match self.collection.add_entry(&draft, self.store.as_mut()) {
            Ok(entry) => {
                self.finish_add();
                Ok(entry)
            }
            Err(LibraryError::Rejected(reason)) => {
                self.last_rejection = Some(reason);
                Err(LibraryError::Rejected(reason))
            }
            Err(e) => {
                // Storage failed but the entry is in memory; treat as saved.
                self.finish_add();
                Err(e)
            }
        }
    }

    fn finish_add(&mut self) {
        self.last_rejection = None;
        self.modals.reset_draft();
        self.modals.close_add();
    }

    pub fn last_rejection(&self) -> Option<AddRejection> {
        self.last_rejection
    }

    // ─── Detail modal ───

    /// Shows the detail modal for `id`.
    pub fn open_detail(&mut self, id: EntryId) -> Result<(), LibraryError> {
        let entry = self
            .collection
            .get_entry(id)
            .cloned()
            .ok_or(LibraryError::NotFound(id))?;
        self.modals.open_detail(entry);
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.modals.close_detail();
    }

    pub fn is_detail_open(&self) -> bool {
        self.modals.is_detail_open()
    }

    pub fn selection(&self) -> Option<&Entry> {
        self.modals.selection()
    }

    /// Opens the selected entry's url. Returns `false` when nothing is selected.
    pub fn visit_selection(&self, navigator: &mut dyn Navigator) -> Result<bool, NavigationError> {
        match self.modals.selection() {
            Some(entry) => {
                navigator.open(&entry.url)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ─── Sharing ───

    /// Copies the share link for this library.
    pub fn share(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<String, ClipboardError> {
        self.share_service.share(&self.library_id, clipboard, now)
    }

    pub fn share_url(&self) -> Result<String, url::ParseError> {
        crate::services::share_service::share_url(self.share_service.base_url(), &self.library_id)
    }

    /// Shows the copy notice after the page itself wrote the clipboard.
    pub fn show_copy_notice(&mut self, now: Instant) {
        self.share_service.show_notice(now);
    }

    pub fn notice_visible(&self, now: Instant) -> bool {
        self.share_service.notice_visible(now)
    }

    pub fn notice_deadline(&self) -> Option<Instant> {
        self.share_service.notice_deadline()
    }

    /// Expires the copy notice. Returns true if the page needs a re-render.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.share_service.tick(now)
    }

    // ─── Presentation ───

    /// Everything the page renderer needs at `now`.
    pub fn page_view(&self, now: Instant) -> PageView<'_> {
        PageView {
            i18n: &self.localization_engine,
            search_term: &self.search_term,
            groups: self.visible_groups(),
            notice_visible: self.notice_visible(now),
            draft: self.modals.is_add_open().then(|| self.modals.draft()),
            rejection: self.last_rejection,
            detail: if self.modals.is_detail_open() {
                self.modals.selection()
            } else {
                None
            },
        }
    }
}
