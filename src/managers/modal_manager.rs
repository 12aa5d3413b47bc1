use crate::types::entry::{Draft, DraftField, Entry, EntryId};

/// Trait defining the add/detail modal interface.
pub trait ModalManagerTrait {
    fn open_add(&mut self);
    fn close_add(&mut self);
    fn is_add_open(&self) -> bool;
    fn draft(&self) -> &Draft;
    fn update_draft(&mut self, field: DraftField);
    fn reset_draft(&mut self);
    fn open_detail(&mut self, entry: Entry);
    fn close_detail(&mut self);
    fn is_detail_open(&self) -> bool;
    fn selection(&self) -> Option<&Entry>;
    fn on_entry_removed(&mut self, id: EntryId);
}

/// Transient state of the "add site" and "site details" modals.
///
/// The two modals are independent flags; opening one leaves the other alone.
pub struct ModalManager {
    add_open: bool,
    draft: Draft,
    default_color: String,
    detail_open: bool,
    selection: Option<Entry>,
}

impl ModalManager {
    /// Creates closed modals with an empty draft using `default_color`.
    pub fn new(default_color: &str) -> Self {
        Self {
            add_open: false,
            draft: Draft::with_color(default_color),
            default_color: default_color.to_string(),
            detail_open: false,
            selection: None,
        }
    }
}

impl Default for ModalManager {
    fn default() -> Self {
        Self::new(crate::types::entry::DEFAULT_COLOR)
    }
}

impl ModalManagerTrait for ModalManager {
    fn open_add(&mut self) {
        self.add_open = true;
    }

    /// Closes the add modal. The draft is kept for the next time it opens.
    fn close_add(&mut self) {
        self.add_open = false;
    }

    fn is_add_open(&self) -> bool {
        self.add_open
    }

    fn draft(&self) -> &Draft {
        &self.draft
    }

    fn update_draft(&mut self, field: DraftField) {
        field.apply(&mut self.draft);
    }

    fn reset_draft(&mut self) {
        self.draft = Draft::with_color(&self.default_color);
    }

    fn open_detail(&mut self, entry: Entry) {
        self.selection = Some(entry);
        self.detail_open = true;
    }

    /// Hides the detail modal. The selection stays until another tile is
    /// clicked or the selected entry is removed.
    fn close_detail(&mut self) {
        self.detail_open = false;
    }

    /// True only while the modal is open and something is selected.
    fn is_detail_open(&self) -> bool {
        self.detail_open && self.selection.is_some()
    }

    fn selection(&self) -> Option<&Entry> {
        self.selection.as_ref()
    }

    fn on_entry_removed(&mut self, id: EntryId) {
        if self.selection.as_ref().is_some_and(|e| e.id == id) {
            self.detail_open = false;
            self.selection = None;
        }
    }
}
