//! Share-link construction and the "link copied" notice.

use std::time::{Duration, Instant};

use url::Url;

use crate::types::errors::ClipboardError;
use crate::types::location::ID_PARAM;

/// Somewhere plain text can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Builds the link that opens `library_id` at `base_url`.
///
/// Any query or fragment on `base_url` is replaced; only origin and path are kept.
pub fn share_url(base_url: &str, library_id: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().append_pair(ID_PARAM, library_id);
    Ok(url.to_string())
}

/// Copies share links and tracks the auto-dismissing confirmation.
pub struct ShareService {
    base_url: String,
    notice_duration: Duration,
    notice_until: Option<Instant>,
}

impl ShareService {
    pub fn new(base_url: impl Into<String>, notice_duration: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            notice_duration,
            notice_until: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copies the share link for `library_id` and shows the notice.
    ///
    /// On a clipboard failure nothing is shown and the error is returned;
    /// there is no retry.
    pub fn share(
        &mut self,
        library_id: &str,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<String, ClipboardError> {
        let link = share_url(&self.base_url, library_id)
            .map_err(|e| ClipboardError::WriteFailed(format!("invalid share base url: {}", e)))?;

        if let Err(e) = clipboard.write_text(&link) {
            tracing::warn!(error = %e, "failed to copy share link");
            return Err(e);
        }

        self.show_notice(now);
        tracing::debug!(link = %link, "share link copied");
        Ok(link)
    }

    /// Shows the notice for a copy that completed outside this service.
    pub fn show_notice(&mut self, now: Instant) {
        self.notice_until = Some(now + self.notice_duration);
    }

    /// Whether the notice is still showing at `now`.
    pub fn notice_visible(&self, now: Instant) -> bool {
        self.notice_until.is_some_and(|until| now < until)
    }

    /// When the notice will hide, if it is showing.
    pub fn notice_deadline(&self) -> Option<Instant> {
        self.notice_until
    }

    /// Drops an expired notice. Returns true if something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.notice_until {
            Some(until) if now >= until => {
                self.notice_until = None;
                true
            }
            _ => false,
        }
    }
}
