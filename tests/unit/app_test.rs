//! Unit and end-to-end tests for the App core.

use std::time::{Duration, Instant};

use serde_json::json;
use tempfile::TempDir;

use neonlibrary::app::App;
use neonlibrary::managers::identity_resolver::IdentitySource;
use neonlibrary::services::localization_engine::LocalizationEngineTrait;
use neonlibrary::services::navigator::Navigator;
use neonlibrary::services::settings_engine::SettingsEngine;
use neonlibrary::services::share_service::Clipboard;
use neonlibrary::storage::{KeyValueStore, SqliteStore};
use neonlibrary::types::category::Category;
use neonlibrary::types::entry::{Draft, DraftField};
use neonlibrary::types::errors::{
    AddRejection, ClipboardError, LibraryError, NavigationError, SettingsError,
};
use neonlibrary::types::location::PageLocation;

#[derive(Default)]
struct FakeHost {
    copied: Vec<String>,
    opened: Vec<String>,
}

impl Clipboard for FakeHost {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

impl Navigator for FakeHost {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

fn page(url: &str) -> PageLocation {
    PageLocation::parse(url).unwrap()
}

fn settings_in(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(
        dir.path().join("settings.json").to_string_lossy().to_string(),
    ))
}

fn app_at(dir: &TempDir, location: Option<&PageLocation>) -> App {
    let store = SqliteStore::open(dir.path().join("neonlibrary.db")).unwrap();
    App::new(Box::new(store), settings_in(dir), location).unwrap()
}

fn draft(title: &str, url: &str, description: &str, category: Category) -> Draft {
    Draft {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        color: "#9333EA".to_string(),
        category,
    }
}

#[test]
fn fresh_app_generates_identity_and_is_empty() {
    let app = App::in_memory(None).unwrap();
    assert_eq!(app.identity_source(), IdentitySource::Generated);
    assert!(!app.library_id().is_empty());
    assert!(app.entries().is_empty());
    assert_eq!(app.visible_groups().len(), 8);
}

#[test]
fn add_and_reopen_with_same_id() {
    let dir = TempDir::new().unwrap();
    let loc = page("neon://localhost/library?id=team1");

    let mut app = app_at(&dir, Some(&loc));
    assert_eq!(app.library_id(), "team1");
    app.open_add();
    app.update_draft(DraftField::Title("Grafana".into()));
    app.update_draft(DraftField::Url("https://grafana.example".into()));
    app.update_draft(DraftField::Category(Category::Dashboards));
    let saved = app.save_draft().unwrap();
    assert!(!app.is_add_open());
    assert!(app.draft().title.is_empty());
    drop(app);

    let reopened = app_at(&dir, Some(&loc));
    assert_eq!(reopened.entries(), &[saved]);
}

#[test]
fn other_id_sees_other_collection() {
    let dir = TempDir::new().unwrap();
    let mut a = app_at(&dir, Some(&page("neon://localhost/library?id=a")));
    a.add_entry(&draft("A", "a", "", Category::Cs)).unwrap();
    drop(a);

    let b = app_at(&dir, Some(&page("neon://localhost/library?id=b")));
    assert!(b.entries().is_empty());
}

#[test]
fn stored_identity_is_reused_across_sessions() {
    let dir = TempDir::new().unwrap();
    let first = app_at(&dir, None);
    let id = first.library_id().to_string();
    drop(first);

    let second = app_at(&dir, None);
    assert_eq!(second.library_id(), id);
    assert_eq!(second.identity_source(), IdentitySource::Stored);
}

#[test]
fn search_groups_results() {
    let mut app = App::in_memory(None).unwrap();
    app.add_entry(&draft("Zendesk", "z", "customer support", Category::Cs))
        .unwrap();
    app.add_entry(&draft("Canva", "c", "", Category::Criativos))
        .unwrap();

    app.set_search("support");
    assert_eq!(app.search_term(), "support");
    let groups = app.visible_groups();
    assert_eq!(groups.len(), 8);
    let shown: usize = groups.iter().map(|g| g.entries.len()).sum();
    assert_eq!(shown, 1);
    assert_eq!(groups[Category::Cs.index()].entries[0].title, "Zendesk");

    app.set_search("");
    assert_eq!(app.visible_entries().len(), 2);
}

#[test]
fn rejected_save_keeps_modal_and_draft() {
    let mut app = App::in_memory(None).unwrap();
    app.open_add();
    app.update_draft(DraftField::Url("https://x.example".into()));

    let err = app.save_draft().unwrap_err();
    assert!(matches!(err, LibraryError::Rejected(AddRejection::MissingTitle)));
    assert!(app.is_add_open());
    assert_eq!(app.draft().url, "https://x.example");
    assert_eq!(app.last_rejection(), Some(AddRejection::MissingTitle));
    assert!(app.entries().is_empty());

    app.update_draft(DraftField::Title("X".into()));
    assert_eq!(app.last_rejection(), None);
    app.save_draft().unwrap();
    assert_eq!(app.entries().len(), 1);
}

#[test]
fn detail_flow_and_visit() {
    let mut app = App::in_memory(None).unwrap();
    let e = app
        .add_entry(&draft("Docs", "https://docs.example", "", Category::Operacional))
        .unwrap();
    let mut host = FakeHost::default();

    assert!(!app.visit_selection(&mut host).unwrap());

    app.open_detail(e.id).unwrap();
    assert!(app.is_detail_open());
    assert!(app.visit_selection(&mut host).unwrap());
    assert_eq!(host.opened, vec!["https://docs.example".to_string()]);

    app.close_detail();
    assert!(!app.is_detail_open());

    assert!(matches!(
        app.open_detail(12345),
        Err(LibraryError::NotFound(12345))
    ));
}

#[test]
fn removing_selected_entry_closes_detail() {
    let mut app = App::in_memory(None).unwrap();
    let e = app.add_entry(&draft("A", "a", "", Category::Cs)).unwrap();
    app.open_detail(e.id).unwrap();

    assert!(app.remove_entry(e.id).unwrap().is_some());
    assert!(!app.is_detail_open());
    assert!(app.selection().is_none());
    assert!(app.entries().is_empty());
}

#[test]
fn share_copies_link_and_notice_expires() {
    let mut app = App::in_memory(Some(&page("neon://localhost/library?id=xyz"))).unwrap();
    let mut host = FakeHost::default();
    let now = Instant::now();

    let link = app.share(&mut host, now).unwrap();
    assert_eq!(link, "neon://localhost/library?id=xyz");
    assert_eq!(host.copied, vec![link.clone()]);
    assert_eq!(app.share_url().unwrap(), link);
    assert!(app.notice_visible(now));
    assert!(app.page_view(now).notice_visible);

    let later = now + Duration::from_millis(2000);
    assert!(app.tick(later));
    assert!(!app.notice_visible(later));
    assert_eq!(app.notice_deadline(), None);
}

#[test]
fn page_view_reflects_open_modals() {
    let mut app = App::in_memory(None).unwrap();
    let e = app.add_entry(&draft("A", "a", "", Category::Cs)).unwrap();
    let now = Instant::now();

    let v = app.page_view(now);
    assert!(v.draft.is_none());
    assert!(v.detail.is_none());
    drop(v);

    app.open_add();
    app.open_detail(e.id).unwrap();
    let v = app.page_view(now);
    assert!(v.draft.is_some());
    assert_eq!(v.detail.map(|d| d.id), Some(e.id));
}

#[test]
fn reload_picks_up_external_writes() {
    let dir = TempDir::new().unwrap();
    let loc = page("neon://localhost/library?id=shared");
    let mut app = app_at(&dir, Some(&loc));
    assert!(app.entries().is_empty());

    let mut other = SqliteStore::open(dir.path().join("neonlibrary.db")).unwrap();
    other
        .set("library-shared", r#"[{"title":"T","url":"u","id":1}]"#)
        .unwrap();

    app.reload();
    assert_eq!(app.entries().len(), 1);
}

#[test]
fn language_setting_applies_immediately() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(&dir, None);
    assert_eq!(app.page_view(Instant::now()).i18n.t("app.title", None), "Biblioteca Neon");

    app.set_setting("general.language", json!("en")).unwrap();
    assert_eq!(app.settings().general.language, "en");
    let title = app.localization_engine.t("app.title", None);
    assert_eq!(title, "Neon Library");
}

#[test]
fn site_a_survives_reload_with_same_id() {
    let dir = TempDir::new().unwrap();
    let loc = page("neon://localhost/library?id=siteA");

    let mut app = app_at(&dir, Some(&loc));
    let added = app
        .add_entry(&draft("Site A", "https://a.com", "", Category::Metas))
        .unwrap();
    assert_eq!(app.entries().len(), 1);
    drop(app);

    let reopened = app_at(&dir, Some(&loc));
    assert_eq!(reopened.entries().len(), 1);
    let entry = &reopened.entries()[0];
    assert_eq!(entry.title, "Site A");
    assert_eq!(entry.url, "https://a.com");
    assert_eq!(entry.category, Category::Metas);
    assert_eq!(entry.id, added.id);
}

#[test]
fn unsupported_language_is_rejected_without_saving() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(&dir, None);
    app.set_setting("general.language", json!("en")).unwrap();
    let settings_path = dir.path().join("settings.json");
    let on_disk = std::fs::read_to_string(&settings_path).unwrap();

    let err = app.set_setting("general.language", json!("fr")).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert!(err.to_string().contains("Unsupported locale: fr"));

    assert_eq!(app.settings().general.language, "en");
    assert_eq!(app.localization_engine.get_locale(), "en");
    assert_eq!(std::fs::read_to_string(&settings_path).unwrap(), on_disk);

    assert!(matches!(
        app.set_setting("general.language", json!(7)),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(app.settings().general.language, "en");
}
