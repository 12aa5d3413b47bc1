//! Unit tests for the HTML page renderer.

use neonlibrary::services::filter_engine::group;
use neonlibrary::services::localization_engine::LocalizationEngine;
use neonlibrary::types::category::Category;
use neonlibrary::types::entry::{Draft, Entry};
use neonlibrary::types::errors::AddRejection;
use neonlibrary::ui::render::{
    html_escape, render_add_modal, render_detail_modal, render_document, render_dynamic,
    render_section, render_tile, PageView, DYNAMIC_REGION_ID,
};

fn entry(id: i64, title: &str, category: Category) -> Entry {
    Entry {
        title: title.to_string(),
        url: "https://site.example".to_string(),
        description: String::new(),
        color: "#FF0066".to_string(),
        category,
        id,
    }
}

fn view<'a>(i18n: &'a LocalizationEngine, entries: &'a [Entry]) -> PageView<'a> {
    PageView {
        i18n,
        search_term: "",
        groups: group(entries),
        notice_visible: false,
        draft: None,
        rejection: None,
        detail: None,
    }
}

fn en() -> LocalizationEngine {
    LocalizationEngine::for_language("en").unwrap()
}

#[test]
fn escapes_html_special_characters() {
    assert_eq!(
        html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn document_has_header_controls_and_region() {
    let i18n = en();
    let html = render_document(&view(&i18n, &[]));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Neon Library"));
    assert!(html.contains("id=\"search\""));
    assert!(html.contains("id=\"share\""));
    assert!(html.contains("id=\"open-add\""));
    assert!(html.contains(&format!("<div id=\"{}\">", DYNAMIC_REGION_ID)));
}

#[test]
fn every_category_section_is_rendered() {
    let i18n = en();
    let html = render_dynamic(&view(&i18n, &[]));
    for category in Category::ALL {
        assert!(html.contains(&format!("data-category=\"{}\"", category.as_str())));
        assert!(html.contains(&category.label()));
    }
    assert!(html.contains("0 sites"));
}

#[test]
fn section_shows_count_and_tiles() {
    let i18n = en();
    let entries = vec![entry(1, "Zendesk", Category::Cs)];
    let groups = group(&entries);
    let html = render_section(&i18n, &groups[Category::Cs.index()]);
    assert!(html.contains("Cs"));
    assert!(html.contains("1 site"));
    assert!(html.contains("Zendesk"));
}

#[test]
fn tile_carries_color_glow_and_remove_button() {
    let html = render_tile(&entry(9, "<b>Bold</b>", Category::Metas));
    assert!(html.contains("background-color:#FF0066"));
    assert!(html.contains("box-shadow:0 0 10px #FF006640"));
    assert!(html.contains("data-action=\"remove\" data-id=\"9\""));
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn notice_only_when_visible() {
    let i18n = en();
    let mut v = view(&i18n, &[]);
    assert!(!render_dynamic(&v).contains("Link copied"));
    v.notice_visible = true;
    assert!(render_dynamic(&v).contains("Link copied to clipboard!"));
}

#[test]
fn add_modal_lists_categories_and_selects_draft_category() {
    let i18n = en();
    let draft = Draft {
        category: Category::Marketing,
        ..Draft::default()
    };
    let html = render_add_modal(&i18n, &draft, None);
    assert!(html.contains("id=\"add-modal\""));
    assert_eq!(html.matches("<option").count(), 8);
    assert!(html.contains("<option value=\"marketing\" selected>"));
    assert!(html.contains("value=\"#9333EA\""));
    assert!(!html.contains("class=\"error\""));
}

#[test]
fn add_modal_shows_rejection() {
    let i18n = en();
    let html = render_add_modal(&i18n, &Draft::default(), Some(AddRejection::MissingUrl));
    assert!(html.contains("Please enter a site URL."));
}

#[test]
fn detail_modal_placeholder_for_empty_description() {
    let i18n = en();
    let html = render_detail_modal(&i18n, &entry(1, "Canva", Category::Criativos));
    assert!(html.contains("id=\"detail-modal\""));
    assert!(html.contains("No description available."));
    assert!(html.contains("Criativos"));
    assert!(html.contains("Visit Site"));
}

#[test]
fn detail_modal_shows_description() {
    let i18n = en();
    let mut e = entry(1, "Canva", Category::Criativos);
    e.description = "Design tool".to_string();
    let html = render_detail_modal(&i18n, &e);
    assert!(html.contains("Design tool"));
    assert!(!html.contains("No description available."));
}

#[test]
fn open_modals_render_in_dynamic_region() {
    let i18n = en();
    let entries = vec![entry(1, "A", Category::Cs)];
    let draft = Draft::default();
    let mut v = view(&i18n, &entries);
    v.draft = Some(&draft);
    v.detail = Some(&entries[0]);
    let html = render_dynamic(&v);
    assert!(html.contains("id=\"add-modal\""));
    assert!(html.contains("id=\"detail-modal\""));
}
