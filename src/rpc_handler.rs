//! RPC method handler for the Neon Library JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the `App`; clipboard writes
//! and url opening go through the `host`, which the server turns into event
//! lines for the embedding process.

use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::filter_engine::CategoryGroup;
use crate::services::navigator::Navigator;
use crate::services::share_service::Clipboard;
use crate::types::category::Category;
use crate::types::entry::{Draft, DraftField, EntryId};
use crate::types::errors::LibraryError;
use crate::ui::render;

fn param_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn param_id(params: &Value) -> Result<EntryId, String> {
    params
        .get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "missing id".to_string())
}

fn groups_json(groups: &[CategoryGroup]) -> Value {
    let arr: Vec<Value> = groups
        .iter()
        .map(|g| {
            json!({
                "category": g.category,
                "label": g.category.label(),
                "entries": g.entries,
            })
        })
        .collect();
    json!(arr)
}

/// Builds a draft from `entry.add` params, filling unset fields with defaults.
fn draft_from_params(app: &App, params: &Value) -> Result<Draft, String> {
    let mut draft = Draft::with_color(&app.settings().appearance.default_color);
    if let Some(title) = param_str(params, "title") {
        draft.title = title.to_string();
    }
    if let Some(url) = param_str(params, "url") {
        draft.url = url.to_string();
    }
    if let Some(description) = param_str(params, "description") {
        draft.description = description.to_string();
    }
    if let Some(color) = param_str(params, "color") {
        draft.color = color.to_string();
    }
    if let Some(category) = param_str(params, "category") {
        draft.category = category.parse::<Category>()?;
    }
    Ok(draft)
}

/// Snapshot of everything a host needs to draw the page itself.
fn view_json(app: &App, now: Instant) -> Value {
    json!({
        "id": app.library_id(),
        "search": app.search_term(),
        "groups": groups_json(&app.visible_groups()),
        "add_open": app.is_add_open(),
        "draft": app.draft(),
        "rejection": app.last_rejection().map(|r| r.to_string()),
        "detail_open": app.is_detail_open(),
        "selection": app.selection(),
        "notice": app.notice_visible(now),
    })
}

fn library_error(e: LibraryError) -> String {
    e.to_string()
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method<H>(app: &Mutex<App>, method: &str, params: &Value, host: &mut H) -> Result<Value, String>
where
    H: Clipboard + Navigator,
{
    let mut a = app.lock().map_err(|e| e.to_string())?;
    let now = Instant::now();
    a.tick(now);

    match method {
        // ─── Library ───
        "library.id" => Ok(json!({"id": a.library_id()})),
        "library.view" => Ok(view_json(&a, now)),
        "library.render" => {
            let html = render::render_document(&a.page_view(now));
            Ok(json!({"html": html}))
        }
        "library.reload" => {
            a.reload();
            Ok(json!({"count": a.entries().len()}))
        }
        "categories.list" => {
            let arr: Vec<Value> = Category::ALL
                .iter()
                .map(|c| json!({"name": c, "label": c.label()}))
                .collect();
            Ok(json!(arr))
        }

        // ─── Search ───
        "search.set" => {
            let term = param_str(params, "term").unwrap_or("");
            a.set_search(term);
            Ok(json!({"count": a.visible_entries().len()}))
        }

        // ─── Entries ───
        "entry.add" => {
            let draft = draft_from_params(&a, params)?;
            let entry = a.add_entry(&draft).map_err(library_error)?;
            Ok(json!(entry))
        }
        "entry.remove" => {
            let id = param_id(params)?;
            let removed = a.remove_entry(id).map_err(library_error)?;
            Ok(json!({"removed": removed.is_some()}))
        }
        "entry.list" => Ok(json!(a.visible_entries())),
        "entry.grouped" => Ok(groups_json(&a.visible_groups())),

        // ─── Add modal ───
        "draft.open" => {
            a.open_add();
            Ok(json!({"ok": true}))
        }
        "draft.close" => {
            a.close_add();
            Ok(json!({"ok": true}))
        }
        "draft.update" => {
            let field: DraftField =
                serde_json::from_value(params.clone()).map_err(|e| format!("invalid draft field: {}", e))?;
            a.update_draft(field);
            Ok(json!(a.draft()))
        }
        "draft.save" => {
            let entry = a.save_draft().map_err(library_error)?;
            Ok(json!(entry))
        }

        // ─── Detail modal ───
        "detail.open" => {
            let id = param_id(params)?;
            a.open_detail(id).map_err(library_error)?;
            Ok(json!(a.selection()))
        }
        "detail.close" => {
            a.close_detail();
            Ok(json!({"ok": true}))
        }
        "detail.visit" => {
            let opened = a.visit_selection(host).map_err(|e| e.to_string())?;
            Ok(json!({"opened": opened}))
        }

        // ─── Sharing ───
        "share.create" => {
            let url = a.share(host, now).map_err(|e| e.to_string())?;
            Ok(json!({"url": url, "notice": a.notice_visible(now)}))
        }

        // ─── Settings ───
        "settings.get" => serde_json::to_value(a.settings()).map_err(|e| e.to_string()),
        "settings.set" => {
            let key = param_str(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
