//! Desktop front end using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `neon://` custom protocol as one document
//!   built by [`render::render_document`].
//! - JS → Rust goes through `window.ipc.postMessage()` with a `cmd` field.
//! - Rust → JS re-renders the dynamic region via `window.__neon_render(html)`.
//! - The copy notice is expired by waking the event loop at its deadline.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::services::navigator::{Navigator, SystemNavigator};
use crate::types::category::Category;
use crate::types::entry::DraftField;
use crate::types::errors::ClipboardError;
use crate::ui::render;

#[derive(Debug)]
enum UserEvent {
    /// Re-render the dynamic region from current state.
    Render,
    EvalScript(String),
}

struct GuiState {
    app: App,
    navigator: SystemNavigator,
}

/// Wraps a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn render_script(app: &App) -> String {
    let html = render::render_dynamic(&app.page_view(Instant::now()));
    format!("window.__neon_render({});", js_string(&html))
}

/// Longest IPC message prefix written to the log, in characters.
const IPC_PREVIEW_CHARS: usize = 200;

/// The start of an IPC message for logging, cut on a character boundary.
fn ipc_preview(body: &str) -> &str {
    body.char_indices()
        .nth(IPC_PREVIEW_CHARS)
        .map_or(body, |(i, _)| &body[..i])
}

fn parse_draft_field(msg: &serde_json::Value) -> Option<DraftField> {
    let value = msg.get("value")?.as_str()?.to_string();
    match msg.get("field")?.as_str()? {
        "title" => Some(DraftField::Title(value)),
        "url" => Some(DraftField::Url(value)),
        "description" => Some(DraftField::Description(value)),
        "color" => Some(DraftField::Color(value)),
        "category" => value.parse::<Category>().ok().map(DraftField::Category),
        _ => None,
    }
}

/// The clipboard error reported by the page's `copy_failed` message.
fn copy_failure(msg: &serde_json::Value) -> ClipboardError {
    let reason = msg
        .get("error")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();
    if msg.get("unavailable").and_then(|v| v.as_bool()).unwrap_or(false) {
        ClipboardError::Unavailable(reason)
    } else {
        ClipboardError::WriteFailed(reason)
    }
}

// ─── IPC handler ───

fn handle_ipc(state: &mut GuiState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;
    let entry_id = || msg.get("id").and_then(|v| v.as_i64());

    match cmd {
        "search" => {
            let term = msg.get("term").and_then(|v| v.as_str()).unwrap_or("");
            state.app.set_search(term);
            Some(UserEvent::Render)
        }
        "open_add" => {
            state.app.open_add();
            Some(UserEvent::Render)
        }
        "close_add" => {
            state.app.close_add();
            Some(UserEvent::Render)
        }
        // Field edits are kept in the draft without re-rendering, so the
        // focused input keeps its caret.
        "draft" => {
            let field = parse_draft_field(&msg)?;
            state.app.update_draft(field);
            None
        }
        "save" => {
            if let Err(e) = state.app.save_draft() {
                tracing::debug!(error = %e, "draft not saved");
            }
            Some(UserEvent::Render)
        }
        "open_detail" => {
            if let Err(e) = state.app.open_detail(entry_id()?) {
                tracing::warn!(error = %e, "cannot open details");
            }
            Some(UserEvent::Render)
        }
        "close_detail" => {
            state.app.close_detail();
            Some(UserEvent::Render)
        }
        "remove" => {
            if let Err(e) = state.app.remove_entry(entry_id()?) {
                tracing::error!(error = %e, "failed to persist removal");
            }
            Some(UserEvent::Render)
        }
        "visit" => {
            let GuiState { app, navigator } = state;
            if let Err(e) = app.visit_selection(navigator as &mut dyn Navigator) {
                tracing::warn!(error = %e, "failed to open site");
            }
            None
        }
        // The page performs the clipboard write and reports back.
        "share" => match state.app.share_url() {
            Ok(link) => Some(UserEvent::EvalScript(format!(
                "window.__neon_copy({});",
                js_string(&link)
            ))),
            Err(e) => {
                tracing::error!(error = %e, "invalid share base url");
                None
            }
        },
        "copied" => {
            state.app.show_copy_notice(Instant::now());
            Some(UserEvent::Render)
        }
        "copy_failed" => {
            let err = copy_failure(&msg);
            tracing::warn!(error = %err, "failed to copy share link");
            None
        }
        _ => {
            tracing::debug!(cmd = %cmd, "unknown ipc command");
            None
        }
    }
}

/// Opens the library window and runs the event loop until it is closed.
pub fn run(app: App) {
    let title = {
        use crate::services::localization_engine::LocalizationEngineTrait;
        app.localization_engine.t("app.title", None)
    };
    let start_url = app
        .share_url()
        .unwrap_or_else(|_| app.settings().sharing.base_url.clone());
    let state = Arc::new(Mutex::new(GuiState {
        app,
        navigator: SystemNavigator,
    }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let page_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("neon".into(), move |_wv_id, _request| {
            let html = match page_state.lock() {
                Ok(s) => render::render_document(&s.app.page_view(Instant::now())),
                Err(_) => String::from("<!DOCTYPE html><html><body></body></html>"),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap_or_default()
        })
        .with_url(&start_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            tracing::trace!(message = %ipc_preview(body), bytes = body.len(), "ipc");
            let Ok(mut s) = ipc_state.lock() else {
                return;
            };
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(|url, _features| {
            tracing::debug!(url = %url, "blocked in-page window");
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        let Ok(mut s) = state.lock() else {
            *control_flow = ControlFlow::Exit;
            return;
        };

        if s.app.tick(Instant::now()) {
            let _ = webview.evaluate_script(&render_script(&s.app));
        }

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                tracing::info!("library window closed");
                *control_flow = ControlFlow::Exit;
                return;
            }
            Event::UserEvent(UserEvent::Render) => {
                let _ = webview.evaluate_script(&render_script(&s.app));
            }
            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }
            _ => {}
        }

        *control_flow = match s.app.notice_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}
