//! Neon Library UI layer.
//!
//! `render` turns the app state into HTML and is always available (the RPC
//! server exposes it too). `webview_app` hosts that HTML in a `wry` webview:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! Communication between the Rust backend and the page uses wry IPC.

pub mod render;

#[cfg(feature = "gui")]
pub mod webview_app;
