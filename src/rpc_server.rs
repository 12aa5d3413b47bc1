//! Neon Library RPC Server: JSON-RPC over stdin/stdout for embedding.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"entry.add", "params":{"title":"...","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Events:   {"event":"clipboard","text":"..."} and {"event":"open_url","url":"..."}
//!           ask the host to perform the side effect.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use clap::Parser;
use serde_json::{json, Value};

use neonlibrary::cli::{self, Cli};
use neonlibrary::rpc_handler::handle_method;
use neonlibrary::services::navigator::Navigator;
use neonlibrary::services::share_service::Clipboard;
use neonlibrary::types::errors::{ClipboardError, NavigationError};

/// Forwards side effects to the host process as event lines on stdout.
struct StdoutHost;

impl StdoutHost {
    fn emit(&self, event: Value) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", event)?;
        out.flush()
    }
}

impl Clipboard for StdoutHost {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.emit(json!({"event": "clipboard", "text": text}))
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

impl Navigator for StdoutHost {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        self.emit(json!({"event": "open_url", "url": url}))
            .map_err(|e| NavigationError::LaunchFailed(e.to_string()))
    }
}

fn respond(response: Value) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", response);
    let _ = out.flush();
}

fn main() {
    let args = Cli::parse();
    cli::init_tracing();

    let app = match cli::build_app(&args) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize library");
            std::process::exit(1);
        }
    };

    let library_id = app
        .lock()
        .map(|a| a.library_id().to_string())
        .unwrap_or_default();
    respond(json!({"event": "ready", "version": env!("CARGO_PKG_VERSION"), "id": library_id}));

    let mut host = StdoutHost;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        tracing::debug!(method = %method, "rpc request");
        let response = match handle_method(&app, method, &params, &mut host) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(response);
    }
}
