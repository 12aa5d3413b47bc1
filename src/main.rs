//! Neon Library: organize, search and share your bookmarked sites.
//!
//! Entry point: opens the library window. When built without the `gui`
//! feature, prints the library to the console instead.

use clap::Parser;

use neonlibrary::cli::{self, Cli};

fn main() {
    let args = Cli::parse();
    cli::init_tracing();

    let app = match cli::build_app(&args) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize library");
            std::process::exit(1);
        }
    };

    run(app);
}

#[cfg(feature = "gui")]
fn run(app: neonlibrary::app::App) {
    neonlibrary::ui::webview_app::run(app);
}

#[cfg(not(feature = "gui"))]
fn run(app: neonlibrary::app::App) {
    use neonlibrary::services::localization_engine::LocalizationEngineTrait;

    let i18n = &app.localization_engine;
    println!();
    println!("  {} v{}", i18n.t("app.title", None), env!("CARGO_PKG_VERSION"));
    match app.share_url() {
        Ok(link) => println!("  {}: {}", i18n.t("header.share", None), link),
        Err(e) => tracing::warn!(error = %e, "invalid share base url"),
    }
    println!();

    for group in app.visible_groups() {
        println!("── {} ({})", group.category.label(), group.entries.len());
        for entry in &group.entries {
            println!("   {}  {}  {}", entry.id, entry.title, entry.url);
        }
    }
    println!();
}
