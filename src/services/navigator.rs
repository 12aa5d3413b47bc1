//! Opening an entry's url outside the library page.

use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

use crate::platform;
use crate::types::errors::NavigationError;

/// Opens urls in a new top-level browsing context.
pub trait Navigator {
    fn open(&mut self, url: &str) -> Result<(), NavigationError>;
}

/// Hands urls to the desktop's default handler.
///
/// The url is passed through as-is; no scheme is refused.
#[derive(Debug, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&mut self, url: &str) -> Result<(), NavigationError> {
        let (program, args) = platform::opener_command(url);
        launch(program, &args).map(|_| ())
    }
}

/// Starts `program` and waits for it on a background thread so the exited
/// child is reaped. The returned handle yields its exit status.
pub(crate) fn launch(
    program: &str,
    args: &[String],
) -> Result<JoinHandle<Option<ExitStatus>>, NavigationError> {
    let mut child = Command::new(program)
        .args(args)
        .spawn()
        .map_err(|e| NavigationError::LaunchFailed(format!("{}: {}", program, e)))?;

    let name = program.to_string();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                tracing::warn!(program = %name, %status, "url opener exited with failure");
            }
            Some(status)
        }
        Err(e) => {
            tracing::warn!(program = %name, error = %e, "failed to wait for url opener");
            None
        }
    }))
}
