//! Host collaborators: the system clipboard and the external URL opener.
//!
//! URLs open in the user's browser through `webbrowser`, which launches a separate
//! process that keeps no handle back to us. The clipboard is reached through the first
//! platform copy command that works.
use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

use log::debug;
use quote_common::{QuoteError, Result};

/// Write-only clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Opens URLs in a new, unlinked context.
pub trait Navigator {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Clipboard backed by the first available platform copy command.
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl SystemClipboard {
    fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(feed(&mut child, text)?.success())
    }
}

/// Writes `text` to the child's stdin and waits for it, even when the write fails.
fn feed(child: &mut Child, text: &str) -> io::Result<ExitStatus> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    Ok(status)
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        for (program, args) in COPY_COMMANDS {
            match Self::pipe_to(program, args, text) {
                Ok(true) => return Ok(()),
                Ok(false) => debug!("{} exited with failure", program),
                Err(e) => debug!("{} unavailable: {}", program, e),
            }
        }
        Err(QuoteError::Clipboard(
            "no working clipboard command found".to_string(),
        ))
    }
}

/// Navigator backed by the default browser.
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        webbrowser::open(url)
            .map_err(|e| QuoteError::Navigation(format!("cannot open {}: {}", url, e)))
    }
}
