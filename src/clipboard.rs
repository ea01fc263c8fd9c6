//! Clipboard access for copying rewritten problems.
//!
//! The system clipboard is reached through whichever platform tool is
//! installed. Tests substitute [`ClipboardWriter`] with a mock.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors raised while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// None of the known clipboard tools is installed.
    #[error("no clipboard tool found (tried {tried})")]
    Unavailable {
        /// Comma-separated list of tools that were tried.
        tried: String,
    },

    /// A clipboard tool exists but could not be started.
    #[error("failed to start {tool}: {message}")]
    Spawn {
        /// Tool name.
        tool: String,
        /// OS error detail.
        message: String,
    },

    /// Writing the text to the tool's stdin failed.
    #[error("failed to send text to {tool}: {message}")]
    Write {
        /// Tool name.
        tool: String,
        /// OS error detail.
        message: String,
    },

    /// The tool exited unsuccessfully.
    #[error("{tool} exited with {status}")]
    Failed {
        /// Tool name.
        tool: String,
        /// Exit status description.
        status: String,
    },
}

/// Capability to place text on the system clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter: Send + Sync + std::fmt::Debug {
    /// Copies `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the text could not be copied.
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard command line: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    program: String,
    args: Vec<String>,
}

impl ClipboardTool {
    /// Creates a tool description.
    #[must_use]
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
        }
    }
}

/// Clipboard writer that pipes text into the first available platform tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_tools(vec![
            ClipboardTool::new("pbcopy", &[]),
            ClipboardTool::new("wl-copy", &[]),
            ClipboardTool::new("xclip", &["-selection", "clipboard"]),
            ClipboardTool::new("xsel", &["--clipboard", "--input"]),
            ClipboardTool::new("clip.exe", &[]),
        ])
    }
}

impl SystemClipboard {
    /// Creates a writer that tries `tools` in order.
    #[must_use]
    pub const fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    fn try_tool(tool: &ClipboardTool, text: &str) -> Result<Option<()>, ClipboardError> {
        let spawned = Command::new(tool.program.as_str())
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(ClipboardError::Spawn {
                    tool: tool.program.clone(),
                    message: error.to_string(),
                });
            }
        };

        let write_result = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("stdin was not captured"))
            .and_then(|mut stdin| stdin.write_all(text.as_bytes()));

        if let Err(error) = write_result {
            let _kill_ignored = child.kill();
            let _wait_ignored = child.wait();
            return Err(ClipboardError::Write {
                tool: tool.program.clone(),
                message: error.to_string(),
            });
        }

        let status = child.wait().map_err(|error| ClipboardError::Write {
            tool: tool.program.clone(),
            message: error.to_string(),
        })?;

        if status.success() {
            Ok(Some(()))
        } else {
            Err(ClipboardError::Failed {
                tool: tool.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        for tool in &self.tools {
            if Self::try_tool(tool, text)?.is_some() {
                tracing::debug!(tool = tool.program.as_str(), "copied text to clipboard");
                return Ok(());
            }
        }

        let tried = self
            .tools
            .iter()
            .map(|tool| tool.program.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ClipboardError::Unavailable { tried })
    }
}

/// Clipboard writer that keeps copied text in memory.
///
/// Used by behavioural tests in place of the system clipboard.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copies: std::sync::Mutex<Vec<String>>,
    failure: Option<ClipboardError>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingClipboard {
    /// Creates a clipboard that fails every copy with `error`.
    #[must_use]
    pub fn failing(error: ClipboardError) -> Self {
        Self {
            copies: std::sync::Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Returns every text copied so far.
    #[must_use]
    pub fn copies(&self) -> Vec<String> {
        self.copies
            .lock()
            .map(|copies| copies.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ClipboardWriter for RecordingClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if let Ok(mut copies) = self.copies.lock() {
            copies.push(text.to_owned());
        }
        Ok(())
    }
}
