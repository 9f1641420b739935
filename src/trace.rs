//! Append-only trace sinks for audit/debugging.
//!
//! Every message appended to a [`ConversationLog`](crate::message::ConversationLog)
//! is also emitted as one `"{role}: {content}"` line to the attached sink.
//! Writing is best-effort: a failing sink is logged and never aborts the loop.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

pub trait TraceSink: Send {
    fn record(&mut self, role: &str, content: &str) -> io::Result<()>;
}

/// Trace sink backed by an append-mode file.
pub struct FileTrace {
    file: File,
}

impl FileTrace {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl TraceSink for FileTrace {
    fn record(&mut self, role: &str, content: &str) -> io::Result<()> {
        writeln!(self.file, "{role}: {content}")
    }
}

/// In-memory trace sink. Clones share the same line buffer, so a caller can
/// keep a handle and inspect the lines after the agent run.
#[derive(Clone, Default)]
pub struct MemoryTrace {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TraceSink for MemoryTrace {
    fn record(&mut self, role: &str, content: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("{role}: {content}"));
        Ok(())
    }
}
