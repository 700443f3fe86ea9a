// SPDX-License-Identifier: MIT

//! Message log implementation.

use crate::message::{Message, Severity};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

/// Append-only log of diagnostic messages.
///
/// Ordering is preserved, messages are never read back by the writer side,
/// and clones share the same underlying buffer.
pub struct MessageLog {
    messages: Arc<Mutex<Vec<Message>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl MessageLog {
    /// Create a new in-memory message log
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a message log that also mirrors to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Append one message
    pub fn emit(&self, severity: Severity, text: impl Into<String>) {
        let mut messages = self.messages.lock();
        let message = Message {
            seq: messages.len() as u64,
            severity,
            text: text.into(),
        };
        messages.push(message.clone());

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&message) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all messages in emission order
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    /// Get the last N messages
    pub fn last(&self, n: usize) -> Vec<Message> {
        let all = self.messages.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count messages matching a predicate
    pub fn count<F: Fn(&Message) -> bool>(&self, pred: F) -> usize {
        self.messages.lock().iter().filter(|m| pred(m)).count()
    }

    /// Find messages whose text contains a pattern
    pub fn find(&self, pattern: &str) -> Vec<Message> {
        self.messages
            .lock()
            .iter()
            .filter(|m| m.text.contains(pattern))
            .cloned()
            .collect()
    }

    /// Get only the error-severity messages
    pub fn errors(&self) -> Vec<Message> {
        self.messages
            .lock()
            .iter()
            .filter(|m| m.severity.is_error())
            .cloned()
            .collect()
    }

    /// Get the total number of messages
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Clear all messages
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MessageLog {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
