//! Diagnostic comment log
//!
//! While messages are processed, every (path, leading comment) pair in
//! the source location table is recorded here as a debugging side
//! channel. The log is opened by the caller and passed down explicitly;
//! it closes when the value is dropped. Write failures are swallowed
//! since the channel is not part of the output contract.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use protodoc_common::Result;

/// Append-only sink for (path, comment) observations
pub struct CommentLog {
    out: Option<Box<dyn Write>>,
}

impl CommentLog {
    /// A sink that drops everything
    pub fn disabled() -> Self {
        Self { out: None }
    }

    /// Append to the file at `path`, creating it if needed
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(Box::new(file)))
    }

    /// Wrap an arbitrary writer
    pub fn from_writer(out: Box<dyn Write>) -> Self {
        Self { out: Some(out) }
    }

    /// Record one (path, comment) observation as a single line
    pub fn record(&mut self, path: &[i32], comment: Option<&str>) {
        if let Some(out) = self.out.as_mut() {
            let _ = writeln!(out, "{:?} - {}", path, comment.unwrap_or(""));
        }
    }
}
