#![allow(dead_code)]

use hookrun::run::OutputSink;

/// Sink that records everything for assertions.
///
/// Tracks open/closed state the way a real display would, including the
/// contract that writes after `close()` are dropped rather than errored.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub title: Option<String>,
    pub lines: Vec<String>,
    pub open: bool,
    /// Count of lines written after `close()` (contract says: dropped).
    pub dropped: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded lines with empty terminal flushes filtered out, for
    /// assertions that don't care which stream EOF'd last.
    pub fn non_empty_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.as_str())
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn open(&mut self, title: &str) {
        self.open = true;
        self.title = Some(title.to_string());
    }

    fn write_line(&mut self, line: &str) {
        if self.open {
            self.lines.push(line.to_string());
        } else {
            self.dropped += 1;
        }
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
