// src/run/sink.rs

//! Output sink seam between the runner and the hosting presentation layer.
//!
//! The host owns presentation (terminal, editor pane, test buffer); the
//! runner owns content and timing. Production code uses [`TerminalSink`];
//! tests provide a recording implementation.

/// Append-only, ordered consumer of display lines.
///
/// Lifecycle is controlled by the runner: `open` before spawn, `close` only
/// after a successful run. Writes after `close()` must be dropped silently,
/// never errored, so a host discarding the display mid-run cannot fault the
/// invocation.
pub trait OutputSink: Send {
    /// Open the sink with a header identifying what is about to run.
    fn open(&mut self, title: &str);

    /// Append one display line.
    fn write_line(&mut self, line: &str);

    /// Dispose of the sink. Subsequent writes are dropped.
    fn close(&mut self);

    /// Whether the sink is still open for inspection.
    fn is_open(&self) -> bool;
}

/// Sink that prints to the hosting terminal.
#[derive(Debug, Default)]
pub struct TerminalSink {
    open: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for TerminalSink {
    fn open(&mut self, title: &str) {
        self.open = true;
        println!("> {title}");
    }

    fn write_line(&mut self, line: &str) {
        if self.open {
            println!("{line}");
        }
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
