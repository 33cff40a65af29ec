// src/run/mod.rs

//! Process execution layer.
//!
//! Spawns the resolved executable with `tokio::process::Command`, fans its
//! stdout/stderr into independent reader tasks, and funnels their lines over
//! an mpsc channel into the caller's `OutputSink` in real time.
//!
//! - [`invocation`] holds the immutable description of one process run.
//! - [`line_buffer`] owns the per-stream chunk accumulation.
//! - [`sink`] is the seam to the hosting presentation layer.
//!
//! Ordering guarantees: lines from one stream arrive in stream order;
//! stdout and stderr are not ordered relative to each other; every byte the
//! child writes ends up in some sink line, with trailing partial lines
//! flushed at exit.

pub mod invocation;
pub mod line_buffer;
pub mod sink;

pub use invocation::Invocation;
pub use line_buffer::LineBuffer;
pub use sink::{OutputSink, TerminalSink};

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::errors::{HookrunError, Result};

/// Which child stream a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// Events emitted by the per-stream reader tasks.
#[derive(Debug)]
enum StreamEvent {
    /// A complete, newline-terminated line (without the newline).
    Line(StreamKind, String),
    /// The terminal flush of a stream's buffered fragment, possibly empty.
    /// Sent exactly once per stream, after EOF or a read fault.
    Flush(StreamKind, String),
    /// Read error on the stream after a successful spawn.
    Fault(StreamKind, std::io::Error),
}

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Code(i32),
    /// Terminated by a signal (no exit code available).
    Signal,
}

impl ExitKind {
    pub fn success(self) -> bool {
        matches!(self, ExitKind::Code(0))
    }
}

/// Outcome of one invocation, produced exactly once at process exit.
#[derive(Debug)]
pub struct RunReport {
    pub exit: ExitKind,
    /// The last non-empty fragment flushed at stream end, if any.
    pub tail: Option<String>,
    /// True when an I/O error occurred on a child stream after spawn.
    pub stream_fault: bool,
    /// Whether the sink was left open for inspection.
    pub sink_kept_open: bool,
}

impl RunReport {
    /// A run counts as failed on any non-zero exit, signal termination, or
    /// stream read fault. Specific exit codes are not interpreted.
    pub fn failed(&self) -> bool {
        !self.exit.success() || self.stream_fault
    }
}

/// Lifecycle of one invocation. `Exited` is terminal; `Streaming` is never
/// skipped, even for a child that exits before producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Spawned,
    Streaming,
    Exited,
}

/// Execute `invocation`, streaming its output into `sink`.
///
/// The sink is opened with a header line naming the executable before the
/// child is spawned, so the user sees progress immediately. On exit code 0
/// the sink is closed; on non-zero exit, signal termination, or stream
/// fault it is left open so the failure output can be inspected. The run is
/// never retried.
pub async fn run<S: OutputSink>(invocation: Invocation, sink: &mut S) -> Result<RunReport> {
    let mut phase = Phase::Created;
    debug!(?phase, title = %invocation.title(), "opening sink");
    sink.open(&invocation.title());

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .current_dir(&invocation.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    // Deliberately no kill_on_drop: a host discarding the sink must not
    // take the child down with it.
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            error!(program = ?invocation.program, error = %source, "spawn failed");
            sink.write_line(&format!(
                "failed to start {}: {source}",
                invocation.program.display()
            ));
            // Sink stays open, like any other failing run.
            return Err(HookrunError::SpawnFailed {
                program: invocation.program,
                source,
            });
        }
    };
    phase = Phase::Spawned;
    info!(?phase, program = ?invocation.program, pid = child.id(), "child process spawned");

    let (tx, mut rx) = mpsc::channel::<StreamEvent>(64);

    if let Some(stdout) = child.stdout.take() {
        spawn_stream_reader(StreamKind::Stdout, stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_stream_reader(StreamKind::Stderr, stderr, tx.clone());
    }
    // The reader tasks hold the only remaining senders; the channel closes
    // once both streams have flushed.
    drop(tx);

    phase = Phase::Streaming;
    debug!(?phase, "draining child output");

    let mut tail: Option<String> = None;
    let mut stream_fault = false;

    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::Line(_, line) => sink.write_line(&line),
            StreamEvent::Flush(kind, fragment) => {
                debug!(stream = ?kind, "terminal flush");
                if !fragment.is_empty() {
                    tail = Some(fragment.clone());
                }
                sink.write_line(&fragment);
            }
            StreamEvent::Fault(kind, err) => {
                warn!(stream = ?kind, error = %err, "read fault on child stream");
                stream_fault = true;
            }
        }
    }

    // Both pipes have flushed, so the child has exited or is about to.
    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for {}", invocation.program.display()))?;
    phase = Phase::Exited;

    let exit = match status.code() {
        Some(code) => ExitKind::Code(code),
        None => ExitKind::Signal,
    };
    info!(?phase, ?exit, stream_fault, "child process exited");

    let keep_open = !exit.success() || stream_fault;
    if !keep_open {
        sink.close();
    }

    Ok(RunReport {
        exit,
        tail,
        stream_fault,
        sink_kept_open: keep_open,
    })
}

/// Reader task for one child stream.
///
/// Owns its `LineBuffer` exclusively; emits complete lines as soon as a
/// chunk closes them and always ends with a single `Flush` event carrying
/// the trailing fragment.
fn spawn_stream_reader<R>(kind: StreamKind, mut reader: R, tx: mpsc::Sender<StreamEvent>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buffer = LineBuffer::new();
        let mut chunk = [0u8; 8192];

        loop {
            match reader.read(&mut chunk).await {
                Ok(0) => break,
                Ok(n) => {
                    for line in buffer.extend(&chunk[..n]) {
                        if tx.send(StreamEvent::Line(kind, line)).await.is_err() {
                            // Receiver gone; nothing left to deliver to.
                            return;
                        }
                    }
                }
                Err(err) => {
                    let _ = tx.send(StreamEvent::Fault(kind, err)).await;
                    break;
                }
            }
        }

        let _ = tx
            .send(StreamEvent::Flush(kind, buffer.take_remainder()))
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context as TaskContext, Poll};

    use tokio::io::ReadBuf;

    /// Reader that yields its queued chunks, then fails with an I/O error
    /// instead of a clean EOF.
    struct FailingReader {
        pending: VecDeque<Vec<u8>>,
    }

    impl FailingReader {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                pending: chunks.iter().map(|c| c.to_vec()).collect(),
            }
        }
    }

    impl AsyncRead for FailingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut TaskContext<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            let this = self.get_mut();
            match this.pending.pop_front() {
                Some(chunk) => {
                    buf.put_slice(&chunk);
                    Poll::Ready(Ok(()))
                }
                None => Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe))),
            }
        }
    }

    #[tokio::test]
    async fn read_fault_still_flushes_buffered_remainder() {
        let reader = FailingReader::new(&[b"done\npart"]);
        let (tx, mut rx) = mpsc::channel(8);
        spawn_stream_reader(StreamKind::Stdout, reader, tx);

        let mut lines = Vec::new();
        let mut faulted = false;
        let mut flush = None;
        while let Some(event) = rx.recv().await {
            match event {
                StreamEvent::Line(_, line) => lines.push(line),
                StreamEvent::Fault(_, _) => faulted = true,
                StreamEvent::Flush(_, fragment) => flush = Some(fragment),
            }
        }

        assert_eq!(lines, vec!["done".to_string()]);
        assert!(faulted, "read error must surface as a fault event");
        assert_eq!(flush.as_deref(), Some("part"));
    }

    #[tokio::test]
    async fn fault_on_empty_stream_still_sends_terminal_flush() {
        let reader = FailingReader::new(&[]);
        let (tx, mut rx) = mpsc::channel(8);
        spawn_stream_reader(StreamKind::Stderr, reader, tx);

        let mut faulted = false;
        let mut flush = None;
        while let Some(event) = rx.recv().await {
            match event {
                StreamEvent::Line(_, line) => panic!("unexpected line {line:?}"),
                StreamEvent::Fault(_, _) => faulted = true,
                StreamEvent::Flush(_, fragment) => flush = Some(fragment),
            }
        }

        assert!(faulted);
        assert_eq!(flush.as_deref(), Some(""));
    }

    #[test]
    fn stream_fault_marks_run_failed_even_on_exit_zero() {
        let report = RunReport {
            exit: ExitKind::Code(0),
            tail: None,
            stream_fault: true,
            sink_kept_open: true,
        };
        assert!(report.failed());
    }
}
