// src/run/line_buffer.rs

//! Per-stream accumulation buffer for chunked child output.
//!
//! Each reader task owns exactly one `LineBuffer`; nothing is shared across
//! the stdout/stderr boundary. The contract: concatenating every chunk fed
//! to `extend` and splitting on `\n` yields exactly the lines returned,
//! with `take_remainder` as the final (possibly empty) fragment. Chunk
//! boundaries may fall anywhere, including inside a multi-byte UTF-8
//! sequence; decoding happens per complete line only.

/// Byte accumulator that yields complete lines as chunks arrive.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete line it closes.
    ///
    /// The fragment after the last newline stays buffered, so a line is
    /// never split across two sink writes.
    pub fn extend(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop(); // drop the newline itself
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        lines
    }

    /// Drain whatever is left as the final, non-newline-terminated fragment.
    ///
    /// Always produces a value, empty when nothing was pending: the terminal
    /// flush happens exactly once per stream, even for a child that exits
    /// without output.
    pub fn take_remainder(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buf);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
