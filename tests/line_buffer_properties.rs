// tests/line_buffer_properties.rs

use hookrun::run::LineBuffer;
use proptest::prelude::*;

/// Feed every chunk through a `LineBuffer` and collect what a sink would
/// receive: the drained lines plus the terminal flush.
fn deliver(chunks: &[Vec<u8>]) -> Vec<String> {
    let mut buffer = LineBuffer::new();
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend(buffer.extend(chunk));
    }
    out.push(buffer.take_remainder());
    out
}

/// The reference result: split the concatenated bytes on `\n`, decoding
/// each segment on its own.
fn reference(concat: &[u8]) -> Vec<String> {
    concat
        .split(|&b| b == b'\n')
        .map(|segment| String::from_utf8_lossy(segment).into_owned())
        .collect()
}

proptest! {
    /// Chunk boundaries (including mid-UTF-8 and empty chunks) never change
    /// which lines come out.
    #[test]
    fn chunking_never_changes_delivered_lines(
        chunks in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 0..64),
            0..16,
        )
    ) {
        let concat: Vec<u8> = chunks.concat();
        prop_assert_eq!(deliver(&chunks), reference(&concat));
    }
}

#[test]
fn complete_lines_are_drained_immediately() {
    let mut buffer = LineBuffer::new();
    assert_eq!(buffer.extend(b"line1\nli"), vec!["line1".to_string()]);
    assert_eq!(buffer.extend(b"ne2\npartial"), vec!["line2".to_string()]);
    assert_eq!(buffer.take_remainder(), "partial");
}

#[test]
fn empty_chunks_produce_nothing() {
    let mut buffer = LineBuffer::new();
    assert!(buffer.extend(b"").is_empty());
    assert!(buffer.extend(b"abc").is_empty());
    assert!(buffer.extend(b"").is_empty());
    assert_eq!(buffer.take_remainder(), "abc");
}

#[test]
fn utf8_sequence_split_across_chunks_decodes_cleanly() {
    let bytes = "héllo\n".as_bytes();
    let mut buffer = LineBuffer::new();
    // Split inside the two-byte `é`.
    assert!(buffer.extend(&bytes[..2]).is_empty());
    assert_eq!(buffer.extend(&bytes[2..]), vec!["héllo".to_string()]);
    assert_eq!(buffer.take_remainder(), "");
}

#[test]
fn remainder_is_empty_after_newline_terminated_input() {
    let mut buffer = LineBuffer::new();
    assert_eq!(
        buffer.extend(b"a\nb\n"),
        vec!["a".to_string(), "b".to_string()]
    );
    assert_eq!(buffer.take_remainder(), "");
}
