//! SSE record re-framing
//!
//! Transports hand over bytes wherever the network happened to split them, so
//! a record can start in one chunk and end in the next. This module provides a
//! stream wrapper that accumulates bytes and only forwards text that ends on a
//! record boundary (a blank line in any line-break convention), so that every
//! record reaches the parser whole.

use crate::patterns::is_record_break;
use bytes::{Bytes, BytesMut};
use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, warn};

/// Largest partial record held back before it is forwarded unframed.
pub const DEFAULT_MAX_BUFFER_BYTES: usize = 16 * 1024 * 1024; // 16 MiB

/// A stream wrapper that buffers SSE records until they are complete.
///
/// Each yielded chunk ends right after a record boundary and may hold several
/// records. Bytes after the last boundary stay buffered until more data
/// arrives, and are flushed as a final chunk when the inner stream ends.
///
/// A partial record that grows past the buffer limit is forwarded as it is,
/// and parses the same way an unbuffered chunk would.
pub struct SseBufferedStream<S> {
    inner: S,
    buffer: BytesMut,
    /// Offset up to which `buffer` is known to hold no boundary.
    scanned: usize,
    max_buffer_bytes: usize,
}

impl<S> SseBufferedStream<S> {
    /// Wrap an existing stream with SSE buffering.
    pub fn new(inner: S) -> Self {
        Self::with_max_buffer(inner, DEFAULT_MAX_BUFFER_BYTES)
    }

    /// Wrap an existing stream, holding back at most `max_buffer_bytes` of an
    /// incomplete record.
    pub fn with_max_buffer(inner: S, max_buffer_bytes: usize) -> Self {
        Self {
            inner,
            buffer: BytesMut::new(),
            scanned: 0,
            max_buffer_bytes,
        }
    }

    fn take_complete(&mut self) -> Option<Bytes> {
        let scan = scan_boundaries(&self.buffer, self.scanned);
        self.scanned = scan.resume;

        let end = scan.last?;
        let complete = self.buffer.split_to(end);
        self.scanned = self.scanned.saturating_sub(end);
        Some(complete.freeze())
    }

    fn take_all(&mut self) -> Bytes {
        self.scanned = 0;
        self.buffer.split().freeze()
    }
}

impl<S, E> Stream for SseBufferedStream<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
{
    type Item = Result<Bytes, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(complete) = this.take_complete() {
                return Poll::Ready(Some(Ok(complete)));
            }

            if this.buffer.len() > this.max_buffer_bytes {
                warn!(
                    bytes = this.buffer.len(),
                    limit = this.max_buffer_bytes,
                    "partial record exceeds buffer limit, forwarding unframed"
                );
                return Poll::Ready(Some(Ok(this.take_all())));
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    this.buffer.extend_from_slice(&chunk);
                }
                Poll::Ready(Some(Err(e))) => {
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    if this.buffer.is_empty() {
                        return Poll::Ready(None);
                    }
                    // May be an unterminated record, but nothing more is coming.
                    debug!(bytes = this.buffer.len(), "flushing trailing partial record");
                    return Poll::Ready(Some(Ok(this.take_all())));
                }
                Poll::Pending => {
                    return Poll::Pending;
                }
            }
        }
    }
}

/// Outcome of scanning a buffer for record boundaries.
#[derive(Debug, PartialEq, Eq)]
struct Scan {
    /// End of the last record boundary found, if any.
    last: Option<usize>,
    /// Where the next scan of the same buffer should start.
    resume: usize,
}

/// Scan `buf` from `from` for record boundaries.
///
/// A boundary is a run of `\r`/`\n` bytes holding at least two line breaks.
/// `from` must not fall inside a run. A run touching the end of the buffer
/// may still grow, so `resume` points back at its start.
fn scan_boundaries(buf: &[u8], from: usize) -> Scan {
    let is_break = |b: u8| matches!(b, b'\r' | b'\n');
    let mut last = None;
    let mut pos = from;

    while pos < buf.len() {
        if !is_break(buf[pos]) {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < buf.len() && is_break(buf[pos]) {
            pos += 1;
        }
        if is_record_break(&buf[start..pos]) {
            last = Some(pos);
        }
        if pos == buf.len() {
            return Scan { last, resume: start };
        }
    }

    Scan {
        last,
        resume: buf.len().max(from),
    }
}
