//! Turning chunk sources into ordered item sequences.
//!
//! Each chunk is split into records and every record is parsed on its own;
//! nothing carries over from one chunk to the next. Sources whose chunk
//! boundaries may fall inside a record should be re-framed first with
//! [`SseBufferedStream`](crate::sse::SseBufferedStream).
use crate::accumulator::accumulate;
use crate::event::SseItem;
use crate::field::parse_fields;
use crate::filter::admit;
use crate::record::split_records;
use futures_util::Stream;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, trace};

/// Parse one raw record into at most one item.
pub fn parse_record(record: &str) -> Option<SseItem> {
    admit(accumulate(parse_fields(record)))
}

/// Parse every record of `chunk`, in textual order.
pub fn parse_chunk(chunk: &str) -> Vec<SseItem> {
    let records = split_records(chunk);
    let items: Vec<_> = records.iter().copied().filter_map(parse_record).collect();
    trace!(
        records = records.len(),
        items = items.len(),
        "parsed chunk"
    );
    items
}

/// A lazy, single-pass iterator of items over a sequence of text chunks.
///
/// A chunk is only pulled from the source once every item of the previous
/// chunk has been yielded.
pub struct SseIter<I> {
    chunks: I,
    pending: VecDeque<SseItem>,
}

impl<I> SseIter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(chunks: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            chunks: chunks.into_iter(),
            pending: VecDeque::new(),
        }
    }

    /// Consume the rest of the source, returning the remaining items in
    /// emission order.
    pub fn drain(self) -> Vec<SseItem> {
        self.collect()
    }
}

impl<I> Iterator for SseIter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = SseItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            let chunk = self.chunks.next()?;
            self.pending.extend(parse_chunk(chunk.as_ref()));
        }
    }
}

/// A stream of items over a transport stream of byte chunks.
///
/// Chunks are decoded as UTF-8, replacing invalid sequences. Transport errors
/// are yielded as they arrive, after every item of the chunks before them.
pub struct EventStream<S> {
    inner: S,
    pending: VecDeque<SseItem>,
}

impl<S> EventStream<S> {
    /// Wrap a transport stream.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }
}

impl<S, B, E> Stream for EventStream<S>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
{
    type Item = Result<SseItem, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    let text = String::from_utf8_lossy(chunk.as_ref());
                    this.pending.extend(parse_chunk(&text));
                }
                Poll::Ready(Some(Err(e))) => {
                    debug!("transport error in event stream");
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
