//! Replaying a recorded SSE capture through the parser.
//!
//! A capture is the raw body of an `text/event-stream` response. It is cut
//! into fixed-size chunks to imitate transport delivery, optionally re-framed
//! on record boundaries, and parsed into items that are written out as JSON
//! lines.
use crate::errors::ReplayError;
use crate::event::SseItem;
use crate::sse::SseBufferedStream;
use crate::stream::EventStream;
use bytes::Bytes;
use futures_util::{Stream, StreamExt, stream};
use std::convert::Infallible;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

/// Read a capture from `path`, or from stdin when no path is given.
#[instrument]
pub async fn read_capture(path: Option<&Path>) -> Result<Vec<u8>, ReplayError> {
    match path {
        Some(path) => tokio::fs::read(path)
            .await
            .map_err(|source| ReplayError::ReadFile {
                path: path.to_path_buf(),
                source,
            }),
        None => read_all(tokio::io::stdin()).await,
    }
}

async fn read_all(mut reader: impl AsyncRead + Unpin) -> Result<Vec<u8>, ReplayError> {
    let mut capture = Vec::new();
    reader
        .read_to_end(&mut capture)
        .await
        .map_err(ReplayError::ReadStdin)?;
    Ok(capture)
}

/// Cut a capture into chunks of `chunk_size` bytes. A size of 0 keeps the
/// whole capture as one chunk.
pub fn chunk_capture(capture: Vec<u8>, chunk_size: usize) -> Vec<Bytes> {
    let mut capture = Bytes::from(capture);
    if chunk_size == 0 {
        return vec![capture];
    }

    let mut chunks = Vec::with_capacity(capture.len().div_ceil(chunk_size));
    while !capture.is_empty() {
        let at = chunk_size.min(capture.len());
        chunks.push(capture.split_to(at));
    }
    chunks
}

/// Parse `chunks` in order, re-framing them on record boundaries first when
/// `buffered` is set.
pub async fn replay(chunks: Vec<Bytes>, buffered: bool) -> Vec<SseItem> {
    debug!(chunks = chunks.len(), buffered, "replaying capture");
    let transport = stream::iter(chunks.into_iter().map(Ok::<_, Infallible>));

    if buffered {
        collect_items(EventStream::new(SseBufferedStream::new(transport))).await
    } else {
        collect_items(EventStream::new(transport)).await
    }
}

async fn collect_items(items: impl Stream<Item = Result<SseItem, Infallible>>) -> Vec<SseItem> {
    items
        .map(|item| item.unwrap_or_else(|never| match never {}))
        .collect()
        .await
}

/// Write one JSON document per item, each followed by a newline.
pub async fn write_items(
    out: &mut (impl AsyncWrite + Unpin),
    items: &[SseItem],
    pretty: bool,
) -> Result<(), ReplayError> {
    for item in items {
        let mut line = if pretty {
            serde_json::to_vec_pretty(item)?
        } else {
            serde_json::to_vec(item)?
        };
        line.push(b'\n');
        out.write_all(&line).await.map_err(ReplayError::Write)?;
    }
    out.flush().await.map_err(ReplayError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::StreamEvent;

    const CAPTURE: &[u8] = b"event: abc\ndata: def\nid: 1\n\ndata: ghi\n\n";

    #[test]
    fn test_chunk_capture_sizes() {
        let chunks = chunk_capture(b"abcdefg".to_vec(), 3);
        assert_eq!(chunks, vec!["abc", "def", "g"]);
        assert_eq!(chunk_capture(b"abc".to_vec(), 0), vec!["abc"]);
        assert!(chunk_capture(Vec::new(), 4).is_empty());
    }

    #[tokio::test]
    async fn test_replay_whole_capture() {
        let items = replay(chunk_capture(CAPTURE.to_vec(), 0), false).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], SseItem::from(StreamEvent::builder().data("ghi").build()));
    }

    #[tokio::test]
    async fn test_buffered_replay_survives_small_chunks() {
        let whole = replay(chunk_capture(CAPTURE.to_vec(), 0), false).await;
        let buffered = replay(chunk_capture(CAPTURE.to_vec(), 5), true).await;
        assert_eq!(buffered, whole);
    }

    #[tokio::test]
    async fn test_unbuffered_replay_misparses_straddling_records() {
        // Cut into "data: d" and "e\n\n"; the tail has no separator.
        let items = replay(chunk_capture(b"data: de\n\n".to_vec(), 7), false).await;
        assert_eq!(items, vec![SseItem::from(StreamEvent::builder().data("d").build())]);
    }

    #[tokio::test]
    async fn test_read_capture_missing_file() {
        let err = read_capture(Some(Path::new("/definitely/not/here.sse")))
            .await
            .unwrap_err();
        assert!(matches!(err, ReplayError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn test_read_all_from_reader() {
        let capture = read_all(CAPTURE).await.unwrap();
        assert_eq!(capture, CAPTURE);
    }

    #[tokio::test]
    async fn test_write_items_json_lines() {
        let items = vec![
            SseItem::from(StreamEvent::builder().data("def").build()),
            SseItem::Retry(crate::event::SetRetryInterval::new(5)),
        ];
        let mut out = Vec::new();
        write_items(&mut out, &items, false).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"kind\":\"event\",\"type\":\"message\",\"data\":\"def\"}\n\
             {\"kind\":\"retry\",\"milliseconds\":5}\n"
        );
    }
}
