//! Eventfold - an incremental Server-Sent Events parser
//!
//! This library turns the text of a `text/event-stream` response, delivered in chunks, into
//! an ordered sequence of typed items: dispatchable [`StreamEvent`]s and [`SetRetryInterval`]
//! directives. Connection handling, reconnect scheduling and handler dispatch are left to the
//! caller.
//!
//! ```
//! use eventfold::{SseItem, SseIter, StreamEvent};
//!
//! let items = SseIter::new(["event: abc\ndata: def\nid: 1\n\ndata: ghi\n\n"]).drain();
//! assert_eq!(
//!     items,
//!     vec![
//!         SseItem::Event(StreamEvent::builder().event_type("abc").data("def").id("1").build()),
//!         SseItem::Event(StreamEvent::builder().data("ghi").build()),
//!     ]
//! );
//! ```

pub mod accumulator;
pub mod errors;
pub mod event;
pub mod field;
pub mod filter;
mod patterns;
pub mod record;
pub mod replay;
pub mod sse;
pub mod stream;

pub use accumulator::{Candidate, accumulate, coerce_retry};
pub use event::{DEFAULT_EVENT_TYPE, SetRetryInterval, SseItem, StreamEvent};
pub use field::{Field, classify_line, parse_fields};
pub use filter::admit;
pub use record::split_records;
pub use sse::SseBufferedStream;
pub use stream::{EventStream, SseIter, parse_chunk, parse_record};
