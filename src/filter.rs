//! Dropping records that would produce an undispatchable event.
use crate::accumulator::Candidate;
use crate::event::SseItem;
use tracing::trace;

/// Turn a folded record into an output item, or drop it.
///
/// Events need a non-empty type and non-empty data. Retry directives always
/// pass.
pub fn admit(candidate: Candidate) -> Option<SseItem> {
    match candidate {
        Candidate::Retry(retry) => Some(SseItem::Retry(retry)),
        Candidate::Event(event) if event.is_dispatchable() => Some(SseItem::Event(event)),
        Candidate::Event(event) => {
            trace!(event_type = %event.event_type, "dropping record without data");
            None
        }
    }
}
