//! Folding a record's fields into a single result.
use crate::event::{SetRetryInterval, StreamEvent};
use crate::field::Field;

/// What one record folds into, before validity filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Event(StreamEvent),
    Retry(SetRetryInterval),
}

/// Fold `fields` in order into a [`Candidate`].
///
/// `data` values are joined with `\n`, `event` and `id` keep their last
/// occurrence. Any `retry` field turns the whole record into a
/// [`SetRetryInterval`] carrying the last retry value, and everything else
/// in the record is discarded.
pub fn accumulate<'a>(fields: impl IntoIterator<Item = Field<'a>>) -> Candidate {
    let mut event = StreamEvent::empty();
    let mut retry = None;

    for field in fields {
        match field {
            Field::Data(value) => {
                if !event.data.is_empty() {
                    event.data.push('\n');
                }
                event.data.push_str(value);
            }
            Field::Event(value) => event.event_type = value.to_string(),
            Field::Id(value) => event.id = Some(value.to_string()),
            Field::Retry(value) => retry = Some(coerce_retry(value)),
        }
    }

    match retry {
        Some(milliseconds) => Candidate::Retry(SetRetryInterval::new(milliseconds)),
        None => Candidate::Event(event),
    }
}

/// Leniently read a retry value as milliseconds.
///
/// Leading whitespace and an optional sign are skipped, then the leading run
/// of ASCII digits is taken. No digits, or a negative number, gives 0. Values
/// past `u64::MAX` saturate.
pub fn coerce_retry(value: &str) -> u64 {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        });

    if negative { 0 } else { magnitude }
}
