//! Splitting a chunk of text into raw records.
use crate::patterns::{BREAK_RUN, is_record_break};

/// Split `chunk` into raw records, in textual order.
///
/// Records are separated by two or more consecutive line breaks in any mix
/// of `\n`, `\r\n` and `\r`. Empty pieces (leading or trailing separators,
/// an empty chunk) are skipped since they can never produce an item.
pub fn split_records(chunk: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut start = 0;

    for run in BREAK_RUN.find_iter(chunk) {
        if !is_record_break(run.as_str().as_bytes()) {
            continue;
        }
        push_record(&mut records, &chunk[start..run.start()]);
        start = run.end();
    }
    push_record(&mut records, &chunk[start..]);

    records
}

fn push_record<'a>(records: &mut Vec<&'a str>, record: &'a str) {
    if !record.is_empty() {
        records.push(record);
    }
}
