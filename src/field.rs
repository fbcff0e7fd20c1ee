//! Splitting a raw record into classified fields.
use crate::patterns::{FIELD_SEPARATOR, LINE_BREAK};

/// A recognized field of a record, borrowing its value from the record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Data(&'a str),
    Event(&'a str),
    Id(&'a str),
    Retry(&'a str),
}

/// Classify one line of a record.
///
/// Returns `None` for lines that contribute nothing: empty lines, lines with
/// no separator, comments (empty name) and unknown field names. Only the
/// first separator splits the line, so the value keeps any later colons.
pub fn classify_line(line: &str) -> Option<Field<'_>> {
    if line.is_empty() {
        return None;
    }

    let mut parts = FIELD_SEPARATOR.splitn(line, 2);
    let name = parts.next()?;
    let value = parts.next()?;

    match name {
        "data" => Some(Field::Data(value)),
        "event" => Some(Field::Event(value)),
        "id" => Some(Field::Id(value)),
        "retry" => Some(Field::Retry(value)),
        // Comments ("") and forward-compatible unknown names.
        _ => None,
    }
}

/// The recognized fields of `record`, in line order.
pub fn parse_fields(record: &str) -> impl Iterator<Item = Field<'_>> {
    LINE_BREAK.split(record).filter_map(classify_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("data: def", Some(Field::Data("def")))]
    #[case("data:def", Some(Field::Data("def")))]
    #[case("data:    def", Some(Field::Data("def")))]
    #[case("data:", Some(Field::Data("")))]
    #[case("event: abc", Some(Field::Event("abc")))]
    #[case("id: 1", Some(Field::Id("1")))]
    #[case("retry: 2500", Some(Field::Retry("2500")))]
    #[case(":", None)]
    #[case(": keep-alive", None)]
    #[case("data", None)]
    #[case("unknown: value", None)]
    #[case("Data: case-sensitive", None)]
    #[case("", None)]
    fn test_classify_line(#[case] line: &str, #[case] expected: Option<Field<'static>>) {
        assert_eq!(classify_line(line), expected);
    }

    #[test]
    fn test_value_keeps_later_separators() {
        assert_eq!(
            classify_line(r#"data: {"key": "value", "url": "http://x"}"#),
            Some(Field::Data(r#"{"key": "value", "url": "http://x"}"#))
        );
    }

    #[test]
    fn test_parse_fields_in_order_across_line_endings() {
        let fields: Vec<_> = parse_fields("event: abc\r\n: note\rdata: def\nid: 1").collect();
        assert_eq!(
            fields,
            vec![Field::Event("abc"), Field::Data("def"), Field::Id("1")]
        );
    }

    #[test]
    fn test_parse_fields_skips_malformed_lines() {
        let fields: Vec<_> = parse_fields("garbage\n::\nfoo: bar\ndata: ok").collect();
        assert_eq!(fields, vec![Field::Data("ok")]);
    }
}
