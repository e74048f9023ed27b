//! Single-line JSON encoding.
//!
//! Output lines use `", "` between members and `": "` after keys, the
//! layout downstream consumers of the existing bucket already index.
//! Non-ASCII text is written as-is.

use std::io;

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{Formatter, Serializer};

/// Compact JSON with a space after every separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serialize `value` as one line of JSON, without a trailing newline.
///
/// # Examples
///
/// ```
/// use arrival_etl::transform::encode_line;
///
/// let line = encode_line(&serde_json::json!({"stationNm": "강남역"})).unwrap();
/// assert_eq!(line, r#"{"stationNm": "강남역"}"#);
/// ```
pub fn encode_line<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spaced_separators() {
        let line = encode_line(&json!({"a": 1, "b": [1, 2], "c": {"d": "e"}})).unwrap();
        assert_eq!(line, r#"{"a": 1, "b": [1, 2], "c": {"d": "e"}}"#);
    }

    #[test]
    fn keeps_non_ascii() {
        let line = encode_line(&json!({"lineNum": "경의중앙선"})).unwrap();
        assert_eq!(line, r#"{"lineNum": "경의중앙선"}"#);
    }

    #[test]
    fn escapes_quotes_and_control_characters() {
        let line = encode_line(&json!({"s": "a\"b\\c\nd"})).unwrap();
        assert_eq!(line, r#"{"s": "a\"b\\c\nd"}"#);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(encode_line(&json!({})).unwrap(), "{}");
        assert_eq!(encode_line(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn single_line() {
        let line = encode_line(&json!({"a": {"b": {"c": [1, 2, 3]}}})).unwrap();
        assert!(!line.contains('\n'));
    }
}
