//! Subway line codes and their display labels.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};

/// Known upstream line ids and the label reported for each.
const LINE_CODES: [(&str, &str); 16] = [
    ("1001", "1호선"),
    ("1002", "2호선"),
    ("1003", "3호선"),
    ("1004", "4호선"),
    ("1005", "5호선"),
    ("1006", "6호선"),
    ("1007", "7호선"),
    ("1008", "8호선"),
    ("1009", "9호선"),
    ("1061", "중앙선"),
    ("1063", "경의중앙선"),
    ("1065", "공항철도"),
    ("1067", "경춘선"),
    ("1075", "수인분당선"),
    ("1077", "신분당선"),
    ("1092", "우이신설선"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LINE_CODES.into_iter().collect());

/// Error returned when a line id has no entry in the [`LineCodeTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line code: {code:?}")]
pub struct UnknownLineCode {
    code: String,
}

impl UnknownLineCode {
    /// For a line id that is not a string and so never reaches the table.
    pub(crate) fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The code that failed to resolve.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Fixed lookup from upstream line id to display label.
///
/// The table is exhaustive for the network it serves; a code outside it is
/// an error rather than something to pass through.
///
/// # Examples
///
/// ```
/// use arrival_etl::domain::LineCodeTable;
///
/// let label = LineCodeTable::lookup("1002").unwrap();
/// assert_eq!(label.as_str(), "2호선");
///
/// assert!(LineCodeTable::lookup("9999").is_err());
/// ```
pub struct LineCodeTable;

impl LineCodeTable {
    /// Resolve a line id to its label. The match is exact: no trimming.
    pub fn lookup(code: &str) -> Result<LineLabel, UnknownLineCode> {
        TABLE
            .get(code)
            .map(|&label| LineLabel(label))
            .ok_or_else(|| UnknownLineCode {
                code: code.to_string(),
            })
    }

    /// Number of known line ids.
    pub fn len() -> usize {
        TABLE.len()
    }

    /// All (code, label) pairs, in table order.
    pub fn entries() -> impl Iterator<Item = (&'static str, LineLabel)> {
        LINE_CODES.iter().map(|&(code, label)| (code, LineLabel(label)))
    }
}

/// A human-readable line name, only obtainable from the [`LineCodeTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineLabel(&'static str);

impl LineLabel {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineLabel({})", self.0)
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for LineLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Codes outside the table never resolve
        #[test]
        fn unlisted_codes_fail(code in "\\PC{0,8}") {
            let listed = LINE_CODES.iter().any(|(c, _)| *c == code);
            prop_assert_eq!(LineCodeTable::lookup(&code).is_ok(), listed);
        }
    }
}
