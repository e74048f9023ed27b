//! Travel direction tag.

use serde::{Serialize, Serializer};

/// Direction of travel, reported as `inOutTag`.
///
/// Upstream sends `updnLine` as a string code. `"1"` means outbound; any
/// other value, or no value at all, is treated as inbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionTag {
    Inbound = 1,
    Outbound = 2,
}

impl DirectionTag {
    /// Classify an upstream direction code.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrival_etl::domain::DirectionTag;
    ///
    /// assert_eq!(DirectionTag::from_code(Some("1")), DirectionTag::Outbound);
    /// assert_eq!(DirectionTag::from_code(Some("0")), DirectionTag::Inbound);
    /// assert_eq!(DirectionTag::from_code(None), DirectionTag::Inbound);
    /// ```
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("1") => DirectionTag::Outbound,
            _ => DirectionTag::Inbound,
        }
    }

    /// The numeric tag written to output.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for DirectionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn outbound_iff_one(code in "\\PC{0,4}") {
            let tag = DirectionTag::from_code(Some(&code));
            prop_assert_eq!(tag == DirectionTag::Outbound, code == "1");
        }
    }
}
