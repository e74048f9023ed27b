//! Arrival status code.

/// Upstream arrival status, read from the `arvlCd` field.
///
/// Only a confirmed arrival is reported downstream. Every other value,
/// including an empty or garbled code, is an ordinary rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrivalStatus {
    Confirmed,
    Other,
}

impl ArrivalStatus {
    /// The upstream code for a confirmed arrival.
    pub const CONFIRMED_CODE: &'static str = "1";

    pub fn from_code(code: &str) -> Self {
        if code == Self::CONFIRMED_CODE {
            ArrivalStatus::Confirmed
        } else {
            ArrivalStatus::Other
        }
    }

    pub fn is_confirmed(self) -> bool {
        self == ArrivalStatus::Confirmed
    }
}
