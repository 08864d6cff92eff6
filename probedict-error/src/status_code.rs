use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Status codes used to categorize errors.
///
/// # Ranges:
/// - 0xxx: Success
/// - 1xxx: General errors
/// - 2xxx: Data errors
/// - 9xxx: Configuration errors
///
/// `num_enum::TryFromPrimitive` provides `TryFrom<u32>`; with the `serde`
/// feature the code is serialized as its numeric value.
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Success ===
    Success = 0,

    // === 1xxx: General errors ===
    Unknown = 1000,
    Unsupported = 1001,
    Unexpected = 1002,
    Internal = 1003,
    InvalidArgs = 1004,

    // === 2xxx: Data errors ===
    NotFound = 2000,
    InvalidKey = 2003,
    InvalidValue = 2004,
    InvalidCommand = 2010,

    // === 9xxx: Configuration ===
    ConfigError = 9000,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Numeric representation of the status code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Tries to map a raw `u32` back to a `StatusCode`.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Returns `true` if `code` denotes success.
    pub fn is_success(code: u32) -> bool {
        Self::Success as u32 == code
    }

    /// The problem lies in the caller's request or data.
    ///
    /// Data errors (2xxx) are client errors; `InvalidArgs` (1004) is one too
    /// and is matched explicitly.
    pub fn is_client_error(&self) -> bool {
        if (2000..=2999).contains(&self.code()) {
            return true;
        }
        matches!(self, Self::InvalidArgs)
    }

    /// Internal failure of the library itself.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Unknown | Self::Internal | Self::Unexpected)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Trait implementations
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{self:?}({})", self.code())
    }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self {
        code.code()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
