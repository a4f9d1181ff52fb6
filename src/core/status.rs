//! Status codes returned by state handlers.

use super::error::UnknownStatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress reported by a handler invocation.
///
/// The discriminants are the wire codes, so `Status::Error as i8 == -1`.
/// The core never interprets a status; it only hands it back to the caller.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::Status;
///
/// assert_eq!(Status::InProgress.code(), 1);
/// assert_eq!(Status::try_from(2_i8), Ok(Status::WaitingOnResource));
/// assert!(Status::Asynchronous.is_pending());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Status {
    /// Failed; details live in an application-defined side channel
    Error = -1,

    /// Finished successfully this call
    Complete = 0,

    /// Multi-step operation still running, call again later
    InProgress = 1,

    /// Blocked on an external resource, call again later
    WaitingOnResource = 2,

    /// Proceeds asynchronously, check by another mechanism later
    Asynchronous = 3,
}

impl Status {
    /// The signed wire code of this status.
    pub const fn code(self) -> i8 {
        self as i8
    }

    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// True for the three "come back later" statuses.
    pub const fn is_pending(self) -> bool {
        matches!(
            self,
            Self::InProgress | Self::WaitingOnResource | Self::Asynchronous
        )
    }
}

impl TryFrom<i8> for Status {
    type Error = UnknownStatusCode;

    // `Self::Error` would be ambiguous with the associated type here.
    fn try_from(code: i8) -> Result<Status, UnknownStatusCode> {
        match code {
            -1 => Ok(Status::Error),
            0 => Ok(Status::Complete),
            1 => Ok(Status::InProgress),
            2 => Ok(Status::WaitingOnResource),
            3 => Ok(Status::Asynchronous),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

impl From<Status> for i8 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Error => "error",
            Self::Complete => "complete",
            Self::InProgress => "in_progress",
            Self::WaitingOnResource => "waiting_on_resource",
            Self::Asynchronous => "asynchronous",
        };
        f.write_str(text)
    }
}
