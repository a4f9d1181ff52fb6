//! Pseudo-state tags that tell a handler which branch to run.
//!
//! Two tags are reserved: `Enter` (0) and `Exit` (1). Every raw value from
//! `USER` (2) upwards belongs to the application and is only interpreted by
//! the handler that set it.

use super::error::ReservedTag;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Raw value of the ENTER tag.
pub const ENTER: u8 = 0;

/// Raw value of the EXIT tag.
pub const EXIT: u8 = 1;

/// First raw value available to applications.
pub const USER: u8 = 2;

/// An application-defined sub-state tag, always `>= USER`.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::UserState;
///
/// const WAIT_ACK: UserState = UserState::FIRST;
/// const SEND: UserState = UserState::nth(1);
///
/// assert_eq!(WAIT_ACK.raw(), 2);
/// assert_eq!(SEND.raw(), 3);
/// assert!(UserState::new(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UserState(u8);

impl UserState {
    /// The USER tag itself.
    pub const FIRST: Self = Self(USER);

    /// Wrap a raw tag, rejecting ENTER and EXIT.
    pub const fn new(raw: u8) -> Result<Self, ReservedTag> {
        if raw < USER {
            Err(ReservedTag(raw))
        } else {
            Ok(Self(raw))
        }
    }

    /// The `n`-th user tag, counting from `USER`.
    ///
    /// Panics at compile time (in const context) or runtime when
    /// `USER + n` overflows `u8`.
    pub const fn nth(n: u8) -> Self {
        match USER.checked_add(n) {
            Some(raw) => Self(raw),
            None => panic!("user sub-state index out of range"),
        }
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position relative to `USER` (the inverse of [`UserState::nth`]).
    pub const fn index(self) -> u8 {
        self.0 - USER
    }
}

impl TryFrom<u8> for UserState {
    type Error = ReservedTag;

    fn try_from(raw: u8) -> Result<Self, ReservedTag> {
        Self::new(raw)
    }
}

impl From<UserState> for u8 {
    fn from(state: UserState) -> Self {
        state.raw()
    }
}

/// The flag a handler inspects on every invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PseudoState {
    /// Run entry logic for the now-current handler
    #[default]
    Enter,

    /// Run exit logic for the handler about to be replaced
    Exit,

    /// Handler-private sub-state
    User(UserState),
}

impl PseudoState {
    /// Decode a raw tag. Every `u8` maps to exactly one pseudo-state.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            ENTER => Self::Enter,
            EXIT => Self::Exit,
            other => Self::User(UserState(other)),
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Enter => ENTER,
            Self::Exit => EXIT,
            Self::User(state) => state.raw(),
        }
    }

    pub const fn is_reserved(self) -> bool {
        !matches!(self, Self::User(_))
    }

    /// The user tag, if this is not ENTER or EXIT.
    pub const fn user(self) -> Option<UserState> {
        match self {
            Self::User(state) => Some(state),
            _ => None,
        }
    }
}

impl From<UserState> for PseudoState {
    fn from(state: UserState) -> Self {
        Self::User(state)
    }
}

impl From<u8> for PseudoState {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PseudoState> for u8 {
    fn from(state: PseudoState) -> Self {
        state.as_raw()
    }
}

impl PartialOrd for PseudoState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PseudoState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_raw().cmp(&other.as_raw())
    }
}

impl fmt::Display for PseudoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("ENTER"),
            Self::Exit => f.write_str("EXIT"),
            Self::User(state) => write!(f, "USER+{}", state.index()),
        }
    }
}
