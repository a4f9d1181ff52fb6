//! Error types for control block setup and tag/status conversions.

use thiserror::Error;

/// Errors that can occur when initializing a control block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("Control block not provided. Pass Some(&mut block) to initialize")]
    MissingControlBlock,

    #[error("Initial state handler not provided. Pass Some(handler) to initialize")]
    MissingInitialHandler,
}

/// A raw status code outside the known `-1..=3` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown status code {0}")]
pub struct UnknownStatusCode(pub i8);

/// A raw tag that collides with a reserved pseudo-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tag {0} is reserved for ENTER/EXIT, user sub-states start at 2")]
pub struct ReservedTag(pub u8);
