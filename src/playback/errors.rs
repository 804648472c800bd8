//! Playback error types
//!
//! This module defines [`PlaybackError`], returned when a navigation request
//! cannot move the cursor. None of these are fatal; the UI reports them in the
//! status bar and keeps the current step.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The trace has no steps to show
    #[error("trace is empty")]
    EmptyTrace,

    /// Already showing the last step
    #[error("already at the last step")]
    AtEnd,

    /// Already showing the first step
    #[error("already at the first step")]
    AtStart,

    /// Requested step index does not exist
    #[error("step {index} out of range (trace has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}
