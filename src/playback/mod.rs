//! Cursor over a finished trace
//!
//! - [`Playback`]: forward/backward stepping, seeking, jump to start/end
//! - [`errors`]: [`PlaybackError`]
//!
//! # Model
//!
//! The trace is complete before playback starts, so stepping never runs an
//! algorithm; it only moves an index. Cadence, pausing and rendering belong to
//! the caller.

pub mod errors;

pub use errors::PlaybackError;

use crate::snapshot::{Trace, TraceStep};

#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    position: usize,
}

impl Playback {
    pub fn new(trace: Trace) -> Self {
        Playback { trace, position: 0 }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Step currently shown
    pub fn current(&self) -> Option<&TraceStep> {
        self.trace.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.trace.is_empty() {
            return Err(PlaybackError::EmptyTrace);
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.trace.is_empty() {
            return Err(PlaybackError::EmptyTrace);
        }
        if self.is_at_start() {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Jump to an arbitrary step
    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.trace.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.trace.len(),
            });
        }
        tracing::trace!(from = self.position, to = index, "seek");
        self.position = index;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    /// Step forward up to `n` times; returns how many steps were taken
    pub fn advance(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }
}
