//! # Introduction
//!
//! sortty runs a sorting algorithm over a small array of labeled elements and
//! records a snapshot of the whole array at every comparison, swap, shift,
//! partition and merge. The recorded trace is then played forward and backward
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Algorithm → TraceRecorder → Trace → Playback → TUI
//! ```
//!
//! 1. [`model`] — [`model::Element`] values with a transient
//!    [`model::State`] label, plus seeded random arrays.
//! 2. [`algorithms`] — bubble, insertion, selection, merge, quick and heap
//!    sort, each returning a [`snapshot::Trace`].
//! 3. [`snapshot`] — immutable snapshots, the append-only recorder and trace
//!    verification.
//! 4. [`playback`] — a cursor over a finished trace (step, seek, rewind).
//! 5. [`config`] — command-line parsing and validation.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::Algorithm;
//! use sortty::model::from_values;
//!
//! let trace = Algorithm::Quick.trace(&from_values(&[5, 3, 8, 4, 2]));
//! assert_eq!(trace.final_snapshot().unwrap().values(), vec![2, 3, 4, 5, 8]);
//! ```

pub mod algorithms;
pub mod config;
pub mod model;
pub mod playback;
pub mod snapshot;
pub mod ui;
