//! Data model for the sorting engine
//!
//! This module provides the values the algorithms operate on:
//! - [`element`]: [`Element`] (a value plus a transient [`State`] label)
//! - [`generate`]: seeded random input arrays
//!
//! # Labels
//!
//! Labels are presentation scratch marks. They never take part in ordering
//! decisions; every algorithm compares `value` only. `origin` records the input
//! index a value started at and moves together with the value.

pub mod element;
pub mod generate;

pub use element::{from_values, mark_all, mark_range, Element, State};
pub use generate::{ArrayGenerator, MAX_VALUE, MIN_VALUE};
