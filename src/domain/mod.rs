//! Domain model for the timings tool.
//!
//! This module contains the value types the parser produces and the
//! aggregator adds up, independent of parsing, I/O, or presentation concerns.

pub mod timing;

pub use timing::Timing;
