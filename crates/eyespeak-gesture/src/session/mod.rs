//! Per-frame gesture interpretation.
//!
//! A [`GestureSession`] estimates eye state from each landmark frame, runs
//! every gesture channel against it and returns the intents that fired.
//! Frames with no face, or with geometry the estimator rejects, are
//! skipped without touching any timer.

mod processor;
mod types;

pub use processor::GestureSession;
pub use types::{GestureTimers, Tuning};
