//! Gesture binding table: maps blink/hold gestures to runtime [`Intent`]s.
//!
//! [`Intent`]: eyespeak_common::Intent

mod gesture;
mod table;

pub use gesture::HoldGesture;
pub use table::BindingTable;
