//! Eye-gesture interpretation: landmark frames in, intents out.

pub mod bindings;
pub mod channels;
pub mod estimator;
pub mod landmarks;
pub mod session;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use bindings::{BindingTable, HoldGesture};
pub use estimator::{estimate, EyeState};
pub use landmarks::{EyeLandmarks, LandmarkSchema};
pub use session::{GestureSession, GestureTimers, Tuning};
