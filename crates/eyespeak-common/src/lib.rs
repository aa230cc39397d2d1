pub mod errors;
pub mod intents;
pub mod types;

pub use errors::{ConfigError, EyespeakError, GestureError};
pub use intents::{Intent, IntentTarget};
pub use types::{Eye, GazeDirection, LandmarkFrame, Point2};

pub type Result<T> = std::result::Result<T, EyespeakError>;
