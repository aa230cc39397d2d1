//! Eye-state estimation: openness ratios and horizontal gaze ratio.
//!
//! Both ratios are normalized by the eye's own corner-to-corner width, so
//! they hold roughly steady as the head moves toward or away from the
//! camera and under mild rotation.

use eyespeak_common::{Eye, GestureError, LandmarkFrame};
use serde::{Deserialize, Serialize};

use crate::landmarks::{landmark, EyeLandmarks, LandmarkSchema};

/// Denominators below this are treated as coincident points.
const MIN_SPAN: f64 = 1e-6;

/// Per-frame eye reading. `left`/`right` are the user's anatomical eyes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeState {
    pub left_openness: f64,
    pub right_openness: f64,
    pub gaze_ratio: f64,
}

impl EyeState {
    pub fn openness(&self, eye: Eye) -> f64 {
        match eye {
            Eye::Left => self.left_openness,
            Eye::Right => self.right_openness,
        }
    }
}

/// Derive an [`EyeState`] from one frame.
pub fn estimate(
    frame: &LandmarkFrame,
    schema: &LandmarkSchema,
    mirrored: bool,
) -> Result<EyeState, GestureError> {
    Ok(EyeState {
        left_openness: openness(frame, schema.eye(Eye::Left, mirrored))?,
        right_openness: openness(frame, schema.eye(Eye::Right, mirrored))?,
        gaze_ratio: gaze_ratio(frame, schema)?,
    })
}

/// Vertical lid distance over horizontal corner distance.
pub fn openness(frame: &LandmarkFrame, eye: &EyeLandmarks) -> Result<f64, GestureError> {
    let upper = landmark(frame, eye.upper_lid)?;
    let lower = landmark(frame, eye.lower_lid)?;
    let inner = landmark(frame, eye.inner_corner)?;
    let outer = landmark(frame, eye.outer_corner)?;

    let width = inner.distance(&outer);
    if width < MIN_SPAN {
        return Err(GestureError::DegenerateGeometry("eye corners coincide"));
    }
    Ok(upper.distance(&lower) / width)
}

/// Horizontal iris position between the reference eye's corners:
/// 0 at the inner corner, 1 at the outer corner.
pub fn gaze_ratio(frame: &LandmarkFrame, schema: &LandmarkSchema) -> Result<f64, GestureError> {
    let iris = landmark(frame, schema.reference_iris)?;
    let inner = landmark(frame, schema.reference_eye.inner_corner)?;
    let outer = landmark(frame, schema.reference_eye.outer_corner)?;

    let span = outer.x - inner.x;
    if span.abs() < MIN_SPAN {
        return Err(GestureError::DegenerateGeometry("zero-width gaze baseline"));
    }
    Ok((iris.x - inner.x) / span)
}
