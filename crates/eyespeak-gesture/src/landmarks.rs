//! Landmark index schema shared with the landmark source.
//!
//! Indices follow the MediaPipe Face Mesh topology with refined iris
//! points (478 landmarks).

use eyespeak_common::{Eye, GestureError, LandmarkFrame, Point2};
use serde::{Deserialize, Serialize};

/// The four canonical points of one eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeLandmarks {
    pub upper_lid: usize,
    pub lower_lid: usize,
    pub inner_corner: usize,
    pub outer_corner: usize,
}

/// Named feature points the estimator reads from each frame.
///
/// `reference_eye` is the eye whose iris drives the gaze ratio. Which
/// anatomical eye each group belongs to depends on camera mirroring; see
/// [`LandmarkSchema::eye`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkSchema {
    pub reference_eye: EyeLandmarks,
    pub other_eye: EyeLandmarks,
    pub reference_iris: usize,
}

impl LandmarkSchema {
    pub const fn mediapipe() -> Self {
        Self {
            reference_eye: EyeLandmarks {
                upper_lid: 159,
                lower_lid: 145,
                inner_corner: 133,
                outer_corner: 33,
            },
            other_eye: EyeLandmarks {
                upper_lid: 386,
                lower_lid: 374,
                inner_corner: 362,
                outer_corner: 263,
            },
            reference_iris: 468,
        }
    }

    /// Landmark group for the user's anatomical `eye`.
    ///
    /// In a mirrored (selfie) image the reference group is the user's
    /// right eye; unmirrored, it is the left.
    pub fn eye(&self, eye: Eye, mirrored: bool) -> &EyeLandmarks {
        match (eye, mirrored) {
            (Eye::Right, true) | (Eye::Left, false) => &self.reference_eye,
            _ => &self.other_eye,
        }
    }
}

impl Default for LandmarkSchema {
    fn default() -> Self {
        Self::mediapipe()
    }
}

/// Fetch one landmark, rejecting missing and non-finite points.
pub(crate) fn landmark(frame: &LandmarkFrame, index: usize) -> Result<Point2, GestureError> {
    let point = frame.get(index).ok_or(GestureError::MissingLandmark {
        index,
        len: frame.len(),
    })?;
    if !point.is_finite() {
        return Err(GestureError::DegenerateGeometry("non-finite landmark"));
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_reference_is_right_eye() {
        let schema = LandmarkSchema::mediapipe();
        assert_eq!(schema.eye(Eye::Right, true).upper_lid, 159);
        assert_eq!(schema.eye(Eye::Left, true).upper_lid, 386);
    }

    #[test]
    fn unmirrored_swaps_sides() {
        let schema = LandmarkSchema::mediapipe();
        assert_eq!(schema.eye(Eye::Left, false).upper_lid, 159);
        assert_eq!(schema.eye(Eye::Right, false).upper_lid, 386);
    }

    #[test]
    fn landmark_reports_missing_index() {
        let frame = LandmarkFrame::new(vec![Point2::new(0.1, 0.1); 10]);
        let err = landmark(&frame, 468).unwrap_err();
        assert_eq!(err, GestureError::MissingLandmark { index: 468, len: 10 });
    }

    #[test]
    fn landmark_rejects_nan() {
        let frame = LandmarkFrame::new(vec![Point2::new(f64::NAN, 0.1)]);
        assert!(matches!(
            landmark(&frame, 0),
            Err(GestureError::DegenerateGeometry(_))
        ));
    }
}
