//! Synthetic landmark frames with controllable eye openness and gaze.

use eyespeak_common::{LandmarkFrame, Point2};

use crate::landmarks::{EyeLandmarks, LandmarkSchema};

/// Number of points in a refined MediaPipe face mesh.
pub const MESH_POINTS: usize = 478;

const EYE_WIDTH: f64 = 0.1;

/// Builds a frame where both eyes are open (openness 0.3) and the gaze
/// ratio is 0.5, then lets tests override either.
///
/// Layout: reference eye spans x 0.30..0.40 (inner corner at 0.40), other
/// eye spans 0.60..0.70 (inner corner at 0.60), both at y = 0.4.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    schema: LandmarkSchema,
    reference_openness: f64,
    other_openness: f64,
    gaze: f64,
    scale: f64,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            schema: LandmarkSchema::mediapipe(),
            reference_openness: 0.3,
            other_openness: 0.3,
            gaze: 0.5,
            scale: 1.0,
        }
    }

    pub fn reference_openness(mut self, ratio: f64) -> Self {
        self.reference_openness = ratio;
        self
    }

    pub fn other_openness(mut self, ratio: f64) -> Self {
        self.other_openness = ratio;
        self
    }

    /// Openness for the user's right eye, assuming a mirrored camera.
    pub fn right_openness(self, ratio: f64) -> Self {
        self.reference_openness(ratio)
    }

    /// Openness for the user's left eye, assuming a mirrored camera.
    pub fn left_openness(self, ratio: f64) -> Self {
        self.other_openness(ratio)
    }

    pub fn gaze(mut self, ratio: f64) -> Self {
        self.gaze = ratio;
        self
    }

    /// Multiply every eye dimension, as if the face moved closer.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn build(&self) -> LandmarkFrame {
        let mut frame = LandmarkFrame::new(vec![Point2::new(0.5, 0.5); MESH_POINTS]);
        let width = EYE_WIDTH * self.scale;

        let reference_inner_x = 0.35 + width / 2.0;
        let reference_outer_x = 0.35 - width / 2.0;
        place_eye(
            &mut frame,
            &self.schema.reference_eye,
            (reference_inner_x, reference_outer_x),
            self.reference_openness * width,
        );
        place_eye(
            &mut frame,
            &self.schema.other_eye,
            (0.65 - width / 2.0, 0.65 + width / 2.0),
            self.other_openness * width,
        );

        let iris_x = reference_inner_x + self.gaze * (reference_outer_x - reference_inner_x);
        frame.set(self.schema.reference_iris, Point2::new(iris_x, 0.4));
        frame
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn place_eye(frame: &mut LandmarkFrame, eye: &EyeLandmarks, (inner_x, outer_x): (f64, f64), height: f64) {
    let center_x = (inner_x + outer_x) / 2.0;
    frame.set(eye.inner_corner, Point2::new(inner_x, 0.4));
    frame.set(eye.outer_corner, Point2::new(outer_x, 0.4));
    frame.set(eye.upper_lid, Point2::new(center_x, 0.4 - height / 2.0));
    frame.set(eye.lower_lid, Point2::new(center_x, 0.4 + height / 2.0));
}
