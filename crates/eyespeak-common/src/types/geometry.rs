use serde::{Deserialize, Serialize};

/// A landmark in normalized image coordinates.
///
/// On the wire a point is a JSON array `[x, y]`; a trailing depth value
/// (`[x, y, z]`) is accepted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl TryFrom<Vec<f64>> for Point2 {
    type Error = String;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [x, y] | [x, y, _] => Ok(Point2::new(*x, *y)),
            other => Err(format!(
                "landmark must have 2 or 3 coordinates, got {}",
                other.len()
            )),
        }
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

/// One face's landmarks for one processed video frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    points: Vec<Point2>,
}

impl LandmarkFrame {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    /// Overwrite a single landmark, growing the frame with origin points
    /// if `index` is past the end.
    pub fn set(&mut self, index: usize, point: Point2) {
        if index >= self.points.len() {
            self.points.resize(index + 1, Point2::new(0.0, 0.0));
        }
        self.points[index] = point;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }
}
