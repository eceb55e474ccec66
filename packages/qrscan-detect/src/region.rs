use serde::{Deserialize, Serialize};

/// Corner geometry of a detected symbol, in source image pixel coordinates.
///
/// Serializes as a bare list of `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox {
    pub corners: Vec<[f32; 2]>,
}

impl BoundingBox {
    pub fn new(corners: Vec<[f32; 2]>) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> &[[f32; 2]] {
        &self.corners
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Mean of the corner points.
    pub fn center(&self) -> Option<[f32; 2]> {
        if self.corners.is_empty() {
            return None;
        }
        let n = self.corners.len() as f32;
        let (sx, sy) = self
            .corners
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), [x, y]| (sx + x, sy + y));
        Some([sx / n, sy / n])
    }

    /// Axis-aligned hull as `(x, y, width, height)`, with the origin clamped to zero.
    pub fn extent(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.corners.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first[0], first[1], first[0], first[1]);
        for [x, y] in &self.corners[1..] {
            min_x = min_x.min(*x);
            min_y = min_y.min(*y);
            max_x = max_x.max(*x);
            max_y = max_y.max(*y);
        }
        let min_x = min_x.max(0.0);
        let min_y = min_y.max(0.0);
        Some((min_x, min_y, (max_x - min_x).max(0.0), (max_y - min_y).max(0.0)))
    }
}
