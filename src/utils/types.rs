use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Axis along which a lifting surface extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanAxis {
    /// Lateral (y, positive right). Wings and horizontal tails.
    Y,
    /// Vertical (z, positive down). Fins.
    Z,
}

impl SpanAxis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            SpanAxis::Z
        } else {
            SpanAxis::Y
        }
    }

    /// Component index into an `(x, y, z)` vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SpanAxis::Y => 1,
            SpanAxis::Z => 2,
        }
    }

    /// The spanwise coordinate of `position`.
    #[inline]
    pub fn coordinate(self, position: &Vector3<f64>) -> f64 {
        position[self.index()]
    }
}
