use crate::{axis::Axis, rect::Rect};

/// Signed per-side overflow of a box relative to a boundary rectangle.
///
/// A positive value means the box exceeds the boundary by that amount on
/// that side; a negative value is the slack remaining before it would.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overflow {
    /// Overflow past the boundary's top edge.
    pub top: f64,
    /// Overflow past the boundary's left edge.
    pub left: f64,
    /// Overflow past the boundary's right edge.
    pub right: f64,
    /// Overflow past the boundary's bottom edge.
    pub bottom: f64,
}

impl Overflow {
    /// Measure how far `subject` lies beyond `boundary` on each side.
    pub fn measure(subject: &Rect, boundary: &Rect) -> Self {
        Overflow {
            top: boundary.top() - subject.top(),
            left: boundary.left() - subject.left(),
            right: subject.right() - boundary.right(),
            bottom: subject.bottom() - boundary.bottom(),
        }
    }

    /// Overflow at the start side (left/top) of `axis`.
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Overflow at the end side (right/bottom) of `axis`.
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.bottom,
        }
    }
}
