use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Clearance kept between the target and each boundary edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EdgeSpacing {
    /// Clearance from the top edge.
    pub top: f64,
    /// Clearance from the left edge.
    pub left: f64,
    /// Clearance from the right edge.
    pub right: f64,
    /// Clearance from the bottom edge.
    pub bottom: f64,
}

impl EdgeSpacing {
    /// The same clearance on all four edges.
    #[inline]
    pub fn uniform(v: f64) -> Self {
        EdgeSpacing {
            top: v,
            left: v,
            right: v,
            bottom: v,
        }
    }

    /// Clearance at the start edge (left/top) of `axis`.
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Clearance at the end edge (right/bottom) of `axis`.
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.bottom,
        }
    }
}

/// Clearance requirement: a single scalar for all edges or one value per
/// edge. The scalar form is shorthand for the uniform per-edge form;
/// consumers must normalize through [`Spacing::edges`] before use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Spacing {
    /// One clearance applied to all four edges.
    Uniform(f64),
    /// Independent clearance per edge.
    PerEdge(EdgeSpacing),
}

impl Spacing {
    /// Normalize to the four-value form.
    #[inline]
    pub fn edges(self) -> EdgeSpacing {
        match self {
            Spacing::Uniform(v) => EdgeSpacing::uniform(v),
            Spacing::PerEdge(e) => e,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(8.0)
    }
}

impl From<f64> for Spacing {
    fn from(v: f64) -> Self {
        Spacing::Uniform(v)
    }
}

impl From<EdgeSpacing> for Spacing {
    fn from(e: EdgeSpacing) -> Self {
        Spacing::PerEdge(e)
    }
}
