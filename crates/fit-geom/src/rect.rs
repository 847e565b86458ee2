use crate::axis::Axis;

/// Point in boundary coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Distance from the boundary's left edge.
    pub x: f64,
    /// Distance from the boundary's top edge.
    pub y: f64,
}

impl Point {
    /// Component of the point along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Extent along the x axis.
    pub w: f64,
    /// Extent along the y axis.
    pub h: f64,
}

impl Size {
    /// Construct a size from width and height.
    #[inline]
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Extent along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.w,
            Axis::Y => self.h,
        }
    }
}

/// Rectangle described by offset-from-edge distances plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Distance from the boundary's left edge.
    pub x: f64,
    /// Distance from the boundary's top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and extent.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Left edge position.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge position.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Top edge position.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge position.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Extent of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// Position of the start edge (left/top) along `axis`.
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left(),
            Axis::Y => self.top(),
        }
    }

    /// Position of the end edge (right/bottom) along `axis`.
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right(),
            Axis::Y => self.bottom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn axis_edge_selection() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.start(Axis::X), r.left());
        assert_eq!(r.end(Axis::X), r.right());
        assert_eq!(r.start(Axis::Y), r.top());
        assert_eq!(r.end(Axis::Y), r.bottom());
    }

    #[test]
    fn size_along() {
        let s = Size::new(200.0, 80.0);
        assert_eq!(s.along(Axis::X), 200.0);
        assert_eq!(s.along(Axis::Y), 80.0);
    }
}
