use crate::{
    axis::Axis,
    rect::{Point, Rect, Size},
};

/// A rectangle overflow is measured against, together with the scroll state
/// needed to correct and derate the usable space around it.
///
/// Both the nearest scroll container and the document viewport are expressed
/// this way; when no dedicated scroll container exists the two coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    /// Bounding rectangle in the shared coordinate space.
    pub rect: Rect,
    /// Current scroll offsets of the boundary's own content.
    pub scroll: Point,
    /// Outer size, including any scrollbar gutters.
    pub outer: Size,
    /// Inner (content) size actually visible to placed content.
    pub inner: Size,
}

impl Boundary {
    /// Boundary with no scroll state and coinciding outer/inner sizes.
    pub fn from_rect(rect: Rect) -> Self {
        Boundary {
            rect,
            scroll: Point::default(),
            outer: rect.size(),
            inner: rect.size(),
        }
    }

    /// Thickness of the scrollbar gutter along `axis`: the outer size minus
    /// the inner size. Zero when no scrollbar is visible.
    #[inline]
    pub fn scrollbar_thickness(&self, axis: Axis) -> f64 {
        self.outer.along(axis) - self.inner.along(axis)
    }

    /// Scroll offset along `axis`.
    #[inline]
    pub fn scroll_offset(&self, axis: Axis) -> f64 {
        self.scroll.along(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rect_has_no_gutter_or_scroll() {
        let b = Boundary::from_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(b.scrollbar_thickness(Axis::X), 0.0);
        assert_eq!(b.scrollbar_thickness(Axis::Y), 0.0);
        assert_eq!(b.scroll_offset(Axis::X), 0.0);
        assert_eq!(b.scroll_offset(Axis::Y), 0.0);
    }

    #[test]
    fn gutter_is_outer_minus_inner() {
        let b = Boundary {
            rect: Rect::new(0.0, 0.0, 300.0, 200.0),
            scroll: Point { x: 0.0, y: 40.0 },
            outer: Size::new(300.0, 200.0),
            inner: Size::new(285.0, 200.0),
        };
        assert_eq!(b.scrollbar_thickness(Axis::X), 15.0);
        assert_eq!(b.scrollbar_thickness(Axis::Y), 0.0);
        assert_eq!(b.scroll_offset(Axis::Y), 40.0);
    }
}
