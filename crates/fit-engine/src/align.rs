//! Available-space computation and the end/start alignment decision for a
//! single axis.

use fit_geom::{Axis, Boundary, EdgeSpacing, Overflow, Side};
use tracing::debug;

use crate::{
    adapter::{AnchorBox, AxisRole},
    config::ScrollbarPolicy,
};

/// Usable space at each end of an axis once both boundaries, spacing, and
/// the scrollbar gutter are accounted for. Either figure may be negative,
/// meaning the target cannot fit there at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisSpace {
    pub start: f64,
    pub end: f64,
}

impl AxisSpace {
    pub(crate) fn at(&self, side: Side) -> f64 {
        match side {
            Side::Start => self.start,
            Side::End => self.end,
        }
    }
}

/// Inputs for one axis-space computation.
pub(crate) struct AxisInputs<'a> {
    pub axis: Axis,
    pub role: AxisRole,
    pub anchor: &'a AnchorBox,
    pub scroll: &'a Boundary,
    pub document: &'a Boundary,
    pub spacing: EdgeSpacing,
    pub scrollbar: ScrollbarPolicy,
}

/// Compute the usable space at both ends of the axis.
///
/// The tighter of the two boundaries governs each side (`max` of the two
/// overflow figures), with the document's measurement corrected by its own
/// scroll offset: scrolling down reveals start-side space and consumes
/// end-side space. On the secondary axis both figures gain the anchor's
/// inner size, because side offsets there are expressed against the
/// anchor's box rather than the boundary edge.
pub(crate) fn available_space(inputs: &AxisInputs<'_>) -> AxisSpace {
    let axis = inputs.axis;
    let scroll_over = Overflow::measure(&inputs.anchor.rect, &inputs.scroll.rect);
    let doc_over = Overflow::measure(&inputs.anchor.rect, &inputs.document.rect);
    let doc_scroll = inputs.document.scroll_offset(axis);
    let gutter = inputs.scroll.scrollbar_thickness(axis);
    let start_gutter = match inputs.scrollbar {
        ScrollbarPolicy::EndOnly => 0.0,
        ScrollbarPolicy::BothEnds => gutter,
    };

    let mut start = -(scroll_over.start(axis).max(doc_over.start(axis) + doc_scroll))
        - inputs.spacing.start(axis)
        - start_gutter;
    let mut end = -(scroll_over.end(axis).max(doc_over.end(axis) - doc_scroll))
        - inputs.spacing.end(axis)
        - gutter;

    if inputs.role == AxisRole::Secondary {
        let bonus = inputs.anchor.inner.along(axis);
        start += bonus;
        end += bonus;
    }

    debug!(
        "space: axis={} start={:.1} end={:.1} gutter={:.1} doc_scroll={:.1}",
        axis, start, end, gutter, doc_scroll
    );
    AxisSpace { start, end }
}

/// Pick the first side, in preference order, whose available space holds the
/// target's natural size. `None` means neither end fits and the shrink
/// resolver takes over.
pub(crate) fn choose_side(space: AxisSpace, natural: f64, invert: bool) -> Option<Side> {
    let order = if invert {
        [Side::Start, Side::End]
    } else {
        [Side::End, Side::Start]
    };
    order.into_iter().find(|side| natural <= space.at(*side))
}
