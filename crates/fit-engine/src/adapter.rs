//! The seam between the decision core and whatever renders the target.

use fit_geom::{Axis, Boundary, Rect, Side, Size};

use crate::error::{Error, Result};

/// Role an axis plays within a placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    /// The configured main axis; side offsets are expressed against the
    /// anchor's far edge.
    Primary,
    /// The orthogonal axis; side offsets are expressed against the anchor's
    /// own box.
    Secondary,
}

/// Anchor geometry snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBox {
    /// Bounding box of the anchor in the shared coordinate space.
    pub rect: Rect,
    /// Inner (content) size of the anchor.
    pub inner: Size,
}

/// Presentation-layer operations the engine needs.
///
/// Implementations own every backend-specific concern: offset formatting,
/// scroll-container discovery, capability detection, and the lifetime of
/// whatever mutation subscription re-invokes the engine. The engine assumes
/// it is the only writer of the target's placement styles; hosts that also
/// write them get undefined results.
pub trait LayoutAdapter {
    /// Current content-box size of the floating target.
    fn natural_size(&self) -> Result<Size>;

    /// Anchor geometry, or `None` once the anchor has been unmounted.
    fn anchor(&self) -> Result<Option<AnchorBox>>;

    /// Nearest scroll boundary. Falls back to the document boundary when no
    /// scrollable ancestor exists, in which case both methods return the
    /// same value.
    fn scroll_boundary(&self) -> Result<Boundary>;

    /// Document/viewport boundary.
    fn document_boundary(&self) -> Result<Boundary>;

    /// Configured minimum size of the target along `axis`, if any.
    fn min_size(&self, axis: Axis) -> Result<Option<f64>>;

    /// Force the positioning context required before side offsets mean
    /// anything (absolutely positioned target, positioned anchor). Invoked
    /// once per real pass, before any alignment.
    fn normalize(&mut self) -> Result<()>;

    /// Anchor the target to `side` of `axis`, leaving the opposite side's
    /// offset neutral so exactly one side constrains the axis.
    fn apply_side(&mut self, axis: Axis, side: Side, role: AxisRole) -> Result<()>;

    /// Resize the target along `axis`.
    fn apply_size(&mut self, axis: Axis, size: f64) -> Result<()>;
}

/// Operations recorded by [`FakeLayoutAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub enum FakeOp {
    /// `normalize` was invoked.
    Normalize,
    /// `apply_side` was invoked with these arguments.
    Side {
        /// Axis the side write targeted.
        axis: Axis,
        /// Side the target was anchored to.
        side: Side,
        /// Role the axis played in the pass.
        role: AxisRole,
    },
    /// `apply_size` was invoked with these arguments.
    Size {
        /// Axis the resize targeted.
        axis: Axis,
        /// New size along that axis.
        size: f64,
    },
}

/// Scriptable in-memory adapter that records every mutating operation, used
/// by deterministic and integration tests.
#[derive(Debug, Clone)]
pub struct FakeLayoutAdapter {
    natural: Size,
    anchor: Option<AnchorBox>,
    scroll_boundary: Boundary,
    document_boundary: Boundary,
    min_width: Option<f64>,
    min_height: Option<f64>,
    fail_style_writes: bool,
    ops: Vec<FakeOp>,
}

impl FakeLayoutAdapter {
    /// Adapter with both boundaries set to `viewport` and no minimum sizes.
    pub fn new(natural: Size, anchor: AnchorBox, viewport: Rect) -> Self {
        let boundary = Boundary::from_rect(viewport);
        FakeLayoutAdapter {
            natural,
            anchor: Some(anchor),
            scroll_boundary: boundary,
            document_boundary: boundary,
            min_width: None,
            min_height: None,
            fail_style_writes: false,
            ops: Vec::new(),
        }
    }

    /// Replace the scroll boundary.
    pub fn with_scroll_boundary(mut self, boundary: Boundary) -> Self {
        self.scroll_boundary = boundary;
        self
    }

    /// Replace the document boundary.
    pub fn with_document_boundary(mut self, boundary: Boundary) -> Self {
        self.document_boundary = boundary;
        self
    }

    /// Configure a minimum width.
    pub fn with_min_width(mut self, v: f64) -> Self {
        self.min_width = Some(v);
        self
    }

    /// Configure a minimum height.
    pub fn with_min_height(mut self, v: f64) -> Self {
        self.min_height = Some(v);
        self
    }

    /// Make every subsequent style write fail.
    pub fn with_failing_style_writes(mut self) -> Self {
        self.fail_style_writes = true;
        self
    }

    /// Change the target's natural size, as a host mutation would.
    pub fn set_natural_size(&mut self, natural: Size) {
        self.natural = natural;
    }

    /// Unmount the anchor.
    pub fn unmount_anchor(&mut self) {
        self.anchor = None;
    }

    /// Recorded operations, oldest first.
    pub fn operations(&self) -> &[FakeOp] {
        &self.ops
    }

    /// Forget recorded operations.
    pub fn clear_operations(&mut self) {
        self.ops.clear();
    }
}

impl LayoutAdapter for FakeLayoutAdapter {
    fn natural_size(&self) -> Result<Size> {
        Ok(self.natural)
    }

    fn anchor(&self) -> Result<Option<AnchorBox>> {
        Ok(self.anchor)
    }

    fn scroll_boundary(&self) -> Result<Boundary> {
        Ok(self.scroll_boundary)
    }

    fn document_boundary(&self) -> Result<Boundary> {
        Ok(self.document_boundary)
    }

    fn min_size(&self, axis: Axis) -> Result<Option<f64>> {
        Ok(match axis {
            Axis::X => self.min_width,
            Axis::Y => self.min_height,
        })
    }

    fn normalize(&mut self) -> Result<()> {
        self.ops.push(FakeOp::Normalize);
        Ok(())
    }

    fn apply_side(&mut self, axis: Axis, side: Side, role: AxisRole) -> Result<()> {
        if self.fail_style_writes {
            return Err(Error::StyleWrite("fake adapter configured to fail".into()));
        }
        self.ops.push(FakeOp::Side { axis, side, role });
        Ok(())
    }

    fn apply_size(&mut self, axis: Axis, size: f64) -> Result<()> {
        if self.fail_style_writes {
            return Err(Error::StyleWrite("fake adapter configured to fail".into()));
        }
        self.ops.push(FakeOp::Size { axis, size });
        Ok(())
    }
}
