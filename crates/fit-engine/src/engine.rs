//! The two-axis placement pass.

use fit_geom::{Axis, Boundary, EdgeSpacing, Size};
use tracing::debug;

use crate::{
    adapter::{AnchorBox, AxisRole, LayoutAdapter},
    align::{self, AxisInputs},
    config::{FitOptions, MinSizeLookup},
    error::Result,
    shrink::{self, AxisPlacement},
};

/// Final two-axis placement with any advisory diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Main-axis resolution.
    pub main: AxisPlacement,
    /// Secondary-axis resolution.
    pub secondary: AxisPlacement,
    /// Advisory conditions observed while resolving, in axis order.
    pub diagnostics: Vec<crate::Diagnostic>,
}

/// Outcome of a single unconditional placement pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    /// Both axes were resolved and applied.
    Placed(Placement),
    /// The anchor is no longer mounted; nothing was measured or written.
    AnchorGone,
}

/// One placement pass over a [`LayoutAdapter`].
///
/// `execute` is unconditional: it re-measures and re-applies even when
/// nothing changed. The feedback-loop guard lives in
/// [`FitSession`](crate::FitSession).
pub struct PlacementEngine<'a, A: LayoutAdapter> {
    adapter: &'a mut A,
    options: &'a FitOptions,
}

impl<'a, A: LayoutAdapter> PlacementEngine<'a, A> {
    /// Engine over the supplied adapter and options.
    pub fn new(adapter: &'a mut A, options: &'a FitOptions) -> Self {
        Self { adapter, options }
    }

    /// Normalize the positioning context, then resolve and apply the main
    /// axis followed by the orthogonal axis. Both resolutions complete
    /// before this returns; a partial single-axis application would leave
    /// the target mispositioned on the other axis.
    pub fn execute(&mut self) -> Result<PassOutcome> {
        let Some(anchor) = self.adapter.anchor()? else {
            debug!("anchor unmounted; pass abandoned");
            return Ok(PassOutcome::AnchorGone);
        };
        self.adapter.normalize()?;

        let natural = self.adapter.natural_size()?;
        let scroll = self.adapter.scroll_boundary()?;
        let document = self.adapter.document_boundary()?;
        let spacing = self.options.spacing.edges();

        let main_axis = self.options.main_axis;
        let mut diagnostics = Vec::new();
        let main = self.resolve_axis(
            main_axis,
            AxisRole::Primary,
            self.options.invert_axis,
            &anchor,
            natural,
            &scroll,
            &document,
            spacing,
            &mut diagnostics,
        )?;
        let secondary = self.resolve_axis(
            main_axis.orthogonal(),
            AxisRole::Secondary,
            self.options.invert_secondary_axis,
            &anchor,
            natural,
            &scroll,
            &document,
            spacing,
            &mut diagnostics,
        )?;

        debug!(
            "placed: main={}@{} size={:.1} secondary={}@{} size={:.1}",
            main_axis, main.side, main.size, main_axis.orthogonal(), secondary.side, secondary.size
        );
        Ok(PassOutcome::Placed(Placement {
            main,
            secondary,
            diagnostics,
        }))
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_axis(
        &mut self,
        axis: Axis,
        role: AxisRole,
        invert: bool,
        anchor: &AnchorBox,
        natural: Size,
        scroll: &Boundary,
        document: &Boundary,
        spacing: EdgeSpacing,
        diagnostics: &mut Vec<crate::Diagnostic>,
    ) -> Result<AxisPlacement> {
        let space = align::available_space(&AxisInputs {
            axis,
            role,
            anchor,
            scroll,
            document,
            spacing,
            scrollbar: self.options.scrollbar,
        });
        let natural = natural.along(axis);

        if let Some(side) = align::choose_side(space, natural, invert) {
            debug!("axis={}: fits at {} with {:.1}", axis, side, natural);
            self.adapter.apply_side(axis, side, role)?;
            return Ok(AxisPlacement {
                side,
                size: natural,
                shrunk: false,
            });
        }

        let min_axis = match self.options.min_size_lookup {
            MinSizeLookup::ResolvedAxis => axis,
            MinSizeLookup::MainAxis => self.options.main_axis,
        };
        let min_size = self.adapter.min_size(min_axis)?;
        let placement = shrink::resolve(axis, space, natural, min_size, diagnostics);
        self.adapter.apply_size(axis, placement.size)?;
        self.adapter.apply_side(axis, placement.side, role)?;
        Ok(placement)
    }
}
