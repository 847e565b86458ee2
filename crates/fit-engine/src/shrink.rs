//! Last-resort resolver for an axis where neither end holds the target at
//! its natural size.

use fit_geom::{Axis, Side};
use tracing::warn;

use crate::{
    align::AxisSpace,
    diagnostics::{Diagnostic, PASS_COUNTERS},
};

/// Final placement for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    /// Side the target is anchored to.
    pub side: Side,
    /// Size along the axis after resolution; equals the natural size unless
    /// the target had to shrink.
    pub size: f64,
    /// Whether the shrink resolver produced this placement.
    pub shrunk: bool,
}

/// Place the target on the side with strictly more room, shrunk to what
/// that side offers (never grown, never negative). A configured minimum
/// size overrides the shrink downward bound: the result is then applied at
/// the minimum even though it clips.
///
/// Always produces a placement; the two advisory conditions are pushed onto
/// `diagnostics` and logged, nothing more.
pub(crate) fn resolve(
    axis: Axis,
    space: AxisSpace,
    natural: f64,
    min_size: Option<f64>,
    diagnostics: &mut Vec<Diagnostic>,
) -> AxisPlacement {
    let side = if space.start > space.end {
        Side::Start
    } else {
        Side::End
    };
    let available = space.at(side);
    let mut size = natural.min(available).max(0.0);

    if let Some(min) = min_size
        && size < min
    {
        warn!(
            "axis={}: minimum size {:.1} exceeds available space {:.1}; applying it anyway",
            axis, min, available
        );
        let d = Diagnostic::BelowMinimum {
            axis,
            min,
            available,
        };
        PASS_COUNTERS.record_diagnostic(&d);
        diagnostics.push(d);
        size = min;
    }

    if size < natural {
        warn!(
            "axis={}: shrinking target from {:.1} to {:.1} to fit at {}",
            axis, natural, size, side
        );
        let d = Diagnostic::DegradedFit {
            axis,
            natural,
            size,
        };
        PASS_COUNTERS.record_diagnostic(&d);
        diagnostics.push(d);
    }

    AxisPlacement {
        side,
        size,
        shrunk: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(start: f64, end: f64) -> AxisSpace {
        AxisSpace { start, end }
    }

    #[test]
    fn roomier_side_wins() {
        let mut diags = Vec::new();
        let p = resolve(Axis::Y, space(70.0, 50.0), 80.0, None, &mut diags);
        assert_eq!(p.side, Side::Start);
        assert_eq!(p.size, 70.0);
        assert!(p.shrunk);
        assert_eq!(
            diags,
            vec![Diagnostic::DegradedFit {
                axis: Axis::Y,
                natural: 80.0,
                size: 70.0
            }]
        );
    }

    #[test]
    fn exact_tie_goes_to_end() {
        let mut diags = Vec::new();
        let p = resolve(Axis::Y, space(30.0, 30.0), 80.0, None, &mut diags);
        assert_eq!(p.side, Side::End);
    }

    #[test]
    fn never_grows_past_natural() {
        // Reachable when a minimum-size override forced the other axis into
        // the shrink path; the roomier side may exceed the natural size.
        let mut diags = Vec::new();
        let p = resolve(Axis::X, space(500.0, 10.0), 80.0, None, &mut diags);
        assert_eq!(p.size, 80.0);
        assert!(diags.is_empty());
    }

    #[test]
    fn negative_space_clamps_to_zero() {
        let mut diags = Vec::new();
        let p = resolve(Axis::Y, space(-20.0, -40.0), 80.0, None, &mut diags);
        assert_eq!(p.side, Side::Start);
        assert_eq!(p.size, 0.0);
    }

    #[test]
    fn satisfiable_minimum_leaves_size_alone() {
        let mut diags = Vec::new();
        let p = resolve(Axis::Y, space(70.0, 50.0), 80.0, Some(60.0), &mut diags);
        assert_eq!(p.size, 70.0);
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0], Diagnostic::DegradedFit { .. }));
    }

    #[test]
    fn unsatisfiable_minimum_is_applied_and_reported() {
        let mut diags = Vec::new();
        let p = resolve(Axis::Y, space(30.0, 30.0), 80.0, Some(60.0), &mut diags);
        assert_eq!(p.side, Side::End);
        assert_eq!(p.size, 60.0);
        assert!(diags.contains(&Diagnostic::BelowMinimum {
            axis: Axis::Y,
            min: 60.0,
            available: 30.0
        }));
        assert!(
            diags
                .iter()
                .any(|d| matches!(d, Diagnostic::DegradedFit { .. }))
        );
    }
}
