//! Options recognized by the placement engine.

use fit_geom::{Axis, Spacing};
use serde::{Deserialize, Serialize};

/// Which available-space figures the scroll boundary's scrollbar gutter is
/// subtracted from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ScrollbarPolicy {
    /// Derate only the end-side figure.
    #[default]
    EndOnly,
    /// Derate both figures.
    BothEnds,
}

/// Which axis's minimum-size constraint the shrink resolver consults.
///
/// The two variants only differ when resolving the secondary axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum MinSizeLookup {
    /// Read the constraint of the axis being resolved.
    #[default]
    ResolvedAxis,
    /// Always read the main axis's constraint.
    MainAxis,
}

/// Placement options, deserializable from host configuration.
///
/// Every field has a default, so `{}` is a valid document. `spacing`
/// accepts either a bare number or a `{top,left,right,bottom}` object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FitOptions {
    /// Primary placement axis.
    pub main_axis: Axis,
    /// Prefer the start side on the main axis.
    pub invert_axis: bool,
    /// Prefer the start side on the secondary axis.
    pub invert_secondary_axis: bool,
    /// Clearance kept between the target and boundary edges.
    pub spacing: Spacing,
    /// Scrollbar-gutter compensation policy.
    pub scrollbar: ScrollbarPolicy,
    /// Minimum-size key consulted when shrinking.
    pub min_size_lookup: MinSizeLookup,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            main_axis: Axis::Y,
            invert_axis: false,
            invert_secondary_axis: false,
            spacing: Spacing::default(),
            scrollbar: ScrollbarPolicy::default(),
            min_size_lookup: MinSizeLookup::default(),
        }
    }
}
