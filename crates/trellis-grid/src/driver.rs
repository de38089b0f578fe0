//! Boundary to the external drag-interaction library.

use trellis_core::DriverError;

use crate::grid::GridPanelId;

/// Position and handle element of one splitter, resolved against the live
/// track order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GutterDescriptor {
    /// Resolved ordered track index the splitter sits next to.
    pub track: i64,
    /// CSS selector of the handle element.
    pub selector: String,
}

/// A sparse pixel constraint for one track position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackConstraint {
    /// Ordered track index.
    pub track: usize,
    /// Constraint value in pixels.
    pub constraint: f64,
}

/// Structural and constraint metadata pushed to the drag library whenever
/// the splitter set changes.
///
/// Constraint maps are populated only for an axis that has splitters; the
/// drag library enforces them at drag time in place of static CSS clamping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitterUpdate {
    pub grid: GridPanelId,
    pub row_gutters: Vec<GutterDescriptor>,
    pub column_gutters: Vec<GutterDescriptor>,
    pub row_min_constraints: Vec<TrackConstraint>,
    pub row_max_constraints: Vec<TrackConstraint>,
    pub column_min_constraints: Vec<TrackConstraint>,
    pub column_max_constraints: Vec<TrackConstraint>,
    pub row_snap_offset: f64,
    pub column_snap_offset: f64,
    pub row_drag_interval: f64,
    pub column_drag_interval: f64,
}

impl SplitterUpdate {
    /// Whether any splitter-adjacent track carries a min/max constraint.
    pub fn has_constraints(&self) -> bool {
        !self.row_min_constraints.is_empty()
            || !self.row_max_constraints.is_empty()
            || !self.column_min_constraints.is_empty()
            || !self.column_max_constraints.is_empty()
    }
}

/// The external drag-interaction library.
///
/// Implementations receive structural metadata whenever the splitter set
/// changes and perform the actual pointer tracking. Completed resizes come
/// back through [`GridPanel::splitter_resized`](crate::GridPanel::splitter_resized)
/// as a compiled template string per axis.
pub trait SplitterDriver {
    /// Re-sync the driver with the panel's splitters and constraints.
    fn update_splitters(&mut self, update: &SplitterUpdate) -> Result<(), DriverError>;

    /// Tear down any state held for the panel.
    fn dispose_splitters(&mut self, grid: GridPanelId) -> Result<(), DriverError>;
}
