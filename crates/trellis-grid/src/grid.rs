//! The grid panel: two track lists, a splitter set, and the coordination
//! protocol with the drag-interaction driver.

use std::sync::atomic::{AtomicU64, Ordering};

use trellis_core::{Axis, LayoutError};

use crate::driver::{GutterDescriptor, SplitterDriver, SplitterUpdate, TrackConstraint};
use crate::splitter::{SplitterHandle, SplitterId, SplitterSet};
use crate::track::{TrackDefinition, TrackId};
use crate::tracks::{TrackList, TrackSizeReport};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a grid panel, used to scope driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPanelId(pub u64);

/// Outcome of an [`after_render`](GridPanel::after_render) pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RenderPass {
    /// Template strings are current; nothing further to do.
    Settled,
    /// The host must run one more compile pass after the current cycle, so
    /// that splitter-adjacent tracks drop their static clamping. The
    /// handshake is not re-issued on that pass.
    Rerender,
}

/// Observable notification of a completed interactive resize.
///
/// Carries the declarative size and name of every track on both axes, in
/// ordered sequence, regardless of which axis changed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitterResized {
    pub rows: Vec<TrackSizeReport>,
    pub columns: Vec<TrackSizeReport>,
}

/// A grid container composing row and column tracks with splitters.
#[derive(Debug)]
pub struct GridPanel {
    id: GridPanelId,
    rows: TrackList,
    columns: TrackList,
    splitters: SplitterSet,
    root_width_css: String,
    root_height_css: String,
    row_snap_offset: f64,
    column_snap_offset: f64,
    row_drag_interval: f64,
    column_drag_interval: f64,
    splitters_dirty: bool,
    registered: bool,
    disposed: bool,
}

impl Default for GridPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPanel {
    /// Create an empty grid panel filling its parent.
    pub fn new() -> Self {
        Self {
            id: GridPanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed)),
            rows: TrackList::new(Axis::Row),
            columns: TrackList::new(Axis::Column),
            splitters: SplitterSet::new(),
            root_width_css: "100%".to_string(),
            root_height_css: "100%".to_string(),
            row_snap_offset: 0.0,
            column_snap_offset: 0.0,
            row_drag_interval: 1.0,
            column_drag_interval: 1.0,
            splitters_dirty: false,
            registered: false,
            disposed: false,
        }
    }

    /// Set the root width CSS value.
    pub fn with_root_width_css(mut self, width: impl Into<String>) -> Self {
        self.root_width_css = width.into();
        self
    }

    /// Set the root height CSS value.
    pub fn with_root_height_css(mut self, height: impl Into<String>) -> Self {
        self.root_height_css = height.into();
        self
    }

    /// Set the snap offsets handed to the drag driver, in pixels.
    pub fn with_snap_offsets(mut self, row: f64, column: f64) -> Self {
        self.row_snap_offset = row;
        self.column_snap_offset = column;
        self
    }

    /// Set the drag step intervals handed to the drag driver, in pixels.
    pub fn with_drag_intervals(mut self, row: f64, column: f64) -> Self {
        self.row_drag_interval = row;
        self.column_drag_interval = column;
        self
    }

    /// This panel's id.
    pub fn id(&self) -> GridPanelId {
        self.id
    }

    /// The row track list.
    pub fn rows(&self) -> &TrackList {
        &self.rows
    }

    /// The column track list.
    pub fn columns(&self) -> &TrackList {
        &self.columns
    }

    /// Register a row track.
    pub fn add_row(&mut self, definition: TrackDefinition) -> TrackId {
        self.rows.add(definition)
    }

    /// Remove a row track.
    pub fn remove_row(&mut self, id: TrackId) -> Option<TrackDefinition> {
        self.rows.remove(id)
    }

    /// Register a column track.
    pub fn add_column(&mut self, definition: TrackDefinition) -> TrackId {
        self.columns.add(definition)
    }

    /// Remove a column track.
    pub fn remove_column(&mut self, id: TrackId) -> Option<TrackDefinition> {
        self.columns.remove(id)
    }

    /// Register a splitter handle. The driver re-syncs on the next
    /// [`after_render`](Self::after_render).
    pub fn add_splitter(&mut self, handle: SplitterHandle) -> SplitterId {
        let id = self.splitters.add(handle);
        self.splitters_dirty = true;
        id
    }

    /// Remove a splitter handle.
    pub fn remove_splitter(&mut self, id: SplitterId) -> Option<SplitterHandle> {
        let handle = self.splitters.remove(id);
        if handle.is_some() {
            self.splitters_dirty = true;
        }
        handle
    }

    /// Resolve a symbolic row reference to an ordered index.
    pub fn grid_row_index(&self, reference: Option<&str>) -> i64 {
        self.rows.resolve_index(reference)
    }

    /// Resolve a symbolic column reference to an ordered index.
    pub fn grid_column_index(&self, reference: Option<&str>) -> i64 {
        self.columns.resolve_index(reference)
    }

    /// Whether any row in the span is sized to its content.
    pub fn is_row_sized_to_content(&self, reference: Option<&str>, span: usize) -> bool {
        self.rows.is_sized_to_content(reference, span)
    }

    /// Whether any column in the span is sized to its content.
    pub fn is_column_sized_to_content(&self, reference: Option<&str>, span: usize) -> bool {
        self.columns.is_sized_to_content(reference, span)
    }

    /// Compiled `grid-template-rows` value.
    pub fn grid_template_rows_css(&self) -> Result<String, LayoutError> {
        self.rows.grid_template_css(&self.splitters)
    }

    /// Compiled `grid-template-columns` value.
    pub fn grid_template_columns_css(&self) -> Result<String, LayoutError> {
        self.columns.grid_template_css(&self.splitters)
    }

    /// Full style string for the grid root element.
    pub fn style_css(&self) -> Result<String, LayoutError> {
        Ok(format!(
            "display: grid; grid-template-rows: {}; grid-template-columns: {}; \
             overflow: clip; box-sizing: border-box; width: {}; height: {};",
            self.grid_template_rows_css()?,
            self.grid_template_columns_css()?,
            self.root_width_css,
            self.root_height_css,
        ))
    }

    /// Re-sync the drag driver after a render pass, when the splitter set
    /// changed.
    ///
    /// Splitter adjacency is only known once children have rendered, after
    /// the template strings were first compiled. When any splitter-adjacent
    /// track carries min/max constraints, the returned [`RenderPass::Rerender`]
    /// asks the host for exactly one more compile pass, which regenerates
    /// the templates with clamping suppressed for those tracks. The dirty
    /// flag is already clear by then, so the handshake is not re-issued for
    /// the same structural state.
    pub fn after_render(&mut self, driver: &mut dyn SplitterDriver) -> Result<RenderPass, LayoutError> {
        if !self.splitters_dirty {
            return Ok(RenderPass::Settled);
        }
        self.splitters_dirty = false;

        let row_gutters: Vec<GutterDescriptor> = self
            .splitters
            .for_axis(Axis::Row)
            .map(|splitter| GutterDescriptor {
                track: self.rows.resolve_index(splitter.track()),
                selector: splitter.selector(),
            })
            .collect();
        let column_gutters: Vec<GutterDescriptor> = self
            .splitters
            .for_axis(Axis::Column)
            .map(|splitter| GutterDescriptor {
                track: self.columns.resolve_index(splitter.track()),
                selector: splitter.selector(),
            })
            .collect();

        let (row_min_constraints, row_max_constraints) = if row_gutters.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                constraints(&self.rows, |track| track.min_size),
                constraints(&self.rows, |track| track.max_size),
            )
        };
        let (column_min_constraints, column_max_constraints) = if column_gutters.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                constraints(&self.columns, |track| track.min_size),
                constraints(&self.columns, |track| track.max_size),
            )
        };

        let update = SplitterUpdate {
            grid: self.id,
            row_gutters,
            column_gutters,
            row_min_constraints,
            row_max_constraints,
            column_min_constraints,
            column_max_constraints,
            row_snap_offset: self.row_snap_offset,
            column_snap_offset: self.column_snap_offset,
            row_drag_interval: self.row_drag_interval,
            column_drag_interval: self.column_drag_interval,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            grid = self.id.0,
            row_gutters = update.row_gutters.len(),
            column_gutters = update.column_gutters.len(),
            "splitter handshake"
        );

        driver.update_splitters(&update)?;
        self.registered = true;

        if update.has_constraints() {
            #[cfg(feature = "tracing")]
            tracing::debug!(grid = self.id.0, "rerender to drop static clamping");
            Ok(RenderPass::Rerender)
        } else {
            Ok(RenderPass::Settled)
        }
    }

    /// Ingest a completed interactive resize reported by the drag driver.
    ///
    /// The compiled template string for the resized axis is split into
    /// per-track values and persisted as overrides; the returned event
    /// reports the declarative size of every track on both axes.
    pub fn splitter_resized(
        &mut self,
        axis: Axis,
        grid_template: &str,
    ) -> Result<SplitterResized, LayoutError> {
        let values: Vec<String> = grid_template
            .split_whitespace()
            .map(str::to_string)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(grid = self.id.0, ?axis, tracks = values.len(), "resize completed");

        match axis {
            Axis::Row => self.rows.set_overrides(&values),
            Axis::Column => self.columns.set_overrides(&values),
        }

        Ok(SplitterResized {
            rows: self.rows.size_reports()?,
            columns: self.columns.size_reports()?,
        })
    }

    /// Release driver state held for this panel.
    ///
    /// Idempotent: double-dispose and dispose-without-handshake are no-ops.
    /// A teardown failure in the driver never blocks disposal.
    pub fn dispose(&mut self, driver: &mut dyn SplitterDriver) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if !self.registered {
            return;
        }

        if let Err(_error) = driver.dispose_splitters(self.id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(grid = self.id.0, "driver teardown failed: {_error}");
        }
    }
}

/// Sparse per-position constraints over the ordered tracks.
fn constraints(
    tracks: &TrackList,
    select: impl Fn(&TrackDefinition) -> Option<f64>,
) -> Vec<TrackConstraint> {
    tracks
        .ordered()
        .iter()
        .enumerate()
        .filter_map(|(index, track)| {
            select(track).map(|constraint| TrackConstraint { track: index, constraint })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::DriverError;

    #[derive(Default)]
    struct RecordingDriver {
        updates: Vec<SplitterUpdate>,
        disposed: Vec<GridPanelId>,
        fail_dispose: bool,
    }

    impl SplitterDriver for RecordingDriver {
        fn update_splitters(&mut self, update: &SplitterUpdate) -> Result<(), DriverError> {
            self.updates.push(update.clone());
            Ok(())
        }

        fn dispose_splitters(&mut self, grid: GridPanelId) -> Result<(), DriverError> {
            self.disposed.push(grid);
            if self.fail_dispose {
                Err(DriverError::new("teardown exploded"))
            } else {
                Ok(())
            }
        }
    }

    fn sidebar_layout() -> GridPanel {
        let mut grid = GridPanel::new();
        grid.add_column(
            TrackDefinition::new("200")
                .with_name("sidebar")
                .with_min_size(100.0)
                .with_max_size(400.0),
        );
        grid.add_column(TrackDefinition::new("*"));
        grid
    }

    #[test]
    fn handshake_runs_once_per_dirty_cycle() {
        let mut grid = sidebar_layout();
        let mut driver = RecordingDriver::default();

        assert_eq!(grid.after_render(&mut driver).unwrap(), RenderPass::Settled);
        assert!(driver.updates.is_empty());

        grid.add_splitter(SplitterHandle::new(Axis::Column, Some("sidebar")));
        let pass = grid.after_render(&mut driver).unwrap();
        assert_eq!(pass, RenderPass::Rerender);
        assert_eq!(driver.updates.len(), 1);

        // The forced second pass compiles again but must not re-handshake.
        assert_eq!(grid.after_render(&mut driver).unwrap(), RenderPass::Settled);
        assert_eq!(driver.updates.len(), 1);
    }

    #[test]
    fn handshake_carries_structure_and_constraints() {
        let mut grid = sidebar_layout()
            .with_snap_offsets(0.0, 12.0)
            .with_drag_intervals(1.0, 8.0);
        let splitter = SplitterHandle::new(Axis::Column, Some("sidebar"));
        let selector = splitter.selector();
        grid.add_splitter(splitter);

        let mut driver = RecordingDriver::default();
        let _ = grid.after_render(&mut driver).unwrap();

        let update = &driver.updates[0];
        assert_eq!(update.grid, grid.id());
        assert!(update.row_gutters.is_empty());
        assert_eq!(
            update.column_gutters,
            vec![GutterDescriptor { track: 0, selector }]
        );
        assert!(update.row_min_constraints.is_empty());
        assert_eq!(
            update.column_min_constraints,
            vec![TrackConstraint { track: 0, constraint: 100.0 }]
        );
        assert_eq!(
            update.column_max_constraints,
            vec![TrackConstraint { track: 0, constraint: 400.0 }]
        );
        assert_eq!(update.column_snap_offset, 12.0);
        assert_eq!(update.column_drag_interval, 8.0);
    }

    #[test]
    fn unconstrained_splitters_settle_in_one_pass() {
        let mut grid = GridPanel::new();
        grid.add_column(TrackDefinition::new("200"));
        grid.add_column(TrackDefinition::new("*"));
        grid.add_splitter(SplitterHandle::new(Axis::Column, Some("0")));

        let mut driver = RecordingDriver::default();
        assert_eq!(grid.after_render(&mut driver).unwrap(), RenderPass::Settled);
        assert_eq!(driver.updates.len(), 1);
    }

    #[test]
    fn splitter_removal_resyncs_with_empty_structure() {
        let mut grid = sidebar_layout();
        let splitter = grid.add_splitter(SplitterHandle::new(Axis::Column, Some("sidebar")));
        let mut driver = RecordingDriver::default();
        let _ = grid.after_render(&mut driver).unwrap();

        grid.remove_splitter(splitter);
        assert_eq!(grid.after_render(&mut driver).unwrap(), RenderPass::Settled);
        assert_eq!(driver.updates.len(), 2);
        assert!(driver.updates[1].column_gutters.is_empty());
    }

    #[test]
    fn clamping_returns_once_splitter_is_removed() {
        let mut grid = sidebar_layout();
        let splitter = grid.add_splitter(SplitterHandle::new(Axis::Column, Some("1")));
        assert_eq!(grid.grid_template_columns_css().unwrap(), "200px 1fr");

        grid.remove_splitter(splitter);
        assert_eq!(
            grid.grid_template_columns_css().unwrap(),
            "minmax(100px, 400px) 1fr"
        );
    }

    #[test]
    fn resize_event_reports_both_axes_declaratively() {
        let mut grid = sidebar_layout();
        grid.add_row(TrackDefinition::new("auto").with_name("header"));
        grid.add_row(TrackDefinition::new("*"));

        let event = grid.splitter_resized(Axis::Column, "120px 1fr").unwrap();
        assert_eq!(
            event.columns,
            vec![
                TrackSizeReport { size: "120".to_string(), name: Some("sidebar".to_string()) },
                TrackSizeReport { size: "1*".to_string(), name: None },
            ]
        );
        assert_eq!(
            event.rows,
            vec![
                TrackSizeReport { size: "auto".to_string(), name: Some("header".to_string()) },
                TrackSizeReport { size: "1*".to_string(), name: None },
            ]
        );
    }

    #[test]
    fn named_override_survives_reordering_after_resize() {
        let mut grid = sidebar_layout();
        let _ = grid.splitter_resized(Axis::Column, "120px 1fr").unwrap();
        assert_eq!(grid.grid_template_columns_css().unwrap(), "120px 1fr");

        // A third unnamed column sorted in front shifts every position;
        // the sidebar keeps its resized width by name.
        grid.add_column(TrackDefinition::new("60").with_sort_order(-1));
        assert_eq!(grid.grid_template_columns_css().unwrap(), "120px 120px 1fr");
    }

    #[test]
    fn compound_resize_values_fail_loudly() {
        let mut grid = sidebar_layout();
        let result = grid.splitter_resized(Axis::Column, "minmax(100px, 400px) 1fr");
        assert!(result.is_err());
    }

    #[test]
    fn dispose_is_idempotent_and_swallows_teardown_failure() {
        let mut grid = sidebar_layout();
        grid.add_splitter(SplitterHandle::new(Axis::Column, Some("sidebar")));

        let mut driver = RecordingDriver { fail_dispose: true, ..Default::default() };
        let _ = grid.after_render(&mut driver).unwrap();

        grid.dispose(&mut driver);
        grid.dispose(&mut driver);
        assert_eq!(driver.disposed, vec![grid.id()]);
    }

    #[test]
    fn dispose_without_handshake_never_calls_the_driver() {
        let mut grid = sidebar_layout();
        let mut driver = RecordingDriver::default();
        grid.dispose(&mut driver);
        assert!(driver.disposed.is_empty());
    }
}
