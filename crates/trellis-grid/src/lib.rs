//! Track layout and splitter coordination for trellis grid panels.
//!
//! A grid panel owns one [`TrackList`] per axis. Track definitions declare
//! their size intent (`"auto"`, absolute pixels, or fractional shares) and
//! the list compiles the axis into a single CSS grid-template string:
//! fractional shares are normalized, min/max pixel constraints become
//! `minmax(..)` clamps, and live resize overrides from the drag-interaction
//! driver supersede declared sizes.
//!
//! # Example
//!
//! ```
//! use trellis_grid::{GridPanel, TrackDefinition};
//!
//! let mut grid = GridPanel::new();
//! grid.add_column(TrackDefinition::new("200").with_name("sidebar"));
//! grid.add_column(TrackDefinition::new("*"));
//!
//! let columns = grid.grid_template_columns_css().unwrap();
//! assert_eq!(columns, "200px 1fr");
//! ```

mod driver;
mod grid;
mod placement;
mod splitter;
mod track;
mod tracks;

pub use driver::{GutterDescriptor, SplitterDriver, SplitterUpdate, TrackConstraint};
pub use grid::{GridPanel, GridPanelId, RenderPass, SplitterResized};
pub use placement::{CellPlacement, ResolvedPlacement};
pub use splitter::{SplitterHandle, SplitterId, SplitterSet};
pub use track::{TrackDefinition, TrackId};
pub use tracks::{TrackList, TrackSizeReport};
