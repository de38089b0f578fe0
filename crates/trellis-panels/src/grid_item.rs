//! Grid panel children: placement plus element styling.

use trellis_core::{HorizontalAlignment, VerticalAlignment};
use trellis_grid::{CellPlacement, GridPanel, ResolvedPlacement};

use crate::element::ElementFrame;

/// A child of a grid panel.
#[derive(Debug, Clone, Default)]
pub struct GridItem {
    pub frame: ElementFrame,
    pub placement: CellPlacement,
}

impl GridItem {
    /// Wrap an element frame with a placement.
    pub fn new(frame: ElementFrame, placement: CellPlacement) -> Self {
        Self { frame, placement }
    }

    /// Resolve the placement against the owning grid's live track order.
    pub fn resolved_placement(&self, grid: &GridPanel) -> ResolvedPlacement {
        self.placement.resolve(grid)
    }

    /// A child may not stretch into a span whose size is driven by its
    /// content.
    pub fn stretch_for_implicit_width(&self, grid: &GridPanel) -> bool {
        self.frame.horizontal_alignment == HorizontalAlignment::Stretch
            && !self.resolved_placement(grid).column_sized_to_content
    }

    pub fn stretch_for_implicit_height(&self, grid: &GridPanel) -> bool {
        self.frame.vertical_alignment == VerticalAlignment::Stretch
            && !self.resolved_placement(grid).row_sized_to_content
    }

    /// CSS placement fragment for the item's container.
    pub fn grid_area_css(&self, grid: &GridPanel) -> String {
        self.resolved_placement(grid).grid_area_css()
    }

    /// Width directive for the item element.
    pub fn element_width_css(&self, grid: &GridPanel) -> String {
        self.frame.element_width_css(self.stretch_for_implicit_width(grid))
    }

    /// Height directive for the item element.
    pub fn element_height_css(&self, grid: &GridPanel) -> String {
        self.frame.element_height_css(self.stretch_for_implicit_height(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_grid::TrackDefinition;

    fn grid() -> GridPanel {
        let mut grid = GridPanel::new();
        grid.add_row(TrackDefinition::new("auto").with_name("header"));
        grid.add_row(TrackDefinition::new("*"));
        grid.add_column(TrackDefinition::new("200").with_name("sidebar"));
        grid.add_column(TrackDefinition::new("*"));
        grid
    }

    #[test]
    fn placement_compiles_to_one_based_lines() {
        let grid = grid();
        let item = GridItem {
            placement: CellPlacement::at("1", "sidebar"),
            ..Default::default()
        };
        assert_eq!(
            item.grid_area_css(&grid),
            "grid-row: 2 / span 1; grid-column: 1 / span 1;"
        );
    }

    #[test]
    fn content_sized_rows_suppress_vertical_stretch() {
        let grid = grid();
        let header_item = GridItem {
            placement: CellPlacement::at("header", "1"),
            ..Default::default()
        };
        assert!(!header_item.stretch_for_implicit_height(&grid));
        assert!(header_item.stretch_for_implicit_width(&grid));
        assert_eq!(header_item.element_height_css(&grid), "max-content");
        assert_eq!(header_item.element_width_css(&grid), "100%");
    }

    #[test]
    fn explicit_alignment_also_suppresses_stretch() {
        let grid = grid();
        let item = GridItem::new(
            ElementFrame::new().with_vertical_alignment(VerticalAlignment::Top),
            CellPlacement::at("1", "1"),
        );
        assert!(!item.stretch_for_implicit_height(&grid));
    }
}
