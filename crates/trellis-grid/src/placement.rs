//! Child placement across grid tracks.

use crate::grid::GridPanel;

/// Declared placement of a child element: a symbolic track reference and a
/// span per axis. References may be a track name or a numeric index; an
/// absent reference means the first track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPlacement {
    pub row: Option<String>,
    pub column: Option<String>,
    pub row_span: usize,
    pub column_span: usize,
}

impl Default for CellPlacement {
    fn default() -> Self {
        Self {
            row: None,
            column: None,
            row_span: 1,
            column_span: 1,
        }
    }
}

impl CellPlacement {
    /// Place at a row and column reference with single-cell spans.
    pub fn at(row: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            row: Some(row.into()),
            column: Some(column.into()),
            ..Self::default()
        }
    }

    /// Set the row span.
    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    /// Set the column span.
    pub fn with_column_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Resolve against the owning grid's live track order.
    pub fn resolve(&self, grid: &GridPanel) -> ResolvedPlacement {
        ResolvedPlacement {
            row_start: grid.grid_row_index(self.row.as_deref()) + 1,
            row_span: self.row_span,
            column_start: grid.grid_column_index(self.column.as_deref()) + 1,
            column_span: self.column_span,
            row_sized_to_content: grid.is_row_sized_to_content(self.row.as_deref(), self.row_span),
            column_sized_to_content: grid
                .is_column_sized_to_content(self.column.as_deref(), self.column_span),
        }
    }
}

/// Concrete 1-based grid lines and content-sizing flags for one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlacement {
    /// 1-based starting grid line for the row axis.
    pub row_start: i64,
    pub row_span: usize,
    /// 1-based starting grid line for the column axis.
    pub column_start: i64,
    pub column_span: usize,
    /// Whether any spanned row is sized to content, suppressing vertical
    /// stretch.
    pub row_sized_to_content: bool,
    /// Whether any spanned column is sized to content, suppressing
    /// horizontal stretch.
    pub column_sized_to_content: bool,
}

impl ResolvedPlacement {
    /// CSS placement fragment for the child's container element.
    pub fn grid_area_css(&self) -> String {
        format!(
            "grid-row: {} / span {}; grid-column: {} / span {};",
            self.row_start, self.row_span, self.column_start, self.column_span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackDefinition;

    fn grid() -> GridPanel {
        let mut grid = GridPanel::new();
        grid.add_row(TrackDefinition::new("auto").with_name("header"));
        grid.add_row(TrackDefinition::new("*"));
        grid.add_column(TrackDefinition::new("200").with_name("sidebar"));
        grid.add_column(TrackDefinition::new("*"));
        grid
    }

    #[test]
    fn references_resolve_to_one_based_lines() {
        let grid = grid();
        let placement = CellPlacement::at("header", "1").resolve(&grid);
        assert_eq!(placement.row_start, 1);
        assert_eq!(placement.column_start, 2);
        assert_eq!(placement.grid_area_css(), "grid-row: 1 / span 1; grid-column: 2 / span 1;");
    }

    #[test]
    fn absent_references_mean_the_first_track() {
        let grid = grid();
        let placement = CellPlacement::default().resolve(&grid);
        assert_eq!(placement.row_start, 1);
        assert_eq!(placement.column_start, 1);
    }

    #[test]
    fn unknown_names_land_past_the_end() {
        let grid = grid();
        let placement = CellPlacement::at("missing", "0").resolve(&grid);
        assert_eq!(placement.row_start, 3);
    }

    #[test]
    fn content_sized_spans_suppress_stretch() {
        let grid = grid();

        let spanning = CellPlacement::at("header", "sidebar").with_row_span(2);
        let placement = spanning.resolve(&grid);
        assert!(placement.row_sized_to_content);
        assert!(!placement.column_sized_to_content);

        let body_only = CellPlacement::at("1", "0").resolve(&grid);
        assert!(!body_only.row_sized_to_content);
    }
}
