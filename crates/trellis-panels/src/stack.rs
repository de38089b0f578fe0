//! Stack panel: children flow along one axis.

use trellis_core::{HorizontalAlignment, Orientation, VerticalAlignment};

use crate::element::ElementFrame;

/// A container laying children out in a single row or column.
#[derive(Debug, Clone)]
pub struct StackPanel {
    pub orientation: Orientation,
    pub root_width_css: String,
    pub root_height_css: String,
}

impl Default for StackPanel {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl StackPanel {
    /// Create a stack panel filling its parent.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            root_width_css: "100%".to_string(),
            root_height_css: "100%".to_string(),
        }
    }

    /// Style string for the panel's root element.
    pub fn style_css(&self) -> String {
        format!(
            "display: flex; flex-direction: {}; flex-wrap: nowrap; overflow: clip; \
             box-sizing: border-box; width: {}; height: {}",
            self.flex_direction_css(),
            self.root_width_css,
            self.root_height_css,
        )
    }

    fn flex_direction_css(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "row",
            Orientation::Vertical => "column",
        }
    }
}

/// A child of a stack panel.
#[derive(Debug, Clone, Default)]
pub struct StackItem {
    pub frame: ElementFrame,
}

impl StackItem {
    /// Wrap an element frame.
    pub fn new(frame: ElementFrame) -> Self {
        Self { frame }
    }

    /// Children never stretch along the stacking axis; that axis is sized
    /// by content flow.
    pub fn stretch_for_implicit_width(&self, panel: &StackPanel) -> bool {
        self.frame.horizontal_alignment == HorizontalAlignment::Stretch
            && panel.orientation != Orientation::Horizontal
    }

    pub fn stretch_for_implicit_height(&self, panel: &StackPanel) -> bool {
        self.frame.vertical_alignment == VerticalAlignment::Stretch
            && panel.orientation != Orientation::Vertical
    }

    /// Cross-axis alignment directive for the item.
    pub fn alignment_css(&self, panel: &StackPanel) -> &'static str {
        match panel.orientation {
            Orientation::Horizontal => self.frame.vertical_alignment_css(),
            Orientation::Vertical => self.frame.horizontal_alignment_css(),
        }
    }

    /// Width directive for the item element.
    pub fn element_width_css(&self, panel: &StackPanel) -> String {
        self.frame.element_width_css(self.stretch_for_implicit_width(panel))
    }

    /// Height directive for the item element.
    pub fn element_height_css(&self, panel: &StackPanel) -> String {
        self.frame.element_height_css(self.stretch_for_implicit_height(panel))
    }
}
