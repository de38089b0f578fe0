//! Shared per-element size, alignment, and margin derivation.

use trellis_core::{
    unique_element_id, HorizontalAlignment, Thickness, VerticalAlignment,
};

/// Declared sizing and alignment intent of one child element.
///
/// The owning container decides whether an implicitly sized axis may
/// stretch; the frame turns that decision plus its own declarations into
/// CSS directives.
#[derive(Debug, Clone)]
pub struct ElementFrame {
    /// Explicit width in pixels; absent means size implicitly.
    pub width: Option<f64>,
    /// Explicit height in pixels; absent means size implicitly.
    pub height: Option<f64>,
    /// Outer margin.
    pub margin: Thickness,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    uid: u64,
}

impl Default for ElementFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementFrame {
    /// Create a frame with implicit sizing and stretch alignment.
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            margin: Thickness::default(),
            horizontal_alignment: HorizontalAlignment::Stretch,
            vertical_alignment: VerticalAlignment::Stretch,
            uid: unique_element_id(),
        }
    }

    /// Set an explicit width in pixels.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set an explicit height in pixels.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the outer margin.
    pub fn with_margin(mut self, margin: Thickness) -> Self {
        self.margin = margin;
        self
    }

    /// Set the horizontal alignment.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment.
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// CSS class of the clip container element.
    pub fn clip_class(&self) -> String {
        format!("trellis-clip-{}", self.uid)
    }

    /// CSS class of the margin container element.
    pub fn margin_class(&self) -> String {
        format!("trellis-margin-{}", self.uid)
    }

    /// Whether the width is implicit.
    pub fn implicit_width(&self) -> bool {
        self.width.is_none()
    }

    /// Whether the height is implicit.
    pub fn implicit_height(&self) -> bool {
        self.height.is_none()
    }

    /// Whether the element stretches horizontally, given the container's
    /// verdict for implicit widths.
    pub fn horizontal_stretch(&self, stretch_for_implicit_width: bool) -> bool {
        self.implicit_width() && stretch_for_implicit_width
    }

    /// Whether the element stretches vertically, given the container's
    /// verdict for implicit heights.
    pub fn vertical_stretch(&self, stretch_for_implicit_height: bool) -> bool {
        self.implicit_height() && stretch_for_implicit_height
    }

    /// Width directive for the element itself.
    pub fn element_width_css(&self, stretch_for_implicit_width: bool) -> String {
        match self.width {
            Some(width) => format!("{width}px"),
            None if stretch_for_implicit_width => "100%".to_string(),
            None => "max-content".to_string(),
        }
    }

    /// Height directive for the element itself.
    pub fn element_height_css(&self, stretch_for_implicit_height: bool) -> String {
        match self.height {
            Some(height) => format!("{height}px"),
            None if stretch_for_implicit_height => "100%".to_string(),
            None => "max-content".to_string(),
        }
    }

    /// Width directive for the element's containers.
    pub fn container_width_css(&self, stretch_for_implicit_width: bool) -> &'static str {
        if self.horizontal_stretch(stretch_for_implicit_width) {
            "100%"
        } else {
            "max-content"
        }
    }

    /// Height directive for the element's containers.
    pub fn container_height_css(&self, stretch_for_implicit_height: bool) -> &'static str {
        if self.vertical_stretch(stretch_for_implicit_height) {
            "100%"
        } else {
            "max-content"
        }
    }

    /// Horizontal alignment directive.
    ///
    /// Stretch with an explicit width collapses to centering; the element
    /// cannot grow, so it sits in the middle of its slot.
    pub fn horizontal_alignment_css(&self) -> &'static str {
        match self.horizontal_alignment {
            HorizontalAlignment::Left => "start",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "end",
            HorizontalAlignment::Stretch if self.width.is_some() => "center",
            HorizontalAlignment::Stretch => "stretch",
        }
    }

    /// Vertical alignment directive.
    pub fn vertical_alignment_css(&self) -> &'static str {
        match self.vertical_alignment {
            VerticalAlignment::Top => "start",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "end",
            VerticalAlignment::Stretch if self.height.is_some() => "center",
            VerticalAlignment::Stretch => "stretch",
        }
    }

    /// Margin directive, clockwise from the top.
    pub fn margin_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.margin.top, self.margin.right, self.margin.bottom, self.margin.left
        )
    }
}
