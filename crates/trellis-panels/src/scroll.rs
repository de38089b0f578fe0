//! Scroll viewer: a single-cell grid with per-axis overflow control.

use trellis_core::{HorizontalAlignment, ScrollBarVisibility, VerticalAlignment};

use crate::element::ElementFrame;

/// A container presenting one child with optional scrolling per axis.
#[derive(Debug, Clone)]
pub struct ScrollViewer {
    pub horizontal_scrollbar: ScrollBarVisibility,
    pub vertical_scrollbar: ScrollBarVisibility,
    pub root_width_css: String,
    pub root_height_css: String,
}

impl Default for ScrollViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollViewer {
    /// Create a scroll viewer with vertical scrolling on demand.
    pub fn new() -> Self {
        Self {
            horizontal_scrollbar: ScrollBarVisibility::Disabled,
            vertical_scrollbar: ScrollBarVisibility::Auto,
            root_width_css: "100%".to_string(),
            root_height_css: "100%".to_string(),
        }
    }

    /// Set the horizontal scrollbar visibility.
    pub fn with_horizontal_scrollbar(mut self, visibility: ScrollBarVisibility) -> Self {
        self.horizontal_scrollbar = visibility;
        self
    }

    /// Set the vertical scrollbar visibility.
    pub fn with_vertical_scrollbar(mut self, visibility: ScrollBarVisibility) -> Self {
        self.vertical_scrollbar = visibility;
        self
    }

    /// Style string for the viewer's root element.
    pub fn style_css(&self) -> String {
        format!(
            "display: grid; grid-template-rows: 100%; grid-template-columns: 100%; \
             overflow-x: {}; overflow-y: {}; box-sizing: border-box; width: {}; height: {};",
            overflow_css(self.horizontal_scrollbar),
            overflow_css(self.vertical_scrollbar),
            self.root_width_css,
            self.root_height_css,
        )
    }
}

fn overflow_css(visibility: ScrollBarVisibility) -> &'static str {
    match visibility {
        ScrollBarVisibility::Disabled => "clip",
        ScrollBarVisibility::Auto => "auto",
        ScrollBarVisibility::Hidden => "hidden",
        ScrollBarVisibility::Visible => "scroll",
    }
}

/// The child of a scroll viewer.
#[derive(Debug, Clone, Default)]
pub struct ScrollItem {
    pub frame: ElementFrame,
}

impl ScrollItem {
    /// Wrap an element frame.
    pub fn new(frame: ElementFrame) -> Self {
        Self { frame }
    }

    /// A scrollable axis cannot stretch; content must be free to overflow.
    pub fn stretch_for_implicit_width(&self, viewer: &ScrollViewer) -> bool {
        self.frame.horizontal_alignment == HorizontalAlignment::Stretch
            && viewer.horizontal_scrollbar == ScrollBarVisibility::Disabled
    }

    pub fn stretch_for_implicit_height(&self, viewer: &ScrollViewer) -> bool {
        self.frame.vertical_alignment == VerticalAlignment::Stretch
            && viewer.vertical_scrollbar == ScrollBarVisibility::Disabled
    }

    /// Horizontal alignment directive; a scrollable axis pins to the start
    /// so scroll offsets measure from the content origin.
    pub fn horizontal_alignment_css(&self, viewer: &ScrollViewer) -> &'static str {
        if viewer.horizontal_scrollbar == ScrollBarVisibility::Disabled {
            self.frame.horizontal_alignment_css()
        } else {
            "start"
        }
    }

    /// Vertical alignment directive.
    pub fn vertical_alignment_css(&self, viewer: &ScrollViewer) -> &'static str {
        if viewer.vertical_scrollbar == ScrollBarVisibility::Disabled {
            self.frame.vertical_alignment_css()
        } else {
            "start"
        }
    }

    /// Minimum width floor for the item.
    pub fn min_width_css(&self, viewer: &ScrollViewer) -> &'static str {
        if self.frame.horizontal_stretch(self.stretch_for_implicit_width(viewer)) {
            "100%"
        } else {
            "0px"
        }
    }

    /// Minimum height floor for the item.
    pub fn min_height_css(&self, viewer: &ScrollViewer) -> &'static str {
        if self.frame.vertical_stretch(self.stretch_for_implicit_height(viewer)) {
            "100%"
        } else {
            "0px"
        }
    }
}
