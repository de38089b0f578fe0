//! Track definition data.

/// Unique identifier for a registered track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(pub u64);

/// Declarative definition of one grid track (a row or a column).
///
/// The size specification is one of:
/// - `"auto"` — size to content
/// - `"<number>"` — absolute size in pixels
/// - `"<number>*"` or `"*"` — fractional share of remaining space
///   (bare `*` is one share)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackDefinition {
    /// Declared size intent.
    pub size_spec: String,
    /// Minimum size in pixels.
    pub min_size: Option<f64>,
    /// Maximum size in pixels.
    pub max_size: Option<f64>,
    /// Stable identity, used for override persistence and symbolic
    /// placement references.
    pub name: Option<String>,
    /// Explicit ordering key; absent sorts as zero.
    pub sort_order: Option<i32>,
}

impl Default for TrackDefinition {
    fn default() -> Self {
        Self::new("*")
    }
}

impl TrackDefinition {
    /// Create a track with the given size specification.
    pub fn new(size_spec: impl Into<String>) -> Self {
        Self {
            size_spec: size_spec.into(),
            min_size: None,
            max_size: None,
            name: None,
            sort_order: None,
        }
    }

    /// Set the minimum size in pixels.
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Set the maximum size in pixels.
    pub fn with_max_size(mut self, max_size: f64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set the stable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the explicit sort order.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}
