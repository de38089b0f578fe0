//! Interactive splitter handles.

use trellis_core::{unique_element_id, Axis};

/// Unique identifier for a registered splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitterId(pub u64);

/// A drag handle declared between two tracks of one axis.
///
/// The track reference is symbolic (name or index) and resolves against
/// the live track order; the tracks on either side of the resolved index
/// are splitter-adjacent.
#[derive(Debug, Clone)]
pub struct SplitterHandle {
    axis: Axis,
    track: Option<String>,
    handle_class: String,
}

impl SplitterHandle {
    /// Declare a splitter next to the referenced track.
    pub fn new(axis: Axis, track: Option<&str>) -> Self {
        Self {
            axis,
            track: track.map(str::to_string),
            handle_class: format!("trellis-clip-{}", unique_element_id()),
        }
    }

    /// The axis this splitter resizes.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Symbolic reference to the adjacent track.
    pub fn track(&self) -> Option<&str> {
        self.track.as_deref()
    }

    /// CSS class of the handle's clip container element.
    pub fn handle_class(&self) -> &str {
        &self.handle_class
    }

    /// CSS selector for the handle element, handed to the drag driver.
    pub fn selector(&self) -> String {
        format!(".{}", self.handle_class)
    }
}

/// The set of active splitters of a grid panel.
#[derive(Debug, Clone, Default)]
pub struct SplitterSet {
    splitters: Vec<(SplitterId, SplitterHandle)>,
    next_id: u64,
}

impl SplitterSet {
    /// Create an empty splitter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a splitter handle.
    pub fn add(&mut self, handle: SplitterHandle) -> SplitterId {
        let id = SplitterId(self.next_id);
        self.next_id += 1;
        self.splitters.push((id, handle));
        id
    }

    /// Remove a splitter by id, returning its handle.
    pub fn remove(&mut self, id: SplitterId) -> Option<SplitterHandle> {
        let position = self
            .splitters
            .iter()
            .position(|(splitter_id, _)| *splitter_id == id)?;
        Some(self.splitters.remove(position).1)
    }

    /// All registered handles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SplitterHandle> {
        self.splitters.iter().map(|(_, handle)| handle)
    }

    /// Handles declared for one axis.
    pub fn for_axis(&self, axis: Axis) -> impl Iterator<Item = &SplitterHandle> {
        self.splitters
            .iter()
            .map(|(_, handle)| handle)
            .filter(move |handle| handle.axis() == axis)
    }

    /// Number of registered splitters.
    pub fn len(&self) -> usize {
        self.splitters.len()
    }

    /// Whether no splitters are registered.
    pub fn is_empty(&self) -> bool {
        self.splitters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_get_unique_selectors() {
        let a = SplitterHandle::new(Axis::Row, Some("1"));
        let b = SplitterHandle::new(Axis::Row, Some("1"));
        assert_ne!(a.selector(), b.selector());
        assert!(a.selector().starts_with(".trellis-clip-"));
    }

    #[test]
    fn axis_filtering() {
        let mut set = SplitterSet::new();
        set.add(SplitterHandle::new(Axis::Row, Some("header")));
        let column = set.add(SplitterHandle::new(Axis::Column, Some("1")));

        assert_eq!(set.for_axis(Axis::Row).count(), 1);
        assert_eq!(set.for_axis(Axis::Column).count(), 1);

        set.remove(column);
        assert_eq!(set.for_axis(Axis::Column).count(), 0);
        assert_eq!(set.len(), 1);
    }
}
