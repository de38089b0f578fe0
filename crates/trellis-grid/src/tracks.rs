//! Per-axis track collections and grid-template compilation.

use indexmap::IndexMap;
use trellis_core::{Axis, LayoutError, SizeSpecError, TemplateError};

use crate::splitter::SplitterSet;
use crate::track::{TrackDefinition, TrackId};

/// The declarative size and name of one track, reported after a completed
/// interactive resize.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSizeReport {
    /// Declarative size (`"auto"`, `"<n>"`, or `"<n>*"`).
    pub size: String,
    /// Stable name, when the track has one.
    pub name: Option<String>,
}

/// The ordered collection of track definitions for one axis.
///
/// Tracks register in arbitrary order; [`ordered`](Self::ordered) applies
/// the explicit sort order with a stable sort. Compilation translates each
/// track to its CSS size, normalizes fractional shares, and applies min/max
/// clamping unless a splitter sits next to the track.
#[derive(Debug, Clone)]
pub struct TrackList {
    axis: Axis,
    tracks: Vec<(TrackId, TrackDefinition)>,
    next_id: u64,
    override_by_index: Vec<Option<String>>,
    override_by_name: IndexMap<String, String>,
}

impl TrackList {
    /// Create an empty track list for the given axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            tracks: Vec::new(),
            next_id: 0,
            override_by_index: Vec::new(),
            override_by_name: IndexMap::new(),
        }
    }

    /// The axis this list sizes.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Register a track. Registration order breaks sort-order ties.
    pub fn add(&mut self, definition: TrackDefinition) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        self.tracks.push((id, definition));
        id
    }

    /// Remove a track by id, returning its definition.
    pub fn remove(&mut self, id: TrackId) -> Option<TrackDefinition> {
        let position = self.tracks.iter().position(|(track_id, _)| *track_id == id)?;
        Some(self.tracks.remove(position).1)
    }

    /// Get a registered track definition.
    pub fn get(&self, id: TrackId) -> Option<&TrackDefinition> {
        self.tracks
            .iter()
            .find(|(track_id, _)| *track_id == id)
            .map(|(_, definition)| definition)
    }

    /// Number of registered tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the list has no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in template order.
    ///
    /// The sort is stable so that tracks without an explicit sort order
    /// keep their relative registration position across re-renders.
    pub fn ordered(&self) -> Vec<&TrackDefinition> {
        let mut ordered: Vec<&TrackDefinition> =
            self.tracks.iter().map(|(_, definition)| definition).collect();
        ordered.sort_by_key(|track| track.sort_order.unwrap_or(0));
        ordered
    }

    /// Resolve a symbolic track reference to an ordered index.
    ///
    /// An absent reference reads as `"0"`. A reference that parses as an
    /// integer is returned directly; numeric references bypass name lookup.
    /// Otherwise the result is the count of ordered tracks whose name
    /// differs from the reference: the position of the first name match, or
    /// one past the end when nothing matches.
    pub fn resolve_index(&self, reference: Option<&str>) -> i64 {
        let reference = reference.unwrap_or("0");
        if let Ok(index) = reference.trim().parse::<i64>() {
            return index;
        }
        self.ordered()
            .iter()
            .filter(|track| track.name.as_deref() != Some(reference))
            .count() as i64
    }

    /// Whether any of the `span` tracks starting at `reference` is sized to
    /// its content (`"auto"`).
    pub fn is_sized_to_content(&self, reference: Option<&str>, span: usize) -> bool {
        let start = self.resolve_index(reference).max(0) as usize;
        self.ordered()
            .iter()
            .skip(start)
            .take(span)
            .any(|track| track.size_spec.trim().eq_ignore_ascii_case("auto"))
    }

    /// Persist resize results reported by the drag-interaction driver.
    ///
    /// The positional slots grow but never shrink, so overrides recorded
    /// before a track was removed survive later additions. Values pair with
    /// the current ordered tracks; a named track additionally records its
    /// override by identity so it survives reordering.
    pub fn set_overrides(&mut self, values: &[String]) {
        if values.len() > self.override_by_index.len() {
            self.override_by_index.resize(values.len(), None);
        }

        let ordered_names: Vec<Option<String>> = self
            .ordered()
            .iter()
            .map(|track| track.name.clone())
            .collect();

        for (index, (value, name)) in values.iter().zip(ordered_names).enumerate() {
            self.override_by_index[index] = Some(value.clone());
            if let Some(name) = name {
                self.override_by_name.insert(name, value.clone());
            }
        }
    }

    /// Compile the axis into a CSS grid-template string.
    ///
    /// A track next to a same-axis splitter emits its size unclamped: the
    /// splitter enforces min/max bounds at drag time, and static clamping
    /// must not apply at the same time.
    pub fn grid_template_css(&self, splitters: &SplitterSet) -> Result<String, LayoutError> {
        let ordered = self.ordered();
        if ordered.is_empty() {
            // One full-bleed implicit track.
            return Ok("1fr".to_string());
        }

        let splitter_indexes: Vec<i64> = splitters
            .for_axis(self.axis)
            .map(|splitter| self.resolve_index(splitter.track()))
            .collect();

        let sizes = self.css_sizes(&ordered)?;
        let clamped: Vec<String> = ordered
            .iter()
            .zip(sizes)
            .enumerate()
            .map(|(index, (track, size))| {
                let next_to_splitter = splitter_indexes
                    .iter()
                    .any(|&s| s == index as i64 - 1 || s == index as i64 + 1);
                clamp_css_size(track, size, next_to_splitter)
            })
            .collect();

        Ok(clamped.join(" "))
    }

    /// The declarative size and name of every track in ordered sequence,
    /// reverse-translated from the compiled sizes.
    pub fn size_reports(&self) -> Result<Vec<TrackSizeReport>, LayoutError> {
        let ordered = self.ordered();
        let sizes = self.css_sizes(&ordered)?;
        ordered
            .iter()
            .zip(sizes)
            .map(|(track, size)| {
                Ok(TrackSizeReport {
                    size: size_spec_from_css(&size)?,
                    name: track.name.clone(),
                })
            })
            .collect()
    }

    /// Normalized per-track CSS sizes in ordered sequence, before clamping.
    fn css_sizes(&self, ordered: &[&TrackDefinition]) -> Result<Vec<String>, LayoutError> {
        let mut sizes = Vec::with_capacity(ordered.len());
        for (index, track) in ordered.iter().enumerate() {
            sizes.push(self.own_css_size(track, index)?);
        }

        let mut total_fr = 0.0;
        for size in &sizes {
            if let Some(coefficient) = fr_coefficient(size)? {
                total_fr += coefficient;
            }
        }

        // Fractional shares summing below one whole are rescaled to consume
        // the full remaining space. Only fractional entries rewrite, so a
        // list with no fractional tracks is left alone.
        if total_fr < 1.0 {
            for size in &mut sizes {
                if let Some(coefficient) = fr_coefficient(size)? {
                    *size = format!("{}fr", coefficient / total_fr);
                }
            }
        }

        Ok(sizes)
    }

    /// The CSS size one track contributes before normalization.
    ///
    /// A named track identifies its override by name, so persisted sizes
    /// follow the track across layouts that change dynamically; otherwise
    /// the positional override applies, and the declared spec is the
    /// fallback.
    fn own_css_size(&self, track: &TrackDefinition, index: usize) -> Result<String, SizeSpecError> {
        let by_name = track
            .name
            .as_deref()
            .and_then(|name| self.override_by_name.get(name));
        let by_index = self
            .override_by_index
            .get(index)
            .and_then(|value| value.as_deref());

        match by_name.map(String::as_str).or(by_index) {
            Some(value) => Ok(value.to_string()),
            None => size_spec_to_css(&track.size_spec),
        }
    }
}

/// Fractional coefficient of a compiled CSS size, if it is one.
fn fr_coefficient(size: &str) -> Result<Option<f64>, TemplateError> {
    match size.strip_suffix("fr") {
        Some(prefix) => prefix
            .parse::<f64>()
            .map(Some)
            .map_err(|_| TemplateError::UnexpectedCssSize { value: size.to_string() }),
        None => Ok(None),
    }
}

/// Wrap a compiled size in `minmax(..)` when the track carries constraints.
///
/// A track next to a splitter is left unclamped; the splitter owns min/max
/// enforcement while dragging. An absent bound falls back to the computed
/// size, producing a one-sided clamp.
fn clamp_css_size(track: &TrackDefinition, size: String, next_to_splitter: bool) -> String {
    if next_to_splitter || (track.min_size.is_none() && track.max_size.is_none()) {
        return size;
    }

    let min = track.min_size.map(|value| format!("{value}px"));
    let max = track.max_size.map(|value| format!("{value}px"));

    format!(
        "minmax({}, {})",
        min.as_deref().unwrap_or(&size),
        max.as_deref().unwrap_or(&size)
    )
}

/// Translate a declarative size spec to its CSS size.
fn size_spec_to_css(size_spec: &str) -> Result<String, SizeSpecError> {
    let size = size_spec.trim();
    if size.eq_ignore_ascii_case("auto") {
        return Ok("max-content".to_string());
    }

    if let Some(shares) = size.strip_suffix('*') {
        let coefficient = if shares.is_empty() {
            1.0
        } else {
            parse_number(shares, size_spec)?
        };
        return Ok(format!("{coefficient}fr"));
    }

    Ok(format!("{}px", parse_number(size, size_spec)?))
}

fn parse_number(text: &str, size_spec: &str) -> Result<f64, SizeSpecError> {
    text.parse::<f64>().map_err(|_| SizeSpecError::Invalid {
        value: size_spec.to_string(),
    })
}

/// Translate a compiled CSS size back to its declarative spec.
///
/// Anything other than `max-content`, a pixel value, or a fractional value
/// is a contract violation by the drag-interaction library and fails
/// loudly.
fn size_spec_from_css(css: &str) -> Result<String, TemplateError> {
    let size = css.trim();
    if size.eq_ignore_ascii_case("max-content") {
        return Ok("auto".to_string());
    }

    let unexpected = || TemplateError::UnexpectedCssSize { value: css.to_string() };

    if let Some(prefix) = size.strip_suffix("fr") {
        let coefficient: f64 = prefix.parse().map_err(|_| unexpected())?;
        return Ok(format!("{coefficient}*"));
    }

    if let Some(prefix) = size.strip_suffix("px") {
        let pixels: f64 = prefix.parse().map_err(|_| unexpected())?;
        return Ok(format!("{pixels}"));
    }

    Err(unexpected())
}
