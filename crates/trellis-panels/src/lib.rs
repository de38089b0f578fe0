//! Panel containers and per-element CSS derivation.
//!
//! Containers compile their declared intent into a single style string for
//! the host framework's root element; item wrappers derive the width,
//! height, alignment, and margin directives of each child, consulting the
//! owning container for stretch eligibility. Parent context is always an
//! explicit parameter.

mod element;
mod grid_item;
mod scroll;
mod stack;

pub use element::ElementFrame;
pub use grid_item::GridItem;
pub use scroll::{ScrollItem, ScrollViewer};
pub use stack::{StackItem, StackPanel};
