//! Core value types and errors for the trellis layout toolkit.
//!
//! This crate provides the foundational types used across the other trellis
//! crates:
//! - Axis, orientation, alignment, and scrollbar visibility enums
//! - Margin thickness
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
