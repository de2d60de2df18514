//! Core of the distribution viewer
//!
//! This crate holds everything that does not depend on a terminal:
//! - [`model`]: an editable skew-normal density with a peakedness control,
//!   sampled on an adaptive window and renormalised to unit area
//! - [`menu`]: a dropdown menu bar with command and toggle items and
//!   exclusive-open behaviour
//! - [`geometry`]: cell coordinates used for popup placement and hit tests
//! - [`error`]: configuration and precondition errors
//!
//! ```ignore
//! use distview_core::model::EditablePdf;
//!
//! let mut pdf = EditablePdf::default();
//! pdf.set_skew(4.0)?;
//! pdf.set_kurtosis(1.0)?;
//! let curve = pdf.current_curve();
//! assert_eq!(curve.x.len(), 40_000);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod geometry;
pub mod menu;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ConfigurationError, PreconditionViolation};
pub use geometry::{Bounds, Point};
pub use menu::{ItemDescriptor, ItemSpec, MenuBar, MenuState, SharedFlag};
pub use model::{Curve, CurveStats, EditablePdf, Parameter, ShapeParams};
