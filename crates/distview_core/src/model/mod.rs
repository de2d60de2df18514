//! Editable distribution model.
//!
//! [`EditablePdf`] owns four shape parameters and derives a dense,
//! normalised density curve from them:
//!
//! 1. the sampling window is `mean ± margin·std`, where the margin grows with
//!    skew (capped) and positive kurtosis (uncapped)
//! 2. a skew-normal density is evaluated at 40 000 evenly spaced points
//! 3. a power-law peakedness deformation is applied for non-zero kurtosis
//! 4. the result is renormalised to unit trapezoidal area

pub mod density;
mod params;
mod pdf;
mod stats;

pub use params::{Parameter, ShapeParams, margin};
pub use pdf::{Curve, EditablePdf, SAMPLE_COUNT, kurtosis_exponent};
pub use stats::CurveStats;
