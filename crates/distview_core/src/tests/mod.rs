//! Behavioural tests for the core crate
//!
//! Tests are organized by topic:
//! - `distribution` - Curve shape, sampling window and normalisation
//! - `menus` - Exclusive-open behaviour and item validation

mod menus;
