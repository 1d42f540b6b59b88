//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing:
//! unified logging initialization, unique test data helpers, and
//! Problem Details assertion helpers.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
