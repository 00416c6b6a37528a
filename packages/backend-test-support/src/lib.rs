//! Backend test support utilities
//!
//! Utilities specifically for backend testing: error-shape assertions for
//! the stable API error contract and unified logging initialization.

pub mod api_error;
pub mod test_logging;
