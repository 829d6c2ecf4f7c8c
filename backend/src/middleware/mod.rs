//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! correlation identifiers and access logging.

pub mod trace;

pub use trace::{TRACE_ID_HEADER, Trace};
