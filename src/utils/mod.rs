//! Utility functions for dzyt

pub mod filename;

pub use filename::*;
