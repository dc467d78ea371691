//! Core pipeline types and driver

pub mod pipeline;
pub mod playlist;
pub mod resolver;
pub mod track;

pub use pipeline::*;
pub use playlist::*;
pub use resolver::*;
pub use track::*;
