//! Download system for dzyt

pub mod engine;
pub mod orchestrator;
pub mod retry;

pub use engine::*;
pub use orchestrator::*;
pub use retry::*;
