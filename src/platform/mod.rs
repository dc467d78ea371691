//! Upstream service clients: catalog and web search

pub mod catalog;
pub mod client;
pub mod search;

pub use catalog::*;
pub use client::*;
pub use search::*;
