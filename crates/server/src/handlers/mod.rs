//! HTTP request handlers.

pub mod common;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod soil;

pub use common::*;
pub use dashboard::*;
pub use export::*;
pub use health::*;
pub use soil::*;
