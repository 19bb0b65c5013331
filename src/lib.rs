//! campus application library
//!
//! Student and book record modules built on the campus kernel.

pub mod modules;
pub mod openapi;
pub mod repository;

/// Re-export commonly used types
pub use modules::*;
