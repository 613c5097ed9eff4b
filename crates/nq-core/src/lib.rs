//! nestquest/crates/nq-core/src/lib.rs
//!
//! The central domain logic and interface definitions for NestQuest.

pub mod error;
pub mod filter;
pub mod models;
pub mod seed;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use filter::*;
pub use models::*;
pub use seed::*;
pub use traits::*;
