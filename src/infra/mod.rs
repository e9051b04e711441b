//! Infrastructure layer
//!
//! Process spawning and environment lookups live here, behind seams the
//! core logic can be tested against.

pub mod docker;
pub mod user;
