//! Step definitions for task management scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
