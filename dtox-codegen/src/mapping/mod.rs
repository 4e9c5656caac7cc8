//! Type and path mapping shared by every export target.
//!
//! - [`TargetProfile`] - Per-target tables (primitives, temporal, any, list and nullable forms)
//! - [`TypeMapper`] - Source type to target type, one algorithm for all targets
//! - [`PathMapper`] - Class path to generated module path
//! - [`find_basename_collisions`] - Classes that would share a generated file name

mod collision;
mod paths;
mod types;

pub use collision::{BasenameCollision, find_basename_collisions};
pub use paths::PathMapper;
pub use types::{TargetProfile, TypeMapper};
