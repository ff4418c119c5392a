//! Area computation for simple planar figures.
//!
//! Purpose
//! - Provide one shared capability (`area`) over a closed set of figure
//!   kinds: `Circle` and `Triangle`.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: exact
//!   floating-point comparisons, no hidden tolerances.
//!
//! Why this design
//! - The figure set is fixed and small, so `Shape` is a closed tagged union
//!   with pattern-matched dispatch instead of an open trait hierarchy.
//! - Construction is the only fallible operation (`Triangle::new` gates the
//!   strict triangle inequality); everything after it is a pure function
//!   over immutable `Copy` state, safe to share across threads.
//!
//! Code cross-refs: `shape::{Shape, Circle, Triangle, InvalidTriangleError}`

pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can skip the module path.
pub use shape::{Circle, InvalidTriangleError, Shape, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::shape::{Circle, InvalidTriangleError, Shape, Triangle};
}
