//! Repository traits - interfaces for infrastructure implementations

mod repositories;

pub use repositories::*;
