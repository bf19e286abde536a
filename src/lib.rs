//! Reference catalog of the Kerbol system's celestial bodies.
//!
//! The catalog is a fixed, hand-authored table of one star and two dozen
//! planets and moons, each carrying its physical constants, orbital
//! elements, and the parameters derived from them at construction. Keeping
//! it in a library crate lets multiple front-ends (CLI, GUI, web) share it.

pub mod catalog;

pub use kerbol_bodies::{BodyError, CelestialBody, Orbit};
pub use kerbol_core::{angles, constants};

pub use catalog::{Catalog, catalog};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
