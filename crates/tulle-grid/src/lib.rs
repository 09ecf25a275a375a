//! # tulle-grid
//!
//! The cloth lattice: logical point grid, neighbor topology, pinned row,
//! and rest-length metadata, plus the physical layout views (flat
//! channels, fixed-width lanes, per-point records) that the execution
//! strategies are built on.
//!
//! ## Key Types
//!
//! - [`ClothLattice`] — Seeded N×N point grid with pins and rest lengths.
//! - [`Link`] — One of the 4 axis-aligned spring directions.
//! - [`Channel`] — One f32 per point, with flat and lane-batched views.
//! - [`PointRecord`] — Per-point record gather/scatter over the channels.

pub mod lattice;
pub mod layout;
pub mod topology;

pub use lattice::{ClothLattice, LatticeParams};
pub use layout::{Channel, PointRecord};
pub use topology::Link;
