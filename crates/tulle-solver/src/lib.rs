//! # tulle-solver
//!
//! The cloth simulation core: Verlet integration with stochastic wind
//! gusts, iterative constraint relaxation over the spring lattice, and
//! interchangeable execution strategies that run the same fixed
//! protocol over different physical layouts.
//!
//! Every tick performs 3 sub-steps; each sub-step integrates all
//! points, grows the gust bound, then runs 4 relaxation passes with a
//! pin re-assert after each. The protocol is identical across
//! strategies, and so are the results.
//!
//! ## Key Types
//!
//! - [`ClothSim`] — Owns lattice, state, and strategy; drives whole ticks.
//! - [`ClothConfig`] — Lattice layout, forces, and run seed.
//! - [`ExecutionStrategy`] — The integrate/relax seam strategies implement.
//! - [`ScalarStrategy`], [`BatchedStrategy`], [`OffloadedStrategy`] —
//!   The three executions of the protocol.

pub mod batched;
pub mod config;
pub mod integrator;
pub mod offloaded;
pub mod relax;
pub mod scalar;
pub mod sim;
pub mod state;
pub mod strategy;

pub use batched::BatchedStrategy;
pub use config::ClothConfig;
pub use integrator::StepForces;
pub use offloaded::OffloadedStrategy;
pub use scalar::ScalarStrategy;
pub use sim::ClothSim;
pub use state::ClothState;
pub use strategy::{ExecutionStrategy, StepReport};
