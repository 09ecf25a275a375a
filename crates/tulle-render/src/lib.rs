//! # tulle-render
//!
//! Pluggable render abstraction for Tulle.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` stub, a
//! `JsonFrameExporter` for animation capture, and the
//! `WireframeLayout` segment enumeration that turns the lattice into
//! line segments for any drawing consumer.

pub mod json_exporter;
pub mod renderer;
pub mod wireframe;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
pub use wireframe::WireframeLayout;
