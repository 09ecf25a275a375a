//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per tick (or per N ticks) to present the
//! settled post-step positions. It only ever sees copies: the solver's
//! channels are never borrowed across a frame. The headless renderer
//! discards all frames, serving as a no-op for benchmarks and CI.

use tulle_types::TulleResult;

/// A single render frame.
pub struct RenderFrame {
    /// Tick this frame corresponds to.
    pub tick: u64,
    /// Current X positions, row-major point order.
    pub pos_x: Vec<f32>,
    /// Current Y positions, row-major point order.
    pub pos_y: Vec<f32>,
}

impl RenderFrame {
    /// Creates a frame by copying the position channels.
    pub fn from_positions(tick: u64, pos_x: &[f32], pos_y: &[f32]) -> Self {
        Self {
            tick,
            pos_x: pos_x.to_vec(),
            pos_y: pos_y.to_vec(),
        }
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`] — Accumulates frames into a JSON animation
///
/// [`JsonFrameExporter`]: crate::json_exporter::JsonFrameExporter
pub trait Renderer: Send {
    /// Initialize the renderer for a point count (always `n²` for an
    /// n×n lattice).
    fn init(&mut self, point_count: usize) -> TulleResult<()>;

    /// Submit a frame for presentation.
    fn submit_frame(&mut self, frame: &RenderFrame) -> TulleResult<()>;

    /// Finalize (flush buffers, write files).
    fn finalize(&mut self) -> TulleResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _point_count: usize) -> TulleResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> TulleResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> TulleResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
