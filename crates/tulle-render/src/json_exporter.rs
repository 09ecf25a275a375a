//! JSON frame exporter — writes per-tick position data for inspection.
//!
//! Implements the `Renderer` trait. Captures the position channels each
//! submitted tick, then serializes the entire animation (wireframe
//! segments included) to a JSON file on `finalize()`. The output is
//! plain enough for any line-drawing viewer to replay.

use serde::Serialize;
use tulle_types::{TulleError, TulleResult};

use crate::renderer::{RenderFrame, Renderer};
use crate::wireframe::WireframeLayout;

/// A single frame of captured positions.
#[derive(Serialize)]
struct FrameData {
    tick: u64,
    positions: Vec<f32>, // Interleaved [x0, y0, x1, y1, ...]
}

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    grid_size: usize,
    point_count: usize,
    segments: Vec<u32>, // Flat index pairs [a0, b0, a1, b1, ...]
    frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON animation file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("curtain.json");
/// exporter.init(lattice.point_count())?;
/// // ... run simulation, calling submit_frame() each tick ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    grid_size: usize,
    point_count: usize,
    segments: Vec<u32>,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            grid_size: 0,
            point_count: 0,
            segments: Vec::new(),
            frames: Vec::new(),
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, point_count: usize) -> TulleResult<()> {
        let size = (point_count as f64).sqrt().round() as usize;
        if size * size != point_count {
            return Err(TulleError::InvalidLattice(format!(
                "point count {point_count} is not a square grid"
            )));
        }
        self.grid_size = size;
        self.point_count = point_count;
        self.segments = WireframeLayout::for_grid(size)
            .segments()
            .iter()
            .flat_map(|pair| *pair)
            .collect();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> TulleResult<()> {
        let n = frame.pos_x.len();
        let mut positions = Vec::with_capacity(n * 2);
        for i in 0..n {
            positions.push(frame.pos_x[i]);
            positions.push(frame.pos_y[i]);
        }
        self.frames.push(FrameData {
            tick: frame.tick,
            positions,
        });
        Ok(())
    }

    fn finalize(&mut self) -> TulleResult<()> {
        let data = AnimationData {
            grid_size: self.grid_size,
            point_count: self.point_count,
            segments: self.segments.clone(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| TulleError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
