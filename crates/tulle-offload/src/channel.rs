//! Compute channel trait and the host reference channel.
//!
//! The channel is the opaque boundary the offloaded strategy talks to:
//! submit a named kernel over whole-array buffers, block until done,
//! read the arrays back. The [`HostChannel`] executes kernels in
//! process and is the correctness reference a device channel must match.

use tulle_types::{rng, TulleError, TulleResult};

use crate::buffers::{ComputeBuffer, SeedBuffer};

/// Identifies a batch kernel on the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelId {
    /// One Verlet integration step over every point: inertia, gravity,
    /// stochastic gust. Point-independent, so a single batch covers the
    /// whole lattice.
    VerletIntegrate,
}

/// Scalar arguments of a batch submission.
#[derive(Debug, Clone, Copy)]
pub struct KernelArgs {
    /// Lattice side length.
    pub grid_size: usize,
    /// Total points; must equal `grid_size²` and every buffer length.
    pub point_count: usize,
    /// Per-sub-step acceleration (x, y).
    pub gravity: [f32; 2],
    /// Gust chance per point, against a unit draw.
    pub wind_probability: f32,
    /// Current bound of the horizontal gust impulse.
    pub wind_range: f32,
    /// Bound of the vertical gust impulse.
    pub wind_vertical: f32,
}

/// The whole-array buffers a kernel reads and writes.
pub struct KernelBuffers<'a> {
    /// Current X positions.
    pub pos_x: &'a mut ComputeBuffer,
    /// Current Y positions.
    pub pos_y: &'a mut ComputeBuffer,
    /// Previous X positions.
    pub prev_x: &'a mut ComputeBuffer,
    /// Previous Y positions.
    pub prev_y: &'a mut ComputeBuffer,
    /// Per-point random stream states.
    pub seeds: &'a mut SeedBuffer,
}

/// Trait for compute-offload channels.
///
/// All submissions are blocking: the caller never observes a partially
/// executed batch. Transfers are whole-array; there is no incremental
/// update protocol.
pub trait ComputeChannel: Send {
    /// Initialize the channel. Called once before any submission.
    fn init(&mut self) -> TulleResult<()>;

    /// Returns the channel name (e.g., "host", "wgpu_vulkan").
    fn name(&self) -> &str;

    /// Returns true if work leaves the host process.
    fn is_device(&self) -> bool;

    /// Runs `kernel` over `args.point_count` points and blocks until
    /// every buffer holds the results.
    ///
    /// Buffer lengths must all equal `args.point_count`; a mismatch is
    /// a fatal channel error, never a partial execution.
    fn submit_batch(
        &mut self,
        kernel: KernelId,
        buffers: &mut KernelBuffers<'_>,
        args: &KernelArgs,
    ) -> TulleResult<()>;
}

/// In-process reference channel.
///
/// Always available, used for:
/// - Running the offloaded strategy without a device
/// - Correctness validation (a device channel must match it)
pub struct HostChannel {
    initialized: bool,
}

impl HostChannel {
    /// Creates a new host channel (uninitialized).
    pub fn new() -> Self {
        Self { initialized: false }
    }
}

impl Default for HostChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeChannel for HostChannel {
    fn init(&mut self) -> TulleResult<()> {
        self.initialized = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "host"
    }

    fn is_device(&self) -> bool {
        false
    }

    fn submit_batch(
        &mut self,
        kernel: KernelId,
        buffers: &mut KernelBuffers<'_>,
        args: &KernelArgs,
    ) -> TulleResult<()> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "channel used before init()".into(),
            ));
        }
        validate_layout(buffers, args)?;

        match kernel {
            KernelId::VerletIntegrate => run_verlet_integrate(buffers, args),
        }
        Ok(())
    }
}

/// Rejects any host/device layout disagreement before a kernel runs.
fn validate_layout(buffers: &KernelBuffers<'_>, args: &KernelArgs) -> TulleResult<()> {
    if args.point_count != args.grid_size * args.grid_size {
        return Err(TulleError::Offload(format!(
            "point count {} does not match grid size {}²",
            args.point_count, args.grid_size
        )));
    }
    let lens = [
        buffers.pos_x.len(),
        buffers.pos_y.len(),
        buffers.prev_x.len(),
        buffers.prev_y.len(),
        buffers.seeds.len(),
    ];
    if lens.iter().any(|&len| len != args.point_count) {
        return Err(TulleError::Offload(format!(
            "buffer lengths {lens:?} do not all match point count {}",
            args.point_count
        )));
    }
    Ok(())
}

/// The Verlet kernel body, one invocation per point.
///
/// This is the channel's kernel source: it must stay value-identical to
/// the in-process integrator, including the draw discipline (one unit
/// draw always, two bounded draws only when the gust fires).
fn run_verlet_integrate(buffers: &mut KernelBuffers<'_>, args: &KernelArgs) {
    let pos_x = buffers.pos_x.as_mut_slice();
    let pos_y = buffers.pos_y.as_mut_slice();
    let prev_x = buffers.prev_x.as_mut_slice();
    let prev_y = buffers.prev_y.as_mut_slice();
    let seeds = buffers.seeds.as_mut_slice();

    for i in 0..args.point_count {
        let current_x = pos_x[i];
        let current_y = pos_y[i];
        let mut next_x = current_x + (current_x - prev_x[i]) + args.gravity[0];
        let mut next_y = current_y + (current_y - prev_y[i]) + args.gravity[1];

        let mut stream = seeds[i];
        if rng::next_unit(&mut stream) < args.wind_probability {
            next_x += rng::next_bounded(&mut stream, args.wind_range);
            next_y += rng::next_bounded(&mut stream, args.wind_vertical);
        }
        seeds[i] = stream;

        pos_x[i] = next_x;
        pos_y[i] = next_y;
        prev_x[i] = current_x;
        prev_y[i] = current_y;
    }
}
