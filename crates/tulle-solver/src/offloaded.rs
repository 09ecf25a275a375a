//! Strategy that runs integration through a compute-offload channel.

use tulle_grid::ClothLattice;
use tulle_offload::{
    ComputeBuffer, ComputeChannel, HostChannel, KernelArgs, KernelBuffers, KernelId, SeedBuffer,
};
use tulle_types::{TulleError, TulleResult};

use crate::config::ClothConfig;
use crate::integrator::StepForces;
use crate::relax;
use crate::state::ClothState;
use crate::strategy::ExecutionStrategy;

/// Submits the integration kernel to a [`ComputeChannel`] with
/// whole-array transfers each sub-step; constraint relaxation stays on
/// the host.
///
/// Stream states cross the boundary with the positions, so the channel
/// draws exactly what the in-process integrator would have drawn and
/// results stay identical to [`ScalarStrategy`].
///
/// [`ScalarStrategy`]: crate::scalar::ScalarStrategy
pub struct OffloadedStrategy {
    channel: Box<dyn ComputeChannel>,
    pos_x: ComputeBuffer,
    pos_y: ComputeBuffer,
    prev_x: ComputeBuffer,
    prev_y: ComputeBuffer,
    seeds: SeedBuffer,
    grid_size: usize,
    initialized: bool,
}

impl OffloadedStrategy {
    /// Creates a strategy over the given channel. Buffers are allocated
    /// at [`init`] time, once the lattice size is known.
    ///
    /// [`init`]: ExecutionStrategy::init
    pub fn new(channel: Box<dyn ComputeChannel>) -> Self {
        Self {
            channel,
            pos_x: ComputeBuffer::zeros(0),
            pos_y: ComputeBuffer::zeros(0),
            prev_x: ComputeBuffer::zeros(0),
            prev_y: ComputeBuffer::zeros(0),
            seeds: SeedBuffer::zeros(0),
            grid_size: 0,
            initialized: false,
        }
    }

    /// Creates a strategy over the in-process reference channel.
    pub fn with_host_channel() -> Self {
        Self::new(Box::new(HostChannel::new()))
    }

    /// Name of the underlying channel.
    pub fn channel_name(&self) -> &str {
        self.channel.name()
    }
}

impl ExecutionStrategy for OffloadedStrategy {
    fn init(&mut self, lattice: &ClothLattice, _config: &ClothConfig) -> TulleResult<()> {
        lattice.validate()?;
        self.channel.init()?;

        let count = lattice.point_count();
        self.pos_x = ComputeBuffer::zeros(count);
        self.pos_y = ComputeBuffer::zeros(count);
        self.prev_x = ComputeBuffer::zeros(count);
        self.prev_y = ComputeBuffer::zeros(count);
        self.seeds = SeedBuffer::zeros(count);
        self.grid_size = lattice.size();
        self.initialized = true;
        Ok(())
    }

    fn integrate(&mut self, state: &mut ClothState, forces: &StepForces) -> TulleResult<()> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "offloaded strategy stepped before init()".into(),
            ));
        }
        if state.point_count != self.pos_x.len() {
            return Err(TulleError::Offload(format!(
                "state holds {} points but the channel buffers hold {}",
                state.point_count,
                self.pos_x.len()
            )));
        }

        self.pos_x.copy_from_slice(state.pos_x.as_slice());
        self.pos_y.copy_from_slice(state.pos_y.as_slice());
        self.prev_x.copy_from_slice(state.prev_x.as_slice());
        self.prev_y.copy_from_slice(state.prev_y.as_slice());
        self.seeds.copy_from_slice(&state.seeds);

        let args = KernelArgs {
            grid_size: self.grid_size,
            point_count: state.point_count,
            gravity: forces.gravity,
            wind_probability: forces.wind_probability,
            wind_range: forces.wind_range,
            wind_vertical: forces.wind_vertical,
        };
        let mut buffers = KernelBuffers {
            pos_x: &mut self.pos_x,
            pos_y: &mut self.pos_y,
            prev_x: &mut self.prev_x,
            prev_y: &mut self.prev_y,
            seeds: &mut self.seeds,
        };
        self.channel
            .submit_batch(KernelId::VerletIntegrate, &mut buffers, &args)?;

        state.pos_x.as_mut_slice().copy_from_slice(self.pos_x.as_slice());
        state.pos_y.as_mut_slice().copy_from_slice(self.pos_y.as_slice());
        state.prev_x.as_mut_slice().copy_from_slice(self.prev_x.as_slice());
        state.prev_y.as_mut_slice().copy_from_slice(self.prev_y.as_slice());
        state.seeds.copy_from_slice(self.seeds.as_slice());
        Ok(())
    }

    fn relax(&mut self, lattice: &ClothLattice, state: &mut ClothState) -> TulleResult<usize> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "offloaded strategy stepped before init()".into(),
            ));
        }
        Ok(relax::relax_pass(
            lattice,
            state.pos_x.as_mut_slice(),
            state.pos_y.as_mut_slice(),
        ))
    }

    fn name(&self) -> &str {
        "offloaded"
    }
}
