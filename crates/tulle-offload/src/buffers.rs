//! Transfer buffer abstraction for the offload boundary.
//!
//! Buffers hold whole-array copies of the simulation channels while a
//! kernel runs. In the host channel they are plain vectors; a device
//! channel would back them with device allocations behind the same API.

/// A float transfer buffer (one f32 per point).
#[derive(Debug, Clone)]
pub struct ComputeBuffer {
    /// Host-side data.
    data: Vec<f32>,
    /// Number of elements (not bytes).
    len: usize,
}

impl ComputeBuffer {
    /// Creates a new buffer filled with zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
            len,
        }
    }

    /// Creates a buffer from existing data.
    pub fn from_data(data: Vec<f32>) -> Self {
        let len = data.len();
        Self { data, len }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the host-side data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable slice of the host-side data.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Copies data from a slice into the front of the buffer.
    pub fn copy_from_slice(&mut self, src: &[f32]) {
        self.data[..src.len()].copy_from_slice(src);
    }
}

/// A per-point random stream state buffer (one u32 per point).
///
/// Stream states cross the offload boundary so the device kernel draws
/// exactly the values the host would have drawn.
#[derive(Debug, Clone)]
pub struct SeedBuffer {
    data: Vec<u32>,
    len: usize,
}

impl SeedBuffer {
    /// Creates an allocation placeholder; real states are copied in
    /// before any kernel runs.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0; len],
            len,
        }
    }

    /// Creates a buffer from existing stream states.
    pub fn from_data(data: Vec<u32>) -> Self {
        let len = data.len();
        Self { data, len }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the stream states.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Returns a mutable slice of the stream states.
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Copies stream states from a slice into the front of the buffer.
    pub fn copy_from_slice(&mut self, src: &[u32]) {
        self.data[..src.len()].copy_from_slice(src);
    }
}
