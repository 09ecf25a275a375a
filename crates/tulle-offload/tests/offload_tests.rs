//! Integration tests for tulle-offload.

use tulle_offload::{
    ComputeBuffer, ComputeChannel, HostChannel, KernelArgs, KernelBuffers, KernelId, SeedBuffer,
};
use tulle_types::rng;

fn idle_args(grid_size: usize) -> KernelArgs {
    KernelArgs {
        grid_size,
        point_count: grid_size * grid_size,
        gravity: [0.0, 0.0],
        wind_probability: 0.0,
        wind_range: 0.13,
        wind_vertical: 0.12,
    }
}

// ─── Buffer Tests ─────────────────────────────────────────────

#[test]
fn buffer_zeros() {
    let buf = ComputeBuffer::zeros(100);
    assert_eq!(buf.len(), 100);
    assert!(buf.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn buffer_from_data() {
    let buf = ComputeBuffer::from_data(vec![1.0, 2.0, 3.0]);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn buffer_copy() {
    let mut buf = ComputeBuffer::zeros(3);
    buf.copy_from_slice(&[7.0, 8.0, 9.0]);
    assert_eq!(buf.as_slice(), &[7.0, 8.0, 9.0]);
}

#[test]
fn seed_buffer_copy() {
    let mut buf = SeedBuffer::zeros(4);
    assert_eq!(buf.len(), 4);
    buf.copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
}

// ─── HostChannel Tests ────────────────────────────────────────

#[test]
fn host_init() {
    let mut channel = HostChannel::new();
    assert!(channel.init().is_ok());
    assert_eq!(channel.name(), "host");
    assert!(!channel.is_device());
}

#[test]
fn submit_before_init_is_rejected() {
    let mut channel = HostChannel::new();
    let mut pos_x = ComputeBuffer::zeros(4);
    let mut pos_y = ComputeBuffer::zeros(4);
    let mut prev_x = ComputeBuffer::zeros(4);
    let mut prev_y = ComputeBuffer::zeros(4);
    let mut seeds = SeedBuffer::zeros(4);
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };
    let result = channel.submit_batch(KernelId::VerletIntegrate, &mut buffers, &idle_args(2));
    assert!(result.is_err());
}

#[test]
fn length_mismatch_is_rejected() {
    let mut channel = HostChannel::new();
    channel.init().unwrap();

    let mut pos_x = ComputeBuffer::zeros(3); // one short
    let mut pos_y = ComputeBuffer::zeros(4);
    let mut prev_x = ComputeBuffer::zeros(4);
    let mut prev_y = ComputeBuffer::zeros(4);
    let mut seeds = SeedBuffer::zeros(4);
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };
    let result = channel.submit_batch(KernelId::VerletIntegrate, &mut buffers, &idle_args(2));
    assert!(result.is_err());
}

#[test]
fn grid_size_disagreement_is_rejected() {
    let mut channel = HostChannel::new();
    channel.init().unwrap();

    let mut pos_x = ComputeBuffer::zeros(4);
    let mut pos_y = ComputeBuffer::zeros(4);
    let mut prev_x = ComputeBuffer::zeros(4);
    let mut prev_y = ComputeBuffer::zeros(4);
    let mut seeds = SeedBuffer::zeros(4);
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };
    let mut args = idle_args(2);
    args.point_count = 5; // no longer grid_size²
    let result = channel.submit_batch(KernelId::VerletIntegrate, &mut buffers, &args);
    assert!(result.is_err());
}

// ─── Verlet Kernel Tests ──────────────────────────────────────

#[test]
fn verlet_kernel_moves_by_inertia_and_gravity() {
    let mut channel = HostChannel::new();
    channel.init().unwrap();

    let mut pos_x = ComputeBuffer::from_data(vec![1.0, 0.0, 0.0, 0.0]);
    let mut pos_y = ComputeBuffer::from_data(vec![2.0, 0.0, 0.0, 0.0]);
    let mut prev_x = ComputeBuffer::from_data(vec![0.5, 0.0, 0.0, 0.0]);
    let mut prev_y = ComputeBuffer::from_data(vec![1.5, 0.0, 0.0, 0.0]);
    let mut seeds = SeedBuffer::from_data(vec![1, 2, 3, 4]);
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };
    let mut args = idle_args(2);
    args.gravity = [0.0, 0.003];

    channel
        .submit_batch(KernelId::VerletIntegrate, &mut buffers, &args)
        .unwrap();

    // Same expression shape as the kernel, so the comparison is exact.
    let expected_x = 1.0f32 + (1.0 - 0.5) + 0.0;
    let expected_y = 2.0f32 + (2.0 - 1.5) + 0.003;
    assert_eq!(pos_x.as_slice()[0], expected_x);
    assert_eq!(pos_y.as_slice()[0], expected_y);
    // Previous becomes the un-impulsed current.
    assert_eq!(prev_x.as_slice()[0], 1.0);
    assert_eq!(prev_y.as_slice()[0], 2.0);
}

#[test]
fn kernel_advances_streams_even_without_gusts() {
    let mut channel = HostChannel::new();
    channel.init().unwrap();

    let initial: Vec<u32> = (0..4).map(|i| rng::seed_stream(9, i)).collect();
    let mut pos_x = ComputeBuffer::zeros(4);
    let mut pos_y = ComputeBuffer::zeros(4);
    let mut prev_x = ComputeBuffer::zeros(4);
    let mut prev_y = ComputeBuffer::zeros(4);
    let mut seeds = SeedBuffer::from_data(initial.clone());
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };

    // wind_probability = 0: the chance draw still advances each stream.
    channel
        .submit_batch(KernelId::VerletIntegrate, &mut buffers, &idle_args(2))
        .unwrap();

    for (before, after) in initial.iter().zip(seeds.as_slice()) {
        assert_ne!(before, after, "chance draw must advance the stream");
    }
}

#[test]
fn certain_gusts_displace_within_bounds() {
    let mut channel = HostChannel::new();
    channel.init().unwrap();

    let count = 64;
    let mut pos_x = ComputeBuffer::zeros(count);
    let mut pos_y = ComputeBuffer::zeros(count);
    let mut prev_x = ComputeBuffer::zeros(count);
    let mut prev_y = ComputeBuffer::zeros(count);
    let mut seeds =
        SeedBuffer::from_data((0..count as u32).map(|i| rng::seed_stream(31, i)).collect());
    let mut buffers = KernelBuffers {
        pos_x: &mut pos_x,
        pos_y: &mut pos_y,
        prev_x: &mut prev_x,
        prev_y: &mut prev_y,
        seeds: &mut seeds,
    };
    let mut args = idle_args(8);
    args.wind_probability = 1.0;
    args.wind_range = 0.5;

    channel
        .submit_batch(KernelId::VerletIntegrate, &mut buffers, &args)
        .unwrap();

    for i in 0..count {
        let dx = pos_x.as_slice()[i];
        let dy = pos_y.as_slice()[i];
        assert!((0.0..0.5).contains(&dx), "gust x {dx} escaped [0, 0.5)");
        assert!((0.0..0.12).contains(&dy), "gust y {dy} escaped [0, 0.12)");
    }
}
