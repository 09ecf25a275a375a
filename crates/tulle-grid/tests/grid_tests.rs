//! Integration tests for tulle-grid.

use tulle_grid::layout::{channels_from_interleaved, gather_record, interleave, scatter_record};
use tulle_grid::{Channel, ClothLattice, LatticeParams, Link};
use tulle_types::PointId;

fn small_params(size: usize) -> LatticeParams {
    LatticeParams {
        size,
        ..LatticeParams::default()
    }
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn link_offsets() {
    assert_eq!(Link::Right.offset(), (1, 0));
    assert_eq!(Link::Left.offset(), (-1, 0));
    assert_eq!(Link::Down.offset(), (0, 1));
    assert_eq!(Link::Up.offset(), (0, -1));
}

#[test]
fn link_slots_are_distinct() {
    let slots: Vec<usize> = Link::ALL.iter().map(|l| l.slot()).collect();
    assert_eq!(slots, vec![0, 1, 2, 3]);
}

#[test]
fn neighbor_relation_is_symmetric() {
    let lattice = ClothLattice::generate(&small_params(5), 1).unwrap();
    for y in 0..5 {
        for x in 0..5 {
            for link in Link::ALL {
                if let Some((nx, ny)) = lattice.neighbor(x, y, link) {
                    assert_eq!(
                        lattice.neighbor(nx, ny, link.reverse()),
                        Some((x, y)),
                        "reverse link from ({nx}, {ny}) must return to ({x}, {y})"
                    );
                }
            }
        }
    }
}

#[test]
fn corners_have_two_links() {
    let lattice = ClothLattice::generate(&small_params(4), 0).unwrap();
    assert_eq!(lattice.neighbor(0, 0, Link::Left), None);
    assert_eq!(lattice.neighbor(0, 0, Link::Up), None);
    assert_eq!(lattice.neighbor(0, 0, Link::Right), Some((1, 0)));
    assert_eq!(lattice.neighbor(0, 0, Link::Down), Some((0, 1)));

    assert_eq!(lattice.neighbor(3, 3, Link::Right), None);
    assert_eq!(lattice.neighbor(3, 3, Link::Down), None);
}

#[test]
fn edges_have_three_links() {
    let lattice = ClothLattice::generate(&small_params(4), 0).unwrap();
    let valid = Link::ALL
        .iter()
        .filter(|&&l| lattice.neighbor(2, 0, l).is_some())
        .count();
    assert_eq!(valid, 3, "a top-edge point has 3 valid links");
}

// ─── Coordinate Bijection Tests ───────────────────────────────

#[test]
fn index_coords_round_trip() {
    let lattice = ClothLattice::generate(&small_params(5), 0).unwrap();
    for y in 0..5 {
        for x in 0..5 {
            let id = lattice.index_of(x, y);
            assert_eq!(lattice.coords_of(id), (x, y));
        }
    }
}

#[test]
fn index_is_row_major() {
    let lattice = ClothLattice::generate(&small_params(4), 0).unwrap();
    assert_eq!(lattice.index_of(0, 0), PointId(0));
    assert_eq!(lattice.index_of(3, 0), PointId(3));
    assert_eq!(lattice.index_of(0, 1), PointId(4));
    assert_eq!(lattice.index_of(3, 3), PointId(15));
}

// ─── Seeding Tests ────────────────────────────────────────────

#[test]
fn seeded_positions_match_formula_within_jitter() {
    let params = small_params(8);
    let lattice = ClothLattice::seed(&params, 42).unwrap();
    let sx = (params.surface_width - 100.0) / 8.0;
    let sy = (params.surface_height - 180.0) / 8.0;

    for y in 0..8 {
        for x in 0..8 {
            let i = lattice.index_of(x, y).index();
            let base_x = 10.0 + x as f32 * sx + y as f32 * 0.9;
            let base_y = 10.0 + y as f32 * sy;
            let px = lattice.initial_x()[i];
            let py = lattice.initial_y()[i];
            // Upper bound gets a rounding allowance: base + jitter can
            // land on base + 2.0 exactly in f32.
            assert!(
                px >= base_x && px < base_x + 2.0 + 1e-3,
                "x of ({x}, {y}) = {px} escaped [{base_x}, {base_x} + 2)"
            );
            assert!(
                py >= base_y && py < base_y + 2.0 + 1e-3,
                "y of ({x}, {y}) = {py} escaped [{base_y}, {base_y} + 2)"
            );
        }
    }
}

#[test]
fn seeding_is_deterministic_per_seed() {
    let params = small_params(6);
    let a = ClothLattice::seed(&params, 7).unwrap();
    let b = ClothLattice::seed(&params, 7).unwrap();
    assert_eq!(a.initial_x(), b.initial_x());
    assert_eq!(a.initial_y(), b.initial_y());

    let c = ClothLattice::seed(&params, 8).unwrap();
    assert_ne!(a.initial_x(), c.initial_x());
}

#[test]
fn top_row_is_pinned_at_seeded_position() {
    let lattice = ClothLattice::generate(&small_params(6), 3).unwrap();
    for x in 0..6 {
        let i = lattice.index_of(x, 0).index();
        assert!(lattice.is_pinned(i));
        assert_eq!(lattice.pinned_x()[i], lattice.initial_x()[i]);
        assert_eq!(lattice.pinned_y()[i], lattice.initial_y()[i]);
    }
    for y in 1..6 {
        for x in 0..6 {
            assert!(!lattice.is_pinned(lattice.index_of(x, y).index()));
        }
    }
}

#[test]
fn seed_rejects_degenerate_params() {
    assert!(ClothLattice::seed(&small_params(1), 0).is_err());

    let narrow = LatticeParams {
        surface_width: 50.0,
        ..small_params(4)
    };
    assert!(ClothLattice::seed(&narrow, 0).is_err());

    let short = LatticeParams {
        surface_height: 100.0,
        ..small_params(4)
    };
    assert!(ClothLattice::seed(&short, 0).is_err());

    let slack = LatticeParams {
        rest_slack: 0.0,
        ..small_params(4)
    };
    assert!(ClothLattice::seed(&slack, 0).is_err());
}

// ─── Rest Length Tests ────────────────────────────────────────

#[test]
fn rest_lengths_are_slack_times_seeded_distance() {
    let params = small_params(5);
    let lattice = ClothLattice::generate(&params, 11).unwrap();
    for y in 0..5 {
        for x in 0..5 {
            let i = lattice.index_of(x, y).index();
            for link in Link::ALL {
                match lattice.neighbor_index(x, y, link) {
                    Some(j) => {
                        let dx = lattice.initial_x()[j] - lattice.initial_x()[i];
                        let dy = lattice.initial_y()[j] - lattice.initial_y()[i];
                        let expected = 1.15 * (dx * dx + dy * dy).sqrt();
                        let actual = lattice.rest_length(i, link);
                        assert!(
                            (actual - expected).abs() < 1e-4,
                            "rest length at ({x}, {y}) {link:?}: {actual} vs {expected}"
                        );
                    }
                    None => {
                        assert_eq!(
                            lattice.rest_length(i, link),
                            0.0,
                            "absent link at ({x}, {y}) {link:?} must hold 0"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn rest_ready_tracks_initialization() {
    let mut lattice = ClothLattice::seed(&small_params(4), 0).unwrap();
    assert!(!lattice.rest_ready());
    lattice.initialize_rest_lengths();
    assert!(lattice.rest_ready());
}

#[test]
fn reinitializing_rest_lengths_is_idempotent() {
    let mut lattice = ClothLattice::generate(&small_params(4), 5).unwrap();
    let before: Vec<f32> = (0..lattice.point_count())
        .map(|i| lattice.rest_length(i, Link::Right))
        .collect();
    lattice.initialize_rest_lengths();
    let after: Vec<f32> = (0..lattice.point_count())
        .map(|i| lattice.rest_length(i, Link::Right))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn lattice_validates() {
    let lattice = ClothLattice::generate(&small_params(4), 0).unwrap();
    assert!(lattice.validate().is_ok());
}

#[test]
fn regular_lattice_has_exact_geometry() {
    let lattice = ClothLattice::regular(4, 2.0, 1.5).unwrap();
    assert!(lattice.rest_ready());
    assert_eq!(lattice.point_count(), 16);

    for y in 0..4 {
        for x in 0..4 {
            let i = lattice.index_of(x, y).index();
            assert_eq!(lattice.initial_x()[i], x as f32 * 2.0);
            assert_eq!(lattice.initial_y()[i], y as f32 * 2.0);
            assert_eq!(lattice.is_pinned(i), y == 0);
            for link in Link::ALL {
                let expected = if lattice.neighbor_index(x, y, link).is_some() {
                    1.5
                } else {
                    0.0
                };
                assert_eq!(lattice.rest_length(i, link), expected);
            }
        }
    }
}

#[test]
fn regular_lattice_rejects_bad_parameters() {
    assert!(ClothLattice::regular(1, 1.0, 1.0).is_err());
    assert!(ClothLattice::regular(4, 0.0, 1.0).is_err());
    assert!(ClothLattice::regular(4, 1.0, -1.0).is_err());
    assert!(ClothLattice::regular(4, f32::NAN, 1.0).is_err());
}

// ─── Channel Tests ────────────────────────────────────────────

#[test]
fn channel_zeros() {
    let chan = Channel::zeros(16);
    assert_eq!(chan.len(), 16);
    assert!(chan.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn channel_lane_round_trip() {
    let mut chan = Channel::from_vec((0..16).map(|i| i as f32).collect());
    let lane: [f32; 4] = chan.load_lane(1);
    assert_eq!(lane, [4.0, 5.0, 6.0, 7.0]);

    chan.store_lane(1, [9.0, 9.0, 9.0, 9.0]);
    assert_eq!(&chan.as_slice()[4..8], &[9.0, 9.0, 9.0, 9.0]);
    // Surrounding lanes untouched.
    assert_eq!(chan.as_slice()[3], 3.0);
    assert_eq!(chan.as_slice()[8], 8.0);
}

#[test]
fn channel_lane_accounting_with_tail() {
    let chan = Channel::zeros(19);
    assert_eq!(chan.lane_count::<8>(), 2);
    assert_eq!(chan.lane_tail::<8>(), 16);
    assert_eq!(chan.lane_count::<4>(), 4);
    assert_eq!(chan.lane_tail::<4>(), 16);
}

#[test]
fn channel_indexing() {
    let mut chan = Channel::zeros(4);
    chan[2] = 5.5;
    assert_eq!(chan[2], 5.5);
}

// ─── Record / Interleave Tests ────────────────────────────────

#[test]
fn record_gather_scatter_round_trip() {
    let lattice = ClothLattice::generate(&small_params(4), 9).unwrap();
    let count = lattice.point_count();
    let pos_x = Channel::from_vec(lattice.initial_x().to_vec());
    let pos_y = Channel::from_vec(lattice.initial_y().to_vec());
    let prev_x = pos_x.clone();
    let prev_y = pos_y.clone();

    let records: Vec<_> = (0..count)
        .map(|i| gather_record(&lattice, &pos_x, &pos_y, &prev_x, &prev_y, i))
        .collect();

    // Wipe and scatter back.
    let mut blank_x = Channel::zeros(count);
    let mut blank_y = Channel::zeros(count);
    let mut blank_px = Channel::zeros(count);
    let mut blank_py = Channel::zeros(count);
    for (i, record) in records.iter().enumerate() {
        scatter_record(record, &mut blank_x, &mut blank_y, &mut blank_px, &mut blank_py, i);
    }
    assert_eq!(blank_x, pos_x);
    assert_eq!(blank_y, pos_y);
    assert_eq!(blank_px, prev_x);
    assert_eq!(blank_py, prev_y);

    // Records see the same pin data as the lattice.
    let top = gather_record(&lattice, &pos_x, &pos_y, &prev_x, &prev_y, 2);
    assert!(top.pinned);
    assert_eq!(top.pinned_position[0], lattice.pinned_x()[2]);
}

#[test]
fn interleave_round_trip() {
    let xs = Channel::from_vec(vec![1.0, 3.0, 5.0]);
    let ys = Channel::from_vec(vec![2.0, 4.0, 6.0]);
    let pairs = interleave(&xs, &ys).unwrap();
    assert_eq!(pairs, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let (back_x, back_y) = channels_from_interleaved(&pairs).unwrap();
    assert_eq!(back_x, xs);
    assert_eq!(back_y, ys);
}

#[test]
fn interleave_rejects_mismatched_lengths() {
    let xs = Channel::zeros(3);
    let ys = Channel::zeros(4);
    assert!(interleave(&xs, &ys).is_err());
}

#[test]
fn deinterleave_rejects_odd_length() {
    assert!(channels_from_interleaved(&[1.0, 2.0, 3.0]).is_err());
}
