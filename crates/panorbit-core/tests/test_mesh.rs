use approx::assert_relative_eq;

use panorbit_core::mesh::build_sphere;

#[test]
fn vertex_and_index_counts() {
    let mesh = build_sphere(32, 32);
    assert_eq!(mesh.vertex_count(), 33 * 33);
    assert_eq!(mesh.uvs.len(), 33 * 33);
    assert_eq!(mesh.indices.len(), 32 * 32 * 6);
}

#[test]
fn vertices_lie_on_unit_sphere() {
    let mesh = build_sphere(16, 12);
    for p in &mesh.positions {
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert_relative_eq!(len, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn indices_stay_in_bounds() {
    let mesh = build_sphere(8, 6);
    let n = mesh.vertex_count() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn uv_covers_unit_square() {
    let mesh = build_sphere(32, 32);
    for uv in &mesh.uvs {
        assert!((0.0..=1.0).contains(&uv[0]));
        assert!((0.0..=1.0).contains(&uv[1]));
    }
}

#[test]
fn u_runs_mirrored_along_each_ring() {
    // Interior viewing: U must decrease as longitude increases.
    let segments = 16;
    let mesh = build_sphere(segments, 4);
    let stride = (segments + 1) as usize;
    let ring = &mesh.uvs[2 * stride..3 * stride];
    assert_eq!(ring[0][0], 1.0);
    assert_eq!(ring[stride - 1][0], 0.0);
    for pair in ring.windows(2) {
        assert!(pair[1][0] < pair[0][0]);
    }
}

#[test]
fn v_runs_pole_to_pole() {
    let segments = 8u32;
    let rings = 6u32;
    let mesh = build_sphere(segments, rings);
    let stride = (segments + 1) as usize;

    // North pole row: y = +1, v = 0. South pole row: y = -1, v = 1.
    for seg in 0..stride {
        assert_relative_eq!(mesh.positions[seg][1], 1.0, epsilon = 1e-5);
        assert_eq!(mesh.uvs[seg][1], 0.0);

        let last = (rings as usize) * stride + seg;
        assert_relative_eq!(mesh.positions[last][1], -1.0, epsilon = 1e-5);
        assert_eq!(mesh.uvs[last][1], 1.0);
    }
}

#[test]
fn seam_column_is_duplicated() {
    let segments = 12u32;
    let mesh = build_sphere(segments, 6);
    let stride = (segments + 1) as usize;

    // Same position at both ends of a ring, different U.
    let ring_start = 3 * stride;
    let first = mesh.positions[ring_start];
    let last = mesh.positions[ring_start + stride - 1];
    for axis in 0..3 {
        assert_relative_eq!(first[axis], last[axis], epsilon = 1e-5);
    }
    assert_ne!(mesh.uvs[ring_start][0], mesh.uvs[ring_start + stride - 1][0]);
}
