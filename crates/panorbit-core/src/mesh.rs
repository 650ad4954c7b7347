/// Sphere geometry with equirectangular texture coordinates.
///
/// Vertices lie on the unit sphere; `uvs[i]` maps vertex `i` onto a
/// 2:1 equirectangular image. U runs mirrored (west-to-east seen from
/// the inside) so the panorama reads correctly from the interior, which
/// is the only place the camera ever is.
pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Build a UV sphere of `segments` longitudinal slices and `rings`
/// latitudinal stacks. The seam column is duplicated so U can reach
/// both 0.0 and 1.0.
pub fn build_sphere(segments: u32, rings: u32) -> SphereMesh {
    let vertex_count = ((segments + 1) * (rings + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for ring in 0..=rings {
        // theta: 0 at the north pole, PI at the south pole.
        let v = ring as f32 / rings as f32;
        let theta = v * core::f32::consts::PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for seg in 0..=segments {
            let s = seg as f32 / segments as f32;
            let phi = s * core::f32::consts::TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();

            positions.push([sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]);
            // Mirrored U: interior viewing flips handedness.
            uvs.push([1.0 - s, v]);
        }
    }

    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            indices.push(a);
            indices.push(b);
            indices.push(a + 1);
            indices.push(b);
            indices.push(b + 1);
            indices.push(a + 1);
        }
    }

    SphereMesh {
        positions,
        uvs,
        indices,
    }
}
