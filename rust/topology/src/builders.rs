// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle list builders: quad unification and reference surfaces.
//!
//! Topology and fold normals must come from the same tri-only surface, so
//! mixed quad/triangle surfaces are unified with [`tri_equivalents`] before
//! either is built. The primitives are small, consistently wound (outward /
//! +Z facing) meshes used for diagnostics and tests.

use nalgebra::Point3;

/// Vertex positions and a triangle list.
pub type TriMesh = (Vec<Point3<f32>>, Vec<[u32; 3]>);

/// Triangles followed by each quad split along its `0-2` diagonal.
///
/// Quad `[a, b, c, d]` becomes `[a, b, c]` and `[a, c, d]`, preserving the
/// winding.
pub fn tri_equivalents(tris: &[[u32; 3]], quads: &[[u32; 4]]) -> Vec<[u32; 3]> {
    let mut out = Vec::with_capacity(tris.len() + quads.len() * 2);
    out.extend_from_slice(tris);
    for &[a, b, c, d] in quads {
        out.push([a, b, c]);
        out.push([a, c, d]);
    }
    out
}

/// Axis-aligned unit cube centred on the origin: 8 vertices, 12 triangles.
pub fn cube() -> TriMesh {
    let verts = vec![
        Point3::new(-0.5, -0.5, -0.5),
        Point3::new(0.5, -0.5, -0.5),
        Point3::new(0.5, 0.5, -0.5),
        Point3::new(-0.5, 0.5, -0.5),
        Point3::new(-0.5, -0.5, 0.5),
        Point3::new(0.5, -0.5, 0.5),
        Point3::new(0.5, 0.5, 0.5),
        Point3::new(-0.5, 0.5, 0.5),
    ];
    let quads = [
        [0, 3, 2, 1], // -Z
        [4, 5, 6, 7], // +Z
        [0, 1, 5, 4], // -Y
        [3, 7, 6, 2], // +Y
        [0, 4, 7, 3], // -X
        [1, 2, 6, 5], // +X
    ];
    (verts, tri_equivalents(&[], &quads))
}

/// Flat `n` × `n` grid of unit quads in the XY plane, facing +Z.
///
/// Vertex `(x, y)` has index `y * (n + 1) + x`.
pub fn grid(n: u32) -> TriMesh {
    let side = n + 1;
    let mut verts = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            verts.push(Point3::new(x as f32, y as f32, 0.0));
        }
    }
    let mut quads = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            let a = y * side + x;
            quads.push([a, a + 1, a + side + 1, a + side]);
        }
    }
    (verts, tri_equivalents(&[], &quads))
}

/// Strip of `n` quads along +X whose bottom row `0..=n` lies on the X axis at
/// unit spacing; the top row `n+1..=2n+1` sits at `y = height`.
pub fn strip(n: u32, height: f32) -> TriMesh {
    let mut verts = Vec::with_capacity(2 * (n as usize + 1));
    for x in 0..=n {
        verts.push(Point3::new(x as f32, 0.0, 0.0));
    }
    for x in 0..=n {
        verts.push(Point3::new(x as f32, height, 0.0));
    }
    let top = n + 1;
    let quads: Vec<[u32; 4]> = (0..n).map(|x| [x, x + 1, top + x + 1, top + x]).collect();
    (verts, tri_equivalents(&[], &quads))
}

/// Regular icosahedron inscribed in the unit sphere: 12 vertices, 20 triangles.
pub fn icosahedron() -> TriMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let verts = raw
        .iter()
        .map(|&[x, y, z]| Point3::from(nalgebra::Vector3::new(x, y, z).normalize()))
        .collect();
    let tris = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    (verts, tris)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face_normals;
    use approx::assert_relative_eq;

    #[test]
    fn quads_split_preserving_winding() {
        let tris = tri_equivalents(&[[9, 8, 7]], &[[0, 1, 2, 3]]);
        assert_eq!(tris, vec![[9, 8, 7], [0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn cube_normals_point_outward() {
        let (verts, tris) = cube();
        assert_eq!(verts.len(), 8);
        assert_eq!(tris.len(), 12);
        for (tri, n) in tris.iter().zip(face_normals(&verts, &tris)) {
            let centroid = (verts[tri[0] as usize].coords
                + verts[tri[1] as usize].coords
                + verts[tri[2] as usize].coords)
                / 3.0;
            assert!(n.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn icosahedron_normals_point_outward() {
        let (verts, tris) = icosahedron();
        assert_eq!(verts.len(), 12);
        assert_eq!(tris.len(), 20);
        for v in &verts {
            assert_relative_eq!(v.coords.norm(), 1.0, epsilon = 1e-6);
        }
        for (tri, n) in tris.iter().zip(face_normals(&verts, &tris)) {
            let c = verts[tri[0] as usize].coords;
            assert!(n.dot(&c) > 0.0);
        }
    }

    #[test]
    fn grid_layout() {
        let (verts, tris) = grid(3);
        assert_eq!(verts.len(), 16);
        assert_eq!(tris.len(), 18);
        assert_eq!(verts[5], Point3::new(1.0, 1.0, 0.0));
        for n in face_normals(&verts, &tris) {
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn strip_layout() {
        let (verts, tris) = strip(4, 10.0);
        assert_eq!(verts.len(), 10);
        assert_eq!(tris.len(), 8);
        assert_eq!(verts[4], Point3::new(4.0, 0.0, 0.0));
        assert_eq!(verts[5], Point3::new(0.0, 10.0, 0.0));
    }
}
