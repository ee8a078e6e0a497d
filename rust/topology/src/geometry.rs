// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric helpers used alongside the topology: triangle normals, edge
//! lengths and dihedral thresholds.
//!
//! The topology itself never stores positions. These functions take the
//! caller's vertex array by reference whenever geometry is needed.

use nalgebra::{Point3, Vector3};

use crate::arena::MeshTopology;

/// Unit normal of the triangle `(a, b, c)` following the right-hand rule.
///
/// Returns the zero vector for a degenerate (zero-area) triangle.
pub fn tri_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Vector3<f32> {
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len < f32::EPSILON {
        return Vector3::zeros();
    }
    n / len
}

/// Per-triangle unit normals for a triangle list, in the same order.
///
/// The result is suitable for [`MeshTopology::trace_fold`] when the topology
/// was built from the same `tris`.
///
/// # Panics
///
/// Panics if a triangle references a vertex outside `verts`.
pub fn face_normals(verts: &[Point3<f32>], tris: &[[u32; 3]]) -> Vec<Vector3<f32>> {
    normals_of(verts, tris.iter().copied())
}

fn normals_of(
    verts: &[Point3<f32>],
    tris: impl Iterator<Item = [u32; 3]>,
) -> Vec<Vector3<f32>> {
    tris.map(|[a, b, c]| tri_normal(&verts[a as usize], &verts[b as usize], &verts[c as usize]))
        .collect()
}

/// Cosine of a dihedral angle given in degrees.
///
/// Two faces whose normals have a dot product below this value meet at an
/// angle of at least `angle_deg`.
pub fn dihedral_cos_threshold(angle_deg: f32) -> f32 {
    angle_deg.to_radians().cos()
}

impl MeshTopology {
    /// Euclidean length of an edge under the given vertex positions.
    pub fn edge_length(&self, verts: &[Point3<f32>], edge_idx: u32) -> f32 {
        let [a, b] = self.edge(edge_idx).vert_inds;
        (verts[b as usize] - verts[a as usize]).norm()
    }

    /// Unit normals for every triangle of this topology.
    pub fn tri_normals(&self, verts: &[Point3<f32>]) -> Vec<Vector3<f32>> {
        normals_of(verts, self.tris.iter().map(|t| t.vert_inds))
    }
}
