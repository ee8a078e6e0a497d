// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Index-addressed adjacency tables for a triangulated surface.
//!
//! The [`MeshTopology`] owns three arenas (triangles, edges, vertices) that
//! reference each other purely by `u32` index. Triangles point down to their
//! edges, edges point up to the triangles that use them, and every vertex
//! lists its incident edges and triangles. Nothing is removed once built, so
//! plain indices are stable for the lifetime of the structure.
//!
//! ## Triangle Soup Input
//!
//! The builder accepts any triangle list whose indices are in range. Edges
//! shared by more than two triangles, inconsistently wound neighbours and
//! degenerate triangles that repeat a vertex are all representable; they are
//! reported by the classification queries rather than rejected here.

use nalgebra::Point3;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::keys::EdgeClass;

/// A triangle: three vertices in winding order and the edges between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tri {
    pub vert_inds: [u32; 3],
    /// `edge_inds[k]` joins `vert_inds[k]` to `vert_inds[(k + 1) % 3]`.
    pub edge_inds: [u32; 3],
}

impl Tri {
    /// Returns the vertex pair of local edge `rel_idx` (0, 1 or 2) in this
    /// triangle's winding direction.
    pub fn edge(&self, rel_idx: usize) -> [u32; 2] {
        [self.vert_inds[rel_idx], self.vert_inds[(rel_idx + 1) % 3]]
    }

    /// Returns the local position (0, 1 or 2) of `edge_idx` in this triangle.
    pub fn local_edge(&self, edge_idx: u32) -> Option<usize> {
        self.edge_inds.iter().position(|&e| e == edge_idx)
    }
}

/// An edge: one per distinct unordered vertex pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Lower index first.
    pub vert_inds: [u32; 2],
    /// Every triangle referencing this edge, in construction order.
    pub tri_inds: Vec<u32>,
}

impl Edge {
    /// Returns the endpoint that is not `vert_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is not an endpoint of this edge.
    pub fn other_vert_idx(&self, vert_idx: u32) -> u32 {
        let [a, b] = self.vert_inds;
        if vert_idx == a {
            b
        } else {
            assert!(
                vert_idx == b,
                "vertex {vert_idx} is not an endpoint of edge {a}-{b}"
            );
            a
        }
    }

    /// Classifies the edge by the number of triangles referencing it.
    pub fn class(&self) -> EdgeClass {
        EdgeClass::from_valence(self.tri_inds.len())
    }

    /// True if exactly one triangle references this edge.
    pub fn is_boundary(&self) -> bool {
        self.tri_inds.len() == 1
    }

    /// True if both endpoints are the same vertex.
    pub fn is_degenerate(&self) -> bool {
        self.vert_inds[0] == self.vert_inds[1]
    }
}

/// Incidence lists for one input vertex. Both are empty for unused vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vert {
    pub edge_inds: Vec<u32>,
    pub tri_inds: Vec<u32>,
}

/// Adjacency tables built from an immutable (vertices, triangles) snapshot.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use surface_topology::MeshTopology;
///
/// let verts = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let topo = MeshTopology::new(&verts, &[[0, 1, 2], [0, 2, 3]]).unwrap();
///
/// assert_eq!(topo.edge_count(), 5);
/// assert_eq!(topo.is_manifold().boundary, 4);
/// ```
#[derive(Debug, Clone)]
pub struct MeshTopology {
    pub(crate) tris: Vec<Tri>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) verts: Vec<Vert>,

    // Canonical (low, high) vertex pair → edge index
    pub(crate) edge_lookup: FxHashMap<(u32, u32), u32>,
}

impl MeshTopology {
    /// Builds the topology of `tris` over the vertex table `verts`.
    ///
    /// Positions are only used for their count; they are not copied.
    pub fn new(verts: &[Point3<f32>], tris: &[[u32; 3]]) -> Result<Self> {
        Self::from_vert_count(verts.len(), tris)
    }

    /// Builds the topology of `tris` over `vert_count` vertices.
    ///
    /// Returns [`Error::VertexOutOfRange`] if any triangle corner is not a
    /// valid vertex index. Nothing is built in that case.
    pub fn from_vert_count(vert_count: usize, tris: &[[u32; 3]]) -> Result<Self> {
        if vert_count > u32::MAX as usize {
            return Err(Error::TooManyVertices(vert_count));
        }
        if tris.len() > (u32::MAX / 3) as usize {
            return Err(Error::TooManyTriangles(tris.len()));
        }
        for (tri, corners) in tris.iter().enumerate() {
            for (corner, &index) in corners.iter().enumerate() {
                if index as usize >= vert_count {
                    return Err(Error::VertexOutOfRange {
                        tri,
                        corner,
                        index,
                        vert_count,
                    });
                }
            }
        }

        let mut topo = Self {
            tris: Vec::with_capacity(tris.len()),
            edges: Vec::with_capacity(tris.len() * 3 / 2 + 1),
            verts: vec![Vert::default(); vert_count],
            edge_lookup: FxHashMap::default(),
        };
        topo.edge_lookup.reserve(tris.len() * 3 / 2 + 1);

        for (ti, corners) in tris.iter().enumerate() {
            let tri_idx = ti as u32;
            let mut edge_inds = [0u32; 3];
            for (k, slot) in edge_inds.iter_mut().enumerate() {
                let a = corners[k];
                let b = corners[(k + 1) % 3];
                let edge_idx = topo.find_or_add_edge(a, b);
                topo.edges[edge_idx as usize].tri_inds.push(tri_idx);
                *slot = edge_idx;
            }
            for (k, &v) in corners.iter().enumerate() {
                // A triangle that repeats a vertex is listed on it once
                if !corners[..k].contains(&v) {
                    topo.verts[v as usize].tri_inds.push(tri_idx);
                }
            }
            topo.tris.push(Tri {
                vert_inds: *corners,
                edge_inds,
            });
        }

        let degenerate = topo.edges.iter().filter(|e| e.is_degenerate()).count();
        if degenerate > 0 {
            tracing::warn!(
                degenerate_edges = degenerate,
                "Triangle list contains triangles with repeated vertices"
            );
        }
        tracing::debug!(
            verts = topo.verts.len(),
            edges = topo.edges.len(),
            tris = topo.tris.len(),
            "Built mesh topology"
        );

        Ok(topo)
    }

    fn find_or_add_edge(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&idx) = self.edge_lookup.get(&key) {
            return idx;
        }
        let idx = self.edges.len() as u32;
        self.edges.push(Edge {
            vert_inds: [key.0, key.1],
            tri_inds: Vec::new(),
        });
        self.edge_lookup.insert(key, idx);
        self.verts[key.0 as usize].edge_inds.push(idx);
        self.verts[key.1 as usize].edge_inds.push(idx);
        idx
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns all triangles, indexed as in the input list.
    pub fn tris(&self) -> &[Tri] {
        &self.tris
    }

    /// Returns all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the incidence record of every input vertex.
    pub fn verts(&self) -> &[Vert] {
        &self.verts
    }

    /// Returns the number of triangles.
    pub fn tri_count(&self) -> usize {
        self.tris.len()
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of vertices, including unused ones.
    pub fn vert_count(&self) -> usize {
        self.verts.len()
    }

    /// Returns the triangle at `tri_idx`.
    pub fn tri(&self, tri_idx: u32) -> &Tri {
        &self.tris[tri_idx as usize]
    }

    /// Returns the edge at `edge_idx`.
    pub fn edge(&self, edge_idx: u32) -> &Edge {
        &self.edges[edge_idx as usize]
    }

    /// Returns the incidence record of `vert_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn vert(&self, vert_idx: u32) -> &Vert {
        self.check_vert(vert_idx);
        &self.verts[vert_idx as usize]
    }

    /// Returns the edge joining `a` and `b` (in either order), if any.
    pub fn edge_between(&self, a: u32, b: u32) -> Option<u32> {
        self.edge_lookup.get(&(a.min(b), a.max(b))).copied()
    }

    pub(crate) fn check_vert(&self, vert_idx: u32) {
        assert!(
            (vert_idx as usize) < self.verts.len(),
            "vertex index {vert_idx} out of range for topology with {} vertices",
            self.verts.len()
        );
    }
}
