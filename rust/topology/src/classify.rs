// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manifold classification: boundary, non-manifold and reversed edges,
//! boundary vertices and unused vertices.
//!
//! Every query here is a read-only scan over the edge or vertex table. None
//! of them treat unusual topology as an error; the counts are the result.

use serde::Serialize;

use crate::arena::MeshTopology;
use crate::keys::EdgeClass;

/// Global edge health counts returned by [`MeshTopology::is_manifold`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ManifoldCounts {
    /// Edges referenced by exactly one triangle.
    pub boundary: u32,
    /// Edges referenced by three or more triangles.
    pub non_manifold: u32,
    /// Two-triangle edges whose triangles traverse it in the same direction.
    pub reversed: u32,
}

impl ManifoldCounts {
    /// Closed, manifold and consistently wound.
    pub fn is_watertight(&self) -> bool {
        self.boundary == 0 && self.non_manifold == 0 && self.reversed == 0
    }

    /// Manifold and consistently wound, possibly with boundary.
    pub fn is_manifold(&self) -> bool {
        self.non_manifold == 0 && self.reversed == 0
    }

    /// The counts as `[boundary, non_manifold, reversed]`.
    pub fn as_array(&self) -> [u32; 3] {
        [self.boundary, self.non_manifold, self.reversed]
    }
}

impl From<ManifoldCounts> for [u32; 3] {
    fn from(c: ManifoldCounts) -> Self {
        c.as_array()
    }
}

impl MeshTopology {
    /// Counts boundary, non-manifold and reversed edges.
    ///
    /// If all three are zero the mesh is watertight. If the last two are zero
    /// the mesh is manifold. Winding consistency is only examined on edges
    /// with exactly two triangles.
    pub fn is_manifold(&self) -> ManifoldCounts {
        let mut counts = ManifoldCounts::default();
        for (ei, edge) in self.edges.iter().enumerate() {
            match edge.class() {
                EdgeClass::Boundary => counts.boundary += 1,
                EdgeClass::NonManifold => counts.non_manifold += 1,
                EdgeClass::Manifold => {
                    if self.is_reversed_edge(ei as u32) {
                        counts.reversed += 1;
                    }
                }
            }
        }
        counts
    }

    /// Returns the class of an edge.
    pub fn edge_class(&self, edge_idx: u32) -> EdgeClass {
        self.edge(edge_idx).class()
    }

    /// True if the edge has two triangles that traverse it in the same
    /// direction. Always false for edges with any other triangle count.
    pub fn is_reversed_edge(&self, edge_idx: u32) -> bool {
        if self.edge(edge_idx).tri_inds.len() != 2 {
            return false;
        }
        let dirs = self.edge_directions(edge_idx);
        dirs.len() == 2 && dirs[0] == dirs[1]
    }

    /// Indices of all two-triangle edges with inconsistent winding.
    pub fn reversed_edges(&self) -> Vec<u32> {
        (0..self.edges.len() as u32)
            .filter(|&e| self.is_reversed_edge(e))
            .collect()
    }

    /// Indices of all edges referenced by exactly one triangle.
    pub fn boundary_edges(&self) -> Vec<u32> {
        self.edges_of_class(EdgeClass::Boundary)
    }

    /// Indices of all edges referenced by three or more triangles.
    pub fn non_manifold_edges(&self) -> Vec<u32> {
        self.edges_of_class(EdgeClass::NonManifold)
    }

    fn edges_of_class(&self, class: EdgeClass) -> Vec<u32> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.class() == class)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Number of edges whose two endpoints are the same vertex.
    pub fn degenerate_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.is_degenerate()).count()
    }

    /// True if at least one edge at `vert_idx` has exactly one triangle.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn vert_on_boundary(&self, vert_idx: u32) -> bool {
        self.vert(vert_idx)
            .edge_inds
            .iter()
            .any(|&e| self.edges[e as usize].is_boundary())
    }

    /// Number of boundary edges touching `vert_idx`.
    ///
    /// Even for every vertex of a valid surface. An odd count marks
    /// non-manifold or degenerate geometry at that vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn boundary_edge_count(&self, vert_idx: u32) -> usize {
        self.vert(vert_idx)
            .edge_inds
            .iter()
            .filter(|&&e| self.edges[e as usize].is_boundary())
            .count()
    }

    /// Vertices touched by an odd number of boundary edges.
    pub fn odd_boundary_verts(&self) -> Vec<u32> {
        (0..self.verts.len() as u32)
            .filter(|&v| self.boundary_edge_count(v) % 2 == 1)
            .collect()
    }

    /// Number of vertices on at least one boundary edge.
    pub fn boundary_vert_count(&self) -> usize {
        (0..self.verts.len() as u32)
            .filter(|&v| self.vert_on_boundary(v))
            .count()
    }

    /// Number of vertices referenced by no triangle.
    pub fn unused_verts(&self) -> usize {
        self.verts.iter().filter(|v| v.edge_inds.is_empty()).count()
    }

    /// The vertex of `tri_idx` that is not on `edge_idx`.
    ///
    /// # Panics
    ///
    /// Panics if the triangle does not use the edge.
    pub fn opposite_vert(&self, tri_idx: u32, edge_idx: u32) -> u32 {
        let tri = self.tri(tri_idx);
        let k = tri
            .local_edge(edge_idx)
            .unwrap_or_else(|| panic!("triangle {tri_idx} does not use edge {edge_idx}"));
        tri.vert_inds[(k + 2) % 3]
    }

    /// The vertices facing a manifold edge across its two triangles.
    ///
    /// # Panics
    ///
    /// Panics unless the edge has exactly two triangles.
    pub fn edge_facing_vert_inds(&self, edge_idx: u32) -> [u32; 2] {
        let tris = &self.edge(edge_idx).tri_inds;
        assert!(
            tris.len() == 2,
            "edge {edge_idx} has {} triangles, facing vertices need exactly 2",
            tris.len()
        );
        [
            self.opposite_vert(tris[0], edge_idx),
            self.opposite_vert(tris[1], edge_idx),
        ]
    }

    // Ordered vertex pair for every triangle reference of the edge, one entry
    // per occurrence in `tri_inds`.
    fn edge_directions(&self, edge_idx: u32) -> Vec<[u32; 2]> {
        let edge = self.edge(edge_idx);
        let mut dirs = Vec::with_capacity(edge.tri_inds.len());
        let mut prev = None;
        for &ti in &edge.tri_inds {
            // A triangle using the edge twice appears twice in a row
            if prev == Some(ti) {
                continue;
            }
            prev = Some(ti);
            let tri = self.tri(ti);
            for k in 0..3 {
                if tri.edge_inds[k] == edge_idx {
                    dirs.push(tri.edge(k));
                }
            }
        }
        dirs
    }
}
