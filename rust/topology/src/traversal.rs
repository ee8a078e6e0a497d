// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Neighbourhood queries and connected-component tracing over restricted
//! edge subsets.
//!
//! Seams follow boundary edges (one triangle). Folds follow manifold edges
//! whose two triangles meet at a sharp dihedral angle. Both traversals keep a
//! visited set, so cyclic boundaries and closed fold loops terminate.

use std::collections::BTreeSet;

use nalgebra::Vector3;

use crate::arena::MeshTopology;
use crate::config::TopologyConfig;

impl MeshTopology {
    // =========================================================================
    // Neighbourhoods
    // =========================================================================

    /// Vertices one boundary edge away from `vert_idx`, sorted.
    ///
    /// Two entries for a vertex on a manifold boundary, more where seams
    /// cross, none if the vertex is not on a boundary.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn vert_boundary_neighbours(&self, vert_idx: u32) -> Vec<u32> {
        let mut out: Vec<u32> = self
            .vert(vert_idx)
            .edge_inds
            .iter()
            .map(|&e| &self.edges[e as usize])
            .filter(|e| e.is_boundary())
            .map(|e| e.other_vert_idx(vert_idx))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// The 1-ring of `vert_idx`: every vertex sharing an edge with it, sorted.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn vert_neighbours(&self, vert_idx: u32) -> Vec<u32> {
        let mut out: Vec<u32> = self
            .vert(vert_idx)
            .edge_inds
            .iter()
            .map(|&e| self.edges[e as usize].other_vert_idx(vert_idx))
            .filter(|&v| v != vert_idx)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    // =========================================================================
    // Seams
    // =========================================================================

    /// The connected seam containing `vert_idx`, or the empty set if the
    /// vertex has no boundary edge.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is outside the vertex table.
    pub fn seam_containing(&self, vert_idx: u32) -> BTreeSet<u32> {
        if !self.vert_on_boundary(vert_idx) {
            return BTreeSet::new();
        }
        let mut seam = BTreeSet::new();
        let mut stack = vec![vert_idx];
        seam.insert(vert_idx);
        while let Some(v) = stack.pop() {
            for n in self.vert_boundary_neighbours(v) {
                if seam.insert(n) {
                    stack.push(n);
                }
            }
        }
        seam
    }

    /// Every seam of the mesh as a disjoint vertex set.
    ///
    /// Seams are ordered by their lowest vertex index and together contain
    /// every boundary vertex exactly once.
    pub fn seams(&self) -> Vec<BTreeSet<u32>> {
        let mut done = vec![false; self.verts.len()];
        let mut seams = Vec::new();
        for v in 0..self.verts.len() as u32 {
            if done[v as usize] || !self.vert_on_boundary(v) {
                continue;
            }
            let seam = self.seam_containing(v);
            for &s in &seam {
                done[s as usize] = true;
            }
            seams.push(seam);
        }
        tracing::debug!(seams = seams.len(), "Traced boundary seams");
        seams
    }

    /// Every boundary vertex arranged into walks along boundary edges.
    ///
    /// Each walk starts at the lowest unwalked boundary vertex and prefers
    /// the boundary edge its triangle traverses away from the current vertex,
    /// so a consistently wound hole comes out as one loop in winding order.
    /// Seams that cross themselves are split into several walks.
    pub fn seam_loops(&self) -> Vec<Vec<u32>> {
        let mut walked = vec![false; self.verts.len()];
        let mut loops = Vec::new();
        for start in 0..self.verts.len() as u32 {
            if walked[start as usize] || !self.vert_on_boundary(start) {
                continue;
            }
            walked[start as usize] = true;
            let mut chain = vec![start];
            let mut current = start;
            while let Some(next) = self.next_seam_vert(current, &walked) {
                walked[next as usize] = true;
                chain.push(next);
                current = next;
            }
            loops.push(chain);
        }
        loops
    }

    fn next_seam_vert(&self, vert_idx: u32, walked: &[bool]) -> Option<u32> {
        let mut fallback = None;
        for &ei in &self.verts[vert_idx as usize].edge_inds {
            let edge = &self.edges[ei as usize];
            if !edge.is_boundary() {
                continue;
            }
            let other = edge.other_vert_idx(vert_idx);
            if walked[other as usize] {
                continue;
            }
            let tri = self.tri(edge.tri_inds[0]);
            if let Some(k) = tri.local_edge(ei) {
                if tri.edge(k)[0] == vert_idx {
                    return Some(other);
                }
            }
            fallback = fallback.or(Some(other));
        }
        fallback
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Traces the fold through `vert_idx` using the default 60° dihedral
    /// threshold. See [`MeshTopology::trace_fold_with`].
    pub fn trace_fold(
        &self,
        normals: &[Vector3<f32>],
        visited: &mut [bool],
        vert_idx: u32,
    ) -> BTreeSet<u32> {
        self.trace_fold_with(&TopologyConfig::default(), normals, visited, vert_idx)
    }

    /// Traces the connected set of vertices joined by fold edges, starting at
    /// `vert_idx`.
    ///
    /// A fold edge has exactly two triangles whose unit normals have a dot
    /// product below `config.fold_dot_threshold()`. `normals` must hold one
    /// normal per triangle of the same tri-only surface this topology was
    /// built from.
    ///
    /// Every returned vertex is set in `visited`, and vertices already set
    /// are never entered, so repeated calls over one buffer never re-trace a
    /// fold. Returns the empty set if `vert_idx` is already visited or has no
    /// fold edge.
    ///
    /// # Panics
    ///
    /// Panics if `vert_idx` is out of range, or if `normals` or `visited`
    /// do not match the triangle and vertex counts.
    pub fn trace_fold_with(
        &self,
        config: &TopologyConfig,
        normals: &[Vector3<f32>],
        visited: &mut [bool],
        vert_idx: u32,
    ) -> BTreeSet<u32> {
        self.check_vert(vert_idx);
        assert_eq!(
            normals.len(),
            self.tris.len(),
            "fold normals must come from the triangulation the topology was built from"
        );
        assert_eq!(
            visited.len(),
            self.verts.len(),
            "visited buffer must have one flag per vertex"
        );

        let threshold = config.fold_dot_threshold();
        let mut fold = BTreeSet::new();
        if visited[vert_idx as usize] || !self.has_fold_edge(vert_idx, normals, threshold) {
            return fold;
        }

        visited[vert_idx as usize] = true;
        fold.insert(vert_idx);
        let mut stack = vec![vert_idx];
        while let Some(v) = stack.pop() {
            for &ei in &self.verts[v as usize].edge_inds {
                if !self.is_fold_edge(ei, normals, threshold) {
                    continue;
                }
                let n = self.edges[ei as usize].other_vert_idx(v);
                if !visited[n as usize] {
                    visited[n as usize] = true;
                    fold.insert(n);
                    stack.push(n);
                }
            }
        }
        fold
    }

    /// Every fold of the mesh under `config`, traced over a fresh visited
    /// buffer in vertex order.
    pub fn folds(&self, config: &TopologyConfig, normals: &[Vector3<f32>]) -> Vec<BTreeSet<u32>> {
        let mut visited = vec![false; self.verts.len()];
        let mut folds = Vec::new();
        for v in 0..self.verts.len() as u32 {
            let fold = self.trace_fold_with(config, normals, &mut visited, v);
            if !fold.is_empty() {
                folds.push(fold);
            }
        }
        tracing::debug!(
            folds = folds.len(),
            angle_deg = config.fold_angle_deg,
            "Traced folds"
        );
        folds
    }

    fn is_fold_edge(&self, edge_idx: u32, normals: &[Vector3<f32>], threshold: f32) -> bool {
        match self.edges[edge_idx as usize].tri_inds.as_slice() {
            &[t0, t1] => normals[t0 as usize].dot(&normals[t1 as usize]) < threshold,
            _ => false,
        }
    }

    fn has_fold_edge(&self, vert_idx: u32, normals: &[Vector3<f32>], threshold: f32) -> bool {
        self.verts[vert_idx as usize]
            .edge_inds
            .iter()
            .any(|&e| self.is_fold_edge(e, normals, threshold))
    }
}
