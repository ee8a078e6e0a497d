// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shortest-path distance fields along the mesh edge graph.
//!
//! Distances accumulate Euclidean edge lengths, so paths are restricted to
//! mesh edges: no shortcut across a triangle interior or off the surface is
//! considered. Vertices with no path to a seed keep [`UNREACHED`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nalgebra::Point3;

use crate::arena::MeshTopology;

/// Distance of a vertex with no edge path to any seed.
pub const UNREACHED: f32 = f32::MAX;

impl MeshTopology {
    /// Minimum edge-path distance from `seed` to every vertex.
    ///
    /// # Panics
    ///
    /// Panics if `verts` does not match the vertex table or `seed` is out of
    /// range.
    pub fn edge_distance_map(&self, verts: &[Point3<f32>], seed: u32) -> Vec<f32> {
        self.check_vert(seed);
        let mut dist = vec![UNREACHED; self.verts.len()];
        dist[seed as usize] = 0.0;
        self.edge_distance_map_from(verts, &mut dist);
        dist
    }

    /// Completes a partially seeded distance field in place.
    ///
    /// Every entry below [`UNREACHED`] is a seed at that starting distance;
    /// the rest are lowered to the shortest edge-path distance from any seed
    /// and remain [`UNREACHED`] if no seed can reach them.
    ///
    /// # Panics
    ///
    /// Panics if `verts` or `dist` do not have one entry per vertex.
    pub fn edge_distance_map_from(&self, verts: &[Point3<f32>], dist: &mut [f32]) {
        assert_eq!(
            verts.len(),
            self.verts.len(),
            "vertex positions must match the topology's vertex count"
        );
        assert_eq!(
            dist.len(),
            self.verts.len(),
            "distance buffer must have one entry per vertex"
        );

        let mut heap = BinaryHeap::new();
        for (v, &d) in dist.iter().enumerate() {
            if d < UNREACHED {
                heap.push(DijkstraState {
                    cost: d,
                    vert: v as u32,
                });
            }
        }
        let seeds = heap.len();

        while let Some(DijkstraState { cost, vert }) = heap.pop() {
            if cost > dist[vert as usize] {
                continue;
            }
            for &ei in &self.verts[vert as usize].edge_inds {
                let next = self.edges[ei as usize].other_vert_idx(vert);
                let next_cost = cost + self.edge_length(verts, ei);
                if next_cost < dist[next as usize] {
                    dist[next as usize] = next_cost;
                    heap.push(DijkstraState {
                        cost: next_cost,
                        vert: next,
                    });
                }
            }
        }

        tracing::debug!(
            seeds,
            unreached = dist.iter().filter(|&&d| d == UNREACHED).count(),
            "Computed edge distance map"
        );
    }
}

// =============================================================================
// Internal types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct DijkstraState {
    cost: f32,
    vert: u32,
}

impl Eq for DijkstraState {}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vert.cmp(&self.vert))
    }
}
