// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh health summary for diagnostic tooling.
//!
//! Collects the classification counts into one serializable record so that
//! callers can log or ship a single JSON document per mesh.

use serde::Serialize;

use crate::arena::MeshTopology;
use crate::classify::ManifoldCounts;
use crate::error::{Error, Result};

/// Snapshot of a topology's health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshHealth {
    pub vert_count: usize,
    pub edge_count: usize,
    pub tri_count: usize,
    #[serde(flatten)]
    pub edges: ManifoldCounts,
    /// Edges whose two endpoints are the same vertex.
    pub degenerate_edges: usize,
    pub unused_verts: usize,
    pub boundary_verts: usize,
    /// Vertices touched by an odd number of boundary edges.
    pub odd_boundary_verts: usize,
    pub seam_count: usize,
    pub watertight: bool,
    pub manifold: bool,
}

impl MeshHealth {
    /// Gathers every count from `topo`.
    pub fn of(topo: &MeshTopology) -> Self {
        let edges = topo.is_manifold();
        Self {
            vert_count: topo.vert_count(),
            edge_count: topo.edge_count(),
            tri_count: topo.tri_count(),
            edges,
            degenerate_edges: topo.degenerate_edges(),
            unused_verts: topo.unused_verts(),
            boundary_verts: topo.boundary_vert_count(),
            odd_boundary_verts: topo.odd_boundary_verts().len(),
            seam_count: topo.seams().len(),
            watertight: edges.is_watertight(),
            manifold: edges.is_manifold(),
        }
    }

    /// Serializes the summary to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serializes the summary to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl MeshTopology {
    /// Health summary of this topology.
    pub fn health(&self) -> MeshHealth {
        let health = MeshHealth::of(self);
        tracing::debug!(
            boundary = health.edges.boundary,
            non_manifold = health.edges.non_manifold,
            reversed = health.edges.reversed,
            unused_verts = health.unused_verts,
            "Classified mesh health"
        );
        health
    }
}
