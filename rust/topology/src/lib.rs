// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Surface Topology
//!
//! Adjacency, manifold classification and graph queries for triangulated
//! surfaces.
//!
//! A [`MeshTopology`] is built once from a triangle soup (vertex positions
//! plus a triangle index list) and is read-only afterwards. It stores three
//! index-addressed tables (triangles, edges, vertices) with links in both
//! directions, and answers:
//!
//! - health queries: boundary, non-manifold and inconsistently wound edges,
//!   boundary and unused vertices ([`MeshTopology::is_manifold`]);
//! - boundary tracing: 1-rings, seam components and ordered seam walks;
//! - fold detection: components of edges whose faces meet at a sharp
//!   dihedral angle ([`MeshTopology::trace_fold`]);
//! - distance fields: shortest edge-path distances from one or more seeds
//!   ([`MeshTopology::edge_distance_map`]).
//!
//! Vertex positions and face normals stay owned by the caller and are
//! borrowed only by the queries that need them.

pub mod arena;
pub mod builders;
pub mod classify;
pub mod config;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod report;
pub mod traversal;

pub use arena::{Edge, MeshTopology, Tri, Vert};
pub use classify::ManifoldCounts;
pub use config::TopologyConfig;
pub use distance::UNREACHED;
pub use error::{Error, Result};
pub use keys::EdgeClass;
pub use report::MeshHealth;
