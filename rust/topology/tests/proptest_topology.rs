// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property-based tests over random triangle soups.
//!
//! Soups are unconstrained: repeated vertices, duplicate triangles and
//! non-manifold fans all occur, and every invariant must still hold.

use std::collections::BTreeSet;

use nalgebra::Point3;
use proptest::prelude::*;
use surface_topology::{EdgeClass, Error, MeshTopology, UNREACHED};

// =============================================================================
// Strategies
// =============================================================================

fn arb_position() -> impl Strategy<Value = Point3<f32>> {
    prop::array::uniform3(-10.0..10.0f32).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Vertex positions plus a triangle list whose indices are all in range.
fn arb_soup(max_verts: usize, max_tris: usize) -> impl Strategy<Value = (Vec<Point3<f32>>, Vec<[u32; 3]>)> {
    (3..=max_verts).prop_flat_map(move |n| {
        let verts = prop::collection::vec(arb_position(), n);
        let tris = prop::collection::vec(prop::array::uniform3(0..n as u32), 0..=max_tris);
        (verts, tris)
    })
}

// =============================================================================
// Builder invariants
// =============================================================================

proptest! {
    #[test]
    fn every_triangle_edge_references_its_triangle((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        for (ti, tri) in topo.tris().iter().enumerate() {
            prop_assert_eq!(tri.vert_inds, tris[ti]);
            for k in 0..3 {
                let edge = topo.edge(tri.edge_inds[k]);
                let [a, b] = tri.edge(k);
                prop_assert_eq!(edge.vert_inds, [a.min(b), a.max(b)]);
                prop_assert!(edge.tri_inds.contains(&(ti as u32)));
            }
        }
    }

    #[test]
    fn valence_sum_is_three_per_triangle((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        let total: usize = topo.edges().iter().map(|e| e.tri_inds.len()).sum();
        prop_assert_eq!(total, 3 * tris.len());
    }

    #[test]
    fn edges_are_unique_by_vertex_pair((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        let pairs: BTreeSet<[u32; 2]> = topo.edges().iter().map(|e| e.vert_inds).collect();
        prop_assert_eq!(pairs.len(), topo.edge_count());
        for (ei, e) in topo.edges().iter().enumerate() {
            prop_assert!(e.vert_inds[0] <= e.vert_inds[1]);
            prop_assert_eq!(topo.edge_between(e.vert_inds[1], e.vert_inds[0]), Some(ei as u32));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected(
        (verts, mut tris) in arb_soup(8, 10),
        corner in 0usize..3,
    ) {
        tris.push([0, 1, 2]);
        let last = tris.len() - 1;
        tris[last][corner] = verts.len() as u32;
        let err = MeshTopology::new(&verts, &tris).unwrap_err();
        prop_assert!(
            matches!(err, Error::VertexOutOfRange { .. }),
            "unexpected error: {:?}",
            err
        );
    }

    // =========================================================================
    // Classification and tracing invariants
    // =========================================================================

    #[test]
    fn counts_agree_with_edge_classes((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        let counts = topo.is_manifold();
        let boundary = topo.edges().iter().filter(|e| e.class() == EdgeClass::Boundary).count();
        let non_manifold = topo.edges().iter().filter(|e| e.class() == EdgeClass::NonManifold).count();
        prop_assert_eq!(counts.boundary as usize, boundary);
        prop_assert_eq!(counts.non_manifold as usize, non_manifold);
        prop_assert!(counts.reversed as usize <= topo.edge_count() - boundary - non_manifold);
    }

    #[test]
    fn seams_partition_boundary_vertices((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        let boundary: BTreeSet<u32> = (0..verts.len() as u32)
            .filter(|&v| topo.vert_on_boundary(v))
            .collect();

        let mut union = BTreeSet::new();
        for seam in topo.seams() {
            prop_assert!(!seam.is_empty());
            for &v in &seam {
                prop_assert!(union.insert(v), "vertex {} in two seams", v);
            }
        }
        prop_assert_eq!(&union, &boundary);

        let walked: usize = topo.seam_loops().iter().map(Vec::len).sum();
        prop_assert_eq!(walked, boundary.len());

        for v in 0..verts.len() as u32 {
            if !boundary.contains(&v) {
                prop_assert!(topo.seam_containing(v).is_empty());
            }
        }
    }

    #[test]
    fn neighbour_relations_are_symmetric((verts, tris) in arb_soup(12, 30)) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        for v in 0..verts.len() as u32 {
            for n in topo.vert_neighbours(v) {
                prop_assert!(topo.vert_neighbours(n).contains(&v));
            }
            for n in topo.vert_boundary_neighbours(v) {
                prop_assert!(topo.vert_boundary_neighbours(n).contains(&v));
            }
        }
    }

    // =========================================================================
    // Distance field invariants
    // =========================================================================

    #[test]
    fn distances_are_consistent_along_edges(
        (verts, tris) in arb_soup(12, 30),
        seed in 0u32..3,
    ) {
        let topo = MeshTopology::new(&verts, &tris).unwrap();
        let dist = topo.edge_distance_map(&verts, seed);
        prop_assert_eq!(dist[seed as usize], 0.0);
        for e in topo.edges() {
            let [a, b] = e.vert_inds;
            let (da, db) = (dist[a as usize], dist[b as usize]);
            // Both endpoints are reached or neither is
            prop_assert_eq!(da == UNREACHED, db == UNREACHED);
            if da < UNREACHED {
                let len = (verts[b as usize] - verts[a as usize]).norm();
                prop_assert!((da - db).abs() <= len * (1.0 + 1e-4) + 1e-3);
            }
        }
        for (v, vert) in topo.verts().iter().enumerate() {
            if vert.edge_inds.is_empty() && v as u32 != seed {
                prop_assert_eq!(dist[v], UNREACHED);
            }
        }
    }
}
