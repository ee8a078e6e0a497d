// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge classification by triangle valence.
//!
//! The number of triangles referencing an edge is the signal every health
//! query is built on: one triangle marks a hole in the surface, two is the
//! ordinary interior case, and more than two means sheets of the surface meet
//! along that edge.

use serde::Serialize;

/// Discriminant for the three kinds of edge a triangle soup can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EdgeClass {
    /// Referenced by exactly one triangle.
    Boundary = 1,
    /// Referenced by exactly two triangles.
    Manifold = 2,
    /// Referenced by three or more triangles.
    NonManifold = 3,
}

impl EdgeClass {
    /// Classifies an edge from the number of triangles referencing it.
    ///
    /// # Panics
    ///
    /// Panics on a valence of zero. The builder only creates an edge when a
    /// triangle references it, so no built edge has zero triangles.
    pub fn from_valence(valence: usize) -> Self {
        match valence {
            0 => unreachable!("edge without triangles has no class"),
            1 => EdgeClass::Boundary,
            2 => EdgeClass::Manifold,
            _ => EdgeClass::NonManifold,
        }
    }

    /// Returns the class name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeClass::Boundary => "Boundary",
            EdgeClass::Manifold => "Manifold",
            EdgeClass::NonManifold => "NonManifold",
        }
    }
}

impl std::fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_class_names() {
        assert_eq!(EdgeClass::Boundary.as_str(), "Boundary");
        assert_eq!(EdgeClass::Manifold.as_str(), "Manifold");
        assert_eq!(EdgeClass::NonManifold.as_str(), "NonManifold");
        assert_eq!(EdgeClass::NonManifold.to_string(), "NonManifold");
    }

    #[test]
    fn edge_class_from_valence() {
        assert_eq!(EdgeClass::from_valence(1), EdgeClass::Boundary);
        assert_eq!(EdgeClass::from_valence(2), EdgeClass::Manifold);
        assert_eq!(EdgeClass::from_valence(3), EdgeClass::NonManifold);
        assert_eq!(EdgeClass::from_valence(7), EdgeClass::NonManifold);
    }

    #[test]
    #[should_panic(expected = "without triangles")]
    fn zero_valence_is_rejected() {
        EdgeClass::from_valence(0);
    }

    #[test]
    fn edge_class_ordering() {
        assert!(EdgeClass::Boundary < EdgeClass::Manifold);
        assert!(EdgeClass::Manifold < EdgeClass::NonManifold);
    }
}
