// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology construction and diagnostics.

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reporting on a topology.
///
/// Query preconditions (vertex indices outside the table, normals built from
/// a different triangulation) are programmer errors and panic instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A triangle references a vertex that does not exist.
    #[error("triangle {tri} corner {corner} references vertex {index}, but only {vert_count} vertices exist")]
    VertexOutOfRange {
        tri: usize,
        corner: usize,
        index: u32,
        vert_count: usize,
    },

    /// The vertex table is larger than a `u32` index can address.
    #[error("vertex count {0} exceeds the u32 index range")]
    TooManyVertices(usize),

    /// The triangle list is too long for its edges to be addressed by `u32`.
    #[error("triangle count {0} exceeds the u32 edge index range")]
    TooManyTriangles(usize),

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
