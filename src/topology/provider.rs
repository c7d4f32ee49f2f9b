//! Read-only topology queries consumed by the symmetry algorithms.
//!
//! Everything in [`crate::algs`] is derived from the three queries on this
//! trait, so the algorithms run against any mesh representation that can
//! answer them: the bundled [`InMemoryMesh`](crate::topology::in_memory::InMemoryMesh)
//! or an adapter over a host application's mesh.

use crate::topology::id::{EdgeId, FaceId, VertexId};

/// Boundary and incidence queries over one immutable mesh snapshot.
///
/// Implementations must report each face's boundary in cyclic winding
/// order, and the winding must be consistent across the mesh: two faces
/// sharing an edge traverse it in opposite directions. Symmetry discovery
/// is built entirely on that consistency; it never inspects vertex
/// positions.
pub trait MeshTopology {
    /// Boundary edges of `face` in cyclic winding order.
    ///
    /// Unknown faces yield an empty slice.
    fn boundary_edges(&self, face: FaceId) -> &[EdgeId];

    /// Faces incident to `edge`: two on a manifold interior edge, one on a
    /// mesh border, more on a non-manifold fan. Unknown edges yield an
    /// empty slice.
    ///
    /// The slice order must be stable across calls for one snapshot; it
    /// decides which adjacency entry is emitted first during expansion.
    fn incident_faces(&self, edge: EdgeId) -> &[FaceId];

    /// Endpoint vertices of `edge`, or `None` for unknown edges.
    fn endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)>;
}

impl<M: MeshTopology + ?Sized> MeshTopology for &M {
    #[inline]
    fn boundary_edges(&self, face: FaceId) -> &[EdgeId] {
        (**self).boundary_edges(face)
    }
    #[inline]
    fn incident_faces(&self, edge: EdgeId) -> &[FaceId] {
        (**self).incident_faces(edge)
    }
    #[inline]
    fn endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        (**self).endpoints(edge)
    }
}
