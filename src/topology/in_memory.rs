//! In-memory implementation of the [`MeshTopology`] trait.
//!
//! [`InMemoryMesh`] stores faces as cyclic edge loops and edges as endpoint
//! pairs. Faces are authored as vertex loops; edges are interned per
//! unordered endpoint pair, so two adjacent faces naturally share one edge
//! handle. The edge-to-face support index is derived lazily and invalidated
//! whenever the mesh mutates.

use itertools::Itertools;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

use crate::mesh_error::MeshMirrorError;
use crate::topology::cache::InvalidateCache;
use crate::topology::id::{EdgeId, FaceId, VertexId};
use crate::topology::provider::MeshTopology;

/// An in-memory polygonal mesh built from cyclic vertex loops.
///
/// Winding is taken from the authored loops: callers must wind all faces
/// consistently (a shared edge appears in opposite vertex order in its two
/// faces), the same contract host meshes satisfy.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMesh {
    /// Boundary edge loop per face, in authored winding order.
    faces: HashMap<FaceId, Vec<EdgeId>>,
    /// Endpoints per edge, in first-authored order.
    endpoints: HashMap<EdgeId, (VertexId, VertexId)>,
    /// Interning table: unordered endpoint pair → edge handle.
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
    next_face: u64,
    next_edge: u64,
    /// Cached edge → incident faces index.
    support: OnceCell<HashMap<EdgeId, Vec<FaceId>>>,
}

impl InMemoryMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a face from its cyclic vertex loop and returns its handle.
    ///
    /// Consecutive loop vertices (including last-to-first) are interned as
    /// edges; an edge already seen on a neighboring face is reused, which is
    /// what stitches faces together. Loops shorter than three vertices are
    /// rejected.
    ///
    /// # Example
    /// ```rust
    /// use mesh_mirror::topology::id::VertexId;
    /// use mesh_mirror::topology::in_memory::InMemoryMesh;
    /// use mesh_mirror::topology::provider::MeshTopology;
    ///
    /// let mut mesh = InMemoryMesh::new();
    /// let a = VertexId::new(1).unwrap();
    /// let b = VertexId::new(2).unwrap();
    /// let c = VertexId::new(3).unwrap();
    /// let face = mesh.add_face_loop(&[a, b, c]).unwrap();
    /// assert_eq!(mesh.boundary_edges(face).len(), 3);
    /// ```
    pub fn add_face_loop(&mut self, vertices: &[VertexId]) -> Result<FaceId, MeshMirrorError> {
        if vertices.len() < 3 {
            return Err(MeshMirrorError::FaceLoopTooShort {
                found: vertices.len(),
            });
        }
        let mut boundary = Vec::with_capacity(vertices.len());
        for (a, b) in vertices.iter().copied().circular_tuple_windows::<(_, _)>() {
            boundary.push(self.intern_edge(a, b)?);
        }
        self.next_face += 1;
        let face = FaceId::new(self.next_face)?;
        self.faces.insert(face, boundary);
        self.invalidate_cache();
        Ok(face)
    }

    fn intern_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, MeshMirrorError> {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&edge) = self.edge_lookup.get(&key) {
            return Ok(edge);
        }
        self.next_edge += 1;
        let edge = EdgeId::new(self.next_edge)?;
        self.edge_lookup.insert(key, edge);
        self.endpoints.insert(edge, (a, b));
        Ok(edge)
    }

    /// The interned edge between `a` and `b`, if any.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.edge_lookup.get(&key).copied()
    }

    /// All face handles, ascending.
    pub fn faces(&self) -> Vec<FaceId> {
        let mut out: Vec<FaceId> = self.faces.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// All edge handles, ascending.
    pub fn edges(&self) -> Vec<EdgeId> {
        let mut out: Vec<EdgeId> = self.endpoints.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Edge → incident faces, built on first use. Faces are scanned in
    /// ascending handle order so incidence lists are deterministic.
    fn support_index(&self) -> &HashMap<EdgeId, Vec<FaceId>> {
        self.support.get_or_init(|| {
            let mut index: HashMap<EdgeId, Vec<FaceId>> = HashMap::new();
            let mut face_ids: Vec<FaceId> = self.faces.keys().copied().collect();
            face_ids.sort_unstable();
            for face in face_ids {
                if let Some(boundary) = self.faces.get(&face) {
                    for &edge in boundary {
                        index.entry(edge).or_default().push(face);
                    }
                }
            }
            index
        })
    }
}

impl InvalidateCache for InMemoryMesh {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.support.take();
    }
}

impl MeshTopology for InMemoryMesh {
    fn boundary_edges(&self, face: FaceId) -> &[EdgeId] {
        self.faces.get(&face).map_or(&[], |edges| edges.as_slice())
    }

    fn incident_faces(&self, edge: EdgeId) -> &[FaceId] {
        self.support_index()
            .get(&edge)
            .map_or(&[], |faces| faces.as_slice())
    }

    fn endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.endpoints.get(&edge).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: u64) -> VertexId {
        VertexId::new(raw).unwrap()
    }

    #[test]
    fn shared_edge_is_interned_once() {
        let mut mesh = InMemoryMesh::new();
        let f0 = mesh.add_face_loop(&[v(1), v(2), v(3)]).unwrap();
        let f1 = mesh.add_face_loop(&[v(2), v(1), v(4)]).unwrap();
        let shared = mesh.edge_between(v(1), v(2)).unwrap();
        assert!(mesh.boundary_edges(f0).contains(&shared));
        assert!(mesh.boundary_edges(f1).contains(&shared));
        // 3 + 3 edges authored, one shared
        assert_eq!(mesh.edges().len(), 5);
        assert_eq!(mesh.incident_faces(shared), &[f0, f1]);
    }

    #[test]
    fn boundary_keeps_loop_order() {
        let mut mesh = InMemoryMesh::new();
        let f = mesh.add_face_loop(&[v(1), v(2), v(3), v(4)]).unwrap();
        let boundary = mesh.boundary_edges(f);
        let expected = [
            mesh.edge_between(v(1), v(2)).unwrap(),
            mesh.edge_between(v(2), v(3)).unwrap(),
            mesh.edge_between(v(3), v(4)).unwrap(),
            mesh.edge_between(v(4), v(1)).unwrap(),
        ];
        assert_eq!(boundary, expected);
    }

    #[test]
    fn endpoints_keep_authored_direction() {
        let mut mesh = InMemoryMesh::new();
        mesh.add_face_loop(&[v(3), v(1), v(2)]).unwrap();
        let e = mesh.edge_between(v(3), v(1)).unwrap();
        assert_eq!(mesh.endpoints(e), Some((v(3), v(1))));
    }

    #[test]
    fn support_index_sees_later_faces() {
        let mut mesh = InMemoryMesh::new();
        let f0 = mesh.add_face_loop(&[v(1), v(2), v(3)]).unwrap();
        let shared = mesh.edge_between(v(1), v(2)).unwrap();
        assert_eq!(mesh.incident_faces(shared), &[f0]);
        // mutation invalidates the cached index
        let f1 = mesh.add_face_loop(&[v(2), v(1), v(4)]).unwrap();
        assert_eq!(mesh.incident_faces(shared), &[f0, f1]);
    }

    #[test]
    fn short_loop_is_rejected() {
        let mut mesh = InMemoryMesh::new();
        assert_eq!(
            mesh.add_face_loop(&[v(1), v(2)]),
            Err(MeshMirrorError::FaceLoopTooShort { found: 2 })
        );
    }

    #[test]
    fn unknown_handles_degrade_to_empty() {
        let mesh = InMemoryMesh::new();
        assert!(mesh.boundary_edges(FaceId::new(9).unwrap()).is_empty());
        assert!(mesh.incident_faces(EdgeId::new(9).unwrap()).is_empty());
        assert_eq!(mesh.endpoints(EdgeId::new(9).unwrap()), None);
    }
}
