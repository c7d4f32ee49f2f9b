//! Oriented boundary sequencing: a face's edge loop re-anchored at an
//! entry edge.

use crate::topology::id::{EdgeId, FaceId};
use crate::topology::provider::MeshTopology;

/// Boundary edges of `face` starting at `start_edge`, optionally traversed
/// in the opposite rotational sense.
///
/// The provider's cyclic boundary is rotated so `start_edge` comes first.
/// With `reverse`, the first element stays fixed and the tail order flips:
/// this walks the boundary against its winding while staying anchored at
/// the shared entry edge, which is how a reflected face is traversed (a
/// reflection reverses a polygon's apparent winding).
///
/// Returns an empty vector when `start_edge` is not on the boundary of
/// `face`. Callers treat that as an inconsistent face/edge pairing, not an
/// error; during a walk it starves the affected branch and surfaces as
/// asymmetry.
pub fn boundary_from<M>(mesh: &M, face: FaceId, start_edge: EdgeId, reverse: bool) -> Vec<EdgeId>
where
    M: MeshTopology + ?Sized,
{
    let boundary = mesh.boundary_edges(face);
    let Some(at) = boundary.iter().position(|&e| e == start_edge) else {
        return Vec::new();
    };
    let mut edges = Vec::with_capacity(boundary.len());
    edges.extend_from_slice(&boundary[at..]);
    edges.extend_from_slice(&boundary[..at]);
    if reverse {
        edges[1..].reverse();
    }
    edges
}
