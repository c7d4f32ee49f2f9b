//! Adjacency expansion: a face's neighbors in oriented boundary order.

use crate::algs::sequence::boundary_from;
use crate::topology::id::{EdgeId, FaceId};
use crate::topology::provider::MeshTopology;

/// Neighboring faces of `face` paired with the shared edge, emitted in the
/// oriented boundary order of [`boundary_from`].
///
/// Each boundary edge contributes one entry per incident face other than
/// `face` itself: a border edge contributes nothing, a non-manifold edge
/// contributes several (in the provider's incidence order). The result is a
/// pure function of `(face, start_edge, reverse)` over one mesh snapshot;
/// the correspondence builder replays it, so emission order is part of the
/// contract.
pub fn expand<M>(
    mesh: &M,
    face: FaceId,
    start_edge: EdgeId,
    reverse: bool,
) -> Vec<(FaceId, EdgeId)>
where
    M: MeshTopology + ?Sized,
{
    let mut adjacent = Vec::new();
    for edge in boundary_from(mesh, face, start_edge, reverse) {
        for &other in mesh.incident_faces(edge) {
            if other != face {
                adjacent.push((other, edge));
            }
        }
    }
    adjacent
}
