//! Seam and manifold validation helpers.

use crate::mesh_error::MeshMirrorError;
use crate::topology::id::{EdgeId, FaceId};
use crate::topology::provider::MeshTopology;

/// Behavior for non-manifold edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold edges.
    Warn,
    /// Return an error on non-manifold edges.
    Error,
}

/// Checks that `seam_edge` is shared by exactly two faces and returns them
/// in the provider's incidence order.
///
/// This is the precondition a selection front-end must establish before
/// seeding a walk; it is exposed here so adapters over host meshes can
/// reuse it instead of re-implementing the count check.
pub fn validate_seam<M>(mesh: &M, seam_edge: EdgeId) -> Result<(FaceId, FaceId), MeshMirrorError>
where
    M: MeshTopology + ?Sized,
{
    let faces = mesh.incident_faces(seam_edge);
    match *faces {
        [left, right] => Ok((left, right)),
        _ => Err(MeshMirrorError::SeamFaceCount {
            edge: seam_edge,
            found: faces.len(),
        }),
    }
}

/// Audits `edges` for more than two incident faces.
///
/// The traversal itself tolerates non-manifold edges (each extra face is
/// just another adjacency entry), so this check is opt-in for callers that
/// want to reject such meshes up front.
pub fn validate_manifold<M, I>(
    mesh: &M,
    edges: I,
    handling: NonManifoldHandling,
) -> Result<(), MeshMirrorError>
where
    M: MeshTopology + ?Sized,
    I: IntoIterator<Item = EdgeId>,
{
    if handling == NonManifoldHandling::Ignore {
        return Ok(());
    }
    for edge in edges {
        let count = mesh.incident_faces(edge).len();
        if count > 2 {
            match handling {
                NonManifoldHandling::Warn => {
                    log::warn!("non-manifold edge {edge}: {count} incident faces");
                }
                NonManifoldHandling::Error => {
                    return Err(MeshMirrorError::NonManifoldEdge {
                        edge,
                        incident_faces: count,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
        }
    }
    Ok(())
}
