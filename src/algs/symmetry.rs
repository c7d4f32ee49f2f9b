//! Seam-seeded symmetry discovery: the one-call entry point.

use crate::algs::correspondence::{
    CorrespondenceOptions, SymmetryCorrespondence, build_correspondence,
};
use crate::algs::walker::walk;
use crate::mesh_error::MeshMirrorError;
use crate::topology::id::EdgeId;
use crate::topology::provider::MeshTopology;
use crate::topology::validation::validate_seam;

/// Options for [`discover_symmetry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetryOptions {
    /// Passed through to the correspondence builder.
    pub correspondence: CorrespondenceOptions,
}

/// Discovers the bilateral symmetry seeded at `seam_edge` and returns the
/// face, edge, and vertex correspondence tables.
///
/// The seam edge must be shared by exactly two faces
/// ([`MeshMirrorError::SeamFaceCount`] otherwise); the first face the
/// provider reports becomes the "left" side, so which geometric side that
/// is depends on the provider's incidence order. Both traversals are
/// seeded with the seam edge itself as the entry edge.
///
/// [`MeshMirrorError::AsymmetricTopology`] is the expected outcome for a
/// mesh whose two sides are not topologically mirror images; it carries no
/// partial correspondence.
pub fn discover_symmetry<M>(
    mesh: &M,
    seam_edge: EdgeId,
    options: SymmetryOptions,
) -> Result<SymmetryCorrespondence, MeshMirrorError>
where
    M: MeshTopology + ?Sized,
{
    let (left_face, right_face) = validate_seam(mesh, seam_edge)?;
    let (left, right) = walk(mesh, left_face, right_face, seam_edge, seam_edge)?;
    build_correspondence(mesh, &left, &right, options.correspondence)
}
