//! # mesh-mirror
//!
//! mesh-mirror discovers the bilateral (left/right) symmetry of a
//! polygonal mesh's surface topology from a single seam edge, and produces
//! correspondence tables mapping each face, edge, and vertex on one side
//! to its mirror counterpart. It is aimed at rigging and skinning
//! pipelines, where mirrored components must be paired without relying on
//! naming conventions or geometric distance queries.
//!
//! The discovery is purely topological: two breadth-first traversals start
//! at the two faces flanking the seam, the left one walking boundaries
//! with the winding and the right one against it (a reflection reverses
//! apparent winding), advancing in lockstep. Equal frontier sizes after
//! every paired step are the symmetry certificate; the first divergence
//! aborts the whole run with no partial result. Geometric (spatial)
//! symmetry is never checked, only that the two halves of the face
//! adjacency graph are isomorphic along the traversal.
//!
//! The algorithms run against anything implementing
//! [`MeshTopology`](topology::provider::MeshTopology); the bundled
//! [`InMemoryMesh`](topology::in_memory::InMemoryMesh) builds a mesh from
//! cyclic vertex loops.
//!
//! ## Example
//!
//! Two quads sharing one edge form the smallest symmetric mesh:
//!
//! ```rust
//! use mesh_mirror::prelude::*;
//!
//! # fn main() -> Result<(), MeshMirrorError> {
//! let mut mesh = InMemoryMesh::new();
//! let v: Vec<VertexId> = (1..=6).map(VertexId::new).collect::<Result<_, _>>()?;
//!
//! // v1 -- v2 -- v5
//! // | f1  |  f2 |
//! // v3 -- v4 -- v6
//! let f1 = mesh.add_face_loop(&[v[0], v[1], v[3], v[2]])?;
//! let f2 = mesh.add_face_loop(&[v[1], v[4], v[5], v[3]])?;
//! let seam = mesh.edge_between(v[1], v[3]).expect("seam edge exists");
//!
//! let sym = discover_symmetry(&mesh, seam, SymmetryOptions::default())?;
//! assert_eq!(sym.faces.get(f1), Some(f2));
//! assert_eq!(sym.edges.get(seam), Some(seam));
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Discovery order, and therefore every correspondence table, is a pure
//! function of the mesh snapshot and the seam seeds. `InMemoryMesh`
//! reports incident faces in ascending handle order so repeated runs
//! produce identical tables; custom providers should likewise keep their
//! incidence order stable.

pub mod algs;
pub mod mesh_error;
pub mod topology;

pub use mesh_error::MeshMirrorError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::adjacency::expand;
    pub use crate::algs::correspondence::{
        CorrespondenceOptions, CorrespondenceTable, DegreeMismatch, SymmetryCorrespondence,
        build_correspondence, vertex_loop,
    };
    pub use crate::algs::sequence::boundary_from;
    pub use crate::algs::symmetry::{SymmetryOptions, discover_symmetry};
    pub use crate::algs::walker::{VisitRecord, walk};
    pub use crate::mesh_error::MeshMirrorError;
    pub use crate::topology::cache::InvalidateCache;
    pub use crate::topology::id::{EdgeId, FaceId, VertexId};
    pub use crate::topology::in_memory::InMemoryMesh;
    pub use crate::topology::provider::MeshTopology;
    pub use crate::topology::validation::{
        NonManifoldHandling, validate_manifold, validate_seam,
    };
}
