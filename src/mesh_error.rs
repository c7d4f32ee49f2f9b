//! MeshMirrorError: unified error type for mesh-mirror public APIs.
//!
//! This error type is used throughout the mesh-mirror library to provide
//! robust, non-panicking error handling for all public APIs. Note that
//! [`MeshMirrorError::AsymmetricTopology`] is the expected "not symmetric"
//! outcome of a traversal, not a defect in the caller's input.

use crate::topology::id::{EdgeId, FaceId};
use thiserror::Error;

/// Unified error type for mesh-mirror operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshMirrorError {
    /// Attempted to construct an entity handle from a zero value (invalid).
    #[error("{0} must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidId(&'static str),
    /// A face loop needs at least three vertices to bound a polygon.
    #[error("face loop has {found} vertices, need at least 3")]
    FaceLoopTooShort { found: usize },
    /// The seam edge is not shared by exactly two faces.
    #[error("seam edge `{edge}` is connected to {found} faces, expected exactly 2")]
    SeamFaceCount { edge: EdgeId, found: usize },
    /// The two traversal frontiers diverged: the mesh is not topologically
    /// symmetric about the chosen seam.
    #[error(
        "asymmetric topology at step {step}: left frontier has {left_frontier} faces, right frontier has {right_frontier}"
    )]
    AsymmetricTopology {
        step: usize,
        left_frontier: usize,
        right_frontier: usize,
    },
    /// The two visitation records given to the correspondence builder have
    /// different lengths; only a successful walk produces valid input.
    #[error("visitation records have {left} and {right} entries, expected equal lengths")]
    VisitRecordLengthMismatch { left: usize, right: usize },
    /// Matched faces have different boundary degrees.
    #[error(
        "matched faces `{left}` and `{right}` have boundary degrees {left_degree} and {right_degree}"
    )]
    FaceDegreeMismatch {
        left: FaceId,
        right: FaceId,
        left_degree: usize,
        right_degree: usize,
    },
    /// An edge is shared by more than two faces.
    #[error("non-manifold edge `{edge}`: {incident_faces} incident faces")]
    NonManifoldEdge { edge: EdgeId, incident_faces: usize },
}
