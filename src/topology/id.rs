//! Strong, zero-cost handles for mesh entities.
//!
//! Faces, edges, and vertices are referred to by opaque integer handles,
//! unique per kind within one mesh snapshot and stable for the duration of
//! a traversal. Each handle wraps a nonzero `u64`: 0 is reserved as an
//! invalid or sentinel value, so construction from a raw integer is
//! fallible.
//!
//! The three kinds are distinct types on purpose. Symmetry discovery juggles
//! faces, edges, and vertices in the same few lines of code, and a shared
//! id type would let a boundary edge silently stand in for a face.

use crate::mesh_error::MeshMirrorError;
use std::{fmt, num::NonZeroU64};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Creates a handle from a raw `u64` value; 0 is rejected.
            #[inline]
            pub fn new(raw: u64) -> Result<Self, MeshMirrorError> {
                NonZeroU64::new(raw)
                    .map($name)
                    .ok_or(MeshMirrorError::InvalidId($label))
            }

            /// Returns the inner `u64` value of this handle.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple($label).field(&self.get()).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get())
            }
        }
    };
}

entity_id! {
    /// Handle of a polygonal face.
    FaceId, "FaceId"
}

entity_id! {
    /// Handle of an edge shared by up to two faces on a manifold mesh.
    EdgeId, "EdgeId"
}

entity_id! {
    /// Handle of a vertex.
    VertexId, "VertexId"
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertions that handles stay the same size as `u64`.
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(FaceId, u64);
    assert_eq_size!(EdgeId, u64);
    assert_eq_size!(VertexId, u64);
}
