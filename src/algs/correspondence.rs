//! Positional correspondence construction from a pair of visitation
//! records.
//!
//! The walker's success guarantees that the i-th discovered face on the
//! left is the mirror partner of the i-th discovered face on the right.
//! The builder replays the oriented boundary sequencing over each matched
//! face pair to extend that positional alignment from faces down to edges
//! and vertices.

use std::collections::HashMap;
use std::hash::Hash;

use crate::algs::sequence::boundary_from;
use crate::algs::walker::VisitRecord;
use crate::mesh_error::MeshMirrorError;
use crate::topology::id::{EdgeId, FaceId, VertexId};
use crate::topology::provider::MeshTopology;

/// Ordered left→right mapping between like-kind entity handles.
///
/// Backed by an insertion-ordered pair list plus a hash index.
/// Re-inserting an existing key overwrites its value in place, keeping the
/// original position; matched face pairs that share an edge or vertex thus
/// collapse to one entry each.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<(K, K)>", into = "Vec<(K, K)>")]
pub struct CorrespondenceTable<K: Copy + Eq + Hash> {
    pairs: Vec<(K, K)>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> Default for CorrespondenceTable<K> {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> CorrespondenceTable<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `left` to `right`, overwriting the value of an existing key in
    /// place.
    pub fn insert(&mut self, left: K, right: K) {
        if let Some(&at) = self.index.get(&left) {
            self.pairs[at].1 = right;
        } else {
            self.index.insert(left, self.pairs.len());
            self.pairs.push((left, right));
        }
    }

    /// The right-side partner of `left`, if mapped.
    pub fn get(&self, left: K) -> Option<K> {
        self.index.get(&left).map(|&at| self.pairs[at].1)
    }

    /// Whether `left` is mapped.
    #[inline]
    pub fn contains(&self, left: K) -> bool {
        self.index.contains_key(&left)
    }

    /// Number of mapped keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(left, right)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, K)> + '_ {
        self.pairs.iter().copied()
    }

    /// The right→left table. Inverting a bijection twice round-trips;
    /// duplicate right-side values keep the last pair's key.
    pub fn inverse(&self) -> Self {
        let mut out = Self::new();
        for (left, right) in self.iter() {
            out.insert(right, left);
        }
        out
    }
}

/// Equality compares mapping contents; insertion order is not significant.
impl<K: Copy + Eq + Hash> PartialEq for CorrespondenceTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self.pairs.iter().all(|&(left, right)| other.get(left) == Some(right))
    }
}

impl<K: Copy + Eq + Hash> Eq for CorrespondenceTable<K> {}

impl<K: Copy + Eq + Hash> From<Vec<(K, K)>> for CorrespondenceTable<K> {
    fn from(pairs: Vec<(K, K)>) -> Self {
        let mut out = Self::new();
        for (left, right) in pairs {
            out.insert(left, right);
        }
        out
    }
}

impl<K: Copy + Eq + Hash> From<CorrespondenceTable<K>> for Vec<(K, K)> {
    fn from(table: CorrespondenceTable<K>) -> Self {
        table.pairs
    }
}

impl<K: Copy + Eq + Hash> FromIterator<(K, K)> for CorrespondenceTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (left, right) in iter {
            out.insert(left, right);
        }
        out
    }
}

/// The three independent correspondence tables produced for one seam.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SymmetryCorrespondence {
    /// i-th discovered left face ↔ i-th discovered right face.
    pub faces: CorrespondenceTable<FaceId>,
    /// Positional alignment of matched faces' oriented boundaries.
    pub edges: CorrespondenceTable<EdgeId>,
    /// Positional alignment of matched faces' ordered vertex loops.
    pub vertices: CorrespondenceTable<VertexId>,
}

/// Behavior when matched faces have different boundary degrees.
///
/// The frontier-length check only counts faces, so a walk can succeed while
/// pairing, say, a triangle with a quad; the positional zip then runs out
/// of partners on the longer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreeMismatch {
    /// Truncate to the shorter sequence, silently.
    Truncate,
    /// Truncate and log a warning.
    #[default]
    Warn,
    /// Fail with [`MeshMirrorError::FaceDegreeMismatch`].
    Error,
}

/// Options for [`build_correspondence`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrespondenceOptions {
    /// How to handle matched faces of unequal boundary degree.
    pub degree_mismatch: DegreeMismatch,
}

/// Builds the face, edge, and vertex correspondence tables from a pair of
/// visitation records.
///
/// The records must come from one successful [`walk`](crate::algs::walker::walk)
/// over the same mesh snapshot; equal record lengths are checked
/// explicitly. Per matched face pair, the boundary is replayed forward on
/// the left and reversed on the right (the same senses the walk used), and
/// the two edge sequences, then the two derived vertex loops, are aligned
/// positionally.
pub fn build_correspondence<M>(
    mesh: &M,
    left: &VisitRecord,
    right: &VisitRecord,
    options: CorrespondenceOptions,
) -> Result<SymmetryCorrespondence, MeshMirrorError>
where
    M: MeshTopology + ?Sized,
{
    if left.len() != right.len() {
        return Err(MeshMirrorError::VisitRecordLengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut out = SymmetryCorrespondence::default();
    for ((left_face, left_entry), (right_face, right_entry)) in left.iter().zip(right.iter()) {
        out.faces.insert(left_face, right_face);

        let left_edges = boundary_from(mesh, left_face, left_entry, false);
        let right_edges = boundary_from(mesh, right_face, right_entry, true);
        if left_edges.len() != right_edges.len() {
            match options.degree_mismatch {
                DegreeMismatch::Truncate => {}
                DegreeMismatch::Warn => log::warn!(
                    "matched faces {left_face} and {right_face} have boundary degrees {} and {}; truncating",
                    left_edges.len(),
                    right_edges.len()
                ),
                DegreeMismatch::Error => {
                    return Err(MeshMirrorError::FaceDegreeMismatch {
                        left: left_face,
                        right: right_face,
                        left_degree: left_edges.len(),
                        right_degree: right_edges.len(),
                    });
                }
            }
        }
        for (&l, &r) in left_edges.iter().zip(right_edges.iter()) {
            out.edges.insert(l, r);
        }

        let left_vertices = vertex_loop(mesh, &left_edges);
        let right_vertices = vertex_loop(mesh, &right_edges);
        for (&l, &r) in left_vertices.iter().zip(right_vertices.iter()) {
            out.vertices.insert(l, r);
        }
    }
    Ok(out)
}

/// Ordered, deduplicated vertex loop induced by an oriented edge sequence.
///
/// The first emitted vertex is the endpoint of the first edge that the
/// second edge does not share, so the loop starts "behind" the entry edge
/// and then runs with the sequence; each later edge contributes its novel
/// endpoint. Sequences shorter than two edges fall back to the first
/// edge's endpoints as stored.
pub fn vertex_loop<M>(mesh: &M, edges: &[EdgeId]) -> Vec<VertexId>
where
    M: MeshTopology + ?Sized,
{
    let mut ordered: Vec<VertexId> = Vec::with_capacity(edges.len());
    let Some((&first, rest)) = edges.split_first() else {
        return ordered;
    };
    let Some((a, b)) = mesh.endpoints(first) else {
        return ordered;
    };
    match rest.first().and_then(|&second| mesh.endpoints(second)) {
        Some((c, d)) if a != c && a != d => ordered.extend([a, b]),
        Some(_) => ordered.extend([b, a]),
        None => ordered.extend([a, b]),
    }
    for &edge in rest {
        if let Some((x, y)) = mesh.endpoints(edge) {
            for vertex in [x, y] {
                if !ordered.contains(&vertex) {
                    ordered.push(vertex);
                }
            }
        }
    }
    ordered
}
