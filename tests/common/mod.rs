//! Shared mesh fixtures for the integration tests.
#![allow(dead_code)]

use mesh_mirror::prelude::*;

pub fn v(raw: u64) -> VertexId {
    VertexId::new(raw).unwrap()
}

/// Two triangle fans sharing the apex/rim seam edge, mirrored about it.
///
/// All faces share the apex `p`; the seam runs from `p` to `q`. Left rim
/// vertices are `c1..cn`, right rim vertices `d1..dm`; faces are wound
/// consistently, so the seam is traversed in opposite directions by the
/// two seed faces.
pub struct FanPair {
    pub mesh: InMemoryMesh,
    pub left: Vec<FaceId>,
    pub right: Vec<FaceId>,
    pub apex: VertexId,
    pub rim: VertexId,
    pub left_rim: Vec<VertexId>,
    pub right_rim: Vec<VertexId>,
}

impl FanPair {
    pub fn seam(&self) -> EdgeId {
        self.mesh.edge_between(self.apex, self.rim).unwrap()
    }
}

pub fn mirrored_fans(left_count: u64, right_count: u64) -> FanPair {
    let mut mesh = InMemoryMesh::new();
    let apex = v(1);
    let rim = v(2);
    let left_rim: Vec<VertexId> = (0..left_count).map(|i| v(10 + i)).collect();
    let right_rim: Vec<VertexId> = (0..right_count).map(|i| v(20 + i)).collect();

    let mut left = Vec::new();
    for (i, &c) in left_rim.iter().enumerate() {
        let prev = if i == 0 { rim } else { left_rim[i - 1] };
        left.push(mesh.add_face_loop(&[apex, prev, c]).unwrap());
    }
    let mut right = Vec::new();
    for (j, &d) in right_rim.iter().enumerate() {
        let prev = if j == 0 { rim } else { right_rim[j - 1] };
        right.push(mesh.add_face_loop(&[apex, d, prev]).unwrap());
    }

    FanPair {
        mesh,
        left,
        right,
        apex,
        rim,
        left_rim,
        right_rim,
    }
}

/// Two quads mirrored about the shared edge v2–v4.
///
///   v1 -- v2 -- v5
///   |  f1 |  f2 |
///   v3 -- v4 -- v6
pub fn two_quads() -> (InMemoryMesh, FaceId, FaceId, EdgeId) {
    let mut mesh = InMemoryMesh::new();
    let f1 = mesh.add_face_loop(&[v(1), v(2), v(4), v(3)]).unwrap();
    let f2 = mesh.add_face_loop(&[v(2), v(5), v(6), v(4)]).unwrap();
    let seam = mesh.edge_between(v(2), v(4)).unwrap();
    (mesh, f1, f2, seam)
}

/// Three quads in a row; the seam sits between the last two, leaving one
/// side with a spare face.
///
///   1 -- 2 -- 3 -- 4
///   |  a |  b |  c |
///   5 -- 6 -- 7 -- 8
pub fn quad_row3() -> (InMemoryMesh, [FaceId; 3], EdgeId) {
    let mut mesh = InMemoryMesh::new();
    let a = mesh.add_face_loop(&[v(1), v(2), v(6), v(5)]).unwrap();
    let b = mesh.add_face_loop(&[v(2), v(3), v(7), v(6)]).unwrap();
    let c = mesh.add_face_loop(&[v(3), v(4), v(8), v(7)]).unwrap();
    let seam = mesh.edge_between(v(3), v(7)).unwrap();
    (mesh, [a, b, c], seam)
}

/// Four quads closed into a ring (top and bottom stay open); mirror plane
/// through the seam edge and the diametrically opposite edge.
pub fn quad_ring() -> (InMemoryMesh, [FaceId; 4], EdgeId) {
    let mut mesh = InMemoryMesh::new();
    // top vertices 1..4, bottom vertices 5..8
    let q1 = mesh.add_face_loop(&[v(1), v(2), v(6), v(5)]).unwrap();
    let q2 = mesh.add_face_loop(&[v(2), v(3), v(7), v(6)]).unwrap();
    let q3 = mesh.add_face_loop(&[v(3), v(4), v(8), v(7)]).unwrap();
    let q4 = mesh.add_face_loop(&[v(4), v(1), v(5), v(8)]).unwrap();
    let seam = mesh.edge_between(v(2), v(6)).unwrap();
    (mesh, [q1, q2, q3, q4], seam)
}

/// A closed tetrahedron; no seam on it admits a bilateral partition under
/// the claim-first traversal.
pub fn tetrahedron() -> (InMemoryMesh, [FaceId; 4], EdgeId) {
    let mut mesh = InMemoryMesh::new();
    let f1 = mesh.add_face_loop(&[v(1), v(2), v(3)]).unwrap();
    let f2 = mesh.add_face_loop(&[v(1), v(3), v(4)]).unwrap();
    let f3 = mesh.add_face_loop(&[v(1), v(4), v(2)]).unwrap();
    let f4 = mesh.add_face_loop(&[v(2), v(4), v(3)]).unwrap();
    let seam = mesh.edge_between(v(1), v(2)).unwrap();
    (mesh, [f1, f2, f3, f4], seam)
}
