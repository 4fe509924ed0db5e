// tests/test_mesh.rs
use polyedit::geometry::point::{Point, Point3};
use polyedit::mesh::basic_types::{Mesh, MeshError};

type TestMesh = Mesh<f64>;
type TestPoint = Point3<f64>;

fn p(x: f64, y: f64, z: f64) -> TestPoint {
    Point::new([x, y, z])
}

fn square_mesh() -> (TestMesh, usize) {
    let mut mesh = TestMesh::new();
    let v0 = mesh.add_vertex(p(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(p(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(p(1.0, 1.0, 0.0));
    let v3 = mesh.add_vertex(p(0.0, 1.0, 0.0));
    let f = mesh.add_face(&[v0, v1, v2, v3]).unwrap();
    (mesh, f)
}

fn two_quads() -> (TestMesh, usize, usize) {
    // quads sharing the edge 1-2
    let mut mesh = TestMesh::new();
    let v0 = mesh.add_vertex(p(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(p(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(p(1.0, 1.0, 0.0));
    let v3 = mesh.add_vertex(p(0.0, 1.0, 0.0));
    let v4 = mesh.add_vertex(p(2.0, 0.0, 0.0));
    let v5 = mesh.add_vertex(p(2.0, 1.0, 0.0));
    let fa = mesh.add_face(&[v0, v1, v2, v3]).unwrap();
    let fb = mesh.add_face(&[v1, v4, v5, v2]).unwrap();
    (mesh, fa, fb)
}

#[test]
fn face_loop_cycle_is_closed() {
    let (mesh, f) = square_mesh();
    let loops = mesh.face_loops(f);
    assert_eq!(loops.len(), 4);

    let mut l = mesh.faces[f].l_first;
    for _ in 0..4 {
        l = mesh.loops[l].next;
    }
    assert_eq!(l, mesh.faces[f].l_first);

    // prev chains the other way
    let mut l = mesh.faces[f].l_first;
    for _ in 0..4 {
        l = mesh.loops[l].prev;
    }
    assert_eq!(l, mesh.faces[f].l_first);
}

#[test]
fn shared_edge_is_manifold() {
    let (mesh, _, _) = two_quads();
    let shared = mesh.edge_exists(1, 2).unwrap();
    assert!(mesh.edge_is_manifold(shared));
    assert_eq!(mesh.radial_count(shared), 2);

    let boundary = mesh.edge_exists(0, 1).unwrap();
    assert!(!mesh.edge_is_manifold(boundary));
    assert_eq!(mesh.radial_count(boundary), 1);
}

#[test]
fn radial_cycle_links_both_faces() {
    let (mesh, fa, fb) = two_quads();
    let shared = mesh.edge_exists(1, 2).unwrap();
    let radial = mesh.edge_loops(shared);
    assert_eq!(radial.len(), 2);
    let faces: Vec<usize> = radial.iter().map(|&l| mesh.loops[l].f).collect();
    assert!(faces.contains(&fa));
    assert!(faces.contains(&fb));
}

#[test]
fn add_face_rejects_degenerate() {
    let mut mesh = TestMesh::new();
    let v0 = mesh.add_vertex(p(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(p(1.0, 0.0, 0.0));
    assert_eq!(mesh.add_face(&[v0, v1]), Err(MeshError::FaceTooSmall(2)));
}

#[test]
fn face_split_divides_a_quad() {
    let (mut mesh, f) = square_mesh();
    let (nf, ne) = mesh.face_split(f, 0, 2).unwrap();

    assert_eq!(mesh.faces[f].len, 3);
    assert_eq!(mesh.faces[nf].len, 3);
    assert_eq!(mesh.edge_exists(0, 2), Some(ne));
    assert!(mesh.edge_is_manifold(ne));

    // both triangles keep winding: 0..2 stays in f, the rest moved
    assert!(mesh.vert_in_face(0, f) && mesh.vert_in_face(2, f));
    assert!(mesh.vert_in_face(0, nf) && mesh.vert_in_face(2, nf));
    assert!(mesh.vert_in_face(1, f) != mesh.vert_in_face(1, nf));
    assert!(mesh.vert_in_face(3, f) != mesh.vert_in_face(3, nf));
}

#[test]
fn face_split_rejects_adjacent_corners() {
    let (mut mesh, f) = square_mesh();
    assert_eq!(mesh.face_split(f, 0, 1), Err(MeshError::BadSplit));
    assert_eq!(mesh.face_split(f, 0, 0), Err(MeshError::BadSplit));
}

#[test]
fn face_split_rejects_foreign_vertex() {
    let (mut mesh, f) = square_mesh();
    let stray = mesh.add_vertex(p(5.0, 5.0, 0.0));
    assert_eq!(
        mesh.face_split(f, 0, stray),
        Err(MeshError::VertexNotInFace {
            face: f,
            vertex: stray
        })
    );
}

#[test]
fn face_copy_is_hidden_and_private() {
    let (mut mesh, f) = square_mesh();
    for l in mesh.face_loops(f) {
        mesh.loops[l].data.uv = [0.25, 0.75];
    }
    let copy = mesh.face_copy(f).unwrap();

    assert!(mesh.faces[copy].hide);
    assert!(!mesh.faces[copy].select);
    assert_eq!(mesh.faces[copy].len, 4);

    let src_verts = mesh.face_verts(f);
    for (i, &l) in mesh.face_loops(copy).iter().enumerate() {
        let v = mesh.loops[l].v;
        // brand-new vertices at the same positions
        assert!(!src_verts.contains(&v));
        assert!(mesh.vertices[v].hide);
        assert_eq!(mesh.vertices[v].position, mesh.vertices[src_verts[i]].position);
        assert_eq!(mesh.loops[l].data.uv, [0.25, 0.75]);
    }
}

#[test]
fn face_verts_kill_removes_private_geometry() {
    let (mut mesh, f) = square_mesh();
    let copy = mesh.face_copy(f).unwrap();
    let copy_verts = mesh.face_verts(copy);
    let n_edges_before = mesh.edge_map.len();

    mesh.face_verts_kill(copy);

    assert!(mesh.faces[copy].removed);
    for &v in &copy_verts {
        assert!(mesh.vertices[v].removed);
    }
    assert_eq!(mesh.edge_map.len(), n_edges_before - 4);

    // the original face is untouched
    assert!(!mesh.faces[f].removed);
    assert_eq!(mesh.face_loops(f).len(), 4);
}

#[test]
fn face_verts_kill_spares_shared_geometry() {
    let (mut mesh, fa, fb) = two_quads();
    mesh.face_verts_kill(fa);

    assert!(mesh.faces[fa].removed);
    assert!(!mesh.faces[fb].removed);
    // shared verts and the shared edge survive
    assert!(!mesh.vertices[1].removed);
    assert!(!mesh.vertices[2].removed);
    assert!(mesh.edge_exists(1, 2).is_some());
    // fa's private corner verts are gone
    assert!(mesh.vertices[0].removed);
    assert!(mesh.vertices[3].removed);
}

#[test]
fn other_edge_loop_walks_the_corner() {
    let (mesh, f) = square_mesh();
    let e01 = mesh.edge_exists(0, 1).unwrap();

    // other edge at vertex 0 is 3-0, at vertex 1 is 1-2
    let l = mesh.other_edge_loop(f, e01, 0).unwrap();
    assert_eq!(mesh.loops[l].e, mesh.edge_exists(3, 0).unwrap());
    let l = mesh.other_edge_loop(f, e01, 1).unwrap();
    assert_eq!(mesh.loops[l].e, mesh.edge_exists(1, 2).unwrap());
}

#[test]
fn adjacency_queries() {
    let (mesh, fa, fb) = two_quads();
    assert!(mesh.vert_in_face(1, fa));
    assert!(mesh.vert_in_face(1, fb));
    assert!(!mesh.vert_in_face(4, fa));

    let faces = mesh.faces_of_vert(1);
    assert_eq!(faces.len(), 2);
    assert!(faces.contains(&fa) && faces.contains(&fb));

    let e = mesh.edge_exists(1, 4).unwrap();
    assert_eq!(mesh.edge_other_vert(e, 1), Some(4));
    assert_eq!(mesh.edge_other_vert(e, 4), Some(1));
    assert_eq!(mesh.edge_other_vert(e, 0), None);
}
