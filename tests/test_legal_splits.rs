// tests/test_legal_splits.rs
use polyedit::geometry::point::{Point, Point3};
use polyedit::mesh::basic_types::{Mesh, MeshError};

type TestMesh = Mesh<f64>;
type TestPoint = Point3<f64>;

fn p(x: f64, y: f64, z: f64) -> TestPoint {
    Point::new([x, y, z])
}

fn face_from(points: &[TestPoint]) -> (TestMesh, usize) {
    let mut mesh = TestMesh::new();
    let verts: Vec<usize> = points.iter().map(|&q| mesh.add_vertex(q)).collect();
    let f = mesh.add_face(&verts).unwrap();
    (mesh, f)
}

fn hexagon() -> (TestMesh, usize) {
    let pts: Vec<TestPoint> = (0..6)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 6.0;
            p(a.cos(), a.sin(), 0.0)
        })
        .collect();
    face_from(&pts)
}

#[test]
fn fan_of_short_chords_is_legal() {
    let (mesh, f) = hexagon();
    let chords = [(0, 2), (2, 4), (4, 0)];
    let legal = mesh.classify_legal_splits(f, &chords).unwrap();
    assert_eq!(legal, chords);
}

#[test]
fn crossing_chords_keep_the_earlier_one() {
    let (mesh, f) = hexagon();
    // both long diagonals pass through the center
    let legal = mesh.classify_legal_splits(f, &[(0, 3), (1, 4)]).unwrap();
    assert_eq!(legal, vec![(0, 3)]);
    let legal = mesh.classify_legal_splits(f, &[(1, 4), (0, 3)]).unwrap();
    assert_eq!(legal, vec![(1, 4)]);
}

#[test]
fn rectangle_diagonals_are_mutually_exclusive() {
    let (mesh, f) = face_from(&[
        p(0.0, 0.0, 0.0),
        p(3.0, 0.0, 0.0),
        p(3.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
    ]);
    let legal = mesh.classify_legal_splits(f, &[(0, 2), (1, 3)]).unwrap();
    assert_eq!(legal, vec![(0, 2)]);
}

#[test]
fn exterior_chord_of_concave_face_is_rejected() {
    // L-shape; the chord 2-4 bridges the notch outside the face
    let (mesh, f) = face_from(&[
        p(0.0, 0.0, 0.0),
        p(2.0, 0.0, 0.0),
        p(2.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(1.0, 2.0, 0.0),
        p(0.0, 2.0, 0.0),
    ]);
    let legal = mesh
        .classify_legal_splits(f, &[(0, 3), (2, 4), (1, 3), (3, 5)])
        .unwrap();
    assert_eq!(legal, vec![(0, 3), (1, 3), (3, 5)]);
}

#[test]
fn foreign_endpoint_is_an_error() {
    let (mut mesh, f) = hexagon();
    let stray = mesh.add_vertex(p(9.0, 9.0, 0.0));
    assert_eq!(
        mesh.classify_legal_splits(f, &[(0, stray)]),
        Err(MeshError::VertexNotInFace {
            face: f,
            vertex: stray
        })
    );
}

#[test]
fn tilted_face_is_classified_in_its_plane() {
    // the same hexagon, lifted onto the plane z = x
    let pts: Vec<TestPoint> = (0..6)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 6.0;
            p(a.cos(), a.sin(), a.cos())
        })
        .collect();
    let (mesh, f) = face_from(&pts);
    let legal = mesh.classify_legal_splits(f, &[(0, 3), (1, 4)]).unwrap();
    assert_eq!(legal, vec![(0, 3)]);
}
