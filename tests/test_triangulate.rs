// tests/test_triangulate.rs
use approx::assert_relative_eq;
use polyedit::geometry::point::{Point, Point3};
use polyedit::mesh::basic_types::Mesh;
use polyedit::mesh::triangulate::TriangulateScratch;

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

fn regular_ngon(n: usize) -> Vec<TestPoint> {
    (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            p(a.cos(), a.sin(), 0.0)
        })
        .collect()
}

#[test]
fn triangle_is_already_done() {
    let (mut mesh, f) = face_from(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
    let mut scratch = TriangulateScratch::new();
    let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
    assert_eq!(tris, vec![f]);
    assert_eq!(mesh.faces[f].len, 3);
}

#[test]
fn quad_splits_along_chosen_diagonal() {
    // diagonal 0-2 is the longer one (sqrt 5 vs sqrt 2)
    let quad = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 2.0, 0.0),
        p(0.0, 1.0, 0.0),
    ];

    let (mut mesh, f) = face_from(&quad);
    let mut scratch = TriangulateScratch::new();
    let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
    assert_eq!(tris.len(), 2);
    assert!(mesh.edge_exists(0, 2).is_some());
    assert!(mesh.edge_exists(1, 3).is_none());

    // the beauty flag flips the diagonal choice
    let (mut mesh, f) = face_from(&quad);
    let tris = mesh.triangulate_face(f, true, &mut scratch).unwrap();
    assert_eq!(tris.len(), 2);
    assert!(mesh.edge_exists(1, 3).is_some());
    assert!(mesh.edge_exists(0, 2).is_none());
}

#[test]
fn hexagon_yields_four_triangles() {
    let (mut mesh, f) = face_from(&regular_ngon(6));
    let area_before = mesh.face_area(f);
    let n_edges_before = mesh.edge_map.len();

    let mut scratch = TriangulateScratch::new();
    let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();

    assert_eq!(tris.len(), 4);
    for &t in &tris {
        assert_eq!(mesh.faces[t].len, 3);
        assert!(!mesh.faces[t].removed);
    }
    // 3 chords became real edges
    assert_eq!(mesh.edge_map.len(), n_edges_before + 3);

    let area_after: f64 = tris.iter().map(|&t| mesh.face_area(t)).sum();
    assert_relative_eq!(area_after, area_before, epsilon = 1e-9);
}

#[test]
fn ngon_triangle_count_is_n_minus_2() {
    for n in 4..10 {
        let (mut mesh, f) = face_from(&regular_ngon(n));
        let mut scratch = TriangulateScratch::new();
        let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
        assert_eq!(tris.len(), n - 2);
    }
}

#[test]
fn concave_polygon_stays_inside() {
    // L-shape with a reflex corner at (1, 1)
    let (mut mesh, f) = face_from(&[
        p(0.0, 0.0, 0.0),
        p(2.0, 0.0, 0.0),
        p(2.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(1.0, 2.0, 0.0),
        p(0.0, 2.0, 0.0),
    ]);
    let mut scratch = TriangulateScratch::new();
    let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();

    assert_eq!(tris.len(), 4);
    // triangles tile the L exactly: area 3, no spill into the notch
    let area: f64 = tris.iter().map(|&t| mesh.face_area(t)).sum();
    assert_relative_eq!(area, 3.0, epsilon = 1e-9);
    for &t in &tris {
        let c = mesh.face_center_mean(t);
        assert!(c[0] < 1.0 + 1e-9 || c[1] < 1.0 + 1e-9);
    }
}

#[test]
fn tilted_face_triangulates_in_its_own_plane() {
    // planar pentagon tilted out of xy
    let (mut mesh, f) = face_from(&[
        p(0.0, 0.0, 0.0),
        p(2.0, 0.0, 1.0),
        p(3.0, 1.5, 1.5 + 0.75),
        p(1.0, 3.0, 2.0),
        p(-1.0, 1.5, 0.25),
    ]);
    let area_before = mesh.face_area(f);
    let mut scratch = TriangulateScratch::new();
    let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
    assert_eq!(tris.len(), 3);
    let area_after: f64 = tris.iter().map(|&t| mesh.face_area(t)).sum();
    assert_relative_eq!(area_after, area_before, epsilon = 1e-9);
}

#[test]
fn random_convex_polygons_triangulate_cleanly() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let mut scratch = TriangulateScratch::new();

    for _ in 0..50 {
        let n = rng.random_range(4..12);
        let mut angles: Vec<f64> = (0..n)
            .map(|_| rng.random_range(0.0..std::f64::consts::TAU))
            .collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        angles.dedup_by(|a, b| (*a - *b).abs() < 0.05);
        if angles.len() < 4 {
            continue;
        }
        let r = rng.random_range(0.5..3.0);
        let pts: Vec<TestPoint> = angles
            .iter()
            .map(|&a| p(r * a.cos(), r * a.sin(), 0.0))
            .collect();

        let (mut mesh, f) = face_from(&pts);
        let area = mesh.face_area(f);
        let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
        assert_eq!(tris.len(), pts.len() - 2);
        let sum: f64 = tris.iter().map(|&t| mesh.face_area(t)).sum();
        assert_relative_eq!(sum, area, epsilon = 1e-6);
    }
}

#[test]
fn scratch_is_reusable() {
    let mut scratch = TriangulateScratch::new();
    for n in [5, 8, 4] {
        let (mut mesh, f) = face_from(&regular_ngon(n));
        let tris = mesh.triangulate_face(f, false, &mut scratch).unwrap();
        assert_eq!(tris.len(), n - 2);
    }
}
