// tests/test_polygon.rs
use approx::{assert_abs_diff_eq, assert_relative_eq};
use polyedit::geometry::point::{Point, Point3, PointOps};
use polyedit::geometry::vector::VectorOps;
use polyedit::mesh::basic_types::Mesh;
use polyedit::mesh::polygon::{newell_normal, project_to_average_plane, rotate_to_plane};

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

fn unit_square() -> (TestMesh, usize) {
    face_from(&[
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
    ])
}

fn convex_pentagon() -> Vec<TestPoint> {
    vec![
        p(0.0, 0.0, 0.0),
        p(2.0, 0.0, 0.0),
        p(3.0, 1.5, 0.0),
        p(1.0, 3.0, 0.0),
        p(-1.0, 1.5, 0.0),
    ]
}

#[test]
fn newell_normal_is_cyclic_invariant() {
    let pts = convex_pentagon();
    let n0 = newell_normal(&pts);
    for shift in 1..pts.len() {
        let mut rotated = pts.clone();
        rotated.rotate_left(shift);
        let n = newell_normal(&rotated);
        for i in 0..3 {
            assert_relative_eq!(n[i], n0[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn newell_normal_flips_with_winding() {
    let pts = convex_pentagon();
    let n = newell_normal(&pts);
    let mut reversed = pts.clone();
    reversed.reverse();
    let nr = newell_normal(&reversed);
    for i in 0..3 {
        assert_relative_eq!(nr[i], -n[i], epsilon = 1e-12);
    }
}

#[test]
fn degenerate_face_gets_z_fallback() {
    // collinear triangle
    let (mesh, f) = face_from(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
    let n = mesh.face_normal(f);
    assert_eq!(n.coords, [0.0, 0.0, 1.0]);
}

#[test]
fn face_normal_of_ccw_square_points_up() {
    let (mesh, f) = unit_square();
    let n = mesh.face_normal(f);
    assert_relative_eq!(n[2], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
}

#[test]
fn area_of_right_triangle_and_square() {
    let (mesh, f) = face_from(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]);
    assert_relative_eq!(mesh.face_area(f), 0.5, epsilon = 1e-12);

    let (mesh, f) = unit_square();
    assert_relative_eq!(mesh.face_area(f), 1.0, epsilon = 1e-12);
}

#[test]
fn area_of_ngon_matches_triangle_sum() {
    let (mesh, f) = face_from(&convex_pentagon());
    // fan decomposition from vertex 0
    let pts = convex_pentagon();
    let mut expected = 0.0;
    for i in 1..pts.len() - 1 {
        let a = pts[0].vector_to(&pts[i]);
        let b = pts[0].vector_to(&pts[i + 1]);
        expected += 0.5 * (a[0] * b[1] - a[1] * b[0]).abs();
    }
    assert_relative_eq!(mesh.face_area(f), expected, epsilon = 1e-9);
}

#[test]
fn perimeter_of_square() {
    let (mesh, f) = unit_square();
    assert_relative_eq!(mesh.face_perimeter(f), 4.0, epsilon = 1e-12);
}

#[test]
fn centers_of_square() {
    let (mesh, f) = unit_square();
    let cb = mesh.face_center_bounds(f);
    let cm = mesh.face_center_mean(f);
    for c in [cb, cm] {
        assert_relative_eq!(c[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(c[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c[2], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn point_in_face_basics() {
    let (mut mesh, f) = unit_square();
    mesh.face_normal_update(f);
    assert!(mesh.is_point_in_face(f, &p(0.5, 0.5, 0.0)));
    assert!(!mesh.is_point_in_face(f, &p(1.5, 0.5, 0.0)));
    assert!(!mesh.is_point_in_face(f, &p(0.5, -0.5, 0.0)));
}

#[test]
fn point_in_face_on_vertex_terminates() {
    // implementation-defined result, must not hang or panic
    let (mut mesh, f) = unit_square();
    mesh.face_normal_update(f);
    let _ = mesh.is_point_in_face(f, &p(0.0, 0.0, 0.0));
    let _ = mesh.is_point_in_face(f, &p(1.0, 1.0, 0.0));
}

#[test]
fn point_in_face_concave() {
    // L-shape: the notch is outside
    let (mut mesh, f) = face_from(&[
        p(0.0, 0.0, 0.0),
        p(2.0, 0.0, 0.0),
        p(2.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(1.0, 2.0, 0.0),
        p(0.0, 2.0, 0.0),
    ]);
    mesh.face_normal_update(f);
    assert!(mesh.is_point_in_face(f, &p(0.5, 1.5, 0.0)));
    assert!(mesh.is_point_in_face(f, &p(1.5, 0.5, 0.0)));
    assert!(!mesh.is_point_in_face(f, &p(1.5, 1.5, 0.0)));
}

#[test]
fn average_plane_projection_flattens() {
    // a non-planar quad: one corner lifted
    let mut pts = vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.4),
        p(0.0, 1.0, 0.0),
    ];
    project_to_average_plane(&mut pts);
    let n = newell_normal(&pts);
    for q in &pts {
        assert_abs_diff_eq!(q.as_vector().dot(&n), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn rotate_to_plane_levels_z() {
    // tilted planar quad
    let mut pts = vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 1.0),
        p(1.0, 1.0, 1.0),
        p(0.0, 1.0, 0.0),
    ];
    let n = newell_normal(&pts);
    rotate_to_plane(&n, &mut pts);
    let z0 = pts[0][2];
    for q in &pts[1..] {
        assert_abs_diff_eq!(q[2], z0, epsilon = 1e-9);
    }
}

#[test]
fn rotate_to_plane_handles_antiparallel() {
    // normal already -z: axis degenerates, y-axis fallback applies
    let mut pts = vec![
        p(0.0, 0.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(1.0, 0.0, 0.0),
    ];
    let n = newell_normal(&pts);
    assert_relative_eq!(n[2], -1.0, epsilon = 1e-12);
    rotate_to_plane(&n, &mut pts);
    for q in &pts {
        assert_abs_diff_eq!(q[2], 0.0, epsilon = 1e-9);
    }
}
