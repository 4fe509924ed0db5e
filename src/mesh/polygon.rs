// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 the polyedit developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Polygon measurements: normals, area, perimeter, centers, planar
//! projection and the ray-cast point-in-face test.

use crate::geometry::point::{Point, Point2, Point3, PointOps};
use crate::geometry::rotation::rotation_between;
use crate::geometry::vector::{Cross3, Vector, Vector3, VectorOps};
use crate::kernel::predicates::{dominant_axes, lines_cross_2d};
use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

/// Normal of the triangle `a, b, c` (unit length, or zero for a
/// degenerate triangle).
pub fn normal_tri<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Vector3<T> {
    let mut n = a.vector_to(b).cross(&a.vector_to(c));
    n.normalize();
    n
}

/// Quad-specialized normal from the two diagonals.
pub fn normal_quad<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    d: &Point3<T>,
) -> Vector3<T> {
    let mut n = a.vector_to(c).cross(&b.vector_to(d));
    n.normalize();
    n
}

/// Newell's method over an arbitrary vertex loop. Degenerate input gets
/// the documented z-axis fallback rather than an undefined normal.
pub fn newell_normal<T: Scalar>(verts: &[Point3<T>]) -> Vector3<T> {
    let mut n = Vector3::zero();
    if verts.is_empty() {
        return n;
    }
    let mut prev = verts[verts.len() - 1];
    for &curr in verts {
        n[0] += (prev[1] - curr[1]) * (prev[2] + curr[2]);
        n[1] += (prev[2] - curr[2]) * (prev[0] + curr[0]);
        n[2] += (prev[0] - curr[0]) * (prev[1] + curr[1]);
        prev = curr;
    }
    if n.normalize() == T::zero() {
        n = Vector::new([T::zero(), T::zero(), T::one()]);
    }
    n
}

pub fn area_tri<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> T {
    a.vector_to(b).cross(&a.vector_to(c)).norm().half()
}

/// Projects `verts` onto the plane averaged from every consecutive
/// vertex triple. Flattens near-planar n-gons before 2-D algorithms run.
pub fn project_to_average_plane<T: Scalar>(verts: &mut [Point3<T>]) {
    let n = verts.len();
    if n < 3 {
        return;
    }

    let mut avg = Vector3::zero();
    for i in 0..n {
        let tri_n = normal_tri(&verts[i], &verts[(i + 1) % n], &verts[(i + 2) % n]);
        avg = avg + tri_n;
    }
    if avg.normalize() == T::zero() {
        avg = Vector::new([T::zero(), T::zero(), T::one()]);
    }

    for v in verts.iter_mut() {
        let mag = v.as_vector().dot(&avg);
        *v = *v - avg.scale(mag);
    }
}

/// Rotates `verts` so `normal` aligns with the z axis.
pub fn rotate_to_plane<T: Scalar>(normal: &Vector3<T>, verts: &mut [Point3<T>]) {
    let up = Vector::new([T::zero(), T::zero(), T::one()]);
    let rot = rotation_between(normal, &up);
    for v in verts.iter_mut() {
        *v = rot.apply(v);
    }
}

impl<T: Scalar> Mesh<T> {
    /// Positions of a face's corners in winding order.
    pub fn face_positions(&self, f: usize) -> Vec<Point3<T>> {
        self.face_verts(f)
            .iter()
            .map(|&v| self.vertices[v].position)
            .collect()
    }

    /// Computes and returns the face normal without storing it.
    /// Triangles and quads take the closed-form paths, n-gons Newell's
    /// method; a zero-vertex face reports the zero vector.
    pub fn face_normal(&self, f: usize) -> Vector3<T> {
        let vs = self.face_positions(f);
        match vs.len() {
            0 => Vector3::zero(),
            3 => {
                let mut n = normal_tri(&vs[0], &vs[1], &vs[2]);
                if n.is_zero() {
                    n = Vector::new([T::zero(), T::zero(), T::one()]);
                }
                n
            }
            4 => {
                let mut n = normal_quad(&vs[0], &vs[1], &vs[2], &vs[3]);
                if n.is_zero() {
                    n = Vector::new([T::zero(), T::zero(), T::one()]);
                }
                n
            }
            _ => newell_normal(&vs),
        }
    }

    /// Refreshes the cached face normal.
    pub fn face_normal_update(&mut self, f: usize) {
        self.faces[f].normal = self.face_normal(f);
    }

    pub fn face_area(&self, f: usize) -> T {
        let vs = self.face_positions(f);
        match vs.len() {
            0..=2 => T::zero(),
            3 => area_tri(&vs[0], &vs[1], &vs[2]),
            4 => area_tri(&vs[0], &vs[1], &vs[2]) + area_tri(&vs[0], &vs[2], &vs[3]),
            n => {
                // n-gon: project the shoelace cross-sum onto the normal
                let normal = newell_normal(&vs);
                let mut acc = Vector3::zero();
                for i in 0..n {
                    let cross = vs[i].as_vector().cross(&vs[(i + 1) % n].as_vector());
                    acc = acc + cross;
                }
                acc.dot(&normal).abs().half()
            }
        }
    }

    pub fn face_perimeter(&self, f: usize) -> T {
        let vs = self.face_positions(f);
        let n = vs.len();
        let mut perimeter = T::zero();
        for i in 0..n {
            perimeter += vs[i].distance_to(&vs[(i + 1) % n]);
        }
        perimeter
    }

    /// Center of the face's axis-aligned bounding box.
    pub fn face_center_bounds(&self, f: usize) -> Point3<T> {
        let vs = self.face_positions(f);
        if vs.is_empty() {
            return Point::origin();
        }
        let mut min = vs[0];
        let mut max = vs[0];
        for v in &vs[1..] {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        min.midpoint(&max)
    }

    /// Arithmetic mean of the face's corner positions.
    pub fn face_center_mean(&self, f: usize) -> Point3<T> {
        let vs = self.face_positions(f);
        if vs.is_empty() {
            return Point::origin();
        }
        let mut acc = Vector3::zero();
        for v in &vs {
            acc = acc + v.as_vector();
        }
        Point {
            coords: acc.scale(T::one() / T::from_f64(vs.len() as f64)).coords,
        }
    }

    /// Ray-cast point-in-face test on the best-axis projection.
    ///
    /// Face edges are inflated slightly about the projected centroid to
    /// dodge vertex-exact degeneracies, so a query exactly on a corner
    /// is implementation-defined (but stable, and never loops or
    /// panics).
    pub fn is_point_in_face(&self, f: usize, co: &Point3<T>) -> bool {
        let vs = self.face_positions(f);
        let n = vs.len();
        if n < 3 {
            return false;
        }

        let mut normal = self.faces[f].normal;
        if normal.norm_squared() <= T::from_f64(f32::EPSILON as f64 * 10.0) {
            normal = self.face_normal(f);
        }
        let (ax, ay) = dominant_axes(&normal.coords);

        let co2 = Point::new([co[ax], co[ay]]);
        let out = Point::new([
            T::from_f64(f32::MAX as f64 * 0.5),
            T::from_f64(f32::MAX as f64 * 0.5),
        ]);

        let inv_n = T::one() / T::from_f64(n as f64);
        let mut cent = Point2::origin();
        for v in &vs {
            cent[0] += v[ax] * inv_n;
            cent[1] += v[ay] * inv_n;
        }

        let onepluseps = T::one() + T::from_f64(f32::EPSILON as f64 * 150.0);
        let inflate = |v: &Point3<T>| {
            Point::new([
                (v[ax] - cent[0]) * onepluseps + cent[0],
                (v[ay] - cent[1]) * onepluseps + cent[1],
            ])
        };

        let mut crossings = 0usize;
        for i in 0..n {
            let v1 = inflate(&vs[(i + n - 1) % n]);
            let v2 = inflate(&vs[i]);
            if lines_cross_2d(&v1, &v2, &co2, &out) {
                crossings += 1;
            }
        }

        crossings % 2 != 0
    }
}
