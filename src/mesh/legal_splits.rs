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

//! Legality filter for candidate face chords.

use crate::geometry::point::{Point, Point2, Point3, PointOps};
use crate::kernel::predicates::lines_cross_2d;
use crate::mesh::basic_types::{Mesh, MeshError};
use crate::mesh::polygon::{newell_normal, project_to_average_plane, rotate_to_plane};
use crate::numeric::scalar::Scalar;

/// Chords shrink toward their midpoint so sharing an endpoint with the
/// boundary does not read as a crossing.
const CHORD_SHRINK: f64 = 0.9;
/// Boundary edges stretch slightly for the same endpoint-sharing reason,
/// from the other side.
const EDGE_STRETCH: f64 = 1.0000001;

fn scale_segment_2d<T: Scalar>(a: &mut Point2<T>, b: &mut Point2<T>, fac: T) {
    let mid = a.midpoint(b);
    for i in 0..2 {
        a[i] = (a[i] - mid[i]) * fac + mid[i];
        b[i] = (b[i] - mid[i]) * fac + mid[i];
    }
}

impl<T: Scalar> Mesh<T> {
    /// Classifies candidate chords of face `f` (pairs of its vertices)
    /// and returns the ones legal to split along: fully interior to the
    /// face, crossing no boundary edge and no earlier surviving chord.
    ///
    /// When two chords cross each other the earlier one in `chords`
    /// wins. Errors if a chord endpoint is not a corner of `f`.
    pub fn classify_legal_splits(
        &self,
        f: usize,
        chords: &[(usize, usize)],
    ) -> Result<Vec<(usize, usize)>, MeshError> {
        let verts = self.face_verts(f);
        let n = verts.len();

        let mut proj: Vec<Point3<T>> = verts
            .iter()
            .map(|&v| self.vertices[v].position)
            .collect();
        project_to_average_plane(&mut proj);
        let normal = newell_normal(&proj);
        rotate_to_plane(&normal, &mut proj);

        let poly: Vec<Point2<T>> = proj.iter().map(|p| Point::new([p[0], p[1]])).collect();

        let index_of = |v: usize| -> Result<usize, MeshError> {
            verts
                .iter()
                .position(|&x| x == v)
                .ok_or(MeshError::VertexNotInFace { face: f, vertex: v })
        };

        // chord endpoints, shrunk about their midpoints
        let shrink = T::from_f64(CHORD_SHRINK);
        let mut segs: Vec<(Point2<T>, Point2<T>)> = Vec::with_capacity(chords.len());
        for &(va, vb) in chords {
            let mut a = poly[index_of(va)?];
            let mut b = poly[index_of(vb)?];
            scale_segment_2d(&mut a, &mut b, shrink);
            segs.push((a, b));
        }

        // ray target comfortably outside the polygon
        let mut out: Point2<T> = Point::origin();
        for p in &poly {
            out[0] = out[0].max(p[0]);
            out[1] = out[1].max(p[1]);
        }
        out[0] += T::one();
        out[1] += T::one();

        let mut alive = vec![true; chords.len()];

        // convexity: the chord midpoint must be inside the face
        for (i, (a, b)) in segs.iter().enumerate() {
            let mid = a.midpoint(b);
            let mut crossings = 0usize;
            for j in 0..n {
                if lines_cross_2d(&poly[j], &poly[(j + 1) % n], &mid, &out) {
                    crossings += 1;
                }
            }
            if crossings % 2 == 0 {
                alive[i] = false;
            }
        }

        // no chord may cross a boundary edge
        let stretch = T::from_f64(EDGE_STRETCH);
        for j in 0..n {
            let mut e1 = poly[j];
            let mut e2 = poly[(j + 1) % n];
            scale_segment_2d(&mut e1, &mut e2, stretch);
            for (i, (a, b)) in segs.iter().enumerate() {
                if alive[i] && lines_cross_2d(&e1, &e2, a, b) {
                    alive[i] = false;
                }
            }
        }

        // mutual crossings: earlier chord wins
        for i in 0..segs.len() {
            if !alive[i] {
                continue;
            }
            let (mut a, mut b) = segs[i];
            scale_segment_2d(&mut a, &mut b, stretch);
            for j in 0..i {
                if alive[j] && lines_cross_2d(&a, &b, &segs[j].0, &segs[j].1) {
                    alive[i] = false;
                    break;
                }
            }
        }

        Ok(chords
            .iter()
            .zip(alive)
            .filter_map(|(&c, keep)| keep.then_some(c))
            .collect())
    }
}
