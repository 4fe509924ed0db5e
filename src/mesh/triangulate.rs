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

//! Constrained ear clipping.
//!
//! Greedy "most open corner first": each round scores every legal ear by
//! the worst absolute corner cosine of its triangle and clips the best
//! one, unless doing so would leave the remaining polygon with too-poor
//! average corner quality. O(n²) per face, fine for editing-sized n-gons.

use ahash::AHashMap;

use crate::geometry::point::{Point, Point2, Point3, PointOps};
use crate::kernel::predicates::{corner_cos, edge_side_2d, point_in_tri_2d};
use crate::mesh::basic_types::{Mesh, MeshError};
use crate::mesh::polygon::{newell_normal, rotate_to_plane};
use crate::numeric::scalar::Scalar;

const COS_THRESHOLD: f64 = 0.9;
const QUAD_BIAS: f64 = 1.0 + 1e-6;

/// Caller-provided scratch for one triangulation call: the dense
/// vertex-index mapping plus the projected coordinates and corner
/// cosines it indexes. Never stored on mesh entities; reusable across
/// calls to avoid reallocation.
#[derive(Debug, Default)]
pub struct TriangulateScratch<T: Scalar> {
    pub index_of: AHashMap<usize, usize>,
    pub projected: Vec<Point3<T>>,
    pub abscoss: Vec<T>,
}

impl<T: Scalar> TriangulateScratch<T> {
    pub fn new() -> Self {
        Self {
            index_of: AHashMap::new(),
            projected: Vec::new(),
            abscoss: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.index_of.clear();
        self.projected.clear();
        self.abscoss.clear();
    }

    #[inline]
    fn proj2(&self, dense: usize) -> Point2<T> {
        let p = &self.projected[dense];
        Point::new([p[0], p[1]])
    }
}

impl<T: Scalar> Mesh<T> {
    /// Would the triangle `(i1, i2, i3)` (dense indices into the
    /// projected polygon) be a valid clip? `i3` must lie left of the
    /// `i1 -> i2` line and no other polygon vertex may sit inside the
    /// triangle, tested on both windings.
    fn good_line(&self, f: usize, scratch: &TriangulateScratch<T>, i1: usize, i2: usize, i3: usize) -> bool {
        let v1 = scratch.proj2(i1);
        let v2 = scratch.proj2(i2);
        let v3 = scratch.proj2(i3);

        // v3 on the right of [v1, v2] means [v1, v3] exits the face
        if edge_side_2d(&v1, &v2, &v3) {
            return false;
        }

        for &v in &self.face_verts(f) {
            let Some(&i) = scratch.index_of.get(&v) else {
                continue;
            };
            if i == i1 || i == i2 || i == i3 {
                continue;
            }
            let pv = scratch.proj2(i);
            if point_in_tri_2d(&pv, &v1, &v2, &v3) || point_in_tri_2d(&pv, &v3, &v2, &v1) {
                return false;
            }
        }
        true
    }

    /// Picks the next corner to clip off `f`, or `None` when no legal
    /// ear exists.
    fn find_ear(
        &mut self,
        f: usize,
        scratch: &mut TriangulateScratch<T>,
        use_beauty: bool,
    ) -> Option<usize> {
        let cos_threshold = T::from_f64(COS_THRESHOLD);
        let loops = self.face_loops(f);
        let len = loops.len();
        let pos = |m: &Self, l: usize| m.vertices[m.loops[l].v].position;

        if len == 4 {
            let larr = [loops[0], loops[1], loops[2], loops[3]];
            let co = [
                pos(self, larr[0]),
                pos(self, larr[1]),
                pos(self, larr[2]),
                pos(self, larr[3]),
            ];

            // pick 0/1 by shorter diagonal, beauty flag flips the choice
            let bias = T::from_f64(QUAD_BIAS);
            let d02 = co[0].distance_squared_to(&co[2]);
            let d13 = co[1].distance_squared_to(&co[3]);
            let mut i = ((d02 > d13 * bias) != use_beauty) as usize;
            let mut i4 = (i + 3) % 4;

            // reject diagonals producing too flat/narrow triangles
            let mut cos1 = corner_cos(&co[i4], &co[i], &co[i + 1]).abs();
            let cos2 = corner_cos(&co[i4], &co[i + 2], &co[i + 1]).abs();
            if cos1 < cos2 {
                cos1 = cos2;
            }
            if cos1 > cos_threshold
                && cos1 > corner_cos(&co[i], &co[i4], &co[i + 2]).abs()
                && cos1 > corner_cos(&co[i], &co[i + 1], &co[i + 2]).abs()
            {
                i = 1 - i;
            }

            // last check: no overlapping triangles
            i4 = (i + 3) % 4;
            let di4 = scratch.index_of[&self.loops[larr[i4]].v];
            let di = scratch.index_of[&self.loops[larr[i]].v];
            let di1 = scratch.index_of[&self.loops[larr[i + 1]].v];
            if !self.good_line(f, scratch, di4, di, di1) {
                i = 1 - i;
            }
            return Some(larr[i]);
        }

        // n-gon: cos of every corner first
        scratch.abscoss.clear();
        for &l in &loops {
            let v1 = pos(self, self.loops[l].prev);
            let v2 = pos(self, l);
            let v3 = pos(self, self.loops[l].next);
            scratch.abscoss.push(corner_cos(&v1, &v2, &v3).abs());
        }

        let mut best_ear = None;
        let mut best_cos = T::one();

        for (i, &l) in loops.iter().enumerate() {
            let lp = self.loops[l].prev;
            let ln = self.loops[l].next;
            let (v1, v2, v3) = (self.loops[lp].v, self.loops[l].v, self.loops[ln].v);

            // chord may already exist as a real edge
            if self.edge_exists(v1, v3).is_some() {
                continue;
            }
            let (d1, d2, d3) = (
                scratch.index_of[&v1],
                scratch.index_of[&v2],
                scratch.index_of[&v3],
            );
            if !self.good_line(f, scratch, d1, d2, d3) {
                continue;
            }

            // worst (narrowest) corner of this candidate triangle
            let p1 = pos(self, lp);
            let p2 = pos(self, l);
            let p3 = pos(self, ln);
            let mut cos = scratch.abscoss[i];
            cos = cos.max(corner_cos(&p2, &p3, &p1).abs());
            cos = cos.max(corner_cos(&p3, &p1, &p2).abs());

            if cos < best_cos {
                // would clipping leave the remaining polygon too degenerate?
                let lnn = self.loops[ln].next;
                let lpp = self.loops[lp].prev;
                let mut avgcos = corner_cos(&p1, &p3, &pos(self, lnn)).abs();
                avgcos += corner_cos(&pos(self, lpp), &p1, &p3).abs();
                let i_limit = (i + len - 1) % len;
                let mut j = (i + 2) % len;
                loop {
                    avgcos += scratch.abscoss[j];
                    j = (j + 1) % len;
                    if j == i_limit {
                        break;
                    }
                }
                avgcos = avgcos / T::from_f64((len - 1) as f64);

                // a best ear is needed in any case
                if avgcos < cos_threshold || (best_ear.is_none() && avgcos < T::one()) {
                    best_ear = Some(l);
                    best_cos = cos;
                }
            }
        }

        best_ear
    }

    /// Triangulates face `f` by repeated ear clipping, each clip a
    /// `face_split` along the ear's chord.
    ///
    /// Returns every triangle of the result (`n - 2` faces, the reused
    /// input face included). On ear-search exhaustion, which cannot
    /// happen for simple polygons, triangles already emitted stay in
    /// the mesh and the error reports what remains.
    pub fn triangulate_face(
        &mut self,
        f: usize,
        use_beauty: bool,
        scratch: &mut TriangulateScratch<T>,
    ) -> Result<Vec<usize>, MeshError> {
        scratch.clear();

        for (i, &v) in self.face_verts(f).iter().enumerate() {
            scratch.index_of.insert(v, i);
            scratch.projected.push(self.vertices[v].position);
        }

        let normal = newell_normal(&scratch.projected);
        self.faces[f].normal = normal;
        rotate_to_plane(&normal, &mut scratch.projected);
        for p in &mut scratch.projected {
            p[2] = T::zero();
        }

        let mut tris = Vec::new();
        let mut f_cur = f;
        while self.faces[f_cur].len > 3 {
            let Some(ear) = self.find_ear(f_cur, scratch, use_beauty) else {
                let remaining = self.faces[f_cur].len;
                log::error!(
                    "ear search exhausted on face {f_cur}, {remaining} vertices untriangulated"
                );
                return Err(MeshError::TriangulationExhausted {
                    face: f_cur,
                    remaining,
                });
            };

            let va = self.loops[self.loops[ear].prev].v;
            let vb = self.loops[self.loops[ear].next].v;
            let (rest, _new_edge) = self.face_split(f_cur, va, vb)?;

            self.faces[rest].normal = normal;
            self.faces[f_cur].normal = normal;
            tris.push(f_cur);
            f_cur = rest;
        }
        tris.push(f_cur);

        Ok(tris)
    }
}
