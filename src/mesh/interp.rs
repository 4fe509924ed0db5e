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

//! Corner-attribute interpolation with mean-value polygon weights.

use crate::geometry::point::{Point, Point2, PointOps};
use crate::geometry::vector::VectorOps;
use crate::kernel::predicates::dominant_axes;
use crate::mesh::basic_types::{Mesh, MeshError};
use crate::mesh::loops::LoopData;
use crate::numeric::scalar::Scalar;

/// Mean-value coordinates of `p` with respect to the polygon `corners`.
///
/// Weights are non-negative inside a convex polygon, sum to one and
/// reproduce the corners exactly. Queries on a corner or on an edge take
/// the degenerate fast paths so no division blows up.
pub fn interp_weights_poly_2d<T: Scalar>(corners: &[Point2<T>], p: &Point2<T>) -> Vec<T> {
    let n = corners.len();
    let mut weights = vec![T::zero(); n];
    if n == 0 {
        return weights;
    }

    let dirs: Vec<_> = corners.iter().map(|c| p.vector_to(c)).collect();
    let lens: Vec<T> = dirs.iter().map(|d| d.norm()).collect();

    // on a corner: all weight to that corner
    for i in 0..n {
        if lens[i] <= T::tolerance() {
            weights[i] = T::one();
            return weights;
        }
    }

    let mut half_tan = vec![T::zero(); n];
    for i in 0..n {
        let j = (i + 1) % n;
        let denom = lens[i] * lens[j];
        let cos = dirs[i].dot(&dirs[j]) / denom;
        // signed, so reflex corners of concave faces weigh in negatively
        let sin = dirs[i].perp_dot(&dirs[j]) / denom;

        if sin.abs() <= T::tolerance() {
            if cos < T::zero() {
                // on the edge i..j: linear between its endpoints
                let total = lens[i] + lens[j];
                weights[i] = lens[j] / total;
                weights[j] = lens[i] / total;
                return weights;
            }
            // collinear pointing the same way contributes nothing
            half_tan[i] = T::zero();
        } else {
            half_tan[i] = (T::one() - cos) / sin;
        }
    }

    let mut total = T::zero();
    for i in 0..n {
        weights[i] = (half_tan[(i + n - 1) % n] + half_tan[i]) / lens[i];
        total += weights[i];
    }
    if total.abs() > T::tolerance() {
        for w in &mut weights {
            *w = *w / total;
        }
    }
    weights
}

impl<T: Scalar> Mesh<T> {
    /// Re-derives the corner attributes of loop `l` by interpolating the
    /// corners of `f_src` at the loop's vertex position, projected along
    /// the source face's dominant normal axis.
    pub fn loop_interp_from_face(&mut self, l: usize, f_src: usize) -> Result<(), MeshError> {
        let src_loops = self.face_loops(f_src);
        if src_loops.len() < 3 {
            return Err(MeshError::FaceTooSmall(src_loops.len()));
        }

        let normal = self.face_normal(f_src);
        let (ax, ay) = dominant_axes(&normal.coords);

        let corners: Vec<Point2<T>> = src_loops
            .iter()
            .map(|&sl| {
                let co = &self.vertices[self.loops[sl].v].position;
                Point::new([co[ax], co[ay]])
            })
            .collect();
        let co = &self.vertices[self.loops[l].v].position;
        let p = Point::new([co[ax], co[ay]]);

        let weights = interp_weights_poly_2d(&corners, &p);

        let mut data = LoopData {
            uv: [T::zero(); 2],
            color: [T::zero(); 4],
        };
        for (&sl, &w) in src_loops.iter().zip(weights.iter()) {
            let src = &self.loops[sl].data;
            for k in 0..2 {
                data.uv[k] += src.uv[k] * w;
            }
            for k in 0..4 {
                data.color[k] += src.color[k] * w;
            }
        }
        self.loops[l].data = data;
        Ok(())
    }
}
