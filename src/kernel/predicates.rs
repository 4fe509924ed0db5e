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

//! 2-D predicates the tessellator, the point-in-face test and the
//! legal-split classifier are built from. Everything here works on
//! already-projected coordinates.

use crate::geometry::point::{Point, Point2, Point3, PointOps};
use crate::geometry::vector::VectorOps;
use crate::numeric::scalar::Scalar;

/// Is `v3` to the right of the directed segment `v1 -> v2`?
///
/// Exception: a `v3` coincident with either endpoint reports false, so
/// chords sharing an endpoint with an edge are not flagged against it.
pub fn edge_side_2d<T: Scalar>(v1: &Point2<T>, v2: &Point2<T>, v3: &Point2<T>) -> bool {
    let inp = (v2[0] - v1[0]) * (v1[1] - v3[1]) + (v1[1] - v2[1]) * (v1[0] - v3[0]);

    if inp < T::zero() {
        return false;
    }
    if inp == T::zero() {
        if v1[0] == v3[0] && v1[1] == v3[1] {
            return false;
        }
        if v2[0] == v3[0] && v2[1] == v3[1] {
            return false;
        }
    }
    true
}

/// Do the segments `v1-v2` and `v3-v4` cross?
///
/// Winding-based classification, with an axis-aligned collinear interval
/// test as fallback for segments flat along one axis.
pub fn lines_cross_2d<T: Scalar>(
    v1: &Point2<T>,
    v2: &Point2<T>,
    v3: &Point2<T>,
    v4: &Point2<T>,
) -> bool {
    let eps = T::from_f64(f32::EPSILON as f64 * 15.0);

    let w1 = edge_side_2d(v1, v3, v2);
    let w2 = edge_side_2d(v2, v4, v1);
    let w3 = !edge_side_2d(v1, v2, v3);
    let w4 = edge_side_2d(v3, v2, v4);
    let w5 = !edge_side_2d(v3, v1, v4);

    if w1 == w2 && w2 == w3 && w3 == w4 && w4 == w5 {
        return true;
    }

    let minmax =
        |a: &Point2<T>, b: &Point2<T>, axis: usize| (a[axis].min(b[axis]), a[axis].max(b[axis]));

    // interval test on the x axis
    if (v1[1] - v2[1]).abs() < eps && (v3[1] - v4[1]).abs() < eps && (v1[1] - v3[1]).abs() < eps {
        let (a_min, a_max) = minmax(v1, v2, 0);
        let (b_min, b_max) = minmax(v3, v4, 0);
        return b_max >= a_min && b_min <= a_max;
    }

    // and on the y axis
    if (v1[0] - v2[0]).abs() < eps && (v3[0] - v4[0]).abs() < eps && (v1[0] - v3[0]).abs() < eps {
        let (a_min, a_max) = minmax(v1, v2, 1);
        let (b_min, b_max) = minmax(v3, v4, 1);
        return b_max >= a_min && b_min <= a_max;
    }

    false
}

/// Point-in-triangle for one winding; run twice with swapped winding for
/// a winding-agnostic strict-containment test.
pub fn point_in_tri_2d<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> bool {
    let side = |p0: &Point2<T>, p1: &Point2<T>, q: &Point2<T>| {
        (p1[0] - p0[0]) * (q[1] - p0[1]) - (p1[1] - p0[1]) * (q[0] - p0[0])
    };

    let d1 = side(a, b, p);
    let d2 = side(b, c, p);
    let d3 = side(c, a, p);

    let z = T::zero();
    d1 >= z && d2 >= z && d3 >= z
}

/// Cosine of the corner angle at `b` formed by `a-b-c`. Degenerate
/// (zero-length) arms report 1, the worst possible corner.
pub fn corner_cos<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> T {
    let mut u = b.vector_to(a);
    let mut v = b.vector_to(c);
    if u.normalize() == T::zero() || v.normalize() == T::zero() {
        return T::one();
    }
    u.dot(&v)
}

/// The two axes spanning the plane most orthogonal to `normal`, i.e. the
/// projection that best preserves area.
pub fn dominant_axes<T: Scalar>(normal: &[T; 3]) -> (usize, usize) {
    let (x, y, z) = (normal[0].abs(), normal[1].abs(), normal[2].abs());
    if x >= y && x >= z {
        (1, 2)
    } else if y >= x && y >= z {
        (0, 2)
    } else {
        (0, 1)
    }
}

/// `acos` clamped to its domain; never NaN for finite input.
#[inline]
pub fn safe_acos<T: Scalar>(c: T) -> T {
    c.max(-T::one()).min(T::one()).acos()
}

/// Distance from `p` to the segment `a-b`.
pub fn dist_to_segment_2d<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> T {
    let ab = a.vector_to(b);
    let ap = a.vector_to(p);
    let len2 = ab.norm_squared();
    if len2 < T::tolerance() {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / len2).max(T::zero()).min(T::one());
    let proj = Point::new([a[0] + ab[0] * t, a[1] + ab[1] * t]);
    proj.distance_to(p)
}
