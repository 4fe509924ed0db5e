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

use crate::geometry::point::Point;
use crate::geometry::vector::{Cross3, Vector, VectorOps};
use crate::kernel::predicates::safe_acos;
use crate::numeric::scalar::Scalar;

/// 3x3 rotation matrix, row major.
#[derive(Debug, Clone, Copy)]
pub struct Rotation3<T: Scalar> {
    pub rows: [[T; 3]; 3],
}

impl<T: Scalar> Rotation3<T> {
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self {
            rows: [[o, z, z], [z, o, z], [z, z, o]],
        }
    }

    /// Rodrigues rotation about a unit `axis` by `angle` radians.
    pub fn from_axis_angle(axis: &Vector<T, 3>, angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let t = T::one() - c;
        let [x, y, z] = axis.coords;
        Self {
            rows: [
                [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
                [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
                [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
            ],
        }
    }

    #[inline]
    pub fn apply(&self, p: &Point<T, 3>) -> Point<T, 3> {
        let [x, y, z] = p.coords;
        let r = &self.rows;
        Point {
            coords: [
                r[0][0] * x + r[0][1] * y + r[0][2] * z,
                r[1][0] * x + r[1][1] * y + r[1][2] * z,
                r[2][0] * x + r[2][1] * y + r[2][2] * z,
            ],
        }
    }
}

/// Rotation taking `from` onto `to` (both unit-length).
///
/// The axis degenerates when `from` is anti-parallel to `to`; the y axis
/// is substituted so the half-turn is still well defined.
pub fn rotation_between<T: Scalar>(from: &Vector<T, 3>, to: &Vector<T, 3>) -> Rotation3<T> {
    let angle = safe_acos(from.dot(to));
    if angle < T::tolerance() {
        return Rotation3::identity();
    }

    let mut axis = from.cross(to);
    if axis.norm() < T::tolerance() {
        axis = Vector::new([T::zero(), T::one(), T::zero()]);
    } else {
        axis.normalize();
    }

    Rotation3::from_axis_angle(&axis, angle)
}
