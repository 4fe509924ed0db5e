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

use crate::geometry::vector::Vector3;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone)]
pub struct Face<T: Scalar> {
    pub l_first: usize,
    /// Loop count; following `next` from `l_first` returns after exactly
    /// this many steps.
    pub len: usize,
    /// Unit normal, or the z-axis fallback for degenerate faces. Stale
    /// after topology changes until `face_normal_update` runs.
    pub normal: Vector3<T>,
    pub select: bool,
    pub hide: bool,
    pub removed: bool,
}

impl<T: Scalar> Face<T> {
    pub fn new(l_first: usize, len: usize) -> Self {
        Self {
            l_first,
            len,
            normal: Vector3::zero(),
            select: false,
            hide: false,
            removed: false,
        }
    }
}
