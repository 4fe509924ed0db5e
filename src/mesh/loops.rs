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

use crate::numeric::scalar::Scalar;

/// Per-corner surface attributes, the payload attribute reprojection
/// interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopData<T: Scalar> {
    pub uv: [T; 2],
    pub color: [T; 4],
}

impl<T: Scalar> Default for LoopData<T> {
    fn default() -> Self {
        Self {
            uv: [T::zero(); 2],
            color: [T::one(); 4],
        }
    }
}

/// Directed edge-within-a-face.
///
/// `next`/`prev` cycle the loops of the owning face; `radial_next`/
/// `radial_prev` cycle the loops around the underlying edge (length 2
/// for manifold edges). The loop's edge runs from `v` to `next.v`.
#[derive(Debug, Clone)]
pub struct Loop<T: Scalar> {
    pub v: usize,
    pub e: usize,
    pub f: usize,
    pub next: usize,
    pub prev: usize,
    pub radial_next: usize,
    pub radial_prev: usize,
    pub removed: bool,
    pub data: LoopData<T>,
}

impl<T: Scalar> Loop<T> {
    pub fn new(v: usize, e: usize, f: usize) -> Self {
        Self {
            v,
            e,
            f,
            next: usize::MAX,
            prev: usize::MAX,
            radial_next: usize::MAX,
            radial_prev: usize::MAX,
            removed: false,
            data: LoopData::default(),
        }
    }
}
