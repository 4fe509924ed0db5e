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

#[derive(Debug, Clone)]
pub struct Edge {
    pub v0: usize,
    pub v1: usize,
    /// One loop of the radial cycle around this edge, if any face uses it.
    pub l: Option<usize>,
    pub select: bool,
    pub hide: bool,
    pub removed: bool,
}

impl Edge {
    pub fn new(v0: usize, v1: usize) -> Self {
        Self {
            v0,
            v1,
            l: None,
            select: false,
            hide: false,
            removed: false,
        }
    }

    /// Canonical key for the mesh edge map.
    #[inline]
    pub fn key(v0: usize, v1: usize) -> (usize, usize) {
        if v0 < v1 { (v0, v1) } else { (v1, v0) }
    }

    #[inline]
    pub fn other_vert(&self, v: usize) -> Option<usize> {
        if v == self.v0 {
            Some(self.v1)
        } else if v == self.v1 {
            Some(self.v0)
        } else {
            None
        }
    }

    #[inline]
    pub fn has_vert(&self, v: usize) -> bool {
        v == self.v0 || v == self.v1
    }
}
