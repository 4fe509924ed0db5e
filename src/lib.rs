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

//! Polygon mesh-editing kernel and interactive edge-slide engine.
//!
//! The mesh is an arena of vertices, edges, loops (directed half-edges
//! bound to a face) and n-gon faces addressed by `usize` handles. On top
//! of it sit the polygon geometry kernel (normals, planar projection,
//! point-in-face, constrained ear-clipping triangulation, legal-split
//! classification) and the edge-slide transform (rail construction along
//! a selected edge loop, per-sample vertex sliding, attribute
//! reprojection from snapshot faces).

pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod slide;
