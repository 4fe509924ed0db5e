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

use ahash::AHashMap;
use thiserror::Error;

use crate::mesh::{edge::Edge, face::Face, loops::Loop, vertex::Vertex};
use crate::numeric::scalar::Scalar;

/// Arena half-edge mesh with n-gon faces.
///
/// The arena owns every entity; loops, edges and faces hold only indices
/// into it. Deleted entities are tombstoned with their `removed` flag,
/// indices stay stable.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub edges: Vec<Edge>,
    pub loops: Vec<Loop<T>>,
    pub faces: Vec<Face<T>>,

    pub edge_map: AHashMap<(usize, usize), usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("a face needs at least 3 vertices, got {0}")]
    FaceTooSmall(usize),

    #[error("face {face} does not contain vertex {vertex}")]
    VertexNotInFace { face: usize, vertex: usize },

    #[error("split endpoints must be distinct, non-adjacent corners of the face")]
    BadSplit,

    #[error("edge {edge} is not used by face {face}")]
    EdgeNotInFace { face: usize, edge: usize },

    /// Ear search failed while more than 3 vertices remain. Internal
    /// invariant violation for simple polygons; already-emitted
    /// triangles are left in the mesh.
    #[error("no ear found on face {face} with {remaining} vertices remaining")]
    TriangulationExhausted { face: usize, remaining: usize },
}
