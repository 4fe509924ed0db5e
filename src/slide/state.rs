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

use crate::geometry::point::Point3;
use crate::geometry::vector::{Vector3, VectorOps};
use crate::mesh::basic_types::MeshError;
use crate::numeric::scalar::Scalar;

/// Screen-space projection seam for the rail direction vote and the
/// active-vertex pick. The gesture never reads any other view state.
pub trait ViewProject<T: Scalar> {
    fn project(&self, co: &Point3<T>) -> [T; 2];
}

/// Axis-aligned orthographic view looking down -z. Handy headless and in
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthoXy;

impl<T: Scalar> ViewProject<T> for OrthoXy {
    #[inline]
    fn project(&self, co: &Point3<T>) -> [T; 2] {
        [co[0], co[1]]
    }
}

/// Row-major 4x4 projection matrix with perspective divide.
#[derive(Debug, Clone, Copy)]
pub struct ViewMatrix<T: Scalar> {
    pub m: [[T; 4]; 4],
}

impl<T: Scalar> ViewProject<T> for ViewMatrix<T> {
    fn project(&self, co: &Point3<T>) -> [T; 2] {
        let row = |r: &[T; 4]| r[0] * co[0] + r[1] * co[1] + r[2] * co[2] + r[3];
        let mut w = row(&self.m[3]);
        if w.abs() < T::tolerance() {
            w = T::one();
        }
        [row(&self.m[0]) / w, row(&self.m[1]) / w]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlideError {
    #[error("no selected edges to slide")]
    NothingSelected,

    #[error("selected edge {0} is not manifold")]
    NonManifoldEdge(usize),

    #[error("vertex {vertex} has {count} selected edges, expected 1 or 2")]
    BadVertexDegree { vertex: usize, count: usize },

    /// A face incident to a sliding vertex has no snapshot to
    /// interpolate from. Unusual adjacent topology only; the vertex
    /// keeps its current attributes.
    #[error("face {0} has no snapshot to reproject from")]
    SnapshotMissing(usize),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// One sliding vertex: its frozen original position and the two rail
/// directions it may travel along. Lives for one gesture.
#[derive(Debug, Clone)]
pub struct SlideVert<T: Scalar> {
    pub v: usize,
    pub orig_co: Point3<T>,
    /// Rail neighbor on the up side, when the rail is a single edge
    /// rather than a blended direction.
    pub up: Option<usize>,
    pub down: Option<usize>,
    pub upvec: Vector3<T>,
    pub downvec: Vector3<T>,
    /// Which contiguous edge-loop walk this vertex belongs to.
    pub loop_nr: usize,
    /// Full rail length, the distance between the two rail endpoints.
    pub edge_len: T,
}

impl<T: Scalar> SlideVert<T> {
    #[inline]
    pub fn up_co(&self) -> Point3<T> {
        self.orig_co + self.upvec
    }

    #[inline]
    pub fn down_co(&self) -> Point3<T> {
        self.orig_co + self.downvec
    }

    pub(crate) fn new(v: usize, orig_co: Point3<T>, loop_nr: usize) -> Self {
        Self {
            v,
            orig_co,
            up: None,
            down: None,
            upvec: Vector3::zero(),
            downvec: Vector3::zero(),
            loop_nr,
            edge_len: T::zero(),
        }
    }

    pub(crate) fn finish_rails(&mut self) {
        self.edge_len = (self.upvec - self.downvec).norm();
    }

    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.up, &mut self.down);
        std::mem::swap(&mut self.upvec, &mut self.downvec);
    }
}

/// Everything one edge-slide gesture owns: the rail vertices, the
/// snapshot faces serving as attribute sources, and the modal state.
/// Created by [`SlideState::build`], consumed by commit or cancel.
#[derive(Debug, Clone)]
pub struct SlideState<T: Scalar> {
    pub verts: Vec<SlideVert<T>>,
    /// Mesh vertex handle to index in `verts`.
    pub(crate) vert_index: AHashMap<usize, usize>,
    /// Live face to its hidden snapshot face.
    pub(crate) snapshots: AHashMap<usize, usize>,

    pub perc: T,
    pub use_even: bool,
    pub flipped: bool,
    /// Index into `verts` of the control vertex whose rail length scales
    /// even mode.
    pub curr_sv: usize,
    pub loop_count: usize,
}

impl<T: Scalar> SlideState<T> {
    pub fn sv_of_vert(&self, v: usize) -> Option<&SlideVert<T>> {
        self.vert_index.get(&v).map(|&i| &self.verts[i])
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}
