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

//! Per-sample slide application, attribute reprojection and gesture
//! teardown.

use crate::geometry::vector::VectorOps;
use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;
use crate::slide::state::{SlideError, SlideState};

impl<T: Scalar> SlideState<T> {
    /// Applies the slide ratio `perc` in `[-1, 1]`: moves every rail
    /// vertex and reprojects corner attributes. Only positions change;
    /// topology is untouched. Idempotent per `perc`, and `perc == 0`
    /// restores every vertex to its original position exactly, in both
    /// modes.
    pub fn apply(&mut self, mesh: &mut Mesh<T>, perc: T) -> Result<(), SlideError> {
        self.perc = perc;

        if self.use_even {
            // one shared absolute distance, scaled by the control
            // vertex's rail; each vertex clamps it to its own rail
            let curr = &self.verts[self.curr_sv];
            let signed = if self.flipped { -perc } else { perc };
            let dist = curr.edge_len * signed.half();

            for sv in &self.verts {
                if sv.edge_len <= T::tolerance() {
                    // a degenerate rail never travels, but the vertex may
                    // still hold a position from an earlier proportional
                    // sample
                    mesh.vertices[sv.v].position = sv.orig_co;
                    continue;
                }
                let co = if dist >= T::zero() {
                    let len = sv.upvec.norm();
                    if len <= T::tolerance() {
                        sv.orig_co
                    } else {
                        sv.orig_co + sv.upvec.scale(dist.min(len) / len)
                    }
                } else {
                    let len = sv.downvec.norm();
                    if len <= T::tolerance() {
                        sv.orig_co
                    } else {
                        sv.orig_co + sv.downvec.scale((-dist).min(len) / len)
                    }
                };
                mesh.vertices[sv.v].position = co;
            }
        } else {
            for sv in &self.verts {
                let co = if perc >= T::zero() {
                    sv.orig_co + sv.upvec.scale(perc)
                } else {
                    sv.orig_co + sv.downvec.scale(-perc)
                };
                mesh.vertices[sv.v].position = co;
            }
        }

        self.reproject(mesh)
    }

    /// Re-interpolates the corner attributes of every loop around every
    /// sliding vertex from the snapshot faces at the vertex's new
    /// position.
    ///
    /// When the slide carried the vertex across its face's far edge, the
    /// snapshot of the radially adjacent face (the one containing the
    /// currently relevant rail neighbor) is the source instead.
    fn reproject(&self, mesh: &mut Mesh<T>) -> Result<(), SlideError> {
        for sv in &self.verts {
            let side_v = if self.perc >= T::zero() { sv.up } else { sv.down };

            for l in mesh.loops_of_vert(sv.v) {
                let f = mesh.loops[l].f;
                if mesh.faces[f].hide {
                    continue;
                }
                let mut f_src = *self
                    .snapshots
                    .get(&f)
                    .ok_or(SlideError::SnapshotMissing(f))?;

                if let Some(side) = side_v {
                    if !mesh.vert_in_face(side, f) {
                        // slid past this face: interpolate from the
                        // neighbor across either corner edge instead
                        'search: for e in [mesh.loops[l].e, mesh.loops[mesh.loops[l].prev].e] {
                            for rl in mesh.edge_loops(e) {
                                let rf = mesh.loops[rl].f;
                                if rf != f && !mesh.faces[rf].hide && mesh.vert_in_face(side, rf) {
                                    f_src = *self
                                        .snapshots
                                        .get(&rf)
                                        .ok_or(SlideError::SnapshotMissing(rf))?;
                                    break 'search;
                                }
                            }
                        }
                    }
                }

                mesh.loop_interp_from_face(l, f_src)?;
            }
        }
        Ok(())
    }

    /// Confirms the gesture at its current ratio and frees the snapshot
    /// faces together with their private geometry.
    pub fn commit(mut self, mesh: &mut Mesh<T>) {
        log::debug!("edge slide commit at {:?}", self.perc);
        self.free_snapshots(mesh);
    }

    /// Aborts the gesture: re-applies the slide at ratio zero so every
    /// vertex returns to its original position, then tears down.
    pub fn cancel(mut self, mesh: &mut Mesh<T>) -> Result<(), SlideError> {
        log::debug!("edge slide cancel");
        self.apply(mesh, T::zero())?;
        self.free_snapshots(mesh);
        Ok(())
    }

    fn free_snapshots(&mut self, mesh: &mut Mesh<T>) {
        for (_, copy) in self.snapshots.drain() {
            mesh.face_verts_kill(copy);
        }
    }
}
