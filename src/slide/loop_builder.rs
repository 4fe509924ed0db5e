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

//! Rail construction: walks the selected edge chains and derives, per
//! vertex, the two perpendicular slide directions.

use ahash::{AHashMap, AHashSet};

use crate::geometry::point::{Point, PointOps};
use crate::geometry::vector::{Cross3, Vector3, VectorOps};
use crate::kernel::predicates::dist_to_segment_2d;
use crate::mesh::basic_types::{Mesh, MeshError};
use crate::numeric::scalar::Scalar;
use crate::slide::state::{SlideError, SlideState, SlideVert, ViewProject};

/// Direction from `v` along the rail edge of face `f`, where `e` is the
/// chain edge the face shares with the walk. The rail edge is the face's
/// other edge at `v`.
fn rail_in_face<T: Scalar>(
    mesh: &Mesh<T>,
    f: usize,
    e: usize,
    v: usize,
) -> Result<(usize, Vector3<T>), SlideError> {
    let lo = mesh.other_edge_loop(f, e, v)?;
    let eo = mesh.loops[lo].e;
    let other = mesh
        .edge_other_vert(eo, v)
        .ok_or(MeshError::VertexNotInFace { face: f, vertex: v })?;
    let vec = mesh.vertices[v]
        .position
        .vector_to(&mesh.vertices[other].position);
    Ok((other, vec))
}

/// Advances one side of the walk across vertex `v`, from a loop of the
/// previous chain edge to a loop of the next one, and computes the rail
/// direction at `v` on that side.
///
/// When the two chain edges share the face, the rail is synthesized
/// perpendicular to both within the face plane. When intermediate faces
/// fan between them, the rail is the average of the fan edge directions.
/// Returns `None` when the fan hits a boundary before reaching `e_next`,
/// which ends the walk on this chain.
fn get_next_loop<T: Scalar>(
    mesh: &Mesh<T>,
    v: usize,
    l_start: usize,
    e_prev: usize,
    e_next: usize,
) -> Result<Option<(usize, Vector3<T>)>, SlideError> {
    let v_co = mesh.vertices[v].position;
    let dir_of = |e: usize| -> Result<Vector3<T>, SlideError> {
        let other = mesh
            .edge_other_vert(e, v)
            .ok_or(MeshError::VertexNotInFace {
                face: mesh.loops[l_start].f,
                vertex: v,
            })?;
        Ok(v_co.vector_to(&mesh.vertices[other].position))
    };

    let first = l_start;
    let mut l = l_start;
    let mut acc = Vector3::zero();
    let mut count = 0usize;
    let mut guard = mesh.vertices[v].edges.len() + 1;

    loop {
        let lo = mesh.other_edge_loop(mesh.loops[l].f, mesh.loops[l].e, v)?;
        if mesh.loops[lo].radial_next == lo {
            return Ok(None);
        }

        if mesh.loops[lo].e == e_next {
            let vec = if count > 0 {
                acc.scale(T::one() / T::from_f64(count as f64))
            } else {
                // both chain edges lie in this face: build the rail
                // perpendicular to them within the face plane
                let f1 = dir_of(e_prev)?;
                let f2 = dir_of(e_next)?;
                let n = mesh.face_normal(mesh.loops[lo].f);
                f1.cross(&n).midpoint(&-f2.cross(&n))
            };
            return Ok(Some((lo, vec)));
        }

        acc = acc + dir_of(mesh.loops[lo].e)?;
        count += 1;

        l = mesh.loops[lo].radial_next;
        if l == first || guard == 0 {
            break;
        }
        guard -= 1;
    }
    Ok(None)
}

impl<T: Scalar> SlideState<T> {
    /// Builds the slide state for the current edge selection.
    ///
    /// Validates the selection (manifold edges, selected-edge degree 1
    /// or 2 per vertex), walks every chain, derives per-vertex rails,
    /// reconciles up/down orientation against the screen-space vote,
    /// snapshots every touched face and picks the control vertex nearest
    /// `cursor`. Fails before any mesh mutation on invalid topology.
    pub fn build(
        mesh: &mut Mesh<T>,
        view: &dyn ViewProject<T>,
        cursor: [T; 2],
    ) -> Result<Self, SlideError> {
        let selected: Vec<usize> = (0..mesh.edges.len())
            .filter(|&e| {
                let ed = &mesh.edges[e];
                ed.select && !ed.hide && !ed.removed
            })
            .collect();
        if selected.is_empty() {
            return Err(SlideError::NothingSelected);
        }

        for &e in &selected {
            if !mesh.edge_is_manifold(e) {
                return Err(SlideError::NonManifoldEdge(e));
            }
        }

        let sel_set: AHashSet<usize> = selected.iter().copied().collect();
        let mut degree: AHashMap<usize, usize> = AHashMap::new();
        for &e in &selected {
            *degree.entry(mesh.edges[e].v0).or_insert(0) += 1;
            *degree.entry(mesh.edges[e].v1).or_insert(0) += 1;
        }
        for (&vertex, &count) in &degree {
            if count > 2 {
                return Err(SlideError::BadVertexDegree { vertex, count });
            }
        }

        // next chain edge at `v`, skipping edges another walk already
        // covered so a broken chain resumes at the junction instead of
        // re-walking into stored geometry
        let selected_at =
            |mesh: &Mesh<T>, visited: &AHashSet<usize>, v: usize, skip: usize| -> Option<usize> {
                mesh.vertices[v]
                    .edges
                    .iter()
                    .copied()
                    .find(|&e| e != skip && sel_set.contains(&e) && !visited.contains(&e))
            };

        let mut verts: Vec<SlideVert<T>> = Vec::new();
        let mut visited: AHashSet<usize> = AHashSet::new();
        let mut loop_nr = 0usize;

        for &e_seed in &selected {
            if visited.contains(&e_seed) {
                continue;
            }

            // rewind to the chain start (or anywhere on a cycle)
            let mut v = mesh.edges[e_seed].v0;
            let mut e = e_seed;
            let mut guard = selected.len();
            while let Some(pe) = selected_at(mesh, &visited, v, e) {
                if guard == 0 {
                    break;
                }
                guard -= 1;
                e = pe;
                v = mesh
                    .edge_other_vert(pe, v)
                    .ok_or(SlideError::NonManifoldEdge(pe))?;
            }

            // side loops of the first chain edge, one per adjacent face
            let rl = mesh.edge_loops(e);
            let (mut l1, mut l2) = (rl[0], rl[1]);

            // seed rails for the start vertex
            let (_, mut vec1) = rail_in_face(mesh, mesh.loops[l1].f, e, v)?;
            let (_, mut vec2) = rail_in_face(mesh, mesh.loops[l2].f, e, v)?;

            let first_v = v;
            loop {
                let mut sv = SlideVert::new(v, mesh.vertices[v].position, loop_nr);
                sv.upvec = vec1;
                sv.downvec = vec2;
                sv.up = Some(rail_in_face(mesh, mesh.loops[l1].f, mesh.loops[l1].e, v)?.0);
                sv.down = Some(rail_in_face(mesh, mesh.loops[l2].f, mesh.loops[l2].e, v)?.0);
                sv.finish_rails();
                verts.push(sv);

                visited.insert(e);
                v = mesh
                    .edge_other_vert(e, v)
                    .ok_or(SlideError::NonManifoldEdge(e))?;
                let e_prev = e;

                if v == first_v {
                    // cycle closed; the start vertex is already stored
                    break;
                }

                let Some(e_next) = selected_at(mesh, &visited, v, e_prev) else {
                    // chain end, or the rest was walked already: rails
                    // within the faces of the last edge
                    let mut sv = SlideVert::new(v, mesh.vertices[v].position, loop_nr);
                    let (up, upvec) = rail_in_face(mesh, mesh.loops[l1].f, e_prev, v)?;
                    let (down, downvec) = rail_in_face(mesh, mesh.loops[l2].f, e_prev, v)?;
                    sv.up = Some(up);
                    sv.upvec = upvec;
                    sv.down = Some(down);
                    sv.downvec = downvec;
                    sv.finish_rails();
                    verts.push(sv);
                    break;
                };

                e = e_next;
                let Some((nl1, nv1)) = get_next_loop(mesh, v, l1, e_prev, e)? else {
                    break;
                };
                let Some((nl2, nv2)) = get_next_loop(mesh, v, l2, e_prev, e)? else {
                    break;
                };
                l1 = nl1;
                vec1 = nv1;
                l2 = nl2;
                vec2 = nv2;
            }

            loop_nr += 1;
        }

        let vert_index: AHashMap<usize, usize> =
            verts.iter().enumerate().map(|(i, sv)| (sv.v, i)).collect();

        // orientation vote: project the rail of every selected-edge
        // endpoint that carries a cross edge, keep the one nearest the
        // cursor globally and per walk, then flip any walk whose
        // direction opposes the global winner
        let cursor_p = Point::new(cursor);
        let mut global: Option<([T; 2], T)> = None;
        let mut per_loop: Vec<Option<([T; 2], T)>> = vec![None; loop_nr];
        for &e in &selected {
            for vx in [mesh.edges[e].v0, mesh.edges[e].v1] {
                let has_cross = mesh.vertices[vx]
                    .edges
                    .iter()
                    .any(|e2| !sel_set.contains(e2));
                if !has_cross {
                    continue;
                }
                let Some(&j) = vert_index.get(&vx) else {
                    continue;
                };
                let sv = &verts[j];
                let a = view.project(&sv.down_co());
                let b = view.project(&sv.up_co());
                let d = dist_to_segment_2d(&cursor_p, &Point::new(a), &Point::new(b));
                let dir = [a[0] - b[0], a[1] - b[1]];
                if global.is_none_or(|(_, best)| d < best) {
                    global = Some((dir, d));
                }
                let slot = &mut per_loop[sv.loop_nr];
                if slot.is_none_or(|(_, best)| d < best) {
                    *slot = Some((dir, d));
                }
            }
        }
        if let Some((gdir, _)) = global {
            for (ln, slot) in per_loop.iter().enumerate() {
                let Some((ldir, _)) = slot else { continue };
                if ldir[0] * gdir[0] + ldir[1] * gdir[1] < T::zero() {
                    for sv in verts.iter_mut().filter(|sv| sv.loop_nr == ln) {
                        sv.flip();
                    }
                }
            }
        }

        // control vertex: nearest projected position to the cursor
        let mut curr_sv = 0usize;
        let mut best = None;
        for (i, sv) in verts.iter().enumerate() {
            let p = view.project(&sv.orig_co);
            let dx = p[0] - cursor[0];
            let dy = p[1] - cursor[1];
            let d = dx * dx + dy * dy;
            if best.is_none_or(|b| d < b) {
                best = Some(d);
                curr_sv = i;
            }
        }

        // one hidden snapshot per touched face, shared verts notwithstanding
        let mut snapshots: AHashMap<usize, usize> = AHashMap::new();
        for i in 0..verts.len() {
            for f in mesh.faces_of_vert(verts[i].v) {
                if !snapshots.contains_key(&f) && !mesh.faces[f].hide {
                    let copy = mesh.face_copy(f)?;
                    snapshots.insert(f, copy);
                }
            }
        }

        log::debug!(
            "edge slide: {} rail verts over {} walks, {} face snapshots",
            verts.len(),
            loop_nr,
            snapshots.len()
        );

        Ok(Self {
            verts,
            vert_index,
            snapshots,
            perc: T::zero(),
            use_even: false,
            flipped: false,
            curr_sv,
            loop_count: loop_nr,
        })
    }
}
