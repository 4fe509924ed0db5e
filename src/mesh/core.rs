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

//! Mesh construction and adjacency queries.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::geometry::point::Point3;
use crate::mesh::basic_types::{Mesh, MeshError};
use crate::mesh::{edge::Edge, face::Face, loops::Loop, vertex::Vertex};
use crate::numeric::scalar::Scalar;

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            loops: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, position: Point3<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Existing edge between two vertices, if any.
    #[inline]
    pub fn edge_exists(&self, va: usize, vb: usize) -> Option<usize> {
        self.edge_map.get(&Edge::key(va, vb)).copied()
    }

    fn ensure_edge(&mut self, va: usize, vb: usize) -> usize {
        if let Some(e) = self.edge_exists(va, vb) {
            return e;
        }
        let idx = self.edges.len();
        self.edges.push(Edge::new(va, vb));
        self.edge_map.insert(Edge::key(va, vb), idx);
        self.vertices[va].edges.push(idx);
        self.vertices[vb].edges.push(idx);
        idx
    }

    /// Splice loop `l` into the radial cycle of its edge.
    fn radial_insert(&mut self, l: usize) {
        let e = self.loops[l].e;
        match self.edges[e].l {
            None => {
                self.edges[e].l = Some(l);
                self.loops[l].radial_next = l;
                self.loops[l].radial_prev = l;
            }
            Some(l0) => {
                let l0_next = self.loops[l0].radial_next;
                self.loops[l].radial_next = l0_next;
                self.loops[l].radial_prev = l0;
                self.loops[l0].radial_next = l;
                self.loops[l0_next].radial_prev = l;
            }
        }
    }

    fn radial_remove(&mut self, l: usize) {
        let e = self.loops[l].e;
        let (rn, rp) = (self.loops[l].radial_next, self.loops[l].radial_prev);
        if rn == l {
            self.edges[e].l = None;
        } else {
            self.loops[rp].radial_next = rn;
            self.loops[rn].radial_prev = rp;
            if self.edges[e].l == Some(l) {
                self.edges[e].l = Some(rn);
            }
        }
        self.loops[l].radial_next = l;
        self.loops[l].radial_prev = l;
    }

    /// Number of faces using edge `e`.
    pub fn radial_count(&self, e: usize) -> usize {
        let Some(l0) = self.edges[e].l else { return 0 };
        let mut n = 1;
        let mut l = self.loops[l0].radial_next;
        while l != l0 {
            n += 1;
            l = self.loops[l].radial_next;
        }
        n
    }

    /// An edge bounded by exactly two faces.
    #[inline]
    pub fn edge_is_manifold(&self, e: usize) -> bool {
        self.radial_count(e) == 2
    }

    /// Adds an n-gon face over existing vertices, in winding order.
    /// Edges are created on demand and shared with adjacent faces.
    pub fn add_face(&mut self, verts: &[usize]) -> Result<usize, MeshError> {
        let n = verts.len();
        if n < 3 {
            return Err(MeshError::FaceTooSmall(n));
        }

        let face_idx = self.faces.len();
        let l_base = self.loops.len();

        for (i, &v) in verts.iter().enumerate() {
            let e = self.ensure_edge(v, verts[(i + 1) % n]);
            let mut l = Loop::new(v, e, face_idx);
            l.next = l_base + (i + 1) % n;
            l.prev = l_base + (i + n - 1) % n;
            self.loops.push(l);
        }
        for i in 0..n {
            self.radial_insert(l_base + i);
        }

        self.faces.push(Face::new(l_base, n));
        Ok(face_idx)
    }

    /// Loops of a face in winding order.
    pub fn face_loops(&self, f: usize) -> SmallVec<[usize; 8]> {
        let face = &self.faces[f];
        let mut out = SmallVec::with_capacity(face.len);
        let mut l = face.l_first;
        for _ in 0..face.len {
            out.push(l);
            l = self.loops[l].next;
        }
        out
    }

    pub fn face_verts(&self, f: usize) -> SmallVec<[usize; 8]> {
        self.face_loops(f).iter().map(|&l| self.loops[l].v).collect()
    }

    pub fn vert_in_face(&self, v: usize, f: usize) -> bool {
        self.face_loops(f).iter().any(|&l| self.loops[l].v == v)
    }

    pub fn face_loop_of_vert(&self, f: usize, v: usize) -> Option<usize> {
        self.face_loops(f).into_iter().find(|&l| self.loops[l].v == v)
    }

    /// The loop of face `f` whose edge is the face's *other* edge at
    /// vertex `v` (not `e`). `e` must be used by `f` and touch `v`.
    pub fn other_edge_loop(&self, f: usize, e: usize, v: usize) -> Result<usize, MeshError> {
        if !self.edges[e].has_vert(v) {
            return Err(MeshError::VertexNotInFace { face: f, vertex: v });
        }
        let l = self
            .face_loops(f)
            .into_iter()
            .find(|&l| self.loops[l].e == e)
            .ok_or(MeshError::EdgeNotInFace { face: f, edge: e })?;
        Ok(if self.loops[l].v == v {
            self.loops[l].prev
        } else {
            self.loops[l].next
        })
    }

    #[inline]
    pub fn edge_other_vert(&self, e: usize, v: usize) -> Option<usize> {
        self.edges[e].other_vert(v)
    }

    /// Loops of the radial cycle around edge `e`.
    pub fn edge_loops(&self, e: usize) -> SmallVec<[usize; 4]> {
        let mut out = SmallVec::new();
        let Some(l0) = self.edges[e].l else { return out };
        let mut l = l0;
        loop {
            out.push(l);
            l = self.loops[l].radial_next;
            if l == l0 {
                break;
            }
        }
        out
    }

    /// Loops originating at vertex `v` (one per incident face corner).
    pub fn loops_of_vert(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut out = SmallVec::new();
        for &e in &self.vertices[v].edges {
            for l in self.edge_loops(e) {
                if self.loops[l].v == v {
                    out.push(l);
                }
            }
        }
        out
    }

    /// Faces incident to vertex `v`, deduplicated.
    pub fn faces_of_vert(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut out: SmallVec<[usize; 8]> = SmallVec::new();
        for l in self.loops_of_vert(v) {
            let f = self.loops[l].f;
            if !out.contains(&f) {
                out.push(f);
            }
        }
        out
    }

    /// Splits face `f` along the chord `va..vb` with one new edge.
    ///
    /// The section reached by walking `next` from `va` to `vb` stays in
    /// `f`; the rest moves to the returned new face. New corner loops
    /// inherit the attributes of the corners they duplicate.
    pub fn face_split(
        &mut self,
        f: usize,
        va: usize,
        vb: usize,
    ) -> Result<(usize, usize), MeshError> {
        if va == vb {
            return Err(MeshError::BadSplit);
        }
        let la = self
            .face_loop_of_vert(f, va)
            .ok_or(MeshError::VertexNotInFace { face: f, vertex: va })?;
        let lb = self
            .face_loop_of_vert(f, vb)
            .ok_or(MeshError::VertexNotInFace { face: f, vertex: vb })?;
        if self.loops[la].next == lb
            || self.loops[lb].next == la
            || self.faces[f].len < 4
        {
            return Err(MeshError::BadSplit);
        }

        // walk distances from la to lb and back
        let mut len_a = 0;
        let mut l = la;
        while l != lb {
            l = self.loops[l].next;
            len_a += 1;
        }
        let len_b = self.faces[f].len - len_a;

        let e_new = self.ensure_edge(va, vb);

        let la_prev = self.loops[la].prev;
        let lb_prev = self.loops[lb].prev;

        // closing loop of the kept side: corner vb, chord back to va
        let nl_a = self.loops.len();
        let mut new_a = Loop::new(vb, e_new, f);
        new_a.data = self.loops[lb].data;
        self.loops.push(new_a);

        // closing loop of the new side: corner va
        let nf = self.faces.len();
        let nl_b = self.loops.len();
        let mut new_b = Loop::new(va, e_new, nf);
        new_b.data = self.loops[la].data;
        self.loops.push(new_b);

        // stitch kept side: la .. lb_prev, nl_a
        self.loops[lb_prev].next = nl_a;
        self.loops[nl_a].prev = lb_prev;
        self.loops[nl_a].next = la;
        self.loops[la].prev = nl_a;

        // stitch new side: lb .. la_prev, nl_b
        self.loops[la_prev].next = nl_b;
        self.loops[nl_b].prev = la_prev;
        self.loops[nl_b].next = lb;
        self.loops[lb].prev = nl_b;

        self.faces[f].l_first = la;
        self.faces[f].len = len_a + 1;

        let mut face_b = Face::new(lb, len_b + 1);
        face_b.normal = self.faces[f].normal;
        face_b.select = self.faces[f].select;
        face_b.hide = self.faces[f].hide;
        self.faces.push(face_b);

        let mut l = lb;
        for _ in 0..len_b + 1 {
            self.loops[l].f = nf;
            l = self.loops[l].next;
        }

        self.radial_insert(nl_a);
        self.radial_insert(nl_b);

        Ok((nf, e_new))
    }

    /// Duplicates face `f` onto brand-new vertices and edges, copying
    /// positions and corner attributes. The copy comes back hidden and
    /// deselected, as do its private verts and edges.
    pub fn face_copy(&mut self, f: usize) -> Result<usize, MeshError> {
        let src_loops = self.face_loops(f);
        let mut new_verts: SmallVec<[usize; 8]> = SmallVec::with_capacity(src_loops.len());
        for &l in &src_loops {
            let position = self.vertices[self.loops[l].v].position;
            let nv = self.add_vertex(position);
            self.vertices[nv].hide = true;
            new_verts.push(nv);
        }

        let nf = self.add_face(&new_verts)?;
        self.faces[nf].hide = true;
        self.faces[nf].normal = self.faces[f].normal;

        let dst_loops = self.face_loops(nf);
        for (&src, &dst) in src_loops.iter().zip(dst_loops.iter()) {
            self.loops[dst].data = self.loops[src].data;
            self.edges[self.loops[dst].e].hide = true;
        }
        Ok(nf)
    }

    /// Kills face `f` together with every vertex and edge that becomes
    /// unused by it, the teardown for copies owning private geometry.
    /// Entities still used by other faces survive.
    pub fn face_verts_kill(&mut self, f: usize) {
        let loops = self.face_loops(f);

        let mut verts: SmallVec<[usize; 8]> = SmallVec::new();
        let mut edges: SmallVec<[usize; 8]> = SmallVec::new();
        for &l in &loops {
            verts.push(self.loops[l].v);
            edges.push(self.loops[l].e);
        }

        for &l in &loops {
            self.radial_remove(l);
            self.loops[l].removed = true;
        }
        self.faces[f].removed = true;

        for &e in &edges {
            if self.edges[e].l.is_none() && !self.edges[e].removed {
                self.edges[e].removed = true;
                let (v0, v1) = (self.edges[e].v0, self.edges[e].v1);
                self.vertices[v0].edges.retain(|&mut x| x != e);
                self.vertices[v1].edges.retain(|&mut x| x != e);
                self.edge_map.remove(&Edge::key(v0, v1));
            }
        }
        for &v in &verts {
            if self.vertices[v].edges.is_empty() {
                self.vertices[v].removed = true;
            }
        }
    }

    /// Live (non-tombstoned) face handles.
    pub fn live_faces(&self) -> Vec<usize> {
        (0..self.faces.len())
            .filter(|&f| !self.faces[f].removed)
            .collect()
    }
}

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}
