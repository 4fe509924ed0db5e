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

//! Transform-mode interface: explicit configuration, a per-mode trait
//! and a tagged dispatch enum.

use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;
use crate::slide::state::{SlideError, SlideState, ViewProject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceKind {
    #[default]
    Global,
    Local,
    View,
}

/// Everything a transform mode is allowed to know about its
/// surroundings, passed explicitly at init.
#[derive(Debug, Clone)]
pub struct TransformConfig<T: Scalar> {
    pub space: SpaceKind,
    /// Snap the input ratio to multiples of this when set.
    pub snap_increment: Option<T>,
    /// Per-axis constraint flags. Edge slide ignores them (the rail is
    /// the constraint) but other modes consume them.
    pub constraint: [bool; 3],
    /// Proportional-edit falloff radius, where a mode supports it.
    pub proportional_size: Option<T>,
}

impl<T: Scalar> Default for TransformConfig<T> {
    fn default() -> Self {
        Self {
            space: SpaceKind::Global,
            snap_increment: None,
            constraint: [false; 3],
            proportional_size: None,
        }
    }
}

/// Modal input while a gesture runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformEvent {
    ToggleEven,
    ToggleFlipped,
    NextControlVert,
    PrevControlVert,
}

/// One interactive transform mode. `step` runs once per input sample;
/// `finish` commits or cancels and consumes the mode.
pub trait TransformMode<T: Scalar>: Sized {
    fn init(
        mesh: &mut Mesh<T>,
        config: TransformConfig<T>,
        view: &dyn ViewProject<T>,
        cursor: [T; 2],
    ) -> Result<Self, SlideError>;

    fn step(&mut self, mesh: &mut Mesh<T>, value: T) -> Result<(), SlideError>;

    fn handle_event(&mut self, mesh: &mut Mesh<T>, event: TransformEvent)
        -> Result<(), SlideError>;

    fn finish(self, mesh: &mut Mesh<T>, commit: bool) -> Result<(), SlideError>;
}

/// Interactive edge slide as a transform mode.
#[derive(Debug)]
pub struct EdgeSlide<T: Scalar> {
    pub state: SlideState<T>,
    config: TransformConfig<T>,
    value: T,
}

impl<T: Scalar> TransformMode<T> for EdgeSlide<T> {
    fn init(
        mesh: &mut Mesh<T>,
        config: TransformConfig<T>,
        view: &dyn ViewProject<T>,
        cursor: [T; 2],
    ) -> Result<Self, SlideError> {
        let state = SlideState::build(mesh, view, cursor)?;
        Ok(Self {
            state,
            config,
            value: T::zero(),
        })
    }

    /// Snaps `value` to the configured increment, clamps to `[-1, 1]`
    /// and applies.
    fn step(&mut self, mesh: &mut Mesh<T>, value: T) -> Result<(), SlideError> {
        let mut value = value;
        if let Some(inc) = self.config.snap_increment {
            if inc > T::zero() {
                value = (value / inc).round() * inc;
            }
        }
        value = value.max(-T::one()).min(T::one());
        self.value = value;
        self.state.apply(mesh, value)
    }

    fn handle_event(
        &mut self,
        mesh: &mut Mesh<T>,
        event: TransformEvent,
    ) -> Result<(), SlideError> {
        match event {
            TransformEvent::ToggleEven => self.state.use_even = !self.state.use_even,
            TransformEvent::ToggleFlipped => self.state.flipped = !self.state.flipped,
            TransformEvent::NextControlVert => {
                self.state.curr_sv = (self.state.curr_sv + 1) % self.state.verts.len();
            }
            TransformEvent::PrevControlVert => {
                let n = self.state.verts.len();
                self.state.curr_sv = (self.state.curr_sv + n - 1) % n;
            }
        }
        // modal state feeds the position formula, so re-apply
        self.state.apply(mesh, self.value)
    }

    fn finish(self, mesh: &mut Mesh<T>, commit: bool) -> Result<(), SlideError> {
        if commit {
            self.state.commit(mesh);
            Ok(())
        } else {
            self.state.cancel(mesh)
        }
    }
}

/// Tagged dispatch over the available modes. Edge slide is the only one
/// here; other modes plug in as further variants.
#[derive(Debug)]
pub enum Transform<T: Scalar> {
    EdgeSlide(EdgeSlide<T>),
}

impl<T: Scalar> Transform<T> {
    pub fn edge_slide(
        mesh: &mut Mesh<T>,
        config: TransformConfig<T>,
        view: &dyn ViewProject<T>,
        cursor: [T; 2],
    ) -> Result<Self, SlideError> {
        Ok(Self::EdgeSlide(EdgeSlide::init(mesh, config, view, cursor)?))
    }

    pub fn step(&mut self, mesh: &mut Mesh<T>, value: T) -> Result<(), SlideError> {
        match self {
            Self::EdgeSlide(m) => m.step(mesh, value),
        }
    }

    pub fn handle_event(
        &mut self,
        mesh: &mut Mesh<T>,
        event: TransformEvent,
    ) -> Result<(), SlideError> {
        match self {
            Self::EdgeSlide(m) => m.handle_event(mesh, event),
        }
    }

    pub fn finish(self, mesh: &mut Mesh<T>, commit: bool) -> Result<(), SlideError> {
        match self {
            Self::EdgeSlide(m) => m.finish(mesh, commit),
        }
    }
}
