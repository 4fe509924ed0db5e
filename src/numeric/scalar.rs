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

use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign, SubAssign};

use num_traits::Float;

/// Scalar the whole kernel is generic over.
///
/// Every geometric predicate in this crate is an epsilon-guarded float
/// test, so the trait is backed by `num_traits::Float` rather than an
/// exact number type. `tolerance()` is the per-type epsilon used by the
/// predicates.
pub trait Scalar:
    Float + Debug + Default + AddAssign + SubAssign + MulAssign + 'static
{
    fn tolerance() -> Self;

    /// Lossy conversion from `f64`, for the kernel's built-in constants.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn half(self) -> Self {
        self / Self::from_f64(2.0)
    }
}

impl Scalar for f64 {
    #[inline]
    fn tolerance() -> f64 {
        1e-10
    }

    #[inline]
    fn from_f64(value: f64) -> f64 {
        value
    }
}

impl Scalar for f32 {
    #[inline]
    fn tolerance() -> f32 {
        1e-6
    }

    #[inline]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}
