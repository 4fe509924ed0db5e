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

use std::array::from_fn;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm_squared(&self) -> T;
    fn norm(&self) -> T;
    /// Normalize in place, returning the former length. A vector shorter
    /// than the scalar tolerance is zeroed and reports length zero.
    fn normalize(&mut self) -> T;
    fn normalized(&self) -> Self;
    fn scale(&self, factor: T) -> Self;
}

/// Cross product, only meaningful in 3-D.
pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| *c == T::zero())
    }

    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]).half()),
        }
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N> {
    #[inline]
    fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.coords[i] * other.coords[i];
        }
        acc
    }

    #[inline]
    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalize(&mut self) -> T {
        let n = self.norm();
        if n < T::tolerance() {
            *self = Self::zero();
            return T::zero();
        }
        for c in &mut self.coords {
            *c = *c / n;
        }
        n
    }

    #[inline]
    fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    #[inline]
    fn scale(&self, factor: T) -> Self {
        Self {
            coords: self.coords.map(|c| c * factor),
        }
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    #[inline]
    fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self {
            coords: [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx],
        }
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// 2-D cross product (signed area of the parallelogram).
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            coords: self.coords.map(|c| -c),
        }
    }
}
