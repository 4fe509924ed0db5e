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
use std::ops::{Add, Index, IndexMut, Sub};

use crate::geometry::vector::{Vector, VectorOps};
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    type Vector;

    fn as_vector(&self) -> Self::Vector;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn midpoint(&self, other: &Self) -> Self;
    fn distance_to(&self, other: &Self) -> T;
    fn distance_squared_to(&self, other: &Self) -> T;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    #[inline]
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    type Vector = Vector<T, N>;

    #[inline]
    fn as_vector(&self) -> Vector<T, N> {
        Vector {
            coords: self.coords,
        }
    }

    #[inline]
    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector {
            coords: from_fn(|i| other.coords[i] - self.coords[i]),
        }
    }

    #[inline]
    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i] + v.coords[i]),
        }
    }

    #[inline]
    fn midpoint(&self, other: &Self) -> Self {
        Self {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]).half()),
        }
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> T {
        self.vector_to(other).norm()
    }

    #[inline]
    fn distance_squared_to(&self, other: &Self) -> T {
        self.vector_to(other).norm_squared()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn sub(self, rhs: Self) -> Vector<T, N> {
        rhs.vector_to(&self)
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector<T, N>) -> Self {
        self.add_vector(&rhs)
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vector<T, N>) -> Self {
        Self {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}
