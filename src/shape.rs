// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// The `(rows, cols)` extents of a two-dimensional array.
///
/// `Shape` is a pure value type; a default-constructed shape (`0 × 0`) is
/// the canonical null shape. Reassigning an array's shape (`reshape`)
/// produces a new `Shape` value, it never mutates a shared one.
///
/// ```
/// use dense2d::Shape;
///
/// let s = Shape::new(2, 3);
/// assert_eq!(s.size(), 6);
/// assert!(!s.is_square());
/// assert!(Shape::default().is_null());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape
{
    pub rows: usize,
    pub cols: usize,
}

impl Shape
{
    /// Create a shape with the given extents.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Shape
    {
        Shape { rows, cols }
    }

    /// Create a square `n × n` shape.
    #[inline]
    pub fn square(n: usize) -> Shape
    {
        Shape { rows: n, cols: n }
    }

    /// Total number of elements, `rows * cols`.
    ///
    /// No overflow checking beyond the width of `usize`.
    #[inline]
    pub fn size(&self) -> usize
    {
        self.rows * self.cols
    }

    /// Return `true` for the default `0 × 0` shape.
    #[inline]
    pub fn is_null(&self) -> bool
    {
        self.rows == 0 && self.cols == 0
    }

    /// Return `true` if `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool
    {
        self.rows == self.cols
    }

    /// The shape with rows and cols swapped.
    #[inline]
    pub(crate) fn transposed(&self) -> Shape
    {
        Shape { rows: self.cols, cols: self.rows }
    }
}

impl From<(usize, usize)> for Shape
{
    #[inline]
    fn from((rows, cols): (usize, usize)) -> Shape
    {
        Shape { rows, cols }
    }
}

impl fmt::Display for Shape
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}
