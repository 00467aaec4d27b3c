// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for `NdArray`.

use crate::data_repr::Buffer;
use crate::error::{ArrayError, Result};
use crate::{Element, NdArray, Shape};

impl<A: Element> NdArray<A>
{
    /// Create an array of the given shape, filled with the element
    /// type's default value.
    pub fn new(shape: Shape) -> NdArray<A>
    {
        NdArray::from_parts(shape, Buffer::with_len(shape.size()))
    }

    /// Create a `1 × n` row vector filled with the default value.
    pub fn with_size(n: usize) -> NdArray<A>
    {
        NdArray::new(Shape::new(1, n))
    }

    /// Create an array of the given shape with every element set to
    /// `elem`.
    pub fn from_elem(shape: Shape, elem: A) -> NdArray<A>
    {
        NdArray::from_parts(shape, Buffer::from_vec(vec![elem; shape.size()]))
    }

    /// Create an array with the given shape from a flat, row-major
    /// vector.
    ///
    /// **Errors** if the vector length does not equal `shape.size()`.
    pub fn from_shape_vec(shape: Shape, v: Vec<A>) -> Result<NdArray<A>>
    {
        if v.len() != shape.size() {
            return Err(ArrayError::invalid_argument(format!(
                "cannot place {} elements into shape {}.",
                v.len(),
                shape
            )));
        }
        Ok(NdArray::from_parts(shape, Buffer::from_vec(v)))
    }

    /// Create a `1 × n` row vector from a vector; no copy is made.
    pub fn from_vec(v: Vec<A>) -> NdArray<A>
    {
        let shape = Shape::new(1, v.len());
        NdArray::from_parts(shape, Buffer::from_vec(v))
    }

    /// Create a `1 × n` row vector by copying a slice.
    pub fn from_slice(s: &[A]) -> NdArray<A>
    {
        NdArray::from_vec(s.to_vec())
    }

    /// Create a two-dimensional array from rows.
    ///
    /// **Errors** if the rows are not all of the same length.
    pub fn from_slices(rows: &[&[A]]) -> Result<NdArray<A>>
    {
        match rows.first().map(|r| r.len()) {
            None => Ok(NdArray::new(Shape::default())),
            Some(n) => {
                if rows.iter().any(|r| r.len() != n) {
                    return Err(ArrayError::invalid_argument(
                        "rows must all have the same length.",
                    ));
                }
                let v: Vec<A> = rows.iter().flat_map(|r| r.iter().copied()).collect();
                NdArray::from_shape_vec(Shape::new(rows.len(), n), v)
            }
        }
    }
}
