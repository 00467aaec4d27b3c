// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A homogeneous sequence of same-shaped arrays.

use std::path::Path;

use crate::error::{ArrayError, Result};
use crate::io::as_bytes;
use crate::{Element, NdArray, Shape};

/// An ordered collection of equal-shaped [`NdArray`]s.
///
/// The first pushed array fixes the element shape; later pushes must
/// match it. [`DataCube::dump`] persists the whole sequence to one
/// binary file by concatenating each array's raw buffer in order — the
/// same headerless-format caveat as [`NdArray::dump`] applies.
#[derive(Clone, Default)]
pub struct DataCube<A: Element>
{
    frames: Vec<NdArray<A>>,
}

impl<A: Element> DataCube<A>
{
    /// An empty cube; the element shape is fixed by the first push.
    pub fn new() -> DataCube<A>
    {
        DataCube { frames: Vec::new() }
    }

    /// Number of arrays in the cube.
    pub fn len(&self) -> usize
    {
        self.frames.len()
    }

    /// Return `true` if the cube holds no arrays.
    pub fn is_empty(&self) -> bool
    {
        self.frames.is_empty()
    }

    /// The common shape of the stored arrays; the null shape while
    /// empty.
    pub fn shape(&self) -> Shape
    {
        self.frames.first().map(|a| a.shape()).unwrap_or_default()
    }

    /// Append an array.
    ///
    /// **Errors** unless its shape matches the cube's element shape.
    /// The cube stores a shared handle, not a deep copy.
    pub fn push(&mut self, array: NdArray<A>) -> Result<()>
    {
        if !self.is_empty() && array.shape() != self.shape() {
            return Err(ArrayError::invalid_argument(format!(
                "datacube: array shape {} does not match element shape {}.",
                array.shape(),
                self.shape()
            )));
        }
        self.frames.push(array);
        Ok(())
    }

    /// The array at sequence position `i`.
    pub fn at(&self, i: usize) -> Result<&NdArray<A>>
    {
        self.frames.get(i).ok_or_else(|| {
            ArrayError::out_of_bounds(format!(
                "datacube index {} is out of bounds for {} arrays.",
                i,
                self.len()
            ))
        })
    }

    /// Iterate over the stored arrays in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, NdArray<A>>
    {
        self.frames.iter()
    }

    /// Concatenate every array's raw buffer into one headerless binary
    /// file, in sequence order.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()>
    {
        let mut bytes = Vec::new();
        for frame in &self.frames {
            let v = frame.to_vec();
            bytes.extend_from_slice(as_bytes(&v));
        }
        std::fs::write(path.as_ref(), bytes).map_err(|e| {
            ArrayError::io(format!(
                "unable to write {}: {}.",
                path.as_ref().display(),
                e
            ))
        })
    }
}

impl<'a, A: Element> IntoIterator for &'a DataCube<A>
{
    type Item = &'a NdArray<A>;
    type IntoIter = std::slice::Iter<'a, NdArray<A>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
