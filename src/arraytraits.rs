// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Element, NdArray};

/// Arrays are equal when both shape and every element agree.
impl<A: Element> PartialEq for NdArray<A>
{
    fn eq(&self, rhs: &NdArray<A>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().eq(rhs.iter())
    }
}

impl<A: Element + Eq> Eq for NdArray<A> {}

/// Collect into a `1 × n` row vector.
impl<A: Element> FromIterator<A> for NdArray<A>
{
    fn from_iter<I>(iterable: I) -> NdArray<A>
    where I: IntoIterator<Item = A>
    {
        NdArray::from_vec(iterable.into_iter().collect())
    }
}

/// A vector becomes a `1 × n` row vector without copying.
impl<A: Element> From<Vec<A>> for NdArray<A>
{
    fn from(v: Vec<A>) -> NdArray<A>
    {
        NdArray::from_vec(v)
    }
}

impl<A: Element> Default for NdArray<A>
{
    /// The empty array with the null shape.
    fn default() -> NdArray<A>
    {
        NdArray::new(crate::Shape::default())
    }
}
