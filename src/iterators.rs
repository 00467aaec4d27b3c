// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::data_repr::Buffer;
use crate::{Element, NdArray};

/// An iterator over an array's elements in flat, row-major order.
///
/// Elements are yielded by value; the iterator holds its own share of the
/// storage buffer, so it stays valid if the originating handle is
/// dropped.
///
/// Iterator element type is `A`.
pub struct Iter<A: Element>
{
    data: Buffer<A>,
    index: usize,
    back: usize,
}

impl<A: Element> Iterator for Iter<A>
{
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A>
    {
        if self.index >= self.back {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.data.get(i))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let n = self.back - self.index;
        (n, Some(n))
    }
}

impl<A: Element> DoubleEndedIterator for Iter<A>
{
    #[inline]
    fn next_back(&mut self) -> Option<A>
    {
        if self.index >= self.back {
            None
        } else {
            self.back -= 1;
            Some(self.data.get(self.back))
        }
    }
}

impl<A: Element> ExactSizeIterator for Iter<A> {}

impl<A: Element> NdArray<A>
{
    /// Iterate over all elements in flat, row-major order.
    pub fn iter(&self) -> Iter<A>
    {
        Iter {
            data: self.buffer().share(),
            index: 0,
            back: self.size(),
        }
    }

    /// Iterate over `((row, col), element)` pairs in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), A)>
    {
        let cols = self.shape().cols;
        self.iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }
}

impl<A: Element> IntoIterator for &NdArray<A>
{
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A>
    {
        self.iter()
    }
}
