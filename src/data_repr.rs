// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Element;

/// Reference-counted storage for array elements.
///
/// A `Buffer` is a contiguous, type-homogeneous block shared between every
/// array handle cloned from the same source. [`Buffer::share`] bumps the
/// reference count; [`Buffer::deep_copy`] allocates a fresh block. Element
/// access is by value (`Element` is `Copy`), mutation through any sharer
/// is visible to all sharers.
///
/// The count is a plain `Rc`: the whole container is single-threaded by
/// design and carries no internal synchronization.
pub struct Buffer<A>
{
    data: Rc<RefCell<Vec<A>>>,
}

impl<A: Element> Buffer<A>
{
    pub(crate) fn from_vec(v: Vec<A>) -> Buffer<A>
    {
        Buffer { data: Rc::new(RefCell::new(v)) }
    }

    pub(crate) fn with_len(n: usize) -> Buffer<A>
    {
        Buffer::from_vec(vec![A::default(); n])
    }

    pub(crate) fn len(&self) -> usize
    {
        self.data.borrow().len()
    }

    /// A new handle onto the same block; O(1).
    pub(crate) fn share(&self) -> Buffer<A>
    {
        Buffer { data: Rc::clone(&self.data) }
    }

    /// A new block holding a copy of every element.
    pub(crate) fn deep_copy(&self) -> Buffer<A>
    {
        Buffer::from_vec(self.to_vec())
    }

    /// Number of live handles onto this block.
    pub(crate) fn share_count(&self) -> usize
    {
        Rc::strong_count(&self.data)
    }

    /// Read element `i`. Callers bounds-check first.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> A
    {
        self.data.borrow()[i]
    }

    /// Write element `i`. Callers bounds-check first.
    #[inline]
    pub(crate) fn set(&self, i: usize, value: A)
    {
        self.data.borrow_mut()[i] = value;
    }

    pub(crate) fn to_vec(&self) -> Vec<A>
    {
        self.data.borrow().clone()
    }

    /// Bulk read access. The borrow lasts only for the closure.
    #[inline]
    pub(crate) fn with<R>(&self, f: impl FnOnce(&[A]) -> R) -> R
    {
        f(&self.data.borrow())
    }

    /// Bulk write access. The borrow lasts only for the closure.
    #[inline]
    pub(crate) fn with_mut<R>(&self, f: impl FnOnce(&mut [A]) -> R) -> R
    {
        f(&mut self.data.borrow_mut())
    }
}

impl<A: Element + std::fmt::Debug> std::fmt::Debug for Buffer<A>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("shares", &self.share_count())
            .finish()
    }
}

#[cfg(test)]
mod tests
{
    use super::Buffer;

    #[test]
    fn share_aliases_deep_copy_isolates()
    {
        let a = Buffer::from_vec(vec![1, 2, 3]);
        let b = a.share();
        assert_eq!(a.share_count(), 2);
        b.set(0, 9);
        assert_eq!(a.get(0), 9);

        let c = a.deep_copy();
        c.set(1, 7);
        assert_eq!(a.get(1), 2);
        assert_eq!(c.share_count(), 1);
    }
}
