// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{Range, RangeTo};

use crate::error::{ArrayError, Result};

/// A `start/stop/step` range over one array axis.
///
/// Negative `start` or `stop` count from the back of the axis, python
/// style. A `Slice` is a plain value; it is validated against a concrete
/// axis length by [`Slice::normalized`], which is where all error
/// reporting happens.
///
/// ```
/// use dense2d::Slice;
///
/// // every element up to index 4
/// let s = Slice::to(4);
/// // elements 1, 3 of an axis
/// let s2 = Slice::new(1, 5, 2);
/// assert_eq!(s2.num_elements(6).unwrap(), 2);
/// assert_eq!(s, Slice::from(..4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice
{
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl Slice
{
    /// Create a slice with the given extents and step.
    #[inline]
    pub fn new(start: isize, stop: isize, step: isize) -> Slice
    {
        Slice { start, stop, step }
    }

    /// The slice `[0, stop)` with step 1.
    #[inline]
    pub fn to(stop: isize) -> Slice
    {
        Slice { start: 0, stop, step: 1 }
    }

    /// The slice `[start, stop)` with step 1.
    #[inline]
    pub fn range(start: isize, stop: isize) -> Slice
    {
        Slice { start, stop, step: 1 }
    }

    /// Resolve this slice against an axis of length `len`.
    ///
    /// Negative `start`/`stop` have `len` added to them. After
    /// conversion, `start` must lie in `[0, len)` and `stop` in
    /// `[0, len]`, otherwise this is an invalid-argument error.
    ///
    /// Direction handling over the four sign combinations:
    ///
    /// * `start < stop` with `step < 0` — error.
    /// * `stop < start` with `step > 0` — error.
    /// * `stop < start` with `step < 0` — auto-corrected by swapping
    ///   `start`/`stop` and negating `step`, so that the normalized slice
    ///   always iterates forward. Reversed bounds therefore select the
    ///   same elements as the corresponding forward slice; they do not
    ///   reverse the element order.
    ///
    /// After `Ok`, `step > 0` and stepping `start, start + step, ...`
    /// while `< stop` visits exactly [`Slice::num_elements`] indices.
    pub fn normalized(mut self, len: usize) -> Result<Slice>
    {
        if self.step == 0 {
            return Err(ArrayError::invalid_argument("slice step must be nonzero."));
        }
        let ilen = len as isize;
        if self.start < 0 {
            self.start += ilen;
        }
        if self.start < 0 || self.start > ilen - 1 {
            return Err(ArrayError::invalid_argument(format!(
                "invalid slice start value for array of size {}.",
                len
            )));
        }
        if self.stop < 0 {
            self.stop += ilen;
        }
        if self.stop < 0 || self.stop > ilen {
            return Err(ArrayError::invalid_argument(format!(
                "invalid slice stop value for array of size {}.",
                len
            )));
        }

        if self.start < self.stop && self.step < 0 {
            return Err(ArrayError::invalid_argument("invalid slice values."));
        }
        if self.stop < self.start {
            if self.step > 0 {
                return Err(ArrayError::invalid_argument("invalid slice values."));
            }
            std::mem::swap(&mut self.start, &mut self.stop);
            self.step = -self.step;
        }
        Ok(self)
    }

    /// Number of indices this slice selects on an axis of length `len`.
    ///
    /// Normalizes first; all of [`Slice::normalized`]'s error cases apply.
    pub fn num_elements(self, len: usize) -> Result<usize>
    {
        let norm = self.normalized(len)?;
        let mut num = 0;
        let mut i = norm.start;
        while i < norm.stop {
            num += 1;
            i += norm.step;
        }
        Ok(num)
    }

    /// The concrete indices selected on an axis of length `len`.
    pub(crate) fn indices(self, len: usize) -> Result<Vec<usize>>
    {
        let norm = self.normalized(len)?;
        let mut out = Vec::new();
        let mut i = norm.start;
        while i < norm.stop {
            out.push(i as usize);
            i += norm.step;
        }
        Ok(out)
    }
}

impl From<Range<isize>> for Slice
{
    #[inline]
    fn from(r: Range<isize>) -> Slice
    {
        Slice { start: r.start, stop: r.end, step: 1 }
    }
}

impl From<RangeTo<isize>> for Slice
{
    #[inline]
    fn from(r: RangeTo<isize>) -> Slice
    {
        Slice { start: 0, stop: r.end, step: 1 }
    }
}

impl fmt::Display for Slice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[{}:{}:{}]", self.start, self.stop, self.step)
    }
}
