// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `dense2d` crate provides [`NdArray`], a dense, row-major,
//! two-dimensional numeric container with python-style slicing,
//! elementwise arithmetic, and axis-wise reductions.
//!
//! ## Highlights
//!
//! - [`Shape`] and [`Slice`] value types; slices normalize negative,
//!   python-style bounds.
//! - Storage is a reference-counted buffer: cloning an array is O(1) and
//!   shares elements, [`NdArray::copy`] makes the deep copy explicit.
//!   Mutation through any sharer is visible to all sharers.
//! - Slicing an array always copies the selected region; there are no
//!   borrowing views to dangle.
//! - Reductions take a tri-state [`Axis`]: the whole array, one value per
//!   row, or one value per column. Rank is fixed at two.
//! - Binary operators require equal shapes; the only broadcasting is
//!   array ⊕ scalar.
//!
//! ```
//! use dense2d::{arr2, Axis};
//!
//! let a = arr2(&[[1., 2., 3.],
//!                [4., 5., 6.]]);
//! assert_eq!(a.sum(Axis::None).item().unwrap(), 21.);
//! assert_eq!(a.sum(Axis::Col).to_vec(), vec![6., 15.]);
//! assert_eq!(a.sum(Axis::Row), a.transpose().sum(Axis::Col));
//! ```
//!
//! ## Crate feature flags
//!
//! - `approx`: implement the `approx` crate's comparison traits for
//!   `NdArray`.

use crate::data_repr::Buffer;

pub use crate::error::{ArrayError, ErrorKind, Result};
pub use crate::free_functions::{arange, arr1, arr2, eye, eye_shaped, full, linspace, nans, ones,
                                zeros};
pub use crate::functions::{add, append, average, average_weighted, bincount, bincount_weighted,
                           cross, diff, divide, dot, gcd, interp, lcm, multiply, percentile,
                           subtract};
pub use crate::impl_numeric::InterpolationMethod;
pub use crate::io::{fromfile, load};
pub use crate::iterators::Iter;
pub use crate::shape::Shape;
pub use crate::slice::Slice;

#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
pub mod datacube;
mod error;
mod free_functions;
mod functions;
mod impl_constructors;
mod impl_methods;
mod impl_numeric;
mod impl_ops;
mod io;
mod iterators;
mod linspace;
mod shape;
mod slice;

pub use crate::datacube::DataCube;

/// Elements that can be stored in an [`NdArray`].
///
/// This is the container's dtype constraint, checked at compile time:
/// an element must be plain data — default-constructible, trivially
/// copyable, comparable and `'static` (which rules out references and
/// borrowed pointers). Numeric capability is not part of the constraint;
/// individual operations add `num_traits` bounds as needed, so masks of
/// `bool` are arrays too.
pub trait Element: Copy + Default + PartialEq + 'static {}

impl<A> Element for A where A: Copy + Default + PartialEq + 'static {}

/// The axis over which a reduction collapses an array.
///
/// Rank is fixed at two, so the axis is a tri-state rather than an index:
///
/// - [`Axis::None`]: collapse the whole array to a `1 × 1` result.
/// - [`Axis::Col`]: reduce along each row, producing `1 × rows`.
/// - [`Axis::Row`]: reduce along each column, producing `1 × cols`.
///
/// Reducing over [`Axis::Row`] is defined as reducing the transpose over
/// [`Axis::Col`]; every reduction in the crate preserves that
/// equivalence in output shape and element order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis
{
    None,
    Row,
    Col,
}

/// A dense, row-major two-dimensional array.
///
/// An `NdArray` owns a [`Shape`] and a handle onto a reference-counted
/// storage buffer. `Clone` is an O(1) share of the buffer; mutating
/// through one handle is visible through every other handle until an
/// explicit [`NdArray::copy`]. The invariant `buffer length ==
/// shape.size()` holds after every completed operation.
///
/// ```
/// use dense2d::NdArray;
///
/// let a = NdArray::from_vec(vec![1, 2, 3, 4]);
/// let mut b = a.clone(); // shares storage
/// b.set_flat(0, 9).unwrap();
/// assert_eq!(a.at_flat(0).unwrap(), 9);
///
/// let mut c = a.copy(); // owns its own storage
/// c.set_flat(1, 7).unwrap();
/// assert_eq!(a.at_flat(1).unwrap(), 2);
/// ```
pub struct NdArray<A: Element>
{
    shape: Shape,
    data: Buffer<A>,
}

impl<A: Element> Clone for NdArray<A>
{
    /// Share the storage buffer; O(1). Use [`NdArray::copy`] for a deep
    /// copy.
    fn clone(&self) -> NdArray<A>
    {
        NdArray {
            shape: self.shape,
            data: self.data.share(),
        }
    }
}

impl<A: Element> NdArray<A>
{
    /// The array's shape.
    #[inline]
    pub fn shape(&self) -> Shape
    {
        self.shape
    }

    /// Total number of elements.
    #[inline]
    pub fn size(&self) -> usize
    {
        self.shape.size()
    }

    /// Return `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.size() == 0
    }

    /// Number of array handles (including this one) sharing the storage
    /// buffer.
    #[inline]
    pub fn share_count(&self) -> usize
    {
        self.data.share_count()
    }

    pub(crate) fn from_parts(shape: Shape, data: Buffer<A>) -> NdArray<A>
    {
        debug_assert_eq!(shape.size(), data.len());
        NdArray { shape, data }
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &Buffer<A>
    {
        &self.data
    }
}

/// Commonly used items, for glob import.
pub mod prelude
{
    pub use crate::{arr1, arr2, arange, eye, full, linspace, ones, zeros};
    pub use crate::{ArrayError, Axis, ErrorKind, NdArray, Shape, Slice};
    pub use crate::InterpolationMethod;
}
