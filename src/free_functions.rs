// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Factory functions.

use num_traits::{Float, One, Zero};

use crate::error::{ArrayError, Result};
use crate::linspace::linspace_iter;
use crate::{Element, NdArray, Shape};

/// An array of the given shape, filled with zeros.
pub fn zeros<A>(shape: Shape) -> NdArray<A>
where A: Element + Zero
{
    NdArray::from_elem(shape, A::zero())
}

/// An array of the given shape, filled with ones.
pub fn ones<A>(shape: Shape) -> NdArray<A>
where A: Element + One
{
    NdArray::from_elem(shape, A::one())
}

/// An array of the given shape, filled with `value`.
pub fn full<A>(shape: Shape, value: A) -> NdArray<A>
where A: Element
{
    NdArray::from_elem(shape, value)
}

/// An array of the given shape, filled with NaN.
pub fn nans<A>(shape: Shape) -> NdArray<A>
where A: Element + Float
{
    NdArray::from_elem(shape, A::nan())
}

/// The `n × n` identity array.
///
/// ```
/// use dense2d::eye;
///
/// let i: dense2d::NdArray<f64> = eye(2);
/// assert_eq!(i.to_vec(), vec![1., 0., 0., 1.]);
/// ```
pub fn eye<A>(n: usize) -> NdArray<A>
where A: Element + Zero + One
{
    eye_shaped(n, n, 0)
}

/// A `rows × cols` array with ones on the `k`-th diagonal.
///
/// Positive `k` shifts the diagonal above the main one, negative below.
pub fn eye_shaped<A>(rows: usize, cols: usize, k: isize) -> NdArray<A>
where A: Element + Zero + One
{
    let mut v = vec![A::zero(); rows * cols];
    for r in 0..rows {
        let c = r as isize + k;
        if c >= 0 && (c as usize) < cols {
            v[r * cols + c as usize] = A::one();
        }
    }
    NdArray::from_parts(Shape::new(rows, cols), crate::data_repr::Buffer::from_vec(v))
}

/// Evenly stepped values in `[start, stop)` as a `1 × n` row vector.
///
/// **Errors** if `step` is zero or points away from `stop`.
pub fn arange<A>(start: A, stop: A, step: A) -> Result<NdArray<A>>
where A: Element + Zero + PartialOrd + std::ops::Add<Output = A>
{
    let zero = A::zero();
    if step == zero {
        return Err(ArrayError::invalid_argument("arange: step must be nonzero."));
    }
    if (step > zero && stop < start) || (step < zero && stop > start) {
        return Err(ArrayError::invalid_argument(
            "arange: step sign points away from stop.",
        ));
    }
    let mut v = Vec::new();
    let mut x = start;
    if step > zero {
        while x < stop {
            v.push(x);
            x = x + step;
        }
    } else {
        while x > stop {
            v.push(x);
            x = x + step;
        }
    }
    Ok(NdArray::from_vec(v))
}

/// `n` evenly spaced values from `a` to `b` inclusive, as a `1 × n` row
/// vector.
///
/// ```
/// use dense2d::linspace;
///
/// let a = linspace(0., 1., 5);
/// assert_eq!(a.to_vec(), vec![0., 0.25, 0.5, 0.75, 1.]);
/// ```
pub fn linspace<A>(a: A, b: A, n: usize) -> NdArray<A>
where A: Element + Float
{
    linspace_iter(a, b, n).collect()
}

/// A `1 × n` row vector copied from a slice.
pub fn arr1<A>(xs: &[A]) -> NdArray<A>
where A: Element
{
    NdArray::from_slice(xs)
}

/// A two-dimensional array copied from nested fixed-size rows.
///
/// ```
/// use dense2d::{arr2, Shape};
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert_eq!(a.shape(), Shape::new(2, 3));
/// ```
pub fn arr2<A, const N: usize>(xs: &[[A; N]]) -> NdArray<A>
where A: Element
{
    let v: Vec<A> = xs.iter().flat_map(|row| row.iter().copied()).collect();
    NdArray::from_parts(Shape::new(xs.len(), N), crate::data_repr::Buffer::from_vec(v))
}
