// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stateless algorithms layered on the public `NdArray` contract.
//!
//! Nothing in this module touches array internals; every function
//! validates its own preconditions up front and fails fast with a
//! descriptive error.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{AsPrimitive, Float, PrimInt, Zero};

use crate::error::{ArrayError, Result};
use crate::impl_numeric::InterpolationMethod;
use crate::{Axis, Element, NdArray, Shape};

fn check_same_shape<A: Element>(a: &NdArray<A>, b: &NdArray<A>, what: &str) -> Result<()>
{
    if a.shape() != b.shape() {
        return Err(ArrayError::invalid_argument(format!(
            "{}: array shapes {} and {} do not match.",
            what,
            a.shape(),
            b.shape()
        )));
    }
    Ok(())
}

/// Elementwise sum of two equal-shaped arrays.
pub fn add<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + Add<Output = A>
{
    check_same_shape(a, b, "add")?;
    Ok(a + b)
}

/// Elementwise difference of two equal-shaped arrays.
pub fn subtract<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + Sub<Output = A>
{
    check_same_shape(a, b, "subtract")?;
    Ok(a - b)
}

/// Elementwise product of two equal-shaped arrays.
pub fn multiply<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + Mul<Output = A>
{
    check_same_shape(a, b, "multiply")?;
    Ok(a * b)
}

/// Elementwise quotient of two equal-shaped arrays.
pub fn divide<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + std::ops::Div<Output = A>
{
    check_same_shape(a, b, "divide")?;
    Ok(a / b)
}

/// Join two arrays.
///
/// - `Axis::None`: flat concatenation into a `1 × (na + nb)` row vector.
/// - `Axis::Row`: stack `b`'s rows below `a`'s; the column counts must
///   agree.
/// - `Axis::Col`: extend every row of `a` with the matching row of `b`;
///   the row counts must agree.
///
/// ```
/// use dense2d::{append, zeros, ones, Axis, Shape};
///
/// let a: dense2d::NdArray<f64> = zeros(Shape::new(2, 3));
/// let b = ones(Shape::new(1, 3));
/// let c = append(&a, &b, Axis::Row).unwrap();
/// assert_eq!(c.shape(), Shape::new(3, 3));
/// assert_eq!(c.row(2).unwrap().to_vec(), vec![1., 1., 1.]);
/// ```
pub fn append<A>(a: &NdArray<A>, b: &NdArray<A>, axis: Axis) -> Result<NdArray<A>>
where A: Element
{
    match axis {
        Axis::None => {
            let mut v = a.to_vec();
            v.extend(b.iter());
            Ok(NdArray::from_vec(v))
        }
        Axis::Row => {
            if a.shape().cols != b.shape().cols {
                return Err(ArrayError::invalid_argument(format!(
                    "append: column counts of {} and {} do not match.",
                    a.shape(),
                    b.shape()
                )));
            }
            let mut v = a.to_vec();
            v.extend(b.iter());
            NdArray::from_shape_vec(
                Shape::new(a.shape().rows + b.shape().rows, a.shape().cols),
                v,
            )
        }
        Axis::Col => {
            if a.shape().rows != b.shape().rows {
                return Err(ArrayError::invalid_argument(format!(
                    "append: row counts of {} and {} do not match.",
                    a.shape(),
                    b.shape()
                )));
            }
            let rows = a.shape().rows;
            let mut v = Vec::with_capacity(a.size() + b.size());
            for r in 0..rows {
                v.extend(a.row(r)?.iter());
                v.extend(b.row(r)?.iter());
            }
            NdArray::from_shape_vec(Shape::new(rows, a.shape().cols + b.shape().cols), v)
        }
    }
}

/// Unweighted average along `axis`; identical to [`NdArray::mean`].
pub fn average<A>(a: &NdArray<A>, axis: Axis) -> NdArray<f64>
where A: Element + AsPrimitive<f64>
{
    a.mean(axis)
}

/// Weighted average along `axis`.
///
/// For `Axis::None` the weights must have the array's shape; for
/// `Axis::Col` one weight per column; for `Axis::Row` one weight per
/// row.
pub fn average_weighted<A>(a: &NdArray<A>, weights: &NdArray<A>, axis: Axis)
    -> Result<NdArray<f64>>
where A: Element + AsPrimitive<f64>
{
    let wf = weights.astype::<f64>();
    let wsum: f64 = wf.iter().sum();
    match axis {
        Axis::None => {
            check_same_shape(a, weights, "average_weighted")?;
            let total: f64 = a.iter().zip(wf.iter()).map(|(x, w)| x.as_() * w).sum();
            Ok(NdArray::from_vec(vec![total / wsum]))
        }
        Axis::Col => {
            if weights.size() != a.shape().cols {
                return Err(ArrayError::invalid_argument(format!(
                    "average_weighted: got {} weights for {} columns.",
                    weights.size(),
                    a.shape().cols
                )));
            }
            let mut v = Vec::with_capacity(a.shape().rows);
            for r in 0..a.shape().rows {
                let total: f64 = a
                    .row(r)?
                    .iter()
                    .zip(wf.iter())
                    .map(|(x, w)| x.as_() * w)
                    .sum();
                v.push(total / wsum);
            }
            Ok(NdArray::from_vec(v))
        }
        Axis::Row => {
            if weights.size() != a.shape().rows {
                return Err(ArrayError::invalid_argument(format!(
                    "average_weighted: got {} weights for {} rows.",
                    weights.size(),
                    a.shape().rows
                )));
            }
            average_weighted(&a.transpose(), weights, Axis::Col)
        }
    }
}

/// Count occurrences of each non-negative value.
///
/// Only integral element types qualify; this is a compile-time
/// constraint. Values are clipped to `[0, max]` first, and the output is
/// at least `min_length` long.
///
/// ```
/// use dense2d::{arr1, bincount};
///
/// let a = arr1(&[0, 1, 1, 2, 2, 2]);
/// assert_eq!(bincount(&a, 0).unwrap().to_vec(), vec![1, 2, 3]);
/// ```
pub fn bincount<A>(a: &NdArray<A>, min_length: usize) -> Result<NdArray<A>>
where A: Element + PrimInt + AsPrimitive<usize>
{
    let max = a.max(Axis::None)?.item()?;
    let max = if max < A::zero() { A::zero() } else { max };
    let out_len = (max.as_() + 1).max(min_length);

    let clipped = a.clip(A::zero(), max);
    let mut counts = vec![A::zero(); out_len];
    for v in clipped.iter() {
        counts[v.as_()] = counts[v.as_()] + A::one();
    }
    Ok(NdArray::from_vec(counts))
}

/// Like [`bincount`], but each occurrence adds its weight instead of
/// one.
///
/// **Errors** unless the weights have the array's shape.
pub fn bincount_weighted<A>(a: &NdArray<A>, weights: &NdArray<A>, min_length: usize)
    -> Result<NdArray<A>>
where A: Element + PrimInt + AsPrimitive<usize>
{
    check_same_shape(a, weights, "bincount_weighted")?;
    let max = a.max(Axis::None)?.item()?;
    let max = if max < A::zero() { A::zero() } else { max };
    let out_len = (max.as_() + 1).max(min_length);

    let clipped = a.clip(A::zero(), max);
    let mut counts = vec![A::zero(); out_len];
    for (v, w) in clipped.iter().zip(weights.iter()) {
        counts[v.as_()] = counts[v.as_()] + w;
    }
    Ok(NdArray::from_vec(counts))
}

fn cross_vec<A>(a: &[A], b: &[A]) -> Vec<A>
where A: Element + Mul<Output = A> + Sub<Output = A> + Neg<Output = A>
{
    match a.len() {
        2 => vec![a[0] * b[1] - a[1] * b[0]],
        _ => vec![
            a[1] * b[2] - a[2] * b[1],
            -(a[0] * b[2] - a[2] * b[0]),
            a[0] * b[1] - a[1] * b[0],
        ],
    }
}

/// Cross product of 2- or 3-element vectors.
///
/// - `Axis::None`: both arrays are single vectors; a 2-vector pair
///   yields the scalar z-component as `1 × 1`, a 3-vector pair the full
///   `1 × 3` product.
/// - `Axis::Row`: each column is a vector (so the arrays must have 2 or
///   3 rows).
/// - `Axis::Col`: each row is a vector (2 or 3 columns).
pub fn cross<A>(a: &NdArray<A>, b: &NdArray<A>, axis: Axis) -> Result<NdArray<A>>
where A: Element + Mul<Output = A> + Sub<Output = A> + Neg<Output = A>
{
    let bad_dims = || {
        ArrayError::invalid_argument(
            "cross: incompatible dimensions for cross product (vector length must be 2 or 3).",
        )
    };
    match axis {
        Axis::None => {
            if a.size() != b.size() || a.size() < 2 || a.size() > 3 {
                return Err(bad_dims());
            }
            Ok(NdArray::from_vec(cross_vec(&a.to_vec(), &b.to_vec())))
        }
        Axis::Row => {
            let shape = a.shape();
            if shape != b.shape() || shape.rows < 2 || shape.rows > 3 {
                return Err(bad_dims());
            }
            let out_rows = if shape.rows == 2 { 1 } else { 3 };
            let mut out = NdArray::new(Shape::new(out_rows, shape.cols));
            for c in 0..shape.cols {
                let v = cross_vec(&a.col(c)?.to_vec(), &b.col(c)?.to_vec());
                for (r, x) in v.into_iter().enumerate() {
                    out.set(r, c, x)?;
                }
            }
            Ok(out)
        }
        Axis::Col => {
            let shape = a.shape();
            if shape != b.shape() || shape.cols < 2 || shape.cols > 3 {
                return Err(bad_dims());
            }
            let out_cols = if shape.cols == 2 { 1 } else { 3 };
            let mut out = NdArray::new(Shape::new(shape.rows, out_cols));
            for r in 0..shape.rows {
                let v = cross_vec(&a.row(r)?.to_vec(), &b.row(r)?.to_vec());
                for (c, x) in v.into_iter().enumerate() {
                    out.set(r, c, x)?;
                }
            }
            Ok(out)
        }
    }
}

/// One-dimensional linear interpolation.
///
/// Evaluates the piecewise-linear function through the control points
/// `(xp, fp)` at every query point in `x`. Control points and query
/// points are each sorted once, then consumed in a single merge scan
/// (O(n log n) overall). The result corresponds to the query points in
/// ascending order.
///
/// **Errors** if `xp` and `fp` differ in length, or a query point lies
/// outside `xp`'s range.
///
/// ```
/// use dense2d::{arr1, interp};
///
/// let y = interp(&arr1(&[1.5]), &arr1(&[1., 2.]), &arr1(&[10., 20.])).unwrap();
/// assert_eq!(y.to_vec(), vec![15.]);
/// ```
pub fn interp<A>(x: &NdArray<A>, xp: &NdArray<A>, fp: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + Float
{
    if xp.size() != fp.size() {
        return Err(ArrayError::invalid_argument(
            "interp: xp and fp must have the same size.",
        ));
    }
    if xp.size() < 2 {
        return Err(ArrayError::invalid_argument(
            "interp: at least two control points are required.",
        ));
    }
    let x_min = x.min(Axis::None)?.item()?;
    let x_max = x.max(Axis::None)?.item()?;
    let xp_min = xp.min(Axis::None)?.item()?;
    let xp_max = xp.max(Axis::None)?.item()?;
    if x_min < xp_min || x_max > xp_max {
        return Err(ArrayError::invalid_argument(
            "interp: query points must be contained within xp's range.",
        ));
    }

    let order = xp.argsort(Axis::None);
    let xp_v = xp.to_vec();
    let fp_v = fp.to_vec();
    let mut sorted_xp = Vec::with_capacity(xp_v.len());
    let mut sorted_fp = Vec::with_capacity(fp_v.len());
    for i in order.iter() {
        sorted_xp.push(xp_v[i]);
        sorted_fp.push(fp_v[i]);
    }

    let mut sorted_x = x.to_vec();
    sorted_x.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = Vec::with_capacity(sorted_x.len());
    let mut k = 0;
    let mut i = 0;
    while i < sorted_x.len() {
        if sorted_xp[k] <= sorted_x[i] && sorted_x[i] <= sorted_xp[k + 1] {
            let percent = (sorted_x[i] - sorted_xp[k]) / (sorted_xp[k + 1] - sorted_xp[k]);
            out.push(sorted_fp[k] + (sorted_fp[k + 1] - sorted_fp[k]) * percent);
            i += 1;
        } else {
            k += 1;
        }
    }
    Ok(NdArray::from_vec(out))
}

/// The `p`-th percentile along `axis`; see [`NdArray::percentile`].
pub fn percentile<A>(a: &NdArray<A>, p: f64, axis: Axis, method: InterpolationMethod)
    -> Result<NdArray<A>>
where
    A: Element + PartialOrd + AsPrimitive<f64>,
    f64: AsPrimitive<A>,
{
    a.percentile(p, axis, method)
}

/// Dot product.
///
/// Two `1 × n` row vectors give their `1 × 1` inner product; otherwise
/// the arrays multiply as matrices, requiring `a.cols == b.rows` and
/// yielding `a.rows × b.cols`.
pub fn dot<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>>
where A: Element + Zero + Add<Output = A> + Mul<Output = A>
{
    let (ash, bsh) = (a.shape(), b.shape());
    if ash.rows == 1 && bsh.rows == 1 && ash.cols == bsh.cols {
        let total = a
            .iter()
            .zip(b.iter())
            .fold(A::zero(), |acc, (x, y)| acc + x * y);
        return Ok(NdArray::from_vec(vec![total]));
    }
    if ash.cols != bsh.rows {
        return Err(ArrayError::invalid_argument(format!(
            "dot: shapes {} and {} are not aligned.",
            ash, bsh
        )));
    }
    let mut out = NdArray::new(Shape::new(ash.rows, bsh.cols));
    for r in 0..ash.rows {
        for c in 0..bsh.cols {
            let mut acc = A::zero();
            for k in 0..ash.cols {
                acc = acc + a.at(r, k)? * b.at(k, c)?;
            }
            out.set(r, c, acc)?;
        }
    }
    Ok(out)
}

/// Difference between adjacent elements.
///
/// `Axis::None` flattens first and yields `1 × (n - 1)`; `Axis::Col`
/// differences within each row (`rows × (cols - 1)`); `Axis::Row`
/// differences within each column (`(rows - 1) × cols`).
pub fn diff<A>(a: &NdArray<A>, axis: Axis) -> NdArray<A>
where A: Element + Sub<Output = A>
{
    fn lane_diff<A: Element + Sub<Output = A>>(xs: &[A], out: &mut Vec<A>)
    {
        for w in xs.windows(2) {
            out.push(w[1] - w[0]);
        }
    }

    match axis {
        Axis::None => {
            let xs = a.to_vec();
            let mut v = Vec::new();
            lane_diff(&xs, &mut v);
            NdArray::from_vec(v)
        }
        Axis::Col => {
            let shape = a.shape();
            let xs = a.to_vec();
            let mut v = Vec::new();
            for r in 0..shape.rows {
                lane_diff(&xs[r * shape.cols..(r + 1) * shape.cols], &mut v);
            }
            let cols = shape.cols.saturating_sub(1);
            NdArray::from_shape_vec(Shape::new(shape.rows, cols), v)
                .expect("each row shrinks by exactly one element")
        }
        Axis::Row => diff(&a.transpose(), Axis::Col).transpose(),
    }
}

/// Greatest common divisor of all elements.
///
/// **Errors** if the array is empty.
pub fn gcd<A>(a: &NdArray<A>) -> Result<A>
where A: Element + num_integer::Integer
{
    let mut it = a.iter();
    let first = it
        .next()
        .ok_or_else(|| ArrayError::invalid_argument("gcd of an empty array is undefined."))?;
    Ok(it.fold(first, |acc, x| acc.gcd(&x)))
}

/// Least common multiple of all elements.
///
/// **Errors** if the array is empty.
pub fn lcm<A>(a: &NdArray<A>) -> Result<A>
where A: Element + num_integer::Integer
{
    let mut it = a.iter();
    let first = it
        .next()
        .ok_or_else(|| ArrayError::invalid_argument("lcm of an empty array is undefined."))?;
    Ok(it.fold(first, |acc, x| acc.lcm(&x)))
}
