// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reductions and order statistics.
//!
//! Every reduction takes an [`Axis`]: `Axis::None` collapses the whole
//! array to `1 × 1`, `Axis::Col` reduces each row to one value
//! (`1 × rows`), and `Axis::Row` is the `Axis::Col` reduction of the
//! transpose (`1 × cols`). The transpose equivalence is a behavioral
//! contract relied on by callers.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use num_traits::{AsPrimitive, Float, One, Zero};

use crate::error::{ArrayError, Result};
use crate::{Axis, Element, NdArray};

/// How `percentile` interpolates between the two bracketing sorted
/// values `i` and `j`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InterpolationMethod
{
    /// `i + (j - i) * fraction` of the way between the bracket indices.
    Linear,
    /// `i`.
    Lower,
    /// `j`.
    Higher,
    /// `i` or `j`, whichever is nearest; ties favor `i`.
    Nearest,
    /// `(i + j) / 2`.
    Midpoint,
}

impl FromStr for InterpolationMethod
{
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<InterpolationMethod>
    {
        match s {
            "linear" => Ok(InterpolationMethod::Linear),
            "lower" => Ok(InterpolationMethod::Lower),
            "higher" => Ok(InterpolationMethod::Higher),
            "nearest" => Ok(InterpolationMethod::Nearest),
            "midpoint" => Ok(InterpolationMethod::Midpoint),
            _ => Err(ArrayError::invalid_argument(format!(
                "'{}' is not a valid interpolation method; valid options are \
                 'linear', 'lower', 'higher', 'nearest', 'midpoint'.",
                s
            ))),
        }
    }
}

impl fmt::Display for InterpolationMethod
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let s = match self {
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::Lower => "lower",
            InterpolationMethod::Higher => "higher",
            InterpolationMethod::Nearest => "nearest",
            InterpolationMethod::Midpoint => "midpoint",
        };
        f.write_str(s)
    }
}

fn cmp_partial<A: PartialOrd>(a: &A, b: &A) -> Ordering
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<A: Element> NdArray<A>
{
    /// Reduce every lane selected by `axis` with `f`.
    ///
    /// `Axis::Row` is deliberately implemented as the `Axis::Col`
    /// reduction of the transpose.
    fn reduce_lanes<B, F>(&self, axis: Axis, f: F) -> NdArray<B>
    where
        B: Element,
        F: Fn(&[A]) -> B,
    {
        match axis {
            Axis::None => {
                let v = self.buffer().with(|xs| f(xs));
                NdArray::from_vec(vec![v])
            }
            Axis::Col => {
                let cols = self.shape().cols;
                let rows = self.shape().rows;
                let v = self.buffer().with(|xs| {
                    (0..rows)
                        .map(|r| f(&xs[r * cols..(r + 1) * cols]))
                        .collect::<Vec<B>>()
                });
                NdArray::from_vec(v)
            }
            Axis::Row => self.transpose().reduce_lanes(Axis::Col, f),
        }
    }

    /// Fallible form of `reduce_lanes`.
    fn try_reduce_lanes<B, F>(&self, axis: Axis, f: F) -> Result<NdArray<B>>
    where
        B: Element,
        F: Fn(&[A]) -> Result<B>,
    {
        match axis {
            Axis::None => {
                let v = self.buffer().with(|xs| f(xs))?;
                Ok(NdArray::from_vec(vec![v]))
            }
            Axis::Col => {
                let cols = self.shape().cols;
                let rows = self.shape().rows;
                let v = self.buffer().with(|xs| {
                    (0..rows)
                        .map(|r| f(&xs[r * cols..(r + 1) * cols]))
                        .collect::<Result<Vec<B>>>()
                })?;
                Ok(NdArray::from_vec(v))
            }
            Axis::Row => self.transpose().try_reduce_lanes(Axis::Col, f),
        }
    }

    /// Sum along `axis`.
    ///
    /// ```
    /// use dense2d::{arr2, Axis};
    ///
    /// let a = arr2(&[[1., 2.], [3., 4.]]);
    /// assert_eq!(a.sum(Axis::None).to_vec(), vec![10.]);
    /// assert_eq!(a.sum(Axis::Col).to_vec(), vec![3., 7.]);
    /// assert_eq!(a.sum(Axis::Row).to_vec(), vec![4., 6.]);
    /// ```
    pub fn sum(&self, axis: Axis) -> NdArray<A>
    where A: Zero + Add<Output = A>
    {
        self.reduce_lanes(axis, |xs| xs.iter().fold(A::zero(), |acc, &x| acc + x))
    }

    /// Product along `axis`.
    pub fn prod(&self, axis: Axis) -> NdArray<A>
    where A: One + Mul<Output = A>
    {
        self.reduce_lanes(axis, |xs| xs.iter().fold(A::one(), |acc, &x| acc * x))
    }

    /// Arithmetic mean along `axis`, in `f64`.
    pub fn mean(&self, axis: Axis) -> NdArray<f64>
    where A: AsPrimitive<f64>
    {
        self.reduce_lanes(axis, |xs| {
            let sum: f64 = xs.iter().map(|x| x.as_()).sum();
            sum / xs.len() as f64
        })
    }

    /// Smallest element along `axis`.
    ///
    /// **Errors** if a reduced lane is empty.
    pub fn min(&self, axis: Axis) -> Result<NdArray<A>>
    where A: PartialOrd
    {
        self.try_reduce_lanes(axis, |xs| {
            let mut it = xs.iter();
            let first = *it.next().ok_or_else(empty_reduction)?;
            Ok(it.fold(first, |acc, &x| if x < acc { x } else { acc }))
        })
    }

    /// Largest element along `axis`.
    ///
    /// **Errors** if a reduced lane is empty.
    pub fn max(&self, axis: Axis) -> Result<NdArray<A>>
    where A: PartialOrd
    {
        self.try_reduce_lanes(axis, |xs| {
            let mut it = xs.iter();
            let first = *it.next().ok_or_else(empty_reduction)?;
            Ok(it.fold(first, |acc, &x| if x > acc { x } else { acc }))
        })
    }

    /// Index of the first smallest element along `axis`.
    pub fn argmin(&self, axis: Axis) -> Result<NdArray<usize>>
    where A: PartialOrd
    {
        self.try_reduce_lanes(axis, |xs| {
            if xs.is_empty() {
                return Err(empty_reduction());
            }
            let mut best = 0;
            for (i, x) in xs.iter().enumerate() {
                if *x < xs[best] {
                    best = i;
                }
            }
            Ok(best)
        })
    }

    /// Index of the first largest element along `axis`.
    pub fn argmax(&self, axis: Axis) -> Result<NdArray<usize>>
    where A: PartialOrd
    {
        self.try_reduce_lanes(axis, |xs| {
            if xs.is_empty() {
                return Err(empty_reduction());
            }
            let mut best = 0;
            for (i, x) in xs.iter().enumerate() {
                if *x > xs[best] {
                    best = i;
                }
            }
            Ok(best)
        })
    }

    /// Median along `axis`. Even-length lanes average the two middle
    /// values.
    ///
    /// **Errors** if a reduced lane is empty.
    pub fn median(&self, axis: Axis) -> Result<NdArray<A>>
    where
        A: PartialOrd + AsPrimitive<f64>,
        f64: AsPrimitive<A>,
    {
        self.try_reduce_lanes(axis, |xs| {
            if xs.is_empty() {
                return Err(ArrayError::invalid_argument(
                    "median is undefined for an array of size 0.",
                ));
            }
            let mut sorted = xs.to_vec();
            sorted.sort_by(cmp_partial);
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 1 {
                Ok(sorted[mid])
            } else {
                let avg = (sorted[mid - 1].as_() + sorted[mid].as_()) / 2.0;
                Ok(avg.as_())
            }
        })
    }

    /// Number of elements different from zero, along `axis`.
    pub fn count_nonzero(&self, axis: Axis) -> NdArray<usize>
    where A: Zero
    {
        self.reduce_lanes(axis, |xs| xs.iter().filter(|&&x| x != A::zero()).count())
    }

    /// Cumulative sum along `axis`.
    ///
    /// For `Axis::None` the result is a flat `1 × size()` running sum;
    /// for the other axes the result keeps this array's shape.
    pub fn cumsum(&self, axis: Axis) -> NdArray<A>
    where A: Zero + Add<Output = A>
    {
        fn scan<A: Element + Zero + Add<Output = A>>(xs: &[A], out: &mut Vec<A>)
        {
            let mut acc = A::zero();
            for &x in xs {
                acc = acc + x;
                out.push(acc);
            }
        }

        match axis {
            Axis::None => {
                let mut v = Vec::with_capacity(self.size());
                self.buffer().with(|xs| scan(xs, &mut v));
                NdArray::from_vec(v)
            }
            Axis::Col => {
                let cols = self.shape().cols;
                let rows = self.shape().rows;
                let mut v = Vec::with_capacity(self.size());
                self.buffer().with(|xs| {
                    for r in 0..rows {
                        scan(&xs[r * cols..(r + 1) * cols], &mut v);
                    }
                });
                NdArray::from_parts(self.shape(), crate::data_repr::Buffer::from_vec(v))
            }
            Axis::Row => self.transpose().cumsum(Axis::Col).transpose(),
        }
    }

    /// Mean along `axis`, skipping NaN elements.
    ///
    /// A lane whose elements are all NaN divides zero by zero and so
    /// yields NaN, not an error.
    pub fn nanmean(&self, axis: Axis) -> NdArray<A>
    where A: Float
    {
        self.reduce_lanes(axis, |xs| {
            let mut sum = A::zero();
            let mut count = A::zero();
            for &x in xs {
                if !x.is_nan() {
                    sum = sum + x;
                    count = count + A::one();
                }
            }
            sum / count
        })
    }

    /// Median along `axis`, skipping NaN elements.
    ///
    /// All-NaN lanes yield NaN.
    pub fn nanmedian(&self, axis: Axis) -> NdArray<A>
    where A: Float
    {
        self.reduce_lanes(axis, |xs| {
            let mut sorted: Vec<A> = xs.iter().copied().filter(|x| !x.is_nan()).collect();
            if sorted.is_empty() {
                return A::zero() / A::zero();
            }
            sorted.sort_by(cmp_partial);
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 1 {
                sorted[mid]
            } else {
                let two = A::one() + A::one();
                (sorted[mid - 1] + sorted[mid]) / two
            }
        })
    }

    /// Sort elements in place along `axis`.
    ///
    /// The sort writes through the shared buffer and is visible to every
    /// sharer.
    pub fn sort(&mut self, axis: Axis)
    where A: PartialOrd
    {
        if self.size() == 0 {
            return;
        }
        match axis {
            Axis::None => self.buffer().with_mut(|xs| xs.sort_by(cmp_partial)),
            Axis::Col => {
                let cols = self.shape().cols;
                self.buffer().with_mut(|xs| {
                    for row in xs.chunks_mut(cols) {
                        row.sort_by(cmp_partial);
                    }
                });
            }
            Axis::Row => {
                let mut t = self.transpose();
                t.sort(Axis::Col);
                let v = t.transpose().to_vec();
                self.buffer().with_mut(|xs| xs.copy_from_slice(&v));
            }
        }
    }

    /// The indices that would sort each lane (stable).
    ///
    /// `Axis::None` yields `1 × size()` flat indices; the other axes
    /// keep this array's shape, with indices local to each lane.
    pub fn argsort(&self, axis: Axis) -> NdArray<usize>
    where A: PartialOrd
    {
        fn lane_argsort<A: PartialOrd>(xs: &[A]) -> Vec<usize>
        {
            let mut idx: Vec<usize> = (0..xs.len()).collect();
            idx.sort_by(|&a, &b| cmp_partial(&xs[a], &xs[b]));
            idx
        }

        match axis {
            Axis::None => {
                let v = self.buffer().with(|xs| lane_argsort(xs));
                NdArray::from_vec(v)
            }
            Axis::Col => {
                let cols = self.shape().cols;
                let rows = self.shape().rows;
                let mut v = Vec::with_capacity(self.size());
                self.buffer().with(|xs| {
                    for r in 0..rows {
                        v.extend(lane_argsort(&xs[r * cols..(r + 1) * cols]));
                    }
                });
                NdArray::from_parts(self.shape(), crate::data_repr::Buffer::from_vec(v))
            }
            Axis::Row => self.transpose().argsort(Axis::Col).transpose(),
        }
    }

    /// The sorted, deduplicated elements as a `1 × k` array.
    pub fn unique(&self) -> NdArray<A>
    where A: PartialOrd
    {
        let mut v = self.to_vec();
        v.sort_by(cmp_partial);
        v.dedup_by(|a, b| a == b);
        NdArray::from_vec(v)
    }

    /// The `p`-th percentile along `axis`.
    ///
    /// `p` must lie in `[0, 100]`. The two bracketing sorted-order
    /// indices come from `floor((n - 1) * p / 100)` clipped to
    /// `[0, n - 2]`; `method` selects the interpolation rule between
    /// them. `percentile(0)` is the lane minimum and `percentile(100)`
    /// the lane maximum.
    ///
    /// **Errors** if `p` is out of range or a reduced lane is empty.
    pub fn percentile(&self, p: f64, axis: Axis, method: InterpolationMethod)
        -> Result<NdArray<A>>
    where
        A: PartialOrd + AsPrimitive<f64>,
        f64: AsPrimitive<A>,
    {
        if !(0.0..=100.0).contains(&p) {
            return Err(ArrayError::invalid_argument(
                "percentile must be in the range [0, 100].",
            ));
        }
        self.try_reduce_lanes(axis, |xs| percentile_lane(xs, p, method))
    }
}

fn empty_reduction() -> ArrayError
{
    ArrayError::invalid_argument("reduction is undefined for an array of size 0.")
}

fn percentile_lane<A>(xs: &[A], p: f64, method: InterpolationMethod) -> Result<A>
where
    A: Element + PartialOrd + AsPrimitive<f64>,
    f64: AsPrimitive<A>,
{
    if xs.is_empty() {
        return Err(ArrayError::invalid_argument(
            "percentile is undefined for an array of size 0.",
        ));
    }
    let mut sorted: Vec<f64> = xs.iter().map(|x| x.as_()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();

    if p == 0.0 || n == 1 {
        return Ok(sorted[0].as_());
    }
    if p == 100.0 {
        return Ok(sorted[n - 1].as_());
    }

    let i = ((n - 1) as f64 * p / 100.0).floor() as usize;
    let lower = i.min(n - 2);

    let value = match method {
        InterpolationMethod::Linear => {
            let percent_lower = lower as f64 / (n - 1) as f64;
            let percent_upper = (lower + 1) as f64 / (n - 1) as f64;
            let fraction = (p / 100.0 - percent_lower) / (percent_upper - percent_lower);
            sorted[lower] + (sorted[lower + 1] - sorted[lower]) * fraction
        }
        InterpolationMethod::Lower => sorted[lower],
        InterpolationMethod::Higher => sorted[lower + 1],
        InterpolationMethod::Nearest => {
            let percent = p / 100.0;
            let diff_lower = percent - lower as f64 / (n - 1) as f64;
            let diff_upper = (lower + 1) as f64 / (n - 1) as f64 - percent;
            // first minimal distance wins, so an exact tie favors the
            // lower bracket
            if diff_lower <= diff_upper {
                sorted[lower]
            } else {
                sorted[lower + 1]
            }
        }
        InterpolationMethod::Midpoint => (sorted[lower] + sorted[lower + 1]) / 2.0,
    };
    Ok(value.as_())
}
