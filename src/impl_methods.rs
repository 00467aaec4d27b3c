// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Indexing, slicing, shape manipulation and element conversion.

use num_traits::AsPrimitive;

use crate::error::{ArrayError, Result};
use crate::{Element, NdArray, Shape, Slice};

impl<A: Element> NdArray<A>
{
    /// Deep-copy the array into freshly allocated storage.
    ///
    /// This is the only way to detach from sharers; `clone()` shares.
    pub fn copy(&self) -> NdArray<A>
    {
        NdArray::from_parts(self.shape(), self.buffer().deep_copy())
    }

    /// The element at `(row, col)`.
    ///
    /// **Errors** with an out-of-bounds kind if either index is outside
    /// the shape.
    pub fn at(&self, row: usize, col: usize) -> Result<A>
    {
        Ok(self.buffer().get(self.offset(row, col)?))
    }

    /// Write the element at `(row, col)`.
    ///
    /// The write is visible through every handle sharing this array's
    /// storage.
    pub fn set(&mut self, row: usize, col: usize, value: A) -> Result<()>
    {
        let i = self.offset(row, col)?;
        self.buffer().set(i, value);
        Ok(())
    }

    /// The element at flat, row-major index `i`.
    pub fn at_flat(&self, i: usize) -> Result<A>
    {
        self.check_flat(i)?;
        Ok(self.buffer().get(i))
    }

    /// Write the element at flat, row-major index `i`.
    pub fn set_flat(&mut self, i: usize, value: A) -> Result<()>
    {
        self.check_flat(i)?;
        self.buffer().set(i, value);
        Ok(())
    }

    /// The single element of a one-element array.
    ///
    /// **Errors** unless `size() == 1`.
    pub fn item(&self) -> Result<A>
    {
        if self.size() != 1 {
            return Err(ArrayError::invalid_argument(format!(
                "item() requires an array of size 1, got {}.",
                self.size()
            )));
        }
        Ok(self.buffer().get(0))
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize>
    {
        let shape = self.shape();
        if row >= shape.rows || col >= shape.cols {
            return Err(ArrayError::out_of_bounds(format!(
                "index ({}, {}) is out of bounds for shape {}.",
                row, col, shape
            )));
        }
        Ok(row * shape.cols + col)
    }

    fn check_flat(&self, i: usize) -> Result<()>
    {
        if i >= self.size() {
            return Err(ArrayError::out_of_bounds(format!(
                "flat index {} is out of bounds for size {}.",
                i,
                self.size()
            )));
        }
        Ok(())
    }

    /// Copy the sub-region selected by a row slice and a column slice.
    ///
    /// The result is always a copy, never a view; mutating it does not
    /// touch `self`.
    pub fn slice(&self, rows: Slice, cols: Slice) -> Result<NdArray<A>>
    {
        let shape = self.shape();
        let row_idx = rows.indices(shape.rows)?;
        let col_idx = cols.indices(shape.cols)?;
        let mut v = Vec::with_capacity(row_idx.len() * col_idx.len());
        for &r in &row_idx {
            for &c in &col_idx {
                v.push(self.buffer().get(r * shape.cols + c));
            }
        }
        NdArray::from_shape_vec(Shape::new(row_idx.len(), col_idx.len()), v)
    }

    /// Copy row `row` as a `1 × cols` array.
    pub fn row(&self, row: usize) -> Result<NdArray<A>>
    {
        self.row_slice(row, Slice::to(self.shape().cols as isize))
    }

    /// Copy column `col` as a `rows × 1` array.
    pub fn col(&self, col: usize) -> Result<NdArray<A>>
    {
        self.col_slice(Slice::to(self.shape().rows as isize), col)
    }

    /// Copy the columns selected by `cols` within a single row; `1 × k`.
    pub fn row_slice(&self, row: usize, cols: Slice) -> Result<NdArray<A>>
    {
        let shape = self.shape();
        if row >= shape.rows {
            return Err(ArrayError::out_of_bounds(format!(
                "row {} is out of bounds for shape {}.",
                row, shape
            )));
        }
        let col_idx = cols.indices(shape.cols)?;
        let v: Vec<A> = col_idx
            .iter()
            .map(|&c| self.buffer().get(row * shape.cols + c))
            .collect();
        Ok(NdArray::from_vec(v))
    }

    /// Copy the rows selected by `rows` within a single column; `k × 1`.
    pub fn col_slice(&self, rows: Slice, col: usize) -> Result<NdArray<A>>
    {
        let shape = self.shape();
        if col >= shape.cols {
            return Err(ArrayError::out_of_bounds(format!(
                "column {} is out of bounds for shape {}.",
                col, shape
            )));
        }
        let row_idx = rows.indices(shape.rows)?;
        let v: Vec<A> = row_idx
            .iter()
            .map(|&r| self.buffer().get(r * shape.cols + col))
            .collect();
        NdArray::from_shape_vec(Shape::new(v.len(), 1), v)
    }

    /// Reinterpret the flat storage with a new shape, in place.
    ///
    /// Only the shape changes; the buffer (and its sharers) are
    /// untouched. **Errors** unless `rows * cols == size()`.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<()>
    {
        let new = Shape::new(rows, cols);
        if new.size() != self.size() {
            return Err(ArrayError::invalid_argument(format!(
                "cannot reshape array of size {} into shape {}.",
                self.size(),
                new
            )));
        }
        self.shape = new;
        Ok(())
    }

    /// Reshape into a `1 × n` row vector, in place.
    pub fn reshape_flat(&mut self, n: usize) -> Result<()>
    {
        self.reshape(1, n)
    }

    /// A `1 × size()` copy of the elements in row-major order.
    pub fn flatten(&self) -> NdArray<A>
    {
        NdArray::from_vec(self.to_vec())
    }

    /// The transposed array, with storage physically permuted.
    pub fn transpose(&self) -> NdArray<A>
    {
        let shape = self.shape();
        let mut v = vec![A::default(); shape.size()];
        self.buffer().with(|xs| {
            for r in 0..shape.rows {
                for c in 0..shape.cols {
                    v[c * shape.rows + r] = xs[r * shape.cols + c];
                }
            }
        });
        NdArray::from_parts(shape.transposed(), crate::data_repr::Buffer::from_vec(v))
    }

    /// Convert every element to `U` with `as`-cast semantics.
    ///
    /// Narrowing and precision loss are silent.
    pub fn astype<U>(&self) -> NdArray<U>
    where
        A: AsPrimitive<U>,
        U: Element,
    {
        self.mapv(|x| x.as_())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: A)
    {
        self.buffer().with_mut(|xs| {
            for x in xs.iter_mut() {
                *x = value;
            }
        });
    }

    /// Write `values` into the sub-region selected by `rows`/`cols`, in
    /// row-major order of the selection.
    ///
    /// **Errors** unless the selection and `values` have the same number
    /// of elements. Validation happens before any element is written.
    pub fn put(&mut self, rows: Slice, cols: Slice, values: &NdArray<A>) -> Result<()>
    {
        let shape = self.shape();
        let row_idx = rows.indices(shape.rows)?;
        let col_idx = cols.indices(shape.cols)?;
        if row_idx.len() * col_idx.len() != values.size() {
            return Err(ArrayError::invalid_argument(format!(
                "put: selection of {} x {} elements does not match {} input values.",
                row_idx.len(),
                col_idx.len(),
                values.size()
            )));
        }
        let mut vals = values.iter();
        for &r in &row_idx {
            for &c in &col_idx {
                self.buffer().set(r * shape.cols + c, vals.next().unwrap());
            }
        }
        Ok(())
    }

    /// Set every element for which `mask` is `true` to `value`.
    ///
    /// **Errors** unless `mask` has this array's shape.
    pub fn put_mask(&mut self, mask: &NdArray<bool>, value: A) -> Result<()>
    {
        self.check_mask(mask)?;
        for i in 0..self.size() {
            if mask.buffer().get(i) {
                self.buffer().set(i, value);
            }
        }
        Ok(())
    }

    /// Replace the masked elements with `values`, in flat order.
    ///
    /// **Errors** unless `mask` has this array's shape and `values` has
    /// one element per `true` in the mask.
    pub fn put_mask_array(&mut self, mask: &NdArray<bool>, values: &NdArray<A>) -> Result<()>
    {
        self.check_mask(mask)?;
        let wanted = mask.iter().filter(|&m| m).count();
        if wanted != values.size() {
            return Err(ArrayError::invalid_argument(format!(
                "put_mask_array: mask selects {} elements but {} values were given.",
                wanted,
                values.size()
            )));
        }
        let mut vals = values.iter();
        for i in 0..self.size() {
            if mask.buffer().get(i) {
                self.buffer().set(i, vals.next().unwrap());
            }
        }
        Ok(())
    }

    fn check_mask(&self, mask: &NdArray<bool>) -> Result<()>
    {
        if mask.shape() != self.shape() {
            return Err(ArrayError::invalid_argument(format!(
                "mask shape {} does not match array shape {}.",
                mask.shape(),
                self.shape()
            )));
        }
        Ok(())
    }

    /// Limit every element to the interval `[lo, hi]`.
    pub fn clip(&self, lo: A, hi: A) -> NdArray<A>
    where A: PartialOrd
    {
        self.mapv(|x| {
            if x < lo {
                lo
            } else if x > hi {
                hi
            } else {
                x
            }
        })
    }

    /// The elements as a flat, row-major vector.
    pub fn to_vec(&self) -> Vec<A>
    {
        self.buffer().to_vec()
    }

    /// Apply `f` to every element, collecting into a new array of the
    /// same shape.
    pub fn mapv<B, F>(&self, mut f: F) -> NdArray<B>
    where
        B: Element,
        F: FnMut(A) -> B,
    {
        let v = self.buffer().with(|xs| xs.iter().map(|&x| f(x)).collect());
        NdArray::from_parts(self.shape(), crate::data_repr::Buffer::from_vec(v))
    }

    /// Apply `f` to every element in place.
    pub fn mapv_inplace<F>(&mut self, mut f: F)
    where F: FnMut(A) -> A
    {
        self.buffer().with_mut(|xs| {
            for x in xs.iter_mut() {
                *x = f(*x);
            }
        });
    }
}
