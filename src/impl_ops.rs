// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise arithmetic operators.
//!
//! Array ⊕ array requires equal shapes; there is no general
//! broadcasting. Array ⊕ scalar and scalar ⊕ array apply the scalar to
//! every element. Operator sugar panics on a shape mismatch; the
//! `Result`-returning forms live in the [`crate::functions`] layer
//! (`add`, `subtract`, `multiply`, `divide`).

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::data_repr::Buffer;
use crate::{Element, NdArray};

pub(crate) fn checked_zip<A, F>(lhs: &NdArray<A>, rhs: &NdArray<A>, op: &str, f: F) -> NdArray<A>
where
    A: Element,
    F: Fn(A, A) -> A,
{
    if lhs.shape() != rhs.shape() {
        panic!("{}: shape mismatch, {} vs {}.", op, lhs.shape(), rhs.shape());
    }
    // collect the rhs first; the operands may share one buffer
    let rv = rhs.to_vec();
    let v = lhs.buffer().with(|xs| {
        xs.iter()
            .zip(&rv)
            .map(|(&a, &b)| f(a, b))
            .collect::<Vec<A>>()
    });
    NdArray::from_parts(lhs.shape(), Buffer::from_vec(v))
}

fn checked_zip_assign<A, F>(lhs: &mut NdArray<A>, rhs: &NdArray<A>, op: &str, f: F)
where
    A: Element,
    F: Fn(A, A) -> A,
{
    if lhs.shape() != rhs.shape() {
        panic!("{}: shape mismatch, {} vs {}.", op, lhs.shape(), rhs.shape());
    }
    let rv = rhs.to_vec();
    lhs.buffer().with_mut(|xs| {
        for (x, &r) in xs.iter_mut().zip(&rv) {
            *x = f(*x, r);
        }
    });
}

macro_rules! impl_binary_op {
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident, $doc:expr) => {
        /// Perform elementwise
        #[doc = $doc]
        /// between two arrays of the same shape.
        ///
        /// **Panics** if the shapes disagree.
        impl<'a, 'b, A> $trt<&'b NdArray<A>> for &'a NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: &'b NdArray<A>) -> NdArray<A>
            {
                checked_zip(self, rhs, stringify!($mth), A::$mth)
            }
        }

        impl<A> $trt<NdArray<A>> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: NdArray<A>) -> NdArray<A>
            {
                (&self).$mth(&rhs)
            }
        }

        impl<'a, A> $trt<&'a NdArray<A>> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: &'a NdArray<A>) -> NdArray<A>
            {
                (&self).$mth(rhs)
            }
        }

        impl<'a, A> $trt<NdArray<A>> for &'a NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: NdArray<A>) -> NdArray<A>
            {
                self.$mth(&rhs)
            }
        }

        /// Perform elementwise
        #[doc = $doc]
        /// between an array and a scalar, applied to every element.
        impl<'a, A> $trt<A> for &'a NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: A) -> NdArray<A>
            {
                self.mapv(|x| x.$mth(rhs))
            }
        }

        impl<A> $trt<A> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            type Output = NdArray<A>;
            fn $mth(self, rhs: A) -> NdArray<A>
            {
                (&self).$mth(rhs)
            }
        }

        /// Perform elementwise
        #[doc = $doc]
        /// in place. The write is visible to every sharer of the buffer.
        ///
        /// **Panics** if the shapes disagree.
        impl<'a, A> $assign_trt<&'a NdArray<A>> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            fn $assign_mth(&mut self, rhs: &'a NdArray<A>)
            {
                checked_zip_assign(self, rhs, stringify!($assign_mth), A::$mth);
            }
        }

        impl<A> $assign_trt<NdArray<A>> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            fn $assign_mth(&mut self, rhs: NdArray<A>)
            {
                self.$assign_mth(&rhs);
            }
        }

        impl<A> $assign_trt<A> for NdArray<A>
        where A: Element + $trt<Output = A>
        {
            fn $assign_mth(&mut self, rhs: A)
            {
                self.mapv_inplace(|x| x.$mth(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, "addition");
impl_binary_op!(Sub, sub, SubAssign, sub_assign, "subtraction");
impl_binary_op!(Mul, mul, MulAssign, mul_assign, "multiplication");
impl_binary_op!(Div, div, DivAssign, div_assign, "division");

// Scalar on the left hand side needs one impl per concrete scalar type.
macro_rules! impl_scalar_lhs_ops {
    ($($scalar:ty)*) => {$(
        impl Add<&NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn add(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar>
            {
                rhs.mapv(|x| self + x)
            }
        }

        impl Add<NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn add(self, rhs: NdArray<$scalar>) -> NdArray<$scalar>
            {
                self + &rhs
            }
        }

        impl Sub<&NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn sub(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar>
            {
                rhs.mapv(|x| self - x)
            }
        }

        impl Sub<NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn sub(self, rhs: NdArray<$scalar>) -> NdArray<$scalar>
            {
                self - &rhs
            }
        }

        impl Mul<&NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn mul(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar>
            {
                rhs.mapv(|x| self * x)
            }
        }

        impl Mul<NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn mul(self, rhs: NdArray<$scalar>) -> NdArray<$scalar>
            {
                self * &rhs
            }
        }

        impl Div<&NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn div(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar>
            {
                rhs.mapv(|x| self / x)
            }
        }

        impl Div<NdArray<$scalar>> for $scalar
        {
            type Output = NdArray<$scalar>;
            fn div(self, rhs: NdArray<$scalar>) -> NdArray<$scalar>
            {
                self / &rhs
            }
        }
    )*};
}

impl_scalar_lhs_ops!(i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize f32 f64);

/// Elementwise negation.
impl<'a, A> Neg for &'a NdArray<A>
where A: Element + Neg<Output = A>
{
    type Output = NdArray<A>;
    fn neg(self) -> NdArray<A>
    {
        self.mapv(|x| -x)
    }
}

impl<A> Neg for NdArray<A>
where A: Element + Neg<Output = A>
{
    type Output = NdArray<A>;
    fn neg(self) -> NdArray<A>
    {
        -&self
    }
}
