// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq};

use crate::{Element, NdArray};

/// **Requires crate feature `"approx"`**
impl<A> AbsDiffEq for NdArray<A>
where
    A: Element + AbsDiffEq,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon
    {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon) -> bool
    {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(&b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<A> RelativeEq for NdArray<A>
where
    A: Element + RelativeEq,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon
    {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &NdArray<A>, epsilon: A::Epsilon, max_relative: A::Epsilon)
        -> bool
    {
        self.shape() == other.shape()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(&b, epsilon.clone(), max_relative.clone()))
    }
}
