// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::{Element, NdArray};

fn format_array<A, F>(array: &NdArray<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    A: Element,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let shape = array.shape();
    write!(f, "[")?;
    for r in 0..shape.rows {
        if r > 0 {
            write!(f, ",\n ")?;
        }
        write!(f, "[")?;
        for c in 0..shape.cols {
            if c > 0 {
                write!(f, ", ")?;
            }
            let v = array.buffer().get(r * shape.cols + c);
            format(&v, f)?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

impl<A: Element + fmt::Display> fmt::Display for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, |v, f| v.fmt(f))
    }
}

impl<A: Element + fmt::Debug> fmt::Debug for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, |v, f| v.fmt(f))?;
        write!(f, " shape={}", self.shape())
    }
}
