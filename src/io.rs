// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Binary and text serialization.
//!
//! The binary format is a raw, headerless dump of the buffer's bytes in
//! row-major element order. Neither shape nor element type is recorded;
//! reader and writer share that knowledge as a paired contract. This is
//! a documented limitation kept for byte-for-byte compatibility with
//! existing dump files.

use std::fmt::Display;
use std::fs;
use std::mem;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ArrayError, Result};
use crate::{Element, NdArray};

/// View a slice of plain-data elements as raw bytes.
///
/// Sound because `Element` types are `Copy + 'static` plain data.
pub(crate) fn as_bytes<A: Element>(v: &[A]) -> &[u8]
{
    unsafe { std::slice::from_raw_parts(v.as_ptr() as *const u8, mem::size_of_val(v)) }
}

fn bytes_to_vec<A: Element>(bytes: &[u8]) -> Result<Vec<A>>
{
    let elem = mem::size_of::<A>();
    if elem == 0 || bytes.len() % elem != 0 {
        return Err(ArrayError::invalid_argument(format!(
            "file length {} is not a multiple of the element width {}.",
            bytes.len(),
            elem
        )));
    }
    let n = bytes.len() / elem;
    let mut v: Vec<A> = Vec::with_capacity(n);
    unsafe {
        // copy through the u8 view of the destination; the source may be
        // unaligned for A
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), v.as_mut_ptr() as *mut u8, bytes.len());
        v.set_len(n);
    }
    Ok(v)
}

impl<A: Element> NdArray<A>
{
    /// Write the buffer's raw bytes to `path` in row-major element
    /// order.
    ///
    /// The format is headerless: the reader must know the shape and
    /// element type to reconstruct the array with [`load`].
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()>
    {
        let v = self.to_vec();
        fs::write(path.as_ref(), as_bytes(&v)).map_err(|e| {
            ArrayError::io(format!(
                "unable to write {}: {}.",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Write the elements to `path` as text in flat order, separated by
    /// `sep`.
    ///
    /// Round-trips values only, not shape; read back with [`fromfile`].
    pub fn tofile<P: AsRef<Path>>(&self, path: P, sep: &str) -> Result<()>
    where A: Display
    {
        let text = self
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(sep);
        fs::write(path.as_ref(), text).map_err(|e| {
            ArrayError::io(format!(
                "unable to write {}: {}.",
                path.as_ref().display(),
                e
            ))
        })
    }
}

/// Read a headerless binary dump written by [`NdArray::dump`] as a
/// `1 × n` row vector.
///
/// The caller supplies the element type; reshape afterwards if the
/// original array was two-dimensional.
///
/// **Errors** if the file cannot be read or its length is not a
/// multiple of the element width.
pub fn load<A, P>(path: P) -> Result<NdArray<A>>
where
    A: Element,
    P: AsRef<Path>,
{
    let bytes = fs::read(path.as_ref()).map_err(|e| {
        ArrayError::io(format!(
            "unable to read {}: {}.",
            path.as_ref().display(),
            e
        ))
    })?;
    Ok(NdArray::from_vec(bytes_to_vec(&bytes)?))
}

/// Read a `sep`-delimited text file written by [`NdArray::tofile`] as a
/// `1 × n` row vector.
///
/// **Errors** if the file cannot be read or an element fails to parse.
pub fn fromfile<A, P>(path: P, sep: &str) -> Result<NdArray<A>>
where
    A: Element + FromStr,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path.as_ref()).map_err(|e| {
        ArrayError::io(format!(
            "unable to read {}: {}.",
            path.as_ref().display(),
            e
        ))
    })?;
    let mut v = Vec::new();
    for tok in text.split(sep).map(str::trim).filter(|t| !t.is_empty()) {
        let value = tok.parse::<A>().map_err(|_| {
            ArrayError::invalid_argument(format!("could not parse element '{}'.", tok))
        })?;
        v.push(value);
    }
    Ok(NdArray::from_vec(v))
}
