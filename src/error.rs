// Copyright 2019-2024 dense2d developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error;
use std::fmt;

/// An error related to array shape, slicing, indexing or I/O.
#[derive(Clone, Debug)]
pub struct ArrayError
{
    kind: ErrorKind,
    msg: String,
}

/// Error code for an `ArrayError`.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind
{
    /// a shape, slice bound, dtype or parameter value is not acceptable
    InvalidArgument,
    /// an index is outside the bounds of the array
    OutOfBounds,
    /// a file could not be read or written
    Io,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.kind
    }

    /// Return the diagnostic message carried by this error.
    pub fn message(&self) -> &str
    {
        &self.msg
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> ArrayError
    {
        from_kind(ErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn out_of_bounds(msg: impl Into<String>) -> ArrayError
    {
        from_kind(ErrorKind::OutOfBounds, msg)
    }

    pub(crate) fn io(msg: impl Into<String>) -> ArrayError
    {
        from_kind(ErrorKind::Io, msg)
    }
}

pub(crate) fn from_kind(kind: ErrorKind, msg: impl Into<String>) -> ArrayError
{
    let msg = msg.into();
    log::error!("{:?}: {}", kind, msg);
    ArrayError { kind, msg }
}

impl PartialEq for ArrayError
{
    #[inline]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.kind == rhs.kind
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let kind = match self.kind {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::Io => "i/o error",
        };
        write!(f, "{}: {}", kind, self.msg)
    }
}

/// The `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayError>;
