//! Error handling for strbuf

use std::ffi::{FromBytesWithNulError, FromVecWithNulError};
use std::str::Utf8Error;
use thiserror::Error;

/// The error type for checked accessors and extractions.
///
/// Allocation failure is never reported here; it goes through the
/// [`oom`](crate::oom) hook instead. Precondition violations (out-of-range
/// positions) are panics, documented on each operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
    #[error("interior NUL byte: {0}")]
    InteriorNul(#[from] FromBytesWithNulError),
    #[error("interior NUL byte: {0}")]
    InteriorNulOwned(#[from] FromVecWithNulError),
}

pub type Result<T> = std::result::Result<T, Error>;
