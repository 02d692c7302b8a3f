//! Core StrBuf implementation

use crate::error::Result;
use crate::oom;
use bytes::{Bytes, BytesMut};
use std::ffi::{CStr, CString};
use std::fmt;

/// Capacity floor for the first allocation.
const MIN_CAPACITY: usize = 8;

/// Terminated view of a buffer that never allocated storage.
const EMPTY_WITH_NUL: &[u8] = &[0];

/// A growable byte buffer that is always null-terminated.
///
/// The buffer keeps a zero byte at offset `len()` whenever storage is
/// allocated, so [`as_bytes_with_nul`](StrBuf::as_bytes_with_nul) and
/// [`as_c_str`](StrBuf::as_c_str) can hand the storage to conventional
/// null-terminated string APIs without copying. Content bytes are arbitrary;
/// interior zeros are allowed and only rejected by the `CStr`/`CString`
/// conversions.
///
/// Growth is geometric: capacity starts at 8 and doubles until it covers the
/// request, giving amortized O(1) appends. Capacity never shrinks short of
/// dropping the buffer.
#[derive(Clone)]
pub struct StrBuf {
    /// Storage; `data.len() == cap + 1` whenever allocated, `data[size] == 0`
    pub(super) data: Vec<u8>,
    /// Logical content bytes, excluding the terminator
    pub(super) size: usize,
    /// Usable capacity, excluding the terminator slot
    pub(super) cap: usize,
}

impl StrBuf {
    /// Create a new empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
            cap: 0,
        }
    }

    /// Create a buffer by copying a byte slice.
    ///
    /// Allocates exactly `bytes.len() + 1` bytes; length and capacity both
    /// equal the input length.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut data = Vec::new();
        if data.try_reserve_exact(bytes.len() + 1).is_err() {
            oom::alloc_failure(bytes.len() + 1);
        }
        data.extend_from_slice(bytes);
        data.push(0);
        Self {
            data,
            size: bytes.len(),
            cap: bytes.len(),
        }
    }

    /// Create a buffer that adopts `vec` as its storage.
    ///
    /// The whole vector is taken as content; the allocation is reused and a
    /// terminator is appended in place.
    pub fn from_vec(mut vec: Vec<u8>) -> Self {
        let size = vec.len();
        if vec.try_reserve_exact(1).is_err() {
            oom::alloc_failure(size + 1);
        }
        vec.push(0);
        Self {
            data: vec,
            size,
            cap: size,
        }
    }

    /// Returns the buffer contents as a byte slice, without the terminator.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// Returns the buffer contents including the trailing zero byte.
    ///
    /// A buffer that never allocated returns a static `&[0]`.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.data.is_empty() {
            return EMPTY_WITH_NUL;
        }
        &self.data[..self.size + 1]
    }

    /// Returns the contents as a `&CStr`.
    ///
    /// Fails if the content contains an interior zero byte.
    pub fn as_c_str(&self) -> Result<&CStr> {
        Ok(CStr::from_bytes_with_nul(self.as_bytes_with_nul())?)
    }

    /// Returns the contents as a UTF-8 string slice.
    pub fn as_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.as_slice())?)
    }

    /// Returns a copy of the contents as `Bytes`.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Returns the number of content bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the usable capacity, excluding the terminator slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Consume the buffer and return its content bytes.
    ///
    /// The terminator is dropped and the allocation is reused; this is the
    /// ownership-transfer counterpart of [`from_vec`](StrBuf::from_vec).
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.truncate(self.size);
        self.data
    }

    /// Consume the buffer and return its contents as a `CString`.
    ///
    /// Fails if the content contains an interior zero byte.
    pub fn into_c_string(self) -> Result<CString> {
        if self.data.is_empty() {
            return Ok(CString::default());
        }
        let mut data = self.data;
        data.truncate(self.size + 1);
        Ok(CString::from_vec_with_nul(data)?)
    }

    /// Grow storage so at least `target` content bytes fit.
    ///
    /// No-op when capacity already covers `target`. Otherwise the capacity
    /// doubles from a floor of 8 until it covers the request, and storage is
    /// reallocated to the new capacity plus the terminator slot.
    fn ensure_capacity(&mut self, target: usize) {
        if self.cap >= target {
            return;
        }
        let mut new_cap = self.cap.max(MIN_CAPACITY);
        while new_cap < target {
            new_cap = match new_cap.checked_mul(2) {
                Some(doubled) => doubled,
                None => target,
            };
        }
        let Some(total) = new_cap.checked_add(1) else {
            oom::alloc_failure(usize::MAX);
        };
        if self.data.try_reserve_exact(total - self.data.len()).is_err() {
            oom::alloc_failure(total);
        }
        self.data.resize(total, 0);
        self.cap = new_cap;
    }

    /// Reserve room for at least `additional` more content bytes.
    ///
    /// Uses the same geometric growth policy as the mutating operations.
    pub fn reserve(&mut self, additional: usize) {
        let target = self.grown_size(additional);
        self.ensure_capacity(target);
    }

    /// Replace the entire contents with `bytes`.
    ///
    /// Grows if needed; capacity is never reduced.
    pub fn set(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.size = bytes.len();
        self.terminate();
    }

    /// Insert `bytes` at byte offset `pos`.
    ///
    /// `pos == 0` behaves exactly like [`prepend`](StrBuf::prepend) and
    /// `pos == len()` exactly like [`append`](StrBuf::append); anything in
    /// between shifts the tail right and fills the gap.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) {
        if pos > self.size {
            panic!(
                "insertion index (is {pos}) should be <= len (is {})",
                self.size
            );
        }
        let new_size = self.grown_size(bytes.len());
        self.ensure_capacity(new_size);

        if pos == 0 {
            return self.prepend(bytes);
        }
        if pos == self.size {
            return self.append(bytes);
        }

        self.data.copy_within(pos..self.size, pos + bytes.len());
        self.data[pos..pos + bytes.len()].copy_from_slice(bytes);
        self.size = new_size;
        self.terminate();
    }

    /// Append `bytes` at the end of the content.
    pub fn append(&mut self, bytes: &[u8]) {
        let new_size = self.grown_size(bytes.len());
        self.ensure_capacity(new_size);
        self.data[self.size..new_size].copy_from_slice(bytes);
        self.size = new_size;
        self.terminate();
    }

    /// Append a single byte.
    pub fn push(&mut self, byte: u8) {
        self.append(&[byte]);
    }

    /// Append a string's bytes.
    pub fn append_str(&mut self, s: &str) {
        self.append(s.as_bytes());
    }

    /// Insert `bytes` in front of the existing content.
    pub fn prepend(&mut self, bytes: &[u8]) {
        let new_size = self.grown_size(bytes.len());
        self.ensure_capacity(new_size);
        self.data.copy_within(..self.size, bytes.len());
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.size = new_size;
        self.terminate();
    }

    /// Empty the buffer. Capacity is retained.
    pub fn clear(&mut self) {
        self.size = 0;
        self.terminate();
    }

    /// Remove `count` bytes starting at `pos`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `pos + count > len()` or the range overflows.
    pub fn erase(&mut self, pos: usize, count: usize) {
        let end = pos
            .checked_add(count)
            .unwrap_or_else(|| panic!("erase range {pos}.. overflows usize"));
        if end > self.size {
            panic!(
                "erase range end (is {end}) should be <= len (is {})",
                self.size
            );
        }
        self.data.copy_within(end..self.size, pos);
        self.size -= count;
        self.terminate();
    }

    /// Keep only the first `len` bytes. No-op when `len >= len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.size {
            return;
        }
        self.size = len;
        self.terminate();
    }

    /// Rewrite the terminator at the current content end.
    #[inline]
    fn terminate(&mut self) {
        if !self.data.is_empty() {
            self.data[self.size] = 0;
        }
    }

    /// Content length after adding `added` bytes; alloc failure on overflow.
    #[inline]
    fn grown_size(&self, added: usize) -> usize {
        match self.size.checked_add(added) {
            Some(new_size) => new_size,
            None => oom::alloc_failure(usize::MAX),
        }
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf").field("len", &self.size).finish()
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<&[u8]> for StrBuf {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for StrBuf {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for StrBuf {
    fn from(vec: Vec<u8>) -> Self {
        Self::from_vec(vec)
    }
}

impl From<String> for StrBuf {
    fn from(s: String) -> Self {
        Self::from_vec(s.into_bytes())
    }
}

impl From<CString> for StrBuf {
    fn from(s: CString) -> Self {
        // Zero-copy adopt: the CString allocation already ends in the
        // terminator this buffer maintains.
        let data = s.into_bytes_with_nul();
        let size = data.len() - 1;
        Self {
            data,
            size,
            cap: size,
        }
    }
}

impl From<Bytes> for StrBuf {
    fn from(data: Bytes) -> Self {
        Self::from_vec(Vec::from(data))
    }
}

impl From<BytesMut> for StrBuf {
    fn from(data: BytesMut) -> Self {
        Self::from_vec(Vec::from(data))
    }
}

impl From<StrBuf> for Vec<u8> {
    fn from(buf: StrBuf) -> Vec<u8> {
        buf.into_bytes()
    }
}

impl From<StrBuf> for Bytes {
    fn from(buf: StrBuf) -> Bytes {
        Bytes::from(buf.into_bytes())
    }
}

impl PartialEq for StrBuf {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Content compare; capacity is bookkeeping, not identity
        self.as_slice() == other.as_slice()
    }
}

impl Eq for StrBuf {}
