//! Formatted writes into StrBuf
//!
//! All formatted operations use the same two-pass contract: a measuring pass
//! counts the exact rendered length, then the render goes into storage
//! reserved for exactly that many bytes plus the terminator slot. One
//! allocation per formatted payload, never a truncation.

use super::core::StrBuf;
use crate::oom;
use std::fmt;
use std::io;

const FMT_FAILED: &str = "a formatting trait implementation returned an error";

/// Measuring pass: counts the bytes a render would produce.
struct LenCounter {
    len: usize,
}

impl fmt::Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Rendering pass: collects into a pre-sized vec.
struct VecWriter {
    out: Vec<u8>,
}

impl fmt::Write for VecWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // No-op when the measuring pass already reserved enough; a Display
        // impl that renders differently between passes falls back to growth
        // here instead of truncating.
        if self.out.try_reserve(s.len()).is_err() {
            oom::alloc_failure(self.out.len() + s.len());
        }
        self.out.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Render `args` into a vec with exactly the rendered length reserved, plus
/// one spare byte for the terminator the caller will add.
///
/// Panics if a formatting trait implementation returns an error, matching
/// `std::fmt::format`.
pub(crate) fn render_exact(args: fmt::Arguments<'_>) -> Vec<u8> {
    if let Some(s) = args.as_str() {
        // Literal-only template, nothing to measure
        let mut out = Vec::new();
        if out.try_reserve_exact(s.len() + 1).is_err() {
            oom::alloc_failure(s.len() + 1);
        }
        out.extend_from_slice(s.as_bytes());
        return out;
    }

    // Arguments is Copy, so measuring does not consume the render
    let mut counter = LenCounter { len: 0 };
    fmt::write(&mut counter, args).expect(FMT_FAILED);

    let mut out = Vec::new();
    if out.try_reserve_exact(counter.len + 1).is_err() {
        oom::alloc_failure(counter.len + 1);
    }
    let mut writer = VecWriter { out };
    fmt::write(&mut writer, args).expect(FMT_FAILED);
    writer.out
}

impl StrBuf {
    /// Create a buffer by rendering `args` into exactly-sized fresh storage.
    ///
    /// Length and capacity both equal the rendered length.
    ///
    /// ```
    /// use strbuf::StrBuf;
    ///
    /// let buf = StrBuf::from_fmt(format_args!("{} {} test", 12, "abc"));
    /// assert_eq!(buf.as_slice(), b"12 abc test");
    /// assert_eq!(buf.capacity(), buf.len());
    /// ```
    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        Self::from_vec(render_exact(args))
    }

    /// Render `args` and insert the result at byte offset `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert_fmt(&mut self, pos: usize, args: fmt::Arguments<'_>) {
        let rendered = render_exact(args);
        self.insert(pos, &rendered);
    }

    /// Render `args` and append the result.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        let rendered = render_exact(args);
        self.append(&rendered);
    }

    /// Render `args` and prepend the result.
    pub fn prepend_fmt(&mut self, args: fmt::Arguments<'_>) {
        let rendered = render_exact(args);
        self.prepend(&rendered);
    }
}

impl fmt::Write for StrBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes());
        Ok(())
    }
}

impl io::Write for StrBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
