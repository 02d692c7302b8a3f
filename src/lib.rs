//! strbuf - A growable, null-terminated dynamic byte buffer
//!
//! This library provides [`StrBuf`], a byte buffer that grows geometrically
//! and keeps a zero byte just past its logical content at all times, so the
//! same storage can be handed to conventional null-terminated string APIs
//! without copying. The buffer does not care what the bytes are; it only
//! guarantees the terminator.
//!
//! # Modules
//!
//! - `buffer` - The [`StrBuf`] type and all of its mutation operations
//! - `error` - Error type for the checked accessors and extractions
//! - `oom` - The process-wide allocation-failure hook
//!
//! # Quick start
//!
//! ```
//! use strbuf::StrBuf;
//!
//! let mut buf = StrBuf::from_slice(b"hello");
//! buf.append(b", world");
//! buf.insert(5, b" there");
//! assert_eq!(buf.as_slice(), b"hello there, world");
//! assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
//! ```
//!
//! # Allocation failure
//!
//! Every internal allocation is checked. When memory cannot be obtained the
//! process-wide hook in [`oom`] runs; the default reports to stderr and
//! aborts. Install a panicking hook with [`oom::set_oom_hook`] to unwind
//! instead.

pub mod buffer;
pub mod error;
pub mod oom;

pub use buffer::StrBuf;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
