//! StrBuf - Growable, null-terminated dynamic byte buffer
//!
//! This module provides the buffer itself plus its formatted-write support.
//! The storage is a plain `Vec<u8>` with explicit size and capacity
//! bookkeeping so the trailing zero byte is always in place and capacity
//! growth follows a single geometric policy.

pub mod core;
pub mod fmt;

pub use core::StrBuf;
