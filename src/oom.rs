//! Process-wide allocation-failure hook
//!
//! Every allocation inside [`StrBuf`](crate::StrBuf) is checked with
//! `try_reserve_exact`. When it fails, the hook installed here runs. The
//! default hook writes a message to stderr and aborts the process; a custom
//! hook may panic instead, which unwinds out of the failed operation and
//! leaves the buffer untouched.
//!
//! The hook is the only process-wide mutable state in this crate. Install a
//! replacement once at startup if the default is not what you want.

use std::process;
use std::sync::{LazyLock, RwLock};

/// Hook invoked when memory cannot be obtained.
///
/// The argument is the total number of bytes the failed request asked for.
/// The hook must diverge: abort, exit, or panic.
pub type OomHook = fn(requested: usize) -> !;

static OOM_HOOK: LazyLock<RwLock<OomHook>> = LazyLock::new(|| RwLock::new(default_oom_hook));

/// The default hook: reports the failure to stderr and aborts.
pub fn default_oom_hook(requested: usize) -> ! {
    eprintln!("strbuf: out of memory (requested {requested} bytes)");
    process::abort()
}

/// Install a replacement allocation-failure hook.
pub fn set_oom_hook(hook: OomHook) {
    *OOM_HOOK.write().unwrap() = hook;
}

/// Restore the default allocation-failure hook.
pub fn reset_oom_hook() {
    set_oom_hook(default_oom_hook);
}

/// Invoke the installed hook. Called on every failed allocation.
pub(crate) fn alloc_failure(requested: usize) -> ! {
    let hook = *OOM_HOOK.read().unwrap();
    hook(requested)
}
