// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! libc symbols resolved at runtime through `dlsym(RTLD_DEFAULT, ..)`.

use core::ffi::CStr;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Sentinel: lookup not attempted yet. Never a valid symbol address.
const UNRESOLVED: usize = 1;

/// Symbol address cache. `0` means the symbol is absent.
pub(crate) struct Weak {
    name: &'static CStr,
    addr: AtomicUsize,
}

impl Weak {
    pub(crate) const fn new(name: &'static CStr) -> Self {
        Self {
            name,
            addr: AtomicUsize::new(UNRESOLVED),
        }
    }

    /// Address of the symbol, or `None` if the running libc lacks it.
    ///
    /// Racing lookups store the same value.
    pub(crate) fn addr(&self) -> Option<usize> {
        let mut addr = self.addr.load(Ordering::Acquire);

        if addr == UNRESOLVED {
            // SAFETY: `name` is NUL-terminated and RTLD_DEFAULT is a valid
            // pseudo-handle for the global symbol namespace.
            addr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, self.name.as_ptr()) } as usize;
            log::trace!("dlsym {:?}: {}", self.name, if addr == 0 { "absent" } else { "found" });
            self.addr.store(addr, Ordering::Release);
        }

        (addr != 0).then_some(addr)
    }
}
