// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getentropy`: all-or-nothing, at most [`GETENTROPY_MAX`] bytes per call.

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

/// Per-call limit of `getentropy`.
pub(crate) const GETENTROPY_MAX: usize = 256;

fn from_ret(ret: libc::c_int, len: usize) -> Result<usize, NativeError> {
    if ret != 0 {
        return Err(NativeError::last_os_error());
    }

    Ok(len)
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
pub(crate) use self::libc_symbol::WeakGetEntropy;

#[cfg(target_os = "openbsd")]
pub(crate) use self::openbsd::OpenBsdGetEntropy;

#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
mod libc_symbol {
    use core::ffi::{c_int, c_void};
    use core::mem;

    use super::*;
    use crate::sys::weak::Weak;

    type GetEntropyFn = unsafe extern "C" fn(*mut c_void, libc::size_t) -> c_int;

    static GETENTROPY: Weak = Weak::new(c"getentropy");

    /// libc `getentropy(3)`, resolved at runtime.
    pub(crate) struct WeakGetEntropy;

    impl Backend for WeakGetEntropy {
        fn kind(&self) -> BackendKind {
            BackendKind::LibcEntropy
        }

        fn max_chunk(&self) -> Option<usize> {
            Some(GETENTROPY_MAX)
        }

        fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
            let Some(addr) = GETENTROPY.addr() else {
                return Err(NativeError::Errno(libc::ENOSYS));
            };

            // SAFETY: `addr` is the address of libc's `getentropy`, whose
            // signature is `GetEntropyFn`.
            let getentropy: GetEntropyFn = unsafe { mem::transmute::<usize, GetEntropyFn>(addr) };

            // SAFETY: `dest` is valid for `dest.len()` writable bytes and the
            // filler never asks for more than GETENTROPY_MAX.
            let ret = unsafe { getentropy(dest.as_mut_ptr().cast(), dest.len()) };

            from_ret(ret, dest.len())
        }
    }

    impl Capability for WeakGetEntropy {
        fn provides(&self) -> BackendKind {
            BackendKind::LibcEntropy
        }

        // A resolved symbol is not enough: Linux libcs wrap getrandom(2), which
        // may be missing or filtered. A zero-length request skips the syscall,
        // so draw one real byte.
        fn is_available(&self) -> bool {
            let mut scratch = [0u8; 1];

            match WeakGetEntropy.draw(&mut scratch) {
                Ok(_) => true,
                Err(err) => {
                    log::trace!("getentropy presence draw failed: {err}");
                    !matches!(
                        err,
                        NativeError::Errno(libc::ENOSYS) | NativeError::Errno(libc::EPERM)
                    )
                }
            }
        }
    }
}

#[cfg(target_os = "openbsd")]
mod openbsd {
    use super::*;

    /// `getentropy(2)`, OpenBSD's kernel RNG syscall.
    pub(crate) struct OpenBsdGetEntropy;

    impl Backend for OpenBsdGetEntropy {
        fn kind(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        fn max_chunk(&self) -> Option<usize> {
            Some(GETENTROPY_MAX)
        }

        fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
            // SAFETY: `dest` is valid for `dest.len()` writable bytes and the
            // filler never asks for more than GETENTROPY_MAX.
            let ret = unsafe { libc::getentropy(dest.as_mut_ptr().cast(), dest.len()) };

            from_ret(ret, dest.len())
        }
    }

    impl Capability for OpenBsdGetEntropy {
        fn provides(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}
