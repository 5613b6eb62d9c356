// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Kernel RNG syscall (`getrandom(2)`).
//!
//! Linux and Android issue the raw syscall so that an old libc without the
//! wrapper still works. The other kernels that have it are reached through
//! the libc symbol, looked up at runtime.

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use self::linux::SysGetRandom as KernelGetRandom;

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(crate) use self::libc_symbol::WeakGetRandom as KernelGetRandom;

fn from_ret(ret: isize) -> Result<usize, NativeError> {
    if ret < 0 {
        return Err(NativeError::last_os_error());
    }

    Ok(ret as usize)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux {
    use core::ptr;

    use super::*;

    /// `syscall(SYS_getrandom, ..)` with `GRND_RANDOM`.
    pub(crate) struct SysGetRandom;

    impl Backend for SysGetRandom {
        fn kind(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
            // SAFETY: `dest` is valid for `dest.len()` writable bytes.
            let ret = unsafe {
                libc::syscall(
                    libc::SYS_getrandom,
                    dest.as_mut_ptr(),
                    dest.len(),
                    libc::GRND_RANDOM,
                )
            };

            from_ret(ret as isize)
        }
    }

    impl Capability for SysGetRandom {
        fn provides(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        // Zero-length non-blocking call: touches no memory and never waits
        // for the pool.
        fn is_available(&self) -> bool {
            // SAFETY: a zero-length request never dereferences the pointer.
            let ret = unsafe {
                libc::syscall(
                    libc::SYS_getrandom,
                    ptr::null_mut::<u8>(),
                    0usize,
                    libc::GRND_NONBLOCK,
                )
            };

            if ret >= 0 {
                return true;
            }

            // Seccomp filters commonly answer EPERM for unknown syscalls.
            !matches!(
                std::io::Error::last_os_error().raw_os_error(),
                Some(libc::ENOSYS) | Some(libc::EPERM)
            )
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
mod libc_symbol {
    use core::ffi::{c_uint, c_void};
    use core::mem;

    use super::*;
    use crate::sys::weak::Weak;

    // Same value on every kernel exposing getrandom(2) through libc.
    const GRND_RANDOM: c_uint = 0x2;

    type GetRandomFn = unsafe extern "C" fn(*mut c_void, libc::size_t, c_uint) -> libc::ssize_t;

    static GETRANDOM: Weak = Weak::new(c"getrandom");

    /// libc `getrandom(3)` with `GRND_RANDOM`, resolved at runtime.
    pub(crate) struct WeakGetRandom;

    impl Backend for WeakGetRandom {
        fn kind(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
            let Some(addr) = GETRANDOM.addr() else {
                return Err(NativeError::Errno(libc::ENOSYS));
            };

            // SAFETY: `addr` is the address of libc's `getrandom`, whose
            // signature is `GetRandomFn`.
            let getrandom: GetRandomFn = unsafe { mem::transmute::<usize, GetRandomFn>(addr) };

            // SAFETY: `dest` is valid for `dest.len()` writable bytes.
            let ret = unsafe { getrandom(dest.as_mut_ptr().cast(), dest.len(), GRND_RANDOM) };

            from_ret(ret as isize)
        }
    }

    impl Capability for WeakGetRandom {
        fn provides(&self) -> BackendKind {
            BackendKind::KernelSyscall
        }

        fn is_available(&self) -> bool {
            GETRANDOM.addr().is_some()
        }
    }
}
