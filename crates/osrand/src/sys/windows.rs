// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Windows backends.
//!
//! `BCryptGenRandom` is discovered at runtime: `bcrypt.dll` is loaded once and
//! stays loaded for the rest of the process. `CryptGenRandom` is linked from
//! advapi32, which every supported Windows ships.

use core::ffi::c_void;
use core::mem;
use core::ptr;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::io;

use libloading::Library;

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

const STATUS_SUCCESS: i32 = 0;
const BCRYPT_USE_SYSTEM_PREFERRED_RNG: u32 = 0x0000_0002;

const PROV_RSA_FULL: u32 = 1;
const CRYPT_VERIFYCONTEXT: u32 = 0xF000_0000;

type BCryptGenRandomFn = unsafe extern "system" fn(*mut c_void, *mut u8, u32, u32) -> i32;

#[link(name = "advapi32")]
unsafe extern "system" {
    fn CryptAcquireContextW(
        phprov: *mut usize,
        szcontainer: *const u16,
        szprovider: *const u16,
        dwprovtype: u32,
        dwflags: u32,
    ) -> i32;
    fn CryptGenRandom(hprov: usize, dwlen: u32, pbbuffer: *mut u8) -> i32;
    fn CryptReleaseContext(hprov: usize, dwflags: u32) -> i32;
}

/// Sentinel: `bcrypt.dll` not looked at yet.
const UNRESOLVED: usize = 1;

/// Address of `BCryptGenRandom`, `0` if unavailable.
static BCRYPT_GEN_RANDOM: AtomicUsize = AtomicUsize::new(UNRESOLVED);

fn load_bcrypt() -> usize {
    // SAFETY: bcrypt.dll is a system library without initialization
    // side effects visible to this process.
    let library = match unsafe { Library::new("bcrypt.dll") } {
        Ok(library) => library,
        Err(err) => {
            log::trace!("bcrypt.dll not loadable: {err}");
            return 0;
        }
    };

    // SAFETY: the exported symbol has the `BCryptGenRandomFn` signature.
    let addr = match unsafe { library.get::<BCryptGenRandomFn>(b"BCryptGenRandom\0") } {
        Ok(symbol) => *symbol as usize,
        Err(err) => {
            log::trace!("BCryptGenRandom not exported: {err}");
            return 0;
        }
    };

    // The cached address must outlive every caller.
    mem::forget(library);
    addr
}

fn bcrypt_gen_random() -> Option<BCryptGenRandomFn> {
    let mut addr = BCRYPT_GEN_RANDOM.load(Ordering::Acquire);

    if addr == UNRESOLVED {
        addr = load_bcrypt();
        BCRYPT_GEN_RANDOM.store(addr, Ordering::Release);
    }

    // SAFETY: a non-zero value was produced by `load_bcrypt` from the
    // resolved symbol, which stays mapped for the process lifetime.
    (addr != 0).then(|| unsafe { mem::transmute::<usize, BCryptGenRandomFn>(addr) })
}

/// `BCryptGenRandom` with the system-preferred RNG.
pub(crate) struct BCrypt;

impl Backend for BCrypt {
    fn kind(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    fn max_chunk(&self) -> Option<usize> {
        Some(u32::MAX as usize)
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        let Some(gen_random) = bcrypt_gen_random() else {
            return Err(NativeError::Io(io::ErrorKind::Unsupported));
        };

        // SAFETY: `dest` is valid for `dest.len()` writable bytes, which the
        // filler keeps within u32.
        let status = unsafe {
            gen_random(
                ptr::null_mut(),
                dest.as_mut_ptr(),
                dest.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != STATUS_SUCCESS {
            return Err(NativeError::NtStatus(status as u32));
        }

        Ok(dest.len())
    }
}

impl Capability for BCrypt {
    fn provides(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    fn is_available(&self) -> bool {
        bcrypt_gen_random().is_some()
    }
}

/// CryptoAPI provider context, released on drop.
pub(crate) struct CryptContext {
    handle: usize,
}

impl CryptContext {
    /// Acquires an ephemeral `PROV_RSA_FULL` context.
    pub(crate) fn acquire() -> Result<Self, NativeError> {
        let mut handle: usize = 0;

        // SAFETY: `handle` is a valid out-pointer; null container and
        // provider select the defaults.
        let ok = unsafe {
            CryptAcquireContextW(
                &mut handle,
                ptr::null(),
                ptr::null(),
                PROV_RSA_FULL,
                CRYPT_VERIFYCONTEXT,
            )
        };

        if ok == 0 {
            return Err(NativeError::last_os_error());
        }

        Ok(Self { handle })
    }
}

impl Backend for CryptContext {
    fn kind(&self) -> BackendKind {
        BackendKind::LegacyCrypto
    }

    fn max_chunk(&self) -> Option<usize> {
        Some(u32::MAX as usize)
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        // SAFETY: `handle` is a live context; `dest` is valid for
        // `dest.len()` writable bytes, kept within u32 by the filler.
        let ok = unsafe { CryptGenRandom(self.handle, dest.len() as u32, dest.as_mut_ptr()) };

        if ok == 0 {
            return Err(NativeError::last_os_error());
        }

        Ok(dest.len())
    }
}

impl Drop for CryptContext {
    fn drop(&mut self) {
        // SAFETY: `handle` was acquired by `acquire` and is released once.
        unsafe {
            CryptReleaseContext(self.handle, 0);
        }
    }
}

/// Presence stand-in for [`CryptContext`], which only exists per fill.
pub(crate) struct LegacyCrypto;

impl Capability for LegacyCrypto {
    fn provides(&self) -> BackendKind {
        BackendKind::LegacyCrypto
    }

    fn is_available(&self) -> bool {
        true
    }
}
