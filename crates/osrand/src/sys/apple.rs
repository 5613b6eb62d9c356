// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::{c_int, c_void};
use core::ptr;

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

const ERR_SEC_SUCCESS: c_int = 0;

#[link(name = "Security", kind = "framework")]
unsafe extern "C" {
    fn SecRandomCopyBytes(rnd: *const c_void, count: usize, bytes: *mut c_void) -> c_int;
}

/// Security framework `SecRandomCopyBytes` on the default generator.
pub(crate) struct SecRandom;

impl Backend for SecRandom {
    fn kind(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        // SAFETY: `dest` is valid for `dest.len()` writable bytes; a null
        // generator selects kSecRandomDefault.
        let status = unsafe { SecRandomCopyBytes(ptr::null(), dest.len(), dest.as_mut_ptr().cast()) };

        if status != ERR_SEC_SUCCESS {
            return Err(NativeError::OsStatus(status));
        }

        Ok(dest.len())
    }
}

impl Capability for SecRandom {
    fn provides(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    // Linked at build time.
    fn is_available(&self) -> bool {
        true
    }
}
