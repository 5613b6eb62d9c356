// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

#[link(name = "zircon")]
unsafe extern "C" {
    fn zx_cprng_draw(buffer: *mut u8, length: usize);
}

/// Zircon `zx_cprng_draw`. Cannot fail.
pub(crate) struct CprngDraw;

impl Backend for CprngDraw {
    fn kind(&self) -> BackendKind {
        BackendKind::KernelDraw
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        // SAFETY: `dest` is valid for `dest.len()` writable bytes.
        unsafe { zx_cprng_draw(dest.as_mut_ptr(), dest.len()) };
        Ok(dest.len())
    }
}

impl Capability for CprngDraw {
    fn provides(&self) -> BackendKind {
        BackendKind::KernelDraw
    }

    fn is_available(&self) -> bool {
        true
    }
}
