// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! WebAssembly hosts: delegated to the host's crypto API through `getrandom`.

use std::io;

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::probe::Capability;

/// Host crypto (`crypto.getRandomValues`, WASI `random_get`).
pub(crate) struct HostCrypto;

impl Backend for HostCrypto {
    fn kind(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        getrandom::fill(dest).map_err(|err| match err.raw_os_error() {
            Some(code) => NativeError::Errno(code),
            None if err == getrandom::Error::UNSUPPORTED => {
                NativeError::Io(io::ErrorKind::Unsupported)
            }
            None => NativeError::Io(io::ErrorKind::Other),
        })?;

        Ok(dest.len())
    }
}

impl Capability for HostCrypto {
    fn provides(&self) -> BackendKind {
        BackendKind::OsSecureRng
    }

    fn is_available(&self) -> bool {
        true
    }
}
