// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Native entropy mechanisms and the primitive interface the filler drives.

use core::fmt;

use crate::error::NativeError;
use crate::names;

/// The closed set of native entropy mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BackendKind {
    /// Kernel RNG syscall (`getrandom(2)`, OpenBSD `getentropy(2)`).
    KernelSyscall = 1,
    /// libc entropy call with a per-call cap (`getentropy(3)`).
    LibcEntropy = 2,
    /// Random device read through a file handle (`/dev/random`).
    DeviceFile = 3,
    /// OS secure-RNG API (`SecRandomCopyBytes`, `BCryptGenRandom`, host crypto on wasm).
    OsSecureRng = 4,
    /// Legacy Windows CryptoAPI (`CryptGenRandom`).
    LegacyCrypto = 5,
    /// Direct kernel draw that cannot fail (`zx_cprng_draw`).
    KernelDraw = 6,
}

impl BackendKind {
    /// Every kind, in declaration order.
    pub const ALL: [BackendKind; 6] = [
        BackendKind::KernelSyscall,
        BackendKind::LibcEntropy,
        BackendKind::DeviceFile,
        BackendKind::OsSecureRng,
        BackendKind::LegacyCrypto,
        BackendKind::KernelDraw,
    ];

    #[inline(always)]
    pub(crate) const fn code(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BackendKind::KernelSyscall),
            2 => Some(BackendKind::LibcEntropy),
            3 => Some(BackendKind::DeviceFile),
            4 => Some(BackendKind::OsSecureRng),
            5 => Some(BackendKind::LegacyCrypto),
            6 => Some(BackendKind::KernelDraw),
            _ => None,
        }
    }

    /// Resolves one of the names accepted by the `OSRAND_BACKEND` build
    /// override, e.g. `"getrandom"` or `"device-file"`.
    pub fn from_name(name: &str) -> Option<Self> {
        names::lookup(name).and_then(Self::from_code)
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        names::KIND_NAMES
            .iter()
            .find(|(_, code)| *code == self.code())
            .map_or("unknown", |&(name, _)| name)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One native entropy primitive, as driven by [`fill_with`](crate::fill_with).
///
/// A primitive may satisfy a whole request in one call, return fewer bytes
/// than requested without failing, or be capped per call. The filler copes
/// with all three.
pub trait Backend {
    /// Which mechanism this is.
    fn kind(&self) -> BackendKind;

    /// Largest request a single [`draw`](Backend::draw) accepts. `None` means
    /// unbounded.
    fn max_chunk(&self) -> Option<usize> {
        None
    }

    /// Issues exactly one primitive call against `dest`.
    ///
    /// Returns how many leading bytes of `dest` were written.
    ///
    /// # Errors
    ///
    /// Returns the native failure signal unmodified. Transient signals (see
    /// [`NativeError::is_transient`]) cause the filler to repeat the call.
    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError>;
}
