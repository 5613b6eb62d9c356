// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for osrand.

use std::io;

use thiserror::Error;

/// Failure categories surfaced by [`fill`](crate::fill) and
/// [`get_random`](crate::get_random).
///
/// Backend-specific codes never reach the caller: every native failure is
/// folded into one of these categories. Interruption and would-block
/// conditions are retried internally and have no variant here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// The entropy source is busy.
    #[error("entropy source busy")]
    Busy = 0,

    /// The entropy source, device or provider does not exist.
    #[error("entropy source not found")]
    NotFound = 1,

    /// The host ran out of memory while serving the request.
    #[error("out of memory")]
    OutOfMemory = 2,

    /// The request was rejected as malformed.
    #[error("invalid argument")]
    InvalidArgument = 3,

    /// The process is not allowed to use the entropy source.
    #[error("access denied")]
    AccessDenied = 4,

    /// Low-level I/O failure, including a device that stopped producing bytes.
    #[error("i/o error")]
    IOError = 5,

    /// A quota or disk limit was hit.
    #[error("quota exceeded")]
    QuotaExceeded = 6,

    /// The platform reported a conflicting object.
    #[error("already exists")]
    AlreadyExists = 7,

    /// A handle given to the platform was invalid.
    #[error("bad handle")]
    BadHandle = 8,

    /// The selected backend is not available on this host or build.
    #[error("not supported")]
    NotSupported = 9,

    /// Any failure without a better category.
    #[error("unknown error")]
    Unknown = 10,
}

/// A failure signal exactly as a backend primitive reported it.
///
/// Converted into [`ErrorKind`] through `From`, which applies the
/// backend-scoped mapping tables.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NativeError {
    /// libc-style error number (`errno`).
    #[error("errno {0}")]
    Errno(i32),

    /// std I/O failure that carried no raw OS code.
    #[error("i/o failure: {0}")]
    Io(io::ErrorKind),

    /// Windows `NTSTATUS` returned by `BCryptGenRandom`.
    #[error("NTSTATUS {0:#010x}")]
    NtStatus(u32),

    /// Windows `GetLastError` value, including `NTE_*` codes from CryptoAPI.
    #[error("win32 error {0:#x}")]
    Win32(u32),

    /// Apple Security framework `OSStatus`.
    #[error("OSStatus {0}")]
    OsStatus(i32),
}

impl NativeError {
    /// Captures the calling thread's last OS error.
    pub fn last_os_error() -> Self {
        Self::from(io::Error::last_os_error())
    }

    /// Whether the condition is transient and the identical call should be
    /// issued again (signal interruption, would-block).
    pub fn is_transient(&self) -> bool {
        match *self {
            Self::Errno(code) => errno_is_transient(code),
            Self::Io(kind) => matches!(kind, io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock),
            Self::NtStatus(_) | Self::Win32(_) | Self::OsStatus(_) => false,
        }
    }
}

#[cfg(unix)]
fn errno_is_transient(code: i32) -> bool {
    code == libc::EINTR || code == libc::EAGAIN || code == libc::EWOULDBLOCK
}

#[cfg(not(unix))]
fn errno_is_transient(_code: i32) -> bool {
    false
}

impl From<io::Error> for NativeError {
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            #[cfg(windows)]
            Some(code) => Self::Win32(code as u32),
            #[cfg(not(windows))]
            Some(code) => Self::Errno(code),
            None => Self::Io(err.kind()),
        }
    }
}
