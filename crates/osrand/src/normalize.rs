// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend-scoped tables folding native failure signals into [`ErrorKind`].
//!
//! Each native convention has its own table and its own default bucket for
//! codes the table does not name. Transient conditions never get here: the
//! filler retries them before normalization.

use std::io;

use crate::error::{ErrorKind, NativeError};

impl From<NativeError> for ErrorKind {
    fn from(err: NativeError) -> Self {
        match err {
            NativeError::Errno(code) => errno(code),
            NativeError::Io(kind) => io_kind(kind),
            NativeError::NtStatus(status) => nt_status(status),
            NativeError::Win32(code) => win32(code),
            NativeError::OsStatus(status) => os_status(status),
        }
    }
}

/// errno values. Unnamed codes are `InvalidArgument`.
#[cfg(unix)]
pub(crate) fn errno(code: i32) -> ErrorKind {
    match code {
        libc::EBUSY => ErrorKind::Busy,
        libc::ENOENT => ErrorKind::NotFound,
        libc::ENOMEM => ErrorKind::OutOfMemory,
        libc::EINVAL | libc::EFAULT => ErrorKind::InvalidArgument,
        libc::EACCES | libc::EPERM => ErrorKind::AccessDenied,
        libc::EIO => ErrorKind::IOError,
        libc::EDQUOT => ErrorKind::QuotaExceeded,
        libc::EEXIST => ErrorKind::AlreadyExists,
        libc::EBADF => ErrorKind::BadHandle,
        libc::ENOSYS | libc::EOPNOTSUPP => ErrorKind::NotSupported,
        _ => ErrorKind::InvalidArgument,
    }
}

// No errno-reporting backend exists off unix.
#[cfg(not(unix))]
pub(crate) fn errno(_code: i32) -> ErrorKind {
    ErrorKind::InvalidArgument
}

/// std I/O kinds without a raw code. Unnamed kinds are `IOError`.
pub(crate) fn io_kind(kind: io::ErrorKind) -> ErrorKind {
    match kind {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::AccessDenied,
        io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
        io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
        io::ErrorKind::OutOfMemory => ErrorKind::OutOfMemory,
        io::ErrorKind::Unsupported => ErrorKind::NotSupported,
        _ => ErrorKind::IOError,
    }
}

pub(crate) const STATUS_INVALID_HANDLE: u32 = 0xC000_0008;
pub(crate) const STATUS_INVALID_PARAMETER: u32 = 0xC000_000D;

/// `BCryptGenRandom` status codes. Unnamed codes are `InvalidArgument`.
pub(crate) fn nt_status(status: u32) -> ErrorKind {
    match status {
        STATUS_INVALID_HANDLE => ErrorKind::BadHandle,
        STATUS_INVALID_PARAMETER => ErrorKind::InvalidArgument,
        _ => ErrorKind::InvalidArgument,
    }
}

pub(crate) const ERROR_FILE_NOT_FOUND: u32 = 2;
pub(crate) const ERROR_INVALID_HANDLE: u32 = 6;
pub(crate) const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
pub(crate) const ERROR_INVALID_PARAMETER: u32 = 87;
pub(crate) const ERROR_BUSY: u32 = 170;

pub(crate) const NTE_BAD_UID: u32 = 0x8009_0001;
pub(crate) const NTE_BAD_SIGNATURE: u32 = 0x8009_0006;
pub(crate) const NTE_BAD_FLAGS: u32 = 0x8009_0009;
pub(crate) const NTE_BAD_KEY_STATE: u32 = 0x8009_000B;
pub(crate) const NTE_NO_MEMORY: u32 = 0x8009_000E;
pub(crate) const NTE_EXISTS: u32 = 0x8009_000F;
pub(crate) const NTE_BAD_PROV_TYPE: u32 = 0x8009_0014;
pub(crate) const NTE_BAD_KEYSET: u32 = 0x8009_0016;
pub(crate) const NTE_PROV_TYPE_NOT_DEF: u32 = 0x8009_0017;
pub(crate) const NTE_PROV_TYPE_ENTRY_BAD: u32 = 0x8009_0018;
pub(crate) const NTE_KEYSET_NOT_DEF: u32 = 0x8009_0019;
pub(crate) const NTE_KEYSET_ENTRY_BAD: u32 = 0x8009_001A;
pub(crate) const NTE_PROV_TYPE_NO_MATCH: u32 = 0x8009_001B;
pub(crate) const NTE_SIGNATURE_FILE_BAD: u32 = 0x8009_001C;
pub(crate) const NTE_PROVIDER_DLL_FAIL: u32 = 0x8009_001D;
pub(crate) const NTE_PROV_DLL_NOT_FOUND: u32 = 0x8009_001E;
pub(crate) const NTE_BAD_KEYSET_PARAM: u32 = 0x8009_001F;
pub(crate) const NTE_FAIL: u32 = 0x8009_0020;

/// `CryptAcquireContext`/`CryptGenRandom` last-error codes. Unnamed codes are
/// `InvalidArgument`.
pub(crate) fn win32(code: u32) -> ErrorKind {
    match code {
        ERROR_BUSY => ErrorKind::Busy,

        ERROR_FILE_NOT_FOUND | NTE_KEYSET_NOT_DEF | NTE_PROV_DLL_NOT_FOUND => ErrorKind::NotFound,

        ERROR_NOT_ENOUGH_MEMORY | NTE_NO_MEMORY => ErrorKind::OutOfMemory,

        NTE_EXISTS => ErrorKind::AlreadyExists,

        ERROR_INVALID_HANDLE | NTE_BAD_UID => ErrorKind::BadHandle,

        NTE_BAD_FLAGS
        | NTE_BAD_KEY_STATE
        | NTE_BAD_KEYSET
        | NTE_BAD_KEYSET_PARAM
        | NTE_BAD_PROV_TYPE
        | NTE_BAD_SIGNATURE
        | NTE_KEYSET_ENTRY_BAD
        | NTE_PROV_TYPE_ENTRY_BAD
        | NTE_PROV_TYPE_NO_MATCH
        | NTE_PROV_TYPE_NOT_DEF
        | NTE_PROVIDER_DLL_FAIL
        | NTE_SIGNATURE_FILE_BAD
        | ERROR_INVALID_PARAMETER
        | NTE_FAIL => ErrorKind::InvalidArgument,

        _ => ErrorKind::InvalidArgument,
    }
}

pub(crate) const ERR_SEC_UNIMPLEMENTED: i32 = -4;
pub(crate) const ERR_SEC_DISK_FULL: i32 = -34;
pub(crate) const ERR_SEC_IO: i32 = -36;
pub(crate) const ERR_SEC_PARAM: i32 = -50;
pub(crate) const ERR_SEC_WR_PERM: i32 = -61;
pub(crate) const ERR_SEC_ALLOCATE: i32 = -108;

/// `SecRandomCopyBytes` status codes. Unnamed codes are `InvalidArgument`.
pub(crate) fn os_status(status: i32) -> ErrorKind {
    match status {
        ERR_SEC_UNIMPLEMENTED => ErrorKind::NotSupported,
        ERR_SEC_DISK_FULL => ErrorKind::QuotaExceeded,
        ERR_SEC_IO => ErrorKind::IOError,
        ERR_SEC_ALLOCATE => ErrorKind::OutOfMemory,
        ERR_SEC_WR_PERM => ErrorKind::AccessDenied,
        ERR_SEC_PARAM => ErrorKind::InvalidArgument,
        _ => ErrorKind::InvalidArgument,
    }
}
