// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # osrand
//!
//! Portable access to the operating system's cryptographically secure random
//! byte source.
//!
//! The crate picks the best native entropy mechanism of the host once per
//! process, drives it until the caller's buffer is full (splitting capped
//! requests, continuing short reads, retrying interrupted calls), and folds
//! every native failure into a small portable [`ErrorKind`].
//!
//! ## Core Operations
//!
//! - [`get_random`]: fill the first `size` bytes of a buffer
//! - [`fill`]: fill a whole slice
//! - [`select_backend`]: the backend committed for this process
//!
//! ## Traits
//!
//! - [`Backend`]: one native primitive, driven by [`fill_with`]
//! - [`Capability`]: runtime presence test used by discovery
//! - [`DeviceOpener`] / [`DeviceHandle`]: the device-file seam
//!
//! ## Example
//!
//! ```rust
//! let mut key = [0u8; 32];
//! osrand::get_random(&mut key, 32).expect("Failed to get_random(..)");
//!
//! let mut nonce = [0u8; 24];
//! osrand::fill(&mut nonce).expect("Failed to fill(..)");
//! ```
//!
//! ## Platform Support
//!
//! | Target | Backends, most preferred first |
//! |---|---|
//! | Linux, Android | `getrandom(2)`, `getentropy(3)`, random device |
//! | FreeBSD, DragonFly, NetBSD, illumos, Solaris | `getrandom(2)`, random device |
//! | OpenBSD | `getentropy(2)`, random device |
//! | macOS | `getentropy(3)`, `SecRandomCopyBytes`, random device |
//! | iOS, tvOS, watchOS, visionOS | `SecRandomCopyBytes` |
//! | Windows | `BCryptGenRandom`, `CryptGenRandom` |
//! | Fuchsia | `zx_cprng_draw` |
//! | WebAssembly | host crypto via `getrandom` |
//! | other unix | random device |
//!
//! The random device defaults to `/dev/random` and can be changed at build
//! time with `OSRAND_DEV_RANDOM`. `OSRAND_BACKEND` forces one backend and
//! skips discovery.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod backend;
mod config;
mod device;
mod error;
mod fill;
mod names;
mod normalize;
mod probe;
mod support;
mod sys;

pub use backend::{Backend, BackendKind};
pub use device::{DevRandom, DeviceHandle, DeviceOpener, FsOpener};
pub use error::{ErrorKind, NativeError};
pub use fill::{MAX_STALLED_DRAWS, fill_with};
pub use probe::{Capability, Selection, discover, select_backend};

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;

/// Fills `dest` entirely with cryptographically secure random bytes.
///
/// The first call in the process selects the backend (see
/// [`select_backend`]). An empty slice succeeds without touching any backend.
///
/// # Errors
///
/// The normalized failure of the selected backend. On error the contents of
/// `dest` are unspecified.
pub fn fill(dest: &mut [u8]) -> Result<(), ErrorKind> {
    if dest.is_empty() {
        return Ok(());
    }

    sys::fill(select_backend(), dest)
}

/// Fills `buffer[..size]` with cryptographically secure random bytes.
///
/// Bytes past `size` are left untouched. `size == 0` succeeds without any
/// backend call.
///
/// # Errors
///
/// - [`ErrorKind::InvalidArgument`] if `size` exceeds `buffer.len()`; nothing
///   is written.
/// - Otherwise as [`fill`].
pub fn get_random(buffer: &mut [u8], size: usize) -> Result<(), ErrorKind> {
    let dest = buffer.get_mut(..size).ok_or(ErrorKind::InvalidArgument)?;
    fill(dest)
}

/// [`get_random`] against a caller-supplied backend instead of the selected
/// one.
///
/// # Errors
///
/// As [`get_random`], with failures coming from `backend`.
pub fn get_random_with<B: Backend + ?Sized>(
    backend: &mut B,
    buffer: &mut [u8],
    size: usize,
) -> Result<(), ErrorKind> {
    let dest = buffer.get_mut(..size).ok_or(ErrorKind::InvalidArgument)?;
    fill_with(backend, dest)
}
