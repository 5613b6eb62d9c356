// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Platform families: the ranked candidates each one probes, and dispatch from
//! a committed [`BackendKind`] to its primitive.

#[cfg(not(any(unix, windows, target_family = "wasm")))]
compile_error!("osrand supports unix, windows and wasm targets only");

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "macos",
))]
mod weak;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
))]
mod syscall;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "openbsd",
))]
mod getentropy;

#[cfg(target_vendor = "apple")]
mod apple;

#[cfg(target_os = "fuchsia")]
mod fuchsia;

#[cfg(all(target_family = "wasm", not(unix)))]
mod wasm;

#[cfg(windows)]
mod windows;

use crate::backend::BackendKind;
use crate::error::ErrorKind;
use crate::probe::Capability;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
    target_os = "openbsd",
    target_os = "fuchsia",
    target_vendor = "apple",
    windows,
    all(target_family = "wasm", not(unix)),
))]
use crate::fill::fill_with;

#[cfg(all(
    unix,
    not(target_os = "fuchsia"),
    not(all(target_vendor = "apple", not(target_os = "macos"))),
))]
use crate::device::{DevRandom, FsOpener};

#[cfg(all(
    unix,
    not(target_os = "fuchsia"),
    not(all(target_vendor = "apple", not(target_os = "macos"))),
))]
pub(crate) static DEV_RANDOM: DevRandom<FsOpener> =
    DevRandom::new(crate::config::DEV_RANDOM_PATH, FsOpener);

/// Linux, Android.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[
    &syscall::KernelGetRandom,
    &getentropy::WeakGetEntropy,
    &DEV_RANDOM,
];

/// FreeBSD, DragonFly, NetBSD, illumos, Solaris.
#[cfg(any(
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "illumos",
    target_os = "solaris",
))]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&syscall::KernelGetRandom, &DEV_RANDOM];

#[cfg(target_os = "openbsd")]
pub(crate) static CANDIDATES: &[&dyn Capability] =
    &[&getentropy::OpenBsdGetEntropy, &DEV_RANDOM];

#[cfg(target_os = "macos")]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[
    &getentropy::WeakGetEntropy,
    &apple::SecRandom,
    &DEV_RANDOM,
];

/// iOS, tvOS, watchOS, visionOS.
#[cfg(all(target_vendor = "apple", not(target_os = "macos")))]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&apple::SecRandom];

#[cfg(windows)]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&windows::BCrypt, &windows::LegacyCrypto];

#[cfg(target_os = "fuchsia")]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&fuchsia::CprngDraw];

#[cfg(all(target_family = "wasm", not(unix)))]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&wasm::HostCrypto];

/// Every other unix.
#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "illumos",
        target_os = "solaris",
        target_os = "openbsd",
        target_os = "fuchsia",
        target_vendor = "apple",
    )),
))]
pub(crate) static CANDIDATES: &[&dyn Capability] = &[&DEV_RANDOM];

/// Fills `dest` with the primitive behind `kind`.
///
/// Kinds this target cannot execute (possible only through a build-time
/// override) fail with [`ErrorKind::NotSupported`].
pub(crate) fn fill(kind: BackendKind, dest: &mut [u8]) -> Result<(), ErrorKind> {
    match kind {
        #[cfg(any(
            target_os = "linux",
            target_os = "android",
            target_os = "freebsd",
            target_os = "dragonfly",
            target_os = "netbsd",
            target_os = "illumos",
            target_os = "solaris",
        ))]
        BackendKind::KernelSyscall => fill_with(&mut syscall::KernelGetRandom, dest),

        #[cfg(target_os = "openbsd")]
        BackendKind::KernelSyscall => fill_with(&mut getentropy::OpenBsdGetEntropy, dest),

        #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
        BackendKind::LibcEntropy => fill_with(&mut getentropy::WeakGetEntropy, dest),

        #[cfg(all(
            unix,
            not(target_os = "fuchsia"),
            not(all(target_vendor = "apple", not(target_os = "macos"))),
        ))]
        BackendKind::DeviceFile => DEV_RANDOM.fill(dest),

        #[cfg(target_vendor = "apple")]
        BackendKind::OsSecureRng => fill_with(&mut apple::SecRandom, dest),

        #[cfg(windows)]
        BackendKind::OsSecureRng => fill_with(&mut windows::BCrypt, dest),

        #[cfg(windows)]
        BackendKind::LegacyCrypto => {
            let mut context = windows::CryptContext::acquire().map_err(|err| {
                log::debug!("CryptAcquireContextW failed: {err}");
                ErrorKind::from(err)
            })?;

            fill_with(&mut context, dest)
        }

        #[cfg(target_os = "fuchsia")]
        BackendKind::KernelDraw => fill_with(&mut fuchsia::CprngDraw, dest),

        #[cfg(all(target_family = "wasm", not(unix)))]
        BackendKind::OsSecureRng => fill_with(&mut wasm::HostCrypto, dest),

        unsupported => {
            log::debug!("{unsupported} cannot run on this target");
            Err(ErrorKind::NotSupported)
        }
    }
}
