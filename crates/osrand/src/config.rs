// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time configuration. Both variables are validated by `build.rs`.

use crate::backend::BackendKind;

/// Device read by the device-file backend (`OSRAND_DEV_RANDOM`).
#[cfg_attr(
    any(
        not(unix),
        target_os = "fuchsia",
        all(target_vendor = "apple", not(target_os = "macos")),
    ),
    allow(dead_code)
)]
pub(crate) const DEV_RANDOM_PATH: &str = match option_env!("OSRAND_DEV_RANDOM") {
    Some(path) => path,
    None => "/dev/random",
};

/// Backend forced through `OSRAND_BACKEND`, bypassing discovery.
pub(crate) fn backend_override() -> Option<BackendKind> {
    option_env!("OSRAND_BACKEND").and_then(BackendKind::from_name)
}
