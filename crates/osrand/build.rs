// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validates the build-time configuration consumed through `option_env!`.
//!
//! - `OSRAND_BACKEND`: forces one backend and skips runtime discovery.
//! - `OSRAND_DEV_RANDOM`: path of the device-file fallback.

#[path = "src/names.rs"]
mod names;

fn main() {
    println!("cargo:rerun-if-env-changed=OSRAND_BACKEND");
    println!("cargo:rerun-if-env-changed=OSRAND_DEV_RANDOM");

    if let Ok(name) = std::env::var("OSRAND_BACKEND") {
        if names::lookup(&name).is_none() {
            let accepted: Vec<&str> = names::KIND_NAMES.iter().map(|(name, _)| *name).collect();
            panic!(
                "OSRAND_BACKEND={name:?} is not a known backend, expected one of: {}",
                accepted.join(", ")
            );
        }
        println!("cargo:warning=osrand: backend forced to {name}");
    }

    if let Ok(path) = std::env::var("OSRAND_DEV_RANDOM") {
        if path.is_empty() {
            panic!("OSRAND_DEV_RANDOM must not be empty");
        }
    }
}
