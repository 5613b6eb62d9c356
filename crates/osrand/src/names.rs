// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Spellings accepted for the `OSRAND_BACKEND` build override.
//!
//! This file is also compiled into `build.rs`, so it only deals in raw
//! kind codes and must not reference anything else in the crate.

/// `(name, kind code)` pairs. The first entry for each code is canonical.
pub(crate) const KIND_NAMES: &[(&str, u8)] = &[
    ("kernel-syscall", 1),
    ("getrandom", 1),
    ("libc-entropy", 2),
    ("getentropy", 2),
    ("device-file", 3),
    ("dev-random", 3),
    ("secure-rng", 4),
    ("sec-random-copy-bytes", 4),
    ("bcrypt", 4),
    ("legacy-crypto", 5),
    ("crypt-gen-random", 5),
    ("kernel-draw", 6),
    ("zx-cprng-draw", 6),
];

/// Resolves a backend name (case-insensitive, surrounding whitespace ignored).
pub(crate) fn lookup(name: &str) -> Option<u8> {
    let name = name.trim();

    KIND_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}
