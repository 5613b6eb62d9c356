// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use osrand::ErrorKind;
use thiserror::Error;

/// Runtime failures of the `getrandom` command. All exit with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot allocate {size} bytes")]
    Alloc { size: usize },

    #[error("get_random({size}) failed: {kind}")]
    Random { size: usize, kind: ErrorKind },

    #[error("writing to stdout failed: {0}")]
    Stdout(#[from] io::Error),
}
