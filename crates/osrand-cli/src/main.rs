// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getrandom <SIZE>`: writes SIZE cryptographically secure random bytes to
//! stdout.
//!
//! Exit status: 0 on success, 1 on a runtime failure, 2 on a usage error.


mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use env_logger::Env;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "getrandom")]
#[command(about = "Write cryptographically secure random bytes to stdout")]
#[command(version)]
struct Cli {
    /// Number of bytes to write (non-negative decimal integer)
    #[arg(value_parser = parse_size)]
    size: usize,

    /// Print the selected entropy backend to stderr
    #[arg(long)]
    show_backend: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Accepts plain decimal digits only: no sign, no whitespace, no radix prefix.
fn parse_size(arg: &str) -> Result<usize, String> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("illegal size: {arg:?}"));
    }

    let size: u64 = arg
        .parse()
        .map_err(|_| format!("illegal size: {arg} does not fit in 64 bits"))?;

    usize::try_from(size).map_err(|_| format!("illegal size: {arg} exceeds this platform's address space"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Fills a fresh `size`-byte buffer with one `get_random` call and streams it
/// to `out`.
fn run(size: usize, out: &mut impl Write) -> Result<(), CliError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| CliError::Alloc { size })?;
    buffer.resize(size, 0u8);

    osrand::get_random(&mut buffer, size).map_err(|kind| CliError::Random { size, kind })?;

    out.write_all(&buffer)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.show_backend {
        eprintln!("backend: {}", osrand::select_backend());
    }

    let mut stdout = io::stdout().lock();

    match run(cli.size, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("*** error: {err}");
            ExitCode::FAILURE
        }
    }
}
