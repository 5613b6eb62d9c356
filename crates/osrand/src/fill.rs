// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drives one backend primitive until a request is satisfied.

use crate::backend::Backend;
use crate::error::ErrorKind;

/// Consecutive zero-byte draws tolerated before giving up with
/// [`ErrorKind::IOError`].
///
/// A primitive that keeps reporting success without producing anything (a
/// device at EOF, a misbehaving syscall) would otherwise spin forever.
pub const MAX_STALLED_DRAWS: usize = 8;

/// Fills `dest` completely from `backend`.
///
/// - Requests larger than [`Backend::max_chunk`] are split; the offset
///   advances by what each draw reports, so short draws are simply continued.
/// - Transient failures repeat the identical draw (same offset, same length).
/// - Any other failure stops immediately and is normalized into an
///   [`ErrorKind`]. Bytes already written are not reported.
///
/// An empty `dest` never touches the backend.
///
/// # Errors
///
/// The normalized category of the first non-transient failure,
/// [`ErrorKind::IOError`] after [`MAX_STALLED_DRAWS`] consecutive empty draws,
/// or [`ErrorKind::Unknown`] if the backend claims more bytes than requested.
pub fn fill_with<B: Backend + ?Sized>(backend: &mut B, dest: &mut [u8]) -> Result<(), ErrorKind> {
    let mut offset = 0;
    let mut stalled = 0;

    while offset < dest.len() {
        let remaining = dest.len() - offset;
        let len = match backend.max_chunk() {
            Some(cap) => remaining.min(cap.max(1)),
            None => remaining,
        };

        match backend.draw(&mut dest[offset..offset + len]) {
            Ok(0) => {
                stalled += 1;
                if stalled >= MAX_STALLED_DRAWS {
                    log::debug!(
                        "{} produced no bytes {stalled} times in a row at offset {offset}",
                        backend.kind()
                    );
                    return Err(ErrorKind::IOError);
                }
            }
            Ok(written) if written > len => {
                log::debug!(
                    "{} reported {written} bytes for a {len} byte draw",
                    backend.kind()
                );
                return Err(ErrorKind::Unknown);
            }
            Ok(written) => {
                offset += written;
                stalled = 0;
            }
            Err(err) if err.is_transient() => {
                log::trace!("{} draw of {len} bytes retried: {err}", backend.kind());
            }
            Err(err) => {
                let kind = ErrorKind::from(err);
                log::debug!("{} failed with {err} ({kind})", backend.kind());
                return Err(kind);
            }
        }
    }

    Ok(())
}
