// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;
use crate::support::test_utils::{MOCK_FILL_BYTE, MockBackend, MockBackendBehaviour};

const FAILURE: NativeError = NativeError::Io(io::ErrorKind::Other);

#[test]
fn test_mock_backend_behaviour_none() {
    let mut mock = MockBackend::new(MockBackendBehaviour::None);
    let mut buf = [0u8; 16];

    assert_eq!(mock.draw(&mut buf), Ok(16));
    assert!(buf.iter().all(|b| *b == MOCK_FILL_BYTE));
}

#[test]
fn test_mock_backend_behaviour_short_draws() {
    let mut mock = MockBackend::new(MockBackendBehaviour::ShortDraws(4));
    let mut buf = [0u8; 16];

    assert_eq!(mock.draw(&mut buf), Ok(4));
    assert!(buf[..4].iter().all(|b| *b == MOCK_FILL_BYTE));
    assert!(buf[4..].iter().all(|b| *b == 0));
}

#[test]
fn test_mock_backend_behaviour_fail_transiently() {
    let mut mock = MockBackend::new(MockBackendBehaviour::FailTransiently(2, FAILURE));
    let mut buf = [0u8; 4];

    assert_eq!(mock.draw(&mut buf), Err(FAILURE));
    assert_eq!(mock.draw(&mut buf), Err(FAILURE));
    assert_eq!(mock.draw(&mut buf), Ok(4));
}

#[test]
fn test_mock_backend_behaviour_fail_at_nth_draw() {
    let mut mock = MockBackend::new(MockBackendBehaviour::FailAtNthDraw(2, FAILURE));
    let mut buf = [0u8; 4];

    assert_eq!(mock.draw(&mut buf), Ok(4));
    assert_eq!(mock.draw(&mut buf), Err(FAILURE));
    assert_eq!(mock.draw(&mut buf), Ok(4));
}

#[test]
fn test_mock_backend_behaviour_stall_and_overreport() {
    let mut mock = MockBackend::new(MockBackendBehaviour::StallAlways);
    let mut buf = [0u8; 4];

    assert_eq!(mock.draw(&mut buf), Ok(0));

    mock.change_behaviour(MockBackendBehaviour::Overreport);
    assert_eq!(mock.draw(&mut buf), Ok(5));
}

#[test]
fn test_mock_backend_records_requests() {
    let mut mock = MockBackend::new(MockBackendBehaviour::FailAlways(FAILURE))
        .with_max_chunk(8)
        .with_kind(BackendKind::LibcEntropy);

    assert_eq!(mock.kind(), BackendKind::LibcEntropy);
    assert_eq!(mock.max_chunk(), Some(8));

    let _ = mock.draw(&mut [0u8; 3]);
    let _ = mock.draw(&mut [0u8; 5]);
    assert_eq!(mock.requested(), &[3, 5]);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}
