// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use crate::device::{DeviceHandle, DeviceOpener};
use crate::error::NativeError;
use crate::support::test_utils::{MockDeviceBehaviour, MockDeviceOpener};

const FAILURE: NativeError = NativeError::Io(io::ErrorKind::Other);

#[test]
fn test_mock_device_counts_open_and_drop() {
    let opener = MockDeviceOpener::new(MockDeviceBehaviour::None);

    let handle = opener.open("/dev/mock").expect("Failed to open(..)");
    assert_eq!(opener.open_count(), 1);
    assert_eq!(opener.close_count(), 0);

    drop(handle);
    assert_eq!(opener.close_count(), 1);
}

#[test]
fn test_mock_device_behaviour_fail_at_open() {
    let opener = MockDeviceOpener::new(MockDeviceBehaviour::FailAtOpen(FAILURE));

    assert!(matches!(opener.open("/dev/mock"), Err(FAILURE)));
    assert_eq!(opener.open_count(), 0);
}

#[test]
fn test_mock_device_read_behaviours() {
    let mut buf = [0u8; 10];

    let opener = MockDeviceOpener::new(MockDeviceBehaviour::ShortReads(3));
    let mut handle = opener.open("/dev/mock").expect("Failed to open(..)");
    assert_eq!(handle.read(&mut buf), Ok(3));

    let opener = MockDeviceOpener::new(MockDeviceBehaviour::Eof);
    let mut handle = opener.open("/dev/mock").expect("Failed to open(..)");
    assert_eq!(handle.read(&mut buf), Ok(0));

    let opener = MockDeviceOpener::new(MockDeviceBehaviour::FailAtRead(FAILURE));
    let mut handle = opener.open("/dev/mock").expect("Failed to open(..)");
    assert_eq!(handle.read(&mut buf), Err(FAILURE));
}
