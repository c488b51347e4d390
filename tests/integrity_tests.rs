//! Tests for the CRC32 integrity check

use uenv::integrity::{checksum, read_stored, verify};

#[test]
fn test_checksum_ieee_check_value() {
    // Standard CRC-32/ISO-HDLC check value
    assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
}

#[test]
fn test_checksum_empty() {
    assert_eq!(checksum(&[]), 0);
}

#[test]
fn test_verify() {
    let data = b"bootdelay=3\0\0\0";
    let crc = checksum(data);

    assert!(verify(crc, data));
    assert!(!verify(crc ^ 1, data));
    assert!(!verify(crc, b"bootdelay=4\0\0\0"));
}

#[test]
fn test_read_stored_little_endian() {
    let blob = [0x26, 0x39, 0xF4, 0xCB, 0x00, b'a'];
    assert_eq!(read_stored(&blob), Some(0xCBF4_3926));
}

#[test]
fn test_read_stored_short_blob() {
    assert_eq!(read_stored(&[1, 2, 3]), None);
}
