//! CRC-8 checksum over the package payload

use crate::constants::CRC8_POLY;

/// Compute the CRC-8 of a byte sequence
///
/// MSB-first, polynomial 0x07, initial value 0x00, no final XOR. An empty
/// sequence yields 0x00. Pure and order-sensitive: byte order matters.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0;

    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ CRC8_POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}
