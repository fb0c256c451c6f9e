//! Minimal unsigned varint used to append output indices to derivations.

/// Maximum encoded length of a `u64`.
pub const MAX_VARINT_BYTES: usize = 10;

/// Appends the varint encoding of `value` to `out`.
///
/// Seven bits per byte, least-significant group first; every byte but the last
/// carries the continuation bit.
pub fn write_varint(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}
