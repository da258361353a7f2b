/// Returns the width in bytes of a UTF-8 encoded character given its first byte.
#[inline]
pub fn char_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        // continuation byte, not a character boundary, advance minimally
        0x80..=0xBF => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xFF => 4,
    }
}
