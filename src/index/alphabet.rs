use crate::index::constants::BASE32;

const INVALID: u8 = 0xff;

/// Reverse lookup from ASCII byte to symbol index, built at compile time.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the 5-bit index (0-31) of a geohash symbol, or `None` if the
/// character is not part of the alphabet.
pub fn index_of(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match DECODE_TABLE[symbol as usize] {
        INVALID => None,
        idx => Some(idx),
    }
}

/// Returns the geohash symbol for a 5-bit index.
///
/// Only the low five bits of `index` are used.
pub fn symbol_of(index: u8) -> char {
    BASE32[(index & 0x1f) as usize] as char
}
