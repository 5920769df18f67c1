//! SuperFastHash
//!
//! Paul Hsieh's SuperFastHash, bit-compatible with the C implementation the
//! LMO runtime uses for lookups. Two details of that build are part of the
//! format and are reproduced here:
//!
//! - 16-bit words are read little-endian from unsigned bytes
//! - the lone trailing byte (remainder 1) and the third trailing byte
//!   (remainder 3) are read through a signed `char`, so bytes >= 0x80 are
//!   sign-extended before being mixed in

/// Hash `data` into the 32-bit id stored in LMO index records.
///
/// Returns 0 for empty input.
pub fn sfh_hash(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }

    // Seed is the length; the C code takes an `int` and truncates the same way.
    let mut hash = data.len() as u32;

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        hash = hash.wrapping_add(get16(chunk[0], chunk[1]));
        let tmp = (get16(chunk[2], chunk[3]) << 11) ^ hash;
        hash = (hash << 16) ^ tmp;
        hash = hash.wrapping_add(hash >> 11);
    }

    match *chunks.remainder() {
        [b0, b1, b2] => {
            hash = hash.wrapping_add(get16(b0, b1));
            hash ^= hash << 16;
            hash ^= signed(b2) << 18;
            hash = hash.wrapping_add(hash >> 11);
        }
        [b0, b1] => {
            hash = hash.wrapping_add(get16(b0, b1));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        [b0] => {
            hash = hash.wrapping_add(signed(b0));
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    // Force "avalanching" of final 127 bits
    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);

    hash
}

#[inline]
fn get16(lo: u8, hi: u8) -> u32 {
    u32::from(u16::from_le_bytes([lo, hi]))
}

/// A byte as the C code sees it through `const char *`
#[inline]
fn signed(byte: u8) -> u32 {
    i32::from(byte as i8) as u32
}
