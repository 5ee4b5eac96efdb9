// src/fft/bitrev.rs

/// Shift-count integer log2, truncating: `ilog2(5) == 2`. Returns 0 for
/// inputs of 1 or 0.
pub fn ilog2(mut n: usize) -> u32 {
    let mut out = 0;
    while n > 1 {
        n >>= 1;
        out += 1;
    }

    out
}

/// Reverses the low `bits` bits of `x`.
///
/// Fixed divide-and-conquer swap sequence (adjacent bits, pairs, nibbles,
/// bytes, halfwords) followed by a shift that drops the unused high bits.
/// `bits` must be in `1..=32`.
pub fn reverse_bits(mut x: u32, bits: u32) -> u32 {
    x = ((x & 0x5555_5555) << 1) | ((x & 0xAAAA_AAAA) >> 1);
    x = ((x & 0x3333_3333) << 2) | ((x & 0xCCCC_CCCC) >> 2);
    x = ((x & 0x0F0F_0F0F) << 4) | ((x & 0xF0F0_F0F0) >> 4);
    x = ((x & 0x00FF_00FF) << 8) | ((x & 0xFF00_FF00) >> 8);
    x = ((x & 0x0000_FFFF) << 16) | ((x & 0xFFFF_0000) >> 16);

    x >> (32 - bits)
}

/// Reorders `v` into bit-reversed index order in place, swapping each
/// unordered pair exactly once. The length must be a power of two >= 2;
/// the engine guarantees it through the validated `Signal`.
pub fn permute_in_place(v: &mut [i32]) {
    let bits = ilog2(v.len());

    for i in 0..v.len() {
        let j = reverse_bits(i as u32, bits) as usize;
        if i >= j {
            continue;
        }
        v.swap(i, j);
    }
}
