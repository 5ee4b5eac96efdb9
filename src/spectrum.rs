// src/spectrum.rs

/// Correction steps for `approx_magnitude`, indexed by how many increments
/// of `min/8` separate `min` from `max`. Regenerated by build.rs from the
/// closed form of `sqrt(max^2 + min^2) - max` in units of `min/16`.
static MAG_CORRECTION: [u32; 25] = include!(concat!(env!("OUT_DIR"), "/magnitude_correction.rs"));

/// Approximates `sqrt(a^2 + b^2)` with shifts and adds. Works best for
/// components above ~16; below that the `min/16` step truncates to zero and
/// the larger component dominates the answer.
pub fn approx_magnitude(a: i32, b: i32) -> u32 {
    if a == 0 && b == 0 {
        return 0;
    }

    let a = a.unsigned_abs();
    let b = b.unsigned_abs();

    let (mut max, min) = if a > b { (a, b) } else { (b, a) };

    // With max > 3*min, ignoring the smaller component stays under ~5%.
    if u64::from(max) > 3 * u64::from(min) {
        return max;
    }

    let mut min_over8 = min >> 3;
    if min_over8 == 0 {
        min_over8 = 1;
    }
    let min_over16 = min_over8 >> 1;

    let mut multiple = 0usize;
    let mut temp = min;
    while temp < max {
        temp += min_over8;
        multiple += 1;
    }

    let steps = MAG_CORRECTION[multiple.min(MAG_CORRECTION.len() - 1)];
    for _ in 0..steps {
        max += min_over16;
    }

    max
}

/// Index of the largest element, first occurrence on ties. The slice must
/// not be empty.
pub fn max_index(v: &[u32]) -> usize {
    let mut max_index = 0;
    let mut max = v[0];

    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > max {
            max_index = i;
            max = x;
        }
    }

    max_index
}

/// Sub-bin peak position: the amplitude-weighted average of the maximum
/// and its two neighbors. A maximum sitting on either boundary is returned
/// as-is, with no interpolation.
pub fn interpolated_peak_position(v: &[u32]) -> f32 {
    let idx = max_index(v);

    if idx == 0 || idx == v.len() - 1 {
        return idx as f32;
    }

    let a = v[idx - 1] as f32;
    let b = v[idx] as f32;
    let c = v[idx + 1] as f32;

    (a * (idx - 1) as f32 + b * idx as f32 + c * (idx + 1) as f32) / (a + b + c)
}
