// src/trig/core.rs

use crate::common::{NopTrace, TraceSink};

/// Angles are integer counts of divisions of a full turn; all angle
/// arithmetic happens in this unit, never in radians.
pub const FULL_TURN: i32 = 1024;
pub const HALF_TURN: i32 = 512;
pub const QUARTER_TURN: i32 = 256;
pub const THREE_QUARTER_TURN: i32 = 768;

/// Size of the arcsine table; the binary search resolves sine values on a
/// grid of `1/TRIG_UNITY`.
pub const TRIG_UNITY: i32 = 128;

/// Hard ceiling on the binary-search iteration count: log2 of the table
/// size. Asking for more cannot improve the result.
pub const TRIG_ACCURACY_MAX: u8 = 7;

const QUARTER_TURN_LOG2: u32 = 8;

/// Entry `i` is the angle (in turn divisions) whose sine is `i / 128`.
/// Monotonically non-decreasing, spanning 0 to just under a quarter turn.
static ARCSIN_DIVS: [i32; TRIG_UNITY as usize] =
    include!(concat!(env!("OUT_DIR"), "/arcsin_table.rs"));

/// Normalizes an angle into `[0, FULL_TURN]` by adding or subtracting whole
/// turns. A value of exactly `FULL_TURN` is kept; the projection treats it
/// as an exact case.
pub fn unwrap_divs(mut theta_divs: i32) -> i32 {
    while theta_divs > FULL_TURN {
        theta_divs -= FULL_TURN;
    }
    while theta_divs < 0 {
        theta_divs += FULL_TURN;
    }

    theta_divs
}

/// Approximates `a * sin(theta)` without multiplying: a binary search over
/// the arcsine table walks the index interval while a mirrored walk halves
/// an amplitude step, so the result converges to within `|a| / 2^accuracy`.
pub fn approx_sin_proj(a: i32, theta_divs: i32, accuracy: u8) -> i32 {
    approx_sin_proj_traced(a, theta_divs, accuracy, &mut NopTrace)
}

/// `a * cos(theta)` via the quarter-turn phase shift: cos(x) = sin(90 - x).
pub fn approx_cos_proj(a: i32, theta_divs: i32, accuracy: u8) -> i32 {
    approx_sin_proj(a, QUARTER_TURN - theta_divs, accuracy)
}

pub(crate) fn approx_cos_proj_traced(
    a: i32,
    theta_divs: i32,
    accuracy: u8,
    trace: &mut dyn TraceSink,
) -> i32 {
    approx_sin_proj_traced(a, QUARTER_TURN - theta_divs, accuracy, trace)
}

pub(crate) fn approx_sin_proj_traced(
    a: i32,
    theta_divs: i32,
    mut accuracy: u8,
    trace: &mut dyn TraceSink,
) -> i32 {
    if accuracy > TRIG_ACCURACY_MAX {
        accuracy = TRIG_ACCURACY_MAX;
        trace.line(format_args!(
            "approx_sin_proj: accuracy clamped to {}",
            TRIG_ACCURACY_MAX
        ));
    }

    let mut theta_divs = unwrap_divs(theta_divs);

    if theta_divs == 0 || theta_divs == HALF_TURN || theta_divs == FULL_TURN {
        return 0;
    }
    if theta_divs == QUARTER_TURN {
        return a;
    }
    if theta_divs == THREE_QUARTER_TURN {
        return -a;
    }

    // Everything reduces to the first quadrant.
    let quad = theta_divs >> QUARTER_TURN_LOG2;

    if quad == 1 {
        theta_divs = HALF_TURN - theta_divs;
    } else if quad == 2 {
        theta_divs -= HALF_TURN;
    } else if quad == 3 {
        theta_divs = FULL_TURN - theta_divs;
    }

    // Binary search in the 0-1 sine interval, corresponding to 0-a.
    let mut sin_guess = TRIG_UNITY >> 1; // start the guess from the middle: 1/2
    let mut sin_step = TRIG_UNITY >> 2; // search step starting from 1/4

    let mut a_guess = a >> 1; // a/2, arithmetic shift so negative a works
    let mut a_step = a >> 2;

    for _ in 0..accuracy {
        let entry = ARCSIN_DIVS[sin_guess as usize];
        if theta_divs > entry {
            sin_guess += sin_step;
            a_guess += a_step;
        } else if theta_divs < entry {
            sin_guess -= sin_step;
            a_guess -= a_step;
        } else {
            // exact table hit, nothing left to refine
            break;
        }

        sin_step >>= 1;
        a_step >>= 1;
    }

    if quad == 2 || quad == 3 {
        return -a_guess;
    }

    a_guess
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
