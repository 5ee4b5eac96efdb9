// src/fft/core.rs

use super::bitrev::{ilog2, permute_in_place};
use crate::common::{NopTrace, TraceSink};
use crate::signal::Signal;
use crate::trig::{approx_cos_proj_traced, approx_sin_proj_traced};
use crate::trig::{FULL_TURN, HALF_TURN, TRIG_ACCURACY_MAX};
use num_complex::Complex;

/// Transform direction: `Forward` to the frequency domain, `Reverse` back
/// to the time domain (with 1/N normalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Default trig binary-search depth: the table's full precision.
pub const DEFAULT_ACCURACY: u8 = TRIG_ACCURACY_MAX;

/// Dynamic-range target for forward pre-scaling. A real swing below this is
/// shifted up to the same order of magnitude, so the butterflies carry as
/// many significant bits as the headroom allows.
pub(crate) const SWING_TARGET_LOG2: u32 = 14;
pub(crate) const SWING_TARGET: u32 = 1 << SWING_TARGET_LOG2;

/// In-place radix-2 decimation-in-time FFT engine over a validated
/// `Signal`, with an injectable diagnostic sink.
///
/// All rotation factors come from the table-driven sine projection, so the
/// whole transform is integer-only: shifts, adds and table lookups, no
/// multiplications and no floating point.
pub struct Fft<S: TraceSink = NopTrace> {
    trace: S,
}

impl Fft<NopTrace> {
    pub fn new() -> Self {
        Self { trace: NopTrace }
    }
}

impl Default for Fft<NopTrace> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TraceSink> Fft<S> {
    /// Builds an engine that reports diagnostics through `trace`.
    pub fn with_trace(trace: S) -> Self {
        Self { trace }
    }

    /// Access to the injected sink, e.g. to drain a collecting trace.
    pub fn trace_mut(&mut self) -> &mut S {
        &mut self.trace
    }

    /// Forward transform at default accuracy.
    pub fn forward(&mut self, signal: &mut Signal<'_>) {
        self.process(signal, DEFAULT_ACCURACY, Direction::Forward);
    }

    /// Inverse transform at default accuracy.
    pub fn inverse(&mut self, signal: &mut Signal<'_>) {
        self.process(signal, DEFAULT_ACCURACY, Direction::Reverse);
    }

    /// Transforms the signal in place.
    ///
    /// Forward: pre-scales for dynamic range when the real swing is small,
    /// bit-reverses the real buffer and runs log2(N) butterfly stages; the
    /// buffers end up holding the spectrum in natural order (the imaginary
    /// input is assumed zero). Reverse: bit-reverses both buffers, runs the
    /// stages with the opposite rotation sign and divides everything by N.
    ///
    /// An over-range `accuracy` is clamped to `TRIG_ACCURACY_MAX` and
    /// reported through the trace sink; it never aborts the transform.
    pub fn process(&mut self, signal: &mut Signal<'_>, accuracy: u8, direction: Direction) {
        let n = signal.samples();
        let stages = ilog2(n);

        let accuracy = if accuracy > TRIG_ACCURACY_MAX {
            self.trace.line(format_args!(
                "fft: accuracy clamped to {}",
                TRIG_ACCURACY_MAX
            ));
            TRIG_ACCURACY_MAX
        } else {
            accuracy
        };

        if direction == Direction::Forward {
            let real_swing = swing(signal.re);
            if real_swing < SWING_TARGET {
                signal.remove_mean();
                signal.scale2((SWING_TARGET_LOG2 - ilog2(real_swing as usize)) as i32);
            }
        }

        permute_in_place(signal.re);
        if direction == Direction::Reverse {
            permute_in_place(signal.im);
        }

        // Angle span between neighboring butterfly groups; halves every
        // stage: 180, 90, 45 degrees...
        let mut angle_span = HALF_TURN;
        let mut l2 = 1usize;

        for _stage in 0..stages {
            let l1 = l2; // butterfly span, doubles every stage
            l2 <<= 1; // distance between butterflies sharing a weight

            let mut theta = FULL_TURN;
            for j in 0..l1 {
                // all butterflies of this group share the rotation theta
                let mut i = j;
                while i < n {
                    let i1 = i + l1;

                    // Rotate the upper element by theta. The product is
                    // built from four amplitude projections, so no integer
                    // multiplication happens anywhere in the stage.
                    let t = Complex::new(
                        approx_cos_proj_traced(signal.re[i1], theta, accuracy, &mut self.trace)
                            - approx_sin_proj_traced(
                                signal.im[i1],
                                theta,
                                accuracy,
                                &mut self.trace,
                            ),
                        approx_cos_proj_traced(signal.im[i1], theta, accuracy, &mut self.trace)
                            + approx_sin_proj_traced(
                                signal.re[i1],
                                theta,
                                accuracy,
                                &mut self.trace,
                            ),
                    );

                    let lower = Complex::new(signal.re[i], signal.im[i]);
                    let sum = lower + t;
                    let diff = lower - t;

                    signal.re[i] = sum.re;
                    signal.im[i] = sum.im;
                    signal.re[i1] = diff.re;
                    signal.im[i1] = diff.im;

                    i += l2;
                }

                theta = match direction {
                    Direction::Forward => theta - angle_span,
                    Direction::Reverse => theta + angle_span,
                };
            }

            angle_span >>= 1;
        }

        if direction == Direction::Reverse {
            let n = n as i32;
            for x in signal.re.iter_mut() {
                *x /= n;
            }
            for x in signal.im.iter_mut() {
                *x /= n;
            }
        }
    }

    /// Dumps both sample buffers through the trace sink, one line each.
    pub fn dump_signal(&mut self, signal: &Signal<'_>) {
        self.trace.line(format_args!("real = {:?}", signal.re()));
        self.trace.line(format_args!("imag = {:?}", signal.im()));
    }
}

/// Peak-to-peak range of a sample buffer, the fixed-point headroom gauge.
pub(crate) fn swing(v: &[i32]) -> u32 {
    let mut max = v[0];
    let mut min = v[0];

    for &x in &v[1..] {
        if x > max {
            max = x;
        }
        if x < min {
            min = x;
        }
    }

    (i64::from(max) - i64::from(min)) as u32
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
