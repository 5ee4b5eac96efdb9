// src/signal.rs

use crate::common::FftError;
use crate::spectrum::approx_magnitude;

/// View over a caller-owned pair of sample buffers (real, imaginary) with
/// fixed-point bookkeeping.
///
/// The view is validated once at construction; every other component of the
/// crate relies on its invariants (equal lengths, power-of-two size >= 2)
/// and performs no further checks. The backing slices are only ever mutated
/// in place while a method runs; dropping the `Signal` leaves them alone.
pub struct Signal<'a> {
    pub(crate) re: &'a mut [i32],
    pub(crate) im: &'a mut [i32],
    scale_pow: i32,
    removed_mean: i32,
}

impl<'a> Signal<'a> {
    /// Wraps two equal-length, power-of-two-length sample buffers.
    pub fn new(re: &'a mut [i32], im: &'a mut [i32]) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::SizeMismatch);
        }
        if re.len() < 2 || !re.len().is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }

        Ok(Self {
            re,
            im,
            scale_pow: 0,
            removed_mean: 0,
        })
    }

    /// Number of samples (a power of two, fixed at construction).
    #[inline]
    pub fn samples(&self) -> usize {
        self.re.len()
    }

    #[inline]
    pub fn re(&self) -> &[i32] {
        self.re
    }

    #[inline]
    pub fn im(&self) -> &[i32] {
        self.im
    }

    /// Net power-of-two scaling applied through `scale2` since construction.
    #[inline]
    pub fn scale_exponent(&self) -> i32 {
        self.scale_pow
    }

    /// Mean subtracted from the real samples by `remove_mean`, tracked
    /// through later `scale2` calls. Zero if the mean was never removed.
    /// The caller adds it back when true signal units are needed.
    #[inline]
    pub fn removed_mean(&self) -> i32 {
        self.removed_mean
    }

    /// Multiplies every sample of both buffers by `2^pow` using arithmetic
    /// shifts, so negative samples keep their sign on the way down.
    /// `pow` must stay within `-31..=31`.
    pub fn scale2(&mut self, pow: i32) {
        self.scale_pow += pow;

        if pow < 0 {
            let shift = -pow as u32;
            for x in self.re.iter_mut() {
                *x >>= shift;
            }
            for x in self.im.iter_mut() {
                *x >>= shift;
            }
            self.removed_mean >>= shift;
        } else if pow > 0 {
            let shift = pow as u32;
            for x in self.re.iter_mut() {
                *x <<= shift;
            }
            for x in self.im.iter_mut() {
                *x <<= shift;
            }
            self.removed_mean <<= shift;
        }
    }

    /// Subtracts the truncating integer mean from the real samples and
    /// returns it. The imaginary buffer is untouched. Recentering a signal
    /// with DC offset lets the dynamic-range estimate see the AC component.
    pub fn remove_mean(&mut self) -> i32 {
        let mut sum: i64 = 0;
        for &x in self.re.iter() {
            sum += i64::from(x);
        }

        let mean = (sum / self.re.len() as i64) as i32;

        for x in self.re.iter_mut() {
            *x -= mean;
        }

        self.removed_mean += mean;
        mean
    }

    /// Fills `out[0..N/2]` with the approximate magnitude of the first half
    /// of the spectrum. The upper half of a real input's spectrum is the
    /// conjugate mirror, so it is never produced.
    pub fn magnitude_estimate(&self, out: &mut [u32]) -> Result<(), FftError> {
        let half = self.samples() >> 1;
        if out.len() < half {
            return Err(FftError::BufferTooSmall);
        }

        for i in 0..half {
            out[i] = approx_magnitude(self.re[i], self.im[i]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let mut re = [0i32; 8];
        let mut im = [0i32; 4];
        assert_eq!(
            Signal::new(&mut re, &mut im).err(),
            Some(FftError::SizeMismatch)
        );
    }

    #[test]
    fn test_new_rejects_non_power_of_two() {
        let mut re = [0i32; 6];
        let mut im = [0i32; 6];
        assert_eq!(
            Signal::new(&mut re, &mut im).err(),
            Some(FftError::NotPowerOfTwo)
        );

        let mut re = [0i32; 1];
        let mut im = [0i32; 1];
        assert_eq!(
            Signal::new(&mut re, &mut im).err(),
            Some(FftError::NotPowerOfTwo)
        );
    }

    #[test]
    fn test_scale2_accumulates_exponent() {
        let mut re = [1i32, -2, 3, -4];
        let mut im = [5i32, -6, 7, -8];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        signal.scale2(3);
        assert_eq!(signal.scale_exponent(), 3);
        assert_eq!(signal.re(), &[8, -16, 24, -32]);
        assert_eq!(signal.im(), &[40, -48, 56, -64]);

        signal.scale2(-1);
        assert_eq!(signal.scale_exponent(), 2);
        assert_eq!(signal.re(), &[4, -8, 12, -16]);
    }

    #[test]
    fn test_scale2_round_trip_is_identity() {
        // No bits shifted out, so scaling up then down restores everything.
        let orig = [100i32, -250, 0, 75];
        let mut re = orig;
        let mut im = [0i32; 4];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        signal.scale2(5);
        signal.scale2(-5);
        assert_eq!(signal.scale_exponent(), 0);
        assert_eq!(signal.re(), &orig);
    }

    #[test]
    fn test_scale2_negative_uses_arithmetic_shift() {
        let mut re = [-8i32, -1];
        let mut im = [0i32, 0];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        signal.scale2(-2);
        // -1 >> 2 stays -1 with a sign-preserving shift
        assert_eq!(signal.re(), &[-2, -1]);
    }

    #[test]
    fn test_remove_mean() {
        let mut re = [10i32, 20, 30, 40];
        let mut im = [1i32, 2, 3, 4];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        let mean = signal.remove_mean();
        assert_eq!(mean, 25);
        assert_eq!(signal.removed_mean(), 25);
        assert_eq!(signal.re(), &[-15, -5, 5, 15]);
        // imag untouched
        assert_eq!(signal.im(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_mean_truncates_toward_zero() {
        let mut re = [1i32, 1, 1, 0];
        let mut im = [0i32; 4];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        // sum = 3, 3 / 4 truncates to 0
        assert_eq!(signal.remove_mean(), 0);
        assert_eq!(signal.re(), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_scale2_tracks_removed_mean() {
        let mut re = [10i32, 20, 30, 40];
        let mut im = [0i32; 4];
        let mut signal = Signal::new(&mut re, &mut im).unwrap();

        signal.remove_mean();
        signal.scale2(2);
        assert_eq!(signal.removed_mean(), 100);
        signal.scale2(-2);
        assert_eq!(signal.removed_mean(), 25);
    }

    #[test]
    fn test_magnitude_estimate_fills_first_half() {
        let mut re = [3i32, 0, 5, 0, 0, 0, 0, 0];
        let mut im = [4i32, 0, 0, 0, 0, 0, 0, 0];
        let signal = Signal::new(&mut re, &mut im).unwrap();

        let mut out = [0u32; 4];
        signal.magnitude_estimate(&mut out).unwrap();
        assert_eq!(out[1], 0);
        assert_eq!(out[2], 5);
        assert_eq!(out[3], 0);
    }

    #[test]
    fn test_magnitude_estimate_checks_buffer() {
        let mut re = [0i32; 8];
        let mut im = [0i32; 8];
        let signal = Signal::new(&mut re, &mut im).unwrap();

        let mut out = [0u32; 3];
        assert_eq!(
            signal.magnitude_estimate(&mut out),
            Err(FftError::BufferTooSmall)
        );
    }
}
