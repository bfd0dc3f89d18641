#![forbid(unsafe_code)]

//! Transform kernels. Every kernel here is unscaled; normalization is
//! applied once by the caller in `transforms`.

use std::f64::consts::TAU;
use std::fmt::Debug;

use num_traits::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use spk_array::Complex;

use crate::plan::Radix2Plan;

/// Element precisions the engines accept (`f32`, `f64`).
pub trait TransformScalar: Float + Send + Sync + Debug + 'static {}

impl<T> TransformScalar for T where T: Float + Send + Sync + Debug + 'static {}

/// Sign of the exponent in the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Inverse => "inverse",
        }
    }

    fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

/// Backends that can serve transform requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    DirectDft,
    Radix2,
}

impl BackendKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DirectDft => "direct_dft",
            Self::Radix2 => "radix2",
        }
    }
}

/// Kernels behind the public entry points, which validate lengths first.
pub(crate) trait SpectralEngine<T: TransformScalar>: Sync {
    fn kind(&self) -> BackendKind;

    /// Smallest length for which splitting work across threads pays off.
    fn parallel_threshold(&self) -> usize;

    /// Write the unscaled transform of `input` into `output`.
    ///
    /// Both slices have the same length (the plan length for radix-2);
    /// callers validate that beforehand.
    fn transform_unscaled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        direction: Direction,
        parallel: bool,
    );
}

/// Reference transform by direct summation.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DirectDft;

impl<T: TransformScalar> SpectralEngine<T> for DirectDft {
    fn kind(&self) -> BackendKind {
        BackendKind::DirectDft
    }

    fn parallel_threshold(&self) -> usize {
        512
    }

    fn transform_unscaled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        direction: Direction,
        parallel: bool,
    ) {
        debug_assert_eq!(input.len(), output.len(), "dft slices differ in length");
        if parallel {
            output
                .par_iter_mut()
                .enumerate()
                .for_each(|(k, out)| *out = dft_bin(input, k, direction));
        } else {
            for (k, out) in output.iter_mut().enumerate() {
                *out = dft_bin(input, k, direction);
            }
        }
    }
}

/// One output bin of the direct transform.
///
/// The phase index `k·n mod N` is advanced incrementally so the angle passed
/// to sin/cos stays within one turn.
fn dft_bin<T: TransformScalar>(input: &[Complex<T>], k: usize, direction: Direction) -> Complex<T> {
    let n = input.len();
    let step = direction.sign() * TAU / n as f64;
    let mut acc = Complex::zero();
    let mut phase_index = 0usize;
    for &value in input {
        let (sin, cos) = (step * phase_index as f64).sin_cos();
        acc += value * Complex::new(cast(cos), cast(sin));
        phase_index += k;
        if phase_index >= n {
            phase_index -= n;
        }
    }
    acc
}

/// Butterfly groups per pass below which a pass stays on one thread.
const MIN_PARALLEL_BLOCKS: usize = 4;

impl<T: TransformScalar> SpectralEngine<T> for Radix2Plan<T> {
    fn kind(&self) -> BackendKind {
        BackendKind::Radix2
    }

    fn parallel_threshold(&self) -> usize {
        4096
    }

    fn transform_unscaled(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        direction: Direction,
        parallel: bool,
    ) {
        let n = self.len();
        debug_assert!(
            input.len() == n && output.len() == n,
            "radix-2 plan of length {n} given slices of {} and {}",
            input.len(),
            output.len()
        );
        for (&value, &target) in input.iter().zip(self.bit_reversal()) {
            output[target] = value;
        }

        let twiddles = self.twiddles();
        let mut half = 1usize;
        while half < n {
            let span = half * 2;
            let stride = n / span;
            if parallel && n / span >= MIN_PARALLEL_BLOCKS {
                output
                    .par_chunks_mut(span)
                    .for_each(|block| butterfly_block(block, half, twiddles, stride, direction));
            } else {
                for block in output.chunks_mut(span) {
                    butterfly_block(block, half, twiddles, stride, direction);
                }
            }
            half = span;
        }
    }
}

/// Combine the two half-length spectra held in `block` in place.
fn butterfly_block<T: TransformScalar>(
    block: &mut [Complex<T>],
    half: usize,
    twiddles: &[Complex<T>],
    stride: usize,
    direction: Direction,
) {
    let (even, odd) = block.split_at_mut(half);
    for (k, (lo, hi)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
        let twiddle = match direction {
            Direction::Forward => twiddles[k * stride],
            Direction::Inverse => twiddles[k * stride].conj(),
        };
        let rotated = twiddle * *hi;
        *hi = *lo - rotated;
        *lo = *lo + rotated;
    }
}

/// Convert an f64 constant to the working precision.
///
/// Never fails for `f32`/`f64`; NaN only for exotic `Float` impls.
#[must_use]
pub fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
