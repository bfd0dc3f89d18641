#![forbid(unsafe_code)]

//! Spectral transform engines for spectrakit.
//!
//! Two forward engines share one contract: the direct O(N²) DFT is the
//! reference, and the radix-2 FFT must reproduce it within floating-point
//! tolerance for every power-of-two length. Both read a caller-owned input
//! [`spk_array::NumericArray`] and populate a caller-owned output of the same
//! size. The forward transform carries the 1/N factor by default
//! ([`Normalization::Forward`]).
//!
//! Module boundaries:
//! - `transforms`: entry points, options, errors, trace log
//! - `engine`: the direct and radix-2 kernels behind the entry points,
//!   reachable only through them
//! - `plan`: reusable radix-2 tables and the shared plan-metadata cache
//! - `helpers`: bin frequencies, spectrum shifts, power spectra

pub mod engine;
pub mod helpers;
pub mod plan;
pub mod transforms;

use serde::{Deserialize, Serialize};

pub use engine::{BackendKind, Direction, TransformScalar, cast};
pub use helpers::{fftfreq, fftshift, ifftshift, power_spectrum, total_energy};
pub use plan::{
    CacheAdmissionPolicy, PlanCacheConfig, PlanFingerprint, PlanKey, PlanMetadata, Radix2Plan,
    clear_shared_plan_cache, configure_shared_plan_cache, lookup_shared_plan,
    shared_plan_cache_config, shared_plan_cache_len, store_shared_plan,
};
pub use transforms::{
    TransformError, TransformOptions, TransformTrace, WorkerPolicy, dft, dft_with, fft, fft_with,
    idft, idft_with, ifft, ifft_with, take_transform_traces,
};

/// Where the 1/N factor of a forward/inverse pair is applied.
///
/// `Forward` is the engine's contract: the forward transform is scaled by
/// 1/N and the inverse is unscaled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    #[default]
    Forward,
    Backward,
    Ortho,
}

impl Normalization {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Ortho => "ortho",
        }
    }
}

/// Transform entrypoints, used in plan keys and traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Dft,
    Idft,
    Fft,
    Ifft,
}

impl TransformKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dft => "dft",
            Self::Idft => "idft",
            Self::Fft => "fft",
            Self::Ifft => "ifft",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Dft | Self::Fft => Direction::Forward,
            Self::Idft | Self::Ifft => Direction::Inverse,
        }
    }
}
