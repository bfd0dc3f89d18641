#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use spk_array::Complex;

use crate::engine::{TransformScalar, cast};
use crate::transforms::TransformError;
use crate::{Normalization, TransformKind};

/// Precomputed tables for a radix-2 transform of one length.
///
/// A plan is immutable once built and can serve any number of calls,
/// concurrently, for arrays of exactly [`Radix2Plan::len`] elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Radix2Plan<T> {
    len: usize,
    bit_reversal: Vec<usize>,
    twiddles: Vec<Complex<T>>,
}

impl<T: TransformScalar> Radix2Plan<T> {
    /// Build tables for length `n`, which must be 0 or a power of two.
    pub fn new(n: usize) -> Result<Self, TransformError> {
        if n != 0 && !n.is_power_of_two() {
            return Err(TransformError::NonPowerOfTwo { len: n });
        }
        Ok(Self {
            len: n,
            bit_reversal: bit_reversal_table(n),
            twiddles: twiddle_table(n),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `bit_reversal()[i]` is the output slot of input sample `i`.
    #[must_use]
    pub fn bit_reversal(&self) -> &[usize] {
        &self.bit_reversal
    }

    /// `exp(-2πi·k/N)` for k in `[0, N/2)`.
    #[must_use]
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }
}

fn bit_reversal_table(n: usize) -> Vec<usize> {
    if n <= 1 {
        return vec![0; n];
    }
    let shift = usize::BITS - n.trailing_zeros();
    (0..n).map(|i| i.reverse_bits() >> shift).collect()
}

fn twiddle_table<T: TransformScalar>(n: usize) -> Vec<Complex<T>> {
    (0..n / 2)
        .map(|k| {
            let (sin, cos) = (-TAU * k as f64 / n as f64).sin_cos();
            Complex::new(cast(cos), cast(sin))
        })
        .collect()
}

/// Admission mode controlling what enters the plan-metadata cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheAdmissionPolicy {
    Disabled,
    #[default]
    AlwaysInsert,
}

/// Stable cache key for planning decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanKey {
    pub kind: TransformKind,
    pub n: usize,
    pub normalization: Normalization,
    pub precision_bits: u32,
}

impl PlanKey {
    #[must_use]
    pub fn new(
        kind: TransformKind,
        n: usize,
        normalization: Normalization,
        precision_bits: u32,
    ) -> Self {
        Self {
            kind,
            n,
            normalization,
            precision_bits,
        }
    }
}

/// Fingerprint describing how a concrete plan decomposes its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFingerprint {
    pub radix_path: Vec<usize>,
    pub estimated_flops: u64,
    pub scratch_bytes: usize,
}

impl PlanFingerprint {
    /// Estimate for `kind` at length `n` with `element_bytes`-wide samples.
    #[must_use]
    pub fn estimate(kind: TransformKind, n: usize, element_bytes: usize) -> Self {
        let n64 = n as u64;
        match kind {
            TransformKind::Dft | TransformKind::Idft => Self {
                radix_path: vec![n.max(1)],
                estimated_flops: n64.saturating_mul(n64).saturating_mul(8),
                scratch_bytes: 0,
            },
            TransformKind::Fft | TransformKind::Ifft => {
                let stages = n.checked_ilog2().unwrap_or(0) as usize;
                Self {
                    radix_path: vec![2; stages],
                    estimated_flops: n64.saturating_mul(stages as u64).saturating_mul(5),
                    scratch_bytes: n
                        .saturating_mul(std::mem::size_of::<usize>())
                        .saturating_add((n / 2).saturating_mul(element_bytes)),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub key: PlanKey,
    pub fingerprint: PlanFingerprint,
}

/// Control-plane configuration for the shared plan-metadata cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanCacheConfig {
    pub capacity: usize,
    pub admission_policy: CacheAdmissionPolicy,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        Self {
            capacity: 128,
            admission_policy: CacheAdmissionPolicy::AlwaysInsert,
        }
    }
}

#[derive(Debug, Default)]
struct SharedPlanCache {
    config: PlanCacheConfig,
    entries: HashMap<PlanKey, PlanMetadata>,
}

static SHARED_PLAN_CACHE: OnceLock<Mutex<SharedPlanCache>> = OnceLock::new();

fn shared_cache() -> &'static Mutex<SharedPlanCache> {
    SHARED_PLAN_CACHE.get_or_init(|| Mutex::new(SharedPlanCache::default()))
}

/// Replace the shared cache configuration and drop every entry.
pub fn configure_shared_plan_cache(config: PlanCacheConfig) {
    if let Ok(mut cache) = shared_cache().lock() {
        cache.config = config;
        cache.entries.clear();
    }
}

#[must_use]
pub fn shared_plan_cache_config() -> PlanCacheConfig {
    shared_cache()
        .lock()
        .map_or_else(|_| PlanCacheConfig::default(), |cache| cache.config.clone())
}

#[must_use]
pub fn lookup_shared_plan(key: &PlanKey) -> Option<PlanMetadata> {
    shared_cache()
        .lock()
        .ok()
        .and_then(|cache| cache.entries.get(key).cloned())
}

/// Insert `metadata` subject to the admission policy; returns whether it was stored.
///
/// A full cache is flushed before the insert.
pub fn store_shared_plan(metadata: PlanMetadata) -> bool {
    let Ok(mut cache) = shared_cache().lock() else {
        return false;
    };
    if cache.config.admission_policy == CacheAdmissionPolicy::Disabled
        || cache.config.capacity == 0
    {
        return false;
    }
    if cache.entries.len() >= cache.config.capacity && !cache.entries.contains_key(&metadata.key)
    {
        cache.entries.clear();
    }
    cache.entries.insert(metadata.key.clone(), metadata);
    true
}

#[must_use]
pub fn shared_plan_cache_len() -> usize {
    shared_cache().lock().map_or(0, |cache| cache.entries.len())
}

pub fn clear_shared_plan_cache() {
    if let Ok(mut cache) = shared_cache().lock() {
        cache.entries.clear();
    }
}

/// Look `key` up, recording fresh metadata on a miss. Returns the hit flag.
pub(crate) fn touch_plan_cache(key: &PlanKey, element_bytes: usize) -> bool {
    if lookup_shared_plan(key).is_some() {
        return true;
    }
    store_shared_plan(PlanMetadata {
        key: key.clone(),
        fingerprint: PlanFingerprint::estimate(key.kind, key.n, element_bytes),
    });
    false
}
