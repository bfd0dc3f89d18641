#![forbid(unsafe_code)]

use std::collections::{HashMap, VecDeque};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use spk_array::{ArrayError, Complex, NumericArray};
use spk_runtime::RuntimeMode;

use crate::engine::{BackendKind, Direction, DirectDft, SpectralEngine, TransformScalar, cast};
use crate::plan::{PlanKey, Radix2Plan, touch_plan_cache};
use crate::{Normalization, TransformKind};

/// Worker control policy for transform execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerPolicy {
    /// Use the global rayon pool once the length is large enough.
    #[default]
    Auto,
    /// Require an exact worker count.
    Exact(usize),
    /// Upper-bound worker count.
    Max(usize),
}

/// Common options shared by the transform entrypoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub mode: RuntimeMode,
    pub normalization: Normalization,
    pub workers: WorkerPolicy,
    pub check_finite: bool,
}

impl TransformOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: WorkerPolicy) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    fn should_check_finite(&self) -> bool {
        self.check_finite || self.mode.rejects_non_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    ShapeMismatch { expected: usize, actual: usize },
    InvalidShape { detail: &'static str },
    NonPowerOfTwo { len: usize },
    InvalidWorkers { requested: usize },
    InvalidSampleSpacing,
    NonFiniteInput,
    WorkerPool { detail: String },
    Array(ArrayError),
}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected} elements, got {actual}")
            }
            Self::InvalidShape { detail } => write!(f, "invalid shape: {detail}"),
            Self::NonPowerOfTwo { len } => {
                write!(f, "fft length must be zero or a power of two, got {len}")
            }
            Self::InvalidWorkers { requested } => write!(f, "invalid worker count: {requested}"),
            Self::InvalidSampleSpacing => {
                write!(f, "sample spacing must be finite and greater than zero")
            }
            Self::NonFiniteInput => write!(f, "non-finite input rejected by policy"),
            Self::WorkerPool { detail } => write!(f, "worker pool unavailable: {detail}"),
            Self::Array(err) => write!(f, "array error: {err}"),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Array(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArrayError> for TransformError {
    fn from(err: ArrayError) -> Self {
        Self::Array(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformTrace {
    pub operation_id: String,
    pub kind: TransformKind,
    pub direction: &'static str,
    pub n: usize,
    pub backend: BackendKind,
    pub plan_cache_hit: bool,
    pub parallel: bool,
    pub mode: RuntimeMode,
    pub normalization: Normalization,
    pub timing_ns: u64,
}

impl TransformTrace {
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Oldest traces are dropped past this many undrained entries.
const TRACE_CAPACITY: usize = 4096;

static TRACE_LOG: OnceLock<Mutex<VecDeque<TransformTrace>>> = OnceLock::new();
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

fn trace_log() -> &'static Mutex<VecDeque<TransformTrace>> {
    TRACE_LOG.get_or_init(|| Mutex::new(VecDeque::new()))
}

fn next_operation_id() -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("spk-op-{next:016x}")
}

fn record_trace(trace: TransformTrace) {
    if let Ok(mut log) = trace_log().lock() {
        if log.len() == TRACE_CAPACITY {
            let _ = log.pop_front();
        }
        log.push_back(trace);
    }
}

/// Drain every trace recorded so far, oldest first.
#[must_use]
pub fn take_transform_traces() -> Vec<TransformTrace> {
    if let Ok(mut log) = trace_log().lock() {
        return log.drain(..).collect();
    }
    Vec::new()
}

/// Forward DFT by direct summation, 1/N-normalized.
pub fn dft<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
) -> Result<(), TransformError> {
    dft_with(input, output, &TransformOptions::default())
}

pub fn dft_with<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    validate_pair(input, output)?;
    run_transform(TransformKind::Dft, &DirectDft, input, output, options)
}

/// Inverse DFT by direct summation.
pub fn idft<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
) -> Result<(), TransformError> {
    idft_with(input, output, &TransformOptions::default())
}

pub fn idft_with<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    validate_pair(input, output)?;
    run_transform(TransformKind::Idft, &DirectDft, input, output, options)
}

/// Forward radix-2 FFT, 1/N-normalized. The length must be 0 or a power of two.
pub fn fft<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
) -> Result<(), TransformError> {
    fft_with(input, output, &TransformOptions::default())
}

pub fn fft_with<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    let n = validate_pair(input, output)?;
    let plan = Radix2Plan::new(n)?;
    run_transform(TransformKind::Fft, &plan, input, output, options)
}

/// Inverse radix-2 FFT. The length must be 0 or a power of two.
pub fn ifft<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
) -> Result<(), TransformError> {
    ifft_with(input, output, &TransformOptions::default())
}

pub fn ifft_with<T: TransformScalar>(
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    let n = validate_pair(input, output)?;
    let plan = Radix2Plan::new(n)?;
    run_transform(TransformKind::Ifft, &plan, input, output, options)
}

impl<T: TransformScalar> Radix2Plan<T> {
    /// Run a transform through this plan's tables.
    ///
    /// `direction` selects between [`TransformKind::Fft`] and
    /// [`TransformKind::Ifft`] semantics.
    pub fn execute(
        &self,
        input: &NumericArray<Complex<T>>,
        output: &mut NumericArray<Complex<T>>,
        direction: Direction,
        options: &TransformOptions,
    ) -> Result<(), TransformError> {
        let n = validate_pair(input, output)?;
        if n != self.len() {
            return Err(TransformError::ShapeMismatch {
                expected: self.len(),
                actual: n,
            });
        }
        let kind = match direction {
            Direction::Forward => TransformKind::Fft,
            Direction::Inverse => TransformKind::Ifft,
        };
        run_transform(kind, self, input, output, options)
    }
}

/// Check the input/output pair and return the common length.
fn validate_pair<T>(
    input: &NumericArray<Complex<T>>,
    output: &NumericArray<Complex<T>>,
) -> Result<usize, TransformError> {
    if output.size() != input.size() {
        return Err(TransformError::ShapeMismatch {
            expected: input.size(),
            actual: output.size(),
        });
    }
    if !input.shape().is_vector() || !output.shape().is_vector() {
        return Err(TransformError::InvalidShape {
            detail: "transforms operate on one-dimensional arrays",
        });
    }
    Ok(input.size())
}

fn run_transform<T: TransformScalar>(
    kind: TransformKind,
    engine: &dyn SpectralEngine<T>,
    input: &NumericArray<Complex<T>>,
    output: &mut NumericArray<Complex<T>>,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    let n = input.size();
    validate_workers(options.workers)?;
    validate_finite(input.as_slice(), options)?;
    let execution = resolve_execution(options.workers, n, engine.parallel_threshold())?;

    let key = PlanKey::new(
        kind,
        n,
        options.normalization,
        (std::mem::size_of::<T>() * 8) as u32,
    );
    let plan_cache_hit = touch_plan_cache(&key, std::mem::size_of::<Complex<T>>());

    let direction = kind.direction();
    let started = Instant::now();
    let parallel = !matches!(execution, Execution::Serial);
    match &execution {
        Execution::Serial => {
            engine.transform_unscaled(input.as_slice(), output.as_mut_slice(), direction, false);
        }
        Execution::GlobalPool => {
            engine.transform_unscaled(input.as_slice(), output.as_mut_slice(), direction, true);
        }
        Execution::DedicatedPool(pool) => pool.install(|| {
            engine.transform_unscaled(input.as_slice(), output.as_mut_slice(), direction, true);
        }),
    }
    apply_normalization(output.as_mut_slice(), options.normalization, n, direction);

    record_trace(TransformTrace {
        operation_id: next_operation_id(),
        kind,
        direction: direction.name(),
        n,
        backend: engine.kind(),
        plan_cache_hit,
        parallel,
        mode: options.mode,
        normalization: options.normalization,
        timing_ns: u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX),
    });

    Ok(())
}

enum Execution {
    Serial,
    GlobalPool,
    DedicatedPool(Arc<rayon::ThreadPool>),
}

/// Distinct explicit worker counts whose pools are kept alive.
const POOL_CACHE_CAPACITY: usize = 16;

static WORKER_POOLS: OnceLock<Mutex<HashMap<usize, Arc<rayon::ThreadPool>>>> = OnceLock::new();

/// Pool with exactly `threads` workers, reused across calls. Counts beyond
/// the cache capacity get a fresh pool per call.
fn dedicated_pool(threads: usize) -> Result<Arc<rayon::ThreadPool>, TransformError> {
    let pools = WORKER_POOLS.get_or_init(|| Mutex::new(HashMap::new()));
    if let Ok(cache) = pools.lock()
        && let Some(pool) = cache.get(&threads)
    {
        return Ok(Arc::clone(pool));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map(Arc::new)
        .map_err(|err| TransformError::WorkerPool {
            detail: err.to_string(),
        })?;
    if let Ok(mut cache) = pools.lock()
        && cache.len() < POOL_CACHE_CAPACITY
    {
        return Ok(Arc::clone(cache.entry(threads).or_insert(pool)));
    }
    Ok(pool)
}

fn resolve_execution(
    policy: WorkerPolicy,
    n: usize,
    threshold: usize,
) -> Result<Execution, TransformError> {
    if n < threshold {
        return Ok(Execution::Serial);
    }
    let threads = match policy {
        WorkerPolicy::Auto => {
            return Ok(if rayon::current_num_threads() > 1 {
                Execution::GlobalPool
            } else {
                Execution::Serial
            });
        }
        WorkerPolicy::Exact(count) => count,
        WorkerPolicy::Max(count) => count.min(rayon::current_num_threads()),
    };
    if threads <= 1 {
        return Ok(Execution::Serial);
    }
    dedicated_pool(threads).map(Execution::DedicatedPool)
}

fn validate_workers(policy: WorkerPolicy) -> Result<(), TransformError> {
    match policy {
        WorkerPolicy::Auto => Ok(()),
        WorkerPolicy::Exact(0) | WorkerPolicy::Max(0) => {
            Err(TransformError::InvalidWorkers { requested: 0 })
        }
        WorkerPolicy::Exact(_) | WorkerPolicy::Max(_) => Ok(()),
    }
}

fn validate_finite<T: TransformScalar>(
    input: &[Complex<T>],
    options: &TransformOptions,
) -> Result<(), TransformError> {
    if options.should_check_finite() && input.iter().any(|value| !value.is_finite()) {
        return Err(TransformError::NonFiniteInput);
    }
    Ok(())
}

fn normalization_scale(normalization: Normalization, n: usize, direction: Direction) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let n_as_f64 = n as f64;
    match (normalization, direction) {
        (Normalization::Forward, Direction::Forward)
        | (Normalization::Backward, Direction::Inverse) => 1.0 / n_as_f64,
        (Normalization::Forward, Direction::Inverse)
        | (Normalization::Backward, Direction::Forward) => 1.0,
        (Normalization::Ortho, _) => 1.0 / n_as_f64.sqrt(),
    }
}

fn apply_normalization<T: TransformScalar>(
    data: &mut [Complex<T>],
    normalization: Normalization,
    n: usize,
    direction: Direction,
) {
    let scale = normalization_scale(normalization, n, direction);
    if (scale - 1.0).abs() <= f64::EPSILON {
        return;
    }
    let scale: T = cast(scale);
    for value in data.iter_mut() {
        *value = value.scale(scale);
    }
}

#[cfg(test)]
mod tests {
    use spk_array::{Complex64, NumericArray, Shape};
    use spk_runtime::{RuntimeMode, Tolerance};

    use std::sync::Arc;

    use super::{
        TransformError, TransformOptions, WorkerPolicy, dedicated_pool, dft, dft_with, fft,
        fft_with, idft, ifft, ifft_with, take_transform_traces,
    };
    use crate::engine::Direction;
    use crate::plan::Radix2Plan;
    use crate::{Normalization, TransformKind};

    fn assert_close_complex(actual: Complex64, expected: Complex64, tol: f64) {
        let bound = Tolerance::absolute(tol);
        bound.check("real", actual.real, expected.real);
        bound.check("imag", actual.imag, expected.imag);
    }

    fn signal(values: &[(f64, f64)]) -> NumericArray<Complex64> {
        let data = values
            .iter()
            .map(|&(re, im)| Complex64::new(re, im))
            .collect();
        NumericArray::from_vec(Shape::vector(values.len()), data).expect("signal")
    }

    fn zeros(n: usize) -> NumericArray<Complex64> {
        NumericArray::new(Shape::vector(n), Complex64::zero()).expect("zeros")
    }

    #[test]
    fn options_default_to_strict_forward_mode() {
        let opts = TransformOptions::default();
        assert_eq!(opts.mode, RuntimeMode::Strict);
        assert_eq!(opts.normalization, Normalization::Forward);
        assert_eq!(opts.workers, WorkerPolicy::Auto);
        assert!(!opts.check_finite);
    }

    #[test]
    fn dft_applies_one_over_n_on_forward() {
        let input = signal(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
        let mut output = zeros(4);
        dft(&input, &mut output).expect("dft should succeed");
        assert_close_complex(output[0], Complex64::new(2.5, 0.0), 1e-12);
        assert_close_complex(output[1], Complex64::new(-0.5, 0.5), 1e-12);
        assert_close_complex(output[2], Complex64::new(-0.5, 0.0), 1e-12);
        assert_close_complex(output[3], Complex64::new(-0.5, -0.5), 1e-12);
    }

    #[test]
    fn fft_matches_dft_on_small_signal() {
        let input = signal(&[
            (1.0, 0.0),
            (2.0, -1.0),
            (0.5, 0.25),
            (-3.0, 2.0),
            (0.0, 1.0),
            (4.0, 0.0),
            (-1.0, -1.0),
            (2.5, 0.5),
        ]);
        let mut fast = zeros(8);
        let mut slow = zeros(8);
        fft(&input, &mut fast).expect("fft should succeed");
        dft(&input, &mut slow).expect("dft should succeed");
        for (&lhs, &rhs) in fast.iter().zip(slow.iter()) {
            assert_close_complex(lhs, rhs, 1e-12);
        }
    }

    #[test]
    fn fft_rejects_non_power_of_two_length() {
        let input = zeros(1000);
        let mut output = zeros(1000);
        let err = fft(&input, &mut output).expect_err("1000 is not a power of two");
        assert_eq!(err, TransformError::NonPowerOfTwo { len: 1000 });
        assert!(output.iter().all(|&value| value == Complex64::zero()));
    }

    #[test]
    fn size_mismatch_is_reported_before_length_validity() {
        let input = zeros(8);
        let mut output = zeros(6);
        assert_eq!(
            fft(&input, &mut output),
            Err(TransformError::ShapeMismatch {
                expected: 8,
                actual: 6
            })
        );
        assert_eq!(
            dft(&input, &mut output),
            Err(TransformError::ShapeMismatch {
                expected: 8,
                actual: 6
            })
        );
    }

    #[test]
    fn two_dimensional_arrays_are_rejected() {
        let input = NumericArray::new(Shape::new(&[2, 2]), Complex64::zero()).expect("grid");
        let mut output = input.clone();
        assert!(matches!(
            dft(&input, &mut output),
            Err(TransformError::InvalidShape { .. })
        ));
    }

    #[test]
    fn empty_and_single_sample_transforms_are_total() {
        let empty = zeros(0);
        let mut empty_out = zeros(0);
        fft(&empty, &mut empty_out).expect("empty fft");
        dft(&empty, &mut empty_out).expect("empty dft");
        assert!(empty_out.is_empty());

        let single = signal(&[(3.0, -2.0)]);
        let mut single_out = zeros(1);
        fft(&single, &mut single_out).expect("single fft");
        assert_eq!(single_out[0], Complex64::new(3.0, -2.0));
    }

    #[test]
    fn inverse_round_trip_restores_signal_for_every_normalization() {
        let input = signal(&[(1.0, 0.5), (-2.0, 0.0), (0.25, 1.0), (3.0, -1.5)]);
        for normalization in [
            Normalization::Forward,
            Normalization::Backward,
            Normalization::Ortho,
        ] {
            let opts = TransformOptions::default().with_normalization(normalization);
            let mut spectrum = zeros(4);
            let mut recovered = zeros(4);
            fft_with(&input, &mut spectrum, &opts).expect("fft");
            ifft_with(&spectrum, &mut recovered, &opts).expect("ifft");
            for (&lhs, &rhs) in recovered.iter().zip(input.iter()) {
                assert_close_complex(lhs, rhs, 1e-12);
            }
        }
    }

    #[test]
    fn idft_and_ifft_agree() {
        let spectrum = signal(&[(0.5, 0.0), (0.0, -0.25), (0.125, 0.0), (0.0, 0.25)]);
        let mut direct = zeros(4);
        let mut fast = zeros(4);
        idft(&spectrum, &mut direct).expect("idft");
        ifft(&spectrum, &mut fast).expect("ifft");
        for (&lhs, &rhs) in direct.iter().zip(fast.iter()) {
            assert_close_complex(lhs, rhs, 1e-12);
        }
    }

    #[test]
    fn hardened_mode_rejects_non_finite_input() {
        let input = signal(&[(1.0, 0.0), (f64::NAN, 0.0)]);
        let mut output = zeros(2);
        let opts = TransformOptions::default().with_mode(RuntimeMode::Hardened);
        let err = dft_with(&input, &mut output, &opts).expect_err("hardened rejects NaN");
        assert_eq!(err, TransformError::NonFiniteInput);
    }

    #[test]
    fn strict_mode_propagates_nan() {
        let input = signal(&[(1.0, 0.0), (f64::NAN, 0.0)]);
        let mut output = zeros(2);
        fft(&input, &mut output).expect("strict mode computes");
        assert!(output.iter().all(|value| value.real.is_nan()));
    }

    #[test]
    fn zero_workers_is_rejected() {
        let input = zeros(4);
        let mut output = zeros(4);
        let opts = TransformOptions::default().with_workers(WorkerPolicy::Exact(0));
        assert_eq!(
            fft_with(&input, &mut output, &opts),
            Err(TransformError::InvalidWorkers { requested: 0 })
        );
    }

    #[test]
    fn dedicated_pool_matches_serial_result() {
        let n = 1 << 13;
        let data = (0..n)
            .map(|i| Complex64::new((i % 17) as f64 - 8.0, (i % 5) as f64))
            .collect();
        let input = NumericArray::from_vec(Shape::vector(n), data).expect("signal");
        let mut serial = zeros(n);
        let mut pooled = zeros(n);
        let serial_opts = TransformOptions::default().with_workers(WorkerPolicy::Exact(1));
        let pooled_opts = TransformOptions::default().with_workers(WorkerPolicy::Exact(3));
        fft_with(&input, &mut serial, &serial_opts).expect("serial fft");
        fft_with(&input, &mut pooled, &pooled_opts).expect("pooled fft");
        assert_eq!(serial, pooled);
    }

    #[test]
    fn dedicated_pools_are_reused_per_worker_count() {
        let first = dedicated_pool(3).expect("pool");
        let second = dedicated_pool(3).expect("pool");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.current_num_threads(), 3);
        let other = dedicated_pool(2).expect("pool");
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn plan_execute_reuses_tables_and_checks_length() {
        let plan = Radix2Plan::<f64>::new(4).expect("power of two");
        let input = signal(&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        let mut output = zeros(4);
        plan.execute(
            &input,
            &mut output,
            Direction::Forward,
            &TransformOptions::default(),
        )
        .expect("execute");
        for &bin in output.iter() {
            assert_close_complex(bin, Complex64::new(0.25, 0.0), 1e-15);
        }

        let wrong = zeros(8);
        let mut wrong_out = zeros(8);
        assert_eq!(
            plan.execute(
                &wrong,
                &mut wrong_out,
                Direction::Forward,
                &TransformOptions::default()
            ),
            Err(TransformError::ShapeMismatch {
                expected: 4,
                actual: 8
            })
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: TransformOptions =
            serde_json::from_str(r#"{"normalization":"ortho","workers":{"max":2}}"#)
                .expect("options parse");
        assert_eq!(opts.normalization, Normalization::Ortho);
        assert_eq!(opts.workers, WorkerPolicy::Max(2));
        assert_eq!(opts.mode, RuntimeMode::Strict);
    }

    #[test]
    fn repeated_calls_emit_plan_cache_hits_in_trace() {
        let input = zeros(32);
        let mut output = zeros(32);
        let opts = TransformOptions::default().with_normalization(Normalization::Backward);
        fft_with(&input, &mut output, &opts).expect("first fft");
        fft_with(&input, &mut output, &opts).expect("second fft");

        let traces = take_transform_traces()
            .into_iter()
            .filter(|trace| {
                trace.kind == TransformKind::Fft
                    && trace.n == 32
                    && trace.normalization == Normalization::Backward
            })
            .collect::<Vec<_>>();
        assert!(!traces.is_empty());
        assert!(traces.iter().any(|trace| trace.plan_cache_hit));
        let json = traces[0].to_json_line();
        assert!(json.contains("\"operation_id\""));
        assert!(json.contains("\"backend\":\"radix2\""));
    }

    #[test]
    fn error_display_is_human_readable() {
        assert_eq!(
            TransformError::NonPowerOfTwo { len: 1000 }.to_string(),
            "fft length must be zero or a power of two, got 1000"
        );
    }
}
