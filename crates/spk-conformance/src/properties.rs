#![forbid(unsafe_code)]

//! Structural laws every conforming engine pair satisfies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spk_array::{Complex, NumericArray, Shape};
use spk_transform::{
    BackendKind, Normalization, TransformError, TransformKind, TransformOptions, TransformScalar,
    cast, dft_with, fft_with, total_energy,
};

use crate::{CaseResult, ConformanceReport, HarnessConfig, HarnessError, Precision, PropertyKind};

pub(crate) fn to_f64<T: TransformScalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Uniform `[-1, 1)` real parts, zero imaginary parts, reproducible from `seed`.
pub fn random_real_signal<T: TransformScalar>(
    n: usize,
    seed: u64,
) -> Result<NumericArray<Complex<T>>, HarnessError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..n)
        .map(|_| Complex::new(cast(rng.gen_range(-1.0..1.0)), T::zero()))
        .collect();
    Ok(NumericArray::from_vec(Shape::vector(n), data)?)
}

pub(crate) fn backend_of(kind: TransformKind) -> BackendKind {
    match kind {
        TransformKind::Dft | TransformKind::Idft => BackendKind::DirectDft,
        TransformKind::Fft | TransformKind::Ifft => BackendKind::Radix2,
    }
}

/// Run the forward engine named by `kind` into a fresh output array.
pub(crate) fn forward<T: TransformScalar>(
    kind: TransformKind,
    input: &NumericArray<Complex<T>>,
    normalization: Normalization,
) -> Result<NumericArray<Complex<T>>, TransformError> {
    let mut output = NumericArray::new(input.shape().clone(), Complex::zero())?;
    let options = TransformOptions::default().with_normalization(normalization);
    match kind {
        TransformKind::Fft | TransformKind::Ifft => fft_with(input, &mut output, &options)?,
        TransformKind::Dft | TransformKind::Idft => dft_with(input, &mut output, &options)?,
    }
    Ok(output)
}

fn case_id<T>(property: &str, kind: TransformKind, normalization: Normalization) -> String {
    let precision = match Precision::of::<T>() {
        Precision::Single => "f32",
        Precision::Double => "f64",
    };
    format!(
        "{property}_{}_{precision}_{}",
        kind.name(),
        normalization.name()
    )
}

/// Energy conservation: Σ norm(x) against Σ norm(X) rescaled for the
/// normalization (N·Σ under `Forward`, Σ/N under `Backward`, Σ under `Ortho`).
pub fn check_parseval<T: TransformScalar>(
    kind: TransformKind,
    signal: &NumericArray<Complex<T>>,
    normalization: Normalization,
    tolerance: f64,
) -> Result<CaseResult, HarnessError> {
    let out = forward(kind, signal, normalization)?;
    let n = signal.size() as f64;
    let psd_sig = to_f64(total_energy(signal));
    let raw_out = to_f64(total_energy(&out));
    let psd_out = match normalization {
        Normalization::Forward => raw_out * n,
        Normalization::Backward if n > 0.0 => raw_out / n,
        Normalization::Backward | Normalization::Ortho => raw_out,
    };
    let error = (psd_sig - psd_out).abs();
    Ok(CaseResult {
        case_id: case_id::<T>("parseval", kind, normalization),
        property: PropertyKind::Parseval,
        precision: Precision::of::<T>(),
        backend: backend_of(kind),
        normalization,
        passed: error <= tolerance,
        max_error: error,
        tolerance,
        message: format!("psd_sig={psd_sig} psd_out={psd_out}"),
    })
}

/// Relative bound on bin power in the delta check, applied alongside the
/// absolute tolerance (which alone exceeds (1/N)² at f32 tolerances).
pub const DELTA_RTOL: f64 = 1e-3;

/// The impulse `[1, 0, 0, ...]` transforms to equal power in every bin:
/// (1/N)² under `Forward`, 1/N under `Ortho`, 1 under `Backward`.
pub fn check_delta_flatness<T: TransformScalar>(
    kind: TransformKind,
    n: usize,
    normalization: Normalization,
    tolerance: f64,
) -> Result<CaseResult, HarnessError> {
    let mut signal = NumericArray::new(Shape::vector(n), Complex::<T>::zero())?;
    if n > 0 {
        signal[0] = Complex::one();
    }
    let out = forward(kind, &signal, normalization)?;
    let len = n as f64;
    let expected_mag = match normalization {
        Normalization::Forward => 1.0 / (len * len),
        Normalization::Ortho => 1.0 / len,
        Normalization::Backward => 1.0,
    };
    let max_error = out
        .iter()
        .map(|value| (to_f64(value.norm()) - expected_mag).abs())
        .fold(0.0, f64::max);
    let max_relative = if n == 0 { 0.0 } else { max_error / expected_mag };
    Ok(CaseResult {
        case_id: case_id::<T>("delta", kind, normalization),
        property: PropertyKind::DeltaFlatness,
        precision: Precision::of::<T>(),
        backend: backend_of(kind),
        normalization,
        passed: max_error <= tolerance && max_relative <= DELTA_RTOL,
        max_error,
        tolerance,
        message: format!("expected_mag={expected_mag} max_relative={max_relative:.3e}"),
    })
}

/// Element-wise agreement between the radix-2 and direct engines.
pub fn check_fft_dft_agreement<T: TransformScalar>(
    signal: &NumericArray<Complex<T>>,
    normalization: Normalization,
    tolerance: f64,
) -> Result<CaseResult, HarnessError> {
    let fast = forward(TransformKind::Fft, signal, normalization)?;
    let slow = forward(TransformKind::Dft, signal, normalization)?;
    let max_error = fast
        .iter()
        .zip(slow.iter())
        .map(|(&a, &b)| to_f64((a - b).abs()))
        .fold(0.0, f64::max);
    Ok(CaseResult {
        case_id: case_id::<T>("agreement", TransformKind::Fft, normalization),
        property: PropertyKind::FftDftAgreement,
        precision: Precision::of::<T>(),
        backend: BackendKind::Radix2,
        normalization,
        passed: max_error <= tolerance,
        max_error,
        tolerance,
        message: format!("n={}", signal.size()),
    })
}

/// The engine must leave its input bit-for-bit intact.
pub fn check_input_preserved<T: TransformScalar>(
    kind: TransformKind,
    signal: &NumericArray<Complex<T>>,
) -> Result<CaseResult, HarnessError> {
    let snapshot = signal.clone();
    let out = forward(kind, signal, Normalization::Forward)?;
    let preserved = snapshot == *signal && out.size() == signal.size();
    Ok(CaseResult {
        case_id: case_id::<T>("input_preserved", kind, Normalization::Forward),
        property: PropertyKind::InputPreserved,
        precision: Precision::of::<T>(),
        backend: backend_of(kind),
        normalization: Normalization::Forward,
        passed: preserved,
        max_error: 0.0,
        tolerance: 0.0,
        message: format!("wrote {} of {} elements", out.size(), signal.size()),
    })
}

/// Non-power-of-two length every suite run feeds to `fft`.
const REJECTED_LENGTH: usize = 1000;

fn property_cases<T: TransformScalar>(
    config: &HarnessConfig,
) -> Result<Vec<CaseResult>, HarnessError> {
    let tolerance = config.tolerance(Precision::of::<T>());
    let signal = random_real_signal::<T>(config.signal_length, config.seed)?;
    let mut cases = Vec::new();
    for kind in [TransformKind::Fft, TransformKind::Dft] {
        for normalization in [Normalization::Forward, Normalization::Ortho] {
            cases.push(check_parseval(kind, &signal, normalization, tolerance)?);
            cases.push(check_delta_flatness::<T>(
                kind,
                config.signal_length,
                normalization,
                tolerance,
            )?);
        }
        cases.push(check_input_preserved(kind, &signal)?);
    }
    cases.push(check_fft_dft_agreement(
        &signal,
        Normalization::Forward,
        tolerance,
    )?);
    cases.push(check_length_rejection(&random_real_signal::<T>(
        REJECTED_LENGTH,
        config.seed,
    )?)?);
    Ok(cases)
}

/// `fft` must refuse a length that is not a power of two and leave the
/// output buffer exactly as it found it. Fails for power-of-two lengths.
pub fn check_length_rejection<T: TransformScalar>(
    signal: &NumericArray<Complex<T>>,
) -> Result<CaseResult, HarnessError> {
    let n = signal.size();
    let sentinel = Complex::new(cast::<T>(7.0), cast::<T>(-7.0));
    let mut output = NumericArray::new(signal.shape().clone(), sentinel)?;
    let outcome = fft_with(signal, &mut output, &TransformOptions::default());
    let untouched = output.iter().all(|&value| value == sentinel);
    let (rejected, message) = match outcome {
        Err(TransformError::NonPowerOfTwo { len }) => {
            (len == n, format!("fft rejected length {len}; output untouched={untouched}"))
        }
        Err(err) => return Err(err.into()),
        Ok(()) => (false, format!("fft accepted length {n}")),
    };
    Ok(CaseResult {
        case_id: case_id::<T>(
            &format!("length_rejection_{n}"),
            TransformKind::Fft,
            Normalization::Forward,
        ),
        property: PropertyKind::LengthRejection,
        precision: Precision::of::<T>(),
        backend: BackendKind::Radix2,
        normalization: Normalization::Forward,
        passed: rejected && untouched,
        max_error: 0.0,
        tolerance: 0.0,
        message,
    })
}

/// Every property at both precisions over a seeded random signal.
///
/// `signal_length` must be a power of two so the radix-2 engine can run.
pub fn run_property_suite(config: &HarnessConfig) -> Result<ConformanceReport, HarnessError> {
    let mut cases = property_cases::<f32>(config)?;
    cases.extend(property_cases::<f64>(config)?);
    Ok(ConformanceReport::new("properties", config, cases))
}
