//! Energy conservation and impulse flatness for both engines at both
//! precisions, over length-1024 signals.
//!
//! Convention: test_{property}_{engine}_{precision}_{normalization}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spk_array::{Complex, NumericArray, Shape};
use spk_runtime::{TestLogEntry, TestResult, Tolerance};
use spk_transform::{
    Normalization, TransformOptions, TransformScalar, dft_with, fft_with, total_energy,
};

const VN: usize = 1024;
const SEED: u64 = 0x5eed_1024;
/// Relative bound on bin power; the absolute tolerance alone exceeds (1/N)².
const DELTA_RTOL: f64 = 1e-3;

type Engine<T> = fn(
    &NumericArray<Complex<T>>,
    &mut NumericArray<Complex<T>>,
    &TransformOptions,
) -> Result<(), spk_transform::TransformError>;

fn random_real_signal<T: TransformScalar>(seed: u64) -> NumericArray<Complex<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..VN)
        .map(|_| {
            let value: f64 = rng.gen_range(-1.0..1.0);
            Complex::new(T::from(value).expect("cast"), T::zero())
        })
        .collect();
    NumericArray::from_vec(Shape::vector(VN), data).expect("signal")
}

fn unit_impulse<T: TransformScalar>() -> NumericArray<Complex<T>> {
    let mut signal = NumericArray::new(Shape::vector(VN), Complex::zero()).expect("signal");
    signal[0] = Complex::one();
    signal
}

fn transform<T: TransformScalar>(
    engine: Engine<T>,
    signal: &NumericArray<Complex<T>>,
    normalization: Normalization,
) -> NumericArray<Complex<T>> {
    let mut out = NumericArray::new(Shape::vector(VN), Complex::zero()).expect("output");
    let options = TransformOptions::default().with_normalization(normalization);
    engine(signal, &mut out, &options).expect("transform should succeed");
    out
}

fn log_property(test_id: &str, message: String, pass: bool) {
    TestLogEntry::new(test_id, "spk_transform::parseval_delta", message)
        .with_seed(SEED)
        .with_result(TestResult::from_pass(pass))
        .emit();
}

/// Under `Forward` the conserved quantity is Σ norm(x) = N · Σ norm(X);
/// under `Ortho` the two sums are equal.
fn verify_parseval<T: TransformScalar>(
    test_id: &str,
    engine: Engine<T>,
    normalization: Normalization,
    tol: f64,
) {
    let signal = random_real_signal::<T>(SEED);
    let out = transform(engine, &signal, normalization);
    let psd_sig = total_energy(&signal).to_f64().expect("f64");
    let mut psd_out = total_energy(&out).to_f64().expect("f64");
    if normalization == Normalization::Forward {
        psd_out *= VN as f64;
    }
    let pass = (psd_sig - psd_out).abs() <= tol;
    log_property(test_id, format!("psd_sig={psd_sig} psd_out={psd_out}"), pass);
    assert!(pass, "{test_id}: {psd_sig} !~= {psd_out} (tol {tol})");
}

/// Every bin of the transformed impulse carries the same power.
fn verify_delta_function<T: TransformScalar>(
    test_id: &str,
    engine: Engine<T>,
    normalization: Normalization,
    tol: f64,
) {
    let out = transform(engine, &unit_impulse::<T>(), normalization);
    let expected_mag = match normalization {
        Normalization::Forward => 1.0 / (VN as f64 * VN as f64),
        Normalization::Ortho => 1.0 / VN as f64,
        Normalization::Backward => 1.0,
    };
    for (bin, value) in out.iter().enumerate() {
        let mag = value.norm().to_f64().expect("f64");
        assert!(
            (mag - expected_mag).abs() <= tol,
            "{test_id}: bin {bin} has power {mag}, expected {expected_mag}"
        );
        Tolerance::relative(DELTA_RTOL).check(test_id, mag, expected_mag);
        assert!(value.imag.to_f64().expect("f64").abs() <= tol);
    }
    log_property(test_id, format!("expected_mag={expected_mag}"), true);
}

macro_rules! typed_property_suite {
    ($module:ident, $ty:ty, $tol:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn test_parseval_fft_forward() {
                verify_parseval::<$ty>(
                    concat!(stringify!($module), "::parseval_fft_forward"),
                    fft_with::<$ty>,
                    Normalization::Forward,
                    $tol,
                );
            }

            #[test]
            fn test_parseval_dft_forward() {
                verify_parseval::<$ty>(
                    concat!(stringify!($module), "::parseval_dft_forward"),
                    dft_with::<$ty>,
                    Normalization::Forward,
                    $tol,
                );
            }

            #[test]
            fn test_parseval_fft_ortho() {
                verify_parseval::<$ty>(
                    concat!(stringify!($module), "::parseval_fft_ortho"),
                    fft_with::<$ty>,
                    Normalization::Ortho,
                    $tol,
                );
            }

            #[test]
            fn test_parseval_dft_ortho() {
                verify_parseval::<$ty>(
                    concat!(stringify!($module), "::parseval_dft_ortho"),
                    dft_with::<$ty>,
                    Normalization::Ortho,
                    $tol,
                );
            }

            #[test]
            fn test_delta_fft_forward() {
                verify_delta_function::<$ty>(
                    concat!(stringify!($module), "::delta_fft_forward"),
                    fft_with::<$ty>,
                    Normalization::Forward,
                    $tol,
                );
            }

            #[test]
            fn test_delta_dft_forward() {
                verify_delta_function::<$ty>(
                    concat!(stringify!($module), "::delta_dft_forward"),
                    dft_with::<$ty>,
                    Normalization::Forward,
                    $tol,
                );
            }

            #[test]
            fn test_delta_fft_ortho() {
                verify_delta_function::<$ty>(
                    concat!(stringify!($module), "::delta_fft_ortho"),
                    fft_with::<$ty>,
                    Normalization::Ortho,
                    $tol,
                );
            }

            #[test]
            fn test_delta_dft_ortho() {
                verify_delta_function::<$ty>(
                    concat!(stringify!($module), "::delta_dft_ortho"),
                    dft_with::<$ty>,
                    Normalization::Ortho,
                    $tol,
                );
            }
        }
    };
}

typed_property_suite!(single_precision, f32, 1e-2);
typed_property_suite!(double_precision, f64, 1e-10);

#[test]
fn test_delta_forward_magnitude_is_inverse_length_squared() {
    let out = transform(fft_with::<f64>, &unit_impulse::<f64>(), Normalization::Forward);
    let expected = 1.0 / (1024.0 * 1024.0);
    assert!((out[17].norm() - expected).abs() < 1e-18);
    assert!((expected - 9.5367431640625e-7).abs() < 1e-20);
}
