#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spk_array::{Complex64, NumericArray, Shape};
use spk_runtime::RuntimeMode;
use spk_transform::{Normalization, TransformOptions, WorkerPolicy, fft_with, ifft_with};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    log2_len: u8,
    normalization: u8,
    workers: u8,
    hardened: bool,
    samples: Vec<(f64, f64)>,
}

fuzz_target!(|input: RoundtripInput| {
    let n = 1usize << (input.log2_len % 11);
    let mut data = vec![Complex64::zero(); n];
    for (slot, &(re, im)) in data.iter_mut().zip(&input.samples) {
        *slot = Complex64::new(re, im);
    }
    let normalization = match input.normalization % 3 {
        0 => Normalization::Forward,
        1 => Normalization::Backward,
        _ => Normalization::Ortho,
    };
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let options = TransformOptions::default()
        .with_mode(mode)
        .with_normalization(normalization)
        .with_workers(WorkerPolicy::Max(usize::from(input.workers % 4)));

    let Ok(signal) = NumericArray::from_vec(Shape::vector(n), data) else {
        return;
    };
    let Ok(mut spectrum) = NumericArray::new(Shape::vector(n), Complex64::zero()) else {
        return;
    };
    let mut back = spectrum.clone();
    if fft_with(&signal, &mut spectrum, &options).is_err() {
        return;
    }
    if ifft_with(&spectrum, &mut back, &options).is_err() {
        return;
    }

    if signal.iter().all(|value| value.is_finite() && value.abs() < 1e100) {
        for (original, restored) in signal.iter().zip(back.iter()) {
            let scale = original.abs().max(1.0);
            assert!(
                (*original - *restored).abs() <= 1e-6 * scale * n as f64,
                "roundtrip drifted: {original} vs {restored}"
            );
        }
    }
});
