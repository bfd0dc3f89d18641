#![forbid(unsafe_code)]

//! Golden vectors: small transforms computed by hand, replayed through
//! both engines at both precisions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spk_array::{Complex, Complex64, NumericArray, Shape};
use spk_transform::{Normalization, TransformKind, TransformScalar, cast};

use crate::properties::{backend_of, check_length_rejection, forward, to_f64};
use crate::{CaseResult, HarnessConfig, HarnessError, Precision, PropertyKind};

pub const GOLDEN_FIXTURE_FILE: &str = "golden_vectors.json";

/// Single-precision cases are held to this looser absolute tolerance.
const SINGLE_PRECISION_ATOL: f64 = 1e-5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenCase {
    pub case_id: String,
    #[serde(default)]
    pub normalization: Normalization,
    pub input: Vec<Complex64>,
    pub expected: Vec<Complex64>,
    pub atol: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenFixture {
    pub fixture_id: String,
    pub cases: Vec<GoldenCase>,
}

pub fn load_golden_fixture(path: &Path) -> Result<GoldenFixture, HarnessError> {
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replay `golden_vectors.json` from the configured fixture root.
pub fn run_golden_vectors(config: &HarnessConfig) -> Result<Vec<CaseResult>, HarnessError> {
    let fixture = load_golden_fixture(&config.fixture_root.join(GOLDEN_FIXTURE_FILE))?;
    let mut results = Vec::new();
    for case in &fixture.cases {
        if case.input.len() != case.expected.len() {
            return Err(HarnessError::MalformedCase {
                case_id: case.case_id.clone(),
                detail: format!(
                    "input has {} samples but expected has {}",
                    case.input.len(),
                    case.expected.len()
                ),
            });
        }
        results.extend(replay_case::<f64>(case, case.atol)?);
        results.extend(replay_case::<f32>(case, case.atol.max(SINGLE_PRECISION_ATOL))?);
    }
    Ok(results)
}

fn replay_case<T: TransformScalar>(
    case: &GoldenCase,
    tolerance: f64,
) -> Result<Vec<CaseResult>, HarnessError> {
    let n = case.input.len();
    let data: Vec<Complex<T>> = case
        .input
        .iter()
        .map(|value| Complex::new(cast::<T>(value.real), cast::<T>(value.imag)))
        .collect();
    let input = NumericArray::from_vec(Shape::vector(n), data)?;
    let precision = Precision::of::<T>();
    let suffix = match precision {
        Precision::Single => "f32",
        Precision::Double => "f64",
    };

    let mut results = Vec::new();
    for kind in [TransformKind::Dft, TransformKind::Fft] {
        if kind == TransformKind::Fft && n > 0 && !n.is_power_of_two() {
            let mut rejection = check_length_rejection(&input)?;
            rejection.case_id = format!("{}_{}_{suffix}", case.case_id, kind.name());
            rejection.normalization = case.normalization;
            results.push(rejection);
            continue;
        }
        let case_id = format!("{}_{}_{suffix}", case.case_id, kind.name());
        let out = forward(kind, &input, case.normalization)?;
        let max_error = out
            .iter()
            .zip(&case.expected)
            .map(|(actual, expected)| {
                let dr = to_f64(actual.real) - expected.real;
                let di = to_f64(actual.imag) - expected.imag;
                dr.abs().max(di.abs())
            })
            .fold(0.0, f64::max);
        results.push(CaseResult {
            case_id,
            property: PropertyKind::GoldenVector,
            precision,
            backend: backend_of(kind),
            normalization: case.normalization,
            passed: max_error <= tolerance,
            max_error,
            tolerance,
            message: format!("n={n}"),
        });
    }
    Ok(results)
}
