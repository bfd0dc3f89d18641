#![forbid(unsafe_code)]

//! Verification harness for the spectrakit transform engines.
//!
//! Every conforming DFT/FFT pair must satisfy the same structural laws:
//! energy conservation under the chosen normalization, a flat spectrum for
//! the unit impulse, element-wise FFT/DFT agreement, and an untouched input.
//! This crate evaluates those laws at both precisions, replays the golden
//! vectors under `fixtures/`, and renders the outcome as a
//! [`ConformanceReport`].

pub mod golden;
pub mod properties;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blake3::hash;
use serde::{Deserialize, Serialize};
use spk_array::ArrayError;
use spk_runtime::now_unix_ms;
use spk_transform::{BackendKind, Normalization, TransformError};
use thiserror::Error;

pub use golden::{GoldenCase, GoldenFixture, load_golden_fixture, run_golden_vectors};
pub use properties::{
    DELTA_RTOL, check_delta_flatness, check_fft_dft_agreement, check_input_preserved,
    check_length_rejection, check_parseval, random_real_signal, run_property_suite,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub fixture_root: PathBuf,
    pub artifact_root: PathBuf,
    pub signal_length: usize,
    pub seed: u64,
    pub single_tolerance: f64,
    pub double_tolerance: f64,
}

impl HarnessConfig {
    #[must_use]
    pub fn default_paths() -> Self {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        Self {
            fixture_root: manifest.join("fixtures"),
            artifact_root: manifest.join("artifacts"),
            signal_length: 1024,
            seed: 0x5eed_1024,
            single_tolerance: 1e-2,
            double_tolerance: 1e-10,
        }
    }

    /// Load a config from JSON; omitted fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, HarnessError> {
        let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn tolerance(&self, precision: Precision) -> f64 {
        match precision {
            Precision::Single => self.single_tolerance,
            Precision::Double => self.double_tolerance,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::default_paths()
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixture load failed for {path}: {source}")]
    FixtureIo { path: PathBuf, source: io::Error },
    #[error("fixture parse failed for {path}: {source}")]
    FixtureParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact write failed for {path}: {source}")]
    ArtifactIo { path: PathBuf, source: io::Error },
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
    #[error("array construction failed: {0}")]
    Array(#[from] ArrayError),
    #[error("golden case `{case_id}` is malformed: {detail}")]
    MalformedCase { case_id: String, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    /// Precision matching the byte width of `T`.
    #[must_use]
    pub fn of<T>() -> Self {
        if std::mem::size_of::<T>() <= 4 {
            Self::Single
        } else {
            Self::Double
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Parseval,
    DeltaFlatness,
    FftDftAgreement,
    InputPreserved,
    GoldenVector,
    LengthRejection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_id: String,
    pub property: PropertyKind,
    pub precision: Precision,
    pub backend: BackendKind,
    pub normalization: Normalization,
    pub passed: bool,
    pub max_error: f64,
    pub tolerance: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub suite: String,
    pub generated_unix_ms: u64,
    pub signal_length: usize,
    pub seed: u64,
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseResult>,
}

impl ConformanceReport {
    #[must_use]
    pub fn new(suite: impl Into<String>, config: &HarnessConfig, cases: Vec<CaseResult>) -> Self {
        let passed = cases.iter().filter(|case| case.passed).count();
        Self {
            suite: suite.into(),
            generated_unix_ms: now_unix_ms(),
            signal_length: config.signal_length,
            seed: config.seed,
            passed,
            failed: cases.len() - passed,
            cases,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|case| !case.passed)
    }

    /// blake3 digest over the case list, independent of the generation time.
    pub fn digest(&self) -> Result<String, HarnessError> {
        let bytes = serde_json::to_vec(&self.cases)?;
        Ok(hash(&bytes).to_hex().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifacts {
    pub report_path: PathBuf,
    pub digest_path: PathBuf,
    pub digest: String,
}

/// Write `report.json` and `report.blake3` under `dir`.
pub fn write_report(
    report: &ConformanceReport,
    dir: &Path,
) -> Result<ReportArtifacts, HarnessError> {
    fs::create_dir_all(dir).map_err(|source| HarnessError::ArtifactIo {
        path: dir.to_path_buf(),
        source,
    })?;
    let report_path = dir.join("report.json");
    let digest_path = dir.join("report.blake3");
    let digest = report.digest()?;
    let body = serde_json::to_vec_pretty(report)?;
    fs::write(&report_path, body).map_err(|source| HarnessError::ArtifactIo {
        path: report_path.clone(),
        source,
    })?;
    fs::write(&digest_path, format!("{digest}\n")).map_err(|source| HarnessError::ArtifactIo {
        path: digest_path.clone(),
        source,
    })?;
    Ok(ReportArtifacts {
        report_path,
        digest_path,
        digest,
    })
}

/// Property suite plus golden vectors in one report.
pub fn run_full_suite(config: &HarnessConfig) -> Result<ConformanceReport, HarnessError> {
    let mut cases = run_property_suite(config)?.cases;
    cases.extend(run_golden_vectors(config)?);
    Ok(ConformanceReport::new("full", config, cases))
}
